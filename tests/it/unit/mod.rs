//! Unit tests for the idea board.

mod dashboard_tests;
mod geometry_tests;
mod perf_tests;
mod snapshot_tests;
mod viewport_tests;
