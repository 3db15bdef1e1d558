//! Single test binary entry point.
//!
//! This consolidates all tests into a single binary following matklad's best practices,
//! reducing linking overhead.
//!
//! Structure:
//! - helpers: board builder and pointer-event shorthands
//! - integration: multi-component workflow and gesture scenarios
//! - unit: single-component unit tests

mod helpers;
mod unit;
