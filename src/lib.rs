//! Idea board core.
//!
//! An infinite pannable/zoomable canvas of sticky notes and ink strokes,
//! grouped by job tags. The interesting part is [`input`], the pointer and
//! gesture arbiter that turns one stream of platform events into pan, draw,
//! note drag/resize and two-finger pinch without conflicts. Everything else
//! is the store it mutates and the collaborators around it:
//!
//! - [`board`] - the entity store and its typed change events
//! - [`viewport`], [`geometry`] - screen/world transform math
//! - [`hit_testing`], [`spatial_index`] - topmost note / stroke lookup
//! - [`persistence`] - snapshot backends and debounced sync
//! - [`transfer`] - export/import documents
//! - [`suggest`] - background AI brainstorm requests
//! - [`dashboard`] - task progress and search
//! - [`session`] - wires the above together for a host window

pub mod board;
pub mod constants;
pub mod dashboard;
pub mod error;
pub mod geometry;
pub mod hit_testing;
pub mod input;
pub mod logging;
pub mod perf;
pub mod persistence;
pub mod session;
pub mod settings;
pub mod spatial_index;
pub mod suggest;
pub mod transfer;
pub mod types;
pub mod viewport;
