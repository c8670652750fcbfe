//! # Profile Editor
//!
//! Editing, validation, and persistence core for a daily time-value
//! profile: one 24-hour day of 30-minute slots, each mapped to a single
//! measured value.
//!
//! ## Features
//!
//! - **Grids**: discrete time and value grids driving index-based editing
//! - **Loading**: persisted profiles mapped onto the grids, with off-grid
//!   data snapping to the first slot instead of failing
//! - **Editing**: append, edit, and remove operations over index-based rows
//! - **Normalization**: duplicate collapsing, slot ordering, and day-start
//!   pinning after every mutation
//! - **Persistence**: unit-aware conversion back to the stored format
//!
//! ## Architecture
//!
//! The crate is organized into three logical modules:
//!
//! - [`models`]: grids, units, and the persisted profile representation
//! - [`editor`]: the editor state machine and its single-writer task
//! - [`providers`]: settings and profile storage contracts, with in-memory
//!   and JSON-file backends

pub mod editor;
pub mod models;
pub mod providers;
