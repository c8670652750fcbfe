//! Editor core: state machine, normalization, and the single-writer task.
//!
//! The synchronous pieces live in [`state`], [`loader`], [`validator`], and
//! [`persister`]; [`actor`] wraps them in one owning tokio task so that all
//! mutation and normalization runs serialized.

pub mod actor;
pub mod loader;
pub mod persister;
pub mod state;
pub mod validator;


pub use actor::EditorHandle;
pub use loader::MappedRows;
pub use state::{ProfileEditor, Row};
