//! Provider layer: the editor's settings and storage boundary.
//!
//! The editor talks to the outside world through two narrow contracts:
//! [`SettingsProvider`] supplies the active measurement unit and
//! [`ProfileProvider`] loads/stores the persisted profile. Implementations
//! can be swapped without touching the editor:
//!
//! - `local`: in-memory store for unit testing and local development
//! - `file`: JSON-file store persisting the profile to disk
//!
//! `factory` selects and constructs a backend from environment variables or
//! a TOML configuration file.

#[cfg(not(any(feature = "local-store", feature = "file-store")))]
compile_error!("Enable at least one profile store feature.");

pub mod error;
pub mod factory;
#[cfg(feature = "file-store")]
pub mod file;
#[cfg(feature = "local-store")]
pub mod local;
pub mod provider;
pub mod store_config;

pub use error::{ProviderError, ProviderResult};
pub use factory::{ProviderFactory, ProviderType};
#[cfg(feature = "file-store")]
pub use file::JsonFileProvider;
#[cfg(feature = "local-store")]
pub use local::LocalProvider;
pub use provider::{ProfileProvider, SettingsProvider, StaticSettings};
pub use store_config::StoreConfig;
