pub mod grid;
pub mod profile;
pub mod units;

pub use grid::*;
pub use profile::*;
pub use units::*;
