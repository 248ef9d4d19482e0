//! Safe SQL builder: identifiers are fixed column names, values are bound parameters.

mod builder;
pub mod params;
pub use builder::*;
pub use params::*;
