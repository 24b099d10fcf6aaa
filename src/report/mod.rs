//! Report module - exporting converted game data

pub mod gamedata_export;
pub mod summary;

pub use gamedata_export::*;
pub use summary::*;
