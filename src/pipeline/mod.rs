//! Pipeline module - reading, parsing and mapping question tables

pub mod error;
pub mod loader;
pub mod mapper;
pub mod model;

pub use error::*;
pub use loader::*;
pub use mapper::*;
pub use model::*;
