//! Questionator: Trivia Question Conversion Library
//!
//! Turns a comma or tab delimited table of trivia questions and answer/value
//! pairs into the game data JSON document consumed by the quiz frontend.

pub mod cli;
pub mod pipeline;
pub mod report;
pub mod utils;
