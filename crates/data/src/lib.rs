//! Loading and validation of rules data.

pub mod load;

pub use load::*;
