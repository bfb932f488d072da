#![forbid(unsafe_code)]

pub mod catalog;
pub mod error;
pub mod model;

pub use error::Error;
