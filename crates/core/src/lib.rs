#![forbid(unsafe_code)]

pub mod content;
pub mod error;
pub mod highlight;
pub mod model;
pub mod runner;

pub use content::{ContentError, ContentRegistry};
pub use error::Error;
