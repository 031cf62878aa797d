pub mod analyzer;
pub mod config;
pub mod error;
pub mod inference;
pub mod lexicon;
pub mod server;

pub use error::{Error, Result};
