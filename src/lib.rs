//! ATS checker library

pub mod cli;
pub mod config;
pub mod error;
pub mod faq;
pub mod input;
pub mod output;
pub mod processing;

pub use error::{Result, AtsError};
pub use config::Config;
