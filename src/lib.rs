//! Fetch a word from Urban Dictionary, print it, and optionally mail it
//! through Mailgun.

pub mod commands;
pub mod config;
pub mod error;
pub mod mailer;
pub mod render;
pub mod select;
pub mod urbandict;

pub use error::{Error, Result};
