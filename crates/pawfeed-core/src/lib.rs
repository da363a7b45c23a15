//! Core types and trait definitions for the pawfeed fact feed.
//!
//! This crate is deliberately free of HTTP and UI dependencies.
//! All other crates depend on it; it depends on nothing heavier than serde.

pub mod controller;
pub mod error;
pub mod fact;
pub mod feed;
pub mod source;


pub use error::{Error, Result};
