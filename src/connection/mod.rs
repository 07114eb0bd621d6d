//! Connection Management
//!
//! Backend configuration and its persistence.

mod config;

pub use config::*;
