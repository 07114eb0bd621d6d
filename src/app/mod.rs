//! Application Layer
//!
//! Command line parsing and the session loop tying services, state and views
//! together.

pub mod application;
pub mod cli;
