//! Equipment Dashboard Client Library
//!
//! Client for a chemical equipment CSV backend: uploads with client-side
//! validation, chart series derived from the current dataset, a paged record
//! table, upload history and PDF report downloads.

pub mod app;
pub mod charts;
pub mod connection;
pub mod constants;
pub mod domain;
pub mod error;
pub mod helpers;
pub mod services;
pub mod state;
pub mod table;
pub mod utils;
pub mod views;
