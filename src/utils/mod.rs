//! Utils - Display Helpers

pub mod format;
