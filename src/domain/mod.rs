//! Domain - Pure Data Structures
//!
//! Shapes of the data exchanged with the backend. Nothing here performs I/O.

pub mod dataset;
pub mod equipment;
pub mod history;
pub mod timestamp;
pub mod upload;

pub use dataset::*;
pub use equipment::*;
pub use history::*;
pub use timestamp::parse_timestamp;
pub use upload::*;
