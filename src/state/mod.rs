//! State Management Layer
//!
//! Follows a unidirectional data flow pattern:
//!
//! ```text
//! User command → ServiceHub call → Action::Requested
//!                      │
//!                      ▼
//!               ServiceEvent → Action::Service → reduce → new DashboardState → views
//! ```

pub mod dashboard_state;
pub mod history_state;
pub mod notice_state;

pub use dashboard_state::*;
pub use history_state::*;
pub use notice_state::*;
