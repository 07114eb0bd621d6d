//! Service Layer
//!
//! The service layer wraps the external backend and handles async
//! operations, request sequencing and report persistence.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      ServiceHub                             │
//! │  ┌─────────────┐  ┌──────────────┐  ┌──────────────────┐    │
//! │  │  Backend    │  │ tokio runtime│  │  report saving   │    │
//! │  │ (ApiClient) │  │   (tasks)    │  │   (PDF files)    │    │
//! │  └─────────────┘  └──────────────┘  └──────────────────┘    │
//! └─────────────────────────────────────────────────────────────┘
//!                            │
//!                            ▼ ServiceEvent (tagged with RequestId)
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      State Layer                            │
//! │                  (DashboardState::reduce)                   │
//! └─────────────────────────────────────────────────────────────┘
//! ```

mod api;
mod events;
mod hub;
mod report;
mod runtime;

pub use api::*;
pub use events::*;
pub use hub::*;
pub use report::*;
pub use runtime::*;
