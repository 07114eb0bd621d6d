//! Tokio Runtime Bridge
//!
//! The dashboard front end is synchronous; backend calls run on a shared
//! tokio runtime and report back over the event channel.
//!
//! ## Pattern
//!
//! ```text
//! ServiceHub::load_history()
//!       │
//!       ▼
//! spawn_named_in_tokio("history", async { ... })
//!       │
//!       ▼
//! ServiceEvent ──► crossbeam channel ──► DashboardState::reduce
//! ```

use std::future::Future;
use std::sync::OnceLock;
use tokio::runtime::Runtime;

/// Global tokio runtime instance
static TOKIO_RUNTIME: OnceLock<Runtime> = OnceLock::new();

/// Get or initialize the global tokio runtime
fn get_runtime() -> &'static Runtime {
    TOKIO_RUNTIME.get_or_init(|| Runtime::new().expect("Failed to create tokio runtime"))
}

/// Spawn a detached task with a name (for debugging)
pub fn spawn_named_in_tokio<F>(name: &'static str, future: F)
where
    F: Future<Output = ()> + Send + 'static,
{
    tracing::debug!("Spawning tokio task: {}", name);
    get_runtime().spawn(async move {
        future.await;
        tracing::debug!("Tokio task completed: {}", name);
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_named_in_tokio() {
        let (tx, rx) = crossbeam_channel::bounded(1);

        spawn_named_in_tokio("test", async move {
            let _ = tx.send(42);
        });

        let value = rx
            .recv_timeout(std::time::Duration::from_secs(5))
            .expect("task ran");
        assert_eq!(value, 42);
    }
}
