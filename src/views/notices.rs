//! Notices - Recent messages

use crate::state::{Notice, NoticeLog};

pub fn render_notice(notice: &Notice) -> String {
    format!(
        "[{}] {:<5} {}",
        notice.timestamp.format("%H:%M:%S"),
        notice.level.label(),
        notice.message
    )
}

/// Notices newer than `since`, one per line
pub fn render_notices(log: &NoticeLog, since: u64) -> String {
    log.since(since)
        .map(|n| format!("{}\n", render_notice(n)))
        .collect()
}
