//! NoticeState - User-visible messages with a ring buffer

use chrono::{DateTime, Local};
use std::collections::VecDeque;

use crate::constants::NOTICE_CAPACITY;

/// Severity of a notice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Success,
    Error,
}

impl NoticeLevel {
    pub fn label(&self) -> &'static str {
        match self {
            NoticeLevel::Info => "INFO",
            NoticeLevel::Success => "OK",
            NoticeLevel::Error => "ERROR",
        }
    }
}

/// A single notice
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub id: u64,
    pub level: NoticeLevel,
    pub message: String,
    pub timestamp: DateTime<Local>,
}

/// Bounded list of notices, oldest evicted first
#[derive(Debug, Clone, PartialEq)]
pub struct NoticeLog {
    entries: VecDeque<Notice>,
    capacity: usize,
    next_id: u64,
}

impl NoticeLog {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity.min(1024)),
            capacity,
            next_id: 1,
        }
    }

    /// Push a notice with the current timestamp
    pub fn push(&mut self, level: NoticeLevel, message: impl Into<String>) {
        if self.capacity == 0 {
            return;
        }
        let entry = Notice {
            id: self.next_id,
            level,
            message: message.into(),
            timestamp: Local::now(),
        };
        self.next_id += 1;

        if self.entries.len() >= self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
    }

    pub fn entries(&self) -> &VecDeque<Notice> {
        &self.entries
    }

    pub fn latest(&self) -> Option<&Notice> {
        self.entries.back()
    }

    /// Notices newer than `id`
    pub fn since(&self, id: u64) -> impl Iterator<Item = &Notice> {
        self.entries.iter().filter(move |n| n.id > id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for NoticeLog {
    fn default() -> Self {
        Self::new(NOTICE_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn evicts_oldest() {
        let mut log = NoticeLog::new(2);
        log.push(NoticeLevel::Info, "one");
        log.push(NoticeLevel::Info, "two");
        log.push(NoticeLevel::Error, "three");

        let messages: Vec<_> = log.entries().iter().map(|n| n.message.as_str()).collect();
        assert_eq!(messages, vec!["two", "three"]);
        assert_eq!(log.latest().map(|n| n.id), Some(3));
    }

    #[test]
    fn since_filters_by_id() {
        let mut log = NoticeLog::default();
        log.push(NoticeLevel::Info, "a");
        log.push(NoticeLevel::Success, "b");
        let newer: Vec<_> = log.since(1).map(|n| n.message.clone()).collect();
        assert_eq!(newer, vec!["b"]);
    }

    #[test]
    fn zero_capacity_keeps_nothing() {
        let mut log = NoticeLog::new(0);
        log.push(NoticeLevel::Info, "dropped");
        assert!(log.is_empty());
    }
}
