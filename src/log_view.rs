use crate::constants::MAX_LOG_ENTRIES;
use chrono::Local;
use std::collections::VecDeque;

/// In-app diagnostics panel, the terminal stand-in for a browser console.
#[derive(Debug)]
pub struct LogView {
    pub entries: VecDeque<String>,
    pub scroll_offset: u16,
}

impl LogView {
    pub fn new() -> Self {
        Self {
            entries: VecDeque::new(),
            scroll_offset: 0,
        }
    }

    pub fn add(&mut self, entry: impl AsRef<str>) {
        self.entries
            .push_back(format!("{} {}", Local::now().format("%H:%M:%S"), entry.as_ref()));
        if self.entries.len() > MAX_LOG_ENTRIES {
            self.entries.pop_front();
        }
    }

    pub fn last(&self) -> Option<&str> {
        self.entries.back().map(String::as_str)
    }
}

impl Default for LogView {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_view_is_bounded() {
        let mut logs = LogView::new();
        for i in 0..MAX_LOG_ENTRIES + 5 {
            logs.add(format!("entry {}", i));
        }
        assert_eq!(logs.entries.len(), MAX_LOG_ENTRIES);
        assert!(logs.entries.front().unwrap().ends_with("entry 5"));
        assert!(logs.last().unwrap().ends_with(&format!("entry {}", MAX_LOG_ENTRIES + 4)));
    }
}
