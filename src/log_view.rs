use chrono::Local;

const MAX_ENTRIES: usize = 200;

/// In-UI diagnostic pane. Holds the most recent entries only; full
/// detail goes to the log file.
#[derive(Debug, Default)]
pub struct LogView {
    pub entries: Vec<String>,
}

impl LogView {
    pub fn new() -> Self {
        LogView::default()
    }

    pub fn add(&mut self, entry: impl Into<String>) {
        let stamped = format!("{} {}", Local::now().format("%H:%M:%S"), entry.into());
        self.entries.push(stamped);
        if self.entries.len() > MAX_ENTRIES {
            self.entries.remove(0);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_caps_the_entry_count() {
        let mut view = LogView::new();
        for i in 0..(MAX_ENTRIES + 25) {
            view.add(format!("entry {i}"));
        }
        assert_eq!(view.entries.len(), MAX_ENTRIES);
        assert!(view.entries.last().unwrap().ends_with("entry 224"));
    }
}
