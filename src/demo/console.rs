//! Console line buffer shown in the running-task view
//!
//! Newest lines go on top, matching how the host's console widget scrolls.
//! Capacity is bounded so a long-running demo cannot grow without limit.

use super::types::TaskEvent;
use std::collections::VecDeque;

pub struct Console {
    lines: VecDeque<String>,
    capacity: usize,
}

impl Console {
    pub fn new(capacity: usize) -> Self {
        Self {
            lines: VecDeque::new(),
            capacity: capacity.max(1),
        }
    }

    /// A console seeded with the welcome line
    pub fn with_welcome(capacity: usize, title: &str) -> Self {
        let mut console = Self::new(capacity);
        console.push(format!("Welcome to {title}"));
        console
    }

    /// Prepend a line, dropping the oldest once over capacity
    pub fn push(&mut self, line: impl Into<String>) {
        self.lines.push_front(line.into());
        while self.lines.len() > self.capacity {
            self.lines.pop_back();
        }
    }

    /// Prepend the human rendering of a task event
    pub fn push_event(&mut self, event: &TaskEvent) {
        self.push(render_event(event));
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Full console text, newest line first
    pub fn contents(&self) -> String {
        let mut text = String::new();
        for line in &self.lines {
            text.push_str(line);
            text.push('\n');
        }
        text
    }
}

fn render_event(event: &TaskEvent) -> String {
    match event {
        TaskEvent::Tick { n, .. } => format!("{n} Background task {n} working..."),
        TaskEvent::Finished { .. } => "Background Task Finished Successfully".to_string(),
        TaskEvent::Canceled { .. } => "Background Task Canceled".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_newest_line_first() {
        let mut console = Console::new(10);
        console.push("first");
        console.push("second");

        assert_eq!(console.contents(), "second\nfirst\n");
    }

    #[test]
    fn test_capacity_drops_oldest() {
        let mut console = Console::new(2);
        console.push("a");
        console.push("b");
        console.push("c");

        assert_eq!(console.len(), 2);
        assert_eq!(console.contents(), "c\nb\n");
    }

    #[test]
    fn test_event_rendering() {
        let mut console = Console::new(10);
        console.push_event(&TaskEvent::tick(3));
        console.push_event(&TaskEvent::finished(3));
        console.push_event(&TaskEvent::canceled(1));

        let text = console.contents();
        assert!(text.contains("3 Background task 3 working..."));
        assert!(text.contains("Background Task Finished Successfully"));
        assert!(text.contains("Background Task Canceled"));
    }

    #[test]
    fn test_welcome_seed() {
        let console = Console::with_welcome(10, "app-demo-extension");
        assert_eq!(console.contents(), "Welcome to app-demo-extension\n");
    }
}
