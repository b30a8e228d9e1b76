//! Greeting counter and message board.

use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::Mutex;

use crate::domain::Greeting;

/// Hands out greetings numbered from 1.
#[derive(Debug, Default)]
pub struct GreetingService {
    counter: AtomicU64,
}

impl GreetingService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the next greeting for `name`
    pub fn greet(&self, name: &str) -> Greeting {
        let id = self.counter.fetch_add(1, Ordering::Relaxed) + 1;
        Greeting {
            id,
            content: format!("Hello, {}!", name),
        }
    }
}

/// Append-only list of words shown on the greeting page.
#[derive(Debug, Default)]
pub struct MessageBoard {
    messages: Mutex<Vec<String>>,
}

impl MessageBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_word(&self, word: impl Into<String>) {
        self.messages.lock().push(word.into());
    }

    /// Every word added so far, oldest first
    pub fn all_messages(&self) -> Vec<String> {
        self.messages.lock().clone()
    }
}
