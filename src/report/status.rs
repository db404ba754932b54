//! Status channels.
//!
//! A status channel is where a finished report goes. The host reads it after
//! the check returns. Channels keep only the latest report.

/// A destination for status reports.
pub trait StatusChannel {
    /// Replace the channel contents with `report`.
    fn publish(&mut self, report: &str);
}

impl<F: FnMut(&str)> StatusChannel for F {
    fn publish(&mut self, report: &str) {
        self(report)
    }
}

/// A single-slot channel. Each publish overwrites the previous report.
#[derive(Debug, Clone, Default)]
pub struct StatusSlot {
    value: Option<String>,
    writes: usize,
}

impl StatusSlot {
    /// Create an empty slot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a slot that already holds a value.
    pub fn with_value(value: impl Into<String>) -> Self {
        Self {
            value: Some(value.into()),
            writes: 0,
        }
    }

    /// The current contents.
    pub fn get(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// Take the contents, leaving the slot empty.
    pub fn take(&mut self) -> Option<String> {
        self.value.take()
    }

    /// How many reports have been published to this slot.
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl StatusChannel for StatusSlot {
    fn publish(&mut self, report: &str) {
        self.value = Some(report.to_string());
        self.writes += 1;
    }
}
