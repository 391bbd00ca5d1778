//! Bounded event queue.
//!
//! The controller records what happened during each operation; the caller
//! drains the queue afterwards.
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌──────────────┐
//! │ CoffeeMaker  │────▶│  EventQueue  │────▶│  EventSink   │
//! │ (producer)   │     │  (32 slots)  │     │  (consumer)  │
//! └──────────────┘     └──────────────┘     └──────────────┘
//! ```
//!
//! When the queue is full the oldest event is dropped, so a caller that
//! never drains still sees the most recent history.

use heapless::Deque;

use crate::app::events::MakerEvent;

/// Maximum number of pending events.
pub const EVENT_QUEUE_CAP: usize = 32;

#[derive(Debug)]
pub struct EventQueue {
    buf: Deque<MakerEvent, EVENT_QUEUE_CAP>,
    dropped: u32,
}

impl EventQueue {
    pub fn new() -> Self {
        Self {
            buf: Deque::new(),
            dropped: 0,
        }
    }

    /// Append an event, evicting the oldest if the queue is full.
    pub fn push(&mut self, event: MakerEvent) {
        if self.buf.is_full() {
            self.buf.pop_front();
            self.dropped = self.dropped.saturating_add(1);
        }
        // Cannot fail: a slot was freed above.
        let _ = self.buf.push_back(event);
    }

    pub fn pop(&mut self) -> Option<MakerEvent> {
        self.buf.pop_front()
    }

    /// Hand every pending event to `handler` in FIFO order.
    pub fn drain(&mut self, mut handler: impl FnMut(MakerEvent)) {
        while let Some(event) = self.pop() {
            handler(event);
        }
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Events evicted because the queue was full.
    pub fn dropped(&self) -> u32 {
        self.dropped
    }
}

impl Default for EventQueue {
    fn default() -> Self {
        Self::new()
    }
}
