use std::collections::VecDeque;

use super::Event;

/// Non-blocking event queue.
///
/// `poll_event` returns the next queued event, or `None` once the queue is
/// drained. It must never block.
pub trait EventSource {
    fn poll_event(&mut self) -> Option<Event>;
}

impl EventSource for VecDeque<Event> {
    fn poll_event(&mut self) -> Option<Event> {
        self.pop_front()
    }
}

impl<S: EventSource + ?Sized> EventSource for &mut S {
    fn poll_event(&mut self) -> Option<Event> {
        (**self).poll_event()
    }
}
