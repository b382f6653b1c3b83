use crate::input::EventSource;

use super::{LoopConfig, LoopState};

/// Counters reported when the loop stops.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct LoopStats {
    /// Outer iterations, one drain each.
    pub iterations: u64,
    /// Events taken off the queue.
    pub events: u64,
}

/// Poll-and-drain event loop.
///
/// Nothing is rendered here: the frame was presented before the loop started
/// and is never redrawn.
#[derive(Debug)]
pub struct MainLoop {
    config: LoopConfig,
    state: LoopState,
    stats: LoopStats,
}

impl MainLoop {
    pub fn new(config: LoopConfig) -> Self {
        Self {
            config,
            state: LoopState::Running,
            stats: LoopStats::default(),
        }
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn stats(&self) -> LoopStats {
        self.stats
    }

    /// Runs one outer iteration: takes every queued event until the source
    /// reports empty. Returns the number of events handled.
    ///
    /// The drain does not stop early on a state change; events queued behind a
    /// quit are still consumed.
    pub fn drain<S: EventSource + ?Sized>(&mut self, source: &mut S) -> usize {
        let mut handled = 0;

        while let Some(event) = source.poll_event() {
            let next = self.state.on_event(&event);
            if next != self.state {
                log::info!("{event:?}: {:?} -> {next:?}", self.state);
            } else {
                log::trace!("{event:?} ignored");
            }
            self.state = next;
            handled += 1;
        }

        self.stats.iterations += 1;
        self.stats.events += handled as u64;
        handled
    }

    /// Drains until the state machine stops.
    pub fn run<S: EventSource + ?Sized>(mut self, source: &mut S) -> LoopStats {
        while self.state.is_running() {
            let handled = self.drain(source);
            if handled == 0 {
                if let Some(wait) = self.config.idle_wait {
                    std::thread::sleep(wait);
                }
            }
        }

        log::debug!("main loop stopped: {:?}", self.stats);
        self.stats
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;
    use std::time::Duration;

    use super::*;
    use crate::input::{Event, Keycode};

    /// Scripted source: each inner `Vec` is what one drain will see.
    struct ScriptedSource {
        batches: VecDeque<VecDeque<Event>>,
        polls: usize,
    }

    impl ScriptedSource {
        fn new(batches: Vec<Vec<Event>>) -> Self {
            Self {
                batches: batches.into_iter().map(VecDeque::from).collect(),
                polls: 0,
            }
        }
    }

    impl EventSource for ScriptedSource {
        fn poll_event(&mut self) -> Option<Event> {
            self.polls += 1;
            let batch = self.batches.front_mut()?;
            match batch.pop_front() {
                Some(ev) => Some(ev),
                None => {
                    // End of this drain; the next poll starts the next batch.
                    self.batches.pop_front();
                    None
                }
            }
        }
    }

    // ── drain ─────────────────────────────────────────────────────────────

    #[test]
    fn quit_stops_within_one_drain() {
        let mut source: VecDeque<Event> = VecDeque::from([Event::Quit]);
        let mut main_loop = MainLoop::new(LoopConfig::default());

        assert_eq!(main_loop.drain(&mut source), 1);
        assert_eq!(main_loop.state(), LoopState::Stopped);
    }

    #[test]
    fn drain_consumes_events_queued_after_quit() {
        let mut source = VecDeque::from([Event::Quit, Event::Other, Event::KeyDown(Keycode::A)]);
        let mut main_loop = MainLoop::new(LoopConfig::default());

        assert_eq!(main_loop.drain(&mut source), 3);
        assert!(source.is_empty());
        assert_eq!(main_loop.state(), LoopState::Stopped);
    }

    #[test]
    fn non_stop_key_keeps_running() {
        let mut source = VecDeque::from([Event::KeyDown(Keycode::A), Event::KeyUp(Keycode::A)]);
        let mut main_loop = MainLoop::new(LoopConfig::default());

        main_loop.drain(&mut source);
        assert_eq!(main_loop.state(), LoopState::Running);
    }

    #[test]
    fn empty_drain_counts_an_iteration() {
        let mut source: VecDeque<Event> = VecDeque::new();
        let mut main_loop = MainLoop::new(LoopConfig::default());

        assert_eq!(main_loop.drain(&mut source), 0);
        assert_eq!(main_loop.stats(), LoopStats { iterations: 1, events: 0 });
    }

    // ── run ───────────────────────────────────────────────────────────────

    #[test]
    fn key_a_then_keypad_enter_stops_after_two_events() {
        let mut source = ScriptedSource::new(vec![vec![
            Event::KeyDown(Keycode::A),
            Event::KeyDown(Keycode::KpEnter),
        ]]);

        let stats = MainLoop::new(LoopConfig::default()).run(&mut source);

        assert_eq!(stats, LoopStats { iterations: 1, events: 2 });
        // Two events plus the poll that reported the queue empty.
        assert_eq!(source.polls, 3);
    }

    #[test]
    fn run_spins_over_empty_drains_until_quit() {
        let mut source = ScriptedSource::new(vec![
            vec![Event::Other],
            vec![],
            vec![Event::KeyUp(Keycode::KpEnter)],
            vec![Event::Quit],
        ]);

        let stats = MainLoop::new(LoopConfig::default()).run(&mut source);

        assert_eq!(stats, LoopStats { iterations: 4, events: 3 });
    }

    #[test]
    fn idle_wait_does_not_change_outcome() {
        let mut source = ScriptedSource::new(vec![vec![], vec![Event::Quit]]);
        let config = LoopConfig {
            idle_wait: Some(Duration::from_millis(1)),
        };

        let stats = MainLoop::new(config).run(&mut source);

        assert_eq!(stats, LoopStats { iterations: 2, events: 1 });
    }
}
