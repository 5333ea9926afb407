//! Repeating fixed-period ticker
//!
//! Sleeps until the next deadline and hands the callback the wall-clock time
//! since the ticker started. There is no catch-up: if a tick overruns (or the
//! callback blocks on an announcement), the schedule restarts from now
//! instead of firing a burst.

use std::ops::ControlFlow;
use std::thread;
use std::time::{Duration, Instant};

#[derive(Debug)]
pub struct FixedTicker {
    interval: Duration,
    start: Instant,
    next: Instant,
    ticks: u64,
}

impl FixedTicker {
    pub fn new(interval: Duration) -> Self {
        let start = Instant::now();
        Self {
            interval,
            start,
            next: start + interval,
            ticks: 0,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Ticks fired so far
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Time since the ticker was created
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// Block until the next deadline, then return the elapsed time
    pub fn wait(&mut self) -> Duration {
        let now = Instant::now();
        if now < self.next {
            thread::sleep(self.next - now);
            self.next += self.interval;
        } else {
            self.next = now + self.interval;
        }
        self.ticks += 1;
        self.elapsed()
    }

    /// Fire `on_tick` every interval until it returns `Break`
    pub fn run<B, F>(&mut self, mut on_tick: F) -> B
    where
        F: FnMut(Duration) -> ControlFlow<B>,
    {
        loop {
            let now = self.wait();
            if let ControlFlow::Break(value) = on_tick(now) {
                log::debug!("Ticker cancelled after {} ticks", self.ticks);
                return value;
            }
        }
    }
}
