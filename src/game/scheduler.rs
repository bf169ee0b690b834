//! Cooperative tick timer
//!
//! The frame loop polls the scheduler once per frame with the current
//! time. A single slot holds the time base, so re-arming always replaces
//! the previous schedule instead of starting a second one.

#[derive(Debug, Clone, Copy, PartialEq)]
enum Slot {
    Idle,
    /// Armed; the next poll sets the time base
    Armed,
    Running { last_tick_ms: f64 },
}

#[derive(Debug, Clone)]
pub struct TickScheduler {
    interval_ms: f64,
    slot: Slot,
}

impl TickScheduler {
    pub fn new(interval_ms: u32) -> Self {
        Self { interval_ms: interval_ms as f64, slot: Slot::Idle }
    }

    pub fn interval_ms(&self) -> u32 {
        self.interval_ms as u32
    }

    pub fn set_interval(&mut self, interval_ms: u32) {
        self.interval_ms = interval_ms as f64;
    }

    /// Drop whatever was scheduled and start over from the next poll
    pub fn arm(&mut self) {
        self.slot = Slot::Armed;
    }

    pub fn cancel(&mut self) {
        self.slot = Slot::Idle;
    }

    pub fn is_armed(&self) -> bool {
        self.slot != Slot::Idle
    }

    /// True when a tick is due. Fires at most once per call; the part of
    /// the elapsed time past the last whole interval carries over.
    pub fn poll(&mut self, now_ms: f64) -> bool {
        match self.slot {
            Slot::Idle => false,
            Slot::Armed => {
                self.slot = Slot::Running { last_tick_ms: now_ms };
                false
            }
            Slot::Running { last_tick_ms } => {
                let elapsed = now_ms - last_tick_ms;
                if elapsed < self.interval_ms {
                    return false;
                }
                self.slot = Slot::Running { last_tick_ms: now_ms - elapsed % self.interval_ms };
                true
            }
        }
    }
}
