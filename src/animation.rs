//! Fixed-interval animation timer
//!
//! egui has no timer callbacks, so the host polls the ticker once per frame
//! and asks for a repaint when the next tick is due. Like a platform UI
//! timer, intervals missed while the app was busy collapse into a single
//! tick rather than firing in a burst.

use std::time::{Duration, Instant};

/// Reference tick interval
pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(1000);

/// Shortest interval the settings accept
pub const MIN_INTERVAL: Duration = Duration::from_millis(50);

/// Longest interval the settings accept
pub const MAX_INTERVAL: Duration = Duration::from_millis(5000);

/// Timer state
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum TickerState {
    /// Constructed, not ticking
    Idle,
    /// Ticking; holds the instant the next tick is due
    Animating { next_due: Instant },
}

/// Polled fixed-interval timer
#[derive(Clone, Debug)]
pub struct Ticker {
    interval: Duration,
    state: TickerState,
}

impl Ticker {
    /// Create a ticker, optionally already running from `now`
    pub fn new(interval: Duration, autostart: bool, now: Instant) -> Self {
        let mut ticker = Self {
            interval,
            state: TickerState::Idle,
        };
        if autostart {
            ticker.start(now);
        }
        ticker
    }

    pub fn is_running(&self) -> bool {
        matches!(self.state, TickerState::Animating { .. })
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Change the interval
    ///
    /// A running ticker reschedules its next tick one new interval from
    /// `now`.
    pub fn set_interval(&mut self, interval: Duration, now: Instant) {
        self.interval = interval;
        if self.is_running() {
            self.state = TickerState::Animating {
                next_due: now + interval,
            };
        }
    }

    /// Begin ticking; the first tick is one interval after `now`
    ///
    /// Starting an already running ticker does nothing.
    pub fn start(&mut self, now: Instant) {
        if self.is_running() {
            return;
        }
        log::info!("Animation started ({} ms interval)", self.interval.as_millis());
        self.state = TickerState::Animating {
            next_due: now + self.interval,
        };
    }

    pub fn stop(&mut self) {
        if self.is_running() {
            log::info!("Animation stopped");
        }
        self.state = TickerState::Idle;
    }

    pub fn toggle(&mut self, now: Instant) {
        if self.is_running() {
            self.stop();
        } else {
            self.start(now);
        }
    }

    /// Returns true if a tick is due at `now`
    ///
    /// At most one tick is reported per call. The next tick is scheduled
    /// one interval after the missed deadline, or after `now` if the
    /// ticker fell more than an interval behind.
    pub fn poll(&mut self, now: Instant) -> bool {
        let TickerState::Animating { next_due } = self.state else {
            return false;
        };
        if now < next_due {
            return false;
        }

        let mut next = next_due + self.interval;
        if next <= now {
            next = now + self.interval;
        }
        self.state = TickerState::Animating { next_due: next };
        true
    }

    /// Time remaining until the next tick, if animating
    pub fn until_next(&self, now: Instant) -> Option<Duration> {
        match self.state {
            TickerState::Idle => None,
            TickerState::Animating { next_due } => Some(next_due.saturating_duration_since(now)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECOND: Duration = Duration::from_secs(1);

    #[test]
    fn test_idle_never_ticks() {
        let t0 = Instant::now();
        let mut ticker = Ticker::new(SECOND, false, t0);

        assert!(!ticker.is_running());
        assert!(!ticker.poll(t0 + SECOND * 10));
        assert_eq!(ticker.until_next(t0), None);
    }

    #[test]
    fn test_autostart_ticks_after_interval() {
        let t0 = Instant::now();
        let mut ticker = Ticker::new(SECOND, true, t0);

        assert!(ticker.is_running());
        assert!(!ticker.poll(t0 + Duration::from_millis(999)));
        assert!(ticker.poll(t0 + SECOND));
        assert!(!ticker.poll(t0 + SECOND));
        assert!(ticker.poll(t0 + SECOND * 2));
    }

    #[test]
    fn test_manual_start() {
        let t0 = Instant::now();
        let mut ticker = Ticker::new(SECOND, false, t0);

        let t1 = t0 + SECOND * 5;
        ticker.start(t1);
        assert!(!ticker.poll(t1 + Duration::from_millis(500)));
        assert!(ticker.poll(t1 + SECOND));
    }

    #[test]
    fn test_missed_intervals_coalesce() {
        let t0 = Instant::now();
        let mut ticker = Ticker::new(SECOND, true, t0);

        let late = t0 + SECOND * 5 + Duration::from_millis(200);
        assert!(ticker.poll(late));
        assert!(!ticker.poll(late));
        assert_eq!(ticker.until_next(late), Some(SECOND));
    }

    #[test]
    fn test_slightly_late_tick_keeps_cadence() {
        let t0 = Instant::now();
        let mut ticker = Ticker::new(SECOND, true, t0);

        let late = t0 + Duration::from_millis(1100);
        assert!(ticker.poll(late));
        assert_eq!(ticker.until_next(late), Some(Duration::from_millis(900)));
    }

    #[test]
    fn test_stop_and_toggle() {
        let t0 = Instant::now();
        let mut ticker = Ticker::new(SECOND, true, t0);

        ticker.stop();
        assert!(!ticker.is_running());
        assert!(!ticker.poll(t0 + SECOND * 3));

        ticker.toggle(t0 + SECOND * 3);
        assert!(ticker.is_running());
        assert!(ticker.poll(t0 + SECOND * 4));

        ticker.toggle(t0 + SECOND * 4);
        assert!(!ticker.is_running());
    }

    #[test]
    fn test_start_while_running_keeps_schedule() {
        let t0 = Instant::now();
        let mut ticker = Ticker::new(SECOND, true, t0);

        ticker.start(t0 + Duration::from_millis(800));
        assert!(ticker.poll(t0 + SECOND));
    }

    #[test]
    fn test_set_interval_reschedules() {
        let t0 = Instant::now();
        let mut ticker = Ticker::new(SECOND, true, t0);

        let t1 = t0 + Duration::from_millis(500);
        ticker.set_interval(Duration::from_millis(250), t1);
        assert_eq!(ticker.interval(), Duration::from_millis(250));
        assert_eq!(ticker.until_next(t1), Some(Duration::from_millis(250)));
        assert!(ticker.poll(t1 + Duration::from_millis(250)));
    }
}
