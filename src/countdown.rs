//! Countdown state machine, independent of any UI or timer source.
//!
//! The component owning a `Countdown` is responsible for scheduling the
//! once-per-second tick while `is_running()` and for dropping the
//! schedule when a tick reports [`TickOutcome::Expired`].

/// Result of advancing the countdown by one second.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// Time remains; keep ticking.
    Running,
    /// The countdown just hit zero; stop ticking and notify the user.
    Expired,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Countdown {
    remaining: u32,
    running: bool,
}

impl Countdown {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Loads a new duration and stops any countdown in progress.
    /// Valid from every state.
    pub fn set(&mut self, duration: u32) {
        self.running = false;
        self.remaining = duration;
    }

    /// Attempts to start the countdown. Returns `true` when the caller
    /// should schedule the recurring tick; starting while already
    /// running or with nothing on the clock is a silent no-op.
    pub fn start(&mut self) -> bool {
        if self.running || self.remaining == 0 {
            return false;
        }
        self.running = true;
        true
    }

    /// Stops the countdown without touching the remaining time.
    /// Idempotent.
    pub fn pause(&mut self) {
        self.running = false;
    }

    /// Stops the countdown and clears the clock back to zero.
    pub fn reset(&mut self) {
        self.running = false;
        self.remaining = 0;
    }

    /// Advances by one second. A stale tick arriving at zero reports
    /// `Expired` without underflowing.
    pub fn tick(&mut self) -> TickOutcome {
        if self.remaining > 0 {
            self.remaining -= 1;
        }
        if self.remaining == 0 {
            self.running = false;
            TickOutcome::Expired
        } else {
            TickOutcome::Running
        }
    }

    pub fn display(&self) -> String {
        format_mmss(self.remaining)
    }
}

/// Formats a second count as `MM:SS`, both fields zero-padded to two
/// digits. Minutes are not clamped: 6000 seconds renders as `100:00`,
/// matching the width-unbounded padding of the display.
pub fn format_mmss(total_seconds: u32) -> String {
    format!("{:02}:{:02}", total_seconds / 60, total_seconds % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_loads_duration_and_stops() {
        let mut c = Countdown::new();
        c.set(1500);
        assert!(c.start());
        c.set(300);
        assert!(!c.is_running());
        assert_eq!(c.remaining(), 300);
        assert_eq!(c.display(), "05:00");
    }

    #[test]
    fn start_with_empty_clock_is_a_no_op() {
        let mut c = Countdown::new();
        assert!(!c.start());
        assert!(!c.is_running());

        c.reset();
        assert!(!c.start());
    }

    #[test]
    fn start_while_running_is_a_no_op() {
        let mut c = Countdown::new();
        c.set(60);
        assert!(c.start());
        assert!(!c.start());
        assert!(c.is_running());
    }

    #[test]
    fn pause_when_idle_leaves_state_unchanged() {
        let mut c = Countdown::new();
        c.set(120);
        let before = c.clone();
        c.pause();
        assert_eq!(c, before);
    }

    #[test]
    fn pause_keeps_remaining_time() {
        let mut c = Countdown::new();
        c.set(10);
        c.start();
        c.tick();
        c.pause();
        assert!(!c.is_running());
        assert_eq!(c.remaining(), 9);
    }

    #[test]
    fn reset_clears_the_clock() {
        let mut c = Countdown::new();
        c.set(90);
        c.start();
        c.reset();
        assert!(!c.is_running());
        assert_eq!(c.remaining(), 0);
        assert_eq!(c.display(), "00:00");
    }

    #[test]
    fn countdown_expires_after_exactly_n_ticks() {
        let mut c = Countdown::new();
        c.set(3);
        assert!(c.start());
        assert_eq!(c.tick(), TickOutcome::Running);
        assert_eq!(c.tick(), TickOutcome::Running);
        assert_eq!(c.tick(), TickOutcome::Expired);
        assert!(!c.is_running());
        assert_eq!(c.remaining(), 0);
    }

    #[test]
    fn stale_tick_at_zero_does_not_underflow() {
        let mut c = Countdown::new();
        c.set(1);
        c.start();
        assert_eq!(c.tick(), TickOutcome::Expired);
        assert_eq!(c.tick(), TickOutcome::Expired);
        assert_eq!(c.remaining(), 0);
        assert!(!c.is_running());
    }

    #[test]
    fn formats_mmss_with_zero_padding() {
        assert_eq!(format_mmss(0), "00:00");
        assert_eq!(format_mmss(65), "01:05");
        assert_eq!(format_mmss(300), "05:00");
        assert_eq!(format_mmss(900), "15:00");
        assert_eq!(format_mmss(1500), "25:00");
    }

    #[test]
    fn formats_minutes_past_two_digits_unclamped() {
        assert_eq!(format_mmss(6000), "100:00");
        assert_eq!(format_mmss(5999), "99:59");
    }
}
