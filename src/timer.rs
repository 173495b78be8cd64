//! Level countdown. The host calls [`Countdown::tick_with`] once per second while
//! the countdown is running; nothing here touches a wall clock.

use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimerState {
    Idle,
    Running,
    Paused,
    Expired,
}

/// Remaining time split into display units.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Clock {
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
}

impl Clock {
    pub fn from_seconds(total: u32) -> Self {
        Self {
            hours: total / 3600,
            minutes: (total % 3600) / 60,
            seconds: total % 60,
        }
    }

    pub fn total_seconds(&self) -> u32 {
        self.hours * 3600 + self.minutes * 60 + self.seconds
    }
}

/// `MM:SS`, with an `H:` prefix only when hours are non-zero.
impl fmt::Display for Clock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.hours > 0 {
            write!(f, "{}:{:02}:{:02}", self.hours, self.minutes, self.seconds)
        } else {
            write!(f, "{:02}:{:02}", self.minutes, self.seconds)
        }
    }
}

#[derive(Clone, Debug)]
pub struct Countdown {
    initial: u32,
    time_left: u32,
    state: TimerState,
}

impl Countdown {
    pub fn new(duration: u32) -> Self {
        Self { initial: duration, time_left: duration, state: TimerState::Idle }
    }

    pub fn initial_duration(&self) -> u32 {
        self.initial
    }

    pub fn time_left(&self) -> u32 {
        self.time_left
    }

    pub fn state(&self) -> TimerState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == TimerState::Running
    }

    pub fn hours(&self) -> u32 {
        self.clock().hours
    }

    pub fn minutes(&self) -> u32 {
        self.clock().minutes
    }

    pub fn seconds(&self) -> u32 {
        self.clock().seconds
    }

    pub fn clock(&self) -> Clock {
        Clock::from_seconds(self.time_left)
    }

    /// Arm the countdown. Re-arming a running countdown keeps it running.
    pub fn start(&mut self) {
        if self.state == TimerState::Running {
            log::trace!("countdown re-armed at {}s", self.time_left);
        }
        self.state = TimerState::Running;
    }

    pub fn pause(&mut self) {
        if self.state == TimerState::Running {
            self.state = TimerState::Paused;
        }
    }

    /// Stop and restore the initial duration. Idle countdowns are left alone.
    pub fn reset(&mut self) {
        if self.state == TimerState::Idle {
            return;
        }
        self.state = TimerState::Idle;
        self.time_left = self.initial;
    }

    /// Overwrite the remaining time without touching the initial duration.
    pub fn set_time_left(&mut self, seconds: u32) {
        self.time_left = seconds;
    }

    /// One countdown step.
    ///
    /// Order matters: a countdown already at zero stops first, then `on_tick`
    /// observes the current value, then the value drops by one. A countdown
    /// that reaches zero therefore reports `0` on one extra tick before it
    /// stops firing. Returns `false` when the countdown was not running.
    pub fn tick_with<F: FnOnce(&Countdown)>(&mut self, on_tick: F) -> bool {
        if self.state != TimerState::Running {
            return false;
        }
        if self.time_left == 0 {
            self.state = TimerState::Expired;
        }
        on_tick(self);
        self.time_left = self.time_left.saturating_sub(1);
        true
    }

    pub fn tick(&mut self) -> bool {
        self.tick_with(|_| {})
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_decomposes_seconds() {
        let c = Clock::from_seconds(3_725);
        assert_eq!((c.hours, c.minutes, c.seconds), (1, 2, 5));
        assert_eq!(c.total_seconds(), 3_725);
        assert_eq!(c.to_string(), "1:02:05");
        assert_eq!(Clock::from_seconds(59).to_string(), "00:59");
        assert_eq!(Clock::from_seconds(60).to_string(), "01:00");
    }

    #[test]
    fn ticks_only_while_running() {
        let mut t = Countdown::new(10);
        assert!(!t.tick());
        assert_eq!(t.time_left(), 10);
        t.start();
        assert!(t.tick());
        assert_eq!(t.time_left(), 9);
        t.pause();
        assert!(!t.tick());
        assert_eq!(t.time_left(), 9);
        t.start();
        t.start();
        assert!(t.is_running());
    }

    #[test]
    fn one_second_countdown_reports_zero_once_more() {
        let mut t = Countdown::new(1);
        t.start();
        let mut seen = Vec::new();
        t.tick_with(|c| seen.push((c.time_left(), c.state())));
        assert_eq!(t.time_left(), 0);
        assert!(t.is_running());
        t.tick_with(|c| seen.push((c.time_left(), c.state())));
        assert_eq!(seen, vec![(1, TimerState::Running), (0, TimerState::Expired)]);
        assert_eq!(t.state(), TimerState::Expired);
        assert!(!t.tick());
        assert_eq!(t.time_left(), 0);
    }

    #[test]
    fn reset_restores_initial_from_any_armed_state() {
        let mut t = Countdown::new(3);
        t.start();
        t.tick();
        t.pause();
        t.reset();
        assert_eq!(t.time_left(), 3);
        assert_eq!(t.state(), TimerState::Idle);

        t.start();
        for _ in 0..5 {
            t.tick();
        }
        assert_eq!(t.state(), TimerState::Expired);
        t.reset();
        assert_eq!(t.time_left(), 3);
        assert!(!t.tick());
    }

    #[test]
    fn reset_is_noop_when_idle() {
        let mut t = Countdown::new(30);
        t.set_time_left(12);
        t.reset();
        assert_eq!(t.time_left(), 12);
    }

    #[test]
    fn rearm_keeps_initial_duration() {
        let mut t = Countdown::new(60);
        t.start();
        t.pause();
        t.set_time_left(50);
        t.start();
        assert_eq!(t.initial_duration(), 60);
        assert_eq!((t.minutes(), t.seconds(), t.hours()), (0, 50, 0));
    }
}
