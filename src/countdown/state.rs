//! The countdown state machine.
//!
//! [`Countdown`] owns the configured duration, the remaining time and the run
//! phase. It knows nothing about terminals or message loops: operations that
//! arm the countdown hand back a [`TickHandle`], and the caller is expected to
//! schedule one tick for it. A tick is only honoured if it carries the handle
//! that is currently live, so releasing a handle is all it takes to cancel the
//! ticking process.

use crate::error::InvalidDurationError;

/// Identifies one scheduled tick sequence.
///
/// A handle is the pair of the owning countdown's id and a generation tag that
/// is bumped every time the countdown is armed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TickHandle {
    id: i64,
    tag: u64,
}

impl TickHandle {
    /// Id of the countdown that owns this handle.
    pub fn id(&self) -> i64 {
        self.id
    }

    /// Generation tag of this handle.
    pub fn tag(&self) -> u64 {
        self.tag
    }
}

/// Run phase of a countdown. Holding the handle inside `Armed` makes
/// "armed and paused" unrepresentable, and a handle exists exactly while armed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Not running and not paused.
    #[default]
    Idle,
    /// Counting down; the handle is the live tick sequence.
    Armed(TickHandle),
    /// Suspended mid-run, remaining time kept.
    Paused,
}

/// What happened when a tick was delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The tick belonged to a released handle and was ignored.
    Stale,
    /// One second was taken off; schedule the next tick for this handle.
    Continue(TickHandle),
    /// The countdown reached zero and disarmed itself.
    Finished,
}

/// Which controls are currently usable. Derived from state, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Controls {
    /// Start is usable when not armed and there is time left.
    pub start: bool,
    /// Pause is usable while armed.
    pub pause: bool,
    /// Reset is usable when there is time left.
    pub reset: bool,
}

/// Countdown state: duration, remaining seconds and run phase.
#[derive(Debug, Clone)]
pub struct Countdown {
    id: i64,
    duration: Option<u64>,
    remaining: u64,
    phase: Phase,
    tag: u64,
}

impl Countdown {
    /// Creates an idle countdown with no duration and zero remaining time.
    pub fn new(id: i64) -> Self {
        Self {
            id,
            duration: None,
            remaining: 0,
            phase: Phase::Idle,
            tag: 0,
        }
    }

    /// Id used to address ticks to this countdown.
    pub fn id(&self) -> i64 {
        self.id
    }

    /// The last duration successfully set.
    pub fn duration(&self) -> Option<u64> {
        self.duration
    }

    /// Seconds left.
    pub fn remaining(&self) -> u64 {
        self.remaining
    }

    /// Current run phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// True while counting down.
    pub fn armed(&self) -> bool {
        matches!(self.phase, Phase::Armed(_))
    }

    /// True while suspended mid-run.
    pub fn paused(&self) -> bool {
        self.phase == Phase::Paused
    }

    /// The live tick handle, present exactly while armed.
    pub fn handle(&self) -> Option<TickHandle> {
        match self.phase {
            Phase::Armed(handle) => Some(handle),
            _ => None,
        }
    }

    /// Sets a new duration and rewinds to it, disarming the countdown.
    ///
    /// Only positive values are accepted. On error nothing changes.
    ///
    /// ```rust
    /// use countdown_widgets::countdown::Countdown;
    ///
    /// let mut c = Countdown::new(1);
    /// assert!(c.set_duration(Some(0)).is_err());
    /// assert!(c.set_duration(None).is_err());
    ///
    /// c.set_duration(Some(90)).unwrap();
    /// assert_eq!(c.remaining(), 90);
    /// ```
    pub fn set_duration(&mut self, input: Option<i64>) -> Result<(), InvalidDurationError> {
        let seconds = match input {
            Some(s) if s > 0 => s as u64,
            _ => return Err(InvalidDurationError { input }),
        };
        self.duration = Some(seconds);
        self.remaining = seconds;
        self.phase = Phase::Idle;
        Ok(())
    }

    /// Arms the countdown if there is time left and it is not already armed.
    ///
    /// Returns the new handle, which the caller must schedule a tick for.
    /// Resuming from pause continues from the paused value.
    pub fn start(&mut self) -> Option<TickHandle> {
        if self.remaining == 0 || self.armed() {
            return None;
        }
        self.tag = self.tag.wrapping_add(1);
        let handle = TickHandle {
            id: self.id,
            tag: self.tag,
        };
        self.phase = Phase::Armed(handle);
        Some(handle)
    }

    /// Suspends a running countdown. Returns false if it was not armed.
    pub fn pause(&mut self) -> bool {
        if !self.armed() {
            return false;
        }
        self.phase = Phase::Paused;
        true
    }

    /// Disarms and rewinds to the last set duration, or zero if none was set.
    pub fn reset(&mut self) {
        self.phase = Phase::Idle;
        self.remaining = self.duration.unwrap_or(0);
    }

    /// Pauses when armed, starts otherwise.
    pub fn toggle(&mut self) -> Option<TickHandle> {
        if self.armed() {
            self.pause();
            None
        } else {
            self.start()
        }
    }

    /// Releases the tick handle on unmount. A paused countdown stays paused.
    pub fn teardown(&mut self) {
        if self.armed() {
            self.phase = Phase::Idle;
        }
    }

    /// Delivers one tick.
    pub fn tick(&mut self, handle: TickHandle) -> TickOutcome {
        if self.phase != Phase::Armed(handle) {
            return TickOutcome::Stale;
        }
        if self.remaining <= 1 {
            self.remaining = 0;
            self.phase = Phase::Idle;
            return TickOutcome::Finished;
        }
        self.remaining -= 1;
        TickOutcome::Continue(handle)
    }

    /// Which controls are currently usable.
    pub fn controls(&self) -> Controls {
        Controls {
            start: !self.armed() && self.remaining > 0,
            pause: self.armed(),
            reset: self.remaining > 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_out(c: &mut Countdown, mut handle: TickHandle) -> usize {
        let mut ticks = 0;
        loop {
            ticks += 1;
            match c.tick(handle) {
                TickOutcome::Continue(h) => handle = h,
                TickOutcome::Finished => return ticks,
                TickOutcome::Stale => panic!("live handle reported stale"),
            }
        }
    }

    #[test]
    fn test_new_is_empty() {
        let c = Countdown::new(7);
        assert_eq!(c.id(), 7);
        assert_eq!(c.duration(), None);
        assert_eq!(c.remaining(), 0);
        assert!(!c.armed());
        assert!(!c.paused());
        assert!(c.handle().is_none());
    }

    #[test]
    fn test_set_duration_rejects_non_positive() {
        let mut c = Countdown::new(1);
        c.set_duration(Some(10)).unwrap();
        let handle = c.start().unwrap();

        for bad in [Some(0), Some(-1), None] {
            let err = c.set_duration(bad).unwrap_err();
            assert_eq!(err.input, bad);
        }
        assert_eq!(c.duration(), Some(10));
        assert_eq!(c.remaining(), 10);
        assert_eq!(c.handle(), Some(handle));
    }

    #[test]
    fn test_set_duration_disarms() {
        let mut c = Countdown::new(1);
        c.set_duration(Some(10)).unwrap();
        let handle = c.start().unwrap();
        c.tick(handle);

        c.set_duration(Some(3)).unwrap();
        assert_eq!(c.remaining(), 3);
        assert!(!c.armed());
        assert!(!c.paused());
        assert_eq!(c.tick(handle), TickOutcome::Stale);
        assert_eq!(c.remaining(), 3);
    }

    #[test]
    fn test_counts_down_one_per_tick() {
        let mut c = Countdown::new(1);
        c.set_duration(Some(5)).unwrap();
        let handle = c.start().unwrap();

        for expected in (1..5).rev() {
            assert_eq!(c.tick(handle), TickOutcome::Continue(handle));
            assert_eq!(c.remaining(), expected);
        }
        assert_eq!(c.tick(handle), TickOutcome::Finished);
        assert_eq!(c.remaining(), 0);
        assert!(!c.armed());
        assert!(c.handle().is_none());
    }

    #[test]
    fn test_five_second_countdown_takes_five_ticks() {
        let mut c = Countdown::new(1);
        c.set_duration(Some(5)).unwrap();
        let handle = c.start().unwrap();
        assert_eq!(run_out(&mut c, handle), 5);
    }

    #[test]
    fn test_start_with_nothing_left_is_noop() {
        let mut c = Countdown::new(1);
        assert!(c.start().is_none());
        assert_eq!(c.phase(), Phase::Idle);
    }

    #[test]
    fn test_start_while_armed_is_noop() {
        let mut c = Countdown::new(1);
        c.set_duration(Some(5)).unwrap();
        let first = c.start().unwrap();
        assert!(c.start().is_none());
        assert_eq!(c.handle(), Some(first));
    }

    #[test]
    fn test_pause_resumes_from_paused_value() {
        let mut c = Countdown::new(1);
        c.set_duration(Some(10)).unwrap();
        let first = c.start().unwrap();
        c.tick(first);
        c.tick(first);

        assert!(c.pause());
        assert!(c.paused());
        assert!(!c.armed());
        assert_eq!(c.tick(first), TickOutcome::Stale);
        assert_eq!(c.remaining(), 8);

        let second = c.start().unwrap();
        assert_ne!(first, second);
        assert!(!c.paused());
        assert_eq!(c.tick(first), TickOutcome::Stale);
        assert_eq!(c.tick(second), TickOutcome::Continue(second));
        assert_eq!(c.remaining(), 7);
    }

    #[test]
    fn test_pause_when_not_armed_is_noop() {
        let mut c = Countdown::new(1);
        c.set_duration(Some(4)).unwrap();
        assert!(!c.pause());
        assert!(!c.paused());
    }

    #[test]
    fn test_reset_rewinds_to_last_duration() {
        let mut c = Countdown::new(1);
        c.set_duration(Some(6)).unwrap();
        let handle = c.start().unwrap();
        c.tick(handle);
        c.tick(handle);

        c.reset();
        assert_eq!(c.remaining(), 6);
        assert!(!c.armed());
        assert!(!c.paused());
        assert!(c.handle().is_none());
        assert_eq!(c.tick(handle), TickOutcome::Stale);
    }

    #[test]
    fn test_reset_without_duration_is_zero() {
        let mut c = Countdown::new(1);
        c.reset();
        assert_eq!(c.remaining(), 0);
    }

    #[test]
    fn test_toggle() {
        let mut c = Countdown::new(1);
        c.set_duration(Some(3)).unwrap();
        assert!(c.toggle().is_some());
        assert!(c.armed());
        assert!(c.toggle().is_none());
        assert!(c.paused());
    }

    #[test]
    fn test_teardown_releases_handle() {
        let mut c = Countdown::new(1);
        c.set_duration(Some(3)).unwrap();
        let handle = c.start().unwrap();
        c.teardown();
        assert!(c.handle().is_none());
        assert_eq!(c.tick(handle), TickOutcome::Stale);
        assert_eq!(c.remaining(), 3);
    }

    #[test]
    fn test_foreign_handle_is_stale() {
        let mut a = Countdown::new(1);
        let mut b = Countdown::new(2);
        a.set_duration(Some(3)).unwrap();
        b.set_duration(Some(3)).unwrap();
        let ha = a.start().unwrap();
        let hb = b.start().unwrap();
        assert_eq!(ha.tag(), hb.tag());
        assert_eq!(a.tick(hb), TickOutcome::Stale);
        assert_eq!(a.remaining(), 3);
    }

    #[test]
    fn test_controls() {
        let mut c = Countdown::new(1);
        assert_eq!(
            c.controls(),
            Controls {
                start: false,
                pause: false,
                reset: false
            }
        );

        c.set_duration(Some(2)).unwrap();
        assert_eq!(
            c.controls(),
            Controls {
                start: true,
                pause: false,
                reset: true
            }
        );

        let handle = c.start().unwrap();
        assert_eq!(
            c.controls(),
            Controls {
                start: false,
                pause: true,
                reset: true
            }
        );

        c.tick(handle);
        c.tick(handle);
        assert_eq!(
            c.controls(),
            Controls {
                start: false,
                pause: false,
                reset: false
            }
        );
    }

    #[derive(Debug, Clone, Copy)]
    enum Action {
        Set(i64),
        Start,
        Pause,
        Reset,
        Tick,
        StaleTick,
    }

    // Walks every action sequence up to a fixed depth and checks the
    // invariants after each step.
    #[test]
    fn test_invariants_hold_in_all_reachable_states() {
        const ACTIONS: [Action; 8] = [
            Action::Set(2),
            Action::Set(0),
            Action::Set(-1),
            Action::Start,
            Action::Pause,
            Action::Reset,
            Action::Tick,
            Action::StaleTick,
        ];

        fn walk(c: &Countdown, stale: Option<TickHandle>, depth: usize) {
            if depth == 0 {
                return;
            }
            for action in ACTIONS {
                let mut next = c.clone();
                let mut next_stale = stale;
                match action {
                    Action::Set(s) => {
                        let before = (next.duration(), next.remaining(), next.phase());
                        if next.set_duration(Some(s)).is_err() {
                            assert_eq!(before, (next.duration(), next.remaining(), next.phase()));
                        }
                    }
                    Action::Start => {
                        if let Some(old) = next.handle() {
                            next_stale = Some(old);
                        }
                        let _ = next.start();
                    }
                    Action::Pause => {
                        next_stale = next.handle().or(next_stale);
                        next.pause();
                    }
                    Action::Reset => {
                        next_stale = next.handle().or(next_stale);
                        next.reset();
                    }
                    Action::Tick => {
                        if let Some(h) = next.handle() {
                            let before = next.remaining();
                            match next.tick(h) {
                                TickOutcome::Continue(_) => {
                                    assert_eq!(next.remaining(), before - 1)
                                }
                                TickOutcome::Finished => {
                                    assert_eq!(next.remaining(), 0);
                                    next_stale = Some(h);
                                }
                                TickOutcome::Stale => panic!("live tick reported stale"),
                            }
                        }
                    }
                    Action::StaleTick => {
                        if let Some(h) = stale {
                            if next.handle() != Some(h) {
                                let before = (next.remaining(), next.phase());
                                assert_eq!(next.tick(h), TickOutcome::Stale);
                                assert_eq!(before, (next.remaining(), next.phase()));
                            }
                        }
                    }
                }

                assert!(!(next.armed() && next.paused()));
                assert_eq!(next.handle().is_some(), next.armed() && !next.paused());
                if let Some(d) = next.duration() {
                    assert!(next.remaining() <= d);
                }

                walk(&next, next_stale, depth - 1);
            }
        }

        walk(&Countdown::new(1), None, 5);
    }
}
