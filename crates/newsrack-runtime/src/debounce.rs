use std::time::{Duration, Instant};

/// Handle identifying one scheduled timer. A handle older than the latest
/// schedule is stale and firing it is a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerToken(u64);

#[derive(Debug)]
struct Pending {
    token: u64,
    value: String,
    deadline: Instant,
}

/// A cancellable single-slot timer: every `schedule` replaces the previous
/// one, so only the last value set within a quiet window ever fires.
///
/// Time is passed in by the caller rather than read ambiently, which keeps
/// the cancellation behavior testable without sleeping. Hosts with a real
/// event loop drive this either by polling (`poll`) or by sleeping until
/// `deadline` and then firing the token they were handed.
#[derive(Debug)]
pub struct DebounceTimer {
    quiet: Duration,
    pending: Option<Pending>,
    next_token: u64,
}

impl DebounceTimer {
    pub fn new(quiet: Duration) -> Self {
        Self {
            quiet,
            pending: None,
            next_token: 0,
        }
    }

    /// Schedule `value` to fire one quiet period after `now`, cancelling any
    /// previously scheduled value.
    pub fn schedule(&mut self, value: impl Into<String>, now: Instant) -> TimerToken {
        self.next_token += 1;
        let token = self.next_token;
        self.pending = Some(Pending {
            token,
            value: value.into(),
            deadline: now + self.quiet,
        });
        TimerToken(token)
    }

    /// Drop whatever is pending without firing it.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    /// Fire the pending value if its deadline has passed.
    pub fn poll(&mut self, now: Instant) -> Option<String> {
        if self.pending.as_ref()?.deadline <= now {
            self.pending.take().map(|p| p.value)
        } else {
            None
        }
    }

    /// Fire the pending value for `token`, regardless of the clock. Stale
    /// tokens (anything but the most recent schedule) are inert, which is
    /// what makes a wall-clock timer callback safe to deliver late.
    pub fn fire(&mut self, token: TimerToken) -> Option<String> {
        if self.pending.as_ref()?.token == token.0 {
            self.pending.take().map(|p| p.value)
        } else {
            None
        }
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|p| p.deadline)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rapid_schedules_fire_once_with_last_value() {
        let mut timer = DebounceTimer::new(Duration::from_millis(180));
        let start = Instant::now();

        let mut last = timer.schedule("c", start);
        for (i, q) in ["ca", "cat", "cats", "cats!"].iter().enumerate() {
            last = timer.schedule(*q, start + Duration::from_millis(10 * (i as u64 + 1)));
        }

        // Nothing fires inside the quiet window.
        assert_eq!(timer.poll(start + Duration::from_millis(100)), None);

        let fired = timer.fire(last);
        assert_eq!(fired.as_deref(), Some("cats!"));
        assert!(!timer.is_pending());
    }

    #[test]
    fn stale_token_is_inert() {
        let mut timer = DebounceTimer::new(Duration::from_millis(180));
        let start = Instant::now();
        let first = timer.schedule("cat", start);
        let _second = timer.schedule("cats", start + Duration::from_millis(50));

        assert_eq!(timer.fire(first), None);
        assert!(timer.is_pending());
    }

    #[test]
    fn poll_fires_only_after_deadline() {
        let mut timer = DebounceTimer::new(Duration::from_millis(180));
        let start = Instant::now();
        timer.schedule("query", start);

        assert_eq!(timer.poll(start + Duration::from_millis(179)), None);
        assert_eq!(
            timer.poll(start + Duration::from_millis(180)).as_deref(),
            Some("query")
        );
        // Fired once; nothing left.
        assert_eq!(timer.poll(start + Duration::from_millis(500)), None);
    }

    #[test]
    fn cancel_discards_pending_value() {
        let mut timer = DebounceTimer::new(Duration::from_millis(180));
        let start = Instant::now();
        timer.schedule("query", start);
        timer.cancel();
        assert_eq!(timer.poll(start + Duration::from_secs(1)), None);
    }
}
