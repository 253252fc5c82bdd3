//! Tick scheduling for the countdown.
//!
//! Each tick is a one-shot `bubbletea_rs::tick` command that delivers a
//! [`TickMsg`] after the interval. The model reschedules after every honoured
//! tick, so a sequence ends as soon as its handle stops being live.

use super::state::TickHandle;
use bubbletea_rs::{tick as bubbletea_tick, Cmd, Msg};
use std::sync::atomic::{AtomicI64, Ordering};
use std::time::Duration;

static LAST_ID: AtomicI64 = AtomicI64::new(0);

/// Hands out ids so multiple countdowns in one program ignore each other's
/// messages. Ids start at 1.
pub fn next_id() -> i64 {
    LAST_ID.fetch_add(1, Ordering::SeqCst) + 1
}

/// Delivered once per interval while a countdown is armed.
#[derive(Debug, Clone)]
pub struct TickMsg {
    /// Id of the countdown this tick is for.
    pub id: i64,
    pub(crate) handle: TickHandle,
}

impl TickMsg {
    /// The tick sequence this message belongs to.
    pub fn handle(&self) -> TickHandle {
        self.handle
    }
}

/// Sent once when a countdown reaches zero on its own.
#[derive(Debug, Clone)]
pub struct TimeoutMsg {
    /// Id of the countdown that finished.
    pub id: i64,
}

/// Schedules the next tick for `handle`.
pub fn schedule(handle: TickHandle, interval: Duration) -> Cmd {
    bubbletea_tick(interval, move |_| {
        Box::new(TickMsg {
            id: handle.id(),
            handle,
        }) as Msg
    })
}

/// Emits a [`TimeoutMsg`] right away.
pub fn timeout(id: i64) -> Cmd {
    bubbletea_tick(Duration::from_nanos(1), move |_| {
        Box::new(TimeoutMsg { id }) as Msg
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::countdown::state::Countdown;

    fn armed(seconds: i64) -> (Countdown, TickHandle) {
        let mut c = Countdown::new(next_id());
        c.set_duration(Some(seconds)).unwrap();
        let handle = c.start().unwrap();
        (c, handle)
    }

    #[tokio::test]
    async fn test_schedule_delivers_tick_for_handle() {
        let (_c, handle) = armed(3);
        let msg = schedule(handle, Duration::from_millis(1))
            .await
            .expect("tick command should produce a message");
        let tick = msg.downcast_ref::<TickMsg>().expect("expected a TickMsg");
        assert_eq!(tick.id, handle.id());
        assert_eq!(tick.handle(), handle);
    }

    #[tokio::test]
    async fn test_schedule_waits_for_interval() {
        let (_c, handle) = armed(3);
        let started = std::time::Instant::now();
        let _ = schedule(handle, Duration::from_millis(20)).await;
        assert!(started.elapsed() >= Duration::from_millis(20));
    }

    #[tokio::test]
    async fn test_timeout_delivers_timeout_msg() {
        let msg = timeout(42).await.expect("timeout command should produce a message");
        assert!(msg.downcast_ref::<TickMsg>().is_none());
        let done = msg.downcast_ref::<TimeoutMsg>().expect("expected a TimeoutMsg");
        assert_eq!(done.id, 42);
    }

    #[test]
    fn test_ids_are_unique_and_positive() {
        let a = next_id();
        let b = next_id();
        assert!(a > 0);
        assert_ne!(a, b);
    }
}
