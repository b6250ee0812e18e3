//! Named, cancellable timer handles.
//!
//! Each logical timer (slide tick, navigation cooldown, search debounce, grid
//! reveal) has one slot. Scheduling into an occupied slot drops the previous
//! handle first, and dropping a `gloo-timers` handle clears the browser timer,
//! so a timer kind can never fire twice from stale registrations.
//!
//! Timer callbacks must not touch the slots themselves; they update signals
//! and let effects reschedule once the callback has returned.

#[cfg(test)]
#[path = "timers_test.rs"]
mod timers_test;

use std::collections::HashMap;

use leptos::prelude::{LocalStorage, StoredValue};

#[cfg(feature = "csr")]
use gloo_timers::callback::{Interval, Timeout};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TimerKind {
    SlideTick,
    SlideCooldown,
    SearchDebounce,
    GridReveal,
}

/// One live handle per [`TimerKind`].
#[derive(Debug)]
pub struct TimerSlots<H> {
    slots: HashMap<TimerKind, H>,
}

impl<H> Default for TimerSlots<H> {
    fn default() -> Self {
        Self { slots: HashMap::new() }
    }
}

impl<H> TimerSlots<H> {
    /// Store `handle` under `kind`, cancelling whatever was there.
    pub fn schedule(&mut self, kind: TimerKind, handle: H) {
        if self.slots.insert(kind, handle).is_some() {
            log::trace!("timers: replaced pending {kind:?}");
        }
    }

    /// Cancel the handle under `kind`. Returns whether one was pending.
    pub fn cancel(&mut self, kind: TimerKind) -> bool {
        self.slots.remove(&kind).is_some()
    }

    pub fn is_scheduled(&self, kind: TimerKind) -> bool {
        self.slots.contains_key(&kind)
    }
}

/// A browser timer; dropping it clears the underlying timeout or interval.
#[cfg(feature = "csr")]
pub enum BrowserTimer {
    Timeout(Timeout),
    Interval(Interval),
}

#[cfg(feature = "csr")]
impl std::fmt::Debug for BrowserTimer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Timeout(_) => f.write_str("Timeout"),
            Self::Interval(_) => f.write_str("Interval"),
        }
    }
}

#[cfg(feature = "csr")]
pub type PageTimers = TimerSlots<BrowserTimer>;

#[cfg(feature = "csr")]
impl PageTimers {
    pub fn schedule_timeout(&mut self, kind: TimerKind, millis: u32, callback: impl FnOnce() + 'static) {
        self.schedule(kind, BrowserTimer::Timeout(Timeout::new(millis, callback)));
    }

    pub fn schedule_interval(&mut self, kind: TimerKind, millis: u32, callback: impl FnMut() + 'static) {
        self.schedule(kind, BrowserTimer::Interval(Interval::new(millis, callback)));
    }
}

/// Without a browser there is nothing to schedule; callbacks are dropped.
#[cfg(not(feature = "csr"))]
pub type PageTimers = TimerSlots<()>;

#[cfg(not(feature = "csr"))]
impl PageTimers {
    pub fn schedule_timeout(&mut self, kind: TimerKind, millis: u32, callback: impl FnOnce() + 'static) {
        let _ = (millis, callback);
        self.schedule(kind, ());
    }

    pub fn schedule_interval(&mut self, kind: TimerKind, millis: u32, callback: impl FnMut() + 'static) {
        let _ = (millis, callback);
        self.schedule(kind, ());
    }
}

/// Page-wide timer slots, shared through context.
pub type SharedTimers = StoredValue<PageTimers, LocalStorage>;
