use std::cell::RefCell;
use std::rc::Rc;

use super::*;

/// Records its label when dropped, standing in for a browser timer handle.
struct FakeTimer {
    label: &'static str,
    cancelled: Rc<RefCell<Vec<&'static str>>>,
}

impl Drop for FakeTimer {
    fn drop(&mut self) {
        self.cancelled.borrow_mut().push(self.label);
    }
}

fn fake(label: &'static str, log: &Rc<RefCell<Vec<&'static str>>>) -> FakeTimer {
    FakeTimer { label, cancelled: Rc::clone(log) }
}

#[test]
fn scheduling_same_kind_cancels_previous() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut slots = TimerSlots::default();
    slots.schedule(TimerKind::SearchDebounce, fake("first", &log));
    slots.schedule(TimerKind::SearchDebounce, fake("second", &log));
    assert_eq!(*log.borrow(), vec!["first"]);
    assert!(slots.is_scheduled(TimerKind::SearchDebounce));
}

#[test]
fn different_kinds_are_independent() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut slots = TimerSlots::default();
    slots.schedule(TimerKind::SlideTick, fake("tick", &log));
    slots.schedule(TimerKind::SlideCooldown, fake("cooldown", &log));
    assert!(log.borrow().is_empty());
    assert!(slots.is_scheduled(TimerKind::SlideTick));
    assert!(slots.is_scheduled(TimerKind::SlideCooldown));
}

#[test]
fn cancel_drops_handle_once() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut slots = TimerSlots::default();
    slots.schedule(TimerKind::GridReveal, fake("reveal", &log));
    assert!(slots.cancel(TimerKind::GridReveal));
    assert!(!slots.cancel(TimerKind::GridReveal));
    assert_eq!(*log.borrow(), vec!["reveal"]);
    assert!(!slots.is_scheduled(TimerKind::GridReveal));
}

#[test]
fn dropping_slots_cancels_everything() {
    let log = Rc::new(RefCell::new(Vec::new()));
    {
        let mut slots = TimerSlots::default();
        slots.schedule(TimerKind::SlideTick, fake("tick", &log));
        slots.schedule(TimerKind::SearchDebounce, fake("debounce", &log));
    }
    let mut cancelled = log.borrow().clone();
    cancelled.sort_unstable();
    assert_eq!(cancelled, vec!["debounce", "tick"]);
}
