//! Deferred task execution.
//!
//! Components never sleep; every wait is a task handed to a [`Scheduler`].
//! The browser build backs this with real timeouts, while [`ManualScheduler`]
//! runs tasks against a logical clock that only moves when told to.

use std::cell::RefCell;
use std::rc::Rc;

/// A deferred unit of work. Single-threaded, so no `Send` bound.
pub type Task = Box<dyn FnOnce()>;

/// Handle identifying a scheduled task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(pub u64);

pub trait Scheduler {
    /// Run `task` once, `delay_ms` milliseconds from now.
    fn schedule(&self, delay_ms: u32, task: Task) -> TimerId;

    /// Drop a pending task. Unknown or already-run ids are ignored.
    fn cancel(&self, id: TimerId);
}

// ─────────────────────────────────────────────────────────────────────────────
// Logical Clock
// ─────────────────────────────────────────────────────────────────────────────

struct Pending {
    due: u64,
    id: TimerId,
    task: Task,
}

#[derive(Default)]
struct ManualInner {
    now: u64,
    next_id: u64,
    pending: Vec<Pending>,
}

/// Scheduler driven by an explicit logical clock.
///
/// Tasks run in due-time order, ties broken by scheduling order. Tasks
/// scheduled while the clock is advancing run in the same call if they fall
/// due before the target time.
#[derive(Clone, Default)]
pub struct ManualScheduler {
    inner: Rc<RefCell<ManualInner>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current logical time in milliseconds.
    pub fn now(&self) -> u64 {
        self.inner.borrow().now
    }

    pub fn pending_count(&self) -> usize {
        self.inner.borrow().pending.len()
    }

    /// Due time of the earliest pending task.
    pub fn next_due(&self) -> Option<u64> {
        self.inner.borrow().pending.iter().map(|p| p.due).min()
    }

    /// Move the clock forward by `ms`, running every task that falls due.
    /// Returns the number of tasks run.
    pub fn advance(&self, ms: u64) -> usize {
        let target = self.now() + ms;
        let mut ran = 0;
        while let Some(task) = self.pop_due(target) {
            task();
            ran += 1;
        }
        self.inner.borrow_mut().now = target;
        ran
    }

    /// Jump straight to the earliest pending task and run it.
    /// Returns the time that elapsed, or `None` when nothing is pending.
    pub fn run_next(&self) -> Option<u64> {
        let due = self.next_due()?;
        let elapsed = due - self.now();
        self.advance(elapsed);
        Some(elapsed)
    }

    fn pop_due(&self, target: u64) -> Option<Task> {
        let mut inner = self.inner.borrow_mut();
        let idx = inner
            .pending
            .iter()
            .enumerate()
            .filter(|(_, p)| p.due <= target)
            .min_by_key(|(_, p)| (p.due, p.id))
            .map(|(idx, _)| idx)?;
        let pending = inner.pending.swap_remove(idx);
        inner.now = pending.due;
        Some(pending.task)
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&self, delay_ms: u32, task: Task) -> TimerId {
        let mut inner = self.inner.borrow_mut();
        let id = TimerId(inner.next_id);
        inner.next_id += 1;
        let due = inner.now + u64::from(delay_ms);
        inner.pending.push(Pending { due, id, task });
        id
    }

    fn cancel(&self, id: TimerId) {
        self.inner.borrow_mut().pending.retain(|p| p.id != id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recorder() -> (Rc<RefCell<Vec<&'static str>>>, impl Fn(&'static str) -> Task) {
        let log = Rc::new(RefCell::new(Vec::new()));
        let make = {
            let log = log.clone();
            move |name: &'static str| -> Task {
                let log = log.clone();
                Box::new(move || log.borrow_mut().push(name))
            }
        };
        (log, make)
    }

    #[test]
    fn runs_in_due_order_then_insertion_order() {
        let scheduler = ManualScheduler::new();
        let (log, task) = recorder();

        scheduler.schedule(100, task("late"));
        scheduler.schedule(50, task("early"));
        scheduler.schedule(50, task("early-second"));

        assert_eq!(scheduler.advance(49), 0);
        assert_eq!(scheduler.advance(1), 2);
        assert_eq!(*log.borrow(), vec!["early", "early-second"]);
        assert_eq!(scheduler.advance(50), 1);
        assert_eq!(*log.borrow(), vec!["early", "early-second", "late"]);
        assert_eq!(scheduler.now(), 100);
    }

    #[test]
    fn nested_tasks_run_within_window() {
        let scheduler = ManualScheduler::new();
        let log = Rc::new(RefCell::new(Vec::new()));

        let inner_scheduler = scheduler.clone();
        let inner_log = log.clone();
        scheduler.schedule(
            10,
            Box::new(move || {
                inner_log.borrow_mut().push(10);
                let nested_log = inner_log.clone();
                inner_scheduler.schedule(20, Box::new(move || nested_log.borrow_mut().push(30)));
            }),
        );

        scheduler.advance(29);
        assert_eq!(*log.borrow(), vec![10]);
        scheduler.advance(1);
        assert_eq!(*log.borrow(), vec![10, 30]);
    }

    #[test]
    fn cancel_drops_pending_task() {
        let scheduler = ManualScheduler::new();
        let (log, task) = recorder();

        let id = scheduler.schedule(10, task("cancelled"));
        scheduler.schedule(10, task("kept"));
        scheduler.cancel(id);
        scheduler.cancel(TimerId(999));

        scheduler.advance(10);
        assert_eq!(*log.borrow(), vec!["kept"]);
        assert_eq!(scheduler.pending_count(), 0);
    }

    #[test]
    fn run_next_reports_elapsed() {
        let scheduler = ManualScheduler::new();
        let (_log, task) = recorder();

        assert_eq!(scheduler.run_next(), None);
        scheduler.advance(5);
        scheduler.schedule(3000, task("start"));
        assert_eq!(scheduler.run_next(), Some(3000));
        assert_eq!(scheduler.now(), 3005);
    }
}
