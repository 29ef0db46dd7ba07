//! Debouncing over an injected scheduler.
//!
//! The page uses browser timeouts, tests use [`ManualScheduler`], whose clock
//! only moves when the test advances it.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

/// A deferred one-shot task.
pub type Task = Box<dyn FnOnce()>;

/// Something that can run a task later and forget about it on request.
pub trait Scheduler {
    type Handle;

    fn schedule(&self, delay: Duration, task: Task) -> Self::Handle;

    /// Cancelling a task that already ran is a no-op.
    fn cancel(&self, handle: Self::Handle);
}

/// Runs `action` once input settles for `delay`.
///
/// Every [`Debouncer::call`] cancels the previously scheduled run, so only
/// the argument of the last call within a quiet period is acted upon.
pub struct Debouncer<S: Scheduler, T> {
    scheduler: Rc<S>,
    delay: Duration,
    action: Rc<dyn Fn(T)>,
    pending: RefCell<Option<S::Handle>>,
}

impl<S, T> Debouncer<S, T>
where
    S: Scheduler,
    T: 'static,
{
    pub fn new(scheduler: Rc<S>, delay: Duration, action: impl Fn(T) + 'static) -> Self {
        Self {
            scheduler,
            delay,
            action: Rc::new(action),
            pending: RefCell::new(None),
        }
    }

    pub fn call(&self, arg: T) {
        self.cancel();
        let action = Rc::clone(&self.action);
        let handle = self
            .scheduler
            .schedule(self.delay, Box::new(move || action(arg)));
        *self.pending.borrow_mut() = Some(handle);
    }

    /// Drop the pending run, if any.
    pub fn cancel(&self) {
        if let Some(handle) = self.pending.borrow_mut().take() {
            self.scheduler.cancel(handle);
        }
    }
}

/// Identifier of a task queued on a [`ManualScheduler`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskId(u64);

struct QueuedTask {
    id: TaskId,
    due: Duration,
    task: Task,
}

/// Fake clock scheduler: nothing runs until [`ManualScheduler::advance`].
#[derive(Default)]
pub struct ManualScheduler {
    now: Cell<Duration>,
    next_id: Cell<u64>,
    queue: RefCell<Vec<QueuedTask>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> Duration {
        self.now.get()
    }

    /// Number of tasks scheduled and not yet run or cancelled.
    pub fn pending(&self) -> usize {
        self.queue.borrow().len()
    }

    /// Move the clock forward, running due tasks in deadline order.
    ///
    /// Tasks scheduled by a running task are honoured if they fall due
    /// before the new time.
    pub fn advance(&self, by: Duration) {
        let target = self.now.get() + by;
        while let Some(next) = self.pop_due(target) {
            self.now.set(next.due);
            (next.task)();
        }
        self.now.set(target);
    }

    fn pop_due(&self, target: Duration) -> Option<QueuedTask> {
        let mut queue = self.queue.borrow_mut();
        let index = queue
            .iter()
            .enumerate()
            .filter(|(_, queued)| queued.due <= target)
            .min_by_key(|(_, queued)| (queued.due, queued.id.0))
            .map(|(index, _)| index)?;
        Some(queue.remove(index))
    }
}

impl Scheduler for ManualScheduler {
    type Handle = TaskId;

    fn schedule(&self, delay: Duration, task: Task) -> TaskId {
        let id = TaskId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.queue.borrow_mut().push(QueuedTask {
            id,
            due: self.now.get() + delay,
            task,
        });
        id
    }

    fn cancel(&self, handle: TaskId) {
        self.queue.borrow_mut().retain(|queued| queued.id != handle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recorder() -> (Rc<RefCell<Vec<String>>>, impl Fn(String) + 'static) {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&calls);
        (calls, move |value: String| sink.borrow_mut().push(value))
    }

    #[test]
    fn test_burst_runs_once_with_last_value() {
        let scheduler = Rc::new(ManualScheduler::new());
        let (calls, action) = recorder();
        let debouncer = Debouncer::new(Rc::clone(&scheduler), Duration::from_millis(300), action);

        for query in ["g", "gr", "gra", "grade"] {
            debouncer.call(query.to_string());
            scheduler.advance(Duration::from_millis(100));
        }
        assert!(calls.borrow().is_empty());
        assert_eq!(scheduler.pending(), 1);

        scheduler.advance(Duration::from_millis(200));
        assert_eq!(*calls.borrow(), vec!["grade".to_string()]);
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn test_separate_quiet_periods_run_separately() {
        let scheduler = Rc::new(ManualScheduler::new());
        let (calls, action) = recorder();
        let debouncer = Debouncer::new(Rc::clone(&scheduler), Duration::from_millis(300), action);

        debouncer.call("alice".to_string());
        scheduler.advance(Duration::from_millis(300));
        debouncer.call("bob".to_string());
        scheduler.advance(Duration::from_millis(299));
        assert_eq!(*calls.borrow(), vec!["alice".to_string()]);

        scheduler.advance(Duration::from_millis(1));
        assert_eq!(*calls.borrow(), vec!["alice".to_string(), "bob".to_string()]);
    }

    #[test]
    fn test_cancel_discards_pending_run() {
        let scheduler = Rc::new(ManualScheduler::new());
        let (calls, action) = recorder();
        let debouncer = Debouncer::new(Rc::clone(&scheduler), Duration::from_millis(300), action);

        debouncer.call("x".to_string());
        debouncer.cancel();
        scheduler.advance(Duration::from_secs(1));
        assert!(calls.borrow().is_empty());
    }

    #[test]
    fn test_call_after_run_does_not_disturb_other_tasks() {
        let scheduler = Rc::new(ManualScheduler::new());
        let (calls, action) = recorder();
        let debouncer = Debouncer::new(Rc::clone(&scheduler), Duration::from_millis(300), action);

        let other = Rc::new(Cell::new(false));
        let flag = Rc::clone(&other);
        scheduler.schedule(Duration::from_millis(500), Box::new(move || flag.set(true)));

        debouncer.call("a".to_string());
        scheduler.advance(Duration::from_millis(300));
        debouncer.call("b".to_string());
        scheduler.advance(Duration::from_millis(300));

        assert!(other.get());
        assert_eq!(calls.borrow().len(), 2);
    }

    #[test]
    fn test_manual_scheduler_runs_in_deadline_order() {
        let scheduler = ManualScheduler::new();
        let order = Rc::new(RefCell::new(Vec::new()));
        for (delay, label) in [(30, "c"), (10, "a"), (20, "b")] {
            let order = Rc::clone(&order);
            scheduler.schedule(
                Duration::from_millis(delay),
                Box::new(move || order.borrow_mut().push(label)),
            );
        }
        scheduler.advance(Duration::from_millis(25));
        assert_eq!(*order.borrow(), vec!["a", "b"]);
        assert_eq!(scheduler.now(), Duration::from_millis(25));
        scheduler.advance(Duration::from_millis(5));
        assert_eq!(*order.borrow(), vec!["a", "b", "c"]);
    }
}
