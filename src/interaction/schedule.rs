use std::{
    cell::{Cell, RefCell},
    rc::Rc,
    time::Duration,
};

/// A pending timer that can be called off before it fires.
pub trait TaskHandle {
    fn cancel(self);
}

/// Single-threaded timer source. Browser builds back this with `setTimeout`.
pub trait Scheduler: Clone + 'static {
    type Handle: TaskHandle + 'static;

    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) -> Self::Handle;
}

/// Mounted flag shared by every callback the engine hands out.
#[derive(Clone, Debug, Default)]
pub struct Lifecycle {
    attached: Rc<Cell<bool>>,
}

impl Lifecycle {
    pub fn attach(&self) {
        self.attached.set(true);
    }

    pub fn detach(&self) {
        self.attached.set(false);
    }

    pub fn is_attached(&self) -> bool {
        self.attached.get()
    }
}

/// Holds the one in-flight task of a self-rescheduling chain.
pub struct TaskSlot<H> {
    current: Rc<RefCell<Option<H>>>,
    closed: Rc<Cell<bool>>,
}

impl<H> Clone for TaskSlot<H> {
    fn clone(&self) -> Self {
        Self {
            current: Rc::clone(&self.current),
            closed: Rc::clone(&self.closed),
        }
    }
}

impl<H> Default for TaskSlot<H> {
    fn default() -> Self {
        Self {
            current: Rc::new(RefCell::new(None)),
            closed: Rc::new(Cell::new(false)),
        }
    }
}

impl<H: TaskHandle> TaskSlot<H> {
    /// Stores the next link of the chain. A closed slot cancels it on the spot.
    pub fn set(&self, handle: H) {
        if self.closed.get() {
            handle.cancel();
            return;
        }

        // The previous link has already fired by the time the chain moves on.
        let previous = self.current.borrow_mut().replace(handle);
        drop(previous);
    }

    pub fn cancel(&self) {
        self.closed.set(true);
        let pending = self.current.borrow_mut().take();
        if let Some(pending) = pending {
            pending.cancel();
        }
    }

    #[cfg(test)]
    pub fn is_closed(&self) -> bool {
        self.closed.get()
    }
}

/// Independent one-shot tasks owned by one component.
pub struct TaskSet<H> {
    tasks: Vec<H>,
    closed: bool,
}

impl<H> Default for TaskSet<H> {
    fn default() -> Self {
        Self {
            tasks: Vec::new(),
            closed: false,
        }
    }
}

impl<H: TaskHandle> TaskSet<H> {
    /// Returns false (and cancels the task) once the set has been closed.
    pub fn push(&mut self, handle: H) -> bool {
        if self.closed {
            handle.cancel();
            return false;
        }

        self.tasks.push(handle);
        true
    }

    pub fn cancel_all(&mut self) -> usize {
        self.closed = true;
        let count = self.tasks.len();
        for task in self.tasks.drain(..) {
            task.cancel();
        }
        count
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    #[cfg(test)]
    pub fn is_closed(&self) -> bool {
        self.closed
    }
}

#[cfg(test)]
pub(crate) mod virtual_time {
    use super::*;

    struct Pending {
        due: Duration,
        id: u64,
        task: Box<dyn FnOnce()>,
    }

    #[derive(Default)]
    struct Queue {
        now: Duration,
        next_id: u64,
        pending: Vec<Pending>,
    }

    /// Deterministic clock: tasks run only when the test advances time.
    #[derive(Clone, Default)]
    pub(crate) struct VirtualScheduler {
        queue: Rc<RefCell<Queue>>,
    }

    pub(crate) struct VirtualHandle {
        id: u64,
        queue: Rc<RefCell<Queue>>,
    }

    impl TaskHandle for VirtualHandle {
        fn cancel(self) {
            let removed = {
                let mut queue = self.queue.borrow_mut();
                let position = queue.pending.iter().position(|task| task.id == self.id);
                position.map(|index| queue.pending.remove(index))
            };
            drop(removed);
        }
    }

    impl Scheduler for VirtualScheduler {
        type Handle = VirtualHandle;

        fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) -> VirtualHandle {
            let mut queue = self.queue.borrow_mut();
            let id = queue.next_id;
            queue.next_id += 1;
            let due = queue.now + delay;
            queue.pending.push(Pending { due, id, task });

            VirtualHandle {
                id,
                queue: Rc::clone(&self.queue),
            }
        }
    }

    impl VirtualScheduler {
        pub(crate) fn now(&self) -> Duration {
            self.queue.borrow().now
        }

        pub(crate) fn pending(&self) -> usize {
            self.queue.borrow().pending.len()
        }

        pub(crate) fn advance(&self, by: Duration) {
            let target = self.now() + by;

            loop {
                let next = {
                    let mut queue = self.queue.borrow_mut();
                    let earliest = queue
                        .pending
                        .iter()
                        .enumerate()
                        .filter(|(_, task)| task.due <= target)
                        .min_by_key(|(_, task)| (task.due, task.id))
                        .map(|(index, _)| index);

                    earliest.map(|index| {
                        let task = queue.pending.remove(index);
                        queue.now = task.due;
                        task
                    })
                };

                let Some(next) = next else {
                    break;
                };
                (next.task)();
            }

            self.queue.borrow_mut().now = target;
        }

        pub(crate) fn advance_ms(&self, millis: u64) {
            self.advance(Duration::from_millis(millis));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::virtual_time::VirtualScheduler;
    use super::*;

    fn counter_task(counter: &Rc<Cell<u32>>) -> Box<dyn FnOnce()> {
        let counter = Rc::clone(counter);
        Box::new(move || counter.set(counter.get() + 1))
    }

    #[test]
    fn virtual_scheduler_runs_tasks_in_due_order() {
        let scheduler = VirtualScheduler::default();
        let order = Rc::new(RefCell::new(Vec::new()));

        for (label, delay) in [("late", 300), ("early", 100), ("middle", 200)] {
            let order = Rc::clone(&order);
            let _ = scheduler.schedule(
                Duration::from_millis(delay),
                Box::new(move || order.borrow_mut().push(label)),
            );
        }

        scheduler.advance_ms(250);
        assert_eq!(*order.borrow(), vec!["early", "middle"]);

        scheduler.advance_ms(50);
        assert_eq!(*order.borrow(), vec!["early", "middle", "late"]);
        assert_eq!(scheduler.now(), Duration::from_millis(300));
    }

    #[test]
    fn closed_slot_cancels_new_links() {
        let scheduler = VirtualScheduler::default();
        let counter = Rc::new(Cell::new(0));
        let slot = TaskSlot::default();

        slot.set(scheduler.schedule(Duration::from_millis(10), counter_task(&counter)));
        slot.cancel();
        slot.set(scheduler.schedule(Duration::from_millis(10), counter_task(&counter)));

        scheduler.advance_ms(50);
        assert_eq!(counter.get(), 0);
        assert!(slot.is_closed());
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn task_set_cancel_all_stops_pending_tasks() {
        let scheduler = VirtualScheduler::default();
        let counter = Rc::new(Cell::new(0));
        let mut tasks = TaskSet::default();

        assert!(tasks.push(scheduler.schedule(Duration::from_millis(200), counter_task(&counter))));
        assert!(tasks.push(scheduler.schedule(Duration::from_millis(400), counter_task(&counter))));
        scheduler.advance_ms(300);

        assert_eq!(tasks.cancel_all(), 2);
        assert!(!tasks.push(scheduler.schedule(Duration::from_millis(1), counter_task(&counter))));

        scheduler.advance_ms(1_000);
        assert_eq!(counter.get(), 1);
        assert!(tasks.is_closed());
        assert_eq!(tasks.len(), 0);
    }

    #[test]
    fn lifecycle_flag_is_shared_between_clones() {
        let lifecycle = Lifecycle::default();
        let observer = lifecycle.clone();
        assert!(!observer.is_attached());

        lifecycle.attach();
        assert!(observer.is_attached());

        lifecycle.detach();
        assert!(!observer.is_attached());
    }
}
