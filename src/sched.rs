//! Fixed-period tick scheduler
//!
//! The sole driver of simulation time. Time is a discrete `u64` counter;
//! periodic tasks fire once per elapsed period, indefinitely, until
//! cancelled. Dispatch order is deterministic: among due tasks, smallest
//! `(due, registration sequence)` wins, so tasks registered earlier run
//! first when several fall due at the same instant.
//!
//! This replaces a push-stream composition (timers with derived
//! sub-streams): key-edge-triggered step timers are just tasks scheduled
//! and cancelled while the clock runs.

/// Handle to a scheduled task. Cancellation through a handle is
/// idempotent: cancelling twice (or cancelling a finished task) is a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskHandle(u64);

#[derive(Debug)]
struct Task<K> {
    handle: TaskHandle,
    kind: K,
    period: u64,
    /// Next instant this task fires. Interval semantics: the first firing
    /// is one full period after scheduling, never immediate.
    due: u64,
    cancelled: bool,
}

/// Deterministic periodic-task clock.
#[derive(Debug, Default)]
pub struct Clock<K> {
    now: u64,
    next_handle: u64,
    tasks: Vec<Task<K>>,
}

impl<K: Copy> Clock<K> {
    pub fn new() -> Self {
        Self {
            now: 0,
            next_handle: 0,
            tasks: Vec::new(),
        }
    }

    /// Current simulation time in clock units.
    pub fn now(&self) -> u64 {
        self.now
    }

    /// Register a periodic task firing every `period` units, first at
    /// `now + period`. Registration order doubles as the tie-break order.
    pub fn schedule(&mut self, period: u64, kind: K) -> TaskHandle {
        debug_assert!(period > 0, "zero-period task would never yield");
        let handle = TaskHandle(self.next_handle);
        self.next_handle += 1;
        self.tasks.push(Task {
            handle,
            kind,
            period,
            due: self.now + period,
            cancelled: false,
        });
        handle
    }

    /// Cancel a task. Idempotent: unknown or already-cancelled handles are
    /// ignored.
    pub fn cancel(&mut self, handle: TaskHandle) {
        if let Some(task) = self.tasks.iter_mut().find(|t| t.handle == handle) {
            task.cancelled = true;
        }
    }

    /// Whether a task is still live (scheduled and not cancelled).
    pub fn is_live(&self, handle: TaskHandle) -> bool {
        self.tasks
            .iter()
            .any(|t| t.handle == handle && !t.cancelled)
    }

    /// Pop the next task due at or before `deadline`, advancing the clock
    /// to its due time and re-arming it one period later. Returns `None`
    /// once nothing more is due within the deadline.
    pub fn pop_due(&mut self, deadline: u64) -> Option<(TaskHandle, K)> {
        self.tasks.retain(|t| !t.cancelled);

        // Vec order is registration order, so a strict `<` keeps the
        // earliest-registered of equally-due tasks.
        let mut best: Option<usize> = None;
        for (i, task) in self.tasks.iter().enumerate() {
            if task.due > deadline {
                continue;
            }
            match best {
                Some(b) if self.tasks[b].due <= task.due => {}
                _ => best = Some(i),
            }
        }

        let i = best?;
        let task = &mut self.tasks[i];
        self.now = self.now.max(task.due);
        task.due += task.period;
        Some((task.handle, task.kind))
    }

    /// Advance the clock to `t` without dispatching (used after draining
    /// due tasks so idle time still elapses).
    pub fn advance_to(&mut self, t: u64) {
        self.now = self.now.max(t);
    }
}
