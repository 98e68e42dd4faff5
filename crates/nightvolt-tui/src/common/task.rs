//! Async task bookkeeping.
//!
//! Every spawned request gets a fresh `TaskId`. Results carry the id back
//! so the reducer can drop completions that no longer belong to the
//! active task.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskId(pub u64);

/// Monotonic id generator; lives for the whole process so ids are never
/// reused across screen remounts.
#[derive(Debug, Default)]
pub struct TaskSeq {
    next: u64,
}

impl TaskSeq {
    pub fn next_id(&mut self) -> TaskId {
        let id = TaskId(self.next);
        self.next = self.next.wrapping_add(1);
        id
    }
}

/// Lifecycle of a single-slot task (mutated only by the reducer).
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TaskState {
    pub active: Option<TaskId>,
}

impl TaskState {
    pub fn is_running(&self) -> bool {
        self.active.is_some()
    }

    pub fn start(&mut self, id: TaskId) {
        self.active = Some(id);
    }

    /// Clears the slot if `id` is the active task. Returns whether it was.
    pub fn finish_if_active(&mut self, id: TaskId) -> bool {
        let ok = self.active == Some(id);
        if ok {
            self.active = None;
        }
        ok
    }
}
