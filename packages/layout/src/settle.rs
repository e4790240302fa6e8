//! # Settle Queue
//!
//! Work deferred until the rendering collaborator reports that a render has
//! fully settled. Each task fires once, in scheduling order, against the
//! host's latest state. Nothing is ever cancelled: a task queued for a
//! render that was superseded still runs.

/// Deferred task run after a render settles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettleTask {
    /// Emit `document-layout-changed` for the current element and mode
    AnnounceLayout,
    /// Move focus to the first auto-focus input
    AutoFocus,
}

#[derive(Debug, Default)]
pub struct SettleQueue {
    tasks: Vec<SettleTask>,
}

impl SettleQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, task: SettleTask) {
        self.tasks.push(task);
    }

    /// Take every queued task, leaving the queue empty
    pub fn drain(&mut self) -> Vec<SettleTask> {
        std::mem::take(&mut self.tasks)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drain_in_order_once() {
        let mut queue = SettleQueue::new();
        queue.schedule(SettleTask::AnnounceLayout);
        queue.schedule(SettleTask::AutoFocus);
        assert_eq!(queue.len(), 2);

        assert_eq!(queue.drain(), vec![SettleTask::AnnounceLayout, SettleTask::AutoFocus]);
        assert!(queue.is_empty());
        assert!(queue.drain().is_empty());
    }
}
