use std::cmp::Ordering;
use std::collections::BinaryHeap;

use serde::{Deserialize, Serialize};

use crate::core::SectionId;

/// Work deferred behind a timer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeferredTask {
    BuildCharts(SectionId),
    Cleanup,
    RefreshColors,
    AnimateCards,
}

/// A task with its due time, as exposed in snapshots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingTask {
    pub due_ms: u64,
    pub task: DeferredTask,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Scheduled {
    due_ms: u64,
    seq: u64,
    task: DeferredTask,
}

impl PartialOrd for Scheduled {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Scheduled {
    fn cmp(&self, other: &Self) -> Ordering {
        // Min-heap on (due, insertion order).
        (other.due_ms, other.seq).cmp(&(self.due_ms, self.seq))
    }
}

/// Virtual-clock timer queue.
///
/// Tasks due at the same instant run in scheduling order. Nothing runs until
/// the host advances the clock.
#[derive(Debug, Clone, Default)]
pub struct DeferredQueue {
    now_ms: u64,
    next_seq: u64,
    heap: BinaryHeap<Scheduled>,
}

impl DeferredQueue {
    #[must_use]
    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Fire-and-forget timer.
    pub fn schedule(&mut self, delay_ms: u64, task: DeferredTask) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Scheduled {
            due_ms: self.now_ms.saturating_add(delay_ms),
            seq,
            task,
        });
    }

    /// Debounced timer: a pending copy of the same task is dropped first.
    pub fn schedule_coalesced(&mut self, delay_ms: u64, task: DeferredTask) {
        self.heap.retain(|scheduled| scheduled.task != task);
        self.schedule(delay_ms, task);
    }

    #[must_use]
    pub fn is_pending(&self, task: &DeferredTask) -> bool {
        self.heap.iter().any(|scheduled| &scheduled.task == task)
    }

    /// Pops the next task due at or before `until_ms` and moves the clock to
    /// its due time.
    pub fn pop_due(&mut self, until_ms: u64) -> Option<DeferredTask> {
        if self.heap.peek()?.due_ms > until_ms {
            return None;
        }
        let scheduled = self.heap.pop()?;
        self.now_ms = self.now_ms.max(scheduled.due_ms);
        Some(scheduled.task)
    }

    pub fn advance_to(&mut self, until_ms: u64) {
        self.now_ms = self.now_ms.max(until_ms);
    }

    #[must_use]
    pub fn pending(&self) -> Vec<PendingTask> {
        let mut scheduled: Vec<&Scheduled> = self.heap.iter().collect();
        scheduled.sort_by_key(|entry| (entry.due_ms, entry.seq));
        scheduled
            .into_iter()
            .map(|entry| PendingTask {
                due_ms: entry.due_ms,
                task: entry.task.clone(),
            })
            .collect()
    }
}
