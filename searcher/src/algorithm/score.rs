use std::cmp::{Ord, Ordering, PartialOrd};

/// Wraps a candidate so that a [BinaryHeap](std::collections::BinaryHeap)
/// pops the lowest priority first.
///
/// Equal priorities come back in the order they were pushed,
/// which keeps searches deterministic.
#[derive(Debug, Clone)]
pub(crate) struct Score<S> {
    priority: usize,
    sequence: usize,
    candidate: S,
}

impl<S> Score<S> {
    pub(crate) fn new(priority: usize, sequence: usize, candidate: S) -> Self {
        Self {
            priority,
            sequence,
            candidate,
        }
    }

    pub(crate) fn unwrap(self) -> S {
        self.candidate
    }
}

impl<S> PartialEq for Score<S> {
    fn eq(&self, other: &Self) -> bool {
        (self.priority, self.sequence).eq(&(other.priority, other.sequence))
    }
}

impl<S> Eq for Score<S> {}

impl<S> Ord for Score<S> {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.priority, self.sequence)
            .cmp(&(other.priority, other.sequence))
            .reverse()
    }
}

impl<S> PartialOrd for Score<S> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
