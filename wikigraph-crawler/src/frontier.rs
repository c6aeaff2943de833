use std::collections::{HashSet, VecDeque};

/// FIFO exploration queue plus the visited-set membership index.
///
/// The visited set holds every identifier ever admitted, so the queue's
/// past and present contents are always a subset of it. Its cardinality is
/// capped at `max`: once the cap is reached no further identifiers are
/// admitted, which bounds breadth of exploration but not edge recording
/// among already-known pages.
#[derive(Debug)]
pub struct Frontier {
    queue: VecDeque<String>,
    visited: HashSet<String>,
    max: usize,
}

impl Frontier {
    pub fn new(max: usize) -> Self {
        Self {
            queue: VecDeque::new(),
            visited: HashSet::new(),
            max,
        }
    }

    /// Admit the seed. Counts against the cap like any other page.
    pub fn seed(&mut self, id: &str) {
        self.admit(id);
    }

    /// Mark `id` visited and enqueue it. Callers check `is_visited` and
    /// `has_capacity` first; a duplicate admit is a no-op.
    pub fn admit(&mut self, id: &str) {
        if self.visited.insert(id.to_string()) {
            self.queue.push_back(id.to_string());
        }
    }

    pub fn pop(&mut self) -> Option<String> {
        self.queue.pop_front()
    }

    pub fn is_exhausted(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn is_visited(&self, id: &str) -> bool {
        self.visited.contains(id)
    }

    pub fn has_capacity(&self) -> bool {
        self.visited.len() < self.max
    }

    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }
}
