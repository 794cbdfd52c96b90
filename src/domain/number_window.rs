use std::collections::VecDeque;

use crate::config::WINDOW;

/// Capacity-bounded FIFO of distinct values, oldest first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberWindow {
    values: VecDeque<i64>,
    capacity: usize,
}

impl Default for NumberWindow {
    fn default() -> Self {
        Self::with_capacity(WINDOW.capacity)
    }
}

impl NumberWindow {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            values: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Offer a single value. Returns true if it was accepted.
    ///
    /// The membership test runs before the capacity test, so a value already
    /// present never evicts anything and keeps its original position.
    pub fn push(&mut self, value: i64) -> bool {
        if self.capacity == 0 || self.values.contains(&value) {
            return false;
        }
        if self.values.len() >= self.capacity {
            self.values.pop_front();
        }
        self.values.push_back(value);
        true
    }

    /// Offer values in input order; returns how many were accepted.
    pub fn extend_from(&mut self, incoming: &[i64]) -> usize {
        incoming.iter().filter(|&&v| self.push(v)).count()
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }

    pub fn to_vec(&self) -> Vec<i64> {
        self.values.iter().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_full(&self) -> bool {
        self.values.len() >= self.capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_is_skipped_without_eviction() {
        let mut window = NumberWindow::with_capacity(3);
        window.extend_from(&[1, 2, 3]);

        assert!(!window.push(1));
        assert_eq!(window.to_vec(), vec![1, 2, 3]);
    }

    #[test]
    fn full_window_evicts_oldest_once_per_accepted_value() {
        let mut window = NumberWindow::with_capacity(3);
        let accepted = window.extend_from(&[1, 2, 3, 4, 5]);

        assert_eq!(accepted, 5);
        assert_eq!(window.to_vec(), vec![3, 4, 5]);
        assert!(window.is_full());
    }

    #[test]
    fn duplicates_inside_one_batch_count_once() {
        let mut window = NumberWindow::default();
        let accepted = window.extend_from(&[7, 7, 8, 7, 8]);

        assert_eq!(accepted, 2);
        assert_eq!(window.to_vec(), vec![7, 8]);
    }

    #[test]
    fn zero_capacity_accepts_nothing() {
        let mut window = NumberWindow::with_capacity(0);
        assert_eq!(window.extend_from(&[1, 2]), 0);
        assert!(window.is_empty());
    }
}
