use serde::Serialize;
use std::collections::HashMap;
use strum::IntoEnumIterator;

use crate::config::WINDOW;
use crate::domain::category::Category;
use crate::domain::number_window::NumberWindow;

/// Before/after snapshot produced by a single update.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct WindowUpdate {
    pub previous: Vec<i64>,
    pub current: Vec<i64>,
}

/// Per-category sliding windows. Owned by the controller for the session.
#[derive(Debug, Clone)]
pub struct WindowStore {
    windows: HashMap<Category, NumberWindow>,
    capacity: usize,
}

impl Default for WindowStore {
    fn default() -> Self {
        Self::with_capacity(WINDOW.capacity)
    }
}

impl WindowStore {
    pub fn with_capacity(capacity: usize) -> Self {
        let windows = Category::iter()
            .map(|cat| (cat, NumberWindow::with_capacity(capacity)))
            .collect();
        Self { windows, capacity }
    }

    /// Fold `incoming` into the window for `category`, in input order.
    /// Other categories are untouched. Any input, including empty, is valid.
    pub fn update(&mut self, category: Category, incoming: &[i64]) -> WindowUpdate {
        let window = self.window_mut(category);
        let previous = window.to_vec();
        window.extend_from(incoming);
        WindowUpdate {
            previous,
            current: window.to_vec(),
        }
    }

    pub fn window(&self, category: Category) -> &NumberWindow {
        // Every category is seeded in the constructor
        &self.windows[&category]
    }

    /// Replace a window wholesale. Values still pass through the dedup and
    /// capacity rule so the window stays well-formed.
    pub fn reset(&mut self, category: Category, values: &[i64]) {
        let window = self.window_mut(category);
        window.clear();
        window.extend_from(values);
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    fn window_mut(&mut self, category: Category) -> &mut NumberWindow {
        let capacity = self.capacity;
        self.windows
            .entry(category)
            .or_insert_with(|| NumberWindow::with_capacity(capacity))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_category_starts_empty() {
        let mut store = WindowStore::default();
        for cat in Category::iter() {
            let update = store.update(cat, &[]);
            assert!(update.previous.is_empty());
            assert_eq!(update.previous, update.current);
        }
    }

    #[test]
    fn repeated_value_is_stored_once() {
        let mut store = WindowStore::default();
        store.update(Category::Prime, &[5]);
        let update = store.update(Category::Prime, &[5]);

        assert_eq!(update.previous, vec![5]);
        assert_eq!(update.current, vec![5]);
    }

    #[test]
    fn keeps_most_recent_ten_in_insertion_order() {
        let mut store = WindowStore::default();
        store.update(Category::Random, &[1, 2, 3, 4, 5, 6, 7]);
        store.update(Category::Random, &[8, 9, 10, 11, 12]);
        let update = store.update(Category::Random, &[13, 14, 15]);

        assert_eq!(update.current.len(), 10);
        assert_eq!(update.current, (6..=15).collect::<Vec<i64>>());
    }

    #[test]
    fn full_window_evicts_oldest() {
        let mut store = WindowStore::default();
        store.update(Category::Fibonacci, &(1..=10).collect::<Vec<i64>>());
        let update = store.update(Category::Fibonacci, &[11]);

        assert_eq!(update.previous, (1..=10).collect::<Vec<i64>>());
        assert_eq!(update.current, (2..=11).collect::<Vec<i64>>());
    }

    #[test]
    fn duplicates_of_existing_values_never_evict() {
        // Full window, batch starts with values already held
        let mut store = WindowStore::default();
        store.reset(Category::Even, &[2, 4, 6, 8, 10, 12, 14, 16, 18, 20]);
        let update = store.update(
            Category::Even,
            &[10, 12, 14, 16, 18, 20, 22, 24, 26, 28, 30],
        );

        assert_eq!(update.previous, vec![2, 4, 6, 8, 10, 12, 14, 16, 18, 20]);
        assert_eq!(update.current, vec![12, 14, 16, 18, 20, 22, 24, 26, 28, 30]);
    }

    #[test]
    fn update_only_touches_its_category() {
        let mut store = WindowStore::default();
        store.update(Category::Even, &[2, 4]);
        store.update(Category::Prime, &[3]);

        assert_eq!(store.window(Category::Even).to_vec(), vec![2, 4]);
        assert_eq!(store.window(Category::Prime).to_vec(), vec![3]);
        assert!(store.window(Category::Random).is_empty());
    }

    #[test]
    fn returned_current_matches_stored_state() {
        let mut store = WindowStore::default();
        let update = store.update(Category::Even, &[2, 4, 6, 8]);
        assert_eq!(update.current, store.window(Category::Even).to_vec());
    }
}
