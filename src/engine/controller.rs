use std::time::Duration;

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;
use crate::config::{DEMO, DemoCase};
use crate::data::FetchNumbers;
use crate::domain::{Category, WindowStore};

use super::state::{AppError, DisplayResult};

/// Owns the per-category windows and drives one fetch/update cycle per action.
/// Knows nothing about the UI toolkit.
#[derive(Debug, Default)]
pub struct AverageController {
    store: WindowStore,
    selected: Category,

    /// Advisory only: the UI disables the fetch button while this is set.
    busy: bool,

    display: Option<DisplayResult>,
    last_error: Option<AppError>,
}

impl AverageController {
    pub fn new(selected: Category) -> Self {
        Self::with_store(WindowStore::default(), selected)
    }

    pub fn with_store(store: WindowStore, selected: Category) -> Self {
        Self {
            store,
            selected,
            busy: false,
            display: None,
            last_error: None,
        }
    }

    // --- ACCESSORS ---

    pub fn selected_category(&self) -> Category {
        self.selected
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn display(&self) -> Option<&DisplayResult> {
        self.display.as_ref()
    }

    pub fn last_error(&self) -> Option<&AppError> {
        self.last_error.as_ref()
    }

    pub fn store(&self) -> &WindowStore {
        &self.store
    }

    pub fn endpoint_label(&self) -> String {
        self.selected.display_endpoint()
    }

    // --- ACTIONS ---

    /// Switch the active category. Windows are left alone and nothing is fetched.
    pub fn select_category(&mut self, category: Category) {
        if self.selected == category {
            return;
        }
        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_ui_interactions {
            log::info!("Category switched to {}", category);
        }
        self.selected = category;
    }

    /// Enter the busy state and hand back the category to fetch.
    /// Returns None while a fetch is already in flight.
    pub fn begin_fetch(&mut self) -> Option<Category> {
        if self.busy {
            return None;
        }
        self.busy = true;
        self.last_error = None;
        Some(self.selected)
    }

    /// Fold fetched numbers into the window they were requested for and publish
    /// the result. Leaves the busy state.
    pub fn complete_fetch(&mut self, category: Category, fetched: Vec<i64>) -> &DisplayResult {
        let update = self.store.update(category, &fetched);

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_window_updates {
            log::info!(
                "[{}] {:?} + {:?} -> {:?}",
                category.segment(),
                update.previous,
                fetched,
                update.current
            );
        }

        self.busy = false;
        self.display.insert(DisplayResult::from_update(category, update, fetched))
    }

    /// Surface an orchestration failure and leave the busy state.
    pub fn fail_fetch(&mut self, error: AppError) {
        log::error!("❌ Fetch cycle failed: {}", error);
        self.last_error = Some(error);
        self.busy = false;
    }

    /// Whole cycle in one call: fetch the selected category, update, publish.
    /// Does not consult the busy flag.
    pub async fn run_fetch_cycle(
        &mut self,
        fetcher: &dyn FetchNumbers,
        deadline: Duration,
    ) -> &DisplayResult {
        self.busy = true;
        self.last_error = None;
        let category = self.selected;
        let fetched = fetcher.fetch(category, deadline).await;
        self.complete_fetch(category, fetched)
    }

    /// Show a canned result. Resets the fixture's window first; never fetches.
    pub fn run_demo_case(&mut self, case: DemoCase) -> &DisplayResult {
        let fixture = DEMO.fixture(case);

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_ui_interactions {
            log::info!("Running demo: {}", case);
        }

        self.store.reset(fixture.category, fixture.reset_window);
        self.last_error = None;
        self.display.insert(DisplayResult::from_fixture(fixture))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Hands out canned batches and records which categories were asked for.
    struct StubFetcher {
        batches: Mutex<Vec<Vec<i64>>>,
        requested: Mutex<Vec<Category>>,
    }

    impl StubFetcher {
        fn new(batches: Vec<Vec<i64>>) -> Self {
            Self {
                batches: Mutex::new(batches),
                requested: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl FetchNumbers for StubFetcher {
        async fn fetch(&self, category: Category, _deadline: Duration) -> Vec<i64> {
            self.requested.lock().unwrap().push(category);
            let mut batches = self.batches.lock().unwrap();
            if batches.is_empty() {
                Vec::new()
            } else {
                batches.remove(0)
            }
        }
    }

    const DEADLINE: Duration = Duration::from_millis(500);

    #[tokio::test]
    async fn first_fetch_matches_scenario_a() {
        let fetcher = StubFetcher::new(vec![vec![2, 4, 6, 8]]);
        let mut controller = AverageController::new(Category::Even);

        let result = controller.run_fetch_cycle(&fetcher, DEADLINE).await.clone();

        assert!(result.previous_window.is_empty());
        assert_eq!(result.current_window, vec![2, 4, 6, 8]);
        assert_eq!(result.fetched_numbers, vec![2, 4, 6, 8]);
        assert_eq!(result.average, "5.00");
        assert!(!controller.is_busy());
    }

    #[tokio::test]
    async fn empty_fetch_leaves_window_and_reports_zero() {
        let fetcher = StubFetcher::new(vec![]);
        let mut controller = AverageController::new(Category::Prime);

        let result = controller.run_fetch_cycle(&fetcher, DEADLINE).await;

        assert!(result.current_window.is_empty());
        assert_eq!(result.previous_window, result.current_window);
        assert_eq!(result.average, "0.00");
    }

    #[tokio::test]
    async fn fetches_the_selected_category() {
        let fetcher = StubFetcher::new(vec![vec![1, 1, 2], vec![3]]);
        let mut controller = AverageController::new(Category::Fibonacci);

        controller.run_fetch_cycle(&fetcher, DEADLINE).await;
        controller.select_category(Category::Prime);
        controller.run_fetch_cycle(&fetcher, DEADLINE).await;

        assert_eq!(
            *fetcher.requested.lock().unwrap(),
            vec![Category::Fibonacci, Category::Prime]
        );
        assert_eq!(
            controller.store().window(Category::Fibonacci).to_vec(),
            vec![1, 2]
        );
        assert_eq!(controller.store().window(Category::Prime).to_vec(), vec![3]);
    }

    #[test]
    fn busy_flag_spans_begin_to_complete() {
        let mut controller = AverageController::new(Category::Even);

        assert_eq!(controller.begin_fetch(), Some(Category::Even));
        assert!(controller.is_busy());
        assert_eq!(controller.begin_fetch(), None);

        controller.complete_fetch(Category::Even, vec![4]);
        assert!(!controller.is_busy());
        assert_eq!(controller.begin_fetch(), Some(Category::Even));
    }

    #[test]
    fn failure_leaves_busy_and_records_error() {
        let mut controller = AverageController::new(Category::Even);
        controller.begin_fetch();
        controller.fail_fetch(AppError::WorkerLost);

        assert!(!controller.is_busy());
        assert_eq!(controller.last_error(), Some(&AppError::WorkerLost));

        // The next attempt starts clean
        controller.begin_fetch();
        assert!(controller.last_error().is_none());
    }

    #[test]
    fn result_lands_in_requested_category_after_switch() {
        let mut controller = AverageController::new(Category::Even);
        let category = controller.begin_fetch().unwrap();
        controller.select_category(Category::Random);

        let result = controller.complete_fetch(category, vec![10, 20]).clone();

        assert_eq!(result.category, Category::Even);
        assert!(controller.store().window(Category::Random).is_empty());
        assert_eq!(controller.store().window(Category::Even).to_vec(), vec![10, 20]);
    }

    #[test]
    fn selecting_a_category_keeps_windows() {
        let mut controller = AverageController::new(Category::Even);
        controller.complete_fetch(Category::Even, vec![2, 4]);
        controller.select_category(Category::Prime);
        controller.select_category(Category::Even);

        assert_eq!(controller.store().window(Category::Even).to_vec(), vec![2, 4]);
        assert_eq!(controller.endpoint_label(), "http://localhost:9876/numbers/e");
    }

    #[test]
    fn demo_case_one_resets_even_window() {
        let mut controller = AverageController::new(Category::Even);
        controller.complete_fetch(Category::Even, vec![100, 200]);

        let result = controller.run_demo_case(DemoCase::First).clone();

        assert!(result.previous_window.is_empty());
        assert_eq!(result.current_window, vec![2, 4, 6, 8]);
        assert_eq!(result.fetched_numbers, vec![2, 4, 6, 8]);
        assert_eq!(result.average, "5.00");
        assert!(controller.store().window(Category::Even).is_empty());
    }

    #[test]
    fn demo_case_two_shows_fixture_values() {
        let mut controller = AverageController::new(Category::Prime);
        let result = controller.run_demo_case(DemoCase::Second).clone();

        assert_eq!(result.category, Category::Even);
        assert_eq!(result.previous_window, (2..=20).step_by(2).collect::<Vec<i64>>());
        assert_eq!(result.current_window, (12..=30).step_by(2).collect::<Vec<i64>>());
        assert_eq!(result.fetched_numbers.len(), 11);
        assert_eq!(result.average, "23.40");
        assert_eq!(
            controller.store().window(Category::Even).to_vec(),
            result.previous_window
        );
        // Selection is not changed by the demo buttons
        assert_eq!(controller.selected_category(), Category::Prime);
    }

    #[test]
    fn demo_case_two_fixture_agrees_with_window_update() {
        // The canned current window is what the real update would produce
        let mut controller = AverageController::new(Category::Even);
        controller.run_demo_case(DemoCase::Second);
        let fetched = DEMO.second.fetched.to_vec();

        let result = controller.complete_fetch(Category::Even, fetched);
        assert_eq!(result.current_window, DEMO.second.current_window.to_vec());
    }

    #[tokio::test]
    async fn unchanged_window_when_fetch_returns_nothing_after_data() {
        let fetcher = StubFetcher::new(vec![vec![5, 6], vec![]]);
        let mut controller = AverageController::new(Category::Random);

        controller.run_fetch_cycle(&fetcher, DEADLINE).await;
        let result = controller.run_fetch_cycle(&fetcher, DEADLINE).await;

        assert_eq!(result.previous_window, vec![5, 6]);
        assert_eq!(result.current_window, vec![5, 6]);
        assert_eq!(result.average, "5.50");
    }
}
