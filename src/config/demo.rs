//! config/demo.rs Canned demonstration cases.
//!
//! Two fixed results used to check the rendering path by hand. They never
//! touch the network. Values are kept exactly as shown to users, including
//! the displayed average of the second case.

use strum_macros::{Display, EnumIter};

use crate::domain::Category;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Display)]
pub enum DemoCase {
    #[strum(to_string = "Test Case 1")]
    First,
    #[strum(to_string = "Test Case 2")]
    Second,
}

/// One canned result plus the window state it forces before display
pub struct DemoFixture {
    /// Category whose window gets overwritten
    pub category: Category,
    /// State the window is reset to (also shown as the previous window)
    pub reset_window: &'static [i64],
    pub fetched: &'static [i64],
    pub current_window: &'static [i64],
    pub average: &'static str,
}

pub struct DemoConfig {
    pub first: DemoFixture,
    pub second: DemoFixture,
}

impl DemoConfig {
    pub fn fixture(&self, case: DemoCase) -> &DemoFixture {
        match case {
            DemoCase::First => &self.first,
            DemoCase::Second => &self.second,
        }
    }
}

pub const DEMO: DemoConfig = DemoConfig {
    first: DemoFixture {
        category: Category::Even,
        reset_window: &[],
        fetched: &[2, 4, 6, 8],
        current_window: &[2, 4, 6, 8],
        average: "5.00",
    },
    second: DemoFixture {
        category: Category::Even,
        reset_window: &[2, 4, 6, 8, 10, 12, 14, 16, 18, 20],
        fetched: &[10, 12, 14, 16, 18, 20, 22, 24, 26, 28, 30],
        current_window: &[12, 14, 16, 18, 20, 22, 24, 26, 28, 30],
        average: "23.40",
    },
};
