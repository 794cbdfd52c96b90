pub mod maths_utils;

pub use maths_utils::{format_average, format_numbers};
