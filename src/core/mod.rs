// Core exports
pub mod comparison;
pub mod units;
pub mod views;

pub use comparison::{compare_readings, sunset_diff_hours};
pub use units::{resolve_units, units_letter};
pub use views::{capitalize, comparison_view, home_view, results_view};
