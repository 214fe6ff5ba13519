pub mod calorie_summary;
pub mod date_range;
