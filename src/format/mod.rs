//! Formatting Helpers
//!
//! Pure functions that turn raw dataset values into display strings. None of
//! them fail: absent or malformed input degrades to a placeholder.

pub mod currency;
pub mod dates;
pub mod labels;

pub use currency::{format_currency, format_number, Currency};
pub use dates::{
    calculate_age, calculate_tenure, format_date, format_period, parse_date,
    whole_months_between, NOT_AVAILABLE,
};
pub use labels::{
    capitalize, initials, status_class, status_icon, status_label, sub_type_label,
};
