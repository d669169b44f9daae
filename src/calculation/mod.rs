//! Calculation logic for the shift tracker.
//!
//! This module contains the pure functions that derive live values from
//! stored state: open-shift duration and earnings per employee, renderer
//! rows, and department aggregates (headcount, total hours, total earnings,
//! average rate, per-position breakdown). Each function takes the instant to
//! evaluate at; none of them read a clock.

mod aggregates;
mod live;

pub use aggregates::{
    active_count, average_hourly_rate, group_by_position, summarize, summarize_at, total_earnings,
    total_hours,
};
pub use live::{
    MILLIS_PER_HOUR, current_earnings, current_shift_duration, employee_view, employee_views,
    hours_between, hours_today,
};
