use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

use crate::models::orders::{self, Status};

/// One bar of the trailing-week earnings chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeekPoint {
    /// Weekday abbreviation, e.g. "Mon".
    pub label: String,
    /// Sum of prices of orders delivered on that day.
    pub value: i64,
}

/// Creator dashboard numbers.
///
/// Earnings are keyed off `delivered`, not `completed`: a creator has earned
/// the fee once the work is handed over, whether or not the startup has
/// formally accepted it yet.
#[derive(Debug, Clone, Serialize)]
pub struct CreatorMetrics {
    pub completed_earnings: i64,
    pub pending_count: usize,
    pub active_count: usize,
    pub weekly: Vec<WeekPoint>,
}

/// Startup dashboard numbers. Spend only counts formally completed orders.
#[derive(Debug, Clone, Serialize)]
pub struct StartupMetrics {
    pub total_spend: i64,
    pub active_count: usize,
    pub completed_count: usize,
}

/// Role-dispatched dashboard payload.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "role", rename_all = "snake_case")]
pub enum DashboardMetrics {
    Startup(StartupMetrics),
    Creator(CreatorMetrics),
}

/// Compute the creator dashboard from the creator's orders.
///
/// `now` anchors the weekly chart so the computation is deterministic under
/// test; handlers pass `Utc::now()`.
pub fn creator_metrics(orders: &[orders::Model], now: DateTime<Utc>) -> CreatorMetrics {
    let completed_earnings = orders
        .iter()
        .filter(|o| o.status == Status::Delivered)
        .map(|o| o.price as i64)
        .sum();

    let pending_count = orders
        .iter()
        .filter(|o| o.status == Status::Pending)
        .count();

    let active_count = orders
        .iter()
        .filter(|o| matches!(o.status, Status::InProgress | Status::RevisionRequested))
        .count();

    CreatorMetrics {
        completed_earnings,
        pending_count,
        active_count,
        weekly: weekly_series(orders, now),
    }
}

/// Earnings per day over the trailing 7 calendar days (including today),
/// oldest first. Always exactly 7 points; days with no deliveries are zero.
/// Delivered orders are bucketed by the date of their `updated_at`, the
/// moment the delivery write stamped them.
pub fn weekly_series(orders: &[orders::Model], now: DateTime<Utc>) -> Vec<WeekPoint> {
    (0i64..7)
        .rev()
        .map(|offset| {
            let day = (now - Duration::days(offset)).date_naive();

            let value = orders
                .iter()
                .filter(|o| o.status == Status::Delivered)
                .filter(|o| o.updated_at.date_naive() == day)
                .map(|o| o.price as i64)
                .sum();

            WeekPoint {
                label: day.format("%a").to_string(),
                value,
            }
        })
        .collect()
}

/// Compute the startup dashboard from the startup's orders.
pub fn startup_metrics(orders: &[orders::Model]) -> StartupMetrics {
    let total_spend = orders
        .iter()
        .filter(|o| o.status == Status::Completed)
        .map(|o| o.price as i64)
        .sum();

    let active_count = orders.iter().filter(|o| !o.status.is_terminal()).count();

    let completed_count = orders
        .iter()
        .filter(|o| o.status == Status::Completed)
        .count();

    StartupMetrics {
        total_spend,
        active_count,
        completed_count,
    }
}
