//! Tests for the dashboard metric computations.
//!
//! Run with: `cargo test --test metrics_test`

use chrono::{DateTime, Duration, TimeZone, Utc};
use uuid::Uuid;

use creatorlink_backend::metrics::{creator_metrics, startup_metrics, weekly_series};
use creatorlink_backend::models::orders::{Model as Order, ProductType, Status};

/// A fixed anchor so weekly bucketing is deterministic.
fn anchor() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 8, 1, 12, 0, 0).unwrap()
}

fn order(status: Status, price: i32, updated_at: DateTime<Utc>) -> Order {
    Order {
        id: Uuid::new_v4(),
        startup_id: Uuid::new_v4(),
        creator_id: Uuid::new_v4(),
        status,
        project_title: "Launch reel".to_string(),
        project_brief: "30s unboxing".to_string(),
        product_name: "GlowSerum".to_string(),
        product_type: ProductType::Online,
        product_description: None,
        company_name: None,
        website_link: None,
        instagram_handle: None,
        video_type: "1 Reel (15-30 sec)".to_string(),
        deadline_days: 3,
        price,
        product_media_urls: vec![],
        final_video_url: None,
        final_drive_link: None,
        delivery_note: None,
        revision_note: None,
        created_at: updated_at,
        updated_at,
    }
}

// ── Creator metrics ──

#[test]
fn test_empty_order_set_is_all_zero() {
    let m = creator_metrics(&[], anchor());

    assert_eq!(m.completed_earnings, 0);
    assert_eq!(m.pending_count, 0);
    assert_eq!(m.active_count, 0);
    assert_eq!(m.weekly.len(), 7);
    assert!(m.weekly.iter().all(|p| p.value == 0));
}

#[test]
fn test_earnings_only_count_delivered_orders() {
    let now = anchor();
    let orders = vec![
        order(Status::Delivered, 2000, now),
        order(Status::Delivered, 1000, now),
        order(Status::Completed, 1500, now),
        order(Status::InProgress, 1500, now),
        order(Status::Pending, 2000, now),
        order(Status::Rejected, 2000, now),
    ];

    let m = creator_metrics(&orders, now);
    assert_eq!(m.completed_earnings, 3000);
}

#[test]
fn test_pending_and_active_counts() {
    let now = anchor();
    let orders = vec![
        order(Status::Pending, 1500, now),
        order(Status::Pending, 1500, now),
        order(Status::InProgress, 1500, now),
        order(Status::RevisionRequested, 1500, now),
        order(Status::Delivered, 1500, now),
        order(Status::Rejected, 1500, now),
    ];

    let m = creator_metrics(&orders, now);
    assert_eq!(m.pending_count, 2);
    assert_eq!(m.active_count, 2);
}

// ── Weekly series ──

#[test]
fn test_weekly_series_has_seven_points_oldest_first() {
    let now = anchor();
    let series = weekly_series(&[], now);

    assert_eq!(series.len(), 7);
    // Aug 1 2025 is a Friday; six days earlier is a Saturday.
    assert_eq!(series[0].label, "Sat");
    assert_eq!(series[6].label, "Fri");
}

#[test]
fn test_weekly_series_buckets_by_delivery_day() {
    let now = anchor();
    let orders = vec![
        // Delivered today and two days ago.
        order(Status::Delivered, 2000, now),
        order(Status::Delivered, 1000, now - Duration::days(2)),
        order(Status::Delivered, 1500, now - Duration::days(2)),
        // Delivered outside the window: ignored.
        order(Status::Delivered, 2000, now - Duration::days(10)),
        // Not delivered: ignored even inside the window.
        order(Status::InProgress, 2000, now),
    ];

    let series = weekly_series(&orders, now);

    assert_eq!(series[6].value, 2000);
    assert_eq!(series[4].value, 2500);
    assert_eq!(series[5].value, 0);
    assert_eq!(series.iter().map(|p| p.value).sum::<i64>(), 4500);
}

// ── Startup metrics ──

#[test]
fn test_startup_spend_only_counts_completed() {
    let now = anchor();
    let orders = vec![
        order(Status::Completed, 2000, now),
        order(Status::Completed, 1000, now),
        order(Status::Delivered, 1500, now),
        order(Status::Pending, 1500, now),
    ];

    let m = startup_metrics(&orders);
    assert_eq!(m.total_spend, 3000);
    assert_eq!(m.completed_count, 2);
}

#[test]
fn test_startup_active_count_is_everything_non_terminal() {
    let now = anchor();
    let orders = vec![
        order(Status::Pending, 1500, now),
        order(Status::InProgress, 1500, now),
        order(Status::RevisionRequested, 1500, now),
        order(Status::Delivered, 1500, now),
        order(Status::Rejected, 1500, now),
        order(Status::Completed, 1500, now),
    ];

    let m = startup_metrics(&orders);
    assert_eq!(m.active_count, 4);
}

#[test]
fn test_startup_metrics_on_empty_set() {
    let m = startup_metrics(&[]);

    assert_eq!(m.total_spend, 0);
    assert_eq!(m.active_count, 0);
    assert_eq!(m.completed_count, 0);
}
