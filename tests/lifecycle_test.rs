//! Tests for the order lifecycle state machine, pricing rule, and search
//! matching. All pure logic — no server or database needed.
//!
//! Run with: `cargo test --test lifecycle_test`

use chrono::Utc;
use uuid::Uuid;

use creatorlink_backend::models::orders::{
    LifecycleAction, Model as Order, ProductType, Status, price_for_deadline,
};

fn order(title: &str, company: Option<&str>, product: &str) -> Order {
    let now = Utc::now();
    Order {
        id: Uuid::new_v4(),
        startup_id: Uuid::new_v4(),
        creator_id: Uuid::new_v4(),
        status: Status::Pending,
        project_title: title.to_string(),
        project_brief: "30s unboxing reel".to_string(),
        product_name: product.to_string(),
        product_type: ProductType::Online,
        product_description: None,
        company_name: company.map(str::to_string),
        website_link: None,
        instagram_handle: None,
        video_type: "1 Reel (15-30 sec)".to_string(),
        deadline_days: 3,
        price: price_for_deadline(3),
        product_media_urls: vec![],
        final_video_url: None,
        final_drive_link: None,
        delivery_note: None,
        revision_note: None,
        created_at: now,
        updated_at: now,
    }
}

// ── Pricing ──

#[test]
fn test_price_table() {
    assert_eq!(price_for_deadline(1), 2000);
    assert_eq!(price_for_deadline(3), 1500);
    assert_eq!(price_for_deadline(4), 1000);
}

#[test]
fn test_unknown_deadlines_fall_back_to_default_rate() {
    assert_eq!(price_for_deadline(0), 1500);
    assert_eq!(price_for_deadline(2), 1500);
    assert_eq!(price_for_deadline(7), 1500);
    assert_eq!(price_for_deadline(-1), 1500);
}

// ── State machine ──

const ALL_STATUSES: [Status; 6] = [
    Status::Pending,
    Status::InProgress,
    Status::Rejected,
    Status::Delivered,
    Status::RevisionRequested,
    Status::Completed,
];

const ALL_ACTIONS: [LifecycleAction; 5] = [
    LifecycleAction::Accept,
    LifecycleAction::Reject,
    LifecycleAction::Deliver,
    LifecycleAction::RequestRevision,
    LifecycleAction::Complete,
];

#[test]
fn test_every_defined_edge() {
    assert_eq!(
        Status::Pending.apply(LifecycleAction::Accept),
        Some(Status::InProgress)
    );
    assert_eq!(
        Status::Pending.apply(LifecycleAction::Reject),
        Some(Status::Rejected)
    );
    assert_eq!(
        Status::InProgress.apply(LifecycleAction::Deliver),
        Some(Status::Delivered)
    );
    assert_eq!(
        Status::InProgress.apply(LifecycleAction::RequestRevision),
        Some(Status::RevisionRequested)
    );
    assert_eq!(
        Status::RevisionRequested.apply(LifecycleAction::Deliver),
        Some(Status::Delivered)
    );
    assert_eq!(
        Status::Delivered.apply(LifecycleAction::Complete),
        Some(Status::Completed)
    );
}

/// Everything outside the six defined edges is rejected, for every
/// status/action combination.
#[test]
fn test_everything_else_is_rejected() {
    let allowed = [
        (Status::Pending, LifecycleAction::Accept),
        (Status::Pending, LifecycleAction::Reject),
        (Status::InProgress, LifecycleAction::Deliver),
        (Status::InProgress, LifecycleAction::RequestRevision),
        (Status::RevisionRequested, LifecycleAction::Deliver),
        (Status::Delivered, LifecycleAction::Complete),
    ];

    for status in ALL_STATUSES {
        for action in ALL_ACTIONS {
            let expected = allowed.contains(&(status, action));
            assert_eq!(
                status.apply(action).is_some(),
                expected,
                "{status:?} + {action:?}"
            );
        }
    }
}

#[test]
fn test_terminal_statuses_accept_nothing() {
    for status in [Status::Rejected, Status::Completed] {
        assert!(status.is_terminal());
        for action in ALL_ACTIONS {
            assert_eq!(status.apply(action), None, "{status:?} + {action:?}");
        }
    }
}

#[test]
fn test_no_state_skipping_from_pending() {
    // A pending order cannot be delivered or completed directly.
    assert_eq!(Status::Pending.apply(LifecycleAction::Deliver), None);
    assert_eq!(Status::Pending.apply(LifecycleAction::Complete), None);
    assert_eq!(Status::Pending.apply(LifecycleAction::RequestRevision), None);
}

#[test]
fn test_revision_loop_allows_redelivery() {
    let status = Status::InProgress
        .apply(LifecycleAction::RequestRevision)
        .unwrap();
    assert_eq!(status.apply(LifecycleAction::Deliver), Some(Status::Delivered));
}

// ── Product type parsing ──

#[test]
fn test_product_type_parse() {
    assert_eq!(ProductType::parse("physical"), Some(ProductType::Physical));
    assert_eq!(ProductType::parse("online"), Some(ProductType::Online));
    assert_eq!(ProductType::parse("Physical"), None);
    assert_eq!(ProductType::parse(""), None);
}

// ── Search matching ──

#[test]
fn test_search_is_case_insensitive_across_fields() {
    let o = order("Summer Launch", Some("Acme Labs"), "GlowSerum");

    assert!(o.matches_search("summer"));
    assert!(o.matches_search("ACME"));
    assert!(o.matches_search("glowserum"));
    assert!(o.matches_search("  Launch  "));
    assert!(!o.matches_search("winter"));
}

#[test]
fn test_blank_search_matches_everything() {
    let o = order("Summer Launch", None, "GlowSerum");

    assert!(o.matches_search(""));
    assert!(o.matches_search("   "));
}

#[test]
fn test_search_handles_missing_company_name() {
    let o = order("Summer Launch", None, "GlowSerum");

    assert!(!o.matches_search("acme"));
    assert!(o.matches_search("serum"));
}
