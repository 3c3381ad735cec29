//! Tests for storage object path composition.
//!
//! Run with: `cargo test --test storage_test`

use uuid::Uuid;

use creatorlink_backend::storage::object_path;

#[test]
fn test_path_is_scoped_to_the_actor() {
    let actor = Uuid::new_v4();
    let path = object_path(actor, "product", Some("photo.JPG"));

    assert!(path.starts_with(&format!("{actor}/product-")));
    assert!(path.ends_with(".jpg"));
}

#[test]
fn test_missing_filename_gets_a_fallback_extension() {
    let path = object_path(Uuid::new_v4(), "delivery", None);
    assert!(path.ends_with(".bin"));
}

#[test]
fn test_unreasonable_extension_is_replaced() {
    // A "filename" with no usable extension should not leak into the path.
    let path = object_path(Uuid::new_v4(), "product", Some("archive.tar.backup-of-everything"));
    assert!(path.ends_with(".bin"));
}

#[test]
fn test_paths_are_unique_per_call() {
    let actor = Uuid::new_v4();
    let a = object_path(actor, "product", Some("a.png"));
    let b = object_path(actor, "product", Some("a.png"));

    assert_ne!(a, b);
}
