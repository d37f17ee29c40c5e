use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::io::Write;
use tempfile::{NamedTempFile, tempdir};

mod common;

#[test]
fn test_malformed_events_are_skipped() {
    let dir = tempdir().unwrap();
    let mut events = NamedTempFile::new().unwrap();
    writeln!(events, "action, product, quantity").unwrap();
    // Valid add
    writeln!(events, "add, 1, 1").unwrap();
    // Unknown action
    writeln!(events, "buy, 1, 1").unwrap();
    // Non-integer product id
    writeln!(events, "add, cake, 1").unwrap();
    // Update without quantity
    writeln!(events, "update, 1, ").unwrap();
    // Valid add again
    writeln!(events, "add, 2, 1").unwrap();

    let mut cmd = common::cart_cmd(dir.path());
    cmd.arg("replay").arg(events.path());

    cmd.assert()
        .success()
        .stderr(predicate::str::contains("Error reading event"))
        .stderr(predicate::str::contains("Error processing event"))
        .stdout(predicate::str::contains("Total: S/ 75.00"));
}

#[test]
fn test_unknown_products_in_stream_are_ignored() {
    let dir = tempdir().unwrap();
    let mut events = NamedTempFile::new().unwrap();
    writeln!(events, "action, product, quantity").unwrap();
    writeln!(events, "add, 999, 3").unwrap();
    writeln!(events, "add, 3, 1").unwrap();
    writeln!(events, "remove, 999, ").unwrap();

    let mut cmd = common::cart_cmd(dir.path());
    cmd.arg("replay").arg(events.path());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Items in cart: 1"))
        .stdout(predicate::str::contains("Total: S/ 30.00"));
}

#[test]
fn test_corrupted_cart_file_starts_empty() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("shoppingCart.json"), "{{ not json").unwrap();

    let mut cmd = common::cart_cmd(dir.path());
    cmd.arg("show");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Your cart is empty"));

    // The next mutation overwrites the corrupt value.
    common::cart_cmd(dir.path()).args(["add", "1"]).output().unwrap();
    let persisted = fs::read_to_string(dir.path().join("shoppingCart.json")).unwrap();
    assert_eq!(persisted, r#"[{"productId":1,"quantity":1}]"#);
}

#[test]
fn test_stale_product_in_saved_cart_is_hidden() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("shoppingCart.json"),
        r#"[{"productId":77,"quantity":4},{"productId":2,"quantity":1}]"#,
    )
    .unwrap();

    let mut cmd = common::cart_cmd(dir.path());
    cmd.arg("show");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Strawberry Cheesecake"))
        .stdout(predicate::str::contains("Total: S/ 40.00"));
}

#[test]
fn test_invalid_catalog_feed_fails() {
    let dir = tempdir().unwrap();
    let mut catalog = NamedTempFile::new().unwrap();
    writeln!(catalog, "id, name, description, price, images, category").unwrap();
    writeln!(catalog, "1, Cake, , -5.00, cake.jpg, menu").unwrap();

    let mut cmd = common::cart_cmd(dir.path());
    cmd.arg("--catalog").arg(catalog.path()).arg("show");

    cmd.assert().failure();
}

#[test]
fn test_saved_cart_with_huge_quantities_still_renders() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("shoppingCart.json"),
        r#"[{"productId":1,"quantity":9223372036854775807},{"productId":2,"quantity":9223372036854775807}]"#,
    )
    .unwrap();

    let mut show = common::cart_cmd(dir.path());
    show.arg("show");
    show.assert()
        .success()
        .stdout(predicate::str::contains("Items in cart: 9223372036854775807"));

    let mut add = common::cart_cmd(dir.path());
    add.args(["add", "3"]);
    add.assert()
        .success()
        .stdout(predicate::str::contains("Lemon Tart added to cart"));
}
