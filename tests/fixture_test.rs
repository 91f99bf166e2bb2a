// Integration tests for the fixture composition layer
//
// The four-user fixture file carries exactly one active administrator and one
// active regular user; these tests pin the resolution rules, the hard-stop
// policy for required records, and the tolerant policy for module data.

use erp_e2e_kit::{DataProvider, ErpFixtures, Error, SimDriver, TestConfig};
use serde_json::json;

fn fixtures() -> ErpFixtures<SimDriver> {
    let data = DataProvider::new(concat!(env!("CARGO_MANIFEST_DIR"), "/testdata"));
    ErpFixtures::new(SimDriver::new(), data, TestConfig::default())
}

#[tokio::test]
async fn admin_fixture_resolves_the_active_administrator() {
    let fixtures = fixtures();
    let admin = fixtures.admin_user().await.expect("active admin exists");
    assert_eq!(admin.username, "admin.garcia");
    assert!(admin.active);
}

#[tokio::test]
async fn regular_user_fixture_resolves_the_active_user() {
    let fixtures = fixtures();
    let user = fixtures.regular_user().await.expect("active user exists");
    assert_eq!(user.username, "carlos.mejia");
}

#[tokio::test]
async fn inactive_administrator_does_not_satisfy_the_admin_fixture() {
    // users-test.json also carries an inactive administrator; resolution
    // must never fall back to it
    let fixtures = fixtures();
    let admin = fixtures.admin_user().await.expect("resolution succeeds");
    assert_ne!(admin.username, "old.admin");
}

#[tokio::test]
async fn user_set_is_loaded_once_and_shared() {
    let fixtures = fixtures();
    let first = fixtures.test_users().await.expect("first acquisition");
    let second = fixtures.test_users().await.expect("second acquisition");
    assert_eq!(first.len(), 4);
    // memoized: both borrows point at the same allocation
    assert!(std::ptr::eq(first.as_ptr(), second.as_ptr()));
}

#[tokio::test]
async fn missing_active_administrator_fails_loudly() {
    let dir = tempfile::tempdir().expect("tempdir");
    let data = DataProvider::new(dir.path());

    // same file minus the active administrator record
    let users = vec![
        json!({
            "id": 2, "username": "carlos.mejia", "password": "Usr#2024",
            "email": "carlos.mejia@paisaerp.com", "role": "user",
            "company": "PaisaERP", "active": true, "permissions": []
        }),
        json!({
            "id": 3, "username": "old.admin", "password": "Legacy#2019",
            "email": "old.admin@paisaerp.com", "role": "administrator",
            "company": "PaisaERP", "active": false, "permissions": []
        }),
    ]
    .into_iter()
    .map(|v| v.as_object().cloned().expect("object literal"))
    .collect::<Vec<_>>();
    data.create_sample_data_file("users-test.json", &users)
        .await
        .expect("write fixture file");

    let fixtures = ErpFixtures::new(SimDriver::new(), data, TestConfig::default());
    let err = fixtures
        .admin_user()
        .await
        .expect_err("no active administrator in the file");
    match err {
        Error::MissingFixtureRecord { criteria } => {
            assert!(criteria.contains("administrator"), "criteria: {criteria}");
            assert!(criteria.contains("active=true"), "criteria: {criteria}");
        }
        other => panic!("expected MissingFixtureRecord, got: {other}"),
    }

    // the regular-user fixture still resolves from the same file
    let user = fixtures.regular_user().await.expect("user still present");
    assert_eq!(user.username, "carlos.mejia");
}

#[tokio::test]
async fn module_data_for_known_module_loads() {
    let fixtures = fixtures();
    let records = fixtures.module_data("inventory").await;
    assert_eq!(records.len(), 3);
}

#[tokio::test]
async fn module_data_without_file_degrades_to_empty() {
    let fixtures = fixtures();
    let records = fixtures.module_data("payroll").await;
    assert!(records.is_empty());
}
