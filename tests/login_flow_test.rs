// Login flow specs against the simulated ERP
//
// Drives the real page objects and fixture context; only the browser engine
// is simulated. Credential checking, the /dashboard redirect, and the error
// banner all live in the sim's ERP model.

use erp_e2e_kit::{DataProvider, Driver, ErpFixtures, Error, SimDriver, TestConfig};

async fn erp_fixtures() -> ErpFixtures<SimDriver> {
    let config = TestConfig::default();
    let data = DataProvider::new(concat!(env!("CARGO_MANIFEST_DIR"), "/testdata"));
    let users = data
        .user_data(&config.environment)
        .await
        .expect("user fixture file");
    ErpFixtures::new(SimDriver::erp(&config.base_url, users), data, config)
}

#[tokio::test]
async fn valid_administrator_login_lands_on_dashboard() {
    let fixtures = erp_fixtures().await;
    let admin = fixtures.admin_user().await.expect("active admin");

    let login = fixtures.login_page();
    login.open().await.expect("open login page");
    login.verify_loaded().await.expect("form is rendered");
    login
        .login(&admin.username, &admin.password, None)
        .await
        .expect("submit credentials");
    login.verify_login_success().await.expect("redirected");

    let url = fixtures.page().current_url().await;
    assert!(url.ends_with("/dashboard"), "url: {url}");
    // exactly two navigations: the login page, then the redirect
    let visits = fixtures.page().visits();
    assert_eq!(visits.len(), 2);
    assert!(visits[0].ends_with("/login"));
    assert!(visits[1].ends_with("/dashboard"));
}

#[tokio::test]
async fn login_accepts_an_optional_company_selection() {
    let fixtures = erp_fixtures().await;
    let admin = fixtures.admin_user().await.expect("active admin");

    let login = fixtures.login_page();
    login.open().await.expect("open login page");
    login
        .login(&admin.username, &admin.password, Some("PaisaERP"))
        .await
        .expect("submit with company");
    login.verify_login_success().await.expect("redirected");
}

#[tokio::test]
async fn invalid_credentials_surface_the_error_banner() {
    let fixtures = erp_fixtures().await;

    let login = fixtures.login_page();
    login.open().await.expect("open login page");
    login
        .login("admin.garcia", "wrong-password", None)
        .await
        .expect("submission itself succeeds");

    login
        .verify_login_error("Invalid credentials")
        .await
        .expect("error banner visible");

    // no navigation happened
    let url = fixtures.page().current_url().await;
    assert!(url.ends_with("/login"), "url: {url}");
    let err = login
        .verify_login_success()
        .await
        .expect_err("dashboard was never reached");
    assert!(matches!(err, Error::InteractionTimeout { .. }), "got: {err}");
}

#[tokio::test]
async fn inactive_users_cannot_log_in() {
    let fixtures = erp_fixtures().await;

    let login = fixtures.login_page();
    login.open().await.expect("open login page");
    // old.admin carries valid credentials but active=false
    login
        .login("old.admin", "Legacy#2019", None)
        .await
        .expect("submit credentials");
    login
        .verify_login_error("Invalid credentials")
        .await
        .expect("inactive account is rejected");
}

#[tokio::test]
async fn authenticated_page_logs_in_exactly_once_per_context() {
    let fixtures = erp_fixtures().await;

    fixtures
        .authenticated_page()
        .await
        .expect("first acquisition performs the login");
    fixtures
        .authenticated_page()
        .await
        .expect("second acquisition reuses the session");

    assert_eq!(fixtures.page().login_submissions(), 1);
    let url = fixtures.page().current_url().await;
    assert!(url.ends_with("/dashboard"), "url: {url}");
}

#[tokio::test]
async fn authenticated_page_aborts_when_admin_record_is_missing() {
    let dir = tempfile::tempdir().expect("tempdir");
    let data = DataProvider::new(dir.path());
    data.create_sample_data_file("users-test.json", &[])
        .await
        .expect("write empty user file");

    let config = TestConfig::default();
    let fixtures = ErpFixtures::new(SimDriver::erp(&config.base_url, vec![]), data, config);

    let err = fixtures
        .authenticated_page()
        .await
        .expect_err("no administrator to log in as");
    assert!(matches!(err, Error::MissingFixtureRecord { .. }), "got: {err}");
}

#[tokio::test]
async fn cleared_fields_submit_as_empty_credentials() {
    let fixtures = erp_fixtures().await;
    let admin = fixtures.admin_user().await.expect("active admin");

    let login = fixtures.login_page();
    login.open().await.expect("open login page");
    login
        .login(&admin.username, &admin.password, None)
        .await
        .expect("fill and submit");
    // back on the login page for a second attempt
    login.open().await.expect("reopen");
    login.clear_fields().await.expect("clear inputs");
    login
        .login("", "", None)
        .await
        .expect("submit empty form");
    login
        .verify_login_error("Invalid credentials")
        .await
        .expect("empty credentials rejected");
}

#[tokio::test]
async fn remember_me_toggles_the_checkbox() {
    let fixtures = erp_fixtures().await;
    let login = fixtures.login_page();
    login.open().await.expect("open login page");

    login.set_remember_me(true).await.expect("check");
    assert!(fixtures.page().is_checked("#remember-me"));
    login.set_remember_me(false).await.expect("uncheck");
    assert!(!fixtures.page().is_checked("#remember-me"));
}

#[tokio::test]
async fn failure_diagnostics_capture_a_screenshot() {
    let fixtures = erp_fixtures().await;
    let login = fixtures.login_page();
    login.open().await.expect("open login page");

    let dir = tempfile::tempdir().expect("tempdir");
    let shot = dir.path().join("login-failure.png");
    fixtures
        .page()
        .screenshot(&shot)
        .await
        .expect("capture screenshot");

    assert!(shot.exists());
    assert_eq!(fixtures.page().screenshots(), vec![shot]);
}
