// Live browser specs (run with: cargo test --features browser)
//
// Drives a real Chromium through Playwright against the public roadmap site
// and, when BASE_URL points at a running instance, the ERP login flow. These
// require the Playwright toolchain and network access, so they stay behind
// the `browser` feature.

use erp_e2e_kit::pages::{DataAnalystPage, HomePage};
use erp_e2e_kit::{DataProvider, ErpFixtures, PlaywrightDriver, TestConfig};
use playwright_rs::Playwright;

async fn launch_driver() -> (Playwright, playwright_rs::Browser, PlaywrightDriver) {
    let playwright = Playwright::launch()
        .await
        .expect("Failed to launch Playwright");
    let browser = playwright
        .chromium()
        .launch()
        .await
        .expect("Failed to launch browser");
    let page = browser.new_page().await.expect("Failed to create page");
    (playwright, browser, PlaywrightDriver::new(page))
}

#[tokio::test]
async fn roadmap_home_to_data_analyst() {
    let (_playwright, browser, driver) = launch_driver().await;
    let config = TestConfig::from_env();

    let home = HomePage::new(&driver, &config);
    home.open().await.expect("open roadmap.sh");
    home.verify_home().await.expect("on the home page");
    home.click_data_analyst_robust()
        .await
        .expect("reach the Data Analyst roadmap");

    let analyst = DataAnalystPage::new(&driver, &config);
    analyst.verify_page().await.expect("on /data-analyst");
    analyst.verify_title().await.expect("roadmap title present");

    browser.close().await.expect("Failed to close browser");
}

#[tokio::test]
async fn erp_administrator_login_lands_on_dashboard() {
    if std::env::var("BASE_URL").is_err() {
        eprintln!("skipping: BASE_URL not set, no ERP instance to test against");
        return;
    }

    let (_playwright, browser, driver) = launch_driver().await;
    let config = TestConfig::from_env();
    let data = DataProvider::new(concat!(env!("CARGO_MANIFEST_DIR"), "/testdata"));
    let fixtures = ErpFixtures::new(driver, data, config);

    let page = fixtures
        .authenticated_page()
        .await
        .expect("administrator login succeeds");
    let url = erp_e2e_kit::Driver::current_url(page).await;
    assert!(url.contains("/dashboard"), "url: {url}");

    browser.close().await.expect("Failed to close browser");
}
