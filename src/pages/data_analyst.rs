// roadmap.sh Data Analyst roadmap page

use crate::config::TestConfig;
use crate::driver::Driver;
use crate::error::Result;
use crate::pages::{BasePage, ROADMAP_URL};

const PAGE_TITLE: &str = "h1";
const LOGIN_BUTTON: &str = "a[href=\"/login\"]";
const LOGIN_BUTTON_FALLBACK: &str = "text=\"Login\"";

/// Page object for the Data Analyst roadmap page.
pub struct DataAnalystPage<'d, D: Driver + ?Sized> {
    base: BasePage<'d, D>,
}

impl<'d, D: Driver + ?Sized> DataAnalystPage<'d, D> {
    pub fn new(driver: &'d D, config: &TestConfig) -> Self {
        Self {
            base: BasePage::new(driver, config),
        }
    }

    pub fn base(&self) -> &BasePage<'d, D> {
        &self.base
    }

    pub async fn open(&self) -> Result<()> {
        self.base
            .navigate_to(&format!("{ROADMAP_URL}/data-analyst"))
            .await
    }

    pub async fn verify_title(&self) -> Result<()> {
        self.base
            .verify_element_text(PAGE_TITLE, "Data Analyst Roadmap")
            .await
    }

    pub async fn verify_page(&self) -> Result<()> {
        self.base.verify_url("/data-analyst").await
    }

    pub async fn title_text(&self) -> Result<String> {
        self.base.element_text(PAGE_TITLE).await
    }

    pub async fn click_login(&self) -> Result<()> {
        self.base.click_element(LOGIN_BUTTON).await
    }

    pub async fn verify_login_button(&self) -> Result<()> {
        self.base.verify_element_visible(LOGIN_BUTTON).await
    }

    /// Click with an alternate text selector when the href locator fails.
    pub async fn click_login_robust(&self) -> Result<()> {
        self.base
            .click_with_fallback(LOGIN_BUTTON, &[LOGIN_BUTTON_FALLBACK])
            .await
    }
}
