// roadmap.sh home page

use crate::config::TestConfig;
use crate::driver::Driver;
use crate::error::Result;
use crate::pages::BasePage;

/// Public base URL of the roadmap site.
pub const ROADMAP_URL: &str = "https://roadmap.sh";

const DATA_ANALYST_LINK: &str = "a[href=\"/data-analyst\"]";
const DATA_ANALYST_LINK_FALLBACK: &str = "text=\"Data Analyst\"";
const PAGE_TITLE: &str = "h1";

/// Page object for the roadmap site's home page.
pub struct HomePage<'d, D: Driver + ?Sized> {
    base: BasePage<'d, D>,
}

impl<'d, D: Driver + ?Sized> HomePage<'d, D> {
    pub fn new(driver: &'d D, config: &TestConfig) -> Self {
        Self {
            base: BasePage::new(driver, config),
        }
    }

    pub fn base(&self) -> &BasePage<'d, D> {
        &self.base
    }

    pub async fn open(&self) -> Result<()> {
        self.base.navigate_to(&format!("{ROADMAP_URL}/")).await
    }

    pub async fn click_data_analyst(&self) -> Result<()> {
        self.base.click_element(DATA_ANALYST_LINK).await
    }

    /// Click with an alternate text selector when the href locator fails.
    pub async fn click_data_analyst_robust(&self) -> Result<()> {
        self.base
            .click_with_fallback(DATA_ANALYST_LINK, &[DATA_ANALYST_LINK_FALLBACK])
            .await
    }

    pub async fn verify_data_analyst_link(&self) -> Result<()> {
        self.base.verify_element_visible(DATA_ANALYST_LINK).await
    }

    /// On the home page, not yet on a roadmap.
    pub async fn verify_home(&self) -> Result<()> {
        self.base.verify_url("roadmap.sh").await?;
        let url = self.base.driver().current_url().await;
        if url.contains("/data-analyst") {
            return Err(crate::error::Error::Assertion(format!(
                "expected the home page, found '{url}'"
            )));
        }
        Ok(())
    }

    pub async fn main_title(&self) -> Result<String> {
        self.base.element_text(PAGE_TITLE).await
    }
}
