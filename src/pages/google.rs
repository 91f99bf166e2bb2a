// Google search page, used by the ad-hoc search scraper specs

use crate::config::TestConfig;
use crate::driver::Driver;
use crate::error::Result;
use crate::pages::BasePage;

pub const GOOGLE_URL: &str = "https://www.google.com";

const SEARCH_BOX: &str = "textarea[name=\"q\"]";
const SEARCH_BOX_FALLBACK: &str = "input[name=\"q\"]";
const SEARCH_BUTTON: &str = "input[name=\"btnK\"]";
const RESULT_ITEMS: &str = "#search .g";

/// Page object for the Google search page.
pub struct GooglePage<'d, D: Driver + ?Sized> {
    base: BasePage<'d, D>,
}

impl<'d, D: Driver + ?Sized> GooglePage<'d, D> {
    pub fn new(driver: &'d D, config: &TestConfig) -> Self {
        Self {
            base: BasePage::new(driver, config),
        }
    }

    pub fn base(&self) -> &BasePage<'d, D> {
        &self.base
    }

    pub async fn open(&self) -> Result<()> {
        self.base.navigate_to(GOOGLE_URL).await
    }

    /// Types the query (the search box selector changed from `input` to
    /// `textarea` over time, so both are tried) and submits it.
    pub async fn search(&self, query: &str) -> Result<()> {
        match self.base.fill_field(SEARCH_BOX, query).await {
            Ok(()) => {}
            Err(err) => {
                tracing::warn!(error = %err, "primary search box selector failed");
                self.base.fill_field(SEARCH_BOX_FALLBACK, query).await?;
            }
        }
        self.base.click_element(SEARCH_BUTTON).await
    }

    pub async fn result_count(&self) -> Result<usize> {
        self.base.wait_for_element(RESULT_ITEMS).await?;
        self.base.driver().count(RESULT_ITEMS).await
    }
}
