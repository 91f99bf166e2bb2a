// Shared page-object helpers over the driver seam

use std::path::PathBuf;

use crate::config::TestConfig;
use crate::driver::Driver;
use crate::error::{Error, Result};

/// Directory failure screenshots are written to.
const SCREENSHOT_DIR: &str = "test-results/screenshots";

/// Wait/click/fill helpers every concrete page builds on.
///
/// Holds a borrowed page handle; the handle is exclusively owned by the
/// test's fixture context and accessed strictly sequentially.
pub struct BasePage<'d, D: Driver + ?Sized> {
    driver: &'d D,
    config: TestConfig,
}

impl<'d, D: Driver + ?Sized> BasePage<'d, D> {
    pub fn new(driver: &'d D, config: &TestConfig) -> Self {
        Self {
            driver,
            config: config.clone(),
        }
    }

    pub fn driver(&self) -> &'d D {
        self.driver
    }

    pub fn config(&self) -> &TestConfig {
        &self.config
    }

    pub async fn navigate_to(&self, url: &str) -> Result<()> {
        tracing::debug!(url, "navigating");
        self.driver.goto(url).await
    }

    /// Waits for an element to be visible, using the configured action
    /// timeout.
    pub async fn wait_for_element(&self, selector: &str) -> Result<()> {
        self.driver
            .wait_for(selector, self.config.action_timeout())
            .await
    }

    pub async fn click_element(&self, selector: &str) -> Result<()> {
        self.wait_for_element(selector).await?;
        self.driver.click(selector).await
    }

    /// Clicks `primary`, falling back to each alternate selector once before
    /// re-raising the original failure.
    pub async fn click_with_fallback(&self, primary: &str, alternates: &[&str]) -> Result<()> {
        let original = match self.click_element(primary).await {
            Ok(()) => return Ok(()),
            Err(err) => err,
        };
        tracing::warn!(selector = primary, error = %original, "click failed, trying alternates");
        for alternate in alternates {
            if self.driver.click(alternate).await.is_ok() {
                tracing::debug!(selector = alternate, "alternate selector succeeded");
                return Ok(());
            }
        }
        Err(original.context(format!(
            "all {} alternate selectors failed as well",
            alternates.len()
        )))
    }

    /// Clears the field and types `text` into it.
    pub async fn fill_field(&self, selector: &str, text: &str) -> Result<()> {
        self.wait_for_element(selector).await?;
        self.driver.clear(selector).await?;
        self.driver.fill(selector, text).await
    }

    pub async fn select_option(&self, selector: &str, option: &str) -> Result<()> {
        self.wait_for_element(selector).await?;
        self.driver.select_option(selector, option).await
    }

    pub async fn element_text(&self, selector: &str) -> Result<String> {
        self.wait_for_element(selector).await?;
        Ok(self
            .driver
            .text_content(selector)
            .await?
            .unwrap_or_default())
    }

    pub async fn verify_element_visible(&self, selector: &str) -> Result<()> {
        if self.driver.is_visible(selector).await? {
            Ok(())
        } else {
            Err(Error::Assertion(format!(
                "expected '{selector}' to be visible"
            )))
        }
    }

    pub async fn verify_element_text(&self, selector: &str, expected: &str) -> Result<()> {
        let actual = self.element_text(selector).await?;
        if actual.contains(expected) {
            Ok(())
        } else {
            Err(Error::Assertion(format!(
                "expected '{selector}' to contain '{expected}', found '{actual}'"
            )))
        }
    }

    /// Asserts the current URL contains `fragment`.
    pub async fn verify_url(&self, fragment: &str) -> Result<()> {
        let url = self.driver.current_url().await;
        if url.contains(fragment) {
            Ok(())
        } else {
            Err(Error::Assertion(format!(
                "expected URL containing '{fragment}', found '{url}'"
            )))
        }
    }

    pub async fn page_title(&self) -> Result<String> {
        self.driver.title().await
    }

    pub async fn refresh(&self) -> Result<()> {
        self.driver.reload().await
    }

    /// Captures a named screenshot under `test-results/screenshots/`.
    pub async fn take_screenshot(&self, name: &str) -> Result<PathBuf> {
        let path = PathBuf::from(SCREENSHOT_DIR).join(format!("{name}.png"));
        self.driver.screenshot(&path).await?;
        Ok(path)
    }
}
