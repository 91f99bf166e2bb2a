// Playwright-backed driver for live browser runs (feature "browser")

use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;
use playwright_rs::{Page, SelectOption};
use tokio::time::{sleep, Instant};

use crate::driver::Driver;
use crate::error::{Error, Result};

const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// [`Driver`] over a Playwright [`Page`].
pub struct PlaywrightDriver {
    page: Page,
}

impl PlaywrightDriver {
    pub fn new(page: Page) -> Self {
        Self { page }
    }

    /// The underlying Playwright page, for interactions the seam does not
    /// cover.
    pub fn page(&self) -> &Page {
        &self.page
    }
}

fn driver_err(err: playwright_rs::Error) -> Error {
    Error::Driver(err.to_string())
}

#[async_trait]
impl Driver for PlaywrightDriver {
    async fn goto(&self, url: &str) -> Result<()> {
        self.page.goto(url, None).await.map_err(driver_err)?;
        Ok(())
    }

    async fn wait_for(&self, selector: &str, timeout: Duration) -> Result<()> {
        let deadline = Instant::now() + timeout;
        loop {
            let locator = self.page.locator(selector).await;
            if locator.is_visible().await.map_err(driver_err)? {
                return Ok(());
            }
            if Instant::now() >= deadline {
                return Err(Error::InteractionTimeout {
                    operation: format!("wait for selector '{selector}'"),
                    timeout_ms: timeout.as_millis() as u64,
                });
            }
            sleep(POLL_INTERVAL).await;
        }
    }

    async fn click(&self, selector: &str) -> Result<()> {
        self.page
            .locator(selector)
            .await
            .click(None)
            .await
            .map_err(driver_err)
    }

    async fn fill(&self, selector: &str, text: &str) -> Result<()> {
        self.page
            .locator(selector)
            .await
            .fill(text, None)
            .await
            .map_err(driver_err)
    }

    async fn clear(&self, selector: &str) -> Result<()> {
        self.page
            .locator(selector)
            .await
            .clear(None)
            .await
            .map_err(driver_err)
    }

    async fn select_option(&self, selector: &str, value: &str) -> Result<()> {
        self.page
            .locator(selector)
            .await
            .select_option(SelectOption::Value(value.to_string()), None)
            .await
            .map(|_| ())
            .map_err(driver_err)
    }

    async fn set_checked(&self, selector: &str, checked: bool) -> Result<()> {
        self.page
            .locator(selector)
            .await
            .set_checked(checked, None)
            .await
            .map_err(driver_err)
    }

    async fn text_content(&self, selector: &str) -> Result<Option<String>> {
        self.page
            .locator(selector)
            .await
            .text_content()
            .await
            .map_err(driver_err)
    }

    async fn is_visible(&self, selector: &str) -> Result<bool> {
        self.page
            .locator(selector)
            .await
            .is_visible()
            .await
            .map_err(driver_err)
    }

    async fn count(&self, selector: &str) -> Result<usize> {
        self.page
            .locator(selector)
            .await
            .count()
            .await
            .map_err(driver_err)
    }

    async fn current_url(&self) -> String {
        self.page.url()
    }

    async fn title(&self) -> Result<String> {
        self.page.title().await.map_err(driver_err)
    }

    async fn wait_for_url(&self, fragment: &str, timeout: Duration) -> Result<()> {
        let deadline = Instant::now() + timeout;
        loop {
            let url = self.page.url();
            if url.contains(fragment) {
                return Ok(());
            }
            if Instant::now() >= deadline {
                return Err(Error::InteractionTimeout {
                    operation: format!("wait for URL containing '{fragment}' (at '{url}')"),
                    timeout_ms: timeout.as_millis() as u64,
                });
            }
            sleep(POLL_INTERVAL).await;
        }
    }

    async fn reload(&self) -> Result<()> {
        self.page.reload(None).await.map_err(driver_err)?;
        Ok(())
    }

    async fn screenshot(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        self.page
            .screenshot_to_file(path, None)
            .await
            .map_err(driver_err)?;
        Ok(())
    }
}
