//! Browser-driver seam.
//!
//! Page objects talk to the browser through the [`Driver`] trait so the core
//! never embeds engine internals. Two backends implement it: the in-process
//! [`sim::SimDriver`] used by the suite's own tests, and a Playwright-backed
//! driver behind the `browser` feature for live runs.

#[cfg(feature = "browser")]
mod playwright;
pub mod sim;

#[cfg(feature = "browser")]
pub use playwright::PlaywrightDriver;

use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;

use crate::error::Result;

/// Capability surface the page objects require from a browser engine.
///
/// One driver instance wraps one exclusively-owned page handle; within a test
/// all operations are issued sequentially, so implementations never see
/// concurrent calls against the same page. Every waiting operation carries an
/// explicit timeout and surfaces [`crate::Error::InteractionTimeout`] when it
/// elapses.
#[async_trait]
pub trait Driver: Send + Sync {
    /// Navigates the page to an absolute URL.
    async fn goto(&self, url: &str) -> Result<()>;

    /// Waits until an element matching `selector` is visible.
    async fn wait_for(&self, selector: &str, timeout: Duration) -> Result<()>;

    /// Clicks the first element matching `selector`.
    async fn click(&self, selector: &str) -> Result<()>;

    /// Replaces the value of the input matching `selector`.
    async fn fill(&self, selector: &str, text: &str) -> Result<()>;

    /// Clears the value of the input matching `selector`.
    async fn clear(&self, selector: &str) -> Result<()>;

    /// Selects an option by value in the `<select>` matching `selector`.
    async fn select_option(&self, selector: &str, value: &str) -> Result<()>;

    /// Checks or unchecks the checkbox matching `selector`.
    async fn set_checked(&self, selector: &str, checked: bool) -> Result<()>;

    /// Text content of the first element matching `selector`, if any.
    async fn text_content(&self, selector: &str) -> Result<Option<String>>;

    /// Whether an element matching `selector` is currently visible.
    async fn is_visible(&self, selector: &str) -> Result<bool>;

    /// Number of elements matching `selector`.
    async fn count(&self, selector: &str) -> Result<usize>;

    /// URL the page is currently on.
    async fn current_url(&self) -> String;

    /// Document title of the current page.
    async fn title(&self) -> Result<String>;

    /// Waits until the current URL contains `fragment`.
    async fn wait_for_url(&self, fragment: &str, timeout: Duration) -> Result<()>;

    /// Reloads the current page.
    async fn reload(&self) -> Result<()>;

    /// Captures a screenshot of the current page to `path`.
    async fn screenshot(&self, path: &Path) -> Result<()>;
}
