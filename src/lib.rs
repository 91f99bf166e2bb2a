//! erp-e2e-kit: the reusable core of the ERP / roadmap-site end-to-end suites.
//!
//! Three layers, leaf first:
//!
//! - [`data`] — the file-backed test data provider (JSON/CSV/XLSX readers,
//!   synthetic value generation, record filtering and validation).
//! - [`pages`] — page objects, one type per logical screen, over the
//!   [`driver::Driver`] seam so the browser engine stays an opaque
//!   capability provider.
//! - [`fixtures`] — per-test composition of the two: memoized user records,
//!   role-filtered lookups, and an authenticated-session provider.
//!
//! Specs live in `tests/` and run against the deterministic
//! [`driver::sim::SimDriver`]; enable the `browser` feature to drive a real
//! browser through Playwright instead.
//!
//! # Example
//!
//! ```ignore
//! use erp_e2e_kit::{DataProvider, ErpFixtures, SimDriver, TestConfig};
//!
//! #[tokio::main]
//! async fn main() -> erp_e2e_kit::Result<()> {
//!     let config = TestConfig::from_env();
//!     let data = DataProvider::new("testdata");
//!     let users = data.user_data(&config.environment).await?;
//!
//!     let driver = SimDriver::erp(&config.base_url, users);
//!     let fixtures = ErpFixtures::new(driver, data, config);
//!
//!     // Logs in as the active administrator, fails loudly if none exists.
//!     fixtures.authenticated_page().await?;
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod data;
pub mod driver;
pub mod error;
pub mod fixtures;
pub mod pages;

pub use config::TestConfig;
pub use data::{filter_records, random_value, validate_structure, DataProvider, RandomKind};
pub use data::{Record, Role, UserData};
pub use driver::sim::SimDriver;
pub use driver::Driver;
pub use error::{Error, Result};
pub use fixtures::ErpFixtures;

#[cfg(feature = "browser")]
pub use driver::PlaywrightDriver;
