//! Per-test fixture context.
//!
//! One [`ErpFixtures`] is built per test and dropped when the test ends;
//! derived fixtures (user set, authenticated session) are memoized with
//! `tokio::sync::OnceCell`, so a fixture depended on by several others within
//! one test is acquired exactly once. Nothing is shared across tests.

use tokio::sync::OnceCell;

use crate::config::TestConfig;
use crate::data::{DataProvider, Record, Role, UserData};
use crate::driver::Driver;
use crate::error::{Error, Result};
use crate::pages::{DataAnalystPage, GooglePage, HomePage, LoginPage};

/// Test-scoped context composing the page handle, data provider, and derived
/// records.
pub struct ErpFixtures<D: Driver> {
    page: D,
    data: DataProvider,
    config: TestConfig,
    users: OnceCell<Vec<UserData>>,
    session: OnceCell<()>,
}

impl<D: Driver> ErpFixtures<D> {
    pub fn new(page: D, data: DataProvider, config: TestConfig) -> Self {
        Self {
            page,
            data,
            config,
            users: OnceCell::new(),
            session: OnceCell::new(),
        }
    }

    pub fn config(&self) -> &TestConfig {
        &self.config
    }

    pub fn data(&self) -> &DataProvider {
        &self.data
    }

    /// The raw page handle, exclusively owned by this context.
    pub fn page(&self) -> &D {
        &self.page
    }

    pub fn login_page(&self) -> LoginPage<'_, D> {
        LoginPage::new(&self.page, &self.config)
    }

    pub fn home_page(&self) -> HomePage<'_, D> {
        HomePage::new(&self.page, &self.config)
    }

    pub fn data_analyst_page(&self) -> DataAnalystPage<'_, D> {
        DataAnalystPage::new(&self.page, &self.config)
    }

    pub fn google_page(&self) -> GooglePage<'_, D> {
        GooglePage::new(&self.page, &self.config)
    }

    /// All user records for the configured environment, loaded once per
    /// context.
    pub async fn test_users(&self) -> Result<&[UserData]> {
        let users = self
            .users
            .get_or_try_init(|| self.data.user_data(&self.config.environment))
            .await?;
        Ok(users)
    }

    /// The active administrator record; a hard stop when absent, since a
    /// missing required fixture indicates a data-setup bug.
    pub async fn admin_user(&self) -> Result<&UserData> {
        self.active_user_with_role(Role::Administrator).await
    }

    /// The active regular-user record; also a hard stop when absent.
    pub async fn regular_user(&self) -> Result<&UserData> {
        self.active_user_with_role(Role::User).await
    }

    async fn active_user_with_role(&self, role: Role) -> Result<&UserData> {
        let users = self.test_users().await?;
        users
            .iter()
            .find(|user| user.role == role && user.active)
            .ok_or_else(|| Error::MissingFixtureRecord {
                criteria: format!("role={role}, active=true"),
            })
    }

    /// The page handle with an administrator session established.
    ///
    /// Performs the full navigate → fill credentials → submit → verify
    /// redirect sequence on first use; later callers within the same test
    /// reuse the session. Any step failure aborts with the underlying cause.
    pub async fn authenticated_page(&self) -> Result<&D> {
        self.session
            .get_or_try_init(|| async {
                let admin = self.admin_user().await?;
                let login = self.login_page();
                login.open().await?;
                login.login(&admin.username, &admin.password, None).await?;
                login.verify_login_success().await?;
                tracing::debug!(username = %admin.username, "administrator session established");
                Ok::<_, Error>(())
            })
            .await?;
        Ok(&self.page)
    }

    /// Test data for an explicitly named module.
    ///
    /// The one tolerant path in the kit: a load failure degrades to an empty
    /// collection instead of aborting the test.
    pub async fn module_data(&self, module: &str) -> Vec<Record> {
        match self.data.module_test_data(module).await {
            Ok(records) => records,
            Err(err) => {
                tracing::warn!(module, error = %err, "no module test data, using empty set");
                Vec::new()
            }
        }
    }
}
