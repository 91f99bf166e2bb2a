// ERP login screen

use crate::config::TestConfig;
use crate::driver::Driver;
use crate::error::Result;
use crate::pages::BasePage;

const USERNAME_INPUT: &str = "#username";
const PASSWORD_INPUT: &str = "#password";
const LOGIN_BUTTON: &str = "#login-btn";
const ERROR_MESSAGE: &str = ".error-message";
const FORGOT_PASSWORD_LINK: &str = "#forgot-password";
const REMEMBER_ME_CHECKBOX: &str = "#remember-me";
const COMPANY_SELECT: &str = "#company-select";

/// Page object for the ERP login form at `<base_url>/login`.
pub struct LoginPage<'d, D: Driver + ?Sized> {
    base: BasePage<'d, D>,
}

impl<'d, D: Driver + ?Sized> LoginPage<'d, D> {
    pub fn new(driver: &'d D, config: &TestConfig) -> Self {
        Self {
            base: BasePage::new(driver, config),
        }
    }

    pub fn base(&self) -> &BasePage<'d, D> {
        &self.base
    }

    pub async fn open(&self) -> Result<()> {
        let url = format!(
            "{}/login",
            self.base.config().base_url.trim_end_matches('/')
        );
        self.base.navigate_to(&url).await
    }

    /// Fills credentials (and company, when given) and submits the form.
    pub async fn login(
        &self,
        username: &str,
        password: &str,
        company: Option<&str>,
    ) -> Result<()> {
        self.base.fill_field(USERNAME_INPUT, username).await?;
        self.base.fill_field(PASSWORD_INPUT, password).await?;
        if let Some(company) = company {
            self.base.select_option(COMPANY_SELECT, company).await?;
        }
        self.base.click_element(LOGIN_BUTTON).await
    }

    /// A successful login redirects to the dashboard.
    pub async fn verify_login_success(&self) -> Result<()> {
        self.base
            .driver()
            .wait_for_url("/dashboard", self.base.config().navigation_timeout())
            .await?;
        self.base.verify_url("/dashboard").await
    }

    pub async fn verify_login_error(&self, expected_message: &str) -> Result<()> {
        self.base.verify_element_visible(ERROR_MESSAGE).await?;
        self.base
            .verify_element_text(ERROR_MESSAGE, expected_message)
            .await
    }

    /// The form's three core elements are present and visible.
    pub async fn verify_loaded(&self) -> Result<()> {
        self.base.verify_element_visible(USERNAME_INPUT).await?;
        self.base.verify_element_visible(PASSWORD_INPUT).await?;
        self.base.verify_element_visible(LOGIN_BUTTON).await
    }

    pub async fn clear_fields(&self) -> Result<()> {
        self.base.driver().clear(USERNAME_INPUT).await?;
        self.base.driver().clear(PASSWORD_INPUT).await
    }

    pub async fn set_remember_me(&self, remember: bool) -> Result<()> {
        self.base
            .driver()
            .set_checked(REMEMBER_ME_CHECKBOX, remember)
            .await
    }

    pub async fn click_forgot_password(&self) -> Result<()> {
        self.base.click_element(FORGOT_PASSWORD_LINK).await
    }
}
