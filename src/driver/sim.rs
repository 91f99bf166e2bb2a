//! Deterministic in-process driver used by the suite's own tests.
//!
//! Models just enough of the two target sites to exercise page objects and
//! fixtures without a browser: the ERP login form (credentials checked against
//! the registered user records, `/dashboard` redirect on success, error banner
//! on failure) and the roadmap site's home and Data Analyst pages.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::data::UserData;
use crate::driver::Driver;
use crate::error::{Error, Result};
use crate::pages::{GOOGLE_URL, ROADMAP_URL};

#[derive(Debug, Clone)]
enum Action {
    Navigate(String),
    SubmitLogin,
}

#[derive(Debug, Clone)]
struct Element {
    selectors: Vec<String>,
    text: String,
    value: String,
    visible: bool,
    checked: bool,
    action: Option<Action>,
}

impl Element {
    fn new(selectors: &[&str], text: &str) -> Self {
        Self {
            selectors: selectors.iter().map(|s| s.to_string()).collect(),
            text: text.to_string(),
            value: String::new(),
            visible: true,
            checked: false,
            action: None,
        }
    }

    fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }

    fn navigates_to(mut self, url: impl Into<String>) -> Self {
        self.action = Some(Action::Navigate(url.into()));
        self
    }

    fn submits_login(mut self) -> Self {
        self.action = Some(Action::SubmitLogin);
        self
    }

    fn matches(&self, selector: &str) -> bool {
        self.selectors.iter().any(|s| s == selector)
    }
}

#[derive(Debug, Clone)]
struct PageModel {
    title: String,
    elements: Vec<Element>,
}

#[derive(Debug)]
struct SimState {
    current_url: String,
    page: PageModel,
    routes: HashMap<String, PageModel>,
    users: Vec<UserData>,
    dashboard_url: Option<String>,
    visits: Vec<String>,
    login_submissions: usize,
    screenshots: Vec<PathBuf>,
}

/// In-memory [`Driver`] over a scripted site model.
#[derive(Debug)]
pub struct SimDriver {
    state: Mutex<SimState>,
}

impl SimDriver {
    /// Empty driver with no routes mounted; `goto` fails until a site is
    /// mounted via [`mount_erp`](Self::mount_erp) or
    /// [`mount_roadmap`](Self::mount_roadmap).
    pub fn new() -> Self {
        Self {
            state: Mutex::new(SimState {
                current_url: "about:blank".to_string(),
                page: PageModel {
                    title: String::new(),
                    elements: Vec::new(),
                },
                routes: HashMap::new(),
                users: Vec::new(),
                dashboard_url: None,
                visits: Vec::new(),
                login_submissions: 0,
                screenshots: Vec::new(),
            }),
        }
    }

    /// Driver with the ERP mounted at `base_url`, validating logins against
    /// `users` (only active users may log in).
    pub fn erp(base_url: &str, users: Vec<UserData>) -> Self {
        let driver = Self::new();
        driver.mount_erp(base_url, users);
        driver
    }

    /// Driver with the roadmap site mounted at [`ROADMAP_URL`].
    pub fn roadmap() -> Self {
        let driver = Self::new();
        driver.mount_roadmap();
        driver
    }

    /// Driver with a scripted Google search mounted at [`GOOGLE_URL`].
    pub fn google() -> Self {
        let driver = Self::new();
        driver.mount_google();
        driver
    }

    /// Mounts the ERP login/dashboard flow at `base_url`.
    pub fn mount_erp(&self, base_url: &str, users: Vec<UserData>) {
        let base = base_url.trim_end_matches('/');
        let login_url = format!("{base}/login");
        let dashboard_url = format!("{base}/dashboard");

        let login = PageModel {
            title: "PaisaERP - Login".to_string(),
            elements: vec![
                Element::new(&["#username"], ""),
                Element::new(&["#password"], ""),
                Element::new(&["#login-btn"], "Log in").submits_login(),
                Element::new(&[".error-message"], "Invalid credentials").hidden(),
                Element::new(&["#company-select"], ""),
                Element::new(&["#remember-me"], "Remember me"),
                Element::new(&["#forgot-password"], "Forgot password?")
                    .navigates_to(format!("{base}/forgot-password")),
            ],
        };
        let dashboard = PageModel {
            title: "PaisaERP - Dashboard".to_string(),
            elements: vec![Element::new(&["header h1", "#main-header"], "Dashboard")],
        };
        let forgot = PageModel {
            title: "PaisaERP - Password recovery".to_string(),
            elements: vec![Element::new(&["h1"], "Password recovery")],
        };

        let mut state = self.state.lock();
        state.routes.insert(login_url, login);
        state.routes.insert(dashboard_url.clone(), dashboard);
        state.routes.insert(format!("{base}/forgot-password"), forgot);
        state.dashboard_url = Some(dashboard_url);
        state.users = users;
    }

    /// Mounts the roadmap site's home and Data Analyst pages.
    pub fn mount_roadmap(&self) {
        let home = PageModel {
            title: "Developer Roadmaps - roadmap.sh".to_string(),
            elements: vec![
                Element::new(&["h1", "header h1"], "Developer Roadmaps"),
                Element::new(&["a[href=\"/data-analyst\"]", "text=\"Data Analyst\""], "Data Analyst")
                    .navigates_to(format!("{ROADMAP_URL}/data-analyst")),
            ],
        };
        let data_analyst = PageModel {
            title: "Data Analyst Roadmap - roadmap.sh".to_string(),
            elements: vec![
                Element::new(&["h1"], "Data Analyst Roadmap"),
                Element::new(&["a[href=\"/login\"]", "text=\"Login\""], "Login")
                    .navigates_to(format!("{ROADMAP_URL}/login")),
            ],
        };
        let login = PageModel {
            title: "Login - roadmap.sh".to_string(),
            elements: vec![Element::new(&["h1"], "Login")],
        };

        let mut state = self.state.lock();
        state.routes.insert(format!("{ROADMAP_URL}/"), home.clone());
        state.routes.insert(ROADMAP_URL.to_string(), home);
        state
            .routes
            .insert(format!("{ROADMAP_URL}/data-analyst"), data_analyst);
        state.routes.insert(format!("{ROADMAP_URL}/login"), login);
    }

    /// Mounts a scripted Google search: the search form navigates to a
    /// results page with a fixed set of result entries.
    pub fn mount_google(&self) {
        let home = PageModel {
            title: "Google".to_string(),
            elements: vec![
                Element::new(&["textarea[name=\"q\"]"], ""),
                Element::new(&["input[name=\"btnK\"]"], "Google Search")
                    .navigates_to(format!("{GOOGLE_URL}/search")),
            ],
        };
        let results = PageModel {
            title: "playwright - Google Search".to_string(),
            elements: vec![
                Element::new(&["#search .g"], "Playwright: Fast and reliable end-to-end testing"),
                Element::new(&["#search .g"], "GitHub - microsoft/playwright"),
                Element::new(&["#search .g"], "Playwright (software) - Wikipedia"),
            ],
        };

        let mut state = self.state.lock();
        state.routes.insert(GOOGLE_URL.to_string(), home.clone());
        state.routes.insert(format!("{GOOGLE_URL}/"), home);
        state.routes.insert(format!("{GOOGLE_URL}/search"), results);
    }

    /// Whether the checkbox matching `selector` is currently checked.
    pub fn is_checked(&self, selector: &str) -> bool {
        self.state
            .lock()
            .element(selector)
            .is_some_and(|e| e.checked)
    }

    /// URLs navigated to, in order.
    pub fn visits(&self) -> Vec<String> {
        self.state.lock().visits.clone()
    }

    /// Number of login form submissions seen so far.
    pub fn login_submissions(&self) -> usize {
        self.state.lock().login_submissions
    }

    /// Paths of captured screenshots.
    pub fn screenshots(&self) -> Vec<PathBuf> {
        self.state.lock().screenshots.clone()
    }
}

impl Default for SimDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl SimState {
    fn navigate(&mut self, url: &str) -> Result<()> {
        let page = self
            .routes
            .get(url)
            .cloned()
            .ok_or_else(|| Error::Driver(format!("navigation failed: no page at '{url}'")))?;
        self.current_url = url.to_string();
        self.page = page;
        self.visits.push(url.to_string());
        Ok(())
    }

    fn element(&self, selector: &str) -> Option<&Element> {
        self.page.elements.iter().find(|e| e.matches(selector))
    }

    fn element_mut(&mut self, selector: &str) -> Result<&mut Element> {
        self.page
            .elements
            .iter_mut()
            .find(|e| e.matches(selector))
            .ok_or_else(|| Error::ElementNotFound(selector.to_string()))
    }

    fn field_value(&self, selector: &str) -> String {
        self.element(selector)
            .map(|e| e.value.clone())
            .unwrap_or_default()
    }

    fn submit_login(&mut self) -> Result<()> {
        self.login_submissions += 1;
        let username = self.field_value("#username");
        let password = self.field_value("#password");

        let authenticated = self
            .users
            .iter()
            .any(|u| u.active && u.username == username && u.password == password);

        if authenticated {
            let dashboard = self
                .dashboard_url
                .clone()
                .ok_or_else(|| Error::Driver("ERP not mounted".to_string()))?;
            self.navigate(&dashboard)
        } else {
            self.element_mut(".error-message")?.visible = true;
            Ok(())
        }
    }
}

#[async_trait]
impl Driver for SimDriver {
    async fn goto(&self, url: &str) -> Result<()> {
        self.state.lock().navigate(url)
    }

    async fn wait_for(&self, selector: &str, timeout: Duration) -> Result<()> {
        let state = self.state.lock();
        match state.element(selector) {
            Some(element) if element.visible => Ok(()),
            // nothing in the sim becomes visible later, so report the
            // timeout immediately instead of sleeping it out
            _ => Err(Error::InteractionTimeout {
                operation: format!("wait for selector '{selector}'"),
                timeout_ms: timeout.as_millis() as u64,
            }),
        }
    }

    async fn click(&self, selector: &str) -> Result<()> {
        let action = {
            let state = self.state.lock();
            let element = state
                .element(selector)
                .ok_or_else(|| Error::ElementNotFound(selector.to_string()))?;
            element.action.clone()
        };
        match action {
            Some(Action::Navigate(url)) => self.state.lock().navigate(&url),
            Some(Action::SubmitLogin) => self.state.lock().submit_login(),
            None => Ok(()),
        }
    }

    async fn fill(&self, selector: &str, text: &str) -> Result<()> {
        let mut state = self.state.lock();
        state.element_mut(selector)?.value = text.to_string();
        Ok(())
    }

    async fn clear(&self, selector: &str) -> Result<()> {
        let mut state = self.state.lock();
        state.element_mut(selector)?.value.clear();
        Ok(())
    }

    async fn select_option(&self, selector: &str, value: &str) -> Result<()> {
        let mut state = self.state.lock();
        state.element_mut(selector)?.value = value.to_string();
        Ok(())
    }

    async fn set_checked(&self, selector: &str, checked: bool) -> Result<()> {
        let mut state = self.state.lock();
        state.element_mut(selector)?.checked = checked;
        Ok(())
    }

    async fn text_content(&self, selector: &str) -> Result<Option<String>> {
        let state = self.state.lock();
        Ok(state.element(selector).map(|e| e.text.clone()))
    }

    async fn is_visible(&self, selector: &str) -> Result<bool> {
        let state = self.state.lock();
        Ok(state.element(selector).is_some_and(|e| e.visible))
    }

    async fn count(&self, selector: &str) -> Result<usize> {
        let state = self.state.lock();
        Ok(state
            .page
            .elements
            .iter()
            .filter(|e| e.matches(selector))
            .count())
    }

    async fn current_url(&self) -> String {
        self.state.lock().current_url.clone()
    }

    async fn title(&self) -> Result<String> {
        Ok(self.state.lock().page.title.clone())
    }

    async fn wait_for_url(&self, fragment: &str, timeout: Duration) -> Result<()> {
        let current = self.state.lock().current_url.clone();
        if current.contains(fragment) {
            Ok(())
        } else {
            Err(Error::InteractionTimeout {
                operation: format!("wait for URL containing '{fragment}' (at '{current}')"),
                timeout_ms: timeout.as_millis() as u64,
            })
        }
    }

    async fn reload(&self) -> Result<()> {
        let url = self.state.lock().current_url.clone();
        self.state.lock().navigate(&url)
    }

    async fn screenshot(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        // 1x1 transparent PNG stand-in
        const PIXEL: &[u8] = &[
            0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00, 0x00, 0x0D, 0x49, 0x48,
            0x44, 0x52, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, 0x08, 0x06, 0x00, 0x00,
            0x00, 0x1F, 0x15, 0xC4, 0x89, 0x00, 0x00, 0x00, 0x0A, 0x49, 0x44, 0x41, 0x54, 0x78,
            0x9C, 0x63, 0x00, 0x01, 0x00, 0x00, 0x05, 0x00, 0x01, 0x0D, 0x0A, 0x2D, 0xB4, 0x00,
            0x00, 0x00, 0x00, 0x49, 0x45, 0x4E, 0x44, 0xAE, 0x42, 0x60, 0x82,
        ];
        tokio::fs::write(path, PIXEL).await?;
        self.state.lock().screenshots.push(path.to_path_buf());
        Ok(())
    }
}
