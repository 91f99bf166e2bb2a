//! Page objects: one type per logical screen, each wrapping the driver seam's
//! interaction primitives over a shared [`BasePage`].

mod base;
mod data_analyst;
mod google;
mod home;
mod login;

pub use base::BasePage;
pub use data_analyst::DataAnalystPage;
pub use google::{GooglePage, GOOGLE_URL};
pub use home::{HomePage, ROADMAP_URL};
pub use login::LoginPage;
