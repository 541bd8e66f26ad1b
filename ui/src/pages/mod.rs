//! Pages routed by the admin shell.

mod approvals_page;
mod dashboard_page;
mod employees_page;
mod login_page;
mod products_page;
mod reports_page;
mod settings_page;

pub use approvals_page::approvals_page;
pub use dashboard_page::dashboard_page;
pub use employees_page::employees_page;
pub use login_page::login_page;
pub use products_page::products_page;
pub use reports_page::reports_page;
pub use settings_page::settings_page;
