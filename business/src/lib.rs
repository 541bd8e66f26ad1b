//! Domain layer for the Depot admin console.
//!
//! State, compute and command definitions live here so the UI crate stays
//! "dumb": it reads state, renders, and dispatches commands.

mod approvals;
mod config;
mod dashboard;
mod directory;
mod employees;
mod layout;
mod login;
mod products;
mod reports;
mod route;
mod settings;
mod stats;
mod table;
mod toasts;
pub mod version_info;

pub use approvals::{Approval, ApprovalStatus, ApprovalsState, mock_approvals};
pub use config::AppConfig;
pub use dashboard::{
    ActivityEntry, DASHBOARD_STATS, PENDING_TASKS, PendingTask, QUICK_ACTIONS, QuickAction,
    StatEntry, RECENT_ACTIVITIES,
};
pub use directory::{
    DirectoryError, DirectoryFuture, DirectoryState, EmployeeDirectory, InMemoryDirectory,
    RejectingDirectory,
};
pub use employees::{
    CreateEmployeeCommand, CreateEmployeeCompute, CreateEmployeeInput, CreateEmployeeResult,
    CreatePhase, EMPLOYEE_STATS, Employee, EmployeeForm, EmployeeStatsCompute, EmployeeStatus,
    EmployeesState, FetchEmployeesCommand, FetchEmployeesCompute, FetchEmployeesResult,
    NewEmployee, mock_employees,
};
pub use layout::LayoutState;
pub use login::LoginState;
pub use products::{
    Product, ProductForm, ProductStatus, ProductsState, ViewMode, mock_products,
};
pub use reports::{CategoryBreakdown, InventorySummary, ReportsState, inventory_summary};
pub use route::{NAV_ITEMS, NavItem, Page, Route, RouteAction, RouteState};
pub use settings::SettingsState;
pub use stats::{StatCard, StatConfig};
pub use table::{CellValue, Column, FilterOption, SortDirection, TableQuery};
pub use toasts::{Toast, ToastKind, ToastsState};
