mod badge;
mod data_table;
mod env_version;
mod management;
mod product_grid;
mod sidebar;
mod stats_card;
mod toasts;
mod top_bar;

pub use badge::status_badge;
pub use data_table::{DataTable, DataTableResponse};
pub use env_version::env_version;
pub use management::{
    CreateDialog, ManagementConfig, ManagementData, ManagementResponse, management_page,
};
pub use product_grid::product_grid;
pub use sidebar::sidebar;
pub use stats_card::{stats_card, stats_skeleton, table_skeleton};
pub use toasts::toasts_overlay;
pub use top_bar::top_bar;
