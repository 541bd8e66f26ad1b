//! Shared color constants for the UI.

use depot_business::{ApprovalStatus, EmployeeStatus, ProductStatus};
use egui::Color32;

/// Forest green for success/active states.
pub const COLOR_GREEN: Color32 = Color32::from_rgb(34, 139, 34);

/// Red for error/rejected states.
pub const COLOR_RED: Color32 = Color32::from_rgb(220, 53, 69);

/// Amber for pending/in-progress states.
pub const COLOR_AMBER: Color32 = Color32::from_rgb(255, 193, 7);

/// Muted gray for archived/inactive states.
pub const COLOR_GRAY: Color32 = Color32::from_rgb(150, 150, 150);

pub fn product_status_color(status: ProductStatus) -> Color32 {
    match status {
        ProductStatus::Active => COLOR_GREEN,
        ProductStatus::Draft => COLOR_AMBER,
        ProductStatus::Archived => COLOR_GRAY,
    }
}

pub fn employee_status_color(status: EmployeeStatus) -> Color32 {
    match status {
        EmployeeStatus::Active => COLOR_GREEN,
        EmployeeStatus::OnLeave => COLOR_AMBER,
        EmployeeStatus::Inactive => COLOR_GRAY,
    }
}

pub fn approval_status_color(status: ApprovalStatus) -> Color32 {
    match status {
        ApprovalStatus::Pending => COLOR_AMBER,
        ApprovalStatus::Approved => COLOR_GREEN,
        ApprovalStatus::Rejected => COLOR_RED,
    }
}
