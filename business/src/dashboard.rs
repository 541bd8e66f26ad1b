//! Static mock data behind the dashboard widgets.

use crate::Page;

/// A dashboard stat with a literal value and a trend caption.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatEntry {
    pub title: &'static str,
    pub icon: &'static str,
    pub value: &'static str,
    pub trend: &'static str,
    pub period: &'static str,
}

pub const DASHBOARD_STATS: &[StatEntry] = &[
    StatEntry {
        title: "Active Orders",
        icon: "🛒",
        value: "25",
        trend: "+5%",
        period: "from last month",
    },
    StatEntry {
        title: "Active Products",
        icon: "📦",
        value: "150",
        trend: "+10%",
        period: "from last month",
    },
    StatEntry {
        title: "Pending Requests",
        icon: "⏳",
        value: "8",
        trend: "+3%",
        period: "from last month",
    },
    StatEntry {
        title: "Orders to Receive",
        icon: "🚚",
        value: "5",
        trend: "+1%",
        period: "from last month",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivityEntry {
    pub kind: &'static str,
    pub counterpart: &'static str,
    pub amount: &'static str,
    pub time_ago: &'static str,
}

pub const RECENT_ACTIVITIES: &[ActivityEntry] = &[
    ActivityEntry {
        kind: "Delivery Request Received",
        counterpart: "Pharmacy",
        amount: "$25,000",
        time_ago: "2 hours ago",
    },
    ActivityEntry {
        kind: "Delivery Order Created",
        counterpart: "HealthCare Supplies Ltd",
        amount: "$15,000",
        time_ago: "4 hours ago",
    },
    ActivityEntry {
        kind: "Delivery Receipt Created",
        counterpart: "Radiology",
        amount: "$30,000",
        time_ago: "6 hours ago",
    },
    ActivityEntry {
        kind: "Added New Product",
        counterpart: "Syringes (50 units)",
        amount: "1 product",
        time_ago: "8 hours ago",
    },
    ActivityEntry {
        kind: "Added New Supplier",
        counterpart: "Global Medical Inc",
        amount: "1 supplier",
        time_ago: "10 hours ago",
    },
    ActivityEntry {
        kind: "Added New Department",
        counterpart: "Laboratory",
        amount: "1 department",
        time_ago: "12 hours ago",
    },
    ActivityEntry {
        kind: "Delivery Request Received",
        counterpart: "Hemodialysis",
        amount: "$20,000",
        time_ago: "1 day ago",
    },
    ActivityEntry {
        kind: "Delivery Order Created",
        counterpart: "MedSupply Co.",
        amount: "$22,000",
        time_ago: "1 day ago",
    },
];

/// An action item awaiting an operator decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingTask {
    pub title: &'static str,
    pub description: &'static str,
    pub action_label: &'static str,
    pub target: Page,
}

pub const PENDING_TASKS: &[PendingTask] = &[
    PendingTask {
        title: "Delivery Request #DR-2025-001",
        description: "Pharmacy - Request for 50 syringes, due tomorrow",
        action_label: "Approve",
        target: Page::Approvals,
    },
    PendingTask {
        title: "Delivery Order #DO-2025-003",
        description: "Radiology - No receipt generated yet (Margin: 25%)",
        action_label: "Review",
        target: Page::Approvals,
    },
    PendingTask {
        title: "Delivery Request #DR-2025-004",
        description: "Laboratory - Request for ventilator parts, urgent",
        action_label: "Approve",
        target: Page::Approvals,
    },
    PendingTask {
        title: "Delivery Order #DO-2025-002",
        description: "Pharmacy - Pending receipt confirmation",
        action_label: "Review",
        target: Page::Approvals,
    },
    PendingTask {
        title: "Delivery Request #DR-2025-005",
        description: "Hemodialysis - Request for pediatric medications",
        action_label: "Approve",
        target: Page::Approvals,
    },
    PendingTask {
        title: "Delivery Order #DO-2025-006",
        description: "Laboratory - Shipment arrived, receipt overdue",
        action_label: "Review",
        target: Page::Approvals,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuickAction {
    pub icon: &'static str,
    pub label: &'static str,
    pub target: Page,
}

pub const QUICK_ACTIONS: &[QuickAction] = &[
    QuickAction {
        icon: "📦",
        label: "Manage Products",
        target: Page::Products,
    },
    QuickAction {
        icon: "✔",
        label: "Review Approvals",
        target: Page::Approvals,
    },
    QuickAction {
        icon: "👥",
        label: "Team Directory",
        target: Page::Employees,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quick_actions_target_known_pages() {
        for action in QUICK_ACTIONS {
            assert!(action.target.path().starts_with("/admin"));
        }
    }

    #[test]
    fn stats_are_populated() {
        assert_eq!(DASHBOARD_STATS.len(), 4);
        assert!(DASHBOARD_STATS.iter().all(|s| !s.value.is_empty()));
    }
}
