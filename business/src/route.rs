//! Route state for page navigation.
//!
//! Routes serialize as the admin console's canonical paths
//! (`/admin/products`, `/auth/login`, ...). The `action=create` query
//! parameter drives the management template's create dialog, so dialog
//! visibility is derived from the route rather than a separate flag.

use std::any::Any;

use depot_states::{State, state_assign_impl};
use serde::{Deserialize, Serialize};

/// The pages of the console. Paths are matched case-sensitively; `/admin`
/// maps to `Dashboard` only on an exact match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Page {
    Dashboard,
    Approvals,
    Products,
    Employees,
    Reports,
    Settings,
    Login,
}

impl Page {
    pub const fn path(self) -> &'static str {
        match self {
            Self::Dashboard => "/admin",
            Self::Approvals => "/admin/approvals",
            Self::Products => "/admin/products",
            Self::Employees => "/admin/employees",
            Self::Reports => "/admin/reports",
            Self::Settings => "/admin/settings",
            Self::Login => "/auth/login",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Approvals => "Approvals",
            Self::Products => "Products",
            Self::Employees => "Employees",
            Self::Reports => "Reports",
            Self::Settings => "Settings",
            Self::Login => "Sign In",
        }
    }

    /// Detail path for a single record, `<base>/<id>`.
    pub fn detail_path(self, id: &str) -> String {
        format!("{}/{id}", self.path())
    }
}

/// Query-parameter actions attached to a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RouteAction {
    /// `?action=create`: the create dialog is open.
    Create,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    pub page: Page,
    pub action: Option<RouteAction>,
}

impl Route {
    pub const fn new(page: Page) -> Self {
        Self { page, action: None }
    }

    /// Parse a path with optional query. Unknown paths and unknown query
    /// parameters degrade to `None` / no action rather than erroring.
    pub fn parse(path: &str) -> Option<Self> {
        let (path, query) = match path.split_once('?') {
            Some((path, query)) => (path, Some(query)),
            None => (path, None),
        };

        let page = match path {
            "/admin" => Page::Dashboard,
            "/admin/approvals" => Page::Approvals,
            "/admin/products" => Page::Products,
            "/admin/employees" => Page::Employees,
            "/admin/reports" => Page::Reports,
            "/admin/settings" => Page::Settings,
            "/auth/login" => Page::Login,
            _ => return None,
        };

        let action = match query {
            Some("action=create") => Some(RouteAction::Create),
            _ => None,
        };

        Some(Self { page, action })
    }

    pub fn to_path(self) -> String {
        match self.action {
            Some(RouteAction::Create) => format!("{}?action=create", self.page.path()),
            None => self.page.path().to_owned(),
        }
    }
}

impl Default for Route {
    fn default() -> Self {
        Self::new(Page::Login)
    }
}

/// Current route, carried in the `StateCtx`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RouteState {
    pub current: Route,
}

impl RouteState {
    /// Navigate to a page, clearing any query action.
    pub fn goto(&mut self, page: Page) {
        self.current = Route::new(page);
    }

    /// Set the query action on the current page (e.g. open the create
    /// dialog).
    pub fn set_action(&mut self, action: RouteAction) {
        self.current.action = Some(action);
    }

    /// Clear the query action (close the dialog).
    pub fn clear_action(&mut self) {
        self.current.action = None;
    }

    pub fn action_is(&self, action: RouteAction) -> bool {
        self.current.action == Some(action)
    }
}

impl State for RouteState {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn snapshot(&self) -> Option<Box<dyn Any + Send>> {
        Some(Box::new(*self))
    }

    fn assign_box(&mut self, new_self: Box<dyn Any + Send>) {
        state_assign_impl(self, new_self);
    }
}

/// One sidebar entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub page: Page,
    pub icon: &'static str,
    pub label: &'static str,
}

/// Ordered sidebar navigation, top to bottom.
pub const NAV_ITEMS: &[NavItem] = &[
    NavItem {
        page: Page::Dashboard,
        icon: "⌂",
        label: "Dashboard",
    },
    NavItem {
        page: Page::Approvals,
        icon: "✔",
        label: "Approvals",
    },
    NavItem {
        page: Page::Products,
        icon: "📦",
        label: "Products",
    },
    NavItem {
        page: Page::Employees,
        icon: "👥",
        label: "Employees",
    },
    NavItem {
        page: Page::Reports,
        icon: "🗠",
        label: "Reports",
    },
    NavItem {
        page: Page::Settings,
        icon: "⚙",
        label: "Settings",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_round_trip() {
        for item in NAV_ITEMS {
            let route = Route::new(item.page);
            assert_eq!(Route::parse(&route.to_path()), Some(route));
        }
        let login = Route::new(Page::Login);
        assert_eq!(Route::parse(&login.to_path()), Some(login));
    }

    #[test]
    fn create_action_round_trips() {
        let route = Route {
            page: Page::Employees,
            action: Some(RouteAction::Create),
        };
        assert_eq!(route.to_path(), "/admin/employees?action=create");
        assert_eq!(Route::parse("/admin/employees?action=create"), Some(route));
    }

    #[test]
    fn root_admin_is_exact() {
        assert_eq!(Route::parse("/admin"), Some(Route::new(Page::Dashboard)));
        assert_eq!(Route::parse("/admin/"), None);
        assert_eq!(Route::parse("/admin/unknown"), None);
    }

    #[test]
    fn paths_are_case_sensitive() {
        assert_eq!(Route::parse("/Admin/products"), None);
    }

    #[test]
    fn unknown_query_degrades_to_no_action() {
        let route = Route::parse("/admin/employees?action=delete").unwrap();
        assert_eq!(route.action, None);
    }

    #[test]
    fn route_serializes_round_trip() {
        let route = Route {
            page: Page::Products,
            action: Some(RouteAction::Create),
        };
        let json = serde_json::to_string(&route).unwrap();
        let back: Route = serde_json::from_str(&json).unwrap();
        assert_eq!(back, route);
    }

    #[test]
    fn detail_path_appends_id() {
        assert_eq!(
            Page::Employees.detail_path("emp-3"),
            "/admin/employees/emp-3"
        );
    }

    #[test]
    fn route_state_action_toggles() {
        let mut state = RouteState::default();
        state.goto(Page::Employees);
        assert!(!state.action_is(RouteAction::Create));

        state.set_action(RouteAction::Create);
        assert!(state.action_is(RouteAction::Create));

        state.clear_action();
        assert!(!state.action_is(RouteAction::Create));
    }

    #[test]
    fn goto_clears_action() {
        let mut state = RouteState::default();
        state.goto(Page::Employees);
        state.set_action(RouteAction::Create);

        state.goto(Page::Products);
        assert_eq!(state.current, Route::new(Page::Products));
    }
}
