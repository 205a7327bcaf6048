//! Dashboard shell: sidebar, session user and current page

use serde::{Deserialize, Serialize};

/// Viewports at or below this width are treated as mobile
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Page {
    #[default]
    LeadsPayments,
    CommissionPeriods,
    CommissionRanges,
    MarketerCommissions,
    Refunds,
}

/// Sidebar entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub page: Page,
    pub path: &'static str,
    pub label: &'static str,
}

const NAV_ITEMS: &[NavItem] = &[
    NavItem {
        page: Page::LeadsPayments,
        path: "/",
        label: "Leads & Payments",
    },
    NavItem {
        page: Page::CommissionPeriods,
        path: "/commission-periods",
        label: "Commission Periods",
    },
    NavItem {
        page: Page::CommissionRanges,
        path: "/commission-ranges",
        label: "Commission Ranges",
    },
    NavItem {
        page: Page::MarketerCommissions,
        path: "/marketer-commissions",
        label: "Marketer Commissions",
    },
    NavItem {
        page: Page::Refunds,
        path: "/refunds",
        label: "Refunds",
    },
];

impl Page {
    pub fn nav_items() -> &'static [NavItem] {
        NAV_ITEMS
    }

    /// Unknown paths fall back to the default page
    pub fn from_path(path: &str) -> Self {
        let path = match path.trim_end_matches('/') {
            "" => "/",
            trimmed => trimmed,
        };
        NAV_ITEMS
            .iter()
            .find(|item| item.path == path)
            .map(|item| item.page)
            .unwrap_or_default()
    }

    fn item(&self) -> &'static NavItem {
        // every variant has an entry
        NAV_ITEMS
            .iter()
            .find(|item| item.page == *self)
            .unwrap_or(&NAV_ITEMS[0])
    }

    pub fn path(&self) -> &'static str {
        self.item().path
    }

    pub fn label(&self) -> &'static str {
        self.item().label
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub name: String,
    pub initials: String,
}

impl SessionUser {
    /// Static stand-in until the portal gets real sign-in
    pub fn mock() -> Self {
        Self {
            name: "John Doe".into(),
            initials: "JD".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ShellAction {
    ToggleSidebar,
    CloseSidebar,
    SetMobile(bool),
    Logout,
    Navigate(Page),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ShellState {
    pub sidebar_open: bool,
    pub is_mobile: bool,
    pub user: Option<SessionUser>,
    pub current_page: Page,
}

impl ShellState {
    pub fn new(viewport_width: f64, path: &str) -> Self {
        Self {
            sidebar_open: false,
            is_mobile: is_mobile_width(viewport_width),
            user: Some(SessionUser::mock()),
            current_page: Page::from_path(path),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn reduce(self, action: ShellAction) -> Self {
        match action {
            ShellAction::ToggleSidebar => Self {
                sidebar_open: !self.sidebar_open,
                ..self
            },
            ShellAction::CloseSidebar => Self {
                sidebar_open: false,
                ..self
            },
            ShellAction::SetMobile(is_mobile) => Self { is_mobile, ..self },
            ShellAction::Logout => Self {
                user: None,
                sidebar_open: false,
                ..self
            },
            ShellAction::Navigate(page) => Self {
                current_page: page,
                sidebar_open: false,
                ..self
            },
        }
    }
}

impl Default for ShellState {
    fn default() -> Self {
        Self::new(MOBILE_BREAKPOINT_PX + 1.0, "/")
    }
}

pub fn is_mobile_width(width: f64) -> bool {
    width <= MOBILE_BREAKPOINT_PX
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_paths_map_to_default_page() {
        assert_eq!(Page::from_path("/refunds"), Page::Refunds);
        assert_eq!(Page::from_path("/refunds/"), Page::Refunds);
        assert_eq!(Page::from_path(""), Page::LeadsPayments);
        assert_eq!(Page::from_path("/settings"), Page::LeadsPayments);
        assert_eq!(Page::from_path("/login"), Page::LeadsPayments);
    }

    #[test]
    fn every_page_has_a_nav_entry() {
        for item in Page::nav_items() {
            assert_eq!(Page::from_path(item.path), item.page);
            assert_eq!(item.page.label(), item.label);
        }
        assert_eq!(Page::nav_items().len(), 5);
    }

    #[test]
    fn sidebar_toggles_and_closes() {
        let state = ShellState::default().reduce(ShellAction::ToggleSidebar);
        assert!(state.sidebar_open);
        let state = state.reduce(ShellAction::ToggleSidebar);
        assert!(!state.sidebar_open);
        let state = state
            .reduce(ShellAction::ToggleSidebar)
            .reduce(ShellAction::CloseSidebar);
        assert!(!state.sidebar_open);
    }

    #[test]
    fn navigation_closes_sidebar() {
        let state = ShellState::default()
            .reduce(ShellAction::ToggleSidebar)
            .reduce(ShellAction::Navigate(Page::CommissionRanges));
        assert_eq!(state.current_page, Page::CommissionRanges);
        assert!(!state.sidebar_open);
    }

    #[test]
    fn mobile_breakpoint_is_inclusive() {
        assert!(ShellState::new(768.0, "/").is_mobile);
        assert!(!ShellState::new(1024.0, "/").is_mobile);
        let state = ShellState::default().reduce(ShellAction::SetMobile(true));
        assert!(state.is_mobile);
    }

    #[test]
    fn logout_clears_user() {
        let state = ShellState::default();
        assert_eq!(state.user.as_ref().map(|u| u.initials.as_str()), Some("JD"));
        let state = state.reduce(ShellAction::Logout);
        assert!(!state.is_authenticated());
    }
}
