// Navigation shell state
//
// The shell is the persistent frame around every page: sidebar, top bar,
// search box. Its state is a plain value owned by the app. Views only borrow
// it and report what the operator did as `ShellAction`s; `ShellState::apply`
// is the single place where those actions change anything.

use egui_phosphor::regular as icons;

/// Width of the sidebar panel; page content starts right after it while it is open
pub const SIDEBAR_WIDTH: f32 = 256.0;

/// A client-side navigation target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Dashboard,
    Bugs,
    History,
    Settings,
}

impl Route {
    pub const ALL: [Route; 4] = [Route::Dashboard, Route::Bugs, Route::History, Route::Settings];

    pub fn path(&self) -> &'static str {
        match self {
            Route::Dashboard => "/",
            Route::Bugs => "/bugs",
            Route::History => "/history",
            Route::Settings => "/settings",
        }
    }

    /// Exact path lookup; no prefix or case-insensitive matching
    pub fn from_path(path: &str) -> Option<Route> {
        Route::ALL.into_iter().find(|route| route.path() == path)
    }
}

/// One sidebar entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuItem {
    pub name: &'static str,
    pub route: Route,
    pub icon: &'static str,
}

impl MenuItem {
    pub fn href(&self) -> &'static str {
        self.route.path()
    }

    pub fn is_active(&self, current_path: &str) -> bool {
        self.href() == current_path
    }
}

pub const MENU_ITEMS: [MenuItem; 4] = [
    MenuItem {
        name: "Dashboard",
        route: Route::Dashboard,
        icon: icons::SQUARES_FOUR,
    },
    MenuItem {
        name: "Active Bugs",
        route: Route::Bugs,
        icon: icons::BUG,
    },
    MenuItem {
        name: "History",
        route: Route::History,
        icon: icons::CLOCK_COUNTER_CLOCKWISE,
    },
    MenuItem {
        name: "Settings",
        route: Route::Settings,
        icon: icons::GEAR,
    },
];

/// Menu entries paired with their highlight flag for `current_path`
pub fn menu_with_active(current_path: &str) -> impl Iterator<Item = (MenuItem, bool)> + '_ {
    MENU_ITEMS
        .into_iter()
        .map(move |item| (item, item.is_active(current_path)))
}

/// Something the operator did inside the shell
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellAction {
    ToggleSidebar,
    ToggleSearch,
    SetSearchQuery(String),
    Navigate(Route),
    ExportLogs,
}

/// What the app has to do after an action was applied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellEffect {
    None,
    Navigate(Route),
    ExportLogs,
}

/// Transient UI flags of the shell
///
/// `search_query` is captured on every keystroke but nothing reads it: there
/// is no search backend to feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellState {
    sidebar_open: bool,
    search_open: bool,
    search_query: String,
    focus_search: bool,
}

impl Default for ShellState {
    fn default() -> Self {
        Self {
            sidebar_open: true,
            search_open: false,
            search_query: String::new(),
            focus_search: false,
        }
    }
}

impl ShellState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sidebar_open(&self) -> bool {
        self.sidebar_open
    }

    pub fn search_open(&self) -> bool {
        self.search_open
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    /// Returns true exactly once after the search box was opened
    pub fn take_search_focus(&mut self) -> bool {
        std::mem::take(&mut self.focus_search)
    }

    pub fn apply(&mut self, action: ShellAction) -> ShellEffect {
        match action {
            ShellAction::ToggleSidebar => {
                self.sidebar_open = !self.sidebar_open;
                tracing::debug!("Sidebar open: {}", self.sidebar_open);
                ShellEffect::None
            }
            ShellAction::ToggleSearch => {
                self.search_open = !self.search_open;
                self.focus_search = self.search_open;
                tracing::debug!("Search open: {}", self.search_open);
                ShellEffect::None
            }
            ShellAction::SetSearchQuery(query) => {
                if self.search_open {
                    self.search_query = query;
                }
                ShellEffect::None
            }
            ShellAction::Navigate(route) => ShellEffect::Navigate(route),
            ShellAction::ExportLogs => ShellEffect::ExportLogs,
        }
    }
}

/// Current location, owned by the host rather than by the shell
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigator {
    current_path: String,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new(Route::Dashboard.path())
    }
}

impl Navigator {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            current_path: path.into(),
        }
    }

    pub fn current_path(&self) -> &str {
        &self.current_path
    }

    pub fn current_route(&self) -> Option<Route> {
        Route::from_path(&self.current_path)
    }

    pub fn push(&mut self, route: Route) {
        if self.current_path != route.path() {
            tracing::info!("Navigating {} -> {}", self.current_path, route.path());
            self.current_path = route.path().to_string();
        }
    }
}
