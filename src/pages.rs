// Static page content
//
// Every page except Settings is literal content with no data source behind
// it. The values live here so views stay pure layout.

use crate::shell::Route;
use egui_phosphor::regular as icons;

/// Accent used for a stat card icon
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Red,
    Green,
    Yellow,
    Blue,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatCard {
    pub label: &'static str,
    pub value: &'static str,
    pub icon: &'static str,
    pub tone: Tone,
}

/// Fill of the strip drawn under every dashboard stat
pub const STAT_CARD_FILL: f32 = 0.65;

pub const DASHBOARD_STATS: [StatCard; 4] = [
    StatCard {
        label: "Bugs Detected",
        value: "42",
        icon: icons::BUG,
        tone: Tone::Red,
    },
    StatCard {
        label: "Fixed Today",
        value: "12",
        icon: icons::CHECK_CIRCLE,
        tone: Tone::Green,
    },
    StatCard {
        label: "Active Sessions",
        value: "3",
        icon: icons::LIGHTNING,
        tone: Tone::Yellow,
    },
    StatCard {
        label: "System Health",
        value: "98%",
        icon: icons::SHIELD_CHECK,
        tone: Tone::Blue,
    },
];

/// Page with a heading and a single "nothing here" panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyStatePage {
    pub title: &'static str,
    pub icon: &'static str,
    pub message: &'static str,
}

pub const BUGS_PAGE: EmptyStatePage = EmptyStatePage {
    title: "Active Bugs",
    icon: icons::BUG_BEETLE,
    message: "No active bugs currently being exorcised.",
};

pub const HISTORY_PAGE: EmptyStatePage = EmptyStatePage {
    title: "Exorcism History",
    icon: icons::CLOCK_COUNTER_CLOCKWISE,
    message: "No previous exorcism records found in the database.",
};

impl EmptyStatePage {
    pub fn for_route(route: Route) -> Option<&'static EmptyStatePage> {
        match route {
            Route::Bugs => Some(&BUGS_PAGE),
            Route::History => Some(&HISTORY_PAGE),
            Route::Dashboard | Route::Settings => None,
        }
    }
}

pub const APP_TITLE: &str = "BUG_EXORCIST";
pub const PROFILE_NAME: &str = "ADMIN_X";
pub const PROFILE_LEVEL: &str = "Level 4 Access";

pub mod settings_copy {
    pub const TITLE: &str = "Configuration";
    pub const SUBTITLE: &str = "Adjust system parameters for optimal bug exorcism.";
    pub const API_KEY_HINT: &str = "sk-...";
    pub const API_KEY_HELP: &str =
        "Required for summoning GPT-4o to write patches and analyze logs.";
    pub const REPO_HINT: &str = "https://github.com/user/repo";
    pub const REPO_HELP: &str = "The target codebase where bugs will be hunted and eliminated.";
    pub const SAVE_BUTTON: &str = "Save Configuration";
    pub const NOTICE_TITLE: &str = "Security Protocol";
    pub const NOTICE_BODY: &str = "API keys are stored locally on this machine in plain text and \
         persist across restarts. Never share your private keys or repository credentials.";
}
