// Terminal log viewer model
//
// Holds the lines shown in the dashboard terminal and decides when the view
// must jump to the bottom. Rendering lives in the binary's ui module.

use egui_phosphor::regular as icons;
use regex::Regex;
use std::sync::OnceLock;

/// Lines shown when the viewer has nothing else to display
pub const DEMO_LOGS: [&str; 9] = [
    "[22:04:11] SYSTEM :: Booting kernel version 4.1.2-PRIME...",
    "[22:04:11] SYSTEM :: Initializing hardware abstraction layer...",
    "[22:04:12] AUTH :: Login success. Welcome back, ROOT_USER.",
    "[22:04:12] UPLINK :: Scanning for available bridge nodes...",
    "[22:04:13] UPLINK :: Found Node-74 (Beijing), Node-12 (Amsterdam), Node-01 (San Francisco).",
    "[22:04:14] UPLINK :: Connecting to Node-01...",
    "[22:04:15] UPLINK :: ESTABLISHED. ENCRYPTION AES-256 ACTIVE.",
    "[22:05:01] PROCESS :: Running decryption script 'hydra_v4.sh'",
    "[22:05:01] DECRYPTING PACKETS... 74% - CRC Checksum Pending...",
];

pub const SESSION_TITLE: &str = "Terminal Logs — Session 0x821";
pub const PROMPT: &str = "root@terminal:~$";
pub const PROMPT_COMMAND: &str = "./init_payload --force";

/// A reading in the terminal stats bar
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TerminalStat {
    pub label: &'static str,
    pub value: &'static str,
    pub icon: &'static str,
    /// Fill fraction for stats drawn as a meter instead of an icon
    pub meter: Option<f32>,
}

pub const TERMINAL_STATS: [TerminalStat; 4] = [
    TerminalStat {
        label: "CPU Load",
        value: "14.02%",
        icon: icons::CHART_BAR,
        meter: Some(0.14),
    },
    TerminalStat {
        label: "Memory Usage",
        value: "2.4 GB",
        icon: icons::CPU,
        meter: None,
    },
    TerminalStat {
        label: "Network Latency",
        value: "12 ms",
        icon: icons::GAUGE,
        meter: None,
    },
    TerminalStat {
        label: "Uptime",
        value: "102:14:02",
        icon: icons::CLOCK,
        meter: None,
    },
];

pub const FOOTER_LEFT: [&str; 2] = ["IP: 192.168.1.102", "VPN: HOLLAND-04 (SECURED)"];
pub const FOOTER_LIVE: &str = "LIVE STREAM";
pub const FOOTER_ENCODING: &str = "UTF-8";

/// A log line split into its parts
///
/// Lines look like `[22:04:11] SYSTEM :: Booting...`. Either prefix may be
/// missing; whatever does not parse ends up in `message`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogLine<'a> {
    pub timestamp: Option<&'a str>,
    pub channel: Option<&'a str>,
    pub message: &'a str,
}

fn log_line_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^\[(?P<ts>[^\]]+)\]\s*(?:(?P<ch>[A-Z][A-Z0-9_]*)\s*::\s*)?(?P<msg>.*)$")
            .expect("log line pattern is valid")
    })
}

impl<'a> LogLine<'a> {
    pub fn parse(line: &'a str) -> Self {
        match log_line_regex().captures(line) {
            Some(caps) => Self {
                timestamp: caps.name("ts").map(|m| m.as_str()),
                channel: caps.name("ch").map(|m| m.as_str()),
                message: caps.name("msg").map(|m| m.as_str()).unwrap_or(""),
            },
            None => Self {
                timestamp: None,
                channel: None,
                message: line,
            },
        }
    }
}

/// Lines for the terminal plus scroll bookkeeping
///
/// Every call to `set_logs` counts as a new list, even if the contents are
/// equal, and triggers one scroll to the bottom.
#[derive(Debug, Clone, Default)]
pub struct TerminalViewer {
    logs: Vec<String>,
    revision: u64,
    scrolled_revision: Option<u64>,
}

impl TerminalViewer {
    pub fn new(logs: Option<Vec<String>>) -> Self {
        Self {
            logs: logs.unwrap_or_default(),
            revision: 0,
            scrolled_revision: None,
        }
    }

    pub fn set_logs(&mut self, logs: Vec<String>) {
        self.logs = logs;
        self.revision = self.revision.wrapping_add(1);
    }

    /// True when the demo lines are being shown instead of supplied ones
    pub fn is_demo(&self) -> bool {
        self.logs.is_empty()
    }

    pub fn current_logs(&self) -> Vec<&str> {
        if self.logs.is_empty() {
            DEMO_LOGS.to_vec()
        } else {
            self.logs.iter().map(String::as_str).collect()
        }
    }

    /// Returns true once per log list, starting with the first frame
    pub fn take_scroll_request(&mut self) -> bool {
        if self.scrolled_revision == Some(self.revision) {
            false
        } else {
            self.scrolled_revision = Some(self.revision);
            true
        }
    }
}
