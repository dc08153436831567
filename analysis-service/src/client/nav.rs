//! Sidebar navigation entries.

/// One navigation item.
#[derive(Debug, PartialEq, Eq)]
pub struct NavEntry {
    pub name: &'static str,
    pub path: &'static str,
}

pub const NAVIGATION: [NavEntry; 4] = [
    NavEntry {
        name: "Dashboard",
        path: "/dashboard",
    },
    NavEntry {
        name: "Upload Contract",
        path: "/upload",
    },
    NavEntry {
        name: "Analysis History",
        path: "/history",
    },
    NavEntry {
        name: "Settings",
        path: "/settings",
    },
];

/// The entry to highlight for the current route, if any.
pub fn active_entry(current_path: &str) -> Option<&'static NavEntry> {
    NAVIGATION.iter().find(|entry| entry.path == current_path)
}
