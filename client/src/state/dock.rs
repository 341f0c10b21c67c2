//! Dock entries shared by the desktop and mobile docks.

#[cfg(test)]
#[path = "dock_test.rs"]
mod dock_test;

/// What activating a dock entry does.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DockAction {
    /// Navigate to `href`, in a new tab when `new_tab` is set.
    Link { href: &'static str, new_tab: bool },
    /// Show or hide the projects window.
    ToggleProjects,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DockItem {
    pub label: &'static str,
    /// Modifier class selecting the icon tile style.
    pub tile: &'static str,
    /// Glyph rendered inside the tile.
    pub glyph: &'static str,
    pub action: DockAction,
}

impl DockItem {
    /// `target` attribute for link entries.
    pub fn target(&self) -> Option<&'static str> {
        match self.action {
            DockAction::Link { new_tab: true, .. } => Some("_blank"),
            DockAction::Link { new_tab: false, .. } | DockAction::ToggleProjects => None,
        }
    }

    /// `rel` attribute for link entries opened in a new tab.
    pub fn rel(&self) -> Option<&'static str> {
        self.target().map(|_| "noopener noreferrer")
    }
}

pub const DOCK_ITEMS: &[DockItem] = &[
    DockItem {
        label: "Phone",
        tile: "dock__tile--phone",
        glyph: "☎",
        action: DockAction::Link { href: "tel:+1234567890", new_tab: false },
    },
    DockItem { label: "Projects", tile: "dock__tile--projects", glyph: "▤", action: DockAction::ToggleProjects },
    DockItem {
        label: "Email",
        tile: "dock__tile--email",
        glyph: "✉",
        action: DockAction::Link { href: "mailto:dantesilvacodes@gmail.com", new_tab: false },
    },
    DockItem {
        label: "GitHub",
        tile: "dock__tile--github",
        glyph: "⌥",
        action: DockAction::Link { href: "https://github.com/dante-thinkitfirst", new_tab: true },
    },
    DockItem {
        label: "Spotify",
        tile: "dock__tile--spotify",
        glyph: "♫",
        action: DockAction::Link { href: "https://open.spotify.com/playlist/3OEaBjNVglYxPcGxqNR66Q", new_tab: true },
    },
];
