//! VitePress alert types. VitePress ships no icons and renders titles upper-cased.

use super::{StaticColor, ThemeEntry};

pub(super) const ENTRIES: &[ThemeEntry] = &[
    ThemeEntry {
        name: "note",
        title: None,
        indicator: None,
        color: StaticColor::Pair("#646cff", "#a8b1ff"),
    },
    ThemeEntry {
        name: "tip",
        title: None,
        indicator: None,
        color: StaticColor::Pair("#3c8772", "#42b883"),
    },
    ThemeEntry {
        name: "important",
        title: None,
        indicator: None,
        color: StaticColor::Pair("#8e5cd9", "#b491ea"),
    },
    ThemeEntry {
        name: "warning",
        title: None,
        indicator: None,
        color: StaticColor::Pair("#c68a0a", "#e2b93d"),
    },
    ThemeEntry {
        name: "caution",
        title: None,
        indicator: None,
        color: StaticColor::Pair("#d5393e", "#f66f81"),
    },
];
