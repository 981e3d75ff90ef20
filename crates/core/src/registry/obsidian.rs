//! Obsidian callout types with Lucide indicators.
//!
//! Obsidian treats `summary`/`tldr`, `hint`/`important`, and so on as aliases
//! of a base type; they are listed here as types of their own with the base
//! type's icon and color, so users can restyle them independently.

use super::{StaticColor, ThemeEntry};

macro_rules! lucide {
    ($($body:literal),+ $(,)?) => {
        concat!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">"#,
            $($body,)+
            "</svg>"
        )
    };
}

const PENCIL: &str = lucide!(
    r#"<path d="M17 3a2.85 2.83 0 1 1 4 4L7.5 20.5 2 22l1.5-5.5Z"/>"#,
    r#"<path d="m15 5 4 4"/>"#,
);
const CLIPBOARD_LIST: &str = lucide!(
    r#"<rect width="8" height="4" x="8" y="2" rx="1" ry="1"/>"#,
    r#"<path d="M16 4h2a2 2 0 0 1 2 2v14a2 2 0 0 1-2 2H6a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2h2"/>"#,
    r#"<path d="M12 11h4"/><path d="M12 16h4"/><path d="M8 11h.01"/><path d="M8 16h.01"/>"#,
);
const INFO: &str = lucide!(
    r#"<circle cx="12" cy="12" r="10"/>"#,
    r#"<path d="M12 16v-4"/><path d="M12 8h.01"/>"#,
);
const CIRCLE_CHECK: &str = lucide!(
    r#"<circle cx="12" cy="12" r="10"/>"#,
    r#"<path d="m9 12 2 2 4-4"/>"#,
);
const FLAME: &str = lucide!(
    r#"<path d="M8.5 14.5A2.5 2.5 0 0 0 11 12c0-1.38-.5-2-1-3-1.072-2.143-.224-4.054 2-6 .5 2.5 2 4.9 4 6.5 2 1.6 3 3.5 3 5.5a7 7 0 1 1-14 0c0-1.153.433-2.294 1-3a2.5 2.5 0 0 0 2.5 2.5z"/>"#,
);
const CHECK: &str = lucide!(r#"<path d="M20 6 9 17l-5-5"/>"#);
const CIRCLE_HELP: &str = lucide!(
    r#"<circle cx="12" cy="12" r="10"/>"#,
    r#"<path d="M9.09 9a3 3 0 0 1 5.83 1c0 2-3 3-3 3"/><path d="M12 17h.01"/>"#,
);
const TRIANGLE_ALERT: &str = lucide!(
    r#"<path d="m21.73 18-8-14a2 2 0 0 0-3.48 0l-8 14A2 2 0 0 0 4 21h16a2 2 0 0 0 1.73-3"/>"#,
    r#"<path d="M12 9v4"/><path d="M12 17h.01"/>"#,
);
const X: &str = lucide!(r#"<path d="M18 6 6 18"/><path d="m6 6 12 12"/>"#);
const ZAP: &str = lucide!(
    r#"<path d="M4 14a1 1 0 0 1-.78-1.63l9.9-10.2a.5.5 0 0 1 .86.46l-1.92 6.02A1 1 0 0 0 13 10h7a1 1 0 0 1 .78 1.63l-9.9 10.2a.5.5 0 0 1-.86-.46l1.92-6.02A1 1 0 0 0 11 14z"/>"#,
);
const BUG: &str = lucide!(
    r#"<path d="m8 2 1.88 1.88"/><path d="M14.12 3.88 16 2"/>"#,
    r#"<path d="M9 7.13v-1a3.003 3.003 0 1 1 6 0v1"/>"#,
    r#"<path d="M12 20c-3.3 0-6-2.7-6-6v-3a4 4 0 0 1 4-4h4a4 4 0 0 1 4 4v3c0 3.3-2.7 6-6 6"/>"#,
    r#"<path d="M12 20v-9"/><path d="M6.53 9C4.6 8.8 3 7.1 3 5"/><path d="M6 13H2"/>"#,
    r#"<path d="M3 21c0-2.1 1.7-3.9 3.8-4"/><path d="M20.97 5c0 2.1-1.6 3.8-3.5 4"/>"#,
    r#"<path d="M22 13h-4"/><path d="M17.2 17c2.1.1 3.8 1.9 3.8 4"/>"#,
);
const LIST: &str = lucide!(
    r#"<line x1="8" x2="21" y1="6" y2="6"/><line x1="8" x2="21" y1="12" y2="12"/>"#,
    r#"<line x1="8" x2="21" y1="18" y2="18"/><line x1="3" x2="3.01" y1="6" y2="6"/>"#,
    r#"<line x1="3" x2="3.01" y1="12" y2="12"/><line x1="3" x2="3.01" y1="18" y2="18"/>"#,
);
const QUOTE: &str = lucide!(
    r#"<path d="M3 21c3 0 7-1 7-8V5c0-1.25-.756-2.017-2-2H4c-1.25 0-2 .75-2 1.972V11c0 1.25.75 2 2 2 1 0 1 0 1 1v1c0 1-1 2-2 2s-1 .008-1 1.031V20c0 1 0 1 1 1z"/>"#,
    r#"<path d="M15 21c3 0 7-1 7-8V5c0-1.25-.757-2.017-2-2h-4c-1.25 0-2 .75-2 1.972V11c0 1.25.75 2 2 2h.75c0 2.25.25 4-2.75 4v3c0 1 0 1 1 1z"/>"#,
);

const BLUE: StaticColor = StaticColor::Single("#086ddd");
const CYAN: StaticColor = StaticColor::Single("#00bfbc");
const GREEN: StaticColor = StaticColor::Single("#08b94e");
const ORANGE: StaticColor = StaticColor::Single("#ec7500");
const RED: StaticColor = StaticColor::Single("#e93147");
const PURPLE: StaticColor = StaticColor::Single("#7852ee");
const GRAY: StaticColor = StaticColor::Single("#9e9e9e");

const fn entry(
    name: &'static str,
    title: &'static str,
    indicator: &'static str,
    color: StaticColor,
) -> ThemeEntry {
    ThemeEntry {
        name,
        title: Some(title),
        indicator: Some(indicator),
        color,
    }
}

pub(super) const ENTRIES: &[ThemeEntry] = &[
    entry("note", "Note", PENCIL, BLUE),
    entry("abstract", "Abstract", CLIPBOARD_LIST, CYAN),
    entry("summary", "Summary", CLIPBOARD_LIST, CYAN),
    entry("tldr", "TL;DR", CLIPBOARD_LIST, CYAN),
    entry("info", "Info", INFO, BLUE),
    entry("todo", "Todo", CIRCLE_CHECK, BLUE),
    entry("tip", "Tip", FLAME, CYAN),
    entry("hint", "Hint", FLAME, CYAN),
    entry("important", "Important", FLAME, CYAN),
    entry("success", "Success", CHECK, GREEN),
    entry("check", "Check", CHECK, GREEN),
    entry("done", "Done", CHECK, GREEN),
    entry("question", "Question", CIRCLE_HELP, ORANGE),
    entry("help", "Help", CIRCLE_HELP, ORANGE),
    entry("faq", "FAQ", CIRCLE_HELP, ORANGE),
    entry("warning", "Warning", TRIANGLE_ALERT, ORANGE),
    entry("caution", "Caution", TRIANGLE_ALERT, ORANGE),
    entry("attention", "Attention", TRIANGLE_ALERT, ORANGE),
    entry("failure", "Failure", X, RED),
    entry("fail", "Fail", X, RED),
    entry("missing", "Missing", X, RED),
    entry("danger", "Danger", ZAP, RED),
    entry("error", "Error", ZAP, RED),
    entry("bug", "Bug", BUG, RED),
    entry("example", "Example", LIST, PURPLE),
    entry("quote", "Quote", QUOTE, GRAY),
    entry("cite", "Cite", QUOTE, GRAY),
];
