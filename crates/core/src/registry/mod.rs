//! Built-in themes and per-type callout defaults.
//!
//! Each theme is a static catalogue of callout types. [`Theme::callouts`] hands
//! out a fresh owned copy every time, so merging user overrides never touches
//! the catalogue itself.

mod github;
mod obsidian;
mod vitepress;

use crate::error::CalloutError;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Fallback color when a type has none configured.
pub const DEFAULT_COLOR: &str = "#888";

/// Named built-in themes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// GitHub alerts (note, tip, important, warning, caution).
    Github,
    /// Obsidian callouts, including Obsidian's own alias types.
    #[default]
    Obsidian,
    /// VitePress GitHub-flavored alerts; no icons, upper-cased titles.
    Vitepress,
}

impl Theme {
    /// All built-in themes.
    pub const ALL: [Theme; 3] = [Theme::Github, Theme::Obsidian, Theme::Vitepress];

    /// Lowercase theme name.
    pub fn name(self) -> &'static str {
        match self {
            Theme::Github => "github",
            Theme::Obsidian => "obsidian",
            Theme::Vitepress => "vitepress",
        }
    }

    /// Returns a fresh copy of the theme's callout catalogue.
    pub fn callouts(self) -> IndexMap<String, CalloutConfig> {
        let entries = match self {
            Theme::Github => github::ENTRIES,
            Theme::Obsidian => obsidian::ENTRIES,
            Theme::Vitepress => vitepress::ENTRIES,
        };
        entries
            .iter()
            .map(|entry| (entry.name.to_string(), entry.to_config()))
            .collect()
    }

    /// Title used when neither the marker nor the type config gives one.
    pub fn fallback_title(self, callout_type: &str) -> String {
        match self {
            Theme::Github | Theme::Obsidian => capitalize(callout_type),
            Theme::Vitepress => callout_type.to_uppercase(),
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Theme {
    type Err = CalloutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        Theme::ALL
            .into_iter()
            .find(|theme| theme.name() == lower)
            .ok_or_else(|| CalloutError::UnknownTheme(s.to_string()))
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Per-type callout defaults. Absent fields fall back at render time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CalloutConfig {
    /// Default title shown when the marker has no inline title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Indicator icon as SVG markup.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub indicator: Option<String>,
    /// Accent color, one value or a light/dark pair.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
}

impl CalloutConfig {
    /// Overwrites each field that `overrides` sets; leaves the rest alone.
    pub fn merge_from(&mut self, overrides: &CalloutConfig) {
        if let Some(title) = &overrides.title {
            self.title = Some(title.clone());
        }
        if let Some(indicator) = &overrides.indicator {
            self.indicator = Some(indicator.clone());
        }
        if let Some(color) = &overrides.color {
            self.color = Some(color.clone());
        }
    }
}

/// A callout accent color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Color {
    /// Same color for light and dark schemes.
    Single(String),
    /// Light color, then dark color.
    Pair(String, String),
}

impl Color {
    /// CSS custom properties for the container's `style` attribute.
    pub fn css_variables(color: Option<&Color>) -> String {
        let (light, dark) = match color {
            Some(Color::Single(c)) => (c.as_str(), c.as_str()),
            Some(Color::Pair(light, dark)) => (light.as_str(), dark.as_str()),
            None => (DEFAULT_COLOR, DEFAULT_COLOR),
        };
        format!("--callout-color-light: {light}; --callout-color-dark: {dark};")
    }
}

/// Static catalogue row.
struct ThemeEntry {
    name: &'static str,
    title: Option<&'static str>,
    indicator: Option<&'static str>,
    color: StaticColor,
}

enum StaticColor {
    Single(&'static str),
    Pair(&'static str, &'static str),
}

impl ThemeEntry {
    fn to_config(&self) -> CalloutConfig {
        CalloutConfig {
            title: self.title.map(str::to_string),
            indicator: self.indicator.map(str::to_string),
            color: Some(match self.color {
                StaticColor::Single(c) => Color::Single(c.to_string()),
                StaticColor::Pair(light, dark) => Color::Pair(light.to_string(), dark.to_string()),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_names_round_trip() {
        for theme in Theme::ALL {
            assert_eq!(theme.name().parse::<Theme>().unwrap(), theme);
        }
        assert_eq!("GitHub".parse::<Theme>().unwrap(), Theme::Github);
        assert!(matches!(
            "docusaurus".parse::<Theme>(),
            Err(CalloutError::UnknownTheme(name)) if name == "docusaurus"
        ));
    }

    #[test]
    fn github_catalogue() {
        let callouts = Theme::Github.callouts();
        let names: Vec<&str> = callouts.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["note", "tip", "important", "warning", "caution"]);
        assert!(callouts.values().all(|c| c.indicator.is_some()));
        assert_eq!(callouts["warning"].title.as_deref(), Some("Warning"));
    }

    #[test]
    fn obsidian_catalogue_has_alias_types() {
        let callouts = Theme::Obsidian.callouts();
        for name in ["abstract", "summary", "tldr", "hint", "faq", "cite", "error"] {
            assert!(callouts.contains_key(name), "missing {name}");
        }
        assert!(callouts.keys().all(|k| k == &k.to_lowercase()));
    }

    #[test]
    fn vitepress_has_no_titles_or_icons() {
        let callouts = Theme::Vitepress.callouts();
        assert!(
            callouts
                .values()
                .all(|c| c.title.is_none() && c.indicator.is_none())
        );
    }

    #[test]
    fn fallback_title_per_theme() {
        assert_eq!(Theme::Github.fallback_title("note"), "Note");
        assert_eq!(Theme::Obsidian.fallback_title("bug"), "Bug");
        assert_eq!(Theme::Vitepress.fallback_title("tip"), "TIP");
        assert_eq!(Theme::Obsidian.fallback_title(""), "");
    }

    #[test]
    fn catalogue_copies_are_independent() {
        let mut first = Theme::Github.callouts();
        first.get_mut("note").unwrap().title = Some("Changed".into());
        assert_eq!(Theme::Github.callouts()["note"].title.as_deref(), Some("Note"));
    }

    #[test]
    fn merge_overwrites_only_given_fields() {
        let mut base = Theme::Github.callouts()["tip"].clone();
        base.merge_from(&CalloutConfig {
            title: Some("Hint".into()),
            ..Default::default()
        });
        assert_eq!(base.title.as_deref(), Some("Hint"));
        assert!(base.indicator.is_some());
        assert!(base.color.is_some());
    }

    #[test]
    fn css_variables() {
        assert_eq!(
            Color::css_variables(Some(&Color::Single("red".into()))),
            "--callout-color-light: red; --callout-color-dark: red;"
        );
        assert_eq!(
            Color::css_variables(Some(&Color::Pair("#fff".into(), "#000".into()))),
            "--callout-color-light: #fff; --callout-color-dark: #000;"
        );
        assert_eq!(
            Color::css_variables(None),
            "--callout-color-light: #888; --callout-color-dark: #888;"
        );
    }

    #[test]
    fn color_deserializes_from_string_or_pair() {
        let single: Color = serde_json::from_str(r##""#0969da""##).unwrap();
        assert_eq!(single, Color::Single("#0969da".into()));
        let pair: Color = serde_json::from_str(r##"["#0969da", "#2f81f7"]"##).unwrap();
        assert_eq!(pair, Color::Pair("#0969da".into(), "#2f81f7".into()));
    }
}
