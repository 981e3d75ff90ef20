//! User options and the resolved, read-only configuration.
//!
//! [`UserOptions`] is what callers hand in (from Rust, JSON, or YAML).
//! [`ResolvedConfig::resolve`] merges it over the selected theme once per
//! document pass; the result is shared immutably by every container rewrite.

use crate::error::CalloutError;
use crate::registry::{CalloutConfig, Theme};
use crate::tree::{Element, Properties};
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer};
use std::fmt;
use std::sync::Arc;

/// Caller-facing options. Every field is optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserOptions {
    /// Theme name (`github`, `obsidian`, `vitepress`).
    pub theme: Option<String>,
    /// Overrides for existing types, or definitions of new ones.
    pub callouts: IndexMap<String, CalloutConfig>,
    /// Canonical type → alias names.
    pub aliases: IndexMap<String, Vec<String>>,
    /// Whether to render indicator icons before titles.
    pub show_indicator: Option<bool>,
    /// Tag-name overrides.
    pub tags: TagsConfig,
    /// Property-provider overrides.
    pub props: PropsConfig,
}

impl UserOptions {
    /// Parses options from a JSON document.
    pub fn from_json_str(input: &str) -> Result<Self, CalloutError> {
        Ok(serde_json::from_str(input)?)
    }

    /// Parses options from a YAML document.
    pub fn from_yaml_str(input: &str) -> Result<Self, CalloutError> {
        Ok(serde_yaml::from_str(input)?)
    }
}

/// Tag-name overrides, one per structural slot.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TagsConfig {
    /// Container tag for non-collapsible callouts.
    pub non_collapsible_container_tag_name: Option<String>,
    /// Title tag for non-collapsible callouts.
    pub non_collapsible_title_tag_name: Option<String>,
    /// Content wrapper tag.
    pub content_tag_name: Option<String>,
    /// Indicator icon wrapper tag.
    pub title_icon_tag_name: Option<String>,
    /// Title text tag.
    pub title_text_tag_name: Option<String>,
    /// Fold icon wrapper tag.
    pub fold_icon_tag_name: Option<String>,
}

/// Resolved tag names. Collapsible callouts always use `details`/`summary`
/// for the container and title regardless of these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagNames {
    /// Non-collapsible container.
    pub container: String,
    /// Non-collapsible title row.
    pub title: String,
    /// Content wrapper.
    pub content: String,
    /// Indicator icon wrapper.
    pub title_icon: String,
    /// Title text.
    pub title_text: String,
    /// Fold icon wrapper.
    pub fold_icon: String,
}

impl Default for TagNames {
    fn default() -> Self {
        Self {
            container: "div".to_string(),
            title: "div".to_string(),
            content: "div".to_string(),
            title_icon: "div".to_string(),
            title_text: "div".to_string(),
            fold_icon: "div".to_string(),
        }
    }
}

impl TagNames {
    fn with_overrides(mut self, tags: &TagsConfig) -> Self {
        let slots = [
            (&mut self.container, &tags.non_collapsible_container_tag_name),
            (&mut self.title, &tags.non_collapsible_title_tag_name),
            (&mut self.content, &tags.content_tag_name),
            (&mut self.title_icon, &tags.title_icon_tag_name),
            (&mut self.title_text, &tags.title_text_tag_name),
            (&mut self.fold_icon, &tags.fold_icon_tag_name),
        ];
        for (slot, value) in slots {
            if let Some(tag) = value.as_deref().map(str::trim).filter(|t| !t.is_empty()) {
                *slot = tag.to_string();
            }
        }
        self
    }
}

/// Signature of a computed property provider: receives the original quote
/// container and the canonical callout type.
pub type ComputeProperties = dyn Fn(&Element, &str) -> Properties + Send + Sync;

/// Properties for one structural slot: fixed, or computed per container.
#[derive(Clone)]
pub enum PropertyProvider {
    /// The same properties for every callout.
    Static(Properties),
    /// Properties computed from the original container and canonical type.
    Computed(Arc<ComputeProperties>),
}

impl PropertyProvider {
    /// Wraps a closure as a computed provider.
    pub fn computed<F>(f: F) -> Self
    where
        F: Fn(&Element, &str) -> Properties + Send + Sync + 'static,
    {
        PropertyProvider::Computed(Arc::new(f))
    }

    /// Produces the properties for one container.
    pub fn provide(&self, container: &Element, callout_type: &str) -> Properties {
        match self {
            PropertyProvider::Static(props) => props.clone(),
            PropertyProvider::Computed(f) => f(container, callout_type),
        }
    }
}

impl Default for PropertyProvider {
    fn default() -> Self {
        PropertyProvider::Static(Properties::new())
    }
}

impl fmt::Debug for PropertyProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyProvider::Static(props) => f.debug_tuple("Static").field(props).finish(),
            PropertyProvider::Computed(_) => f.write_str("Computed(..)"),
        }
    }
}

impl From<Properties> for PropertyProvider {
    fn from(props: Properties) -> Self {
        PropertyProvider::Static(props)
    }
}

// Options documents can only describe static property sets.
impl<'de> Deserialize<'de> for PropertyProvider {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Properties::deserialize(deserializer).map(PropertyProvider::Static)
    }
}

/// Property-provider overrides, one per structural slot.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PropsConfig {
    /// Container properties.
    pub container_props: Option<PropertyProvider>,
    /// Title row properties.
    pub title_props: Option<PropertyProvider>,
    /// Content wrapper properties.
    pub content_props: Option<PropertyProvider>,
    /// Indicator icon wrapper properties.
    pub title_icon_props: Option<PropertyProvider>,
    /// Title text properties.
    pub title_text_props: Option<PropertyProvider>,
    /// Fold icon wrapper properties.
    pub fold_icon_props: Option<PropertyProvider>,
}

/// Resolved property providers, one per structural slot.
#[derive(Debug, Clone, Default)]
pub struct PropertyProviders {
    /// Container.
    pub container: PropertyProvider,
    /// Title row.
    pub title: PropertyProvider,
    /// Content wrapper.
    pub content: PropertyProvider,
    /// Indicator icon wrapper.
    pub title_icon: PropertyProvider,
    /// Title text.
    pub title_text: PropertyProvider,
    /// Fold icon wrapper.
    pub fold_icon: PropertyProvider,
}

impl PropertyProviders {
    fn with_overrides(mut self, props: &PropsConfig) -> Self {
        let slots = [
            (&mut self.container, &props.container_props),
            (&mut self.title, &props.title_props),
            (&mut self.content, &props.content_props),
            (&mut self.title_icon, &props.title_icon_props),
            (&mut self.title_text, &props.title_text_props),
            (&mut self.fold_icon, &props.fold_icon_props),
        ];
        for (slot, value) in slots {
            if let Some(provider) = value {
                *slot = provider.clone();
            }
        }
        self
    }
}

/// Alias name → canonical type. Both sides are lowercase.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AliasMap {
    entries: IndexMap<String, String>,
}

impl AliasMap {
    /// Builds the alias table. Only aliases whose target exists in `callouts`
    /// are registered; a later registration of the same alias wins.
    pub fn build(
        callouts: &IndexMap<String, CalloutConfig>,
        aliases: &IndexMap<String, Vec<String>>,
    ) -> Self {
        let mut map = Self::default();
        for (target, names) in aliases {
            let target = target.to_lowercase();
            if !callouts.contains_key(&target) {
                log::warn!(
                    "Dropping aliases {:?}: callout type '{}' does not exist",
                    names,
                    target
                );
                continue;
            }
            for name in names {
                map.insert(name, &target);
            }
        }
        map
    }

    fn insert(&mut self, alias: &str, target: &str) {
        let alias = alias.trim().to_lowercase();
        if alias.is_empty() {
            return;
        }
        if let Some(previous) = self.entries.insert(alias.clone(), target.to_string())
            && previous != target
        {
            log::debug!(
                "Alias '{}' reassigned from '{}' to '{}'",
                alias,
                previous,
                target
            );
        }
    }

    /// Target type for an alias (case-insensitive).
    pub fn get(&self, alias: &str) -> Option<&str> {
        self.entries.get(&alias.to_lowercase()).map(String::as_str)
    }

    /// Number of registered aliases.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no aliases are registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates `(alias, target)` pairs in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Immutable configuration shared by every container rewrite of a pass.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    theme: Theme,
    callouts: IndexMap<String, CalloutConfig>,
    aliases: AliasMap,
    show_indicator: bool,
    tags: TagNames,
    props: PropertyProviders,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self::from_theme(Theme::default())
    }
}

impl ResolvedConfig {
    /// Theme defaults with no user overrides.
    pub fn from_theme(theme: Theme) -> Self {
        Self {
            theme,
            callouts: theme.callouts(),
            aliases: AliasMap::default(),
            show_indicator: true,
            tags: TagNames::default(),
            props: PropertyProviders::default(),
        }
    }

    /// Resolves options leniently: an unknown theme name falls back to the
    /// default theme with a warning.
    pub fn resolve(options: Option<&UserOptions>) -> Self {
        let Some(options) = options else {
            return Self::default();
        };
        let theme = match options.theme.as_deref() {
            None => Theme::default(),
            Some(name) => name.parse().unwrap_or_else(|_| {
                log::warn!(
                    "Unknown callout theme '{}', falling back to '{}'",
                    name,
                    Theme::default()
                );
                Theme::default()
            }),
        };
        Self::build(theme, options)
    }

    /// Resolves options, failing on an unknown theme name.
    pub fn resolve_strict(options: Option<&UserOptions>) -> Result<Self, CalloutError> {
        let Some(options) = options else {
            return Ok(Self::default());
        };
        let theme = match options.theme.as_deref() {
            None => Theme::default(),
            Some(name) => name.parse()?,
        };
        Ok(Self::build(theme, options))
    }

    fn build(theme: Theme, options: &UserOptions) -> Self {
        let mut callouts = theme.callouts();
        for (key, overrides) in &options.callouts {
            let key = key.to_lowercase();
            match callouts.get_mut(&key) {
                Some(existing) => existing.merge_from(overrides),
                None => {
                    callouts.insert(key, overrides.clone());
                }
            }
        }

        let aliases = AliasMap::build(&callouts, &options.aliases);

        Self {
            theme,
            callouts,
            aliases,
            show_indicator: options.show_indicator.unwrap_or(true),
            tags: TagNames::default().with_overrides(&options.tags),
            props: PropertyProviders::default().with_overrides(&options.props),
        }
    }

    /// Selected theme.
    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// All configured callout types.
    pub fn callouts(&self) -> &IndexMap<String, CalloutConfig> {
        &self.callouts
    }

    /// Configuration for a canonical type.
    pub fn callout(&self, callout_type: &str) -> Option<&CalloutConfig> {
        self.callouts.get(&callout_type.to_lowercase())
    }

    /// Alias table.
    pub fn aliases(&self) -> &AliasMap {
        &self.aliases
    }

    /// Whether indicator icons are rendered.
    pub fn show_indicator(&self) -> bool {
        self.show_indicator
    }

    /// Resolved tag names.
    pub fn tags(&self) -> &TagNames {
        &self.tags
    }

    /// Resolved property providers.
    pub fn props(&self) -> &PropertyProviders {
        &self.props
    }

    /// Canonical type for a written type: the type itself when configured,
    /// otherwise its alias target.
    pub fn canonical_type(&self, written: &str) -> Option<String> {
        let lower = written.to_lowercase();
        if self.callouts.contains_key(&lower) {
            return Some(lower);
        }
        self.aliases.get(&lower).map(str::to_string)
    }

    /// Default title for a canonical type: the configured title, else the
    /// theme's fallback derived from the type name.
    pub fn default_title(&self, callout_type: &str) -> String {
        self.callout(callout_type)
            .and_then(|c| c.title.as_deref())
            .filter(|title| !title.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| self.theme.fallback_title(callout_type))
    }

    /// Indicator markup for a canonical type, if it has a non-empty one.
    pub fn indicator(&self, callout_type: &str) -> Option<&str> {
        self.callout(callout_type)
            .and_then(|c| c.indicator.as_deref())
            .filter(|svg| !svg.trim().is_empty())
    }
}
