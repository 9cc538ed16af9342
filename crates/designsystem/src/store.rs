//! Mutable token registry backing the plugin panel.

use std::{fmt, str::FromStr};

use crossbeam_channel::Receiver;
use indexmap::IndexMap;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::{
    defaults::{
        default_border_styles, default_border_widths, default_colors, default_components,
        default_radius, default_shadows, default_spacing, default_themes, default_typography,
    },
    edit::{ColorField, ParseEditError, TokenEdit},
    error::StoreError,
    events::{ChangeBus, TokenEvent},
    table::TokenTable,
    tokens::{
        BorderStyle, BorderWidthToken, ColorToken, ComponentSpec, RadiusToken, ShadowToken,
        SpacingToken, Theme, TypographyToken, DEFAULT_THEME,
    },
};

/// Token categories that support the generic structural operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    /// Color palette.
    Colors,
    /// Spacing scale.
    Spacing,
    /// Corner radius scale.
    Radius,
    /// Text styles.
    Typography,
    /// Drop shadows.
    Shadows,
    /// Stroke widths.
    BorderWidths,
    /// Theme bundles.
    Themes,
}

impl Category {
    /// Every category in export order.
    pub const ALL: [Category; 7] = [
        Category::Colors,
        Category::Spacing,
        Category::Radius,
        Category::Typography,
        Category::Shadows,
        Category::BorderWidths,
        Category::Themes,
    ];

    /// Slug used in configuration files and on the command line.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Category::Colors => "colors",
            Category::Spacing => "spacing",
            Category::Radius => "radius",
            Category::Typography => "typography",
            Category::Shadows => "shadows",
            Category::BorderWidths => "border-widths",
            Category::Themes => "themes",
        }
    }

    /// Generated name for an unnamed token added when the category already
    /// holds `count` tokens.
    ///
    /// Spacing keys are step indices starting at zero, so they are numbered
    /// from `count`; every other category numbers from `count + 1`.
    fn fallback_name(self, count: usize) -> (&'static str, usize) {
        match self {
            Category::Colors => ("color", count + 1),
            Category::Spacing => ("spacing", count),
            Category::Radius => ("radius", count + 1),
            Category::Typography => ("text", count + 1),
            Category::Shadows => ("shadow", count + 1),
            Category::BorderWidths => ("border", count + 1),
            Category::Themes => ("theme", count + 1),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ParseEditError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|category| category.as_str() == name)
            .ok_or_else(|| ParseEditError::UnknownCategory(name.to_owned()))
    }
}

/// How the store reacts to invalid mutations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MutationPolicy {
    /// Invalid mutations are ignored and reported as not applied.
    #[default]
    Permissive,
    /// Invalid mutations return a [`StoreError`].
    Strict,
}

/// Plain token data held by a [`TokenStore`]; also the persisted snapshot.
///
/// Categories missing from a saved snapshot deserialize to their built-ins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TokenSet {
    /// Color palette.
    pub colors: TokenTable<ColorToken>,
    /// Spacing scale.
    pub spacing: TokenTable<SpacingToken>,
    /// Corner radius scale.
    pub radius: TokenTable<RadiusToken>,
    /// Text styles.
    pub typography: TokenTable<TypographyToken>,
    /// Drop shadows.
    pub shadows: TokenTable<ShadowToken>,
    /// Stroke widths.
    pub border_widths: TokenTable<BorderWidthToken>,
    /// Stroke styles.
    pub border_styles: Vec<BorderStyle>,
    /// Component specifications keyed by component name.
    pub components: IndexMap<String, ComponentSpec>,
    /// Theme bundles.
    pub themes: TokenTable<Theme>,
}

impl Default for TokenSet {
    fn default() -> Self {
        static BUILT_IN: Lazy<TokenSet> = Lazy::new(|| TokenSet {
            colors: default_colors(),
            spacing: default_spacing(),
            radius: default_radius(),
            typography: default_typography(),
            shadows: default_shadows(),
            border_widths: default_border_widths(),
            border_styles: default_border_styles(),
            components: default_components(),
            themes: default_themes(),
        });

        BUILT_IN.clone()
    }
}

impl TokenSet {
    /// Number of tokens in the category.
    #[must_use]
    pub fn len(&self, category: Category) -> usize {
        match category {
            Category::Colors => self.colors.len(),
            Category::Spacing => self.spacing.len(),
            Category::Radius => self.radius.len(),
            Category::Typography => self.typography.len(),
            Category::Shadows => self.shadows.len(),
            Category::BorderWidths => self.border_widths.len(),
            Category::Themes => self.themes.len(),
        }
    }

    /// Token names of the category in insertion order.
    #[must_use]
    pub fn keys(&self, category: Category) -> Vec<&str> {
        match category {
            Category::Colors => self.colors.keys().collect(),
            Category::Spacing => self.spacing.keys().collect(),
            Category::Radius => self.radius.keys().collect(),
            Category::Typography => self.typography.keys().collect(),
            Category::Shadows => self.shadows.keys().collect(),
            Category::BorderWidths => self.border_widths.keys().collect(),
            Category::Themes => self.themes.keys().collect(),
        }
    }

    /// Returns `true` if the category holds a token named `key`.
    #[must_use]
    pub fn contains(&self, category: Category, key: &str) -> bool {
        match category {
            Category::Colors => self.colors.contains(key),
            Category::Spacing => self.spacing.contains(key),
            Category::Radius => self.radius.contains(key),
            Category::Typography => self.typography.contains(key),
            Category::Shadows => self.shadows.contains(key),
            Category::BorderWidths => self.border_widths.contains(key),
            Category::Themes => self.themes.contains(key),
        }
    }
}

/// Runs `$body` with `$table` bound to the mutable table of `$category`.
macro_rules! with_table {
    ($tokens:expr, $category:expr, |$table:ident| $body:expr) => {
        match $category {
            Category::Colors => {
                let $table = &mut $tokens.colors;
                $body
            }
            Category::Spacing => {
                let $table = &mut $tokens.spacing;
                $body
            }
            Category::Radius => {
                let $table = &mut $tokens.radius;
                $body
            }
            Category::Typography => {
                let $table = &mut $tokens.typography;
                $body
            }
            Category::Shadows => {
                let $table = &mut $tokens.shadows;
                $body
            }
            Category::BorderWidths => {
                let $table = &mut $tokens.border_widths;
                $body
            }
            Category::Themes => {
                let $table = &mut $tokens.themes;
                $body
            }
        }
    };
}

/// Owned token registry with structural mutation operations.
///
/// Every mutation reports whether it was applied. Under
/// [`MutationPolicy::Permissive`] invalid input is ignored and reported as
/// `Ok(false)`; under [`MutationPolicy::Strict`] it is returned as an error.
/// Applied mutations are published on the store's [`ChangeBus`].
#[derive(Debug, Default)]
pub struct TokenStore {
    tokens: TokenSet,
    policy: MutationPolicy,
    bus: ChangeBus<TokenEvent>,
}

impl Clone for TokenStore {
    /// Copies the tokens and policy. The clone starts with its own bus and no
    /// subscribers.
    fn clone(&self) -> Self {
        Self {
            tokens: self.tokens.clone(),
            policy: self.policy,
            bus: ChangeBus::new(),
        }
    }
}

impl TokenStore {
    /// Creates a permissive store seeded with the built-in tokens.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store around previously saved token data.
    #[must_use]
    pub fn from_tokens(tokens: TokenSet) -> Self {
        Self {
            tokens,
            ..Self::default()
        }
    }

    /// Sets the mutation policy.
    #[must_use]
    pub fn with_policy(mut self, policy: MutationPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Active mutation policy.
    #[must_use]
    pub fn policy(&self) -> MutationPolicy {
        self.policy
    }

    /// Read access to every category.
    #[must_use]
    pub fn tokens(&self) -> &TokenSet {
        &self.tokens
    }

    /// Owned copy of the current token data.
    #[must_use]
    pub fn snapshot(&self) -> TokenSet {
        self.tokens.clone()
    }

    /// Subscribes to change events.
    pub fn subscribe(&self) -> Receiver<TokenEvent> {
        self.bus.subscribe()
    }

    /// Color palette.
    #[must_use]
    pub fn colors(&self) -> &TokenTable<ColorToken> {
        &self.tokens.colors
    }

    /// Spacing scale.
    #[must_use]
    pub fn spacing(&self) -> &TokenTable<SpacingToken> {
        &self.tokens.spacing
    }

    /// Corner radius scale.
    #[must_use]
    pub fn radius(&self) -> &TokenTable<RadiusToken> {
        &self.tokens.radius
    }

    /// Text styles.
    #[must_use]
    pub fn typography(&self) -> &TokenTable<TypographyToken> {
        &self.tokens.typography
    }

    /// Drop shadows.
    #[must_use]
    pub fn shadows(&self) -> &TokenTable<ShadowToken> {
        &self.tokens.shadows
    }

    /// Stroke widths.
    #[must_use]
    pub fn border_widths(&self) -> &TokenTable<BorderWidthToken> {
        &self.tokens.border_widths
    }

    /// Stroke styles.
    #[must_use]
    pub fn border_styles(&self) -> &[BorderStyle] {
        &self.tokens.border_styles
    }

    /// Component specifications.
    #[must_use]
    pub fn components(&self) -> &IndexMap<String, ComponentSpec> {
        &self.tokens.components
    }

    /// Theme bundles.
    #[must_use]
    pub fn themes(&self) -> &TokenTable<Theme> {
        &self.tokens.themes
    }

    /// Sets one field of the token named `key`; the edit selects the category.
    pub fn update(&mut self, key: &str, edit: TokenEdit) -> Result<bool, StoreError> {
        let category = edit.category();
        let field = edit.field();
        let tokens = &mut self.tokens;
        let missing = || StoreError::NotFound(key.to_owned());
        let result = match edit {
            TokenEdit::Color(edit) => tokens
                .colors
                .get_mut(key)
                .ok_or_else(missing)
                .and_then(|token| edit.apply(token)),
            TokenEdit::Spacing(edit) => tokens
                .spacing
                .get_mut(key)
                .ok_or_else(missing)
                .map(|token| edit.apply(token)),
            TokenEdit::Radius(edit) => tokens
                .radius
                .get_mut(key)
                .ok_or_else(missing)
                .map(|token| edit.apply(token)),
            TokenEdit::Typography(edit) => tokens
                .typography
                .get_mut(key)
                .ok_or_else(missing)
                .and_then(|token| edit.apply(token)),
            TokenEdit::Shadow(edit) => tokens
                .shadows
                .get_mut(key)
                .ok_or_else(missing)
                .map(|token| edit.apply(token)),
            TokenEdit::BorderWidth(edit) => tokens
                .border_widths
                .get_mut(key)
                .ok_or_else(missing)
                .map(|token| edit.apply(token)),
            TokenEdit::Theme(edit) => tokens
                .themes
                .get_mut(key)
                .ok_or_else(missing)
                .and_then(|theme| edit.apply(theme)),
        };
        let applied = self.settle("update", category, key, result)?.is_some();
        if applied {
            tracing::debug!(%category, key, field, "updated token field");
            self.bus.publish(TokenEvent::Updated {
                category,
                key: key.to_owned(),
                field,
            });
        }
        Ok(applied)
    }

    /// Renames a token, keeping its value and position.
    ///
    /// An empty `new` name or `new == old` leaves the store untouched. The
    /// default theme cannot be renamed. A theme's display name is part of its
    /// value and is not touched; change it with [`ThemeField::Name`].
    ///
    /// [`ThemeField::Name`]: crate::edit::ThemeField::Name
    pub fn rename(&mut self, category: Category, old: &str, new: &str) -> Result<bool, StoreError> {
        if old == new && !new.is_empty() {
            return Ok(false);
        }
        let result = if category == Category::Themes && old == DEFAULT_THEME {
            Err(StoreError::ProtectedTheme(old.to_owned()))
        } else {
            with_table!(self.tokens, category, |table| table.rename(old, new))
        };
        let applied = self.settle("rename", category, old, result)?.is_some();
        if applied {
            tracing::info!(%category, from = old, to = new, "renamed token");
            self.bus.publish(TokenEvent::Renamed {
                category,
                from: old.to_owned(),
                to: new.to_owned(),
            });
        }
        Ok(applied)
    }

    /// Adds a token with category defaults and returns its name.
    ///
    /// Without a `key`, a `<prefix>-<n>` name derived from the current token
    /// count is generated, skipping names that are already taken.
    pub fn add(&mut self, category: Category, key: Option<&str>) -> Result<Option<String>, StoreError> {
        let key = match key {
            Some(key) => key.to_owned(),
            None => {
                let (prefix, start) = category.fallback_name(self.tokens.len(category));
                with_table!(self.tokens, category, |table| table.next_free_name(prefix, start))
            }
        };
        let result = match category {
            Category::Colors => self.tokens.colors.insert(key.clone(), ColorToken::default()),
            Category::Spacing => self.tokens.spacing.insert(key.clone(), SpacingToken::default()),
            Category::Radius => self.tokens.radius.insert(key.clone(), RadiusToken::default()),
            Category::Typography => self
                .tokens
                .typography
                .insert(key.clone(), TypographyToken::default()),
            Category::Shadows => self.tokens.shadows.insert(key.clone(), ShadowToken::default()),
            Category::BorderWidths => self
                .tokens
                .border_widths
                .insert(key.clone(), BorderWidthToken::new(1, "")),
            Category::Themes => self.tokens.themes.insert(key.clone(), Theme::new(key.clone())),
        };
        let added = self.settle("add", category, &key, result)?.map(|()| key);
        if let Some(key) = &added {
            tracing::info!(%category, key = key.as_str(), "added token");
            self.bus.publish(TokenEvent::Added {
                category,
                key: key.clone(),
            });
        }
        Ok(added)
    }

    /// Removes a token. The default theme is never removed.
    pub fn delete(&mut self, category: Category, key: &str) -> Result<bool, StoreError> {
        self.delete_confirmed(category, key, |_, _| true)
    }

    /// Removes a token after `confirm` approves it.
    ///
    /// The gate only runs for tokens that can actually be removed; declining
    /// it counts as a cancelled mutation.
    pub fn delete_confirmed<F>(&mut self, category: Category, key: &str, confirm: F) -> Result<bool, StoreError>
    where
        F: FnOnce(Category, &str) -> bool,
    {
        let result = if category == Category::Themes && key == DEFAULT_THEME {
            Err(StoreError::ProtectedTheme(key.to_owned()))
        } else if !self.tokens.contains(category, key) {
            Err(StoreError::NotFound(key.to_owned()))
        } else if !confirm(category, key) {
            Err(StoreError::Cancelled(key.to_owned()))
        } else {
            with_table!(self.tokens, category, |table| table.remove(key).map(drop))
        };
        let applied = self.settle("delete", category, key, result)?.is_some();
        if applied {
            tracing::info!(%category, key, "deleted token");
            self.bus.publish(TokenEvent::Deleted {
                category,
                key: key.to_owned(),
            });
        }
        Ok(applied)
    }

    /// Deep-copies a token under a new name. Taken or empty names are rejected.
    ///
    /// Copied themes keep the display name of their source.
    pub fn duplicate(&mut self, category: Category, key: &str, new: &str) -> Result<bool, StoreError> {
        let result = with_table!(self.tokens, category, |table| table.duplicate(key, new));
        let applied = self.settle("duplicate", category, key, result)?.is_some();
        if applied {
            tracing::info!(%category, from = key, to = new, "duplicated token");
            self.bus.publish(TokenEvent::Duplicated {
                category,
                from: key.to_owned(),
                to: new.to_owned(),
            });
        }
        Ok(applied)
    }

    /// Flips whether a color is included in exports.
    pub fn toggle_enabled(&mut self, key: &str) -> Result<bool, StoreError> {
        let enabled = match self.tokens.colors.get(key) {
            Some(color) => !color.enabled,
            None => {
                let result = Err(StoreError::NotFound(key.to_owned()));
                return self.settle::<()>("toggle", Category::Colors, key, result).map(|_| false);
            }
        };
        self.update(key, TokenEdit::Color(ColorField::Enabled(enabled)))
    }

    /// Restores the built-in token set.
    pub fn reset(&mut self) {
        self.tokens = TokenSet::default();
        tracing::info!("reset tokens to built-in defaults");
        self.bus.publish(TokenEvent::Reset);
    }

    fn settle<T>(
        &self,
        operation: &'static str,
        category: Category,
        key: &str,
        result: Result<T, StoreError>,
    ) -> Result<Option<T>, StoreError> {
        match result {
            Ok(value) => Ok(Some(value)),
            Err(err) if self.policy == MutationPolicy::Permissive => {
                tracing::debug!(operation, %category, key, error = %err, "ignored token mutation");
                Ok(None)
            }
            Err(err) => Err(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::edit::{ScalarField, ShadowField, ThemeField, TypographyField};

    fn strict() -> TokenStore {
        TokenStore::new().with_policy(MutationPolicy::Strict)
    }

    #[test]
    fn category_slugs_round_trip() {
        for category in Category::ALL {
            assert_eq!(category.as_str().parse::<Category>(), Ok(category));
        }
        assert!("strokes".parse::<Category>().is_err());
    }

    #[test]
    fn update_sets_a_single_field() {
        let mut store = TokenStore::new();
        let applied = store
            .update("spacing-4", TokenEdit::Spacing(ScalarField::Value(18)))
            .unwrap();
        assert!(applied);
        assert_eq!(store.spacing().get("spacing-4").unwrap().value, 18);
    }

    #[test]
    fn update_missing_key_is_ignored_by_default() {
        let mut store = TokenStore::new();
        let before = store.snapshot();
        let applied = store
            .update("missing", TokenEdit::Shadow(ShadowField::Blur(4)))
            .unwrap();
        assert!(!applied);
        assert_eq!(store.snapshot(), before);
    }

    #[test]
    fn strict_update_reports_missing_key_and_bad_color() {
        let mut store = strict();
        assert_eq!(
            store.update("missing", TokenEdit::Color(ColorField::Description("x".into()))),
            Err(StoreError::NotFound("missing".into()))
        );
        assert_eq!(
            store.update("primary", TokenEdit::Color(ColorField::Value("blue".into()))),
            Err(StoreError::InvalidColor("blue".into()))
        );
        assert_eq!(store.colors().get("primary").unwrap().value, "#6366f1");
    }

    #[test]
    fn rename_preserves_value_and_removes_old_key() {
        let mut store = TokenStore::new();
        let original = store.shadows().get("shadow-md").cloned();
        assert!(store.rename(Category::Shadows, "shadow-md", "elevation-2").unwrap());
        assert_eq!(store.shadows().get("elevation-2").cloned(), original);
        assert!(!store.shadows().contains("shadow-md"));
    }

    #[test]
    fn rename_to_empty_or_same_name_is_a_no_op() {
        let mut store = TokenStore::new();
        let before = store.snapshot();
        assert!(!store.rename(Category::Colors, "primary", "").unwrap());
        assert!(!store.rename(Category::Colors, "primary", "primary").unwrap());
        assert_eq!(store.snapshot(), before);
    }

    #[test]
    fn rename_onto_existing_name_is_rejected() {
        let mut store = strict();
        assert_eq!(
            store.rename(Category::Colors, "primary", "secondary"),
            Err(StoreError::AlreadyExists("secondary".into()))
        );
        assert_eq!(store.colors().get("secondary").unwrap().value, "#8b5cf6");
    }

    #[test]
    fn add_without_key_uses_count_based_names() {
        let mut store = TokenStore::new();
        let spacing = store.add(Category::Spacing, None).unwrap();
        assert_eq!(spacing.as_deref(), Some("spacing-11"));
        assert_eq!(store.spacing().get("spacing-11").unwrap().value, 0);

        let color_count = store.colors().len();
        let color = store.add(Category::Colors, None).unwrap();
        assert_eq!(color, Some(format!("color-{}", color_count + 1)));
    }

    #[test]
    fn add_with_taken_key_is_rejected() {
        let mut store = strict();
        assert_eq!(
            store.add(Category::Radius, Some("radius-md")),
            Err(StoreError::AlreadyExists("radius-md".into()))
        );
        assert_eq!(store.radius().get("radius-md").unwrap().value, 8);
    }

    #[test]
    fn default_theme_cannot_be_deleted_or_renamed() {
        let mut store = strict();
        assert_eq!(
            store.delete(Category::Themes, DEFAULT_THEME),
            Err(StoreError::ProtectedTheme(DEFAULT_THEME.into()))
        );
        assert_eq!(
            store.rename(Category::Themes, DEFAULT_THEME, "base"),
            Err(StoreError::ProtectedTheme(DEFAULT_THEME.into()))
        );

        let mut permissive = TokenStore::new();
        assert!(!permissive.delete(Category::Themes, DEFAULT_THEME).unwrap());
        assert!(permissive.themes().contains(DEFAULT_THEME));
    }

    #[test]
    fn declined_confirmation_keeps_the_token() {
        let mut store = strict();
        let result = store.delete_confirmed(Category::Colors, "accent", |category, key| {
            assert_eq!((category, key), (Category::Colors, "accent"));
            false
        });
        assert_eq!(result, Err(StoreError::Cancelled("accent".into())));
        assert!(store.colors().contains("accent"));

        assert!(store.delete_confirmed(Category::Colors, "accent", |_, _| true).unwrap());
        assert!(!store.colors().contains("accent"));
    }

    #[test]
    fn duplicate_is_independent_of_its_source() {
        let mut store = TokenStore::new();
        assert!(store.duplicate(Category::Typography, "body", "body-alt").unwrap());
        store
            .update(
                "body-alt",
                TokenEdit::Typography(TypographyField::Size(20)),
            )
            .unwrap();
        assert_eq!(store.typography().get("body").unwrap().size, 14);
        assert_eq!(store.typography().get("body-alt").unwrap().size, 20);
    }

    #[test]
    fn duplicate_onto_existing_name_is_ignored() {
        let mut store = TokenStore::new();
        let before = store.snapshot();
        assert!(!store.duplicate(Category::Colors, "primary", "secondary").unwrap());
        assert!(!store.duplicate(Category::Colors, "primary", "").unwrap());
        assert_eq!(store.snapshot(), before);
    }

    #[test]
    fn toggling_twice_restores_the_flag() {
        let mut store = TokenStore::new();
        assert!(store.toggle_enabled("secondary").unwrap());
        assert!(!store.colors().get("secondary").unwrap().enabled);
        assert!(store.toggle_enabled("secondary").unwrap());
        assert!(store.colors().get("secondary").unwrap().enabled);
        assert!(!store.toggle_enabled("missing").unwrap());
    }

    #[test]
    fn theme_color_overrides_are_validated() {
        let mut store = strict();
        store.add(Category::Themes, Some("dark")).unwrap();
        store
            .update(
                "dark",
                TokenEdit::Theme(ThemeField::SetColor {
                    token: "primary".into(),
                    value: "#111111".into(),
                }),
            )
            .unwrap();
        assert_eq!(
            store.themes().get("dark").unwrap().colors.get("primary").map(String::as_str),
            Some("#111111")
        );
        assert!(store
            .update(
                "dark",
                TokenEdit::Theme(ThemeField::SetColor {
                    token: "primary".into(),
                    value: "dark".into(),
                }),
            )
            .is_err());
    }

    #[test]
    fn applied_mutations_are_published() {
        let mut store = TokenStore::new();
        let events = store.subscribe();
        store.add(Category::Radius, Some("radius-2xl")).unwrap();
        store.delete(Category::Radius, "missing").unwrap();
        store.reset();

        assert_eq!(
            events.try_recv().ok(),
            Some(TokenEvent::Added {
                category: Category::Radius,
                key: "radius-2xl".into(),
            })
        );
        assert_eq!(events.try_recv().ok(), Some(TokenEvent::Reset));
        assert!(events.try_recv().is_err());
    }

    #[test]
    fn reset_restores_defaults() {
        let mut store = TokenStore::new();
        store.delete(Category::Colors, "primary").unwrap();
        store.reset();
        assert_eq!(store.snapshot(), TokenSet::default());
    }

    #[test]
    fn clones_do_not_notify_the_original_subscribers() {
        let original = TokenStore::new();
        let events = original.subscribe();
        let mut copy = original.clone();
        let copy_events = copy.subscribe();

        assert!(copy.delete(Category::Colors, "primary").unwrap());
        assert!(original.colors().contains("primary"));
        assert!(events.try_recv().is_err());
        assert_eq!(
            copy_events.try_recv().ok(),
            Some(TokenEvent::Deleted {
                category: Category::Colors,
                key: "primary".into(),
            })
        );
    }

    #[test]
    fn partial_snapshot_fills_missing_categories() {
        let tokens: TokenSet = serde_json::from_str(r#"{"colors":{}}"#).unwrap();
        assert!(tokens.colors.is_empty());
        assert_eq!(tokens.spacing, TokenSet::default().spacing);
        assert_eq!(tokens.themes, TokenSet::default().themes);
    }

    #[test]
    fn theme_display_name_is_independent_of_its_key() {
        let mut store = TokenStore::new();
        store.add(Category::Themes, Some("dark")).unwrap();
        assert!(store.rename(Category::Themes, "dark", "night").unwrap());
        assert!(store.duplicate(Category::Themes, DEFAULT_THEME, "brand").unwrap());

        assert_eq!(store.themes().get("night").unwrap().name, "dark");
        assert_eq!(store.themes().get("brand").unwrap().name, "Default");

        store
            .update("brand", TokenEdit::Theme(ThemeField::Name("Brand".into())))
            .unwrap();
        assert_eq!(store.themes().get("brand").unwrap().name, "Brand");
    }
}
