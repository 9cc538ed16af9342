//! Core design token types edited by the plugin panel.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Radius value that renders as a pill or circle.
pub const RADIUS_FULL: u32 = 9999;

/// A brand or semantic color expressed as `#RRGGBB`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorToken {
    /// Hex color value.
    pub value: String,
    /// Free-form usage notes.
    #[serde(default)]
    pub description: String,
    /// Disabled colors stay editable but are left out of exports.
    #[serde(default = "enabled_by_default")]
    pub enabled: bool,
}

const fn enabled_by_default() -> bool {
    true
}

impl ColorToken {
    /// Creates an enabled color token.
    pub fn new(value: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            description: description.into(),
            enabled: true,
        }
    }
}

impl Default for ColorToken {
    fn default() -> Self {
        Self::new("#000000", "")
    }
}

/// Returns `true` when `value` is a `#RRGGBB` hex color.
#[must_use]
pub fn is_hex_color(value: &str) -> bool {
    value
        .strip_prefix('#')
        .is_some_and(|hex| hex.len() == 6 && hex.chars().all(|c| c.is_ascii_hexdigit()))
}

/// A single pixel measurement used by spacing, radius and border width scales.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScalarToken {
    /// Value in pixels.
    pub value: u32,
    /// Free-form usage notes.
    #[serde(default)]
    pub description: String,
}

impl ScalarToken {
    /// Creates a scalar token.
    pub fn new(value: u32, description: impl Into<String>) -> Self {
        Self {
            value,
            description: description.into(),
        }
    }
}

/// Spacing step in pixels.
pub type SpacingToken = ScalarToken;
/// Corner radius in pixels, [`RADIUS_FULL`] meaning fully rounded.
pub type RadiusToken = ScalarToken;
/// Stroke width in pixels.
pub type BorderWidthToken = ScalarToken;

/// Case transform applied to a text style.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextTransform {
    /// Text is rendered as typed.
    #[default]
    Normal,
    /// Text is rendered in capitals.
    Uppercase,
}

impl TextTransform {
    /// CSS keyword for the transform.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            TextTransform::Normal => "normal",
            TextTransform::Uppercase => "uppercase",
        }
    }
}

/// Lowest accepted font weight.
pub const MIN_FONT_WEIGHT: u16 = 100;
/// Highest accepted font weight.
pub const MAX_FONT_WEIGHT: u16 = 900;

/// Named text style.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypographyToken {
    /// Font family name.
    pub family: String,
    /// Font size in pixels.
    pub size: u32,
    /// Numeric font weight.
    pub weight: u16,
    /// Line height as a multiplier of the font size.
    pub line_height: f64,
    /// Letter spacing in pixels.
    pub letter_spacing: f64,
    /// Case transform.
    #[serde(default)]
    pub transform: TextTransform,
    /// Free-form usage notes.
    #[serde(default)]
    pub description: String,
}

impl TypographyToken {
    /// Creates a text style with normal casing and no description.
    pub fn new(family: impl Into<String>, size: u32, weight: u16, line_height: f64) -> Self {
        Self {
            family: family.into(),
            size,
            weight,
            line_height,
            letter_spacing: 0.0,
            transform: TextTransform::Normal,
            description: String::new(),
        }
    }

    /// Sets the letter spacing.
    #[must_use]
    pub fn letter_spacing(mut self, letter_spacing: f64) -> Self {
        self.letter_spacing = letter_spacing;
        self
    }

    /// Sets the case transform.
    #[must_use]
    pub fn transform(mut self, transform: TextTransform) -> Self {
        self.transform = transform;
        self
    }

    /// Sets the description.
    #[must_use]
    pub fn describe(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

impl Default for TypographyToken {
    fn default() -> Self {
        Self::new("Inter", 16, 400, 1.5)
    }
}

/// Drop shadow with pixel offsets and a CSS color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShadowToken {
    /// Horizontal offset.
    pub x: i32,
    /// Vertical offset.
    pub y: i32,
    /// Blur radius.
    pub blur: i32,
    /// Spread radius.
    pub spread: i32,
    /// CSS color, usually `rgba(...)`.
    pub color: String,
    /// Free-form usage notes.
    #[serde(default)]
    pub description: String,
}

impl ShadowToken {
    /// Creates a shadow token.
    pub fn new(x: i32, y: i32, blur: i32, spread: i32, color: impl Into<String>) -> Self {
        Self {
            x,
            y,
            blur,
            spread,
            color: color.into(),
            description: String::new(),
        }
    }

    /// Formats the shadow as a CSS `box-shadow` value.
    #[must_use]
    pub fn css(&self) -> String {
        format!(
            "{}px {}px {}px {}px {}",
            self.x, self.y, self.blur, self.spread, self.color
        )
    }
}

impl Default for ShadowToken {
    fn default() -> Self {
        Self::new(0, 0, 0, 0, "rgba(0,0,0,0.1)")
    }
}

/// Stroke pattern available to components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BorderStyle {
    /// Continuous line.
    Solid,
    /// Dashed line.
    Dashed,
    /// Dotted line.
    Dotted,
}

impl BorderStyle {
    /// Every style in canonical order.
    pub const ALL: [BorderStyle; 3] = [BorderStyle::Solid, BorderStyle::Dashed, BorderStyle::Dotted];

    /// CSS keyword of the style.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            BorderStyle::Solid => "solid",
            BorderStyle::Dashed => "dashed",
            BorderStyle::Dotted => "dotted",
        }
    }
}

/// Visual emphasis of a button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonVariant {
    /// Main call to action.
    Primary,
    /// Alternative action.
    Secondary,
    /// Low emphasis action.
    Tertiary,
    /// Borderless action.
    Ghost,
    /// Irreversible action.
    Destructive,
}

impl ButtonVariant {
    /// Every variant in canonical order.
    pub const ALL: [ButtonVariant; 5] = [
        ButtonVariant::Primary,
        ButtonVariant::Secondary,
        ButtonVariant::Tertiary,
        ButtonVariant::Ghost,
        ButtonVariant::Destructive,
    ];
}

/// Button size step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonSize {
    /// Compact button.
    Small,
    /// Standard button.
    Medium,
    /// Prominent button.
    Large,
}

impl ButtonSize {
    /// Every size in canonical order.
    pub const ALL: [ButtonSize; 3] = [ButtonSize::Small, ButtonSize::Medium, ButtonSize::Large];
}

/// Token references used to paint one interaction state.
///
/// Every field names a token in another category; `None` means the state
/// draws nothing for that slot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StateBlock {
    /// Background color.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bg: Option<String>,
    /// Text color.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Border color.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border: Option<String>,
    /// Shadow token.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shadow: Option<String>,
    /// Horizontal padding spacing token.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding_x: Option<String>,
    /// Vertical padding spacing token.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding_y: Option<String>,
    /// Corner radius token.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub radius: Option<String>,
    /// Typography token.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font: Option<String>,
}

/// The four interaction states of a sized variant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateSet {
    /// Resting state.
    pub default: StateBlock,
    /// Pointer over the control.
    pub hover: StateBlock,
    /// Pointer held down.
    pub pressed: StateBlock,
    /// Control cannot be used.
    pub disabled: StateBlock,
}

/// Sizes available for one variant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantSpec {
    /// State sets keyed by size.
    pub sizes: IndexMap<ButtonSize, StateSet>,
}

/// Component specification, currently only used for buttons.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentSpec {
    /// Variant definitions keyed by variant.
    pub variants: IndexMap<ButtonVariant, VariantSpec>,
}

/// Named bundle of color and component overrides.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    /// Free display label. It is not kept in step with the theme's key on
    /// rename or duplicate.
    pub name: String,
    /// Color overrides keyed by color token name.
    #[serde(default)]
    pub colors: IndexMap<String, String>,
    /// Component overrides keyed by component name.
    #[serde(default)]
    pub components: IndexMap<String, Value>,
}

impl Theme {
    /// Creates a theme without overrides.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

/// Key of the theme that can never be deleted.
pub const DEFAULT_THEME: &str = "default";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_colors_require_six_digits() {
        assert!(is_hex_color("#6366f1"));
        assert!(is_hex_color("#ABCDEF"));
        assert!(!is_hex_color("6366f1"));
        assert!(!is_hex_color("#fff"));
        assert!(!is_hex_color("#gggggg"));
        assert!(!is_hex_color("#6366f1ff"));
    }

    #[test]
    fn shadow_css_keeps_fixed_order() {
        let shadow = ShadowToken::new(0, 4, 6, -1, "rgba(0,0,0,0.1)");
        assert_eq!(shadow.css(), "0px 4px 6px -1px rgba(0,0,0,0.1)");
    }

    #[test]
    fn state_block_serializes_camel_case_and_skips_empty_slots() {
        let block = StateBlock {
            bg: Some("primary".into()),
            padding_x: Some("spacing-4".into()),
            ..StateBlock::default()
        };
        let value = serde_json::to_value(&block).unwrap();
        assert_eq!(
            value,
            serde_json::json!({ "bg": "primary", "paddingX": "spacing-4" })
        );
    }
}
