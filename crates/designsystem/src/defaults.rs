//! Built-in token set every new store starts from.

use indexmap::IndexMap;

use crate::{
    table::TokenTable,
    tokens::{
        BorderStyle, BorderWidthToken, ButtonSize, ButtonVariant, ColorToken, ComponentSpec,
        RadiusToken, ShadowToken, SpacingToken, StateBlock, StateSet, TextTransform, Theme,
        TypographyToken, VariantSpec, DEFAULT_THEME, RADIUS_FULL,
    },
};

/// Default color palette.
pub fn default_colors() -> TokenTable<ColorToken> {
    [
        ("primary", "#6366f1", "Main brand color"),
        ("secondary", "#8b5cf6", "Supporting brand color"),
        ("accent", "#ec4899", "Highlights and callouts"),
        ("success", "#10b981", "Positive feedback"),
        ("warning", "#f59e0b", "Cautionary feedback"),
        ("error", "#ef4444", "Errors and destructive actions"),
        ("info", "#3b82f6", "Informational feedback"),
        ("neutral-50", "#f9fafb", "Page background"),
        ("neutral-100", "#f3f4f6", "Subtle surfaces"),
        ("neutral-200", "#e5e7eb", "Dividers"),
        ("neutral-300", "#d1d5db", "Borders"),
        ("neutral-500", "#6b7280", "Muted text"),
        ("neutral-700", "#374151", "Secondary text"),
        ("neutral-900", "#111827", "Primary text"),
        ("white", "#ffffff", "Text on dark surfaces"),
        ("black", "#000000", "Pure black"),
    ]
    .into_iter()
    .map(|(name, value, description)| (name, ColorToken::new(value, description)))
    .collect()
}

/// Default spacing scale, `spacing-0` through `spacing-10`.
pub fn default_spacing() -> TokenTable<SpacingToken> {
    [0, 4, 8, 12, 16, 20, 24, 32, 40, 48, 64]
        .into_iter()
        .enumerate()
        .map(|(step, px)| (format!("spacing-{step}"), SpacingToken::new(px, format!("{px}px"))))
        .collect()
}

/// Default corner radius scale.
pub fn default_radius() -> TokenTable<RadiusToken> {
    [
        ("radius-none", 0, "Square corners"),
        ("radius-sm", 4, "Inputs and chips"),
        ("radius-md", 8, "Buttons and cards"),
        ("radius-lg", 12, "Panels"),
        ("radius-xl", 16, "Dialogs"),
        ("radius-full", RADIUS_FULL, "Pills and avatars"),
    ]
    .into_iter()
    .map(|(name, px, description)| (name, RadiusToken::new(px, description)))
    .collect()
}

/// Default text styles.
pub fn default_typography() -> TokenTable<TypographyToken> {
    [
        (
            "display",
            TypographyToken::new("Inter", 48, 700, 1.1)
                .letter_spacing(-0.5)
                .describe("Hero headings"),
        ),
        (
            "h1",
            TypographyToken::new("Inter", 36, 700, 1.2)
                .letter_spacing(-0.25)
                .describe("Page titles"),
        ),
        (
            "h2",
            TypographyToken::new("Inter", 30, 600, 1.25).describe("Section titles"),
        ),
        (
            "h3",
            TypographyToken::new("Inter", 24, 600, 1.3).describe("Card titles"),
        ),
        (
            "body-lg",
            TypographyToken::new("Inter", 16, 400, 1.5).describe("Lead paragraphs"),
        ),
        (
            "body",
            TypographyToken::new("Inter", 14, 400, 1.5).describe("Default body text"),
        ),
        (
            "body-sm",
            TypographyToken::new("Inter", 12, 400, 1.5).describe("Dense body text"),
        ),
        (
            "caption",
            TypographyToken::new("Inter", 11, 400, 1.4)
                .letter_spacing(0.2)
                .describe("Captions and hints"),
        ),
        (
            "label",
            TypographyToken::new("Inter", 12, 500, 1.4)
                .letter_spacing(0.5)
                .transform(TextTransform::Uppercase)
                .describe("Overlines and form labels"),
        ),
        (
            "button",
            TypographyToken::new("Inter", 14, 600, 1.0).describe("Button labels"),
        ),
    ]
    .into_iter()
    .collect()
}

/// Default elevation shadows.
pub fn default_shadows() -> TokenTable<ShadowToken> {
    [
        ("shadow-sm", 1, 3, 0),
        ("shadow-md", 4, 6, -1),
        ("shadow-lg", 10, 15, -3),
        ("shadow-xl", 20, 25, -5),
    ]
    .into_iter()
    .map(|(name, y, blur, spread)| (name, ShadowToken::new(0, y, blur, spread, "rgba(0,0,0,0.1)")))
    .collect()
}

/// Default stroke widths.
pub fn default_border_widths() -> TokenTable<BorderWidthToken> {
    [
        ("border-none", 0, "No stroke"),
        ("border-thin", 1, "Hairline dividers"),
        ("border-medium", 2, "Focus rings"),
        ("border-thick", 4, "Emphasis"),
    ]
    .into_iter()
    .map(|(name, px, description)| (name, BorderWidthToken::new(px, description)))
    .collect()
}

/// Default stroke styles.
#[must_use]
pub fn default_border_styles() -> Vec<BorderStyle> {
    BorderStyle::ALL.to_vec()
}

/// Default component specifications, keyed by component name.
pub fn default_components() -> IndexMap<String, ComponentSpec> {
    let mut components = IndexMap::new();
    components.insert("button".to_owned(), default_button());
    components
}

/// Default theme list containing only the protected `default` theme.
pub fn default_themes() -> TokenTable<Theme> {
    [(DEFAULT_THEME, Theme::new("Default"))].into_iter().collect()
}

fn default_button() -> ComponentSpec {
    let variants = ButtonVariant::ALL
        .into_iter()
        .map(|variant| {
            let sizes = ButtonSize::ALL
                .into_iter()
                .map(|size| (size, button_states(variant, size)))
                .collect();
            (variant, VariantSpec { sizes })
        })
        .collect();
    ComponentSpec { variants }
}

fn button_states(variant: ButtonVariant, size: ButtonSize) -> StateSet {
    let (bg, text, border, elevated) = match variant {
        ButtonVariant::Primary => (Some("primary"), "white", None, true),
        ButtonVariant::Secondary => (Some("secondary"), "white", None, true),
        ButtonVariant::Tertiary => (Some("neutral-100"), "neutral-900", Some("neutral-300"), false),
        ButtonVariant::Ghost => (None, "primary", None, false),
        ButtonVariant::Destructive => (Some("error"), "white", None, true),
    };
    let (padding_x, padding_y, radius, font) = match size {
        ButtonSize::Small => ("spacing-3", "spacing-1", "radius-sm", "body-sm"),
        ButtonSize::Medium => ("spacing-4", "spacing-2", "radius-md", "button"),
        ButtonSize::Large => ("spacing-6", "spacing-3", "radius-lg", "body-lg"),
    };

    let block = |bg: Option<&str>, text: &str, shadow: Option<&str>| StateBlock {
        bg: bg.map(str::to_owned),
        text: Some(text.to_owned()),
        border: border.map(str::to_owned),
        shadow: shadow.map(str::to_owned),
        padding_x: Some(padding_x.to_owned()),
        padding_y: Some(padding_y.to_owned()),
        radius: Some(radius.to_owned()),
        font: Some(font.to_owned()),
    };

    let resting_shadow = elevated.then_some("shadow-sm");
    let hover_shadow = elevated.then_some("shadow-md");
    StateSet {
        default: block(bg, text, resting_shadow),
        hover: block(bg.or(Some("neutral-50")), text, hover_shadow),
        pressed: block(bg.or(Some("neutral-100")), text, None),
        disabled: block(Some("neutral-200"), "neutral-500", None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokens::is_hex_color;

    #[test]
    fn spacing_has_eleven_steps() {
        let spacing = default_spacing();
        assert_eq!(spacing.len(), 11);
        assert_eq!(spacing.get("spacing-10").map(|token| token.value), Some(64));
    }

    #[test]
    fn every_default_color_is_hex() {
        for (name, color) in &default_colors() {
            assert!(is_hex_color(&color.value), "{name} is not a hex color");
            assert!(color.enabled);
        }
    }

    #[test]
    fn button_covers_every_variant_size_and_state() {
        let button = default_button();
        assert_eq!(button.variants.len(), ButtonVariant::ALL.len());
        for variant in button.variants.values() {
            assert_eq!(variant.sizes.len(), ButtonSize::ALL.len());
        }
    }

    #[test]
    fn button_references_existing_tokens() {
        let colors = default_colors();
        let spacing = default_spacing();
        let radius = default_radius();
        let typography = default_typography();
        let shadows = default_shadows();

        for variant in default_button().variants.values() {
            for states in variant.sizes.values() {
                for block in [&states.default, &states.hover, &states.pressed, &states.disabled] {
                    for color in [&block.bg, &block.text, &block.border].into_iter().flatten() {
                        assert!(colors.contains(color), "missing color {color}");
                    }
                    for padding in [&block.padding_x, &block.padding_y].into_iter().flatten() {
                        assert!(spacing.contains(padding), "missing spacing {padding}");
                    }
                    if let Some(shadow) = &block.shadow {
                        assert!(shadows.contains(shadow), "missing shadow {shadow}");
                    }
                    assert!(block.radius.as_deref().is_some_and(|r| radius.contains(r)));
                    assert!(block.font.as_deref().is_some_and(|f| typography.contains(f)));
                }
            }
        }
    }
}
