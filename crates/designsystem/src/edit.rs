//! Tagged single-field edits applied through [`TokenStore::update`].
//!
//! [`TokenStore::update`]: crate::store::TokenStore::update

use std::str::FromStr;

use thiserror::Error;

use crate::{
    error::StoreError,
    store::Category,
    tokens::{
        is_hex_color, ColorToken, ScalarToken, ShadowToken, TextTransform, Theme,
        TypographyToken, MAX_FONT_WEIGHT, MIN_FONT_WEIGHT,
    },
};

/// Field edit for a color token.
#[derive(Debug, Clone, PartialEq)]
pub enum ColorField {
    /// Replaces the hex value.
    Value(String),
    /// Replaces the description.
    Description(String),
    /// Sets the export flag.
    Enabled(bool),
}

/// Field edit for spacing, radius and border width tokens.
#[derive(Debug, Clone, PartialEq)]
pub enum ScalarField {
    /// Replaces the pixel value.
    Value(u32),
    /// Replaces the description.
    Description(String),
}

/// Field edit for a text style.
#[derive(Debug, Clone, PartialEq)]
pub enum TypographyField {
    /// Replaces the font family.
    Family(String),
    /// Replaces the font size.
    Size(u32),
    /// Replaces the font weight.
    Weight(u16),
    /// Replaces the line height multiplier.
    LineHeight(f64),
    /// Replaces the letter spacing.
    LetterSpacing(f64),
    /// Replaces the case transform.
    Transform(TextTransform),
    /// Replaces the description.
    Description(String),
}

/// Field edit for a shadow token.
#[derive(Debug, Clone, PartialEq)]
pub enum ShadowField {
    /// Replaces the horizontal offset.
    X(i32),
    /// Replaces the vertical offset.
    Y(i32),
    /// Replaces the blur radius.
    Blur(i32),
    /// Replaces the spread radius.
    Spread(i32),
    /// Replaces the CSS color.
    Color(String),
    /// Replaces the description.
    Description(String),
}

/// Field edit for a theme.
#[derive(Debug, Clone, PartialEq)]
pub enum ThemeField {
    /// Replaces the display name.
    Name(String),
    /// Overrides a color token inside the theme.
    SetColor {
        /// Color token being overridden.
        token: String,
        /// Hex value used by the theme.
        value: String,
    },
    /// Drops a color override.
    ClearColor(String),
}

/// A single-field edit; the variant names the category it applies to.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenEdit {
    /// Edit of a color token.
    Color(ColorField),
    /// Edit of a spacing token.
    Spacing(ScalarField),
    /// Edit of a radius token.
    Radius(ScalarField),
    /// Edit of a text style.
    Typography(TypographyField),
    /// Edit of a shadow token.
    Shadow(ShadowField),
    /// Edit of a border width token.
    BorderWidth(ScalarField),
    /// Edit of a theme.
    Theme(ThemeField),
}

impl TokenEdit {
    /// Category the edit applies to.
    #[must_use]
    pub const fn category(&self) -> Category {
        match self {
            TokenEdit::Color(_) => Category::Colors,
            TokenEdit::Spacing(_) => Category::Spacing,
            TokenEdit::Radius(_) => Category::Radius,
            TokenEdit::Typography(_) => Category::Typography,
            TokenEdit::Shadow(_) => Category::Shadows,
            TokenEdit::BorderWidth(_) => Category::BorderWidths,
            TokenEdit::Theme(_) => Category::Themes,
        }
    }

    /// Name of the field the edit touches.
    #[must_use]
    pub const fn field(&self) -> &'static str {
        match self {
            TokenEdit::Color(ColorField::Value(_))
            | TokenEdit::Spacing(ScalarField::Value(_))
            | TokenEdit::Radius(ScalarField::Value(_))
            | TokenEdit::BorderWidth(ScalarField::Value(_)) => "value",
            TokenEdit::Color(ColorField::Description(_))
            | TokenEdit::Spacing(ScalarField::Description(_))
            | TokenEdit::Radius(ScalarField::Description(_))
            | TokenEdit::BorderWidth(ScalarField::Description(_)) => "description",
            TokenEdit::Color(ColorField::Enabled(_)) => "enabled",
            TokenEdit::Typography(field) => match field {
                TypographyField::Family(_) => "family",
                TypographyField::Size(_) => "size",
                TypographyField::Weight(_) => "weight",
                TypographyField::LineHeight(_) => "lineHeight",
                TypographyField::LetterSpacing(_) => "letterSpacing",
                TypographyField::Transform(_) => "transform",
                TypographyField::Description(_) => "description",
            },
            TokenEdit::Shadow(field) => match field {
                ShadowField::X(_) => "x",
                ShadowField::Y(_) => "y",
                ShadowField::Blur(_) => "blur",
                ShadowField::Spread(_) => "spread",
                ShadowField::Color(_) => "color",
                ShadowField::Description(_) => "description",
            },
            TokenEdit::Theme(ThemeField::Name(_)) => "name",
            TokenEdit::Theme(ThemeField::SetColor { .. } | ThemeField::ClearColor(_)) => "colors",
        }
    }

    /// Builds an edit from textual input such as `("spacing", "value", "12")`.
    ///
    /// Theme color overrides use the field `colors.<token>`; an empty value
    /// clears the override.
    pub fn parse(category: Category, field: &str, value: &str) -> Result<Self, ParseEditError> {
        let unknown = || ParseEditError::UnknownField {
            category,
            field: field.to_owned(),
        };
        let edit = match category {
            Category::Colors => TokenEdit::Color(match field {
                "value" => ColorField::Value(value.to_owned()),
                "description" => ColorField::Description(value.to_owned()),
                "enabled" => ColorField::Enabled(parse_value(field, value)?),
                _ => return Err(unknown()),
            }),
            Category::Spacing | Category::Radius | Category::BorderWidths => {
                let scalar = match field {
                    "value" => ScalarField::Value(parse_value(field, value)?),
                    "description" => ScalarField::Description(value.to_owned()),
                    _ => return Err(unknown()),
                };
                match category {
                    Category::Spacing => TokenEdit::Spacing(scalar),
                    Category::Radius => TokenEdit::Radius(scalar),
                    _ => TokenEdit::BorderWidth(scalar),
                }
            }
            Category::Typography => TokenEdit::Typography(match field {
                "family" => TypographyField::Family(value.to_owned()),
                "size" => TypographyField::Size(parse_value(field, value)?),
                "weight" => TypographyField::Weight(parse_value(field, value)?),
                "lineHeight" => TypographyField::LineHeight(parse_value(field, value)?),
                "letterSpacing" => TypographyField::LetterSpacing(parse_value(field, value)?),
                "transform" => TypographyField::Transform(match value {
                    "normal" => TextTransform::Normal,
                    "uppercase" => TextTransform::Uppercase,
                    _ => {
                        return Err(ParseEditError::InvalidValue {
                            field: field.to_owned(),
                            value: value.to_owned(),
                        })
                    }
                }),
                "description" => TypographyField::Description(value.to_owned()),
                _ => return Err(unknown()),
            }),
            Category::Shadows => TokenEdit::Shadow(match field {
                "x" => ShadowField::X(parse_value(field, value)?),
                "y" => ShadowField::Y(parse_value(field, value)?),
                "blur" => ShadowField::Blur(parse_value(field, value)?),
                "spread" => ShadowField::Spread(parse_value(field, value)?),
                "color" => ShadowField::Color(value.to_owned()),
                "description" => ShadowField::Description(value.to_owned()),
                _ => return Err(unknown()),
            }),
            Category::Themes => TokenEdit::Theme(match field.split_once('.') {
                None if field == "name" => ThemeField::Name(value.to_owned()),
                Some(("colors", token)) if !token.is_empty() => {
                    if value.is_empty() {
                        ThemeField::ClearColor(token.to_owned())
                    } else {
                        ThemeField::SetColor {
                            token: token.to_owned(),
                            value: value.to_owned(),
                        }
                    }
                }
                _ => return Err(unknown()),
            }),
        };
        Ok(edit)
    }
}

fn parse_value<T: FromStr>(field: &str, value: &str) -> Result<T, ParseEditError> {
    value.trim().parse().map_err(|_| ParseEditError::InvalidValue {
        field: field.to_owned(),
        value: value.to_owned(),
    })
}

/// Error raised when textual input cannot be turned into an edit.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseEditError {
    /// The category name is not recognised.
    #[error("unknown category '{0}'")]
    UnknownCategory(String),
    /// The field does not exist on tokens of the category.
    #[error("{category} tokens have no field '{field}'")]
    UnknownField {
        /// Category being edited.
        category: Category,
        /// Field that was requested.
        field: String,
    },
    /// The value cannot be parsed for the field.
    #[error("'{value}' is not a valid {field}")]
    InvalidValue {
        /// Field being edited.
        field: String,
        /// Rejected input.
        value: String,
    },
}

impl ColorField {
    pub(crate) fn apply(self, token: &mut ColorToken) -> Result<(), StoreError> {
        match self {
            ColorField::Value(value) => {
                if !is_hex_color(&value) {
                    return Err(StoreError::InvalidColor(value));
                }
                token.value = value;
            }
            ColorField::Description(description) => token.description = description,
            ColorField::Enabled(enabled) => token.enabled = enabled,
        }
        Ok(())
    }
}

impl ScalarField {
    pub(crate) fn apply(self, token: &mut ScalarToken) {
        match self {
            ScalarField::Value(value) => token.value = value,
            ScalarField::Description(description) => token.description = description,
        }
    }
}

impl TypographyField {
    pub(crate) fn apply(self, token: &mut TypographyToken) -> Result<(), StoreError> {
        match self {
            TypographyField::Family(family) => token.family = family,
            TypographyField::Size(0) => {
                return Err(StoreError::InvalidField {
                    field: "size",
                    reason: "font size must be greater than zero".into(),
                })
            }
            TypographyField::Size(size) => token.size = size,
            TypographyField::Weight(weight) => {
                if !(MIN_FONT_WEIGHT..=MAX_FONT_WEIGHT).contains(&weight) {
                    return Err(StoreError::InvalidField {
                        field: "weight",
                        reason: format!(
                            "{weight} is outside {MIN_FONT_WEIGHT}..={MAX_FONT_WEIGHT}"
                        ),
                    });
                }
                token.weight = weight;
            }
            TypographyField::LineHeight(line_height) => {
                token.line_height = finite("lineHeight", line_height)?;
            }
            TypographyField::LetterSpacing(letter_spacing) => {
                token.letter_spacing = finite("letterSpacing", letter_spacing)?;
            }
            TypographyField::Transform(transform) => token.transform = transform,
            TypographyField::Description(description) => token.description = description,
        }
        Ok(())
    }
}

fn finite(field: &'static str, value: f64) -> Result<f64, StoreError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(StoreError::InvalidField {
            field,
            reason: "value must be a finite number".into(),
        })
    }
}

impl ShadowField {
    pub(crate) fn apply(self, token: &mut ShadowToken) {
        match self {
            ShadowField::X(x) => token.x = x,
            ShadowField::Y(y) => token.y = y,
            ShadowField::Blur(blur) => token.blur = blur,
            ShadowField::Spread(spread) => token.spread = spread,
            ShadowField::Color(color) => token.color = color,
            ShadowField::Description(description) => token.description = description,
        }
    }
}

impl ThemeField {
    pub(crate) fn apply(self, theme: &mut Theme) -> Result<(), StoreError> {
        match self {
            ThemeField::Name(name) => theme.name = name,
            ThemeField::SetColor { token, value } => {
                if !is_hex_color(&value) {
                    return Err(StoreError::InvalidColor(value));
                }
                theme.colors.insert(token, value);
            }
            ThemeField::ClearColor(token) => {
                theme
                    .colors
                    .shift_remove(&token)
                    .ok_or(StoreError::NotFound(token))?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_builds_tagged_edits() {
        assert_eq!(
            TokenEdit::parse(Category::Spacing, "value", "12"),
            Ok(TokenEdit::Spacing(ScalarField::Value(12)))
        );
        assert_eq!(
            TokenEdit::parse(Category::Typography, "transform", "uppercase"),
            Ok(TokenEdit::Typography(TypographyField::Transform(
                TextTransform::Uppercase
            )))
        );
        assert_eq!(
            TokenEdit::parse(Category::Themes, "colors.primary", "#000000"),
            Ok(TokenEdit::Theme(ThemeField::SetColor {
                token: "primary".into(),
                value: "#000000".into(),
            }))
        );
    }

    #[test]
    fn parse_rejects_unknown_fields_and_bad_values() {
        assert!(matches!(
            TokenEdit::parse(Category::Colors, "weight", "400"),
            Err(ParseEditError::UnknownField { .. })
        ));
        assert!(matches!(
            TokenEdit::parse(Category::Spacing, "value", "-4"),
            Err(ParseEditError::InvalidValue { .. })
        ));
    }

    #[test]
    fn field_names_follow_export_naming() {
        let edit = TokenEdit::Typography(TypographyField::LineHeight(1.2));
        assert_eq!(edit.field(), "lineHeight");
        assert_eq!(edit.category(), Category::Typography);
    }

    #[test]
    fn weight_outside_range_is_rejected() {
        let mut token = TypographyToken::default();
        assert!(TypographyField::Weight(950).apply(&mut token).is_err());
        assert!(TypographyField::Weight(700).apply(&mut token).is_ok());
        assert_eq!(token.weight, 700);
    }
}
