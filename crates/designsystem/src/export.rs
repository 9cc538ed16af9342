//! Canonical JSON export of a token snapshot.
//!
//! The document shape is the contract shared with download and clipboard
//! sinks as well as the host document bridge:
//!
//! ```json
//! {
//!   "colors": { "primary": "#6366f1" },
//!   "spacing": { "spacing-0": 0 },
//!   "radius": { "radius-full": 9999 },
//!   "typography": { "body": { "fontFamily": "Inter", "fontSize": 14, ... } },
//!   "shadows": { "shadow-sm": "0px 1px 3px 0px rgba(0,0,0,0.1)" },
//!   "borders": { "widths": { "border-thin": 1 }, "styles": ["solid", "dashed", "dotted"] },
//!   "components": { ... },
//!   "themes": { ... },
//!   "meta": { "version": "1.0.0", "generatedAt": "...", "generatedBy": "..." }
//! }
//! ```

use std::{fmt, sync::Arc};

use chrono::{DateTime, SecondsFormat, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;

use crate::{
    error::ExportError,
    store::TokenSet,
    table::TokenTable,
    tokens::{BorderStyle, ComponentSpec, TextTransform, Theme, TypographyToken},
};

/// Version of the export document layout.
pub const EXPORT_VERSION: &str = "1.0.0";
/// Product name recorded in `meta.generatedBy`.
pub const PRODUCT_NAME: &str = "Design System Builder";
/// File name used when the export is downloaded.
pub const EXPORT_FILE_NAME: &str = "design-system.json";
/// MIME type of the export document.
pub const EXPORT_MIME_TYPE: &str = "application/json";

/// Whitespace style of the rendered document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// Two-space indented output.
    #[default]
    Pretty,
    /// Output without insignificant whitespace.
    Minified,
}

/// Source of the `generatedAt` timestamp.
pub trait Clock: Send + Sync {
    /// Current instant in UTC.
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock frozen at a single instant, for reproducible exports.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Exported text style with CSS-oriented field names.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TypographyExport {
    /// Font family name.
    pub font_family: String,
    /// Font size in pixels.
    pub font_size: u32,
    /// Numeric font weight.
    pub font_weight: u16,
    /// Line height multiplier.
    #[serde(serialize_with = "serialize_number")]
    pub line_height: f64,
    /// Letter spacing in pixels.
    #[serde(serialize_with = "serialize_number")]
    pub letter_spacing: f64,
    /// Case transform.
    pub text_transform: TextTransform,
}

impl From<&TypographyToken> for TypographyExport {
    fn from(token: &TypographyToken) -> Self {
        Self {
            font_family: token.family.clone(),
            font_size: token.size,
            font_weight: token.weight,
            line_height: token.line_height,
            letter_spacing: token.letter_spacing,
            text_transform: token.transform,
        }
    }
}

/// Exported border widths and styles.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BorderExport {
    /// Width in pixels keyed by token name.
    pub widths: IndexMap<String, u32>,
    /// Available stroke styles in order.
    pub styles: Vec<BorderStyle>,
}

/// Provenance block of an export.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportMeta {
    /// Document layout version.
    pub version: &'static str,
    /// ISO-8601 UTC timestamp of the export.
    pub generated_at: String,
    /// Product that produced the document.
    pub generated_by: &'static str,
}

/// Externally consumable design system document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DesignDocument {
    /// Enabled colors as hex strings.
    pub colors: IndexMap<String, String>,
    /// Spacing values in pixels.
    pub spacing: IndexMap<String, u32>,
    /// Radius values in pixels.
    pub radius: IndexMap<String, u32>,
    /// Text styles.
    pub typography: IndexMap<String, TypographyExport>,
    /// Shadows as CSS shorthand strings.
    pub shadows: IndexMap<String, String>,
    /// Border widths and styles.
    pub borders: BorderExport,
    /// Component specifications, unmodified.
    pub components: IndexMap<String, ComponentSpec>,
    /// Themes, unmodified.
    pub themes: TokenTable<Theme>,
    /// Provenance.
    pub meta: ExportMeta,
}

/// Transforms token snapshots into [`DesignDocument`]s.
#[derive(Clone)]
pub struct Exporter {
    clock: Arc<dyn Clock>,
}

impl fmt::Debug for Exporter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Exporter").finish_non_exhaustive()
    }
}

impl Default for Exporter {
    fn default() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Exporter {
    /// Creates an exporter stamped with the wall clock.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an exporter stamped with the given clock.
    pub fn with_clock(clock: impl Clock + 'static) -> Self {
        Self {
            clock: Arc::new(clock),
        }
    }

    /// Builds the export document for a snapshot.
    #[must_use]
    pub fn document(&self, tokens: &TokenSet) -> DesignDocument {
        DesignDocument {
            colors: tokens
                .colors
                .iter()
                .filter(|(_, color)| color.enabled)
                .map(|(key, color)| (key.to_owned(), color.value.clone()))
                .collect(),
            spacing: tokens
                .spacing
                .iter()
                .map(|(key, token)| (key.to_owned(), token.value))
                .collect(),
            radius: tokens
                .radius
                .iter()
                .map(|(key, token)| (key.to_owned(), token.value))
                .collect(),
            typography: tokens
                .typography
                .iter()
                .map(|(key, token)| (key.to_owned(), TypographyExport::from(token)))
                .collect(),
            shadows: tokens
                .shadows
                .iter()
                .map(|(key, shadow)| (key.to_owned(), shadow.css()))
                .collect(),
            borders: BorderExport {
                widths: tokens
                    .border_widths
                    .iter()
                    .map(|(key, token)| (key.to_owned(), token.value))
                    .collect(),
                styles: tokens.border_styles.clone(),
            },
            components: tokens.components.clone(),
            themes: tokens.themes.clone(),
            meta: ExportMeta {
                version: EXPORT_VERSION,
                generated_at: self.clock.now().to_rfc3339_opts(SecondsFormat::Millis, true),
                generated_by: PRODUCT_NAME,
            },
        }
    }

    /// Builds the export document as a JSON value.
    pub fn to_value(&self, tokens: &TokenSet) -> Result<Value, ExportError> {
        Ok(serde_json::to_value(self.document(tokens))?)
    }

    /// Renders the export document as text.
    pub fn render(&self, tokens: &TokenSet, format: ExportFormat) -> Result<String, ExportError> {
        let document = self.document(tokens);
        let text = match format {
            ExportFormat::Pretty => serde_json::to_string_pretty(&document)?,
            ExportFormat::Minified => serde_json::to_string(&document)?,
        };
        tracing::debug!(?format, bytes = text.len(), "rendered design system export");
        Ok(text)
    }
}

/// Writes whole numbers without a fractional part so `0.0` exports as `0`.
#[allow(clippy::trivially_copy_pass_by_ref, clippy::cast_possible_truncation)]
fn serialize_number<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;
    if value.fract() == 0.0 && value.abs() <= MAX_SAFE_INTEGER {
        serializer.serialize_i64(*value as i64)
    } else {
        serializer.serialize_f64(*value)
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use serde_json::json;

    use super::*;
    use crate::{
        edit::{ColorField, TokenEdit},
        store::TokenStore,
    };

    fn exporter() -> Exporter {
        Exporter::with_clock(FixedClock(Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 0).unwrap()))
    }

    #[test]
    fn default_colors_include_primary() {
        let value = exporter().to_value(TokenStore::new().tokens()).unwrap();
        assert_eq!(value["colors"]["primary"], "#6366f1");
        assert_eq!(value["colors"]["secondary"], "#8b5cf6");
    }

    #[test]
    fn disabled_colors_are_dropped() {
        let mut store = TokenStore::new();
        store
            .update("secondary", TokenEdit::Color(ColorField::Enabled(false)))
            .unwrap();
        let document = exporter().document(store.tokens());
        assert!(!document.colors.contains_key("secondary"));
        assert_eq!(document.colors.get("primary").map(String::as_str), Some("#6366f1"));
    }

    #[test]
    fn typography_fields_are_renamed() {
        let value = exporter().to_value(TokenStore::new().tokens()).unwrap();
        assert_eq!(
            value["typography"]["body"],
            json!({
                "fontFamily": "Inter",
                "fontSize": 14,
                "fontWeight": 400,
                "lineHeight": 1.5,
                "letterSpacing": 0,
                "textTransform": "normal"
            })
        );
    }

    #[test]
    fn shadows_become_css_shorthand() {
        let value = exporter().to_value(TokenStore::new().tokens()).unwrap();
        assert_eq!(value["shadows"]["shadow-sm"], "0px 1px 3px 0px rgba(0,0,0,0.1)");
    }

    #[test]
    fn borders_group_widths_and_styles() {
        let value = exporter().to_value(TokenStore::new().tokens()).unwrap();
        assert_eq!(value["borders"]["widths"]["border-thin"], 1);
        assert_eq!(value["borders"]["styles"], json!(["solid", "dashed", "dotted"]));
        assert_eq!(value["radius"]["radius-full"], 9999);
    }

    #[test]
    fn meta_uses_injected_clock() {
        let value = exporter().to_value(TokenStore::new().tokens()).unwrap();
        assert_eq!(
            value["meta"],
            json!({
                "version": EXPORT_VERSION,
                "generatedAt": "2024-05-01T12:30:00.000Z",
                "generatedBy": PRODUCT_NAME
            })
        );
    }

    #[test]
    fn pretty_output_uses_two_space_indent() {
        let text = exporter()
            .render(TokenStore::new().tokens(), ExportFormat::Pretty)
            .unwrap();
        assert!(text.starts_with("{\n  \"colors\": {\n    \"primary\""));
        let minified = exporter()
            .render(TokenStore::new().tokens(), ExportFormat::Minified)
            .unwrap();
        assert!(!minified.contains('\n'));
        assert!(minified.starts_with("{\"colors\":{\"primary\":\"#6366f1\""));
    }

    #[test]
    fn whole_numbers_serialize_without_fraction() {
        let token = TypographyToken::new("Mono", 12, 400, 2.0).letter_spacing(-1.0);
        let value = serde_json::to_value(TypographyExport::from(&token)).unwrap();
        assert_eq!(value["lineHeight"].to_string(), "2");
        assert_eq!(value["letterSpacing"].to_string(), "-1");
    }
}
