use chrono::{TimeZone, Utc};
use designsystem::{
    Category, ColorField, ExportFormat, Exporter, FixedClock, ScalarField, ShadowField, TokenEdit,
    TokenStore, TypographyField,
};
use serde_json::{json, Value};

fn exporter() -> Exporter {
    Exporter::with_clock(FixedClock(Utc.with_ymd_and_hms(2025, 3, 14, 9, 26, 53).unwrap()))
}

fn edited_store() -> TokenStore {
    let mut store = TokenStore::new();
    store.add(Category::Colors, Some("brand-teal")).unwrap();
    store
        .update("brand-teal", TokenEdit::Color(ColorField::Value("#14b8a6".into())))
        .unwrap();
    store.toggle_enabled("accent").unwrap();
    store
        .update("caption", TokenEdit::Typography(TypographyField::LineHeight(1.333_333)))
        .unwrap();
    store
        .update("shadow-lg", TokenEdit::Shadow(ShadowField::Spread(-7)))
        .unwrap();
    store.rename(Category::Radius, "radius-md", "radius-button").unwrap();
    store.duplicate(Category::Themes, "default", "dark").unwrap();
    store.delete(Category::BorderWidths, "border-thick").unwrap();
    store.add(Category::Spacing, None).unwrap();
    store
}

#[test]
fn rendered_output_parses_back_to_the_same_document() {
    let exporter = exporter();
    for store in [TokenStore::new(), edited_store()] {
        let expected = exporter.to_value(store.tokens()).unwrap();
        for format in [ExportFormat::Pretty, ExportFormat::Minified] {
            let text = exporter.render(store.tokens(), format).unwrap();
            let parsed: Value = serde_json::from_str(&text).unwrap();
            assert_eq!(parsed, expected, "{format:?} output diverged");
        }
    }
}

#[test]
fn enabled_flag_controls_color_export() {
    let store = edited_store();
    let document = exporter().document(store.tokens());
    for (key, color) in store.colors().iter() {
        assert_eq!(document.colors.contains_key(key), color.enabled, "{key}");
    }
    assert!(!document.colors.contains_key("accent"));
    assert_eq!(
        document.colors.get("brand-teal").map(String::as_str),
        Some("#14b8a6")
    );
}

#[test]
fn disabling_secondary_leaves_primary_untouched() {
    let mut store = TokenStore::new();
    let exporter = exporter();
    assert!(exporter.document(store.tokens()).colors.contains_key("secondary"));

    store
        .update("secondary", TokenEdit::Color(ColorField::Enabled(false)))
        .unwrap();
    let document = exporter.document(store.tokens());
    assert!(!document.colors.contains_key("secondary"));
    assert_eq!(document.colors.get("primary").map(String::as_str), Some("#6366f1"));
}

#[test]
fn default_document_matches_scenarios() {
    let mut store = TokenStore::new();
    assert_eq!(
        store.add(Category::Spacing, None).unwrap().as_deref(),
        Some("spacing-11")
    );
    let value = exporter().to_value(store.tokens()).unwrap();

    assert_eq!(value["colors"]["primary"], "#6366f1");
    assert_eq!(value["spacing"]["spacing-11"], 0);
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
    assert_eq!(value["shadows"]["shadow-sm"], "0px 1px 3px 0px rgba(0,0,0,0.1)");
    assert_eq!(value["themes"]["default"]["colors"], json!({}));
    assert_eq!(
        value["components"]["button"]["variants"]["primary"]["sizes"]["medium"]["default"]["bg"],
        "primary"
    );
}

#[test]
fn top_level_keys_follow_document_order() {
    let value = exporter().to_value(TokenStore::new().tokens()).unwrap();
    let keys: Vec<&str> = value
        .as_object()
        .unwrap()
        .keys()
        .map(String::as_str)
        .collect();
    assert_eq!(
        keys,
        [
            "colors",
            "spacing",
            "radius",
            "typography",
            "shadows",
            "borders",
            "components",
            "themes",
            "meta"
        ]
    );
}

#[test]
fn radius_sentinel_is_exported_verbatim() {
    let mut store = TokenStore::new();
    store
        .update("radius-sm", TokenEdit::Radius(ScalarField::Value(9999)))
        .unwrap();
    let value = exporter().to_value(store.tokens()).unwrap();
    assert_eq!(value["radius"]["radius-sm"], 9999);
    assert_eq!(value["radius"]["radius-full"], 9999);
}
