//! CSS custom property rendering of an export document.

use std::fmt::Write;

use heck::ToKebabCase;

use crate::export::DesignDocument;

/// Renders the document as a `:root` block of CSS custom properties.
///
/// Token names are kebab-cased and prefixed with their category unless they
/// already carry it, so `primary` becomes `--color-primary` while
/// `shadow-sm` stays `--shadow-sm`.
#[must_use]
pub fn to_css_variables(document: &DesignDocument) -> String {
    let mut css = String::from(":root {\n");

    for (key, value) in &document.colors {
        push(&mut css, "color", key, value);
    }
    for (key, value) in &document.spacing {
        push(&mut css, "spacing", key, &format!("{value}px"));
    }
    for (key, value) in &document.radius {
        push(&mut css, "radius", key, &format!("{value}px"));
    }
    for (key, value) in &document.borders.widths {
        push(&mut css, "border", key, &format!("{value}px"));
    }
    for (key, value) in &document.shadows {
        push(&mut css, "shadow", key, value);
    }
    for (key, style) in &document.typography {
        let name = variable_name("text", key);
        let fields = [
            ("fontFamily", format!("\"{}\"", style.font_family)),
            ("fontSize", format!("{}px", style.font_size)),
            ("fontWeight", style.font_weight.to_string()),
            ("lineHeight", style.line_height.to_string()),
            ("letterSpacing", format!("{}px", style.letter_spacing)),
            ("textTransform", style.text_transform.as_str().to_owned()),
        ];
        for (field, value) in fields {
            let _ = writeln!(css, "  --{name}-{}: {value};", field.to_kebab_case());
        }
    }

    css.push_str("}\n");
    css
}

fn push(css: &mut String, prefix: &str, key: &str, value: &str) {
    let _ = writeln!(css, "  --{}: {value};", variable_name(prefix, key));
}

fn variable_name(prefix: &str, key: &str) -> String {
    let key = key.to_kebab_case();
    if key == prefix || key.starts_with(&format!("{prefix}-")) {
        key
    } else {
        format!("{prefix}-{key}")
    }
}
