//! Cell content: what a column renders for one row.

use serde::Serialize;
use serde_json::Value;

use crate::html::HtmlWriter;

/// Text shown for a value that resolved to nothing (or to `null`).
pub const MISSING_VALUE: &str = "-";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BadgeVariant {
    #[default]
    Default,
    Success,
    Warning,
    Error,
    Info,
    Purple,
}

impl BadgeVariant {
    pub fn class(self) -> &'static str {
        match self {
            Self::Default => "badge badge-default",
            Self::Success => "badge badge-success",
            Self::Warning => "badge badge-warning",
            Self::Error => "badge badge-error",
            Self::Info => "badge badge-info",
            Self::Purple => "badge badge-purple",
        }
    }
}

/// Small status/role pill.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Badge {
    pub label: String,
    pub variant: BadgeVariant,
}

impl Badge {
    pub fn new(label: impl Into<String>, variant: BadgeVariant) -> Self {
        Self {
            label: label.into(),
            variant,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Cell {
    Text(String),
    /// De-emphasised text (secondary columns such as e-mail).
    Muted(String),
    Badge(Badge),
}

impl Cell {
    /// Default content for a resolved value.
    ///
    /// Strings are shown as-is, numbers through their display (whole floats
    /// without `.0`), booleans as empty text, containers as compact JSON; `None` and `null` become [`MISSING_VALUE`].
    pub fn from_value(value: Option<&Value>) -> Self {
        Self::Text(value_text(value))
    }

    /// Plain text of the cell (used by tests and non-HTML consumers).
    pub fn text(&self) -> &str {
        match self {
            Self::Text(s) | Self::Muted(s) => s,
            Self::Badge(b) => &b.label,
        }
    }

    pub(crate) fn write_html(&self, w: &mut HtmlWriter) {
        match self {
            Self::Text(s) => w.text(s),
            Self::Muted(s) => {
                w.open("span", &[("class", Some("text-muted"))]);
                w.text(s);
                w.close("span");
            }
            Self::Badge(b) => {
                w.open("span", &[("class", Some(b.variant.class()))]);
                w.text(&b.label);
                w.close("span");
            }
        }
    }
}

/// Display string for an optional JSON value.
pub fn value_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => MISSING_VALUE.to_string(),
        Some(Value::String(s)) => s.clone(),
        // Booleans render as nothing, not as a missing value.
        Some(Value::Bool(_)) => String::new(),
        Some(Value::Number(n)) => number_text(n),
        Some(other) => other.to_string(),
    }
}

/// Whole floats print without a fractional part (`30.0` -> `30`).
fn number_text(n: &serde_json::Number) -> String {
    match n.as_f64() {
        Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() < 1e15 => format!("{}", f as i64),
        _ => n.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn missing_and_null_render_as_dash() {
        assert_eq!(Cell::from_value(None), Cell::Text("-".to_string()));
        assert_eq!(Cell::from_value(Some(&Value::Null)).text(), "-");
    }

    #[test]
    fn scalars_render_without_quotes() {
        assert_eq!(value_text(Some(&json!("Ada"))), "Ada");
        assert_eq!(value_text(Some(&json!(42))), "42");
        assert_eq!(value_text(Some(&json!(30.0))), "30");
        assert_eq!(value_text(Some(&json!(-2.0))), "-2");
        assert_eq!(value_text(Some(&json!(2.5))), "2.5");
        assert_eq!(value_text(Some(&json!(false))), "");
        assert_eq!(value_text(Some(&json!(true))), "");
        assert_eq!(value_text(Some(&json!(["a", 1]))), r#"["a",1]"#);
    }

    #[test]
    fn badge_html_is_escaped() {
        let mut w = HtmlWriter::new();
        Cell::Badge(Badge::new("<b>", BadgeVariant::Error)).write_html(&mut w);
        assert_eq!(w.finish(), r#"<span class="badge badge-error">&lt;b&gt;</span>"#);
    }
}
