use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use standard_error::{Interpolate, StandardError};

use crate::prelude::Result;

/// Placeholder descriptor stored alongside a template, matching the shape
/// kept in `email_templates.placeholders`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Placeholder {
    pub key: String,
    pub label: String,
    #[serde(default)]
    pub required: bool,
}

pub fn parse_placeholders(raw: &serde_json::Value) -> Result<Vec<Placeholder>> {
    serde_json::from_value(raw.clone())
        .map_err(|e| StandardError::new("ERR-VALIDATION-001").interpolate_err(e.to_string()))
}

/// Substitutes `{{key}}` markers. A key with no supplied value keeps its
/// literal marker, so a half-filled template is visible in the sent mail
/// rather than silently truncated.
pub fn render(text: &str, values: &HashMap<String, String>) -> String {
    let mut rendered = text.to_string();
    for (key, value) in values {
        if value.is_empty() {
            continue;
        }
        rendered = rendered.replace(&format!("{{{{{}}}}}", key), value);
    }
    rendered
}

pub fn missing_required(
    placeholders: &[Placeholder],
    values: &HashMap<String, String>,
) -> Vec<String> {
    placeholders
        .iter()
        .filter(|p| p.required)
        .filter(|p| values.get(&p.key).map(|v| v.trim().is_empty()).unwrap_or(true))
        .map(|p| p.label.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn values(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn render_substitutes_known_placeholders() {
        let out = render(
            "Dear {{hr_name}}, we invite {{company_name}} to campus.",
            &values(&[("hr_name", "Anita"), ("company_name", "Acme")]),
        );
        assert_eq!(out, "Dear Anita, we invite Acme to campus.");
    }

    #[test]
    fn unfilled_placeholders_stay_literal() {
        let out = render(
            "Dear {{hr_name}}, regards {{coordinator}}",
            &values(&[("hr_name", "Anita")]),
        );
        assert_eq!(out, "Dear Anita, regards {{coordinator}}");
    }

    #[test]
    fn missing_required_lists_labels() {
        let placeholders = vec![
            Placeholder {
                key: "hr_name".into(),
                label: "HR name".into(),
                required: true,
            },
            Placeholder {
                key: "date".into(),
                label: "Drive date".into(),
                required: false,
            },
        ];
        let missing = missing_required(&placeholders, &values(&[("hr_name", "  ")]));
        assert_eq!(missing, vec!["HR name".to_string()]);

        let none = missing_required(&placeholders, &values(&[("hr_name", "Anita")]));
        assert!(none.is_empty());
    }

    #[test]
    fn placeholders_parse_from_stored_json() {
        let raw = json!([
            {"key": "company_name", "label": "Company", "required": true},
            {"key": "package", "label": "Package"}
        ]);
        let parsed = parse_placeholders(&raw).unwrap();
        assert_eq!(parsed.len(), 2);
        assert!(parsed[0].required);
        assert!(!parsed[1].required);
    }
}
