//! JSON-LD Structured Data
//!
//! Every `<script type="application/ld+json">` block (any case, parameters
//! such as `; charset=utf-8` allowed) is decoded on its own.
//! A block that fails to parse is skipped; it never prevents the remaining
//! blocks (or any other extraction) from running.

use serde_json::Value;

use crate::dom::DomNode;

/// Decode all JSON-LD blocks in document order.
#[must_use]
pub fn extract_json_ld<N: DomNode>(root: &N) -> Vec<Value> {
    let mut blocks = Vec::new();

    let scripts = root.select("script[type]");
    let json_ld_scripts = scripts
        .iter()
        .filter(|script| is_json_ld_type(script.attr("type").as_deref()));

    for (index, script) in json_ld_scripts.enumerate() {
        let json_text = script.text();
        let json_text = json_text.trim();

        if json_text.is_empty() {
            continue;
        }

        match serde_json::from_str::<Value>(json_text) {
            Ok(value) => blocks.push(value),
            Err(err) => {
                tracing::debug!(block = index, error = %err, "skipping malformed JSON-LD block");
            }
        }
    }

    blocks
}

/// `application/ld+json`, in any case and with optional media-type parameters.
fn is_json_ld_type(value: Option<&str>) -> bool {
    value
        .and_then(|v| v.split(';').next())
        .is_some_and(|essence| essence.trim().eq_ignore_ascii_case("application/ld+json"))
}

/// Lowercased `@type` values of a schema object.
fn schema_types(value: &Value) -> Vec<String> {
    match value.get("@type") {
        Some(Value::String(s)) => vec![s.to_lowercase()],
        Some(Value::Array(arr)) => arr
            .iter()
            .filter_map(Value::as_str)
            .map(str::to_lowercase)
            .collect(),
        _ => Vec::new(),
    }
}

fn is_article_type(types: &[String]) -> bool {
    types.iter().any(|t| {
        t.contains("article")
            || t.contains("posting")
            || matches!(t.as_str(), "webpage" | "aboutpage" | "product" | "event" | "report")
    })
}

/// Get a single string value from an object property.
fn get_single_string_value(value: &Value, key: &str) -> Option<String> {
    match value.get(key)? {
        Value::String(s) => Some(s.trim().to_string()).filter(|s| !s.is_empty()),
        Value::Array(arr) => arr
            .first()
            .and_then(Value::as_str)
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty()),
        _ => None,
    }
}

/// Visit schema objects depth-first, descending into arrays and `@graph`.
fn visit_schemas<'v>(value: &'v Value, out: &mut Vec<&'v Value>) {
    match value {
        Value::Object(map) => {
            out.push(value);
            if let Some(graph) = map.get("@graph") {
                visit_schemas(graph, out);
            }
        }
        Value::Array(arr) => {
            for item in arr {
                visit_schemas(item, out);
            }
        }
        _ => {}
    }
}

/// First non-empty value of `keys` on an article-like schema object.
///
/// Used as a fallback source for the page title (`headline`, `name`) and
/// description.
#[must_use]
pub fn article_field(blocks: &[Value], keys: &[&str]) -> Option<String> {
    let mut schemas = Vec::new();
    for block in blocks {
        visit_schemas(block, &mut schemas);
    }

    schemas
        .into_iter()
        .filter(|schema| is_article_type(&schema_types(schema)))
        .find_map(|schema| keys.iter().find_map(|key| get_single_string_value(schema, key)))
}
