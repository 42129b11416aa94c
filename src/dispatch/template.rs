//! Endpoint parameter substitution.
//!
//! Pure string templating used by the dispatcher: every `{key}` occurrence
//! is replaced by the stringified value for `key`. Placeholders with no
//! supplied parameter are left verbatim so partially-parameterized
//! templates can be built incrementally; leftovers surface later as
//! transport-level failures rather than failing fast.

use std::collections::HashMap;

use serde_json::Value;

/// Replace `{key}` placeholders in `template` with values from `params`.
///
/// Deterministic and total: identical inputs yield identical output, no
/// I/O, cannot fail. An empty parameter map returns the template unchanged.
pub fn substitute_params(template: &str, params: &HashMap<String, Value>) -> String {
    if params.is_empty() {
        return template.to_owned();
    }
    let mut resolved = template.to_owned();
    for (key, value) in params {
        let placeholder = format!("{{{key}}}");
        if resolved.contains(&placeholder) {
            resolved = resolved.replace(&placeholder, &stringify(value));
        }
    }
    resolved
}

/// Canonical string coercion: strings substitute as-is, everything else
/// by its literal JSON text (numbers and booleans print their literal
/// form).
fn stringify(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
