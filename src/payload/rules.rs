use serde_json::Value;

/// An ordered field lookup over a loosely shaped payload.
///
/// Fields are probed in order; the first one holding a string wins. When none
/// match, the first truthy wrapper field is descended into, at most `depth` times.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LookupRules {
    /// Candidate field names, highest priority first.
    pub fields: &'static [&'static str],
    /// Envelope fields that may wrap the actual content.
    pub wrappers: &'static [&'static str],
    /// How many wrapper levels may be unwrapped.
    pub depth: usize,
}

/// Tracking pixel identifier lookup.
pub const PIXEL_ID_RULES: LookupRules = LookupRules {
    fields: &["pixelId", "pixel_id", "fbq", "fb_token", "token", "id"],
    wrappers: &["data", "result"],
    depth: 1,
};

/// Redirect link lookup.
pub const LINK_RULES: LookupRules = LookupRules {
    fields: &["url", "link", "href"],
    wrappers: &["data", "result"],
    depth: 1,
};

impl LookupRules {
    /// Extract a string from `payload`, or `""` when nothing matches.
    pub fn extract(&self, payload: &Value) -> String {
        self.extract_at(payload, self.depth)
    }

    fn extract_at(&self, payload: &Value, depth: usize) -> String {
        if !is_truthy(payload) {
            return String::new();
        }
        let obj = match payload {
            Value::String(s) => return s.clone(),
            Value::Object(obj) => obj,
            _ => return String::new(),
        };

        if let Some(found) = self
            .fields
            .iter()
            .find_map(|field| obj.get(*field).and_then(Value::as_str))
        {
            return found.to_string();
        }

        if depth == 0 {
            return String::new();
        }

        self.wrappers
            .iter()
            .filter_map(|w| obj.get(*w))
            .find(|inner| is_truthy(inner))
            .map(|inner| self.extract_at(inner, depth - 1))
            .unwrap_or_default()
    }
}

/// Truthiness as a JavaScript front end would see it: `null`, `false`, zero and
/// `""` are falsy, everything else (empty arrays and objects included) is truthy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
