use serde_json::Value;

/// Result of a match call. The backend contract is not pinned down, so the
/// body is handed back exactly as received.
pub type MatchResponse = Value;

/// Result of `/api/resume/extract-current`
pub type ResumeExtraction = Value;

/// Result of `/api/jobs` or `/api/internships`
pub type ListingPayload = Value;

const LISTING_KEYS: [&str; 3] = ["jobs", "internships", "data"];

/// Collect listing identifiers from a listing payload
///
/// Accepts a bare array or an object wrapping the array under `jobs`,
/// `internships` or `data`. Each entry contributes its `id` or `_id`;
/// entries without one are skipped. Order is preserved.
pub fn listing_ids(payload: &ListingPayload) -> Vec<String> {
    let items = match payload {
        Value::Array(items) => Some(items),
        Value::Object(obj) => LISTING_KEYS
            .iter()
            .find_map(|key| obj.get(*key).and_then(|v| v.as_array())),
        _ => None,
    };

    items
        .map(|items| items.iter().filter_map(entry_id).collect())
        .unwrap_or_default()
}

fn entry_id(entry: &Value) -> Option<String> {
    let id = entry.get("id").or_else(|| entry.get("_id"))?;
    match id {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
