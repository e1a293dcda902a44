use serde_json::Value;

pub const MAPS_LINK_KEY: &str = "google_maps_link";

/// Adds `google_maps_link` when the response object carries both `lat` and `lon`.
///
/// Returns whether a link was attached. Non-object responses are left alone.
pub fn attach_maps_link(data: &mut Value, maps_url: &str) -> bool {
    let Some(obj) = data.as_object_mut() else {
        return false;
    };

    let link = match (obj.get("lat"), obj.get("lon")) {
        (Some(lat), Some(lon)) => maps_link(maps_url, lat, lon),
        _ => return false,
    };

    obj.insert(MAPS_LINK_KEY.to_string(), Value::String(link));
    true
}

pub fn maps_link(maps_url: &str, lat: &Value, lon: &Value) -> String {
    format!("{}?q={},{}", maps_url, coordinate(lat), coordinate(lon))
}

// Strings go in verbatim, everything else as its JSON text.
fn coordinate(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
