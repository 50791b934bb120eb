use axum::body::Bytes;
use axum::Json;
use serde_json::{json, Value};
use tracing::info;

pub async fn receive_webhook(body: Bytes) -> Json<Value> {
    let payload = parse_payload(&body);
    info!(
        "Received ClickUp webhook event: {}",
        serde_json::to_string_pretty(&payload).unwrap_or_default()
    );
    Json(json!({ "received": true }))
}

// An empty or unparseable body is logged as `{}` rather than rejected.
fn parse_payload(body: &[u8]) -> Value {
    if body.is_empty() {
        return json!({});
    }
    serde_json::from_slice(body).unwrap_or_else(|_| json!({}))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_json_bodies() {
        assert_eq!(
            parse_payload(br#"{"event": "taskUpdated", "task_id": "86a1"}"#),
            json!({"event": "taskUpdated", "task_id": "86a1"})
        );
        assert_eq!(parse_payload(b"[1, 2]"), json!([1, 2]));
    }

    #[test]
    fn bad_bodies_become_empty_objects() {
        assert_eq!(parse_payload(b""), json!({}));
        assert_eq!(parse_payload(b"not json"), json!({}));
        assert_eq!(parse_payload(b"   "), json!({}));
        assert_eq!(parse_payload(b"{\"truncated\": "), json!({}));
    }
}
