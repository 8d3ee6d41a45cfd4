//! JSON payload builders.

use serde_json::{Value, json};

/// Builds a timeline payload matching the `feed` fixture schema.
///
/// # Arguments
/// * `statuses` - Number of status entries in the payload
#[must_use]
pub fn feed_value(statuses: usize) -> Value {
    let statuses: Vec<Value> = (0..statuses).map(status_value).collect();
    json!({
        "statuses": statuses,
        "next_cursor": "c3RhdHVzZXM6MTAw",
    })
}

/// Builds a timeline payload as JSON text.
#[must_use]
pub fn feed_json(statuses: usize) -> String {
    feed_value(statuses).to_string()
}

fn status_value(i: usize) -> Value {
    let id = 505_874_924_095_815_681_i64 + i as i64;
    json!({
        "id": id,
        "text": format!("status number {i} with some text to decode"),
        "favorited": i % 2 == 0,
        "retweet_count": i * 3,
        "user": {
            "id": 1_186_275_104 + i,
            "screen_name": format!("user_{i}"),
            "followers_count": 262 + i,
            "verified": i % 7 == 0,
            "location": if i % 3 == 0 { Value::Null } else { json!("Tokyo") },
        },
        "hashtags": ["rust", "json", "bench"],
        "coordinates": if i % 2 == 0 { json!([35.68, 139.69]) } else { Value::Null },
        "reply_to": Value::Null,
        "metadata": {"result_type": "recent", "iso_language_code": "ja"},
    })
}
