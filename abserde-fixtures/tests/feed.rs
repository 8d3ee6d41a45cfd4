//! Contract tests for the module generated from `schemas/feed.abs`.

use abserde_fixtures::feed::{self, Classes, Feed, Record, Status, User};
use serde_json::json;

const PAYLOAD: &str = r#"{
    "statuses": [
        {
            "id": 505874924095815681,
            "text": "hello",
            "favorited": false,
            "retweet_count": 3,
            "user": {
                "id": 1186275104,
                "screen_name": "ayuu0123",
                "followers_count": 262,
                "verified": false,
                "location": null
            },
            "hashtags": ["rust", "json"],
            "coordinates": [1.5, -2.25],
            "metadata": {"result_type": "recent", "iso_language_code": "ja"}
        }
    ],
    "next_cursor": "abc"
}"#;

#[test]
fn test_feed_loads_nested_payload() {
    let feed = Feed::loads(PAYLOAD).expect("Failed to load");
    assert_eq!(feed.next_cursor.as_deref(), Some("abc"));

    let status = &feed.statuses[0];
    assert_eq!(status.id, 505_874_924_095_815_681);
    assert_eq!(status.user.screen_name, "ayuu0123");
    assert_eq!(status.user.location, None);
    assert_eq!(status.coordinates, Some(vec![1.5, -2.25]));
    assert_eq!(status.reply_to, None);
    assert_eq!(status.metadata["result_type"], json!("recent"));
}

#[test]
fn test_feed_round_trip() {
    let feed = Feed::loads(PAYLOAD).expect("Failed to load");
    let text = feed.dumps().expect("Failed to dump");
    assert_eq!(Feed::loads(&text).expect("Failed to reload"), feed);
    assert!(text.contains(r#""reply_to":null"#));
}

#[test]
fn test_positional_construction() {
    let user = User::from_args(vec![
        json!(1),
        json!("someone"),
        json!(10),
        json!(true),
        json!("Tokyo"),
    ])
    .expect("Failed to construct");
    assert_eq!(user.location.as_deref(), Some("Tokyo"));

    let status = Status::new(
        7,
        "hi".to_string(),
        true,
        0,
        user,
        vec![],
        None,
        Some(6),
        json!(null),
    );
    assert_eq!(status.get("user").expect("user")["screen_name"], json!("someone"));
}

#[test]
fn test_module_dispatch() {
    let loaded = feed::loads(PAYLOAD).expect("Failed to load");
    assert!(matches!(loaded, Classes::Feed(_)));
    assert_eq!(feed::RECORDS.to_vec(), vec!["Feed", "Status", "User"]);
}
