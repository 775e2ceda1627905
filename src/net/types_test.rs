use super::*;

// =============================================================
// Envelope parsing
// =============================================================

#[test]
fn envelope_parses_success_with_data() {
    let env: Envelope<serde_json::Value> =
        serde_json::from_str(r#"{"code":0,"msg":"success","data":{"foo":1}}"#).expect("envelope");
    assert_eq!(env.code, 0);
    assert_eq!(env.msg.as_deref(), Some("success"));
    assert_eq!(env.data, Some(serde_json::json!({"foo":1})));
}

#[test]
fn envelope_tolerates_missing_msg_and_data() {
    let env: Envelope<serde_json::Value> = serde_json::from_str(r#"{"code":0}"#).expect("envelope");
    assert_eq!(env.code, 0);
    assert!(env.msg.is_none());
    assert!(env.data.is_none());
}

#[test]
fn envelope_parses_null_data_as_absent() {
    let env: Envelope<Video> =
        serde_json::from_str(r#"{"code":0,"msg":"success","data":null}"#).expect("envelope");
    assert!(env.data.is_none());
}

// =============================================================
// Wire records
// =============================================================

#[test]
fn auth_payload_parses_login_response() {
    let raw = r#"{"token":"jwt-1","user":{"id":7,"username":"ada","nickname":"Ada"}}"#;
    let payload: AuthPayload = serde_json::from_str(raw).expect("payload");
    assert_eq!(payload.token, "jwt-1");
    assert_eq!(payload.user.username, "ada");
    assert_eq!(payload.user.nickname.as_deref(), Some("Ada"));
}

#[test]
fn video_uses_camel_case_wire_names() {
    let raw = r#"{
        "id": 3,
        "author": "ada",
        "publishTime": "2025-01-02T03:04:05",
        "videoUrl": "/api/files/a.mp4",
        "coverUrl": null,
        "categoryId": 2,
        "createdAt": "2025-01-02T03:04:05"
    }"#;
    let video: Video = serde_json::from_str(raw).expect("video");
    assert_eq!(video.id, Some(3));
    assert_eq!(video.video_url.as_deref(), Some("/api/files/a.mp4"));
    assert_eq!(video.category_id, Some(2));
    assert!(video.cover_url.is_none());
}

#[test]
fn parameter_tree_round_trips() {
    let raw = r#"{
        "id": 1,
        "name": "body",
        "type": "object",
        "required": true,
        "children": [
            {"name": "title", "type": "string", "exampleValue": "hi", "children": []}
        ]
    }"#;
    let param: ApiParameter = serde_json::from_str(raw).expect("parameter");
    assert_eq!(param.param_type.as_deref(), Some("object"));
    assert_eq!(param.children.len(), 1);
    assert_eq!(param.children[0].example_value.as_deref(), Some("hi"));

    let back = serde_json::to_value(&param).expect("serialize");
    assert_eq!(back["children"][0]["exampleValue"], "hi");
    assert_eq!(back["type"], "object");
}

#[test]
fn interface_parses_with_nested_category() {
    let raw = r#"{
        "id": 9,
        "name": "List videos",
        "method": "GET",
        "path": "/videos",
        "category": {"id": 2, "name": "Media"},
        "sortOrder": 1
    }"#;
    let iface: ApiInterface = serde_json::from_str(raw).expect("interface");
    assert_eq!(iface.method.as_deref(), Some("GET"));
    assert_eq!(iface.category.as_ref().map(|c| c.name.as_str()), Some("Media"));
}
