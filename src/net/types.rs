//! Wire types for the catalog API.
//!
//! Every response body is a [`Envelope`] around the payload; the payload
//! records mirror the backend entities with their camelCase field names.
//! Timestamps stay as strings; the client displays them verbatim.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// The `{code, msg, data}` wrapper every response body follows.
///
/// `code == 0` means success; any other code is a business failure whose
/// human-readable cause is in `msg`. `data` may be absent even on success
/// (deletes and other void operations).
#[derive(Clone, Debug, Deserialize)]
pub struct Envelope<T> {
    pub code: i32,
    #[serde(default)]
    pub msg: Option<String>,
    #[serde(default)]
    pub data: Option<T>,
}

/// Authenticated user profile. Advisory only: guard and interceptor
/// decisions depend solely on the token.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub nickname: Option<String>,
}

/// Payload of `POST /auth/login` and `POST /auth/register`.
#[derive(Clone, Debug, Deserialize)]
pub struct AuthPayload {
    pub token: String,
    pub user: User,
}

/// A catalog category grouping videos and interfaces.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    #[serde(default)]
    pub id: Option<i64>,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub sort_order: Option<i32>,
}

/// A catalog video entry.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Video {
    #[serde(default)]
    pub id: Option<i64>,
    pub author: String,
    #[serde(default)]
    pub publish_time: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub video_url: Option<String>,
    #[serde(default)]
    pub cover_url: Option<String>,
    #[serde(default)]
    pub category_id: Option<i64>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// An API interface definition.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiInterface {
    #[serde(default)]
    pub id: Option<i64>,
    pub name: String,
    #[serde(default)]
    pub method: Option<String>,
    #[serde(default)]
    pub path: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category: Option<Category>,
    #[serde(default)]
    pub sort_order: Option<i32>,
}

/// A parameter of an interface. Tree-shaped: object and array parameters
/// carry their members in `children`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiParameter {
    #[serde(default)]
    pub id: Option<i64>,
    pub name: String,
    /// One of `string`, `number`, `boolean`, `object`, `array`.
    #[serde(rename = "type", default)]
    pub param_type: Option<String>,
    #[serde(default)]
    pub required: Option<bool>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub example_value: Option<String>,
    #[serde(default)]
    pub sort_order: Option<i32>,
    #[serde(default)]
    pub children: Vec<ApiParameter>,
}

/// Payload of `POST /files/upload`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct UploadResult {
    pub filename: String,
    pub url: String,
}
