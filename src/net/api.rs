//! Endpoint wrappers for the catalog API.
//!
//! Each function is a thin pass-through to [`crate::net::http`]: it names
//! the path, serializes the body, and returns the unwrapped payload.
//! Token injection, envelope handling, and failure notification all
//! happen in the shared request path.

use serde_json::json;

use crate::net::http::{self, ApiClient, ApiError, Method};
use crate::net::types::{ApiInterface, ApiParameter, AuthPayload, Category, Video};
#[cfg(feature = "csr")]
use crate::net::types::UploadResult;

// ---- auth ----

pub async fn login(api: ApiClient, username: &str, password: &str) -> Result<AuthPayload, ApiError> {
    http::request(
        api,
        Method::Post,
        "/auth/login",
        Some(json!({ "username": username, "password": password })),
    )
    .await
}

pub async fn register(
    api: ApiClient,
    username: &str,
    password: &str,
    nickname: &str,
) -> Result<AuthPayload, ApiError> {
    http::request(
        api,
        Method::Post,
        "/auth/register",
        Some(json!({ "username": username, "password": password, "nickname": nickname })),
    )
    .await
}

// ---- categories ----

pub async fn get_categories(api: ApiClient) -> Result<Vec<Category>, ApiError> {
    http::request(api, Method::Get, "/categories", None).await
}

pub async fn get_category(api: ApiClient, id: i64) -> Result<Category, ApiError> {
    http::request(api, Method::Get, &format!("/categories/{id}"), None).await
}

pub async fn create_category(api: ApiClient, category: &Category) -> Result<Category, ApiError> {
    http::request(
        api,
        Method::Post,
        "/categories",
        Some(serde_json::to_value(category).unwrap_or_default()),
    )
    .await
}

pub async fn update_category(
    api: ApiClient,
    id: i64,
    category: &Category,
) -> Result<Category, ApiError> {
    http::request(
        api,
        Method::Put,
        &format!("/categories/{id}"),
        Some(serde_json::to_value(category).unwrap_or_default()),
    )
    .await
}

pub async fn delete_category(api: ApiClient, id: i64) -> Result<(), ApiError> {
    http::request_unit(api, Method::Delete, &format!("/categories/{id}"), None).await
}

// ---- videos ----

pub async fn get_videos(api: ApiClient, category_id: Option<i64>) -> Result<Vec<Video>, ApiError> {
    let path = match category_id {
        Some(id) => format!("/videos?categoryId={id}"),
        None => "/videos".to_owned(),
    };
    http::request(api, Method::Get, &path, None).await
}

pub async fn get_video(api: ApiClient, id: i64) -> Result<Video, ApiError> {
    http::request(api, Method::Get, &format!("/videos/{id}"), None).await
}

pub async fn create_video(api: ApiClient, video: &Video) -> Result<Video, ApiError> {
    http::request(
        api,
        Method::Post,
        "/videos",
        Some(serde_json::to_value(video).unwrap_or_default()),
    )
    .await
}

pub async fn update_video(api: ApiClient, id: i64, video: &Video) -> Result<Video, ApiError> {
    http::request(
        api,
        Method::Put,
        &format!("/videos/{id}"),
        Some(serde_json::to_value(video).unwrap_or_default()),
    )
    .await
}

pub async fn delete_video(api: ApiClient, id: i64) -> Result<(), ApiError> {
    http::request_unit(api, Method::Delete, &format!("/videos/{id}"), None).await
}

/// Upload a file as a `multipart/form-data` body with a single `file` field.
#[cfg(feature = "csr")]
pub async fn upload_file(api: ApiClient, file: &web_sys::File) -> Result<UploadResult, ApiError> {
    http::send_multipart(api, "/files/upload", file).await
}

// ---- interfaces ----

pub async fn get_interfaces(
    api: ApiClient,
    category_id: Option<i64>,
) -> Result<Vec<ApiInterface>, ApiError> {
    let path = match category_id {
        Some(id) => format!("/interfaces?categoryId={id}"),
        None => "/interfaces".to_owned(),
    };
    http::request(api, Method::Get, &path, None).await
}

pub async fn get_interface(api: ApiClient, id: i64) -> Result<ApiInterface, ApiError> {
    http::request(api, Method::Get, &format!("/interfaces/{id}"), None).await
}

pub async fn create_interface(
    api: ApiClient,
    interface: &ApiInterface,
) -> Result<ApiInterface, ApiError> {
    http::request(
        api,
        Method::Post,
        "/interfaces",
        Some(serde_json::to_value(interface).unwrap_or_default()),
    )
    .await
}

pub async fn update_interface(
    api: ApiClient,
    id: i64,
    interface: &ApiInterface,
) -> Result<ApiInterface, ApiError> {
    http::request(
        api,
        Method::Put,
        &format!("/interfaces/{id}"),
        Some(serde_json::to_value(interface).unwrap_or_default()),
    )
    .await
}

pub async fn delete_interface(api: ApiClient, id: i64) -> Result<(), ApiError> {
    http::request_unit(api, Method::Delete, &format!("/interfaces/{id}"), None).await
}

pub async fn get_parameters(
    api: ApiClient,
    interface_id: i64,
) -> Result<Vec<ApiParameter>, ApiError> {
    http::request(
        api,
        Method::Get,
        &format!("/interfaces/{interface_id}/parameters"),
        None,
    )
    .await
}

pub async fn save_parameters(
    api: ApiClient,
    interface_id: i64,
    parameters: &[ApiParameter],
) -> Result<(), ApiError> {
    http::request_unit(
        api,
        Method::Post,
        &format!("/interfaces/{interface_id}/parameters"),
        Some(serde_json::to_value(parameters).unwrap_or_default()),
    )
    .await
}

/// Fetch the generated JSON example for an interface.
pub async fn get_json_example(
    api: ApiClient,
    interface_id: i64,
) -> Result<serde_json::Value, ApiError> {
    http::request(
        api,
        Method::Get,
        &format!("/interfaces/{interface_id}/json-example"),
        None,
    )
    .await
}
