//! HTTP client shared by every finance resource
//!
//! The resource type supplies its REST path; create and update send
//! `R::Dto` and expect the stored row back.

use contracts::domain::common::{FinanceResource, RecordId};
use contracts::shared::fetched::Fetched;
use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::api_utils::{api_url, ensure_ok, read_json};

/// GET any JSON document from the finance API
pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, String> {
    let response = Request::get(&api_url(path))
        .send()
        .await
        .map_err(|e| e.to_string())?;
    read_json(response).await
}

/// GET with a query string built from `query`
pub async fn get_json_with_query<T, Q>(path: &str, query: &Q) -> Result<T, String>
where
    T: DeserializeOwned,
    Q: Serialize,
{
    let query = serde_qs::to_string(query).map_err(|e| e.to_string())?;
    get_json(&format!("{}?{}", path, query)).await
}

/// Like `get_json`, with the outcome as a value
pub async fn fetch<T: DeserializeOwned>(path: &str) -> Fetched<T> {
    Fetched::from_result(get_json(path).await)
}

pub async fn list<R: FinanceResource>() -> Result<Vec<R>, String> {
    get_json(R::resource_path()).await
}

pub async fn create<R: FinanceResource>(dto: &R::Dto) -> Result<R, String> {
    let response = Request::post(&api_url(R::resource_path()))
        .json(dto)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    read_json(response).await
}

pub async fn update<R: FinanceResource>(id: RecordId, dto: &R::Dto) -> Result<R, String> {
    let response = Request::put(&api_url(&R::item_path(id)))
        .json(dto)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    read_json(response).await
}

pub async fn delete<R: FinanceResource>(id: RecordId) -> Result<(), String> {
    let response = Request::delete(&api_url(&R::item_path(id)))
        .send()
        .await
        .map_err(|e| e.to_string())?;
    ensure_ok(response).await.map(|_| ())
}
