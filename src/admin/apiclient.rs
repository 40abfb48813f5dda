//! API client for the catalog listing endpoints

use async_trait::async_trait;
use gloo_net::http::Request;
use serde::de::DeserializeOwned;

use crate::cascade::{ChildLookup, ChildRecord, LookupError, ParentKind};

async fn fetch_json<T: DeserializeOwned>(url: &str) -> Result<T, LookupError> {
  let resp = Request::get(url)
    .send()
    .await
    .map_err(|e| LookupError::Transport(e.to_string()))?;
  if !resp.ok() {
    return Err(LookupError::Status(resp.status()));
  }
  resp
    .json()
    .await
    .map_err(|e| LookupError::Decode(e.to_string()))
}

// =============================================================================
// API Functions
// =============================================================================

/// Full faculty listing, used once at startup to fill the top-level control.
pub async fn fetch_faculties() -> Result<Vec<ChildRecord>, LookupError> {
  fetch_json("/admin/catalog/faculty/").await
}

/// Departments belonging to one faculty.
pub async fn fetch_departments(faculty_id: &str) -> Result<Vec<ChildRecord>, LookupError> {
  fetch_json(&format!("/admin/catalog/department/?faculty={}", faculty_id)).await
}

/// Topics belonging to one department.
pub async fn fetch_topics(department_id: &str) -> Result<Vec<ChildRecord>, LookupError> {
  fetch_json(&format!("/admin/catalog/topic/?department={}", department_id)).await
}

/// `ChildLookup` over the live listing endpoints.
pub struct HttpLookup;

#[async_trait(?Send)]
impl ChildLookup for HttpLookup {
  async fn children(
    &self,
    parent: ParentKind,
    parent_id: &str,
  ) -> Result<Vec<ChildRecord>, LookupError> {
    match parent {
      ParentKind::Faculty => fetch_departments(parent_id).await,
      ParentKind::Department => fetch_topics(parent_id).await,
    }
  }
}
