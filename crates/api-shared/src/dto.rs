//! JSON bodies exchanged over the REST API.
//!
//! Field names are camelCase on the wire. Every optional request field may also be sent as
//! `null`, which is treated the same as leaving it out.

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct HealthRes {
    pub ok: bool,
    pub message: String,
}

/// Body of `POST /api/tutorials`. `title` is required and must not be blank.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CreateTutorialReq {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub published: Option<bool>,
}

/// Body of `PUT /api/tutorials/{id}`. Only the fields present are changed.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UpdateTutorialReq {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub published: Option<bool>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TutorialRes {
    /// 24 lowercase hex characters
    pub id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub published: bool,
    /// RFC 3339 timestamp
    pub created_at: String,
    /// RFC 3339 timestamp
    pub updated_at: String,
}

#[derive(Clone, Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListTutorialsQuery {
    /// Case-insensitive substring to match against the title
    pub title: Option<String>,
}

/// Generic confirmation or error body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MessageRes {
    pub message: String,
}

impl MessageRes {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeleteAllRes {
    pub message: String,
    pub deleted_count: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_req_accepts_nulls_and_missing_fields() {
        let req: CreateTutorialReq =
            serde_json::from_str(r#"{"title":"T1","published":null}"#).unwrap();
        assert_eq!(req.title.as_deref(), Some("T1"));
        assert_eq!(req.description, None);
        assert_eq!(req.published, None);

        let empty: CreateTutorialReq = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, CreateTutorialReq::default());
    }

    #[test]
    fn test_delete_all_res_is_camel_case() {
        let res = DeleteAllRes {
            message: "2 Tutorials were deleted successfully!".into(),
            deleted_count: 2,
        };
        let json = serde_json::to_value(&res).unwrap();
        assert_eq!(json["deletedCount"], 2);
    }
}
