use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::models::Activity;
use crate::services::activities_service::{self, ActivitiesError};
use crate::store::SharedDirectory;

#[derive(Debug, Deserialize)]
pub struct ParticipantQuery {
    pub email: String,
}

pub async fn activities_handler(
    State(directory): State<SharedDirectory>,
) -> Json<IndexMap<String, Activity>> {
    Json(activities_service::list_activities(&directory))
}

pub async fn signup_handler(
    Path(activity_name): Path<String>,
    Query(query): Query<ParticipantQuery>,
    State(directory): State<SharedDirectory>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    activities_service::sign_up(&directory, &activity_name, &query.email)
        .map(|message| Json(json!({ "message": message })))
        .map_err(|e| {
            tracing::warn!(activity = %activity_name, email = %query.email, error = %e, "signup rejected");
            error_response(e)
        })
}

pub async fn unregister_handler(
    Path(activity_name): Path<String>,
    Query(query): Query<ParticipantQuery>,
    State(directory): State<SharedDirectory>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    activities_service::unregister(&directory, &activity_name, &query.email)
        .map(|message| Json(json!({ "message": message })))
        .map_err(|e| {
            tracing::warn!(activity = %activity_name, email = %query.email, error = %e, "unregister rejected");
            error_response(e)
        })
}

fn error_response(err: ActivitiesError) -> (StatusCode, Json<Value>) {
    let status = match err {
        ActivitiesError::NotFound => StatusCode::NOT_FOUND,
        ActivitiesError::AlreadySignedUp | ActivitiesError::NotRegistered => {
            StatusCode::BAD_REQUEST
        }
    };
    (status, Json(json!({ "detail": err.to_string() })))
}
