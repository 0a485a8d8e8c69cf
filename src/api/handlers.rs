//! Axum request handlers for the HTTP API.
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;
use std::sync::Arc;
use tracing::Instrument;
use uuid::Uuid;

use crate::api::response::{ApiError, CheckResponse, SubmitResponse};
use crate::api::routes::AppState;
use crate::generation::request::GenerationRequest;

#[derive(Debug, Deserialize)]
pub struct GenerateParams {
    pub authorization_token: String,
}

#[derive(Debug, Deserialize)]
pub struct CheckParams {
    pub mark_id: String,
    pub authorization_token: String,
}

pub async fn root() -> &'static str {
    "PicLumen Relay"
}

pub async fn generate_image(
    State(state): State<Arc<AppState>>,
    params: Result<Query<GenerateParams>, QueryRejection>,
    request: Result<Json<GenerationRequest>, JsonRejection>,
) -> Result<Json<SubmitResponse>, ApiError> {
    let Query(params) = params?;
    let Json(request) = request?;
    let span = tracing::info_span!("generate_image", request_id = %Uuid::new_v4());
    async move {
        tracing::debug!(prompt_len = request.prompt.len(), "Generation request received");
        // only an upstream status failure is special-cased here
        let mark_id = state
            .upstream
            .create(&params.authorization_token, &request)
            .await
            .map_err(ApiError::from_submit)?;
        tracing::info!(%mark_id, "Image creation initiated");
        Ok::<_, ApiError>(Json(SubmitResponse::initiated(mark_id)))
    }
    .instrument(span)
    .await
}

pub async fn check_image(
    State(state): State<Arc<AppState>>,
    params: Result<Query<CheckParams>, QueryRejection>,
) -> Result<Json<CheckResponse>, ApiError> {
    let Query(params) = params?;
    let span = tracing::info_span!("check_image", request_id = %Uuid::new_v4(), mark_id = %params.mark_id);
    async move {
        let result = state
            .upstream
            .check(&params.authorization_token, &params.mark_id)
            .await
            .map_err(ApiError::from_check)?;
        tracing::info!(?result, "Status check finished");
        Ok::<_, ApiError>(Json(CheckResponse::from_status(result, params.mark_id)))
    }
    .instrument(span)
    .await
}
