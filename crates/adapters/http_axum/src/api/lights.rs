//! JSON REST handlers for lights.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use lights_app::ports::LightRepository;
use lights_app::presenter::{LightCollectionEnvelope, LightEnvelope};
use lights_domain::error::LightsError;
use lights_domain::id::LightId;
use lights_domain::validate::ValidationError;

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for creating a light.
///
/// `is_powered_on` defaults to off when omitted.
#[derive(Deserialize)]
pub struct CreateLightRequest {
    pub name: Option<String>,
    #[serde(default)]
    pub is_powered_on: bool,
}

/// Request body for replacing a light.
///
/// Both fields are required; an incomplete payload is an input error, not
/// a partial update.
#[derive(Deserialize)]
pub struct ReplaceLightRequest {
    pub name: Option<String>,
    pub is_powered_on: Option<bool>,
}

fn required<T>(value: Option<T>, field: &'static str) -> Result<T, ApiError> {
    value.ok_or_else(|| {
        ApiError::from(LightsError::from(ValidationError::MissingField { field }))
    })
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<LightCollectionEnvelope>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the get endpoint.
pub enum GetResponse {
    Ok(Json<LightEnvelope>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    /// Created, with the new resource's canonical URL in `Location`.
    Created {
        location: String,
        body: Json<LightEnvelope>,
    },
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created { location, body } => {
                (StatusCode::CREATED, [(header::LOCATION, location)], body).into_response()
            }
        }
    }
}

/// Possible responses from the replace endpoint.
pub enum ReplaceResponse {
    /// Replacement is idempotent and the caller already has the data it
    /// sent, so no body is returned.
    NoContent,
}

impl IntoResponse for ReplaceResponse {
    fn into_response(self) -> Response {
        match self {
            Self::NoContent => StatusCode::NO_CONTENT.into_response(),
        }
    }
}

/// Possible responses from the delete endpoints.
pub enum DeleteResponse {
    NoContent,
}

impl IntoResponse for DeleteResponse {
    fn into_response(self) -> Response {
        match self {
            Self::NoContent => StatusCode::NO_CONTENT.into_response(),
        }
    }
}

/// `GET /api/lights`
pub async fn list<R>(State(state): State<AppState<R>>) -> Result<ListResponse, ApiError>
where
    R: LightRepository + Send + Sync + 'static,
{
    let lights = state.light_service.list().await?;
    Ok(ListResponse::Ok(Json(state.presenter.present_list(lights))))
}

/// `GET /api/lights/{id}`
pub async fn get<R>(
    State(state): State<AppState<R>>,
    Path(id): Path<i64>,
) -> Result<GetResponse, ApiError>
where
    R: LightRepository + Send + Sync + 'static,
{
    let light = state.light_service.get(LightId::from_i64(id)).await?;
    Ok(GetResponse::Ok(Json(state.presenter.present(light))))
}

/// `POST /api/lights`
pub async fn create<R>(
    State(state): State<AppState<R>>,
    Json(req): Json<CreateLightRequest>,
) -> Result<CreateResponse, ApiError>
where
    R: LightRepository + Send + Sync + 'static,
{
    let name = required(req.name, "name")?;
    let light = state.light_service.create(name, req.is_powered_on).await?;

    let location = state.presenter.resource_url(light.id);
    Ok(CreateResponse::Created {
        location,
        body: Json(state.presenter.present(light)),
    })
}

/// `PUT /api/lights/{id}`
pub async fn replace<R>(
    State(state): State<AppState<R>>,
    Path(id): Path<i64>,
    Json(req): Json<ReplaceLightRequest>,
) -> Result<ReplaceResponse, ApiError>
where
    R: LightRepository + Send + Sync + 'static,
{
    let name = required(req.name, "name")?;
    let is_powered_on = required(req.is_powered_on, "is_powered_on")?;

    state
        .light_service
        .replace(LightId::from_i64(id), name, is_powered_on)
        .await?;
    Ok(ReplaceResponse::NoContent)
}

/// `DELETE /api/lights/{id}`
pub async fn delete<R>(
    State(state): State<AppState<R>>,
    Path(id): Path<i64>,
) -> Result<DeleteResponse, ApiError>
where
    R: LightRepository + Send + Sync + 'static,
{
    state.light_service.delete_one(LightId::from_i64(id)).await?;
    Ok(DeleteResponse::NoContent)
}

/// `DELETE /api/lights`
pub async fn delete_all<R>(State(state): State<AppState<R>>) -> Result<DeleteResponse, ApiError>
where
    R: LightRepository + Send + Sync + 'static,
{
    state.light_service.delete_all().await?;
    Ok(DeleteResponse::NoContent)
}
