// ABOUTME: Registration route handlers for the membership subscription API
// ABOUTME: List, create, update, and delete endpoints delegating to the lifecycle engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 GymPoint

//! Registration lifecycle routes
//!
//! The requesting member is identified by the `x-member-id` header; the
//! create endpoint takes the plan from the path, matching the shape
//! `POST /plans/:plan_id/registrations`. Validation failures surface as
//! 400 responses with a `{"error": "<message>"}` body.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{delete, get, post, put},
    Json, Router,
};
use chrono::NaiveDate;
use serde::Deserialize;

use crate::errors::AppError;
use crate::resources::ServerResources;
use crate::services::ListOutcome;

/// Header carrying the requesting member's id
const MEMBER_ID_HEADER: &str = "x-member-id";

/// Request body for creating a registration
#[derive(Debug, Deserialize)]
pub struct CreateRegistrationRequest {
    /// Requested start date (`YYYY-MM-DD`)
    pub date: NaiveDate,
}

/// Request body for updating a registration's terms
#[derive(Debug, Deserialize)]
pub struct UpdateRegistrationRequest {
    /// New plan id
    pub plan_id: i64,
    /// New start date (`YYYY-MM-DD`)
    pub date: NaiveDate,
}

/// Registration management routes
pub struct RegistrationRoutes;

impl RegistrationRoutes {
    /// Create all registration routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/registrations", get(Self::handle_list))
            .route("/plans/:plan_id/registrations", post(Self::handle_create))
            .route("/registrations/:id", put(Self::handle_update))
            .route("/registrations/:id", delete(Self::handle_delete))
            .with_state(resources)
    }

    /// Extract the requesting member's id from headers
    fn member_id(headers: &HeaderMap) -> Result<i64, AppError> {
        let value = headers
            .get(MEMBER_ID_HEADER)
            .and_then(|h| h.to_str().ok())
            .ok_or_else(|| AppError::invalid_input("Missing x-member-id header"))?;

        value
            .parse()
            .map_err(|_| AppError::invalid_input(format!("Invalid member id: {value}")))
    }

    /// Handle listing a member's registrations
    async fn handle_list(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
    ) -> Result<Response, AppError> {
        let member_id = Self::member_id(&headers)?;

        match resources.registrations.list(member_id).await? {
            ListOutcome::Registrations(registrations) => {
                Ok((StatusCode::OK, Json(registrations)).into_response())
            }
            ListOutcome::Empty => Ok(StatusCode::NO_CONTENT.into_response()),
        }
    }

    /// Handle registration creation
    async fn handle_create(
        State(resources): State<Arc<ServerResources>>,
        Path(plan_id): Path<i64>,
        headers: HeaderMap,
        Json(request): Json<CreateRegistrationRequest>,
    ) -> Result<Response, AppError> {
        let member_id = Self::member_id(&headers)?;

        let registration = resources
            .registrations
            .create(member_id, plan_id, request.date)
            .await?;

        Ok((StatusCode::OK, Json(registration)).into_response())
    }

    /// Handle updating a registration's terms
    async fn handle_update(
        State(resources): State<Arc<ServerResources>>,
        Path(registration_id): Path<i64>,
        headers: HeaderMap,
        Json(request): Json<UpdateRegistrationRequest>,
    ) -> Result<Response, AppError> {
        let member_id = Self::member_id(&headers)?;

        let registration = resources
            .registrations
            .update(registration_id, member_id, request.plan_id, request.date)
            .await?;

        Ok((StatusCode::OK, Json(registration)).into_response())
    }

    /// Handle registration deletion
    async fn handle_delete(
        State(resources): State<Arc<ServerResources>>,
        Path(registration_id): Path<i64>,
    ) -> Result<Response, AppError> {
        resources.registrations.delete(registration_id).await?;

        Ok(StatusCode::NO_CONTENT.into_response())
    }
}
