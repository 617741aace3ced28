// ABOUTME: Registration lifecycle orchestration: list, create, update, delete
// ABOUTME: Sequences validation, term computation, persistence, and the welcome notification
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 GymPoint

//! Registration lifecycle engine
//!
//! The orchestrator behind every registration operation. Each operation
//! validates its referenced entities in a fixed order, short-circuits on the
//! first failure with the matching error kind, computes derived terms where
//! needed, and persists through the record store. Creation additionally
//! dispatches a welcome notification on a detached task; its outcome never
//! reaches the caller.

use std::sync::Arc;

use chrono::NaiveDate;
use tracing::{info, warn};

use crate::database_plugins::factory::Database;
use crate::database_plugins::DatabaseProvider;
use crate::errors::{AppError, AppResult};
use crate::models::{Member, NewRegistration, Plan, Registration, RegistrationChanges};
use crate::notifications::{Notifier, WelcomeMessage};
use crate::services::clock::Clock;
use crate::services::terms::compute_terms;

/// Result of listing a member's registrations
///
/// An empty set is a successful outcome distinct from any error; the HTTP
/// layer renders it as 204 No Content.
#[derive(Debug)]
pub enum ListOutcome {
    /// The member's registrations in stable insertion order
    Registrations(Vec<Registration>),
    /// The member exists but holds no registrations
    Empty,
}

/// Orchestrates the registration lifecycle over the record store
#[derive(Clone)]
pub struct RegistrationService {
    database: Arc<Database>,
    notifier: Arc<dyn Notifier>,
    clock: Arc<dyn Clock>,
}

impl RegistrationService {
    /// Create a new registration service
    #[must_use]
    pub fn new(database: Arc<Database>, notifier: Arc<dyn Notifier>, clock: Arc<dyn Clock>) -> Self {
        Self {
            database,
            notifier,
            clock,
        }
    }

    /// List all registrations belonging to a member
    pub async fn list(&self, member_id: i64) -> AppResult<ListOutcome> {
        self.require_member(member_id).await?;

        let registrations = self
            .database
            .get_registrations_for_member(member_id)
            .await
            .map_err(|e| AppError::database(format!("Failed to list registrations: {e}")))?;

        if registrations.is_empty() {
            return Ok(ListOutcome::Empty);
        }

        Ok(ListOutcome::Registrations(registrations))
    }

    /// Create a registration binding a member to a plan from a start date
    ///
    /// Validates member, plan, and date in that order, short-circuiting on the
    /// first failure. On success the persisted registration is returned and a
    /// welcome notification is dispatched fire-and-forget.
    pub async fn create(
        &self,
        member_id: i64,
        plan_id: i64,
        start_date: NaiveDate,
    ) -> AppResult<Registration> {
        let member = self.require_member(member_id).await?;
        let plan = self.require_plan(plan_id).await?;
        self.validate_start_date(start_date)?;

        let terms = compute_terms(start_date, &plan)
            .ok_or_else(|| AppError::invalid_input("Start date is out of range"))?;

        let registration = self
            .database
            .create_registration(&NewRegistration {
                member_id,
                plan_id,
                start_date,
                end_date: terms.end_date,
                price: terms.price,
            })
            .await
            .map_err(|e| AppError::database(format!("Failed to persist registration: {e}")))?;

        info!(
            registration_id = registration.id,
            member_id,
            plan_id,
            end_date = %registration.end_date,
            "registration created"
        );

        self.dispatch_welcome(&member, &plan, &registration);

        Ok(registration)
    }

    /// Re-derive a registration's terms from a new plan and start date
    ///
    /// Validates member, registration (scoped to that member), plan, and date
    /// in that order. The recomputed `plan_id`, `start_date`, `end_date`, and
    /// `price` are persisted as one atomic row update.
    pub async fn update(
        &self,
        registration_id: i64,
        member_id: i64,
        plan_id: i64,
        start_date: NaiveDate,
    ) -> AppResult<Registration> {
        self.require_member(member_id).await?;

        self.database
            .get_registration_for_member(registration_id, member_id)
            .await
            .map_err(|e| AppError::database(format!("Failed to look up registration: {e}")))?
            .ok_or_else(AppError::registration_not_found)?;

        let plan = self.require_plan(plan_id).await?;
        self.validate_start_date(start_date)?;

        let terms = compute_terms(start_date, &plan)
            .ok_or_else(|| AppError::invalid_input("Start date is out of range"))?;

        let registration = self
            .database
            .update_registration(
                registration_id,
                &RegistrationChanges {
                    plan_id,
                    start_date,
                    end_date: terms.end_date,
                    price: terms.price,
                },
            )
            .await
            .map_err(|e| AppError::database(format!("Failed to update registration: {e}")))?;

        info!(
            registration_id,
            member_id,
            plan_id,
            end_date = %registration.end_date,
            "registration updated"
        );

        Ok(registration)
    }

    /// Remove a registration
    pub async fn delete(&self, registration_id: i64) -> AppResult<()> {
        self.database
            .get_registration(registration_id)
            .await
            .map_err(|e| AppError::database(format!("Failed to look up registration: {e}")))?
            .ok_or_else(AppError::registration_not_found)?;

        self.database
            .delete_registration(registration_id)
            .await
            .map_err(|e| AppError::database(format!("Failed to delete registration: {e}")))?;

        info!(registration_id, "registration deleted");

        Ok(())
    }

    /// Look up a member, mapping absence to the member error kind
    async fn require_member(&self, member_id: i64) -> AppResult<Member> {
        self.database
            .get_member(member_id)
            .await
            .map_err(|e| AppError::database(format!("Failed to look up member: {e}")))?
            .ok_or_else(AppError::member_not_found)
    }

    /// Look up a plan, mapping absence to the plan error kind
    async fn require_plan(&self, plan_id: i64) -> AppResult<Plan> {
        self.database
            .get_plan(plan_id)
            .await
            .map_err(|e| AppError::database(format!("Failed to look up plan: {e}")))?
            .ok_or_else(AppError::plan_not_found)
    }

    /// Reject start dates strictly before the current day
    fn validate_start_date(&self, start_date: NaiveDate) -> AppResult<()> {
        if start_date < self.clock.today() {
            return Err(AppError::past_date());
        }
        Ok(())
    }

    /// Dispatch the welcome notification without awaiting its outcome
    ///
    /// The registration is already persisted; a delivery failure is logged
    /// and otherwise discarded.
    fn dispatch_welcome(&self, member: &Member, plan: &Plan, registration: &Registration) {
        let message = WelcomeMessage::registration(member, plan, registration.end_date);
        let notifier = Arc::clone(&self.notifier);
        let registration_id = registration.id;

        tokio::spawn(async move {
            if let Err(e) = notifier.send(&message).await {
                warn!(registration_id, error = %e, "welcome notification failed");
            }
        });
    }
}
