// ABOUTME: Record-store abstraction for the GymPoint registration server
// ABOUTME: Trait boundary the lifecycle engine depends on, with pluggable backends
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 GymPoint

use anyhow::Result;
use async_trait::async_trait;
use rust_decimal::Decimal;

use crate::models::{Member, NewRegistration, Plan, Registration, RegistrationChanges};

pub mod factory;
pub mod sqlite;

/// Core record-store abstraction trait
///
/// All storage backends must implement this trait to provide a consistent
/// interface for the lifecycle engine. Find-style operations return
/// `Ok(None)` when the entity is absent; absence is never an error at this
/// layer.
#[async_trait]
pub trait DatabaseProvider: Send + Sync + Clone {
    /// Create a new store connection and run migrations
    async fn new(database_url: &str) -> Result<Self>
    where
        Self: Sized;

    /// Run schema migrations
    async fn migrate(&self) -> Result<()>;

    // ================================
    // Members (read-only reference data; create is for seeds and tests)
    // ================================

    /// Insert a member, returning it with its assigned id
    async fn create_member(&self, name: &str, email: &str) -> Result<Member>;

    /// Get a member by id
    async fn get_member(&self, member_id: i64) -> Result<Option<Member>>;

    // ================================
    // Plans (read-only reference data; create is for seeds and tests)
    // ================================

    /// Insert a plan, returning it with its assigned id
    async fn create_plan(
        &self,
        title: &str,
        duration_months: u32,
        monthly_price: Decimal,
    ) -> Result<Plan>;

    /// Get a plan by id
    async fn get_plan(&self, plan_id: i64) -> Result<Option<Plan>>;

    // ================================
    // Registrations
    // ================================

    /// Persist a new registration, returning the stored row
    async fn create_registration(&self, new: &NewRegistration) -> Result<Registration>;

    /// Get a registration by id
    async fn get_registration(&self, registration_id: i64) -> Result<Option<Registration>>;

    /// Get a registration by id, restricted to the given owning member
    async fn get_registration_for_member(
        &self,
        registration_id: i64,
        member_id: i64,
    ) -> Result<Option<Registration>>;

    /// Get all registrations for a member in stable insertion order
    async fn get_registrations_for_member(&self, member_id: i64) -> Result<Vec<Registration>>;

    /// Apply new terms to a registration as one atomic row update
    async fn update_registration(
        &self,
        registration_id: i64,
        changes: &RegistrationChanges,
    ) -> Result<Registration>;

    /// Remove a registration by id
    async fn delete_registration(&self, registration_id: i64) -> Result<()>;
}
