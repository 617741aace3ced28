// ABOUTME: SQLite record-store backend
// ABOUTME: Wraps the concrete SQLite database behind the DatabaseProvider trait
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 GymPoint

//! SQLite record-store implementation
//!
//! Wraps the concrete SQLite database to implement the `DatabaseProvider`
//! trait.

use anyhow::Result;
use async_trait::async_trait;
use rust_decimal::Decimal;

use super::DatabaseProvider;
use crate::models::{Member, NewRegistration, Plan, Registration, RegistrationChanges};

/// SQLite record-store backend
#[derive(Clone)]
pub struct SqliteDatabase {
    /// The underlying database instance
    inner: crate::database::Database,
}

#[async_trait]
impl DatabaseProvider for SqliteDatabase {
    async fn new(database_url: &str) -> Result<Self> {
        let inner = crate::database::Database::new(database_url).await?;
        Ok(Self { inner })
    }

    async fn migrate(&self) -> Result<()> {
        self.inner.migrate().await
    }

    async fn create_member(&self, name: &str, email: &str) -> Result<Member> {
        self.inner.create_member(name, email).await
    }

    async fn get_member(&self, member_id: i64) -> Result<Option<Member>> {
        self.inner.get_member(member_id).await
    }

    async fn create_plan(
        &self,
        title: &str,
        duration_months: u32,
        monthly_price: Decimal,
    ) -> Result<Plan> {
        self.inner.create_plan(title, duration_months, monthly_price).await
    }

    async fn get_plan(&self, plan_id: i64) -> Result<Option<Plan>> {
        self.inner.get_plan(plan_id).await
    }

    async fn create_registration(&self, new: &NewRegistration) -> Result<Registration> {
        self.inner.create_registration(new).await
    }

    async fn get_registration(&self, registration_id: i64) -> Result<Option<Registration>> {
        self.inner.get_registration(registration_id).await
    }

    async fn get_registration_for_member(
        &self,
        registration_id: i64,
        member_id: i64,
    ) -> Result<Option<Registration>> {
        self.inner
            .get_registration_for_member(registration_id, member_id)
            .await
    }

    async fn get_registrations_for_member(&self, member_id: i64) -> Result<Vec<Registration>> {
        self.inner.get_registrations_for_member(member_id).await
    }

    async fn update_registration(
        &self,
        registration_id: i64,
        changes: &RegistrationChanges,
    ) -> Result<Registration> {
        self.inner.update_registration(registration_id, changes).await
    }

    async fn delete_registration(&self, registration_id: i64) -> Result<()> {
        self.inner.delete_registration(registration_id).await
    }
}
