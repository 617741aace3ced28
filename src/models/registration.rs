// ABOUTME: Registration model binding a member to a plan for a computed date range
// ABOUTME: Includes the write payloads handed to the record store on create/update
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 GymPoint

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A concrete subscription instance binding one member to one plan
///
/// `end_date` and `price` are derived from the plan's duration and monthly
/// price at the moment of the mutating operation; they are never edited
/// independently. `member_id` is immutable after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Registration {
    /// Unique registration identifier, assigned by the record store
    pub id: i64,
    /// Owning member; immutable after creation
    pub member_id: i64,
    /// Subscribed plan; replaced on update
    pub plan_id: i64,
    /// First day of the subscription (date only, start-of-day semantics);
    /// replaced on update together with the recomputed derived fields
    pub start_date: NaiveDate,
    /// Derived: `start_date` plus the plan's duration in calendar months
    pub end_date: NaiveDate,
    /// Derived: the plan's monthly price times its duration
    pub price: Decimal,
    /// Row creation timestamp, maintained by the record store
    pub created_at: DateTime<Utc>,
    /// Last mutation timestamp, maintained by the record store
    pub updated_at: DateTime<Utc>,
}

/// Field set persisted when creating a registration
#[derive(Debug, Clone)]
pub struct NewRegistration {
    pub member_id: i64,
    pub plan_id: i64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub price: Decimal,
}

/// Field set persisted when updating a registration's terms
///
/// Applied as one atomic row update so the derived fields can never drift
/// from the plan and date they were computed from.
#[derive(Debug, Clone)]
pub struct RegistrationChanges {
    pub plan_id: i64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub price: Decimal,
}
