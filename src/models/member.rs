// ABOUTME: Member model for the registration domain
// ABOUTME: Members are gym customers referenced by registrations, never mutated here
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 GymPoint

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A gym customer who can hold registrations
///
/// Members are managed elsewhere; this service only reads them to validate
/// registration requests and to address welcome notifications.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Member {
    /// Unique member identifier, assigned by the record store
    pub id: i64,
    /// Display name
    pub name: String,
    /// Email address for notifications
    pub email: String,
    /// Account creation timestamp
    pub created_at: DateTime<Utc>,
}

impl Member {
    /// Create a new member record (used by seeds and tests; ids are assigned
    /// on insert)
    #[must_use]
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: 0,
            name: name.into(),
            email: email.into(),
            created_at: Utc::now(),
        }
    }
}
