// ABOUTME: Plan model for the registration domain
// ABOUTME: Plans define a duration in whole months and a monthly price
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 GymPoint

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A subscription offering with a monthly price and a duration in months
///
/// Plans are managed elsewhere; this service reads them to derive a
/// registration's end date and total price. `duration_months` is always
/// greater than zero and `monthly_price` is a positive monetary amount.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Plan {
    /// Unique plan identifier, assigned by the record store
    pub id: i64,
    /// Display title, e.g. "Gold"
    pub title: String,
    /// Subscription length in whole calendar months
    pub duration_months: u32,
    /// Price per month in the currency's minor-unit precision
    pub monthly_price: Decimal,
}

impl Plan {
    /// Create a new plan record (used by seeds and tests; ids are assigned on
    /// insert)
    #[must_use]
    pub fn new(title: impl Into<String>, duration_months: u32, monthly_price: Decimal) -> Self {
        Self {
            id: 0,
            title: title.into(),
            duration_months,
            monthly_price,
        }
    }
}
