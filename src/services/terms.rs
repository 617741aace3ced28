// ABOUTME: Term computation for registrations: end date and total price
// ABOUTME: Pure calendar-month and decimal arithmetic, no I/O
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 GymPoint

//! Term computation
//!
//! Derives a registration's temporal and monetary terms from its start date
//! and plan. Pure and deterministic, which keeps the arithmetic directly
//! unit-testable.

use chrono::{Months, NaiveDate};
use rust_decimal::Decimal;

use crate::models::Plan;

/// The derived terms of a registration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegistrationTerms {
    /// Last day covered by the subscription
    pub end_date: NaiveDate,
    /// Total price for the full duration
    pub price: Decimal,
}

/// Compute the end date and total price for a registration
///
/// The end date is `start_date` plus the plan's duration in calendar months.
/// When the start day-of-month does not exist in the target month, the end
/// date clamps to that month's last valid day (Jan 31 + 1 month = Feb 28).
/// The price is the plan's monthly price times its duration, computed with
/// exact decimal arithmetic.
///
/// Returns `None` only when the resulting date would fall outside the
/// representable calendar range.
#[must_use]
pub fn compute_terms(start_date: NaiveDate, plan: &Plan) -> Option<RegistrationTerms> {
    let end_date = start_date.checked_add_months(Months::new(plan.duration_months))?;
    let price = plan.monthly_price * Decimal::from(plan.duration_months);

    Some(RegistrationTerms { end_date, price })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn plan(duration_months: u32, monthly_price: &str) -> Plan {
        Plan::new("Test", duration_months, Decimal::from_str(monthly_price).unwrap())
    }

    #[test]
    fn test_three_month_terms() {
        let terms = compute_terms(date("2030-01-10"), &plan(3, "100.00")).unwrap();

        assert_eq!(terms.end_date, date("2030-04-10"));
        assert_eq!(terms.price, Decimal::from_str("300.00").unwrap());
    }

    #[test]
    fn test_single_month_terms() {
        let terms = compute_terms(date("2030-02-01"), &plan(1, "150.00")).unwrap();

        assert_eq!(terms.end_date, date("2030-03-01"));
        assert_eq!(terms.price, Decimal::from_str("150.00").unwrap());
    }

    #[test]
    fn test_day_of_month_clamps_to_target_month_end() {
        let terms = compute_terms(date("2021-01-31"), &plan(1, "100.00")).unwrap();
        assert_eq!(terms.end_date, date("2021-02-28"));

        // Leap year February keeps the 29th
        let terms = compute_terms(date("2024-01-31"), &plan(1, "100.00")).unwrap();
        assert_eq!(terms.end_date, date("2024-02-29"));

        // Clamping applies to the target month only; day 31 survives into May
        let terms = compute_terms(date("2021-01-31"), &plan(4, "100.00")).unwrap();
        assert_eq!(terms.end_date, date("2021-05-31"));
    }

    #[test]
    fn test_year_rollover() {
        let terms = compute_terms(date("2030-11-15"), &plan(3, "80.00")).unwrap();
        assert_eq!(terms.end_date, date("2031-02-15"));
    }

    #[test]
    fn test_price_is_exact_decimal_arithmetic() {
        let terms = compute_terms(date("2030-01-01"), &plan(12, "99.99")).unwrap();
        assert_eq!(terms.price, Decimal::from_str("1199.88").unwrap());

        let terms = compute_terms(date("2030-01-01"), &plan(7, "19.90")).unwrap();
        assert_eq!(terms.price, Decimal::from_str("139.30").unwrap());
    }

    #[test]
    fn test_deterministic_for_identical_inputs() {
        let p = plan(6, "42.50");
        let start = date("2030-03-31");

        let first = compute_terms(start, &p).unwrap();
        let second = compute_terms(start, &p).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_out_of_range_date_yields_none() {
        assert!(compute_terms(NaiveDate::MAX, &plan(1, "10.00")).is_none());
    }
}
