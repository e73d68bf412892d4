use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::decimal::{Money, Rate};
use crate::payments::{AmortizationResult, ScheduleEntry};
use crate::types::PaymentFrequency;

/// principal and interest paid over one loan year
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearSummary {
    pub year: u32,
    pub principal_paid: Money,
    pub interest_paid: Money,
    pub ending_balance: Money,
}

/// aggregate an unsampled schedule into loan years for charting
pub fn yearly_summary(entries: &[ScheduleEntry], frequency: PaymentFrequency) -> Vec<YearSummary> {
    let per_year = frequency.payments_per_year();
    let mut years: Vec<YearSummary> = Vec::new();

    for entry in entries {
        let year = (entry.period - 1) / per_year + 1;
        match years.last_mut() {
            Some(current) if current.year == year => {
                current.principal_paid += entry.principal_portion;
                current.interest_paid += entry.interest_portion;
                current.ending_balance = entry.remaining_balance;
            }
            _ => years.push(YearSummary {
                year,
                principal_paid: entry.principal_portion,
                interest_paid: entry.interest_portion,
                ending_balance: entry.remaining_balance,
            }),
        }
    }

    years
}

/// principal versus interest split of the total cost
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentBreakdown {
    pub principal: Money,
    pub interest: Money,
    pub principal_share: Rate,
    pub interest_share: Rate,
}

impl PaymentBreakdown {
    pub fn from_result(result: &AmortizationResult, principal: Money) -> Self {
        // negative rounding slack is not drawn
        let interest = result.total_interest.max(Money::ZERO);
        let total = principal + interest;

        if total.is_zero() {
            return Self {
                principal,
                interest,
                principal_share: Rate::ZERO,
                interest_share: Rate::ZERO,
            };
        }

        let interest_share = (interest.as_decimal() / total.as_decimal()).round_dp(4);
        Self {
            principal,
            interest,
            principal_share: Rate::from_decimal(Decimal::ONE - interest_share),
            interest_share: Rate::from_decimal(interest_share),
        }
    }
}
