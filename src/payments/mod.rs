pub mod amortization;
pub mod breakdown;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::decimal::{Money, Rate};
use crate::errors::{CalculatorError, Result};
use crate::types::PaymentFrequency;

pub use amortization::{
    compute_amortization, number_of_payments, periodic_payment, AmortizationCalculator,
};
pub use breakdown::{yearly_summary, PaymentBreakdown, YearSummary};

/// loan parameters entered in a calculator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanParameters {
    pub principal: Money,
    /// e.g. 4.99 for 4.99% a year
    pub annual_rate_percent: Decimal,
    /// calendar months the loan amortizes over, whatever the frequency
    pub term_months: u32,
    pub payment_frequency: PaymentFrequency,
}

impl LoanParameters {
    pub fn new(
        principal: Money,
        annual_rate_percent: Decimal,
        term_months: u32,
        payment_frequency: PaymentFrequency,
    ) -> Self {
        Self {
            principal,
            annual_rate_percent,
            term_months,
            payment_frequency,
        }
    }

    /// parse raw form values, rejecting anything malformed or out of range
    pub fn parse(
        principal: &str,
        annual_rate_percent: &str,
        term_months: &str,
        payment_frequency: &str,
    ) -> Result<Self> {
        let principal = Money::from_str_exact(principal)
            .map_err(|e| CalculatorError::validation("principal", e.to_string()))?;
        let annual_rate_percent = Decimal::from_str(annual_rate_percent.trim())
            .map_err(|e| CalculatorError::validation("annual_rate_percent", e.to_string()))?;
        let term_months = term_months
            .trim()
            .parse::<u32>()
            .map_err(|e| CalculatorError::validation("term_months", e.to_string()))?;
        let payment_frequency = PaymentFrequency::from_str(payment_frequency)?;

        let params = Self::new(principal, annual_rate_percent, term_months, payment_frequency);
        params.validate()?;
        Ok(params)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.principal.is_positive() {
            return Err(CalculatorError::validation(
                "principal",
                format!("must be greater than zero, got {}", self.principal),
            ));
        }
        if self.annual_rate_percent < Decimal::ZERO {
            return Err(CalculatorError::validation(
                "annual_rate_percent",
                format!("must not be negative, got {}", self.annual_rate_percent),
            ));
        }
        if self.term_months == 0 {
            return Err(CalculatorError::validation(
                "term_months",
                "must be greater than zero",
            ));
        }
        Ok(())
    }

    pub fn annual_rate(&self) -> Rate {
        Rate::from_percentage(self.annual_rate_percent)
    }

    pub fn periodic_rate(&self) -> Rate {
        self.annual_rate()
            .per_period(self.payment_frequency.payments_per_year())
    }
}

/// one period of an amortization schedule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    /// 1-based payment index
    pub period: u32,
    /// the periodic payment; the final period carries the rounding true-up
    /// and no period collects more than interest plus the remaining balance
    pub payment: Money,
    pub principal_portion: Money,
    pub interest_portion: Money,
    /// never negative
    pub remaining_balance: Money,
}

/// result of an amortization calculation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AmortizationResult {
    pub periodic_payment: Money,
    pub total_payment: Money,
    pub total_interest: Money,
    pub number_of_payments: u32,
    /// scheduled payments minus total payment, zero when the schedule was capped
    pub final_payment_adjustment: Money,
    /// sampled schedule in chronological order
    pub schedule: Vec<ScheduleEntry>,
}

impl AmortizationResult {
    pub fn last_entry(&self) -> Option<&ScheduleEntry> {
        self.schedule.last()
    }

    /// sum actually paid if the schedule runs to term
    pub fn total_paid_with_adjustment(&self) -> Money {
        self.total_payment + self.final_payment_adjustment
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
