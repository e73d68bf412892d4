use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::decimal::Money;
use crate::errors::{CalculatorError, Result};
use crate::payments::LoanParameters;
use crate::types::{LoanProduct, PaymentFrequency};

/// calculator configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculatorConfig {
    /// hard limit on generated periods, whatever the nominal term
    pub schedule_period_cap: u32,
    /// leading periods kept in full in the sampled schedule
    pub full_detail_periods: u32,
    /// after the leading periods, keep every n-th period
    pub sample_interval: u32,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            schedule_period_cap: 360,
            full_detail_periods: 12,
            sample_interval: 12,
        }
    }
}

impl CalculatorConfig {
    pub fn validate(&self) -> Result<()> {
        if self.schedule_period_cap == 0 {
            return Err(CalculatorError::validation(
                "schedule_period_cap",
                "must be greater than zero",
            ));
        }
        if self.sample_interval == 0 {
            return Err(CalculatorError::validation(
                "sample_interval",
                "must be greater than zero",
            ));
        }
        Ok(())
    }

    /// whether a period belongs in the sampled schedule
    pub fn retains(&self, period: u32, number_of_payments: u32) -> bool {
        period <= self.full_detail_periods
            || period % self.sample_interval == 0
            || period == number_of_payments
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let config: CalculatorConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// input limits and defaults for one product's calculator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductLimits {
    pub product: LoanProduct,
    pub min_principal: Money,
    pub max_principal: Money,
    pub max_rate_percent: Decimal,
    pub min_term_months: u32,
    pub max_term_months: u32,
    pub default_rate_percent: Decimal,
    pub default_term_months: u32,
    pub default_frequency: PaymentFrequency,
}

impl ProductLimits {
    /// personal loan calculator
    pub fn personal() -> Self {
        Self {
            product: LoanProduct::Personal,
            min_principal: Money::from_major(1_000),
            max_principal: Money::from_major(50_000),
            max_rate_percent: dec!(36),
            min_term_months: 12,
            max_term_months: 84,
            default_rate_percent: dec!(4.99),
            default_term_months: 36,
            default_frequency: PaymentFrequency::Monthly,
        }
    }

    /// mortgage calculator
    pub fn mortgage() -> Self {
        Self {
            product: LoanProduct::Mortgage,
            min_principal: Money::from_major(50_000),
            max_principal: Money::from_major(2_000_000),
            max_rate_percent: dec!(15),
            min_term_months: 60,
            max_term_months: 360,
            default_rate_percent: dec!(6.5),
            default_term_months: 360,
            default_frequency: PaymentFrequency::Monthly,
        }
    }

    /// business loan calculator
    pub fn business() -> Self {
        Self {
            product: LoanProduct::Business,
            min_principal: Money::from_major(5_000),
            max_principal: Money::from_major(500_000),
            max_rate_percent: dec!(30),
            min_term_months: 6,
            max_term_months: 120,
            default_rate_percent: dec!(8.5),
            default_term_months: 60,
            default_frequency: PaymentFrequency::Monthly,
        }
    }

    pub fn for_product(product: LoanProduct) -> Self {
        match product {
            LoanProduct::Personal => Self::personal(),
            LoanProduct::Mortgage => Self::mortgage(),
            LoanProduct::Business => Self::business(),
        }
    }

    /// starting parameters for the product's calculator
    pub fn defaults(&self, principal: Money) -> LoanParameters {
        LoanParameters {
            principal,
            annual_rate_percent: self.default_rate_percent,
            term_months: self.default_term_months,
            payment_frequency: self.default_frequency,
        }
    }

    /// reject parameters outside this product's range
    pub fn check(&self, params: &LoanParameters) -> Result<()> {
        if params.principal < self.min_principal || params.principal > self.max_principal {
            return Err(CalculatorError::validation(
                "principal",
                format!(
                    "{} loans range from {} to {}",
                    self.product, self.min_principal, self.max_principal
                ),
            ));
        }
        if params.annual_rate_percent > self.max_rate_percent {
            return Err(CalculatorError::validation(
                "annual_rate_percent",
                format!(
                    "{} loans are capped at {}%",
                    self.product, self.max_rate_percent
                ),
            ));
        }
        if params.term_months < self.min_term_months || params.term_months > self.max_term_months {
            return Err(CalculatorError::validation(
                "term_months",
                format!(
                    "{} loans run from {} to {} months",
                    self.product, self.min_term_months, self.max_term_months
                ),
            ));
        }
        Ok(())
    }
}
