use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tracing::{debug, warn};

use crate::config::CalculatorConfig;
use crate::decimal::{round_half_up, Money, Rate};
use crate::errors::{CalculatorError, Result};
use crate::payments::{AmortizationResult, LoanParameters, ScheduleEntry};
use crate::types::PaymentFrequency;

/// compute the amortization for `params` with the default configuration
pub fn compute_amortization(params: &LoanParameters) -> Result<AmortizationResult> {
    AmortizationCalculator::default().compute(params)
}

/// whole number of payments over `term_months`, rounded half-up
///
/// Weekly and biweekly terms rarely land on a whole number of payments
/// (12 months weekly is 52, but 1 month weekly is 4.33); the count is
/// rounded before it is used as an exponent.
pub fn number_of_payments(term_months: u32, frequency: PaymentFrequency) -> Result<u32> {
    let per_year = Decimal::from(frequency.payments_per_year());
    let exact = Decimal::from(term_months) * per_year / dec!(12);
    let count = round_half_up(exact, 0).to_u32().ok_or_else(|| {
        CalculatorError::computation(format!("payment count {} out of range", exact))
    })?;

    if count == 0 {
        return Err(CalculatorError::validation(
            "term_months",
            format!(
                "{} months is shorter than one {} payment period",
                term_months, frequency
            ),
        ));
    }
    Ok(count)
}

/// fixed payment that amortizes `principal` over `periods` at `periodic_rate`
///
/// payment = P * r * (1 + r)^n / ((1 + r)^n - 1), or P / n at zero rate.
/// Rounded half-up to cents.
pub fn periodic_payment(principal: Money, periodic_rate: Rate, periods: u32) -> Result<Money> {
    if periods == 0 {
        return Err(CalculatorError::computation("no payment periods"));
    }

    let payment = if periodic_rate.is_zero() {
        principal / Decimal::from(periods)
    } else {
        annuity_payment(principal, periodic_rate.as_decimal(), periods)?
    }
    .round_cents();

    if !payment.is_positive() {
        return Err(CalculatorError::computation(format!(
            "payment on {} over {} periods rounds to zero",
            principal, periods
        )));
    }
    Ok(payment)
}

/// unrounded annuity payment for a non-zero rate
fn annuity_payment(principal: Money, r: Decimal, periods: u32) -> Result<Money> {
    let growth = compound_factor(r, periods).ok_or_else(|| {
        CalculatorError::computation(format!(
            "(1 + {})^{} overflows decimal range",
            r, periods
        ))
    })?;

    let denominator = growth - Decimal::ONE;
    if denominator <= Decimal::ZERO {
        return Err(CalculatorError::computation(format!(
            "rate {} too small to amortize over {} periods",
            r, periods
        )));
    }

    // r * g / (g - 1) stays close to r, so the principal multiply is last
    r.checked_mul(growth)
        .and_then(|x| x.checked_div(denominator))
        .and_then(|factor| principal.checked_mul(factor))
        .ok_or_else(|| CalculatorError::computation("payment overflows decimal range"))
}

/// (1 + r)^n by repeated squaring, None on overflow
fn compound_factor(r: Decimal, n: u32) -> Option<Decimal> {
    let mut base = Decimal::ONE.checked_add(r)?;
    let mut result = Decimal::ONE;
    let mut exp = n;

    while exp > 0 {
        if exp & 1 == 1 {
            result = result.checked_mul(base)?;
        }
        exp >>= 1;
        if exp > 0 {
            base = base.checked_mul(base)?;
        }
    }
    Some(result)
}

/// payment figures shared by the sampled and full schedules
struct PaymentPlan {
    number_of_payments: u32,
    periodic_rate: Rate,
    payment: Money,
}

/// amortization calculator
#[derive(Debug, Clone, Default)]
pub struct AmortizationCalculator {
    config: CalculatorConfig,
}

impl AmortizationCalculator {
    pub fn new(config: CalculatorConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    /// headline figures plus the sampled schedule
    pub fn compute(&self, params: &LoanParameters) -> Result<AmortizationResult> {
        let plan = self.plan(params)?;
        let n = plan.number_of_payments;

        let total_payment = plan
            .payment
            .checked_mul(Decimal::from(n))
            .ok_or_else(|| {
                CalculatorError::computation("total payment overflows decimal range")
            })?
            .round_cents();
        let total_interest = (total_payment - params.principal).round_cents();

        if total_interest.is_negative() {
            warn!(
                %total_interest,
                principal = %params.principal,
                periods = n,
                "total interest is negative"
            );
        }

        let entries = self.generate(params.principal, &plan);

        // what the schedule actually collects against the headline total
        let final_payment_adjustment = match entries.last() {
            Some(last) if last.period == n => {
                entries.iter().map(|e| e.payment).sum::<Money>() - total_payment
            }
            _ => Money::ZERO,
        };

        let schedule: Vec<ScheduleEntry> = entries
            .into_iter()
            .filter(|e| self.config.retains(e.period, n))
            .collect();

        debug!(
            payment = %plan.payment,
            %total_payment,
            %total_interest,
            periods = n,
            retained = schedule.len(),
            "amortization computed"
        );

        Ok(AmortizationResult {
            periodic_payment: plan.payment,
            total_payment,
            total_interest,
            number_of_payments: n,
            final_payment_adjustment,
            schedule,
        })
    }

    /// every generated period, unsampled but still capped
    pub fn full_schedule(&self, params: &LoanParameters) -> Result<Vec<ScheduleEntry>> {
        let plan = self.plan(params)?;
        Ok(self.generate(params.principal, &plan))
    }

    fn plan(&self, params: &LoanParameters) -> Result<PaymentPlan> {
        params.validate()?;

        let number_of_payments =
            number_of_payments(params.term_months, params.payment_frequency)?;
        let periodic_rate = params.periodic_rate();
        let payment = periodic_payment(params.principal, periodic_rate, number_of_payments)?;

        // a payment that never touches principal cannot amortize
        let first_interest = params.principal * periodic_rate.as_decimal();
        if number_of_payments > 1 && payment <= first_interest {
            return Err(CalculatorError::computation(format!(
                "payment {} does not cover interest {}",
                payment, first_interest
            )));
        }

        Ok(PaymentPlan {
            number_of_payments,
            periodic_rate,
            payment,
        })
    }

    fn generate(&self, principal: Money, plan: &PaymentPlan) -> Vec<ScheduleEntry> {
        let n = plan.number_of_payments;
        let periods = n.min(self.config.schedule_period_cap);
        if periods < n {
            warn!(
                periods = n,
                cap = self.config.schedule_period_cap,
                "schedule truncated at period cap"
            );
        }

        let rate = plan.periodic_rate.as_decimal();
        let mut entries = Vec::with_capacity(periods as usize);
        let mut balance = principal;

        for period in 1..=periods {
            let interest_portion = balance * rate;

            // final period clears whatever rounding left behind, and no
            // period repays more than is still owed
            let principal_portion = if period == n {
                balance
            } else {
                (plan.payment - interest_portion).min(balance)
            };
            let payment = interest_portion + principal_portion;

            balance = (balance - principal_portion).max(Money::ZERO);

            entries.push(ScheduleEntry {
                period,
                payment,
                principal_portion,
                interest_portion,
                remaining_balance: balance,
            });
        }

        entries
    }
}
