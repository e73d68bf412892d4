pub mod config;
pub mod decimal;
pub mod errors;
pub mod payments;
pub mod scenarios;
pub mod types;

// re-export key types
pub use config::{CalculatorConfig, ProductLimits};
pub use decimal::{Money, Rate};
pub use errors::{CalculatorError, Result};
pub use payments::{
    compute_amortization, number_of_payments, periodic_payment, yearly_summary,
    AmortizationCalculator, AmortizationResult, LoanParameters, PaymentBreakdown, ScheduleEntry,
    YearSummary,
};
pub use scenarios::{SavedScenario, ScenarioBook};
pub use types::{LoanProduct, PaymentFrequency, ScenarioId};

// re-export external dependencies that users will need
pub use hourglass_rs::{SafeTimeProvider, TimeSource};
pub use rust_decimal::Decimal;
