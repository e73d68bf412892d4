use lending_calculator::{
    compute_amortization, yearly_summary, AmortizationCalculator, CalculatorError,
    LoanParameters, Money, PaymentFrequency,
};
use pretty_assertions::assert_eq;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn loan(
    principal: Decimal,
    rate: Decimal,
    term_months: u32,
    frequency: PaymentFrequency,
) -> LoanParameters {
    LoanParameters::new(Money::from_decimal(principal), rate, term_months, frequency)
}

fn sample_loans() -> Vec<LoanParameters> {
    vec![
        loan(dec!(10_000), dec!(4.99), 36, PaymentFrequency::Monthly),
        loan(dec!(10_000), dec!(4.99), 36, PaymentFrequency::Weekly),
        loan(dec!(10_000), dec!(4.99), 36, PaymentFrequency::Biweekly),
        loan(dec!(10_000), dec!(4.99), 36, PaymentFrequency::Quarterly),
        loan(dec!(250_000), dec!(6.5), 360, PaymentFrequency::Monthly),
        loan(dec!(75_000.55), dec!(11.25), 84, PaymentFrequency::Monthly),
        loan(dec!(3_333.33), dec!(0), 7, PaymentFrequency::Monthly),
        loan(dec!(500), dec!(25), 1, PaymentFrequency::Monthly),
        loan(dec!(40_000), dec!(29.9), 60, PaymentFrequency::Biweekly),
    ]
}

// ===========================================================================
// Scenarios
// ===========================================================================

#[test]
fn test_scenario_a_personal_loan() {
    let params = loan(dec!(10_000), dec!(4.99), 36, PaymentFrequency::Monthly);
    let result = compute_amortization(&params).unwrap();

    assert_eq!(result.number_of_payments, 36);
    assert_eq!(result.periodic_payment, Money::from_cents(29_966));
    assert_eq!(result.total_payment, Money::from_cents(1_078_776));
    assert_eq!(result.total_interest, Money::from_cents(78_776));

    // 10000 * 0.0499 / 12 = 41.583..
    let first = &result.schedule[0];
    assert_eq!(first.period, 1);
    assert_eq!(first.payment, Money::from_cents(29_966));
    assert_eq!(first.interest_portion.round_cents(), Money::from_cents(4_158));
    assert_eq!(first.principal_portion.round_cents(), Money::from_cents(25_808));
    assert_eq!(first.remaining_balance.round_cents(), Money::from_cents(974_192));

    let last = result.last_entry().unwrap();
    assert_eq!(last.period, 36);
    assert_eq!(last.remaining_balance, Money::ZERO);
    assert_eq!(last.payment.round_cents(), Money::from_cents(29_982));
    assert_eq!(result.final_payment_adjustment.round_cents(), Money::from_cents(16));

    let periods: Vec<u32> = result.schedule.iter().map(|e| e.period).collect();
    assert_eq!(periods, vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 24, 36]);
}

#[test]
fn test_scenario_b_interest_free() {
    let params = loan(dec!(100_000), dec!(0), 120, PaymentFrequency::Monthly);
    let result = compute_amortization(&params).unwrap();

    assert_eq!(result.periodic_payment, Money::from_cents(83_333));
    assert_eq!(result.total_payment, Money::from_cents(9_999_960));
    // the 40 cents of rounding slack land in the final payment
    assert_eq!(result.total_interest, Money::from_cents(-40));
    assert_eq!(result.final_payment_adjustment, Money::from_cents(40));
    assert_eq!(result.total_paid_with_adjustment(), params.principal);

    assert_eq!(result.schedule.len(), 21);
    for entry in &result.schedule {
        assert_eq!(entry.interest_portion, Money::ZERO);
    }
    assert_eq!(result.last_entry().unwrap().remaining_balance, Money::ZERO);
}

#[test]
fn test_scenario_c_single_period() {
    let params = loan(dec!(500), dec!(25), 1, PaymentFrequency::Monthly);
    let result = compute_amortization(&params).unwrap();

    // 500 * (1 + 0.25 / 12)
    assert_eq!(result.number_of_payments, 1);
    assert_eq!(result.periodic_payment, Money::from_cents(51_042));
    assert_eq!(result.total_interest, Money::from_cents(1_042));

    assert_eq!(result.schedule.len(), 1);
    let only = &result.schedule[0];
    assert_eq!(only.period, 1);
    assert_eq!(only.payment.round_cents(), Money::from_cents(51_042));
    assert_eq!(only.principal_portion, Money::from_major(500));
    assert_eq!(only.interest_portion.round_cents(), Money::from_cents(1_042));
    assert_eq!(only.remaining_balance, Money::ZERO);
    // less than a cent between the exact and the rounded single payment
    assert_eq!(result.final_payment_adjustment.round_cents(), Money::ZERO);
}

#[test]
fn test_tiny_loan_cleared_before_term() {
    // 0.01 a month pays off 1.00 at period 100 of 120
    let params = loan(dec!(1), Decimal::ZERO, 120, PaymentFrequency::Monthly);
    let result = compute_amortization(&params).unwrap();

    assert_eq!(result.periodic_payment, Money::CENT);
    assert_eq!(result.total_payment, Money::from_cents(120));
    assert_eq!(result.total_interest, Money::from_cents(20));
    assert_eq!(result.final_payment_adjustment, Money::from_cents(-20));
    assert_eq!(result.total_paid_with_adjustment(), params.principal);

    let entries = AmortizationCalculator::default().full_schedule(&params).unwrap();
    let repaid: Money = entries.iter().map(|e| e.principal_portion).sum();
    assert_eq!(repaid, params.principal);

    let years = yearly_summary(&entries, params.payment_frequency);
    let yearly: Money = years.iter().map(|y| y.principal_paid).sum();
    assert_eq!(yearly, params.principal);
    assert_eq!(years.last().unwrap().principal_paid, Money::ZERO);
}

#[test]
fn test_weekly_thirty_year_is_capped() {
    let params = loan(dec!(300_000), dec!(6), 360, PaymentFrequency::Weekly);
    let result = compute_amortization(&params).unwrap();

    assert_eq!(result.number_of_payments, 1_560);
    let last = result.last_entry().unwrap();
    assert_eq!(last.period, 360);
    assert!(last.remaining_balance.is_positive());
    assert_eq!(result.final_payment_adjustment, Money::ZERO);
    assert_eq!(result.schedule.len(), 12 + 29);
}

// ===========================================================================
// Properties
// ===========================================================================

#[test]
fn test_zero_interest_payment_is_principal_over_count() {
    for (principal, term) in [(dec!(12_000), 12_u32), (dec!(100_000), 120), (dec!(999.99), 7)] {
        let params = loan(principal, Decimal::ZERO, term, PaymentFrequency::Monthly);
        let result = compute_amortization(&params).unwrap();

        let expected = (Money::from_decimal(principal) / Decimal::from(term)).round_cents();
        assert_eq!(result.periodic_payment, expected);
        assert_eq!(result.total_interest, -result.final_payment_adjustment);
        assert_eq!(result.total_paid_with_adjustment(), params.principal);
    }

    let even = loan(dec!(12_000), Decimal::ZERO, 12, PaymentFrequency::Monthly);
    let even = compute_amortization(&even).unwrap();
    assert_eq!(even.total_interest, Money::ZERO);
}

#[test]
fn test_totals_follow_payment() {
    for params in sample_loans() {
        let result = compute_amortization(&params).unwrap();
        let n = Decimal::from(result.number_of_payments);

        assert_eq!(result.total_payment, (result.periodic_payment * n).round_cents());
        assert_eq!(
            result.total_interest,
            (result.total_payment - params.principal).round_cents()
        );
    }
}

#[test]
fn test_schedule_ends_at_zero() {
    for params in sample_loans() {
        let result = compute_amortization(&params).unwrap();
        let last = result.last_entry().unwrap();

        assert_eq!(last.period, result.number_of_payments);
        assert!(last.remaining_balance.abs() <= Money::CENT, "{params:?}");
    }
}

#[test]
fn test_balance_never_increases() {
    let calc = AmortizationCalculator::default();
    for params in sample_loans() {
        let entries = calc.full_schedule(&params).unwrap();
        let mut previous = params.principal;

        for entry in &entries {
            assert!(entry.remaining_balance <= previous, "period {} of {params:?}", entry.period);
            assert!(!entry.remaining_balance.is_negative());
            previous = entry.remaining_balance;
        }
    }
}

#[test]
fn test_fixed_payment_until_final_period() {
    let calc = AmortizationCalculator::default();
    for params in sample_loans() {
        let result = calc.compute(&params).unwrap();
        let entries = calc.full_schedule(&params).unwrap();
        let (last, rest) = entries.split_last().unwrap();

        for entry in rest {
            assert_eq!(entry.payment, result.periodic_payment);
        }
        assert_eq!(last.payment, result.periodic_payment + result.final_payment_adjustment);
    }
}

#[test]
fn test_invalid_input_rejected() {
    let cases = [
        (loan(dec!(0), dec!(5), 36, PaymentFrequency::Monthly), "principal"),
        (loan(dec!(-100), dec!(5), 36, PaymentFrequency::Monthly), "principal"),
        (loan(dec!(10_000), dec!(5), 0, PaymentFrequency::Monthly), "term_months"),
        (loan(dec!(10_000), dec!(-1), 36, PaymentFrequency::Monthly), "annual_rate_percent"),
    ];

    for (params, field) in cases {
        match compute_amortization(&params) {
            Err(CalculatorError::Validation { field: f, .. }) => assert_eq!(f, field),
            other => panic!("expected validation error on {field}, got {other:?}"),
        }
    }

    let err = LoanParameters::parse("10000", "5", "36", "daily").unwrap_err();
    assert!(err.is_validation());
    assert_eq!(err.field(), Some("payment_frequency"));
}

#[test]
fn test_degenerate_rate_is_computation_error() {
    let params = loan(dec!(10_000), dec!(50_000), 240, PaymentFrequency::Monthly);
    let err = compute_amortization(&params).unwrap_err();
    assert!(err.is_computation(), "got {err:?}");
}

#[test]
fn test_deterministic() {
    for params in sample_loans() {
        assert_eq!(
            compute_amortization(&params).unwrap(),
            compute_amortization(&params).unwrap()
        );
    }
}
