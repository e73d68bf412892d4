/// product pages - one calculator per loan product, every frequency
use lending_calculator::{
    yearly_summary, AmortizationCalculator, LoanProduct, Money, PaymentBreakdown,
    PaymentFrequency, ProductLimits,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let calculator = AmortizationCalculator::default();

    let pages = [
        (LoanProduct::Personal, Money::from_major(15_000)),
        (LoanProduct::Mortgage, Money::from_major(350_000)),
        (LoanProduct::Business, Money::from_major(120_000)),
    ];

    for (product, amount) in pages {
        let limits = ProductLimits::for_product(product);
        let mut params = limits.defaults(amount);
        limits.check(&params)?;

        println!(
            "=== {} loan: {} at {}% over {} months ===",
            product, amount, params.annual_rate_percent, params.term_months
        );

        for frequency in PaymentFrequency::ALL {
            params.payment_frequency = frequency;
            match calculator.compute(&params) {
                Ok(result) => println!(
                    "{:>10}: {:>4} payments of {:>10}, interest {}",
                    frequency,
                    result.number_of_payments,
                    result.periodic_payment,
                    result.total_interest
                ),
                Err(e) => println!("{:>10}: {}", frequency, e),
            }
        }

        params.payment_frequency = limits.default_frequency;
        let result = calculator.compute(&params)?;
        let breakdown = PaymentBreakdown::from_result(&result, params.principal);
        println!("principal {} / interest {}", breakdown.principal_share, breakdown.interest_share);

        let entries = calculator.full_schedule(&params)?;
        for year in yearly_summary(&entries, params.payment_frequency) {
            println!(
                "  year {:>2}: principal {:>10} interest {:>10} balance {:>12}",
                year.year, year.principal_paid, year.interest_paid, year.ending_balance
            );
        }
        println!();
    }

    // out of range input is reported, not guessed at
    let limits = ProductLimits::personal();
    let too_big = limits.defaults(Money::from_major(90_000));
    if let Err(e) = limits.check(&too_big) {
        println!("rejected: {}", e);
    }

    Ok(())
}
