/// quick start - minimal example to get started
use lending_calculator::{compute_amortization, LoanParameters, Money, PaymentFrequency};
use rust_decimal_macros::dec;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // $10,000 personal loan at 4.99% over three years
    let params = LoanParameters::new(
        Money::from_major(10_000),
        dec!(4.99),
        36,
        PaymentFrequency::Monthly,
    );

    let result = compute_amortization(&params)?;

    println!("monthly payment: {}", result.periodic_payment);
    println!("total payment:   {}", result.total_payment);
    println!("total interest:  {}", result.total_interest);
    println!();
    println!(
        "{:>6} {:>10} {:>10} {:>10} {:>12}",
        "period", "payment", "principal", "interest", "balance"
    );
    for entry in &result.schedule {
        println!(
            "{:>6} {:>10} {:>10} {:>10} {:>12}",
            entry.period,
            entry.payment,
            entry.principal_portion,
            entry.interest_portion,
            entry.remaining_balance
        );
    }

    Ok(())
}
