/// saved scenarios - compare loans without any global state
use chrono::{Duration, TimeZone, Utc};
use lending_calculator::{
    compute_amortization, LoanParameters, SafeTimeProvider, ScenarioBook, TimeSource,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let time = SafeTimeProvider::new(TimeSource::Test(
        Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap(),
    ));
    let controller = time.test_control().unwrap();

    let mut book = ScenarioBook::new();

    // values as they arrive from the calculator form
    let forms = [
        ("three years monthly", "18000", "6.49", "36", "monthly"),
        ("five years biweekly", "18000", "6.99", "60", "biweekly"),
        ("two years weekly", "18000", "5.99", "24", "weekly"),
    ];

    for (name, principal, rate, term, frequency) in forms {
        let params = LoanParameters::parse(principal, rate, term, frequency)?;
        let result = compute_amortization(&params)?;
        book.save(name, params, result, &time)?;
        controller.advance(Duration::minutes(2));
    }

    for scenario in book.list() {
        println!(
            "{} [{}]: {} x {} = {} (interest {})",
            scenario.name,
            scenario.saved_at,
            scenario.result.number_of_payments,
            scenario.result.periodic_payment,
            scenario.result.total_payment,
            scenario.result.total_interest
        );
    }

    // the caller decides where the book lives
    let json = book.to_json()?;
    let mut restored = ScenarioBook::from_json(&json)?;

    let first = restored.list()[0].id;
    let removed = restored.delete(first)?;
    println!("\ndeleted '{}', {} scenarios left", removed.name, restored.len());

    match LoanParameters::parse("18000", "6.49", "36", "daily") {
        Ok(_) => println!("unexpected"),
        Err(e) => println!("form error: {}", e),
    }

    Ok(())
}
