/// strategy comparison - snowball vs avalanche for a handful of debts
use debt_payoff_rs::{Debt, Money, PayoffSimulator, Rate, StrategyReport};
use rust_decimal_macros::dec;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let debts = vec![
        Debt::new("Credit card", Money::from_major(4_200), Rate::from_percentage(dec!(22.9)))
            .compounded(None)
            .with_minimum_payment(Money::from_major(120)),
        Debt::new("Car loan", Money::from_major(9_800), Rate::from_percentage(dec!(6.4)))
            .with_minimum_payment(Money::from_major(260)),
        // no configured minimum: the simulator derives one
        Debt::new("Medical bill", Money::from_major(1_150), Rate::ZERO),
    ];

    let report = StrategyReport::build(&PayoffSimulator::default(), &debts, Money::from_major(150));

    for plan in [&report.snowball, &report.avalanche] {
        println!("=== {} ===", plan.strategy);
        for entry in &plan.payoff_order {
            println!(
                "{:<14} paid off in month {:>3}  paid {:>10}  interest {:>9}",
                entry.debt_name, entry.payoff_month, entry.total_paid, entry.interest_paid
            );
        }
        println!(
            "total: {} months, {} interest, {} paid\n",
            plan.total_months, plan.total_interest, plan.total_payments
        );
    }

    println!(
        "faster: {} (by {} months), cheaper: {} (by {})",
        report.comparison.faster_strategy,
        report.comparison.time_difference,
        report.comparison.cheaper_strategy,
        report.comparison.interest_difference
    );

    println!("\n{}", report.to_json_pretty()?);

    Ok(())
}
