/// payment split - preview a payment, record it, and project the payoff date
use chrono::{Duration, TimeZone, Utc};
use debt_payoff_rs::{
    record_payment, Debt, Money, PayoffProjectionView, PayoffSimulator, Rate, SafeTimeProvider,
    TimeSource,
};
use rust_decimal_macros::dec;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let time = SafeTimeProvider::new(TimeSource::Test(start));
    let control = time.test_control().unwrap();

    let mut loan = Debt::new("Personal loan", Money::from_major(12_000), Rate::from_percentage(dec!(9.5)))
        .with_minimum_payment(Money::from_major(400));

    let mut last_payment = None;
    for _ in 0..3 {
        control.advance(Duration::days(30));
        let payment = record_payment(&loan, Money::from_major(400), time.now(), last_payment, start);
        println!(
            "{}: paid {} = {} principal + {} interest",
            payment.payment_date.format("%Y-%m-%d"),
            payment.amount,
            payment.principal_paid,
            payment.interest_paid
        );
        loan.apply_payment(&payment);
        last_payment = Some(payment.payment_date);
    }
    println!("balance now {}", loan.current_balance);

    let simulator = PayoffSimulator::default();
    for monthly in [Money::from_major(90), Money::from_major(400), Money::from_major(800)] {
        let view = PayoffProjectionView::project(&simulator, &loan, monthly, &time);
        match view.projected_payoff_date {
            Some(date) => println!("at {} a month: paid off {}", monthly, date.format("%Y-%m-%d")),
            None => println!("at {} a month: will not pay off", monthly),
        }
    }

    Ok(())
}
