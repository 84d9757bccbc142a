mod common;

use common::{clock, days_ago, today};
use daily_tally::{ledger::STOP_EATING, CaloriesCalculator, Record, Tracker, TrackerError};
use rust_decimal_macros::dec;

fn calories_with(eaten: &[rust_decimal::Decimal]) -> CaloriesCalculator {
    let mut calc = CaloriesCalculator::with_clock(dec!(2000), clock());
    for amount in eaten {
        calc.add_record(Record::on(*amount, "meal", today()));
    }
    calc
}

#[test]
fn reports_remaining_calories() {
    let calc = calories_with(&[dec!(1000), dec!(500)]);
    let message = calc.calories_remained().unwrap();
    assert!(message.contains("500"), "unexpected message: {message}");
    assert!(message.ends_with("500 kcal"), "unexpected message: {message}");
}

#[test]
fn exact_limit_means_stop() {
    let calc = calories_with(&[dec!(2000)]);
    assert_eq!(calc.calories_remained().unwrap(), STOP_EATING);
}

#[test]
fn over_limit_means_stop() {
    let calc = calories_with(&[dec!(1800), dec!(450)]);
    assert_eq!(calc.calories_remained().unwrap(), STOP_EATING);
}

#[test]
fn older_meals_do_not_count_against_today() {
    let mut calc = calories_with(&[dec!(100)]);
    calc.add_record(Record::on(dec!(5000), "feast", days_ago(1)));
    assert!(calc.calories_remained().unwrap().contains("1900"));
    assert_eq!(calc.week_stats().unwrap(), dec!(5100));
}

#[test]
fn huge_allowance_overflow_is_an_error() {
    let mut calc = CaloriesCalculator::with_clock(rust_decimal::Decimal::MAX, clock());
    calc.add_record(Record::on(dec!(-10), "negative entry", today()));
    let err = calc.calories_remained().expect_err("overflow must not panic");
    assert!(matches!(err, TrackerError::Overflow(_)));
}
