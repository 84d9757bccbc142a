mod common;

use common::{clock, today};
use daily_tally::{
    config::{Config, ConfigManager},
    currency::CashRates,
    Record, Tracker,
};
use rust_decimal_macros::dec;
use tempfile::tempdir;

#[test]
fn missing_file_yields_defaults() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::new(dir.path().join("config.json"));
    let config = manager.load().expect("load defaults");
    assert_eq!(config, Config::default());
}

#[test]
fn config_manager_persists_and_loads_config() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::with_base_dir(dir.path().to_path_buf()).expect("manager");

    let config = Config {
        calories_limit: dec!(1800),
        cash_limit: dec!(1500.50),
        rates: CashRates::new(dec!(90.5), dec!(99)),
    };
    manager.save(&config).expect("save config");
    assert!(manager.path().ends_with("config/config.json"));

    let loaded = manager.load().expect("load config");
    assert_eq!(loaded, config);
}

#[test]
fn malformed_file_is_a_config_error() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("config.json");
    std::fs::write(&path, "{ not json").expect("write");
    let err = ConfigManager::new(path).load().expect_err("malformed");
    assert!(err.to_string().starts_with("Configuration error"));
}

#[test]
fn calculators_built_from_config() {
    let config = Config {
        calories_limit: dec!(1000),
        cash_limit: dec!(600),
        rates: CashRates::new(dec!(60), dec!(70)),
    };

    let mut calories = config.calories_calculator(clock());
    calories.add_record(Record::on(dec!(250), "snack", today()));
    assert!(calories.calories_remained().unwrap().contains("750"));

    let mut cash = config.cash_calculator(clock());
    cash.add_record(Record::on(dec!(0), "nothing", today()));
    assert_eq!(cash.limit(), dec!(600));
    assert_eq!(
        cash.today_cash_remained("usd").unwrap(),
        "Left for today: 10.00 USD"
    );
}
