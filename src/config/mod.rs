use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
    sync::Arc,
};

use crate::{
    currency::CashRates,
    errors::Result,
    ledger::{CaloriesCalculator, CashCalculator},
    time::Clock,
    utils::app_data_dir,
};

const CONFIG_DIR: &str = "config";
const CONFIG_FILE: &str = "config.json";
const TMP_SUFFIX: &str = "tmp";

/// Limits and exchange rates used to build calculators.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default = "Config::default_calories_limit")]
    pub calories_limit: Decimal,
    #[serde(default = "Config::default_cash_limit")]
    pub cash_limit: Decimal,
    #[serde(default)]
    pub rates: CashRates,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            calories_limit: Self::default_calories_limit(),
            cash_limit: Self::default_cash_limit(),
            rates: CashRates::default(),
        }
    }
}

impl Config {
    pub fn default_calories_limit() -> Decimal {
        Decimal::from(2000)
    }

    pub fn default_cash_limit() -> Decimal {
        Decimal::from(1000)
    }

    pub fn calories_calculator(&self, clock: Arc<dyn Clock>) -> CaloriesCalculator {
        CaloriesCalculator::with_clock(self.calories_limit, clock)
    }

    pub fn cash_calculator(&self, clock: Arc<dyn Clock>) -> CashCalculator {
        CashCalculator::with_clock(self.cash_limit, self.rates, clock)
    }
}

/// Loads and saves [`Config`] as JSON.
#[derive(Debug, Clone)]
pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Manager rooted at [`app_data_dir`].
    pub fn from_app_dir() -> Result<Self> {
        Self::with_base_dir(app_data_dir())
    }

    pub fn with_base_dir(base: PathBuf) -> Result<Self> {
        let config_dir = base.join(CONFIG_DIR);
        fs::create_dir_all(&config_dir)?;
        Ok(Self::new(config_dir.join(CONFIG_FILE)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> Result<Config> {
        if self.path.exists() {
            let data = fs::read_to_string(&self.path)?;
            let config = serde_json::from_str(&data)?;
            tracing::debug!(path = %self.path.display(), "configuration loaded");
            Ok(config)
        } else {
            tracing::info!(path = %self.path.display(), "no configuration file, using defaults");
            Ok(Config::default())
        }
    }

    pub fn save(&self, config: &Config) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(config)?;
        let tmp = tmp_path(&self.path);
        write_atomic(&tmp, &json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> Result<()> {
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}
