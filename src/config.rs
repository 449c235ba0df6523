use crate::constants::DEFAULT_INITIAL_ROUNDS;
use dotenv::dotenv;
use once_cell::sync::Lazy;
use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    pub data_dir: PathBuf,
    pub share_dir: PathBuf,
    pub log_level: String,
    pub currency_unit: String,
    pub initial_rounds: usize,
}

impl Config {
    fn from_env() -> Self {
        dotenv().ok();

        let data_dir = PathBuf::from(env::var("SPLITROUND_DATA_DIR").unwrap_or_else(|_| ".splitround".to_string()));
        Self {
            share_dir: env::var("SPLITROUND_SHARE_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| data_dir.join("shared")),
            data_dir,
            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            currency_unit: env::var("CURRENCY_UNIT").unwrap_or_else(|_| "원".to_string()),
            initial_rounds: env::var("INITIAL_ROUNDS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_INITIAL_ROUNDS),
        }
    }
}

// Global static accessible everywhere
pub static CONFIG: Lazy<Config> = Lazy::new(Config::from_env);
