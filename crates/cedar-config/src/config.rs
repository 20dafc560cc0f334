//! # Register Configuration
//!
//! Currency settings for one register, loaded once when the POS starts.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     CEDAR_LBP_RATE=90000                                               │
//! │     CEDAR_DISPLAY_LBP=false                                            │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     ~/.config/cedar-pos/register.toml (Linux)                          │
//! │     ~/Library/Application Support/com.cedar.pos/register.toml (macOS)  │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     rate 89,500, LBP display on, marker "LBP"                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! # register.toml
//! [register]
//! name = "Register 1"
//!
//! [currency]
//! lbp_usd_rate = 89500.0
//! display_lbp_total = true
//! secondary_marker = "LBP"
//!
//! [labels]
//! primary_symbol = "$"
//! primary_code = "USD"
//! secondary_code = "LBP"
//! ```

use std::path::PathBuf;

use cedar_core::payment::ensure_secondary_cash;
use cedar_core::validation::validate_currency_settings;
use cedar_core::{
    resolve, CurrencyLabels, CurrencySettings, ExchangeContext, PaymentCoordinator, PaymentMethod,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use tracing::{debug, info, warn};

use crate::error::{ConfigError, ConfigResult};

/// Environment variable overriding the register name.
pub const ENV_REGISTER_NAME: &str = "CEDAR_REGISTER_NAME";
/// Environment variable overriding the LBP rate.
pub const ENV_LBP_RATE: &str = "CEDAR_LBP_RATE";
/// Environment variable toggling LBP display.
pub const ENV_DISPLAY_LBP: &str = "CEDAR_DISPLAY_LBP";
/// Environment variable overriding the payment-method marker.
pub const ENV_SECONDARY_MARKER: &str = "CEDAR_SECONDARY_MARKER";

// =============================================================================
// Register Section
// =============================================================================

/// Identity of this register.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegisterSection {
    #[serde(default = "default_register_name")]
    pub name: String,
}

fn default_register_name() -> String {
    "Register 1".to_string()
}

impl Default for RegisterSection {
    fn default() -> Self {
        RegisterSection {
            name: default_register_name(),
        }
    }
}

/// A partial `[currency]` table keeps the register defaults for the fields
/// it leaves out.
fn currency_over_defaults<'de, D>(deserializer: D) -> Result<CurrencySettings, D::Error>
where
    D: Deserializer<'de>,
{
    let from_file = CurrencySettings::deserialize(deserializer)?;
    Ok(from_file.or(CurrencySettings::register_defaults()))
}

fn default_payment_methods() -> Vec<PaymentMethod> {
    let cash = PaymentMethod {
        is_cash_count: true,
        ..PaymentMethod::new("Cash")
    };
    vec![
        cash,
        PaymentMethod::new("Card"),
        PaymentMethod::secondary_cash(),
    ]
}

// =============================================================================
// Register Config
// =============================================================================

/// Complete configuration for one register.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegisterConfig {
    #[serde(default)]
    pub register: RegisterSection,

    #[serde(
        default = "CurrencySettings::register_defaults",
        deserialize_with = "currency_over_defaults"
    )]
    pub currency: CurrencySettings,

    #[serde(default)]
    pub labels: CurrencyLabels,

    #[serde(default = "default_payment_methods")]
    pub payment_methods: Vec<PaymentMethod>,
}

impl Default for RegisterConfig {
    fn default() -> Self {
        RegisterConfig {
            register: RegisterSection::default(),
            currency: CurrencySettings::register_defaults(),
            labels: CurrencyLabels::default(),
            payment_methods: default_payment_methods(),
        }
    }
}

impl RegisterConfig {
    /// Creates a config with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (register.toml)
    /// 3. Environment variables
    pub fn load(config_path: Option<PathBuf>) -> ConfigResult<Self> {
        Self::load_with(config_path, |key| std::env::var(key).ok())
    }

    /// [`load`](Self::load) with an injectable environment lookup.
    pub fn load_with<F>(config_path: Option<PathBuf>, lookup: F) -> ConfigResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(path) = config_path.or_else(Self::default_config_path) {
            if path.exists() {
                info!(?path, "Loading register config from file");
                let contents = std::fs::read_to_string(&path)?;
                config = toml::from_str(&contents)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_overrides(lookup);

        if ensure_secondary_cash(&mut config.payment_methods) {
            debug!(register = %config.register.name, "Added missing LBP cash method");
        }

        config.validate()?;

        Ok(config)
    }

    /// Loads config or returns default if load fails.
    pub fn load_or_default(config_path: Option<PathBuf>) -> Self {
        Self::load(config_path).unwrap_or_else(|e| {
            warn!("Failed to load register config: {}. Using defaults.", e);
            Self::default()
        })
    }

    /// Saves configuration to file.
    pub fn save(&self, config_path: Option<PathBuf>) -> ConfigResult<()> {
        let path = config_path
            .or_else(Self::default_config_path)
            .ok_or(ConfigError::NoConfigPath)?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)?;
        std::fs::write(&path, contents)?;

        info!(?path, "Register config saved");
        Ok(())
    }

    /// Validates the configuration.
    pub fn validate(&self) -> ConfigResult<()> {
        validate_currency_settings(&self.currency)?;
        Ok(())
    }

    /// Applies overrides from an environment-like lookup.
    fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(name) = lookup(ENV_REGISTER_NAME) {
            self.register.name = name;
        }

        if let Some(rate) = lookup(ENV_LBP_RATE) {
            match rate.trim().parse::<Decimal>() {
                Ok(parsed) => {
                    debug!(rate = %parsed, "Overriding LBP rate from environment");
                    self.currency.rate = Some(parsed);
                }
                Err(_) => warn!(rate = %rate, "Ignoring unparseable LBP rate in environment"),
            }
        }

        if let Some(flag_text) = lookup(ENV_DISPLAY_LBP) {
            match parse_flag(&flag_text) {
                Some(flag) => self.currency.display_secondary = Some(flag),
                None => warn!(value = %flag_text, "Unknown LBP display flag in environment"),
            }
        }

        if let Some(marker) = lookup(ENV_SECONDARY_MARKER) {
            debug!(marker = %marker, "Overriding secondary marker from environment");
            self.currency.secondary_marker = Some(marker);
        }
    }

    /// Returns the default config file path.
    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "cedar", "pos")
            .map(|dirs| dirs.config_dir().join("register.toml"))
    }

    // =========================================================================
    // Convenience Methods
    // =========================================================================

    /// Resolves the currency settings for the payment screen.
    pub fn exchange_context(&self) -> ExchangeContext {
        resolve(Some(&self.currency))
    }

    /// A coordinator for a new payment screen on this register.
    pub fn coordinator(&self) -> PaymentCoordinator {
        PaymentCoordinator::from_settings(Some(&self.currency))
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
