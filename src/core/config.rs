//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.numera/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{LevelFilter, debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::core::engine::{Limits, NUMBER_MAX_CEILING};
use crate::core::engine::factorial::MAX_FACTORIAL;
use crate::core::topic::TopicId;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct NumeraConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub limits: LimitsConfig,
    #[serde(default)]
    pub defaults: DefaultsConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub log_level: Option<String>,
    pub start_topic: Option<TopicId>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct LimitsConfig {
    pub factorial_max: Option<u32>,
    pub prime_limit_max: Option<u64>,
    pub max_operands: Option<usize>,
    pub number_max: Option<u64>,
}

/// Text pre-filled in the execute page's input box.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct DefaultsConfig {
    pub divisibility: Option<String>,
    pub factorization: Option<String>,
    pub prime_limit: Option<String>,
    pub factorial: Option<String>,
    pub operands: Option<String>,
}

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefaultInputs {
    pub divisibility: String,
    pub factorization: String,
    pub prime_limit: String,
    pub factorial: String,
    pub operands: String,
}

impl Default for DefaultInputs {
    fn default() -> Self {
        Self {
            divisibility: "12".into(),
            factorization: "24".into(),
            prime_limit: "50".into(),
            factorial: "5".into(),
            operands: "12 18".into(),
        }
    }
}

impl DefaultInputs {
    pub fn for_topic(&self, topic: TopicId) -> &str {
        match topic {
            TopicId::Divisibility => &self.divisibility,
            TopicId::FundamentalTheorem => &self.factorization,
            TopicId::Primes => &self.prime_limit,
            TopicId::Recursion => &self.factorial,
            TopicId::GcdLcm => &self.operands,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub log_level: LevelFilter,
    pub start_topic: Option<TopicId>,
    pub limits: Limits,
    pub default_inputs: DefaultInputs,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        resolve_with(&NumeraConfig::default(), None, |_| None)
    }
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.numera/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".numera").join("config.toml"))
}

/// Load config from `~/.numera/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `NumeraConfig::default()`.
pub fn load_config() -> Result<NumeraConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(NumeraConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(NumeraConfig::default());
    }

    load_config_from(&path)
}

/// Load config from an explicit path. A missing file is an error here.
pub fn load_config_from(path: &Path) -> Result<NumeraConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: NumeraConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

fn generate_default_config(path: &Path) {
    let default_content = r#"# Numera Configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# log_level = "debug"                 # "off", "error", "warn", "info", "debug", "trace"
# start_topic = "primes"              # open straight on a topic's definition

# [limits]
# factorial_max = 20                  # cannot exceed 20
# prime_limit_max = 100000
# max_operands = 10                   # GCD/LCM inputs
# number_max = 1000000000000          # divisibility and factorization inputs, at most 10^15

# [defaults]
# divisibility = "12"
# factorization = "24"
# prime_limit = "50"
# factorial = "5"
# operands = "12 18"
"#;

    if let Some(parent) = path.parent()
        && let Err(e) = fs::create_dir_all(parent)
    {
        warn!("Failed to create config directory: {}", e);
        return;
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

fn env_parsed<T: FromStr>(env: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T> {
    let raw = env(key)?;
    match raw.trim().parse() {
        Ok(v) => Some(v),
        Err(_) => {
            warn!("Ignoring {}={:?}: not a valid value", key, raw);
            None
        }
    }
}

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
///
/// `cli_topic` comes from `--topic` (None = not specified).
pub fn resolve(config: &NumeraConfig, cli_topic: Option<TopicId>) -> ResolvedConfig {
    resolve_with(config, cli_topic, |key| std::env::var(key).ok())
}

/// [`resolve`] against an explicit environment lookup.
pub fn resolve_with(
    config: &NumeraConfig,
    cli_topic: Option<TopicId>,
    env: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    // Log level: env → config → default
    let log_level = env_parsed::<LevelFilter>(&env, "NUMERA_LOG_LEVEL")
        .or_else(|| {
            config
                .general
                .log_level
                .as_deref()
                .and_then(|s| LevelFilter::from_str(s).ok())
        })
        .unwrap_or(LevelFilter::Debug);

    // Start topic: CLI → config
    let start_topic = cli_topic.or(config.general.start_topic);

    let defaults = Limits::default();
    let requested_factorial_max = env_parsed::<u32>(&env, "NUMERA_FACTORIAL_MAX")
        .or(config.limits.factorial_max)
        .unwrap_or(defaults.factorial_max);
    if requested_factorial_max > MAX_FACTORIAL {
        warn!(
            "factorial_max {} exceeds {}, clamping",
            requested_factorial_max, MAX_FACTORIAL
        );
    }

    let requested_number_max = env_parsed::<u64>(&env, "NUMERA_NUMBER_MAX")
        .or(config.limits.number_max)
        .unwrap_or(defaults.number_max);
    if requested_number_max > NUMBER_MAX_CEILING {
        warn!(
            "number_max {} exceeds {}, clamping",
            requested_number_max, NUMBER_MAX_CEILING
        );
    }
    let limits = Limits {
        factorial_max: requested_factorial_max.min(MAX_FACTORIAL),
        prime_limit_max: env_parsed::<u64>(&env, "NUMERA_PRIME_LIMIT_MAX")
            .or(config.limits.prime_limit_max)
            .unwrap_or(defaults.prime_limit_max)
            .max(1),
        max_operands: env_parsed::<usize>(&env, "NUMERA_MAX_OPERANDS")
            .or(config.limits.max_operands)
            .unwrap_or(defaults.max_operands)
            .max(2),
        number_max: requested_number_max.clamp(2, NUMBER_MAX_CEILING),
    };

    let fallback = DefaultInputs::default();
    let pick = |value: &Option<String>, fallback: String| value.clone().unwrap_or(fallback);
    let default_inputs = DefaultInputs {
        divisibility: pick(&config.defaults.divisibility, fallback.divisibility),
        factorization: pick(&config.defaults.factorization, fallback.factorization),
        prime_limit: pick(&config.defaults.prime_limit, fallback.prime_limit),
        factorial: pick(&config.defaults.factorial, fallback.factorial),
        operands: pick(&config.defaults.operands, fallback.operands),
    };

    ResolvedConfig {
        log_level,
        start_topic,
        limits,
        default_inputs,
    }
}
