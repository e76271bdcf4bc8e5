use serde::{Deserialize, Serialize};
use std::fs;

use sniper_engine::game::{GameConfig, MAX_PLAYERS, MIN_PLAYERS};
use sniper_engine::player::STARTING_CHIPS;
use sniper_engine::economy::ESCAPE_THRESHOLD;

pub const DEFAULT_PLAYERS: usize = 4;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub players: usize,
    pub starting_chips: u32,
    pub escape_threshold: u32,
    pub fold_on_minimum_bet: bool,
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub players: ValueSource,
    pub starting_chips: ValueSource,
    pub escape_threshold: ValueSource,
    pub fold_on_minimum_bet: ValueSource,
    pub seed: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            players: ValueSource::Default,
            starting_chips: ValueSource::Default,
            escape_threshold: ValueSource::Default,
            fold_on_minimum_bet: ValueSource::Default,
            seed: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            players: DEFAULT_PLAYERS,
            starting_chips: STARTING_CHIPS,
            escape_threshold: ESCAPE_THRESHOLD,
            fold_on_minimum_bet: true,
            seed: None,
        }
    }
}

impl Config {
    pub fn game_config(&self) -> GameConfig {
        GameConfig {
            starting_chips: self.starting_chips,
            escape_threshold: self.escape_threshold,
            fold_on_minimum_bet: self.fold_on_minimum_bet,
        }
    }

    /// Seat names `P1..Pn`.
    pub fn player_names(&self) -> Vec<String> {
        (1..=self.players).map(|i| format!("P{}", i)).collect()
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Invalid(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}
impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "cannot read config file: {}", e),
            ConfigError::Parse(e) => write!(f, "cannot parse config file: {}", e),
            ConfigError::Invalid(msg) => write!(f, "{}", msg),
        }
    }
}

pub fn load() -> Result<Config, ConfigError> {
    load_with_sources().map(|resolved| resolved.config)
}

/// Defaults, then the TOML file named by `SNIPER_CONFIG`, then `SNIPER_*` variables.
pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var("SNIPER_CONFIG")
        && !path.is_empty()
    {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.players {
            cfg.players = v;
            sources.players = ValueSource::File;
        }
        if let Some(v) = f.starting_chips {
            cfg.starting_chips = v;
            sources.starting_chips = ValueSource::File;
        }
        if let Some(v) = f.escape_threshold {
            cfg.escape_threshold = v;
            sources.escape_threshold = ValueSource::File;
        }
        if let Some(v) = f.fold_on_minimum_bet {
            cfg.fold_on_minimum_bet = v;
            sources.fold_on_minimum_bet = ValueSource::File;
        }
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
    }

    if let Some(v) = env_value("SNIPER_SEED")? {
        cfg.seed = Some(v);
        sources.seed = ValueSource::Env;
    }
    if let Some(v) = env_value("SNIPER_PLAYERS")? {
        cfg.players = v;
        sources.players = ValueSource::Env;
    }
    if let Some(v) = env_value("SNIPER_STARTING_CHIPS")? {
        cfg.starting_chips = v;
        sources.starting_chips = ValueSource::Env;
    }
    if let Some(v) = env_value("SNIPER_ESCAPE_THRESHOLD")? {
        cfg.escape_threshold = v;
        sources.escape_threshold = ValueSource::Env;
    }
    if let Ok(fold) = std::env::var("SNIPER_FOLD_ON_MIN_BET")
        && !fold.is_empty()
    {
        cfg.fold_on_minimum_bet = parse_bool(&fold).ok_or_else(|| {
            ConfigError::Invalid("Invalid SNIPER_FOLD_ON_MIN_BET".into())
        })?;
        sources.fold_on_minimum_bet = ValueSource::Env;
    }

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

fn env_value<T: std::str::FromStr>(key: &str) -> Result<Option<T>, ConfigError> {
    match std::env::var(key) {
        Ok(v) if !v.is_empty() => v
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::Invalid(format!("Invalid {}: {:?}", key, v))),
        _ => Ok(None),
    }
}

#[derive(Debug, Deserialize)]
struct FileConfig {
    #[serde(default)]
    players: Option<usize>,
    #[serde(default)]
    starting_chips: Option<u32>,
    #[serde(default)]
    escape_threshold: Option<u32>,
    #[serde(default)]
    fold_on_minimum_bet: Option<bool>,
    #[serde(default)]
    seed: Option<u64>,
}

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&cfg.players) {
        return Err(ConfigError::Invalid(format!(
            "Invalid configuration: players must be between {} and {}",
            MIN_PLAYERS, MAX_PLAYERS
        )));
    }
    cfg.game_config()
        .validate()
        .map_err(|e| ConfigError::Invalid(e.to_string()))
}

fn parse_bool(s: &str) -> Option<bool> {
    match s.to_ascii_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => Some(true),
        "0" | "false" | "off" | "no" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_table_rules() {
        let cfg = Config::default();
        assert_eq!(cfg.players, 4);
        assert_eq!(cfg.game_config(), GameConfig::default());
        assert!(validate(&cfg).is_ok());
    }

    #[test]
    fn player_names_are_numbered_from_one() {
        let cfg = Config {
            players: 3,
            ..Config::default()
        };
        assert_eq!(cfg.player_names(), vec!["P1", "P2", "P3"]);
    }

    #[test]
    fn validate_rejects_bad_tables() {
        let too_many = Config {
            players: 19,
            ..Config::default()
        };
        assert!(matches!(validate(&too_many), Err(ConfigError::Invalid(_))));
        let low_threshold = Config {
            escape_threshold: 10,
            ..Config::default()
        };
        assert!(validate(&low_threshold).is_err());
    }

    #[test]
    fn parse_bool_variants() {
        assert_eq!(parse_bool("YES"), Some(true));
        assert_eq!(parse_bool("off"), Some(false));
        assert_eq!(parse_bool("maybe"), None);
    }
}
