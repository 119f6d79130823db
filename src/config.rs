use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::ai::{
    Evaluator, MinimaxStrategy, PatternEvaluator, PatternWeights, RandomStrategy, SearchConfig, Strategy,
    ThreatEvaluator,
};
use crate::error::ConfigError;
use crate::game::Player;

/// Deepest search the configuration accepts.
pub const MAX_SEARCH_DEPTH: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyKind {
    #[default]
    Search,
    Random,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EvaluatorKind {
    #[default]
    Pattern,
    Threat,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EvaluatorConfig {
    pub kind: EvaluatorKind,
    /// Only used by the pattern evaluator.
    pub weights: PatternWeights,
}

impl EvaluatorConfig {
    pub fn build(&self) -> Box<dyn Evaluator> {
        match self.kind {
            EvaluatorKind::Pattern => Box::new(PatternEvaluator::new(self.weights)),
            EvaluatorKind::Threat => Box::new(ThreatEvaluator),
        }
    }
}

/// How one seat picks its moves.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    pub strategy: StrategyKind,
    /// Seed for the random strategy; fresh entropy when absent.
    pub seed: Option<u64>,
    pub search: SearchConfig,
    pub evaluator: EvaluatorConfig,
}

impl PlayerConfig {
    /// Build the strategy for `side`.
    pub fn build(&self, side: Player) -> Box<dyn Strategy> {
        match self.strategy {
            StrategyKind::Search => Box::new(MinimaxStrategy::with_evaluator(
                side,
                self.search.clone(),
                self.evaluator.build(),
            )),
            StrategyKind::Random => match self.seed {
                Some(seed) => Box::new(RandomStrategy::seeded(side, seed)),
                None => Box::new(RandomStrategy::new(side)),
            },
        }
    }

    fn validate(&self, prefix: &str) -> Result<(), ConfigError> {
        if self.strategy == StrategyKind::Search
            && !(1..=MAX_SEARCH_DEPTH).contains(&self.search.depth)
        {
            return Err(ConfigError::Validation(format!(
                "{prefix}.search.depth must be in [1, {MAX_SEARCH_DEPTH}]"
            )));
        }

        let w = &self.evaluator.weights;
        if w.one < 0 {
            return Err(ConfigError::Validation(format!(
                "{prefix}.evaluator.weights.one must be >= 0"
            )));
        }
        if !(w.four >= w.three && w.three >= w.two && w.two >= w.one) {
            return Err(ConfigError::Validation(format!(
                "{prefix}.evaluator.weights must satisfy four >= three >= two >= one"
            )));
        }

        Ok(())
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub games: usize,
    pub player_one: PlayerConfig,
    pub player_two: PlayerConfig,
}

impl Default for AppConfig {
    /// Plain minimax as the first player against alpha-beta, both at the
    /// default depth.
    fn default() -> Self {
        let mut player_one = PlayerConfig::default();
        player_one.search.pruning = false;
        AppConfig {
            games: 1,
            player_one,
            player_two: PlayerConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.games == 0 {
            return Err(ConfigError::Validation("games must be > 0".into()));
        }
        self.player_one.validate("player_one")?;
        self.player_two.validate("player_two")?;
        Ok(())
    }

    /// Config for the seat of `side`.
    pub fn player(&self, side: Player) -> &PlayerConfig {
        match side {
            Player::One => &self.player_one,
            Player::Two => &self.player_two,
        }
    }

    /// Generate a TOML string with all default values.
    pub fn default_toml() -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(&AppConfig::default())
    }
}
