use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::error::ConfigError;
use crate::select::DEFAULT_MIN_DISTANCE;

pub const DEFAULT_SIZE: usize = 10;

pub const SIZE_VAR: &str = "MAZE_SIZE";
pub const MIN_DISTANCE_VAR: &str = "MAZE_MIN_DISTANCE";
pub const SEED_VAR: &str = "MAZE_SEED";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub size: usize,
    pub min_distance: usize,
    /// Fixed seed for reproducible mazes; entropy when unset.
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            min_distance: DEFAULT_MIN_DISTANCE,
            seed: None,
        }
    }
}

impl Settings {
    /// Reads settings from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|var| std::env::var(var).ok())
    }

    /// Parses settings through `lookup`; unset variables keep their default.
    pub fn from_vars<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = Self::default();
        if let Some(size) = parse_var(&lookup, SIZE_VAR)? {
            if size < 2 {
                return Err(ConfigError::SizeTooSmall(size as usize));
            }
            settings.size = size as usize;
        }
        if let Some(min_distance) = parse_var(&lookup, MIN_DISTANCE_VAR)? {
            if min_distance == 0 {
                return Err(ConfigError::MinDistanceZero);
            }
            settings.min_distance = min_distance as usize;
        }
        settings.seed = parse_var(&lookup, SEED_VAR)?;
        Ok(settings)
    }

    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

fn parse_var<F>(lookup: &F, var: &'static str) -> Result<Option<u64>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(var) {
        None => Ok(None),
        Some(value) => value
            .trim()
            .parse::<u64>()
            .map(Some)
            .map_err(|_| ConfigError::NotANumber { var, value }),
    }
}
