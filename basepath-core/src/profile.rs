//! Deployment profiles and the table that maps environments onto them.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::OnceLock;
use thiserror::Error;

use crate::environment::{Environment, RuntimeSignal, resolve_environment};

/// Errors raised while loading or naming profile tables.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unknown environment `{0}`")]
    UnknownEnvironment(String),
    #[error("profile table is missing `{0}`")]
    MissingEnvironment(&'static str),
    #[error("profile table JSON is invalid: {0}")]
    Json(#[from] serde_json::Error),
}

/// Which URL prefix of a profile a path is built against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PathField {
    Base,
    #[default]
    Assets,
    Games,
}

impl PathField {
    /// Parse a selector name; unknown names yield `None`.
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "base" => Some(Self::Base),
            "assets" => Some(Self::Assets),
            "games" => Some(Self::Games),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Base => "base",
            Self::Assets => "assets",
            Self::Games => "games",
        }
    }
}

/// URL prefixes used by one deployment environment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub base: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assets: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub games: Option<String>,
}

impl Profile {
    #[must_use]
    pub fn new(base: &str, assets: &str, games: &str) -> Self {
        Self {
            base: base.to_string(),
            assets: Some(assets.to_string()),
            games: Some(games.to_string()),
        }
    }

    /// Profile carrying only a `base`, used for explicit overrides.
    #[must_use]
    pub fn with_base(base: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            assets: None,
            games: None,
        }
    }

    /// Prefix for `field`, or `base` when that field is absent or empty.
    #[must_use]
    pub fn field(&self, field: PathField) -> &str {
        let selected = match field {
            PathField::Base => None,
            PathField::Assets => self.assets.as_deref(),
            PathField::Games => self.games.as_deref(),
        };
        selected
            .filter(|prefix| !prefix.is_empty())
            .unwrap_or(self.base.as_str())
    }

    /// Prefix for a selector given by name. Unknown names select `base`.
    #[must_use]
    pub fn select(&self, name: &str) -> &str {
        PathField::parse(name).map_or(self.base.as_str(), |field| self.field(field))
    }
}

/// The four deployment profiles, keyed by environment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileTable {
    development: Profile,
    testing: Profile,
    production: Profile,
    #[serde(rename = "github-pages")]
    github_pages: Profile,
}

impl Default for ProfileTable {
    fn default() -> Self {
        Self {
            development: Profile::new("./", "./", "./"),
            testing: Profile::new(
                "/miaoda-games-demo/test/",
                "/miaoda-games-demo/test/",
                "/miaoda-games-demo/test/",
            ),
            production: Profile::new(
                "https://cdn.example.com/games/",
                "https://cdn.example.com/assets/",
                "https://games.example.com/",
            ),
            github_pages: Profile::new(
                "/miaoda-games-demo/",
                "/miaoda-games-demo/assets/",
                "/miaoda-games-demo/games/",
            ),
        }
    }
}

impl ProfileTable {
    /// Shared table of the built-in deployment profiles.
    #[must_use]
    pub fn builtin() -> &'static Self {
        static TABLE: OnceLock<ProfileTable> = OnceLock::new();
        TABLE.get_or_init(Self::default)
    }

    /// Parse a table from a JSON object keyed by environment name.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed, names an unknown
    /// environment, or omits one of the four environments.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let raw: BTreeMap<String, Profile> = serde_json::from_str(json)?;
        let mut entries = BTreeMap::new();
        for (name, profile) in raw {
            entries.insert(name.parse::<Environment>()?, profile);
        }
        let mut take = |env: Environment| {
            entries
                .remove(&env)
                .ok_or(ConfigError::MissingEnvironment(env.as_str()))
        };
        Ok(Self {
            development: take(Environment::Development)?,
            testing: take(Environment::Testing)?,
            production: take(Environment::Production)?,
            github_pages: take(Environment::GithubPages)?,
        })
    }

    #[must_use]
    pub const fn get(&self, env: Environment) -> &Profile {
        match env {
            Environment::Development => &self.development,
            Environment::Testing => &self.testing,
            Environment::Production => &self.production,
            Environment::GithubPages => &self.github_pages,
        }
    }

    /// Profile for the environment the signal classifies as.
    #[must_use]
    pub fn resolve(&self, signal: &RuntimeSignal) -> &Profile {
        self.get(resolve_environment(signal))
    }

    pub fn iter(&self) -> impl Iterator<Item = (Environment, &Profile)> {
        Environment::ALL.into_iter().map(|env| (env, self.get(env)))
    }
}
