use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::profile::ConfigError;

/// Deployment context a page can be served from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Environment {
    Development,
    Testing,
    Production,
    GithubPages,
}

impl Environment {
    pub const ALL: [Self; 4] = [
        Self::Development,
        Self::Testing,
        Self::Production,
        Self::GithubPages,
    ];

    /// Key used for this environment in profile tables.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Testing => "testing",
            Self::Production => "production",
            Self::GithubPages => "github-pages",
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Environment {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|env| env.as_str() == s)
            .ok_or_else(|| ConfigError::UnknownEnvironment(s.to_string()))
    }
}

/// Hostname and protocol observed on the running page.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RuntimeSignal {
    pub hostname: String,
    pub protocol: String,
}

impl RuntimeSignal {
    #[must_use]
    pub fn new(hostname: impl Into<String>, protocol: impl Into<String>) -> Self {
        Self {
            hostname: hostname.into(),
            protocol: protocol.into(),
        }
    }

    /// Scheme without the trailing colon browsers report in `location.protocol`.
    #[must_use]
    pub fn scheme(&self) -> &str {
        self.protocol
            .strip_suffix(':')
            .unwrap_or(self.protocol.as_str())
    }
}

/// Classify a page by its hostname and scheme.
///
/// First match wins: loopback hosts, then `github.io` hosts, then `file`
/// pages. Everything else is production.
#[must_use]
pub fn resolve_environment(signal: &RuntimeSignal) -> Environment {
    let env = if signal.hostname == "localhost" || signal.hostname == "127.0.0.1" {
        Environment::Development
    } else if signal.hostname.contains("github.io") {
        Environment::GithubPages
    } else if signal.scheme() == "file" {
        Environment::Development
    } else {
        Environment::Production
    };
    log::debug!(
        "classified host {:?} ({}) as {env}",
        signal.hostname,
        signal.protocol
    );
    env
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loopback_hosts_win_over_scheme() {
        for host in ["localhost", "127.0.0.1"] {
            for proto in ["http:", "https:", "file:", ""] {
                assert_eq!(
                    resolve_environment(&RuntimeSignal::new(host, proto)),
                    Environment::Development,
                    "{host} over {proto}"
                );
            }
        }
    }

    #[test]
    fn github_io_substring_selects_pages() {
        let signal = RuntimeSignal::new("foo.github.io", "https:");
        assert_eq!(resolve_environment(&signal), Environment::GithubPages);
        let file_pages = RuntimeSignal::new("mirror.github.io.example", "file:");
        assert_eq!(resolve_environment(&file_pages), Environment::GithubPages);
    }

    #[test]
    fn file_scheme_accepts_both_forms() {
        assert_eq!(
            resolve_environment(&RuntimeSignal::new("", "file:")),
            Environment::Development
        );
        assert_eq!(
            resolve_environment(&RuntimeSignal::new("share.local", "file")),
            Environment::Development
        );
    }

    #[test]
    fn unmatched_hosts_fall_through_to_production() {
        assert_eq!(
            resolve_environment(&RuntimeSignal::new("example.com", "https:")),
            Environment::Production
        );
        assert_eq!(
            resolve_environment(&RuntimeSignal::new("LOCALHOST", "http:")),
            Environment::Production
        );
        assert_eq!(
            resolve_environment(&RuntimeSignal::default()),
            Environment::Production
        );
    }

    #[test]
    fn names_round_trip_through_from_str() {
        for env in Environment::ALL {
            assert_eq!(env.as_str().parse::<Environment>().unwrap(), env);
        }
        let err = "staging".parse::<Environment>().unwrap_err();
        assert!(matches!(err, ConfigError::UnknownEnvironment(name) if name == "staging"));
    }

    #[test]
    fn serde_names_match_table_keys() {
        let json = serde_json::to_string(&Environment::GithubPages).unwrap();
        assert_eq!(json, "\"github-pages\"");
    }
}
