use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;
use serde::Serialize;
use thiserror::Error;

/// Implementations available for the logging slot.
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq, Hash, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LoggerVersion {
    /// Retired plain-text logger, kept selectable for comparison.
    V1,
    #[default]
    V2,
}

impl LoggerVersion {
    pub fn as_str(&self) -> &'static str {
        match self {
            LoggerVersion::V1 => "v1",
            LoggerVersion::V2 => "v2",
        }
    }
}

impl fmt::Display for LoggerVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown logger version `{0}` (expected v1 or v2)")]
pub struct ParseLoggerVersionError(pub String);

impl FromStr for LoggerVersion {
    type Err = ParseLoggerVersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "v1" | "1" => Ok(LoggerVersion::V1),
            "v2" | "2" => Ok(LoggerVersion::V2),
            other => Err(ParseLoggerVersionError(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("v1", LoggerVersion::V1)]
    #[case("V2", LoggerVersion::V2)]
    #[case(" 2 ", LoggerVersion::V2)]
    #[case("1", LoggerVersion::V1)]
    fn parses_known_versions(#[case] input: &str, #[case] expected: LoggerVersion) {
        assert_eq!(input.parse::<LoggerVersion>(), Ok(expected));
    }

    #[test]
    fn rejects_unknown_version() {
        let err = "v3".parse::<LoggerVersion>().unwrap_err();
        assert_eq!(err, ParseLoggerVersionError("v3".into()));
        assert!(err.to_string().contains("v3"));
    }

    #[test]
    fn defaults_to_v2() {
        assert_eq!(LoggerVersion::default(), LoggerVersion::V2);
    }
}
