// Rolling window tokens for dashboard range selection
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const MS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// Rejected range token, carrying the offending input for logs and 4xx bodies.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid range token: {0:?}")]
pub struct InvalidRangeToken(pub String);

/// Named rolling window measured back from "now".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RangeToken {
    #[serde(rename = "1d")]
    Day1,
    #[default]
    #[serde(rename = "7d")]
    Day7,
    #[serde(rename = "14d")]
    Day14,
    #[serde(rename = "30d")]
    Day30,
}

impl RangeToken {
    pub const ALL: [RangeToken; 4] = [
        RangeToken::Day1,
        RangeToken::Day7,
        RangeToken::Day14,
        RangeToken::Day30,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RangeToken::Day1 => "1d",
            RangeToken::Day7 => "7d",
            RangeToken::Day14 => "14d",
            RangeToken::Day30 => "30d",
        }
    }

    /// Window length in milliseconds.
    pub fn duration_ms(&self) -> i64 {
        match self {
            RangeToken::Day1 => MS_PER_DAY,
            RangeToken::Day7 => 7 * MS_PER_DAY,
            RangeToken::Day14 => 14 * MS_PER_DAY,
            RangeToken::Day30 => 30 * MS_PER_DAY,
        }
    }

    /// Human title fragment shown in dashboard headings.
    pub fn label(&self) -> &'static str {
        match self {
            RangeToken::Day1 => "Last 24 Hours",
            RangeToken::Day7 => "Last 7 Days",
            RangeToken::Day14 => "Last 14 Days",
            RangeToken::Day30 => "Last 30 Days",
        }
    }

    /// Lenient parse used at the HTTP edge: any unknown token falls back to
    /// the seven-day window instead of failing the request. Callers that
    /// want strict validation go through [`FromStr`].
    pub fn parse_or_default(token: &str) -> Self {
        token.parse().unwrap_or_default()
    }
}

impl FromStr for RangeToken {
    type Err = InvalidRangeToken;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1d" => Ok(RangeToken::Day1),
            "7d" => Ok(RangeToken::Day7),
            "14d" => Ok(RangeToken::Day14),
            "30d" => Ok(RangeToken::Day30),
            other => Err(InvalidRangeToken(other.to_string())),
        }
    }
}

impl fmt::Display for RangeToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_tokens() {
        assert_eq!("1d".parse::<RangeToken>().unwrap(), RangeToken::Day1);
        assert_eq!("7d".parse::<RangeToken>().unwrap(), RangeToken::Day7);
        assert_eq!("14d".parse::<RangeToken>().unwrap(), RangeToken::Day14);
        assert_eq!("30d".parse::<RangeToken>().unwrap(), RangeToken::Day30);
    }

    #[test]
    fn test_parse_rejects_unknown_tokens() {
        let err = "99d".parse::<RangeToken>().unwrap_err();
        assert_eq!(err, InvalidRangeToken("99d".to_string()));
        assert!("1D".parse::<RangeToken>().is_err());
        assert!("7".parse::<RangeToken>().is_err());
        assert!("".parse::<RangeToken>().is_err());
    }

    #[test]
    fn test_parse_or_default_falls_back_to_seven_days() {
        assert_eq!(RangeToken::parse_or_default("99d"), RangeToken::Day7);
        assert_eq!(RangeToken::parse_or_default(""), RangeToken::Day7);
        assert_eq!(RangeToken::parse_or_default("1d"), RangeToken::Day1);
    }

    #[test]
    fn test_durations_are_strictly_increasing() {
        for pair in RangeToken::ALL.windows(2) {
            assert!(pair[0].duration_ms() < pair[1].duration_ms());
        }
        assert_eq!(RangeToken::Day1.duration_ms(), 86_400_000);
        assert_eq!(RangeToken::Day30.duration_ms(), 30 * 86_400_000);
    }

    #[test]
    fn test_serde_round_trip_uses_short_tokens() {
        assert_eq!(serde_json::to_string(&RangeToken::Day14).unwrap(), "\"14d\"");
        let parsed: RangeToken = serde_json::from_str("\"30d\"").unwrap();
        assert_eq!(parsed, RangeToken::Day30);
    }
}
