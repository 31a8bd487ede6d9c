//! The two competing sides.

use std::fmt;
use std::str::FromStr;

use clash_core::error::DomainError;
use serde::{Deserialize, Serialize};

/// One of the two teams. There are never more.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Team {
    /// Team Gold.
    Gold,
    /// Team Premium.
    Premium,
}

impl Team {
    /// Both teams, gold first.
    pub const ALL: [Self; 2] = [Self::Gold, Self::Premium];

    /// Lowercase wire name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Gold => "gold",
            Self::Premium => "premium",
        }
    }

    /// The opposing team.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::Gold => Self::Premium,
            Self::Premium => Self::Gold,
        }
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Team {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "gold" => Ok(Self::Gold),
            "premium" => Ok(Self::Premium),
            other => Err(DomainError::InvalidAction(format!(
                "unknown team: {other:?}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_accepts_both_teams_case_insensitively() {
        assert_eq!("gold".parse::<Team>().unwrap(), Team::Gold);
        assert_eq!(" Premium ".parse::<Team>().unwrap(), Team::Premium);
    }

    #[test]
    fn test_from_str_rejects_unknown_team() {
        // Act
        let result = "silver".parse::<Team>();

        // Assert
        match result {
            Err(DomainError::InvalidAction(msg)) => assert!(msg.contains("silver")),
            other => panic!("expected InvalidAction, got {other:?}"),
        }
    }

    #[test]
    fn test_other_swaps_sides() {
        assert_eq!(Team::Gold.other(), Team::Premium);
        assert_eq!(Team::Premium.other(), Team::Gold);
    }

    #[test]
    fn test_display_matches_serde_name() {
        for team in Team::ALL {
            let json = serde_json::to_string(&team).unwrap();
            assert_eq!(json, format!("\"{team}\""));
        }
    }
}
