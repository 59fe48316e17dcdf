use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ClutchError;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sport {
    AmericanFootball,
    Basketball,
    Baseball,
}

impl Sport {
    pub const ALL: [Sport; 3] = [Sport::AmericanFootball, Sport::Basketball, Sport::Baseball];

    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            Sport::AmericanFootball => "NFL (Football)",
            Sport::Basketball => "NBA (Basketball)",
            Sport::Baseball => "MLB (Baseball)",
        }
    }

    #[must_use]
    pub fn emoji(self) -> &'static str {
        match self {
            Sport::AmericanFootball => "🏈",
            Sport::Basketball => "🏀",
            Sport::Baseball => "⚾",
        }
    }

    /// Short form used in query strings and the sport selector.
    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            Sport::AmericanFootball => "nfl",
            Sport::Basketball => "nba",
            Sport::Baseball => "mlb",
        }
    }
}

impl FromStr for Sport {
    type Err = ClutchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "nfl" | "football" => Ok(Sport::AmericanFootball),
            "nba" | "basketball" => Ok(Sport::Basketball),
            "mlb" | "baseball" => Ok(Sport::Baseball),
            other => Err(ClutchError::InvalidSport(other.to_string())),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum AdvisoryCategory {
    GoNow,
    StaySeated,
    Prepare,
}

impl AdvisoryCategory {
    #[must_use]
    pub fn headline(self) -> &'static str {
        match self {
            AdvisoryCategory::GoNow => "GO NOW!",
            AdvisoryCategory::StaySeated => "STAY SEATED",
            AdvisoryCategory::Prepare => "PREPARE",
        }
    }

    #[must_use]
    pub fn light(self) -> &'static str {
        match self {
            AdvisoryCategory::GoNow => "🟢",
            AdvisoryCategory::StaySeated => "🔴",
            AdvisoryCategory::Prepare => "🟡",
        }
    }

    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            AdvisoryCategory::GoNow => "go-now",
            AdvisoryCategory::StaySeated => "stay-seated",
            AdvisoryCategory::Prepare => "prepare",
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct AdvisoryResult {
    pub category: AdvisoryCategory,
    pub headline: String,
    pub detail: String,
}
