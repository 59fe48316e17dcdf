use chrono::Local;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum FacilityCategory {
    Restroom,
    Food,
    Beverage,
}

impl FacilityCategory {
    #[must_use]
    pub fn emoji(self) -> &'static str {
        match self {
            FacilityCategory::Restroom => "🚻",
            FacilityCategory::Food => "🌭",
            FacilityCategory::Beverage => "🍺",
        }
    }
}

/// One concession or restroom location on the 100 level.
#[derive(Serialize, Clone, Copy, Debug)]
pub struct Facility {
    pub id: &'static str,
    pub display_name: &'static str,
    pub category: FacilityCategory,
}

/// The fixed roster of tracked facilities. Declaration order matters: the
/// board recommendation is the first entry found with an open line.
pub const CATALOG: [Facility; 6] = [
    Facility {
        id: "spot1",
        display_name: "Section 101 Restroom",
        category: FacilityCategory::Restroom,
    },
    Facility {
        id: "spot2",
        display_name: "Section 102 Restroom",
        category: FacilityCategory::Restroom,
    },
    Facility {
        id: "spot3",
        display_name: "Section 103 Hot Dogs",
        category: FacilityCategory::Food,
    },
    Facility {
        id: "spot4",
        display_name: "Section 104 Hot Dogs",
        category: FacilityCategory::Food,
    },
    Facility {
        id: "spot5",
        display_name: "Section 105 Beer",
        category: FacilityCategory::Beverage,
    },
    Facility {
        id: "spot6",
        display_name: "Section 106 Beer",
        category: FacilityCategory::Beverage,
    },
];

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct FacilityStatus {
    pub facility_id: String,
    pub is_busy: bool,
    pub wait_minutes: u16,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Recommendation {
    Spot {
        facility_id: String,
        display_name: String,
    },
    AllBusy,
}

/// One full board result as stored by the web layer: six statuses in catalog
/// order, the recommendation derived from them, and a display timestamp.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct BoardSnapshot {
    pub statuses: Vec<FacilityStatus>,
    pub recommendation: Recommendation,
    pub refreshed_at: String,
}

impl BoardSnapshot {
    #[must_use]
    pub fn new(statuses: Vec<FacilityStatus>, recommendation: Recommendation) -> Self {
        Self {
            statuses,
            recommendation,
            refreshed_at: Local::now().format("%-I:%M %p").to_string(),
        }
    }
}
