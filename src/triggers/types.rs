//! Trigger type definitions

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::TriggerError;

/// Switch identifier in the host's flag store
pub type FlagId = u32;

/// The player's current way of getting around
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TravelMode {
    Walk,
    Boat,
    Ship,
    Airship,
}

impl TravelMode {
    /// All travel modes, in keyword order
    pub const ALL: [TravelMode; 4] = [
        TravelMode::Walk,
        TravelMode::Boat,
        TravelMode::Ship,
        TravelMode::Airship,
    ];

    /// Keyword used in trigger annotations and by the host's vehicle type
    pub fn keyword(&self) -> &'static str {
        match self {
            TravelMode::Walk => "walk",
            TravelMode::Boat => "boat",
            TravelMode::Ship => "ship",
            TravelMode::Airship => "airship",
        }
    }

    /// Match a lowercase keyword
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        TravelMode::ALL.into_iter().find(|m| m.keyword() == keyword)
    }

    fn bit(&self) -> u8 {
        match self {
            TravelMode::Walk => 0b0001,
            TravelMode::Boat => 0b0010,
            TravelMode::Ship => 0b0100,
            TravelMode::Airship => 0b1000,
        }
    }
}

impl fmt::Display for TravelMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

impl FromStr for TravelMode {
    type Err = TriggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TravelMode::from_keyword(&s.trim().to_lowercase())
            .ok_or_else(|| TriggerError::InvalidTravelMode(s.to_string()))
    }
}

/// A set of travel modes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TravelModes(u8);

impl Default for TravelModes {
    /// Every mode, matching an annotation without mode keywords
    fn default() -> Self {
        TravelModes::ALL
    }
}

impl TravelModes {
    /// No modes
    pub const NONE: TravelModes = TravelModes(0);

    /// Every mode
    pub const ALL: TravelModes = TravelModes(0b1111);

    /// Add a mode to the set
    pub fn insert(&mut self, mode: TravelMode) {
        self.0 |= mode.bit();
    }

    /// Check whether a mode is in the set
    pub fn contains(&self, mode: TravelMode) -> bool {
        self.0 & mode.bit() != 0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Iterate the modes in the set
    pub fn iter(&self) -> impl Iterator<Item = TravelMode> + '_ {
        TravelMode::ALL.into_iter().filter(|m| self.contains(*m))
    }
}

impl FromIterator<TravelMode> for TravelModes {
    fn from_iter<I: IntoIterator<Item = TravelMode>>(iter: I) -> Self {
        let mut modes = TravelModes::NONE;
        for mode in iter {
            modes.insert(mode);
        }
        modes
    }
}

/// One of the distance rules a trigger can carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DistanceRule {
    /// Any tile within this Manhattan distance
    Radius(u32),

    /// Same row, within this distance
    XAxis(u32),

    /// Same column, within this distance
    YAxis(u32),
}

/// Parsed form of an object's trigger annotation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriggerSpec {
    /// Manhattan radius rule
    pub radius: Option<u32>,

    /// Row rule: same y, within this distance
    pub x_range: Option<u32>,

    /// Column rule: same x, within this distance
    pub y_range: Option<u32>,

    /// Switch turned ON when the trigger fires; while ON the trigger is suppressed.
    /// Always positive when present.
    pub latch: Option<FlagId>,

    /// Travel modes the trigger is active for
    pub allowed_modes: TravelModes,
}

impl Default for TriggerSpec {
    /// Exact tile only, any travel mode
    fn default() -> Self {
        Self {
            radius: Some(0),
            x_range: None,
            y_range: None,
            latch: None,
            allowed_modes: TravelModes::ALL,
        }
    }
}

impl TriggerSpec {
    /// Configured rules, in evaluation order (radius, x-axis, y-axis)
    pub fn rules(&self) -> impl Iterator<Item = DistanceRule> {
        [
            self.radius.map(DistanceRule::Radius),
            self.x_range.map(DistanceRule::XAxis),
            self.y_range.map(DistanceRule::YAxis),
        ]
        .into_iter()
        .flatten()
    }

    /// Check whether the trigger is active for a travel mode
    pub fn allows(&self, mode: TravelMode) -> bool {
        self.allowed_modes.contains(mode)
    }
}
