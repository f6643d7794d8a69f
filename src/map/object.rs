//! Map object types

use serde::{Deserialize, Serialize};

use super::notes::{extract_metadata, MetaValue};
use crate::TriggerError;

/// A tile position on the map
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    /// Create a new position
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// How a map event gets started, using the host's trigger codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum TriggerKind {
    ActionButton = 0,
    PlayerTouch = 1,
    EventTouch = 2,
    Autorun = 3,
    Parallel = 4,
}

impl TriggerKind {
    /// Whether this kind takes part in distance evaluation
    pub fn is_touch_trigger(&self) -> bool {
        matches!(self, TriggerKind::EventTouch)
    }
}

impl TryFrom<u8> for TriggerKind {
    type Error = TriggerError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(TriggerKind::ActionButton),
            1 => Ok(TriggerKind::PlayerTouch),
            2 => Ok(TriggerKind::EventTouch),
            3 => Ok(TriggerKind::Autorun),
            4 => Ok(TriggerKind::Parallel),
            other => Err(TriggerError::UnknownTriggerKind(other)),
        }
    }
}

impl From<TriggerKind> for u8 {
    fn from(kind: TriggerKind) -> Self {
        kind as u8
    }
}

/// An interactive object placed on the map
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapObject {
    /// Host event id
    pub id: u32,

    /// Tile the object stands on
    pub position: Position,

    /// Raw trigger annotation; `None` means exact tile, any travel mode
    #[serde(default)]
    pub config: Option<String>,

    /// How the object is started
    pub trigger: TriggerKind,
}

impl MapObject {
    /// Create an object with no trigger annotation
    pub fn new(id: u32, position: Position, trigger: TriggerKind) -> Self {
        Self {
            id,
            position,
            config: None,
            trigger,
        }
    }

    /// Attach a trigger annotation
    pub fn with_config(mut self, config: impl Into<String>) -> Self {
        self.config = Some(config.into());
        self
    }

    /// Build an object whose annotation comes from the `<tag: ...>` entry of its note.
    ///
    /// A bare `<tag>` yields an empty annotation (exact tile, any mode).
    pub fn from_note(
        id: u32,
        position: Position,
        trigger: TriggerKind,
        note: &str,
        tag: &str,
    ) -> Self {
        let config = extract_metadata(note).remove(tag).map(|value| match value {
            MetaValue::Text(text) => text,
            MetaValue::Flag => String::new(),
        });

        Self {
            id,
            position,
            config,
            trigger,
        }
    }

    pub fn is_at(&self, x: i32, y: i32) -> bool {
        self.position.x == x && self.position.y == y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trigger_kind_codes() {
        assert_eq!(TriggerKind::try_from(2).unwrap(), TriggerKind::EventTouch);
        assert_eq!(u8::from(TriggerKind::Parallel), 4);
        assert!(matches!(
            TriggerKind::try_from(7),
            Err(TriggerError::UnknownTriggerKind(7))
        ));
    }

    #[test]
    fn test_only_event_touch_is_touch_trigger() {
        assert!(TriggerKind::EventTouch.is_touch_trigger());
        assert!(!TriggerKind::PlayerTouch.is_touch_trigger());
        assert!(!TriggerKind::ActionButton.is_touch_trigger());
    }

    #[test]
    fn test_trigger_kind_serde() {
        let kind: TriggerKind = serde_json::from_str("1").unwrap();
        assert_eq!(kind, TriggerKind::PlayerTouch);
        assert!(serde_json::from_str::<TriggerKind>("12").is_err());
    }

    #[test]
    fn test_from_note() {
        let obj = MapObject::from_note(
            3,
            Position::new(4, 5),
            TriggerKind::EventTouch,
            "<TriggerDistance: r2 s12>",
            "TriggerDistance",
        );
        assert_eq!(obj.config.as_deref(), Some(" r2 s12"));

        let obj = MapObject::from_note(
            3,
            Position::new(4, 5),
            TriggerKind::EventTouch,
            "<TriggerDistance>",
            "TriggerDistance",
        );
        assert_eq!(obj.config.as_deref(), Some(""));

        let obj = MapObject::from_note(
            3,
            Position::new(4, 5),
            TriggerKind::EventTouch,
            "just a door",
            "TriggerDistance",
        );
        assert_eq!(obj.config, None);
    }

    #[test]
    fn test_is_at() {
        let obj = MapObject::new(1, Position::new(2, 2), TriggerKind::ActionButton);
        assert!(obj.is_at(2, 2));
        assert!(!obj.is_at(2, 3));
    }
}
