//! Engine map JSON
//!
//! Loads the subset of a map file the trigger evaluator needs: size, scroll
//! type and the events with their notes and page triggers.

use serde::{Deserialize, Serialize};
use std::path::Path;

use super::object::{MapObject, Position, TriggerKind};
use super::topology::MapTopology;
use crate::config::EvaluatorConfig;
use crate::Result;

/// Map scroll type code: 0 none, 1 loop vertically, 2 loop horizontally, 3 both
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScrollType(pub u8);

impl ScrollType {
    pub fn loops_vertically(&self) -> bool {
        self.0 == 1 || self.0 == 3
    }

    pub fn loops_horizontally(&self) -> bool {
        self.0 == 2 || self.0 == 3
    }
}

/// One event page; only the trigger matters here
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventPage {
    pub trigger: TriggerKind,
}

/// One event as stored in a map file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventData {
    pub id: u32,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub note: String,
    pub x: i32,
    pub y: i32,
    #[serde(default)]
    pub pages: Vec<EventPage>,
}

/// A map file
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapData {
    pub width: i32,
    pub height: i32,
    #[serde(default)]
    pub scroll_type: ScrollType,
    /// Indexed by event id; deleted slots are `null`
    #[serde(default)]
    pub events: Vec<Option<EventData>>,
}

impl MapData {
    /// Parse a map from JSON text
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a map from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let map = Self::from_json(&content)?;
        log::info!(
            "Loaded map {} ({}x{}, {} events)",
            path.display(),
            map.width,
            map.height,
            map.events().count()
        );
        Ok(map)
    }

    /// Size and looping of this map
    pub fn topology(&self) -> MapTopology {
        MapTopology::bounded(self.width, self.height).with_looping(
            self.scroll_type.loops_horizontally(),
            self.scroll_type.loops_vertically(),
        )
    }

    /// Events present on the map, skipping deleted slots
    pub fn events(&self) -> impl Iterator<Item = &EventData> {
        self.events.iter().flatten()
    }

    /// Build map objects using each event's first page.
    ///
    /// Annotations are read from the note tag named in `config`.
    pub fn objects(&self, config: &EvaluatorConfig) -> Vec<MapObject> {
        self.objects_with_pages(config, |_| 0)
    }

    /// Build map objects using the page `active_page` picks for each event id.
    ///
    /// Events whose chosen page doesn't exist are left out.
    pub fn objects_with_pages<F>(&self, config: &EvaluatorConfig, active_page: F) -> Vec<MapObject>
    where
        F: Fn(u32) -> usize,
    {
        let tag = config.note_tag.as_str();
        self.events()
            .filter_map(|event| {
                let page = event.pages.get(active_page(event.id))?;
                Some(MapObject::from_note(
                    event.id,
                    Position::new(event.x, event.y),
                    page.trigger,
                    &event.note,
                    tag,
                ))
            })
            .collect()
    }
}
