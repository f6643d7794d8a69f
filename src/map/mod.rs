//! Map model
//!
//! This module contains what the evaluator reads from the host's map:
//! - `MapObject` - an interactive object with its position and trigger annotation
//! - `MapTopology` - map size and wrap-around for distance measurement
//! - `extract_metadata` - note tag parsing
//! - `MapData` - map files in the engine's JSON format

mod data;
mod notes;
mod object;
mod topology;

pub use data::{EventData, EventPage, MapData, ScrollType};
pub use notes::{extract_metadata, MetaValue};
pub use object::{MapObject, Position, TriggerKind};
pub use topology::MapTopology;
