//! Distance triggers for map objects
//!
//! This module decides which touch-triggered objects fire for a tile: objects
//! carry a small annotation (`r3 s12 airship`) that `parse_spec` turns into
//! distance rules, a latch switch and allowed travel modes, and
//! `TriggerEvaluator` checks those against the query tile.

mod types;
mod parser;
mod evaluator;

pub use types::{DistanceRule, FlagId, TravelMode, TravelModes, TriggerSpec};
pub use parser::parse_spec;
pub use evaluator::TriggerEvaluator;
