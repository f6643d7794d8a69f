//! Trigger Distance
//!
//! Decides which map events fire when the player reaches a tile. Touch-triggered
//! events can carry an annotation in their note, such as
//! `<TriggerDistance: r2 s12 airship>`, that widens the tile they react to
//! (radius, row or column), restricts the travel modes they react to, and binds
//! a switch that suppresses them once they have fired.
//!
//! Host state is passed in explicitly: the map objects, the query tile, the
//! player's travel mode and a `FlagStore` for switches.
//!
//! ```
//! use trigger_distance::{MapObject, Position, SwitchBank, TravelMode, TriggerEvaluator, TriggerKind};
//!
//! let objects = vec![
//!     MapObject::new(1, Position::new(5, 5), TriggerKind::EventTouch).with_config("y2"),
//! ];
//! let mut switches = SwitchBank::new(100);
//! let evaluator = TriggerEvaluator::default();
//!
//! let fired = evaluator.evaluate(&objects, 5, 3, TravelMode::Walk, &mut switches);
//! assert_eq!(fired.len(), 1);
//! ```

pub mod config;
pub mod core;
pub mod error;
pub mod flags;
pub mod map;
pub mod triggers;

// Re-export commonly used types
pub use config::EvaluatorConfig;
pub use crate::core::{EventDispatcher, MapHost, PlayerState};
pub use error::{Result, TriggerError};
pub use flags::{FlagStore, SwitchBank};
pub use map::{MapData, MapObject, MapTopology, Position, TriggerKind};
pub use triggers::{parse_spec, TravelMode, TravelModes, TriggerEvaluator, TriggerSpec};
