//! Host-facing event dispatch
//!
//! This module contains the types a host uses to run the evaluator each frame:
//! - `MapHost` - the host's map, event runner and event starter
//! - `PlayerState` - where the player is and how they're travelling
//! - `EventDispatcher` - starts the events the evaluator selects

mod player;
mod dispatcher;

pub use player::PlayerState;
pub use dispatcher::{EventDispatcher, MapHost, HERE_TRIGGERS};
