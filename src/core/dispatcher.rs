//! Starts the events selected by the trigger evaluator

use super::player::PlayerState;
use crate::flags::FlagStore;
use crate::map::{MapObject, Position, TriggerKind};
use crate::triggers::TriggerEvaluator;

/// Trigger kinds checked when the player steps onto a tile
pub const HERE_TRIGGERS: [TriggerKind; 2] = [TriggerKind::PlayerTouch, TriggerKind::EventTouch];

/// The host's side of event dispatch
pub trait MapHost {
    /// Every object on the current map, in map order
    fn map_objects(&self) -> &[MapObject];

    /// Whether an event script is already running
    fn is_event_running(&self) -> bool;

    /// Queue an event's script
    fn start_event(&mut self, event_id: u32);
}

/// Runs the evaluator for a tile and starts what it selects
#[derive(Debug, Clone, Default)]
pub struct EventDispatcher {
    evaluator: TriggerEvaluator,
}

impl EventDispatcher {
    /// Create a new dispatcher around an evaluator
    pub fn new(evaluator: TriggerEvaluator) -> Self {
        Self { evaluator }
    }

    pub fn evaluator(&self) -> &TriggerEvaluator {
        &self.evaluator
    }

    /// Start events that fire at `query` and have one of the given trigger kinds.
    ///
    /// Nothing happens while another event is running. Each event starts at
    /// most once per call, in the order the evaluator returned them. Returns
    /// the ids that were started.
    pub fn start_map_events<H, F>(
        &self,
        host: &mut H,
        flags: &mut F,
        player: &PlayerState,
        query: Position,
        triggers: &[TriggerKind],
    ) -> Vec<u32>
    where
        H: MapHost + ?Sized,
        F: FlagStore + ?Sized,
    {
        if host.is_event_running() {
            log::trace!("Event running, skipping trigger check at {:?}", query);
            return Vec::new();
        }

        let mut started: Vec<u32> = Vec::new();
        for object in self
            .evaluator
            .evaluate(host.map_objects(), query.x, query.y, player.mode, flags)
        {
            if triggers.contains(&object.trigger) && !started.contains(&object.id) {
                started.push(object.id);
            }
        }

        for &id in &started {
            log::debug!("Starting event {}", id);
            host.start_event(id);
        }

        started
    }

    /// Start touch events on the player's own tile
    pub fn check_here<H, F>(&self, host: &mut H, flags: &mut F, player: &PlayerState) -> Vec<u32>
    where
        H: MapHost + ?Sized,
        F: FlagStore + ?Sized,
    {
        self.start_map_events(host, flags, player, player.here(), &HERE_TRIGGERS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flags::SwitchBank;
    use crate::triggers::TravelMode;

    struct MockHost {
        objects: Vec<MapObject>,
        running: bool,
        started: Vec<u32>,
    }

    impl MockHost {
        fn new(objects: Vec<MapObject>) -> Self {
            Self {
                objects,
                running: false,
                started: Vec::new(),
            }
        }
    }

    impl MapHost for MockHost {
        fn map_objects(&self) -> &[MapObject] {
            &self.objects
        }
        fn is_event_running(&self) -> bool {
            self.running
        }
        fn start_event(&mut self, event_id: u32) {
            self.started.push(event_id);
        }
    }

    fn touch(id: u32, x: i32, y: i32, config: &str) -> MapObject {
        MapObject::new(id, Position::new(x, y), TriggerKind::EventTouch).with_config(config)
    }

    #[test]
    fn test_starts_each_event_once() {
        let mut host = MockHost::new(vec![touch(1, 0, 0, "r3 x3")]);
        let mut flags = SwitchBank::new(10);
        let dispatcher = EventDispatcher::default();

        let started = dispatcher.check_here(&mut host, &mut flags, &PlayerState::walking(2, 0));
        assert_eq!(started, vec![1]);
        assert_eq!(host.started, vec![1]);
    }

    #[test]
    fn test_skips_while_event_running() {
        let mut host = MockHost::new(vec![touch(1, 0, 0, "r3 s4")]);
        host.running = true;
        let mut flags = SwitchBank::new(10);
        let dispatcher = EventDispatcher::default();

        let started = dispatcher.check_here(&mut host, &mut flags, &PlayerState::walking(0, 0));
        assert!(started.is_empty());
        assert!(host.started.is_empty());
        // No evaluation, so no latch
        assert!(!flags.get(4));
    }

    #[test]
    fn test_filters_trigger_kinds() {
        let mut host = MockHost::new(vec![
            MapObject::new(1, Position::new(0, 0), TriggerKind::ActionButton),
            MapObject::new(2, Position::new(0, 0), TriggerKind::PlayerTouch),
            touch(3, 1, 0, "r1"),
        ]);
        let mut flags = SwitchBank::new(10);
        let dispatcher = EventDispatcher::default();
        let player = PlayerState::walking(0, 0);

        let started = dispatcher.check_here(&mut host, &mut flags, &player);
        assert_eq!(started, vec![2, 3]);

        host.started.clear();
        let started = dispatcher.start_map_events(
            &mut host,
            &mut flags,
            &player,
            Position::new(0, 0),
            &[TriggerKind::ActionButton],
        );
        assert_eq!(started, vec![1]);
    }

    #[test]
    fn test_airship_still_reaches_touch_events() {
        let mut host = MockHost::new(vec![
            touch(1, 4, 4, "airship"),
            MapObject::new(2, Position::new(4, 4), TriggerKind::PlayerTouch),
        ]);
        let mut flags = SwitchBank::new(10);
        let dispatcher = EventDispatcher::default();
        let player = PlayerState::walking(4, 4).with_mode(TravelMode::Airship);

        assert_eq!(dispatcher.check_here(&mut host, &mut flags, &player), vec![1]);
    }
}
