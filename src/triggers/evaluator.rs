//! Trigger evaluation engine

use super::parser::parse_spec;
use super::types::{DistanceRule, TravelMode};
use crate::config::EvaluatorConfig;
use crate::flags::FlagStore;
use crate::map::{MapObject, MapTopology};

/// Selects the map objects that fire for a tile and travel mode
#[derive(Debug, Clone, Default)]
pub struct TriggerEvaluator {
    config: EvaluatorConfig,
    topology: MapTopology,
}

impl TriggerEvaluator {
    /// Create a new evaluator for a non-looping map
    pub fn new(config: EvaluatorConfig) -> Self {
        Self {
            config,
            topology: MapTopology::default(),
        }
    }

    /// Measure distances with this map's wrap-around
    pub fn with_topology(mut self, topology: MapTopology) -> Self {
        self.topology = topology;
        self
    }

    pub fn config(&self) -> &EvaluatorConfig {
        &self.config
    }

    pub fn topology(&self) -> &MapTopology {
        &self.topology
    }

    /// Objects that fire for a query tile, in map order.
    ///
    /// An object matching more than one distance rule appears once per rule,
    /// and its latch switch is written once per rule.
    pub fn evaluate<'a, F>(
        &self,
        objects: &'a [MapObject],
        query_x: i32,
        query_y: i32,
        mode: TravelMode,
        flags: &mut F,
    ) -> Vec<&'a MapObject>
    where
        F: FlagStore + ?Sized,
    {
        let mut fired = Vec::new();

        for object in objects {
            if !object.trigger.is_touch_trigger() {
                if object.is_at(query_x, query_y) && !self.skips_ground_events(mode) {
                    fired.push(object);
                }
                continue;
            }

            let Some(raw) = object.config.as_deref() else {
                if object.is_at(query_x, query_y) {
                    fired.push(object);
                }
                continue;
            };

            let spec = parse_spec(raw);

            if !spec.allows(mode) {
                continue;
            }

            if let Some(latch) = spec.latch {
                if flags.get(latch) {
                    continue;
                }
            }

            for rule in spec.rules() {
                if !self.rule_satisfied(rule, object, query_x, query_y) {
                    continue;
                }

                log::debug!(
                    "Event {} fired by {:?} at ({}, {})",
                    object.id,
                    rule,
                    query_x,
                    query_y
                );

                if let Some(latch) = spec.latch {
                    flags.set(latch, true);
                    log::debug!("Event {} latched switch {}", object.id, latch);
                }
                fired.push(object);
            }
        }

        fired
    }

    /// Check one distance rule of an object against the query tile
    pub fn rule_satisfied(
        &self,
        rule: DistanceRule,
        object: &MapObject,
        query_x: i32,
        query_y: i32,
    ) -> bool {
        let distance = self
            .topology
            .distance(query_x, query_y, object.position.x, object.position.y);

        match rule {
            DistanceRule::Radius(r) => distance <= r,
            DistanceRule::XAxis(range) => distance <= range && query_y == object.position.y,
            DistanceRule::YAxis(range) => distance <= range && query_x == object.position.x,
        }
    }

    fn skips_ground_events(&self, mode: TravelMode) -> bool {
        self.config.airship_skips_ground_events && mode == TravelMode::Airship
    }
}
