//! Map wrap-around for distance measurement

use serde::{Deserialize, Serialize};

/// Map size and looping, used to measure deltas between tiles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MapTopology {
    pub width: i32,
    pub height: i32,
    #[serde(default)]
    pub loop_horizontal: bool,
    #[serde(default)]
    pub loop_vertical: bool,
}

impl MapTopology {
    /// A map that doesn't loop; deltas are plain differences
    pub fn bounded(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            loop_horizontal: false,
            loop_vertical: false,
        }
    }

    /// Set looping on either axis
    pub fn with_looping(mut self, horizontal: bool, vertical: bool) -> Self {
        self.loop_horizontal = horizontal;
        self.loop_vertical = vertical;
        self
    }

    /// Signed x delta from `x2` to `x1`, taking the short way round on a looping map
    pub fn delta_x(&self, x1: i32, x2: i32) -> i64 {
        wrap_delta(i64::from(x1) - i64::from(x2), self.width, self.loop_horizontal)
    }

    /// Signed y delta from `y2` to `y1`, taking the short way round on a looping map
    pub fn delta_y(&self, y1: i32, y2: i32) -> i64 {
        wrap_delta(i64::from(y1) - i64::from(y2), self.height, self.loop_vertical)
    }

    /// Manhattan distance between two tiles, saturating at `u32::MAX`
    pub fn distance(&self, x1: i32, y1: i32, x2: i32, y2: i32) -> u32 {
        let total = self.delta_x(x1, x2).unsigned_abs() + self.delta_y(y1, y2).unsigned_abs();
        u32::try_from(total).unwrap_or(u32::MAX)
    }
}

fn wrap_delta(delta: i64, size: i32, looping: bool) -> i64 {
    let size = i64::from(size);
    if looping && size > 0 && delta.abs() > size / 2 {
        if delta < 0 {
            delta + size
        } else {
            delta - size
        }
    } else {
        delta
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounded_distance() {
        let topo = MapTopology::default();
        assert_eq!(topo.distance(5, 5, 5, 3), 2);
        assert_eq!(topo.distance(0, 0, 3, -4), 7);
        assert_eq!(topo.delta_x(2, 9), -7);
    }

    #[test]
    fn test_horizontal_loop() {
        let topo = MapTopology::bounded(20, 15).with_looping(true, false);
        assert_eq!(topo.delta_x(0, 19), 1);
        assert_eq!(topo.delta_x(19, 0), -1);
        assert_eq!(topo.delta_x(3, 8), -5);
        // Vertical axis doesn't wrap
        assert_eq!(topo.delta_y(0, 14), -14);
        assert_eq!(topo.distance(0, 0, 19, 0), 1);
    }

    #[test]
    fn test_extreme_coordinates_saturate() {
        let topo = MapTopology::default();
        assert_eq!(topo.delta_x(i32::MAX, -5), i64::from(i32::MAX) + 5);
        assert_eq!(topo.delta_y(i32::MIN, i32::MAX), -(u32::MAX as i64));
        assert_eq!(topo.distance(i32::MAX, i32::MIN, i32::MIN, i32::MAX), u32::MAX);
        assert_eq!(topo.distance(i32::MIN, 0, i32::MIN, 0), 0);

        let looping = MapTopology::bounded(20, 20).with_looping(true, true);
        assert_eq!(looping.delta_x(i32::MIN, i32::MAX), -(u32::MAX as i64) + 20);
    }

    #[test]
    fn test_vertical_loop() {
        let topo = MapTopology::bounded(20, 10).with_looping(false, true);
        assert_eq!(topo.delta_y(1, 9), 2);
        assert_eq!(topo.delta_y(5, 0), 5);
        assert_eq!(topo.delta_x(0, 19), -19);
    }
}
