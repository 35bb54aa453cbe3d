//! Front-to-back hit-testing against scene items.

#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use crate::scene::Scene;
use crate::viewport::Point;

/// Index of the frontmost item whose bounding box contains `scene_pt`.
///
/// Items are scanned from the last index down to the first, so when boxes
/// overlap the one drawn on top wins.
#[must_use]
pub fn hit_test(scene_pt: Point, scene: &Scene) -> Option<usize> {
    scene.items().iter().rposition(|item| item.contains(scene_pt))
}
