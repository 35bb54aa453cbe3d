//! Scene model: placed items, their stacking order, and the text encoding.
//!
//! The scene is a plain ordered vector. Index 0 is furthest back, the last
//! index is frontmost; the renderer walks it forwards and hit-testing walks it
//! backwards. Reordering is always "move to end", so the relative order of the
//! remaining items is never disturbed.
//!
//! The persisted form is a JSON array of item records. Decoding validates
//! every record against the item shape and either replaces the whole scene
//! or leaves it untouched.

#[cfg(test)]
#[path = "scene_test.rs"]
mod scene_test;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::consts::{DEFAULT_ITEM_HEIGHT, DEFAULT_ITEM_WIDTH, DEFAULT_ITEM_X, DEFAULT_ITEM_Y};
use crate::error::LayoutError;
use crate::viewport::Point;

/// A placed furniture item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Furniture type label (e.g. `"chair"`). Not checked against any catalog.
    #[serde(rename = "type")]
    pub kind: String,
    /// Left edge in scene coordinates. May be negative or past the surface.
    pub x: f64,
    /// Top edge in scene coordinates.
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Rotation in degrees. Carried through persistence; never applied.
    pub rotation: f64,
    /// Whether this is the (single) selected item.
    pub selected: bool,
}

impl Item {
    /// A new unselected item at the default position and size.
    #[must_use]
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            x: DEFAULT_ITEM_X,
            y: DEFAULT_ITEM_Y,
            width: DEFAULT_ITEM_WIDTH,
            height: DEFAULT_ITEM_HEIGHT,
            rotation: 0.0,
            selected: false,
        }
    }

    /// Top-left corner.
    #[must_use]
    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Whether `pt` lies within the bounding box, edges included.
    #[must_use]
    pub fn contains(&self, pt: Point) -> bool {
        pt.x >= self.x && pt.x <= self.x + self.width && pt.y >= self.y && pt.y <= self.y + self.height
    }

    fn validate(&self, index: usize) -> Result<(), LayoutError> {
        let fields = [
            ("x", self.x),
            ("y", self.y),
            ("width", self.width),
            ("height", self.height),
            ("rotation", self.rotation),
        ];
        if let Some((name, value)) = fields.iter().find(|(_, value)| !value.is_finite()) {
            return Err(LayoutError::MalformedData(format!("item {index}: {name} must be finite, got {value}")));
        }
        if self.width <= 0.0 || self.height <= 0.0 {
            return Err(LayoutError::MalformedData(format!(
                "item {index}: width and height must be positive, got {}x{}",
                self.width, self.height
            )));
        }
        Ok(())
    }
}

/// Ordered collection of items; order is z-order, back to front.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scene {
    items: Vec<Item>,
}

impl Scene {
    /// Create an empty scene.
    #[must_use]
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Append a default item of the given kind on top of the stack.
    /// Returns its index, which is the last index.
    pub fn add_item(&mut self, kind: impl Into<String>) -> usize {
        let item = Item::new(kind);
        debug!(kind = %item.kind, index = self.items.len(), "item added");
        self.items.push(item);
        self.items.len() - 1
    }

    /// Move the item at `index` to the end of the sequence, keeping the
    /// relative order of every other item. Returns the item's new index, or
    /// `None` if `index` is out of range.
    pub fn reorder_to_front(&mut self, index: usize) -> Option<usize> {
        if index >= self.items.len() {
            return None;
        }
        let item = self.items.remove(index);
        self.items.push(item);
        Some(self.items.len() - 1)
    }

    /// Select exactly the item at `index` and deselect all others. `None`
    /// (or an out-of-range index) deselects everything.
    pub fn set_selected(&mut self, index: Option<usize>) {
        for (i, item) in self.items.iter_mut().enumerate() {
            item.selected = Some(i) == index;
        }
    }

    /// Index of the selected item, if any.
    #[must_use]
    pub fn selected_index(&self) -> Option<usize> {
        self.items.iter().position(|item| item.selected)
    }

    /// Move the item at `index` so its top-left corner is `pos`. Returns false
    /// if there is no such item.
    pub fn set_position(&mut self, index: usize, pos: Point) -> bool {
        let Some(item) = self.items.get_mut(index) else {
            return false;
        };
        item.x = pos.x;
        item.y = pos.y;
        true
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Item> {
        self.items.get(index)
    }

    /// All items, back to front.
    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Encode the full ordered sequence, selection and rotation included.
    ///
    /// # Errors
    ///
    /// Returns `MalformedData` if an item holds a non-finite number or a
    /// non-positive size, since that text could not be decoded again.
    pub fn serialize(&self) -> Result<String, LayoutError> {
        for (index, item) in self.items.iter().enumerate() {
            item.validate(index)?;
        }
        Ok(serde_json::to_string(&self.items)?)
    }

    /// Decode a scene from text produced by [`Scene::serialize`].
    ///
    /// # Errors
    ///
    /// Returns `MalformedData` if the text is not a JSON array of item
    /// records, a record is missing a field or has a field of the wrong type,
    /// an item has a non-finite number or a non-positive size, or more than
    /// one item is selected.
    pub fn deserialize(text: &str) -> Result<Self, LayoutError> {
        let items: Vec<Item> = serde_json::from_str(text)?;
        for (index, item) in items.iter().enumerate() {
            item.validate(index)?;
        }
        let selected = items.iter().filter(|item| item.selected).count();
        if selected > 1 {
            return Err(LayoutError::MalformedData(format!(
                "{selected} items are marked selected; at most one is allowed"
            )));
        }
        Ok(Self { items })
    }

    /// Replace this scene with the decoded contents of `text`. On error the
    /// scene is left exactly as it was.
    ///
    /// # Errors
    ///
    /// See [`Scene::deserialize`].
    pub fn replace_from(&mut self, text: &str) -> Result<(), LayoutError> {
        let decoded = Self::deserialize(text)?;
        *self = decoded;
        Ok(())
    }
}
