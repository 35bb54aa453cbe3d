//! Scene model and interaction engine for a 2D room layout editor.
//!
//! Users place rectangular furniture items on a canvas, select them, drag
//! them (optionally snapping to a grid), and save or load the whole layout.
//! This crate owns all of that state. The host is responsible only for
//! wiring pointer events and toolbar buttons to the engine, acting on the
//! returned [`engine::Action`]s, and providing a draw surface and a storage
//! slot.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level engine and testable [`engine::EngineCore`] |
//! | [`scene`] | Ordered item store, z-order, and the persisted encoding |
//! | [`hit`] | Front-to-back hit-testing |
//! | [`input`] | Drag gesture state machine and grid snapping |
//! | [`viewport`] | Points and screen-to-scene conversion |
//! | [`render`] | Draw-surface trait and scene rendering |
//! | [`storage`] | Key-value persistence backends |
//! | [`config`] | Editor configuration from the environment |
//! | [`error`] | Error type for decode and persistence failures |
//! | [`consts`] | Shared numeric and style constants |

pub mod config;
pub mod consts;
pub mod engine;
pub mod error;
pub mod hit;
pub mod input;
pub mod render;
pub mod scene;
pub mod storage;
pub mod viewport;

pub use engine::{Action, EngineCore, Notice};
pub use error::LayoutError;
pub use scene::{Item, Scene};
pub use storage::{LayoutStore, MemoryStore};
pub use viewport::Point;
