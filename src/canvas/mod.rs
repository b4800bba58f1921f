//! # Canvas Module
//!
//! Lays out, renders and encodes a single portrait canvas.

pub mod encoder;
pub mod layout;
pub mod render;

pub use encoder::write_jpeg;
pub use layout::{CropRegion, Placement};
pub use render::{darken, load_source, PortraitRenderer};
