use serde::{Deserialize, Serialize};

use super::modular::ModularRoom;

slotmap::new_key_type! {
    /// Unique identifier for a placed element in the scene store.
    pub struct ElementId;
}

/// A placed map element, discriminated by its `type` tag on the wire.
///
/// This is the closed union of everything a scene can contain. Modular rooms
/// carry their wall bookkeeping separately in
/// [`ModularRoomsState`](super::modular::ModularRoomsState); the other
/// variants are plain drawables with no derived state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum MapElement {
    Annotation(Annotation),
    Token(Token),
    Room(Room),
    Wall(Wall),
    ModularRoom(ModularRoom),
}

impl MapElement {
    /// Returns the modular room payload, if this element is one.
    #[must_use]
    pub fn as_modular_room(&self) -> Option<&ModularRoom> {
        match self {
            Self::ModularRoom(room) => Some(room),
            _ => None,
        }
    }
}

/// Free-floating text note pinned to the map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Annotation {
    pub x_px: i32,
    pub y_px: i32,
    pub text: String,
    pub color: String,
}

/// A creature or object marker backed by an image asset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Token {
    pub x_px: i32,
    pub y_px: i32,
    pub asset_src: String,
    pub size_px: i32,
}

/// A hand-drawn rectangular room, not part of the modular wall system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    pub x_px: i32,
    pub y_px: i32,
    pub w_px: i32,
    pub h_px: i32,
    pub texture_id: String,
}

/// A free-standing wall line drawn by hand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Wall {
    pub x0_px: i32,
    pub y0_px: i32,
    pub x1_px: i32,
    pub y1_px: i32,
    pub wall_style_id: String,
}
