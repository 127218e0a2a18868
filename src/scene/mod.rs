pub mod element;
pub mod modular;
pub mod terrain;

pub use element::{Annotation, ElementId, MapElement, Room, Token, Wall};
pub use modular::{ModularRoom, ModularRoomsState, WallGroup, WallGroupId};
pub use terrain::{TerrainMap, TerrainTile, TileCoord};

use serde::{Deserialize, Serialize};
use slotmap::SlotMap;

use crate::error::SceneError;
use crate::grid::TileRect;
use crate::walls::segment::WallSegmentGroup;

/// In-memory store for one open scene.
///
/// Elements reference wall groups via typed IDs (generational indices). The
/// walls layout is derived state: it is rebuilt by the regeneration pipeline
/// after every mutation and is skipped during serialization.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scene {
    pub(crate) elements: SlotMap<ElementId, MapElement>,
    pub(crate) terrain_tiles: TerrainMap,
    pub(crate) modular_rooms_state: ModularRoomsState,
    #[serde(skip)]
    pub(crate) walls: Vec<WallSegmentGroup>,
}

impl Scene {
    /// Creates a new, empty scene.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Element operations ---

    /// Inserts an element and returns its ID.
    pub fn add_element(&mut self, element: MapElement) -> ElementId {
        self.elements.insert(element)
    }

    /// Returns a reference to the element, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the store.
    pub fn element(&self, id: ElementId) -> Result<&MapElement, SceneError> {
        self.elements
            .get(id)
            .ok_or_else(|| SceneError::EntityNotFound("element".into()))
    }

    /// Returns a mutable reference to the element, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the store.
    pub fn element_mut(&mut self, id: ElementId) -> Result<&mut MapElement, SceneError> {
        self.elements
            .get_mut(id)
            .ok_or_else(|| SceneError::EntityNotFound("element".into()))
    }

    /// Removes an element, returning its payload.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the store.
    pub fn remove_element(&mut self, id: ElementId) -> Result<MapElement, SceneError> {
        self.elements
            .remove(id)
            .ok_or_else(|| SceneError::EntityNotFound("element".into()))
    }

    /// Iterates over all elements.
    pub fn elements(&self) -> impl Iterator<Item = (ElementId, &MapElement)> {
        self.elements.iter()
    }

    // --- Modular room access ---

    /// Returns the modular room payload for `id`.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is missing or is not a modular room.
    pub fn modular_room(&self, id: ElementId) -> Result<&ModularRoom, SceneError> {
        self.element(id)?
            .as_modular_room()
            .ok_or(SceneError::NotAModularRoom)
    }

    /// Returns the modular room payload for `id`, mutably.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is missing or is not a modular room.
    pub fn modular_room_mut(&mut self, id: ElementId) -> Result<&mut ModularRoom, SceneError> {
        match self.element_mut(id)? {
            MapElement::ModularRoom(room) => Ok(room),
            _ => Err(SceneError::NotAModularRoom),
        }
    }

    /// All well-formed modular room footprints, sorted by element ID so the
    /// pipeline is order-independent. Malformed rooms are silently skipped.
    #[must_use]
    pub fn modular_room_rects(&self) -> Vec<(ElementId, TileRect)> {
        let mut rooms: Vec<(ElementId, TileRect)> = self
            .elements
            .iter()
            .filter_map(|(id, element)| {
                element
                    .as_modular_room()
                    .and_then(ModularRoom::tile_rect)
                    .map(|rect| (id, rect))
            })
            .collect();
        rooms.sort_unstable_by_key(|&(id, _)| id);
        rooms
    }

    /// The persistent modular-room state (wall groups and segment states).
    #[must_use]
    pub fn modular_rooms_state(&self) -> &ModularRoomsState {
        &self.modular_rooms_state
    }

    /// The derived walls layout from the last regeneration.
    #[must_use]
    pub fn walls(&self) -> &[WallSegmentGroup] {
        &self.walls
    }

    // --- Terrain operations ---

    /// Paints one terrain tile, replacing whatever was there.
    pub fn paint_terrain(&mut self, coord: TileCoord, tile: TerrainTile) {
        self.terrain_tiles.insert(coord, tile);
    }

    /// Clears one terrain tile, returning the previous paint if any.
    pub fn clear_terrain(&mut self, coord: TileCoord) -> Option<TerrainTile> {
        self.terrain_tiles.remove(&coord)
    }

    /// All painted terrain tiles.
    #[must_use]
    pub fn terrain_tiles(&self) -> &TerrainMap {
        &self.terrain_tiles
    }
}
