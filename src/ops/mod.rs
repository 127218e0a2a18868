//! Editor operations.
//!
//! Each operation is a small struct executed against a `&mut Scene`. Every
//! operation that changes room geometry or door state reruns the walls
//! pipeline before returning, so the derived layout is always current.

mod center_door;
mod move_room;
mod place_room;
mod remove_room;
mod toggle_door;

pub use center_door::PlaceCenterDoor;
pub use move_room::MoveRoom;
pub use place_room::PlaceRoom;
pub use remove_room::RemoveRoom;
pub use toggle_door::ToggleDoor;
