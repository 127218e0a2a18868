pub mod cache;
pub mod error;
pub mod grid;
pub mod ops;
pub mod persistence;
pub mod scene;
pub mod walls;

pub use error::{Result, RoomGridError};
