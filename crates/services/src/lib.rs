#![forbid(unsafe_code)]

pub mod error;
pub mod journey;

pub use navigator_core::Clock;

pub use error::{JourneyError, SnapshotError};

pub use journey::{
    CompletedTileListItem, JourneyProgress, JourneyRegistry, JourneyService, SessionSnapshot,
    TileStatus, completed_list, restore, snapshot, tile_status,
};
