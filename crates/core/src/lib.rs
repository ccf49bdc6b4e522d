#![forbid(unsafe_code)]

pub mod error;
pub mod model;
pub mod resolver;
pub mod time;

pub use error::Error;
pub use model::{
    CompletedTile, JourneyPhase, LedgerError, MilestoneFacts, ParsePhaseError, ProgressLedger,
    SessionId, TileError, TileKey,
};
pub use resolver::resolve_phase;
pub use time::Clock;
