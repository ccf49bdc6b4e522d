mod ids;
mod ledger;
mod milestones;
mod phase;
mod tile;

pub use ids::SessionId;
pub use ledger::{LedgerError, ProgressLedger};
pub use milestones::{ADVISOR_BOOKED, GUIDED_CARE_COMPLETED, MilestoneFacts};
pub use phase::{JourneyPhase, ParsePhaseError};
pub use tile::{CompletedTile, TileError, TileKey};
