use thiserror::Error;

use crate::model::{LedgerError, ParsePhaseError, TileError};

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Phase(#[from] ParsePhaseError),
    #[error(transparent)]
    Tile(#[from] TileError),
    #[error(transparent)]
    Ledger(#[from] LedgerError),
}
