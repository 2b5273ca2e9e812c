use std::path::PathBuf;

use thiserror::Error;

use crate::phase::{FormEvent, FormPhase};

#[derive(Debug, Error)]
pub enum IntakeError {
    #[error("cannot apply {event:?} to a form that is {from:?}")]
    InvalidTransition { from: FormPhase, event: FormEvent },

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
