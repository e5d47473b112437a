//! Shapes the engine's state takes when it leaves the process: the redacted views handed to players, the record
//! written to storage, and the move requests coming back in.

use sapper_core::GameError;
use thiserror::Error;

pub use record::*;
pub use request::*;
pub use view::*;

mod record;
mod request;
mod view;

#[derive(Error, Debug)]
pub enum ProtocolError {
    #[error(transparent)]
    Game(#[from] GameError),
    #[error("Malformed JSON: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = core::result::Result<T, ProtocolError>;

/// Serializes [`sapper_core::Visibility`] as its stored ordinal.
pub(crate) mod visibility_ordinal {
    use sapper_core::Visibility;
    use serde::{Deserialize, Deserializer, Serializer, de};

    pub fn serialize<S: Serializer>(visibility: &Visibility, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(visibility.ordinal())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Visibility, D::Error> {
        let ordinal = u8::deserialize(deserializer)?;
        Visibility::from_ordinal(ordinal)
            .ok_or_else(|| de::Error::custom(format_args!("unknown cell state {ordinal}")))
    }
}
