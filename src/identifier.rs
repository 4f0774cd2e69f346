//! Resource identifiers accepted by the client's lookup operations.
//!
//! Operations such as [`GiantBomb::get_game`](crate::GiantBomb::get_game)
//! take `impl Into<Identifier>`, so either a plain integer or a reference to
//! any record carrying an id can be passed:
//!
//! ```no_run
//! # use giantbomb_sdk::GiantBomb;
//! # fn example(gb: &GiantBomb) -> giantbomb_sdk::Result<()> {
//! let hits = gb.search("portal", 0)?;
//! let by_record = gb.get_game(&hits[0])?;
//! let by_number = gb.get_game(21170)?;
//! # Ok(())
//! # }
//! ```

use crate::error::{GiantBombError, Result};

/// A record that carries a service-assigned numeric id.
pub trait HasId {
    /// Human-readable record kind, used in error messages.
    const KIND: &'static str;

    fn id(&self) -> Option<i64>;
}

/// Either a numeric id or the id taken from a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Identifier {
    Id(i64),
    Record { kind: &'static str, id: Option<i64> },
}

impl Identifier {
    /// Resolve to the plain integer used in request paths and parameters.
    pub fn resolve(self) -> Result<i64> {
        match self {
            Identifier::Id(id) => Ok(id),
            Identifier::Record { id: Some(id), .. } => Ok(id),
            Identifier::Record { kind, id: None } => Err(GiantBombError::InvalidArgument(
                format!("{} record has no id", kind),
            )),
        }
    }
}

impl From<i64> for Identifier {
    fn from(id: i64) -> Self {
        Identifier::Id(id)
    }
}

impl From<i32> for Identifier {
    fn from(id: i32) -> Self {
        Identifier::Id(i64::from(id))
    }
}

impl From<u32> for Identifier {
    fn from(id: u32) -> Self {
        Identifier::Id(i64::from(id))
    }
}

impl<T: HasId> From<&T> for Identifier {
    fn from(record: &T) -> Self {
        Identifier::Record {
            kind: T::KIND,
            id: record.id(),
        }
    }
}
