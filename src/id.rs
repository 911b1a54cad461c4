//! Identifier source for newly created notes.

use crate::note::NoteId;
use std::{fmt, sync::Arc};

type GenerateFn = dyn Fn() -> NoteId + Send + Sync;

/// Produces a fresh, practically unique [`NoteId`] on every call.
///
/// # Usage
/// ```
/// use sticky_notes::{id::IdGenerator, note::NoteId};
///
/// let ids = IdGenerator::from(|| "fixed".parse::<NoteId>().unwrap());
/// assert_eq!(ids.generate().as_str(), "fixed");
/// ```
#[derive(Clone)]
pub struct IdGenerator(Arc<GenerateFn>);

impl IdGenerator {
    /// Random version 4 UUIDs in hyphenated form.
    pub fn uuid_v4() -> Self {
        IdGenerator::from(|| NoteId::from(uuid::Uuid::new_v4()))
    }

    pub fn generate(&self) -> NoteId {
        (self.0)()
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::uuid_v4()
    }
}

impl<F> From<F> for IdGenerator
where
    F: Fn() -> NoteId + Send + Sync + 'static,
{
    fn from(f: F) -> Self {
        IdGenerator(Arc::new(f))
    }
}

impl fmt::Debug for IdGenerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IdGenerator").finish_non_exhaustive()
    }
}
