//! The note record, user drafts, and the ordered collection persisted as one unit.

use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;

/// The message shown inline when a draft fails validation.
pub const REQUIRED_FIELDS_MESSAGE: &str = "Both title and content are required.";

/// Error returned when an empty string is used as a [`NoteId`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("note id must not be empty")]
pub struct InvalidNoteId;

/// Opaque identifier of a [`Note`], assigned once at creation and never changed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct NoteId(String);

impl NoteId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for NoteId {
    type Error = InvalidNoteId;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if value.is_empty() {
            return Err(InvalidNoteId);
        }
        Ok(NoteId(value))
    }
}

impl FromStr for NoteId {
    type Err = InvalidNoteId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NoteId::try_from(s.to_string())
    }
}

impl From<uuid::Uuid> for NoteId {
    fn from(uuid: uuid::Uuid) -> Self {
        NoteId(uuid.hyphenated().to_string())
    }
}

impl From<NoteId> for String {
    fn from(id: NoteId) -> Self {
        id.0
    }
}

impl AsRef<str> for NoteId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single sticky note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: NoteId,
    pub title: String,
    pub content: String,
}

/// Why a [`NoteDraft`] was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("title is required")]
    EmptyTitle,
    #[error("content is required")]
    EmptyContent,
    #[error("title and content are required")]
    EmptyTitleAndContent,
}

impl ValidationError {
    /// The inline message shown next to the form.
    pub fn message(&self) -> &'static str {
        REQUIRED_FIELDS_MESSAGE
    }
}

/// Title and content as entered by the user, before validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteDraft {
    pub title: String,
    pub content: String,
}

impl NoteDraft {
    pub fn new<T, C>(title: T, content: C) -> Self
    where
        T: Into<String>,
        C: Into<String>,
    {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }

    /// Checks that both fields contain something other than whitespace.
    ///
    /// The fields themselves are kept as entered; only the check trims.
    pub fn validate(&self) -> Result<(), ValidationError> {
        match (self.title.trim().is_empty(), self.content.trim().is_empty()) {
            (false, false) => Ok(()),
            (true, false) => Err(ValidationError::EmptyTitle),
            (false, true) => Err(ValidationError::EmptyContent),
            (true, true) => Err(ValidationError::EmptyTitleAndContent),
        }
    }

    /// Validates the draft and turns it into a [`Note`] carrying `id`.
    pub fn into_note(self, id: NoteId) -> Result<Note, ValidationError> {
        self.validate()?;
        Ok(Note {
            id,
            title: self.title,
            content: self.content,
        })
    }
}

impl From<&Note> for NoteDraft {
    fn from(note: &Note) -> Self {
        NoteDraft::new(note.title.clone(), note.content.clone())
    }
}

/// Every note, in insertion order. Persisted as a single JSON array.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteCollection(Vec<Note>);

impl NoteCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Note> {
        self.0.iter()
    }

    pub fn get(&self, id: &NoteId) -> Option<&Note> {
        self.0.iter().find(|note| &note.id == id)
    }

    pub fn contains(&self, id: &NoteId) -> bool {
        self.get(id).is_some()
    }

    /// Appends `note` at the end.
    pub fn push(&mut self, note: Note) {
        self.0.push(note);
    }

    /// Replaces the title and content of every note matching `id`, keeping id and position.
    ///
    /// Returns `true` if anything matched.
    pub fn replace(&mut self, id: &NoteId, draft: &NoteDraft) -> bool {
        let mut replaced = false;
        for note in self.0.iter_mut().filter(|note| &note.id == id) {
            note.title.clone_from(&draft.title);
            note.content.clone_from(&draft.content);
            replaced = true;
        }
        replaced
    }

    /// Drops every note matching `id`. Returns `true` if anything was removed.
    pub fn remove(&mut self, id: &NoteId) -> bool {
        let before = self.0.len();
        self.0.retain(|note| &note.id != id);
        self.0.len() != before
    }
}

impl From<Vec<Note>> for NoteCollection {
    fn from(notes: Vec<Note>) -> Self {
        NoteCollection(notes)
    }
}

impl From<NoteCollection> for Vec<Note> {
    fn from(collection: NoteCollection) -> Self {
        collection.0
    }
}

impl FromIterator<Note> for NoteCollection {
    fn from_iter<I: IntoIterator<Item = Note>>(iter: I) -> Self {
        NoteCollection(iter.into_iter().collect())
    }
}

impl IntoIterator for NoteCollection {
    type Item = Note;
    type IntoIter = std::vec::IntoIter<Note>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a NoteCollection {
    type Item = &'a Note;
    type IntoIter = std::slice::Iter<'a, Note>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
