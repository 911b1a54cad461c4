//! A single-user sticky-notes store persisted to local device storage.
//!
//! All notes live in one key-value slot as a JSON array. The dashboard and the add/edit forms
//! read the whole collection, change it in memory and write the whole collection back.
//!
//! In the browser (feature `wasm-js`) the slot is `window.localStorage["notes"]`. On native
//! targets (feature `file`) it is a JSON file in a directory of your choice.
//!
//! ```
//! use sticky_notes::{NoteCollectionView, NoteDraft, storage::MemoryStorage};
//!
//! let view = NoteCollectionView::new(MemoryStorage::new());
//! let note = view.add(NoteDraft::new("Groceries", "Milk, eggs"))?;
//! view.edit(&note.id, NoteDraft::new("Groceries", "Milk, eggs, bread"))?;
//! assert_eq!(view.list()?.get(&note.id).unwrap().content, "Milk, eggs, bread");
//!
//! view.delete(&note.id)?;
//! assert!(view.dashboard()?.empty_message().is_some());
//! # Ok::<(), sticky_notes::view::FlowError>(())
//! ```

pub mod id;
pub mod note;
pub mod option;
pub mod route;
pub mod storage;
pub mod store;
mod util;
pub mod view;

pub use note::{Note, NoteCollection, NoteDraft, NoteId, ValidationError};
pub use option::NotesOptions;
pub use route::Route;
pub use store::{CorruptDataError, NOTES_STORAGE_KEY, NoteStore, StoreError};
pub use util::callback;
pub use view::{Dashboard, FlowError, FlowState, NoteCollectionView, NoteForm, Screen};
