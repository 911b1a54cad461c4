//! The dashboard and the add/edit forms, driven over a shared [`NoteStore`].
//!
//! Every mutation is one read-modify-write cycle: the current collection is loaded, changed in
//! memory and written back whole. A screen only reflects a change after the write returned
//! successfully.

use crate::{
    id::IdGenerator,
    note::{Note, NoteCollection, NoteDraft, NoteId, ValidationError},
    option::NotesOptions,
    route::Route,
    storage::KeyValueStorage,
    store::{NoteStore, StoreError},
    util::{callback::OnNavigate, timer::schedule_navigation},
};
use parking_lot::Mutex;
use std::{
    fmt,
    sync::{Arc, atomic::AtomicBool},
    time::Duration,
};
#[cfg(feature = "tracing")]
use tracing::{debug, info};

mod dashboard;
mod form;

pub use dashboard::{Dashboard, EMPTY_DASHBOARD_MESSAGE};
pub use form::{
    ADD_SUCCESS_MESSAGE, EDIT_SUCCESS_MESSAGE, FormMode, NOT_FOUND_MESSAGE, NoteForm,
};

/// The error type for add, edit and delete flows.
#[derive(Debug, thiserror::Error)]
pub enum FlowError {
    /// The draft was rejected. Nothing was read or written.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
    /// The note to edit is not in the collection. Nothing was written.
    #[error("Note not found: {0}")]
    NotFound(NoteId),
    /// Reading or writing the collection failed.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Progress of a single submit.
///
/// `Idle -> Validating -> {Invalid | Persisting -> {Failed | Succeeded}}`. A form whose note is
/// missing sits in `NotFound` instead.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FlowState {
    #[default]
    Idle,
    Validating,
    Invalid(ValidationError),
    Persisting,
    Failed(String),
    Succeeded,
    NotFound,
}

/// The screen shown for a [`Route`].
#[derive(Debug)]
pub enum Screen {
    Dashboard(Dashboard),
    Form(NoteForm),
}

struct ViewInner {
    store: Mutex<NoteStore>,
    ids: IdGenerator,
    navigation_delay: Duration,
    on_navigate: Option<OnNavigate>,
}

/// Sole owner of the note store for one application instance.
///
/// Clones share the same store; screens created from it keep a clone.
#[derive(Clone)]
pub struct NoteCollectionView(Arc<ViewInner>);

impl fmt::Debug for NoteCollectionView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NoteCollectionView")
            .field("store", &*self.0.store.lock())
            .field("navigation_delay", &self.0.navigation_delay)
            .finish_non_exhaustive()
    }
}

impl NoteCollectionView {
    /// Creates a view over `storage` with default options.
    pub fn new<S>(storage: S) -> Self
    where
        S: Into<Box<dyn KeyValueStorage>>,
    {
        Self::new_with_options(storage, NotesOptions::default())
    }

    /// Creates a view over `storage` with the given options.
    pub fn new_with_options<S>(storage: S, options: NotesOptions) -> Self
    where
        S: Into<Box<dyn KeyValueStorage>>,
    {
        let store = NoteStore::with_key(storage, options.storage_key());
        let navigation_delay = options.navigation_delay();
        Self(Arc::new(ViewInner {
            store: Mutex::new(store),
            ids: options.id_generator.unwrap_or_default(),
            navigation_delay,
            on_navigate: options.on_navigate,
        }))
    }

    /// Builds the screen for `route`. Every screen starts from a fresh load.
    pub fn enter(&self, route: &Route) -> Result<Screen, StoreError> {
        #[cfg(feature = "tracing")]
        debug!("Entering {route}");
        Ok(match route {
            Route::List => Screen::Dashboard(self.dashboard()?),
            Route::Add => Screen::Form(self.add_form()),
            Route::Edit(id) => Screen::Form(self.edit_form(id.clone())?),
        })
    }

    /// Loads the collection into a new [`Dashboard`].
    pub fn dashboard(&self) -> Result<Dashboard, StoreError> {
        Ok(Dashboard::new(self.clone(), self.list()?))
    }

    /// An empty form for a new note.
    pub fn add_form(&self) -> NoteForm {
        NoteForm::new(self.clone(), FormMode::Add, None)
    }

    /// A form pre-filled with the note `id`, or an empty form in the `NotFound` state.
    pub fn edit_form(&self, id: NoteId) -> Result<NoteForm, StoreError> {
        let notes = self.list()?;
        let existing = notes.get(&id).map(NoteDraft::from);
        Ok(NoteForm::new(self.clone(), FormMode::Edit(id), existing))
    }

    /// Returns every note.
    pub fn list(&self) -> Result<NoteCollection, StoreError> {
        self.0.store.lock().load()
    }

    /// Validates `draft` and appends it as a new note with a fresh id.
    pub fn add(&self, draft: NoteDraft) -> Result<Note, FlowError> {
        let note = draft.into_note(self.0.ids.generate())?;
        self.0.store.lock().modify(|notes| {
            notes.push(note.clone());
            true
        })?;
        #[cfg(feature = "tracing")]
        info!("Added note {}", note.id);
        Ok(note)
    }

    /// Validates `draft` and replaces the title and content of note `id`.
    ///
    /// The collection is re-read here rather than reusing whatever the form loaded on entry. An
    /// id that is no longer present is reported as [`FlowError::NotFound`] and nothing is written.
    pub fn edit(&self, id: &NoteId, draft: NoteDraft) -> Result<Note, FlowError> {
        draft.validate()?;
        let (notes, replaced) = self
            .0
            .store
            .lock()
            .modify(|notes| notes.replace(id, &draft))?;
        match notes.get(id) {
            Some(note) if replaced => {
                #[cfg(feature = "tracing")]
                info!("Updated note {id}");
                Ok(note.clone())
            }
            _ => Err(FlowError::NotFound(id.clone())),
        }
    }

    /// Removes note `id` and returns the collection as persisted. Deleting a missing id writes
    /// nothing and returns the collection unchanged.
    pub fn delete(&self, id: &NoteId) -> Result<NoteCollection, StoreError> {
        let (notes, _removed) = self.0.store.lock().modify(|notes| notes.remove(id))?;
        #[cfg(feature = "tracing")]
        {
            if _removed {
                info!("Deleted note {id}");
            } else {
                debug!("Delete of missing note {id} ignored");
            }
        }
        Ok(notes)
    }

    pub(crate) fn navigate_to_list(&self, mounted: Arc<AtomicBool>) {
        schedule_navigation(
            self.0.navigation_delay,
            Route::List,
            self.0.on_navigate.clone(),
            mounted,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        storage::{MemoryStorage, StorageError},
        store::{NOTES_STORAGE_KEY, tests::FailingStorage},
    };
    use std::sync::atomic::{AtomicUsize, Ordering};

    pub(super) fn counting_ids() -> IdGenerator {
        let next = Arc::new(AtomicUsize::new(1));
        IdGenerator::from(move || {
            let n = next.fetch_add(1, Ordering::SeqCst);
            format!("note-{n}").parse::<NoteId>().unwrap()
        })
    }

    pub(super) fn view_over(storage: MemoryStorage) -> NoteCollectionView {
        let options = NotesOptions::builder()
            .navigation_delay(Duration::ZERO)
            .id_generator(counting_ids())
            .build();
        NoteCollectionView::new_with_options(storage, options)
    }

    fn seeded() -> (NoteCollectionView, NoteCollection) {
        let view = view_over(MemoryStorage::new());
        for (title, content) in [("A", "1"), ("B", "2"), ("C", "3")] {
            view.add(NoteDraft::new(title, content)).unwrap();
        }
        let notes = view.list().unwrap();
        (view, notes)
    }

    #[test]
    fn add_appends_exactly_one_note_with_a_new_id() {
        let (view, before) = seeded();
        let note = view.add(NoteDraft::new("D", "4")).unwrap();
        assert!(!before.contains(&note.id));

        let after = view.list().unwrap();
        assert_eq!(after.len(), before.len() + 1);
        assert_eq!(after.iter().last(), Some(&note));
        assert_eq!(
            after.iter().take(before.len()).cloned().collect::<NoteCollection>(),
            before
        );
    }

    #[test]
    fn add_rejects_blank_fields_without_touching_storage() {
        let storage = MemoryStorage::new();
        let view = view_over(storage.clone());
        let err = view.add(NoteDraft::new("", "x")).unwrap_err();
        assert!(matches!(
            err,
            FlowError::Validation(ValidationError::EmptyTitle)
        ));
        assert!(view.list().unwrap().is_empty());
        assert_eq!(storage.raw(NOTES_STORAGE_KEY), None);
    }

    #[test]
    fn delete_removes_only_that_note() {
        let (view, before) = seeded();
        let target = before.iter().nth(1).unwrap().id.clone();

        let persisted = view.delete(&target).unwrap();
        let mut expected = before.clone();
        expected.remove(&target);
        assert_eq!(persisted, expected);
        assert_eq!(view.list().unwrap(), expected);
    }

    #[test]
    fn delete_of_missing_id_is_a_no_op() {
        let (view, before) = seeded();
        let persisted = view.delete(&"missing".parse().unwrap()).unwrap();
        assert_eq!(persisted, before);
        assert_eq!(view.list().unwrap(), before);
    }

    #[test]
    fn edit_replaces_only_title_and_content() {
        let (view, before) = seeded();
        let target = before.iter().nth(1).unwrap().id.clone();

        let updated = view.edit(&target, NoteDraft::new("B2", "22")).unwrap();
        assert_eq!(updated.id, target);

        let after = view.list().unwrap();
        let position = after.iter().position(|n| n.id == target);
        assert_eq!(position, Some(1));
        for (old, new) in before.iter().zip(after.iter()) {
            if old.id == target {
                assert_eq!((new.title.as_str(), new.content.as_str()), ("B2", "22"));
            } else {
                assert_eq!(old, new);
            }
        }
    }

    #[test]
    fn edit_of_missing_id_leaves_collection_untouched() {
        let (view, before) = seeded();
        let missing: NoteId = "missing".parse().unwrap();
        let err = view.edit(&missing, NoteDraft::new("x", "y")).unwrap_err();
        assert!(matches!(err, FlowError::NotFound(id) if id == missing));
        assert_eq!(view.list().unwrap(), before);
    }

    #[test]
    fn edit_validates_before_reading() {
        let storage = FailingStorage {
            fail_reads: true,
            ..Default::default()
        };
        let view = NoteCollectionView::new(storage);
        let err = view
            .edit(&"a".parse().unwrap(), NoteDraft::new("x", " "))
            .unwrap_err();
        assert!(matches!(
            err,
            FlowError::Validation(ValidationError::EmptyContent)
        ));
    }

    #[test]
    fn failed_write_is_reported() {
        let storage = FailingStorage {
            fail_writes: true,
            ..Default::default()
        };
        let view = NoteCollectionView::new(storage);
        let err = view.add(NoteDraft::new("t", "c")).unwrap_err();
        assert!(matches!(
            err,
            FlowError::Store(StoreError::Storage(StorageError::WebSys(_)))
        ));
        assert!(view.list().unwrap().is_empty());
    }

    #[test]
    fn corrupt_value_blocks_every_flow() {
        let storage = MemoryStorage::with_value(NOTES_STORAGE_KEY, "{{ definitely not json");
        let view = view_over(storage.clone());

        assert!(matches!(view.list(), Err(StoreError::CorruptData(_))));
        assert!(matches!(
            view.add(NoteDraft::new("t", "c")),
            Err(FlowError::Store(StoreError::CorruptData(_)))
        ));
        assert!(matches!(
            view.delete(&"a".parse().unwrap()),
            Err(StoreError::CorruptData(_))
        ));
        assert_eq!(
            storage.raw(NOTES_STORAGE_KEY).as_deref(),
            Some("{{ definitely not json")
        );
    }

    #[test]
    fn custom_storage_key_is_used() {
        let storage = MemoryStorage::new();
        let options = NotesOptions::builder().storage_key("scratch").build();
        let view = NoteCollectionView::new_with_options(storage.clone(), options);
        view.add(NoteDraft::new("t", "c")).unwrap();
        assert!(storage.raw("scratch").is_some());
        assert_eq!(storage.raw(NOTES_STORAGE_KEY), None);
    }

    #[test]
    fn enter_builds_the_matching_screen() {
        let (view, before) = seeded();
        let first = before.iter().next().unwrap().clone();

        match view.enter(&Route::List).unwrap() {
            Screen::Dashboard(dashboard) => assert_eq!(dashboard.notes(), &before),
            other => panic!("expected dashboard, got {other:?}"),
        }
        match view.enter(&Route::Add).unwrap() {
            Screen::Form(form) => {
                assert_eq!(form.mode(), &FormMode::Add);
                assert!(form.title().is_empty());
            }
            other => panic!("expected form, got {other:?}"),
        }
        match view.enter(&Route::Edit(first.id.clone())).unwrap() {
            Screen::Form(form) => {
                assert_eq!(form.mode(), &FormMode::Edit(first.id.clone()));
                assert_eq!(form.title(), first.title);
                assert_eq!(form.content(), first.content);
            }
            other => panic!("expected form, got {other:?}"),
        }
    }
}
