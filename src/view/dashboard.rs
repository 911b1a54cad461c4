use super::NoteCollectionView;
use crate::{
    note::{NoteCollection, NoteId},
    route::Route,
    store::StoreError,
};

/// Shown instead of the list when there are no notes.
pub const EMPTY_DASHBOARD_MESSAGE: &str = "No notes available. Click 'Add Note' to get started.";

/// The list screen.
#[derive(Debug)]
pub struct Dashboard {
    view: NoteCollectionView,
    notes: NoteCollection,
}

impl Dashboard {
    pub(super) fn new(view: NoteCollectionView, notes: NoteCollection) -> Self {
        Self { view, notes }
    }

    /// The notes as last loaded or written.
    pub fn notes(&self) -> &NoteCollection {
        &self.notes
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// The placeholder text, if there is nothing to list.
    pub fn empty_message(&self) -> Option<&'static str> {
        self.notes.is_empty().then_some(EMPTY_DASHBOARD_MESSAGE)
    }

    /// Link target for the edit button of note `id`.
    pub fn edit_route(&self, id: &NoteId) -> Route {
        Route::Edit(id.clone())
    }

    /// Reloads the notes from storage.
    pub fn refresh(&mut self) -> Result<(), StoreError> {
        self.notes = self.view.list()?;
        Ok(())
    }

    /// Deletes note `id`. The list changes only once the write succeeded.
    ///
    /// Returns whether a note was removed.
    pub fn delete(&mut self, id: &NoteId) -> Result<bool, StoreError> {
        let persisted = self.view.delete(id)?;
        let removed = self.notes.contains(id) && !persisted.contains(id);
        self.notes = persisted;
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        note::NoteDraft,
        storage::{MemoryStorage, StorageError},
        store::{NOTES_STORAGE_KEY, tests::FailingStorage},
        view::{NoteCollectionView, tests::view_over},
    };

    #[test]
    fn empty_dashboard_shows_placeholder() {
        let view = view_over(MemoryStorage::new());
        let dashboard = view.dashboard().unwrap();
        assert!(dashboard.is_empty());
        assert_eq!(dashboard.empty_message(), Some(EMPTY_DASHBOARD_MESSAGE));
    }

    #[test]
    fn delete_updates_list_after_write() {
        let storage = MemoryStorage::new();
        let view = view_over(storage.clone());
        let kept = view.add(NoteDraft::new("keep", "me")).unwrap();
        let dropped = view.add(NoteDraft::new("drop", "me")).unwrap();

        let mut dashboard = view.dashboard().unwrap();
        assert_eq!(dashboard.empty_message(), None);
        assert!(dashboard.delete(&dropped.id).unwrap());
        assert_eq!(dashboard.notes().iter().collect::<Vec<_>>(), vec![&kept]);
        assert_eq!(view.list().unwrap(), *dashboard.notes());

        assert!(!dashboard.delete(&dropped.id).unwrap());
        assert_eq!(dashboard.notes().len(), 1);
    }

    #[test]
    fn failed_delete_keeps_the_list() {
        let mut storage = FailingStorage::default();
        let note = NoteDraft::new("t", "c")
            .into_note("a".parse().unwrap())
            .unwrap();
        crate::storage::KeyValueStorage::set(
            &mut storage.inner,
            NOTES_STORAGE_KEY,
            &serde_json::to_string(&vec![note.clone()]).unwrap(),
        )
        .unwrap();
        storage.fail_writes = true;

        let view = NoteCollectionView::new(storage);
        let mut dashboard = view.dashboard().unwrap();
        let err = dashboard.delete(&note.id).unwrap_err();
        assert!(matches!(err, StoreError::Storage(StorageError::WebSys(_))));
        assert_eq!(dashboard.notes().len(), 1);
        assert_eq!(view.list().unwrap().len(), 1);
    }

    #[test]
    fn refresh_picks_up_writes_from_other_screens() {
        let view = view_over(MemoryStorage::new());
        let mut dashboard = view.dashboard().unwrap();
        let note = view.add(NoteDraft::new("t", "c")).unwrap();
        assert!(dashboard.is_empty());
        dashboard.refresh().unwrap();
        assert!(dashboard.notes().contains(&note.id));
        assert_eq!(dashboard.edit_route(&note.id).to_string(), "/edit/note-1");
    }
}
