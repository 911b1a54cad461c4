//! Configuration for [`NoteCollectionView`](crate::view::NoteCollectionView).

use crate::{id::IdGenerator, store::NOTES_STORAGE_KEY, util::callback::OnNavigate};
use std::time::Duration;

/// The pause between a confirmed write and the move back to the dashboard.
pub const DEFAULT_NAVIGATION_DELAY: Duration = Duration::from_millis(1000);

/// Options for [`NoteCollectionView::new_with_options`](crate::view::NoteCollectionView::new_with_options).
#[derive(Clone, Debug, Default, bon::Builder)]
#[builder(on(String, into))]
pub struct NotesOptions {
    /// Storage key holding the collection. If not provided, `"notes"` is used.
    pub storage_key: Option<String>,

    /// Pause after a successful add or edit before navigating to the dashboard. If not provided,
    /// one second is used. A zero duration navigates immediately.
    pub navigation_delay: Option<Duration>,

    /// Callback invoked with the route to show next.
    #[builder(into)]
    pub on_navigate: Option<OnNavigate>,

    /// Source of identifiers for new notes. If not provided, random UUIDs are used.
    #[builder(into)]
    pub id_generator: Option<IdGenerator>,
}

impl NotesOptions {
    pub(crate) fn storage_key(&self) -> &str {
        self.storage_key.as_deref().unwrap_or(NOTES_STORAGE_KEY)
    }

    pub(crate) fn navigation_delay(&self) -> Duration {
        self.navigation_delay.unwrap_or(DEFAULT_NAVIGATION_DELAY)
    }
}
