use super::{FlowError, FlowState, NoteCollectionView};
use crate::note::{Note, NoteDraft, NoteId};
use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};
#[cfg(feature = "tracing")]
use tracing::{debug, error, warn};

pub const ADD_SUCCESS_MESSAGE: &str = "Note added successfully!";
pub const EDIT_SUCCESS_MESSAGE: &str = "Note updated successfully!";
pub const NOT_FOUND_MESSAGE: &str = "Note not found.";

/// Which note a [`NoteForm`] writes to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    /// Appends a new note on submit.
    Add,
    /// Replaces the title and content of an existing note on submit.
    Edit(NoteId),
}

/// The add and edit screens.
///
/// Dropping the form tears the screen down: a navigation still waiting on the pacing delay is
/// abandoned, while a write that already happened stays.
#[derive(Debug)]
pub struct NoteForm {
    view: NoteCollectionView,
    mode: FormMode,
    draft: NoteDraft,
    state: FlowState,
    mounted: Arc<AtomicBool>,
}

impl NoteForm {
    pub(super) fn new(
        view: NoteCollectionView,
        mode: FormMode,
        existing: Option<NoteDraft>,
    ) -> Self {
        let state = match (&mode, &existing) {
            (FormMode::Edit(_), None) => FlowState::NotFound,
            _ => FlowState::Idle,
        };
        Self {
            view,
            mode,
            draft: existing.unwrap_or_default(),
            state,
            mounted: Arc::new(AtomicBool::new(true)),
        }
    }

    pub fn mode(&self) -> &FormMode {
        &self.mode
    }

    pub fn state(&self) -> &FlowState {
        &self.state
    }

    pub fn title(&self) -> &str {
        &self.draft.title
    }

    pub fn content(&self) -> &str {
        &self.draft.content
    }

    pub fn set_title<T: Into<String>>(&mut self, title: T) {
        self.draft.title = title.into();
    }

    pub fn set_content<T: Into<String>>(&mut self, content: T) {
        self.draft.content = content.into();
    }

    /// The inline error for the current state, if any.
    pub fn error_message(&self) -> Option<&str> {
        match &self.state {
            FlowState::Invalid(err) => Some(err.message()),
            FlowState::Failed(message) => Some(message),
            FlowState::NotFound => Some(NOT_FOUND_MESSAGE),
            _ => None,
        }
    }

    /// The inline confirmation after a successful submit.
    pub fn success_message(&self) -> Option<&'static str> {
        match (&self.state, &self.mode) {
            (FlowState::Succeeded, FormMode::Add) => Some(ADD_SUCCESS_MESSAGE),
            (FlowState::Succeeded, FormMode::Edit(_)) => Some(EDIT_SUCCESS_MESSAGE),
            _ => None,
        }
    }

    /// Validates and persists the current fields.
    ///
    /// On failure the form stays open with the reason in [`state`](Self::state). An edit form whose
    /// note is missing keeps reporting that until a submit finds the note again. On success an
    /// add form clears its fields and the dashboard is requested after the pacing delay.
    pub fn submit(&mut self) -> Result<Note, FlowError> {
        let not_found = self.state == FlowState::NotFound;
        self.transition(FlowState::Validating);
        if let Err(err) = self.draft.validate() {
            #[cfg(feature = "tracing")]
            warn!("Rejected note: {err}");
            // a missing note outranks blank fields
            if let (true, FormMode::Edit(id)) = (not_found, &self.mode) {
                let id = id.clone();
                self.transition(FlowState::NotFound);
                return Err(FlowError::NotFound(id));
            }
            self.transition(FlowState::Invalid(err));
            return Err(err.into());
        }

        self.transition(FlowState::Persisting);
        let result = match &self.mode {
            FormMode::Add => self.view.add(self.draft.clone()),
            FormMode::Edit(id) => self.view.edit(id, self.draft.clone()),
        };

        match result {
            Ok(note) => {
                if self.mode == FormMode::Add {
                    self.draft = NoteDraft::default();
                }
                self.transition(FlowState::Succeeded);
                self.view.navigate_to_list(self.mounted.clone());
                Ok(note)
            }
            Err(FlowError::NotFound(id)) => {
                self.transition(FlowState::NotFound);
                Err(FlowError::NotFound(id))
            }
            Err(err) => {
                #[cfg(feature = "tracing")]
                error!("Could not save note: {err}");
                self.transition(FlowState::Failed(err.to_string()));
                Err(err)
            }
        }
    }

    fn transition(&mut self, next: FlowState) {
        #[cfg(feature = "tracing")]
        debug!("Form {:?}: {:?} -> {:?}", self.mode, self.state, next);
        self.state = next;
    }
}

impl Drop for NoteForm {
    fn drop(&mut self) {
        self.mounted.store(false, Ordering::SeqCst);
    }
}
