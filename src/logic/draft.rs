use thiserror::Error;

use crate::logic::validate::{field_message, validate};
use crate::model::{EditMode, EditSession, Field, Record, ValidationState};
use crate::store::traits::RecordRemote;
use crate::store::{CollectionStore, MutationOutcome};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DraftError {
    #[error("an edit dialog is already open in {} mode", .0.label())]
    AlreadyOpen(EditMode),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftState {
    Closed,
    OpenCreate,
    OpenUpdate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Saved remotely; the dialog is now closed
    Committed,
    /// The remote call failed; the dialog stays open with the draft intact
    Failed,
    /// The draft fails validation; nothing was sent
    Invalid,
    /// No dialog is open
    NotOpen,
    /// The same record is already being saved
    Busy,
    /// The collection failed to load
    Unavailable,
}

/// Owns the edit dialog and its draft. Never writes to the collection itself;
/// submission goes through [`CollectionStore`].
#[derive(Debug, Clone, Default)]
pub struct DraftController {
    session: EditSession,
}

impl DraftController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> DraftState {
        match (self.session.is_open, self.session.mode) {
            (true, EditMode::Create) => DraftState::OpenCreate,
            (true, EditMode::Update) => DraftState::OpenUpdate,
            _ => DraftState::Closed,
        }
    }

    pub fn is_open(&self) -> bool {
        self.state() != DraftState::Closed
    }

    pub fn session(&self) -> &EditSession {
        &self.session
    }

    pub fn mode(&self) -> EditMode {
        self.session.mode
    }

    pub fn draft(&self) -> Option<&Record> {
        self.is_open().then_some(&self.session.draft)
    }

    /// Derived from the draft on every call; all-false while closed
    pub fn validation(&self) -> ValidationState {
        self.draft().map(validate).unwrap_or_default()
    }

    pub fn form_valid(&self) -> bool {
        self.is_open() && self.validation().form_valid()
    }

    pub fn field_message(&self, field: Field) -> Option<&'static str> {
        self.draft().and_then(|draft| field_message(draft, field))
    }

    pub fn open_create(&mut self) -> Result<(), DraftError> {
        self.ensure_closed()?;
        self.session = EditSession::create();
        Ok(())
    }

    pub fn open_update(&mut self, record: &Record) -> Result<(), DraftError> {
        self.ensure_closed()?;
        self.session = EditSession::update(record);
        Ok(())
    }

    /// Returns false when no dialog is open
    pub fn edit_field(&mut self, field: Field, value: impl Into<String>) -> bool {
        if !self.is_open() {
            return false;
        }
        self.session.draft.set_field(field, value.into());
        true
    }

    /// Discard the draft; returns false when already closed
    pub fn cancel(&mut self) -> bool {
        let was_open = self.is_open();
        self.session = EditSession::closed();
        was_open
    }

    pub async fn submit<R: RecordRemote>(&mut self, store: &CollectionStore<R>) -> SubmitOutcome {
        let outcome = match self.state() {
            DraftState::Closed => return SubmitOutcome::NotOpen,
            _ if !self.form_valid() => {
                log::debug!(
                    "Refusing to submit, invalid fields: {:?}",
                    self.validation().invalid_fields()
                );
                return SubmitOutcome::Invalid;
            }
            DraftState::OpenCreate => store.create(&self.session.draft).await,
            DraftState::OpenUpdate => store.update(&self.session.draft).await,
        };

        match outcome {
            MutationOutcome::Committed => {
                self.session = EditSession::closed();
                SubmitOutcome::Committed
            }
            MutationOutcome::Failed => SubmitOutcome::Failed,
            MutationOutcome::Busy => SubmitOutcome::Busy,
            MutationOutcome::Unavailable => SubmitOutcome::Unavailable,
        }
    }

    fn ensure_closed(&self) -> Result<(), DraftError> {
        if self.is_open() {
            return Err(DraftError::AlreadyOpen(self.session.mode));
        }
        Ok(())
    }
}
