use crate::logic::{DismissReason, DraftController, DraftError, Notice, Notifier, SubmitOutcome};
use crate::model::{EditMode, Field, Record, RecordId, ValidationState};
use crate::store::traits::RecordRemote;
use crate::store::{CollectionStore, LoadState, MutationOutcome};

/// A UI event routed through [`App::dispatch`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    Load,
    SetFilter(String),
    OpenCreate,
    OpenUpdate(RecordId),
    EditField(Field, String),
    Submit,
    Cancel,
    Delete(RecordId),
    DismissNotice(DismissReason),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventResult {
    Loaded(LoadState),
    Filtered,
    Opened,
    OpenRejected(DraftError),
    NotFound(RecordId),
    Edited(bool),
    Submitted(SubmitOutcome),
    Cancelled(bool),
    Deleted(MutationOutcome),
    Dismissed(bool),
    /// The page failed to load; only `Load` is still answered
    PageUnavailable,
}

/// Render model of the edit dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogView {
    pub title: &'static str,
    pub draft: Record,
    pub validation: ValidationState,
    pub messages: Vec<(Field, &'static str)>,
    pub can_submit: bool,
}

/// Everything a frontend needs to draw the page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewSnapshot {
    pub loading: bool,
    pub unavailable: bool,
    pub filter: String,
    pub rows: Vec<Record>,
    pub dialog: Option<DialogView>,
    pub notice: Notice,
}

/// Wires the collection store, the draft controller and the notifier together
pub struct App<R> {
    store: CollectionStore<R>,
    draft: DraftController,
    notifier: Notifier,
}

impl<R: RecordRemote> App<R> {
    pub fn new(remote: R, notifier: Notifier) -> Self {
        Self {
            store: CollectionStore::new(remote, notifier.clone()),
            draft: DraftController::new(),
            notifier,
        }
    }

    pub fn store(&self) -> &CollectionStore<R> {
        &self.store
    }

    pub fn draft(&self) -> &DraftController {
        &self.draft
    }

    pub fn notifier(&self) -> &Notifier {
        &self.notifier
    }

    pub async fn dispatch(&mut self, event: AppEvent) -> EventResult {
        if self.store.is_failed() && event != AppEvent::Load {
            return EventResult::PageUnavailable;
        }

        match event {
            AppEvent::Load => EventResult::Loaded(self.store.load().await),
            AppEvent::SetFilter(query) => {
                self.store.set_filter(&query);
                EventResult::Filtered
            }
            AppEvent::OpenCreate => match self.draft.open_create() {
                Ok(()) => EventResult::Opened,
                Err(err) => EventResult::OpenRejected(err),
            },
            AppEvent::OpenUpdate(id) => {
                let Some(record) = self.store.get(id) else {
                    return EventResult::NotFound(id);
                };
                match self.draft.open_update(&record) {
                    Ok(()) => EventResult::Opened,
                    Err(err) => EventResult::OpenRejected(err),
                }
            }
            AppEvent::EditField(field, value) => {
                EventResult::Edited(self.draft.edit_field(field, value))
            }
            AppEvent::Submit => EventResult::Submitted(self.draft.submit(&self.store).await),
            AppEvent::Cancel => EventResult::Cancelled(self.draft.cancel()),
            AppEvent::Delete(id) => EventResult::Deleted(self.store.delete(id).await),
            AppEvent::DismissNotice(reason) => EventResult::Dismissed(self.notifier.dismiss(reason)),
        }
    }

    pub fn view(&self) -> ViewSnapshot {
        let dialog = self.draft.draft().map(|draft| DialogView {
            title: self.draft.mode().label(),
            draft: draft.clone(),
            validation: self.draft.validation(),
            messages: Field::ALL
                .into_iter()
                .filter_map(|field| self.draft.field_message(field).map(|m| (field, m)))
                .collect(),
            can_submit: self.draft.form_valid(),
        });

        ViewSnapshot {
            loading: self.store.is_loading(),
            unavailable: self.store.is_failed(),
            filter: self.store.filter_query(),
            rows: self.store.visible(),
            dialog,
            notice: self.notifier.notice(),
        }
    }

    pub fn mode(&self) -> EditMode {
        self.draft.mode()
    }
}
