use parking_lot::Mutex;
use std::collections::HashSet;

use crate::logic::{filter_records, Notifier};
use crate::model::{Record, RecordId};
use crate::store::traits::RecordRemote;
use crate::store::RemoteError;

/// Shown when a delete fails; the response body is never read
pub const DELETE_FAILED_MESSAGE: &str = "Could not delete the user";
/// Shown when a create/update failure carries no server message
pub const REQUEST_FAILED_MESSAGE: &str = "The request could not be completed";

/// Identifies a mutation for in-flight de-duplication
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MutationKey {
    Create,
    Record(RecordId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationOutcome {
    /// The remote accepted the mutation and local state reflects it
    Committed,
    /// The remote call failed; local state is untouched and the notifier was told
    Failed,
    /// A mutation with the same key is already in flight; nothing was sent
    Busy,
    /// The initial load failed and the collection is no longer usable
    Unavailable,
}

impl MutationOutcome {
    pub fn is_committed(&self) -> bool {
        matches!(self, MutationOutcome::Committed)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    Idle,
    Loading,
    Ready,
    /// Terminal; the page is unavailable
    Failed,
}

#[derive(Debug, Default)]
struct CollectionState {
    authoritative: Vec<Record>,
    filter_query: String,
    visible: Vec<Record>,
    load_state: LoadState,
    in_flight: HashSet<MutationKey>,
}

impl CollectionState {
    fn refresh_view(&mut self) {
        self.visible = filter_records(&self.authoritative, &self.filter_query);
    }
}

/// Releases its mutation key when dropped, including when the owning future is
/// dropped mid-request
struct InFlight<'a> {
    state: &'a Mutex<CollectionState>,
    key: MutationKey,
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.state.lock().in_flight.remove(&self.key);
    }
}

/// Owner of the authoritative user collection and its filtered view.
///
/// All methods take `&self`; the state lock is never held across a remote call,
/// so operations on different records may overlap and apply in the order their
/// responses arrive.
pub struct CollectionStore<R> {
    remote: R,
    notifier: Notifier,
    state: Mutex<CollectionState>,
}

impl<R: RecordRemote> CollectionStore<R> {
    pub fn new(remote: R, notifier: Notifier) -> Self {
        Self {
            remote,
            notifier,
            state: Mutex::new(CollectionState::default()),
        }
    }

    pub fn remote(&self) -> &R {
        &self.remote
    }

    pub fn notifier(&self) -> &Notifier {
        &self.notifier
    }

    pub fn authoritative(&self) -> Vec<Record> {
        self.state.lock().authoritative.clone()
    }

    pub fn visible(&self) -> Vec<Record> {
        self.state.lock().visible.clone()
    }

    pub fn filter_query(&self) -> String {
        self.state.lock().filter_query.clone()
    }

    pub fn get(&self, id: RecordId) -> Option<Record> {
        self.state
            .lock()
            .authoritative
            .iter()
            .find(|record| record.id == id)
            .cloned()
    }

    pub fn load_state(&self) -> LoadState {
        self.state.lock().load_state
    }

    pub fn is_loading(&self) -> bool {
        self.load_state() == LoadState::Loading
    }

    /// The fatal flag: set once a load fails, never cleared
    pub fn is_failed(&self) -> bool {
        self.load_state() == LoadState::Failed
    }

    pub fn is_in_flight(&self, key: MutationKey) -> bool {
        self.state.lock().in_flight.contains(&key)
    }

    /// Fetch the whole collection and replace local state with it
    pub async fn load(&self) -> LoadState {
        {
            let mut state = self.state.lock();
            if state.load_state == LoadState::Failed {
                return LoadState::Failed;
            }
            state.load_state = LoadState::Loading;
        }

        let result = self.remote.list_records().await;

        let mut state = self.state.lock();
        match result {
            Ok(records) => {
                log::info!("Loaded {} users", records.len());
                state.authoritative = records;
                state.load_state = LoadState::Ready;
                state.refresh_view();
            }
            Err(err) => {
                log::warn!("Loading users failed, page is unavailable: {}", err);
                state.load_state = LoadState::Failed;
            }
        }
        state.load_state
    }

    /// Post a new record; on success the collection is re-fetched so the
    /// server-assigned id and canonical data become authoritative
    pub async fn create(&self, record: &Record) -> MutationOutcome {
        let _guard = match self.begin(MutationKey::Create) {
            Ok(guard) => guard,
            Err(outcome) => return outcome,
        };

        match self.remote.create_record(record).await {
            Ok(created) => {
                log::info!("Created user {} ({})", created.id, created.code);
                self.load().await;
                MutationOutcome::Committed
            }
            Err(err) => {
                log::warn!("Creating user {} failed: {}", record.code, err);
                self.notify_failure(&err);
                MutationOutcome::Failed
            }
        }
    }

    /// Put the full record; on success the matching local entry becomes exactly
    /// the submitted record
    pub async fn update(&self, record: &Record) -> MutationOutcome {
        let _guard = match self.begin(MutationKey::Record(record.id)) {
            Ok(guard) => guard,
            Err(outcome) => return outcome,
        };

        match self.remote.update_record(record).await {
            Ok(_) => {
                let mut state = self.state.lock();
                match state.authoritative.iter_mut().find(|r| r.id == record.id) {
                    Some(existing) => *existing = record.clone(),
                    None => log::warn!("Updated user {} is no longer in the collection", record.id),
                }
                state.refresh_view();
                log::info!("Updated user {}", record.id);
                MutationOutcome::Committed
            }
            Err(err) => {
                log::warn!("Updating user {} failed: {}", record.id, err);
                self.notify_failure(&err);
                MutationOutcome::Failed
            }
        }
    }

    pub async fn delete(&self, id: RecordId) -> MutationOutcome {
        let _guard = match self.begin(MutationKey::Record(id)) {
            Ok(guard) => guard,
            Err(outcome) => return outcome,
        };

        match self.remote.delete_record(id).await {
            Ok(()) => {
                let mut state = self.state.lock();
                state.authoritative.retain(|record| record.id != id);
                state.refresh_view();
                log::info!("Deleted user {}", id);
                MutationOutcome::Committed
            }
            Err(err) => {
                log::warn!("Deleting user {} failed: {}", id, err);
                self.notifier.show(DELETE_FAILED_MESSAGE);
                MutationOutcome::Failed
            }
        }
    }

    /// Change the search string; never touches the collection or the remote
    pub fn set_filter(&self, query: &str) {
        let mut state = self.state.lock();
        state.filter_query = query.to_string();
        state.refresh_view();
    }

    fn begin(&self, key: MutationKey) -> Result<InFlight<'_>, MutationOutcome> {
        let mut state = self.state.lock();
        if state.load_state == LoadState::Failed {
            return Err(MutationOutcome::Unavailable);
        }
        if !state.in_flight.insert(key) {
            log::debug!("Ignoring {:?}: a mutation for it is already in flight", key);
            return Err(MutationOutcome::Busy);
        }
        Ok(InFlight {
            state: &self.state,
            key,
        })
    }

    fn notify_failure(&self, err: &RemoteError) {
        self.notifier
            .show(err.server_message().unwrap_or(REQUEST_FAILED_MESSAGE));
    }
}
