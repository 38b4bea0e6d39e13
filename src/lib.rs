pub mod app;
pub mod command;
pub mod config;
pub mod logic;
pub mod model;
pub mod store;

pub use app::{App, AppEvent, EventResult, ViewSnapshot};

// Export logic types
pub use logic::{
    filter_records, validate, DismissReason, DraftController, DraftError, DraftState, Notice,
    Notifier, SubmitOutcome,
};

// Export all model types
pub use model::*;

// Export store types
pub use store::{CollectionStore, HttpRemote, LoadState, MutationOutcome, RecordRemote, RemoteError};
