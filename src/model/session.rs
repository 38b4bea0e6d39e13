use serde::{Deserialize, Serialize};

use crate::model::Record;

/// Which remote mutation a submitted draft turns into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum EditMode {
    Create,
    Update,
    #[default]
    None,
}

impl EditMode {
    /// Dialog title and confirm button text
    pub fn label(&self) -> &'static str {
        match self {
            EditMode::Create => "Add",
            EditMode::Update => "Edit",
            EditMode::None => "None",
        }
    }
}

/// Form editing session owned by the draft controller
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EditSession {
    pub is_open: bool,
    pub mode: EditMode,
    pub draft: Record,
}

impl EditSession {
    pub fn closed() -> Self {
        Self::default()
    }

    pub fn create() -> Self {
        Self {
            is_open: true,
            mode: EditMode::Create,
            draft: Record::blank(),
        }
    }

    /// `source` is cloned so draft edits never reach the collection
    pub fn update(source: &Record) -> Self {
        Self {
            is_open: true,
            mode: EditMode::Update,
            draft: source.clone(),
        }
    }
}
