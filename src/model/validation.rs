use serde::{Deserialize, Serialize};

use crate::model::Field;

pub const MAX_CODE_LEN: usize = 5;

/// Per-field invalid flags; `true` means the field currently fails validation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ValidationState {
    pub code: bool,
    pub name: bool,
    pub description: bool,
}

impl ValidationState {
    pub fn is_invalid(&self, field: Field) -> bool {
        match field {
            Field::Code => self.code,
            Field::Name => self.name,
            Field::Description => self.description,
        }
    }

    pub fn form_valid(&self) -> bool {
        !(self.code || self.name || self.description)
    }

    pub fn invalid_fields(&self) -> Vec<Field> {
        Field::ALL
            .into_iter()
            .filter(|field| self.is_invalid(*field))
            .collect()
    }
}
