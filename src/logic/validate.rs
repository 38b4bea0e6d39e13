use crate::model::{Field, Record, ValidationState, MAX_CODE_LEN};

pub const REQUIRED_MESSAGE: &str = "Required field";
pub const CODE_TOO_LONG_MESSAGE: &str = "Code cannot be longer than 5 characters";

/// Derive the invalid flags for a draft. Lengths count chars, not bytes.
pub fn validate(draft: &Record) -> ValidationState {
    let code_len = draft.code.chars().count();
    ValidationState {
        code: code_len < 1 || code_len > MAX_CODE_LEN,
        name: draft.name.is_empty(),
        description: draft.description.is_empty(),
    }
}

pub fn form_valid(draft: &Record) -> bool {
    validate(draft).form_valid()
}

/// Helper text shown under an invalid field, `None` when the field is fine
pub fn field_message(draft: &Record, field: Field) -> Option<&'static str> {
    let value = draft.field(field);
    if value.is_empty() {
        return Some(REQUIRED_MESSAGE);
    }
    match field {
        Field::Code if value.chars().count() > MAX_CODE_LEN => Some(CODE_TOO_LONG_MESSAGE),
        _ => None,
    }
}
