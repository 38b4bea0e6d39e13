use serde::{Deserialize, Serialize};

pub type RecordId = i64;

/// Id carried by a record the remote store has not assigned yet
pub const UNASSIGNED_ID: RecordId = 0;

/// A user record as exchanged with the remote collection
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Record {
    pub id: RecordId,
    pub code: String,
    pub name: String,
    pub description: String,
}

impl Record {
    pub fn new(id: RecordId, code: &str, name: &str, description: &str) -> Self {
        Self {
            id,
            code: code.to_string(),
            name: name.to_string(),
            description: description.to_string(),
        }
    }

    /// Blank record used to seed a create draft
    pub fn blank() -> Self {
        Self::default()
    }

    pub fn is_new(&self) -> bool {
        self.id == UNASSIGNED_ID
    }

    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::Code => &self.code,
            Field::Name => &self.name,
            Field::Description => &self.description,
        }
    }

    pub fn set_field(&mut self, field: Field, value: String) {
        match field {
            Field::Code => self.code = value,
            Field::Name => self.name = value,
            Field::Description => self.description = value,
        }
    }

    /// Case-sensitive substring match against code, name or description
    pub fn matches(&self, query: &str) -> bool {
        self.code.contains(query) || self.name.contains(query) || self.description.contains(query)
    }

    /// Body sent on create; the remote store assigns the id
    pub fn as_new(&self) -> NewRecord<'_> {
        NewRecord {
            code: &self.code,
            name: &self.name,
            description: &self.description,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NewRecord<'a> {
    pub code: &'a str,
    pub name: &'a str,
    pub description: &'a str,
}

/// Editable fields of a record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Code,
    Name,
    Description,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Code, Field::Name, Field::Description];

    pub fn label(&self) -> &'static str {
        match self {
            Field::Code => "Code",
            Field::Name => "Name",
            Field::Description => "Description",
        }
    }
}

impl std::str::FromStr for Field {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "code" => Ok(Field::Code),
            "name" => Ok(Field::Name),
            "description" => Ok(Field::Description),
            other => Err(format!("unknown field '{}'", other)),
        }
    }
}
