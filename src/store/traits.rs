use crate::model::{Record, RecordId};
use crate::store::RemoteError;

/// The remote CRUD endpoint backing the user collection
#[async_trait::async_trait]
pub trait RecordRemote: Send + Sync {
    /// `GET <base>`
    async fn list_records(&self) -> Result<Vec<Record>, RemoteError>;
    /// `POST <base>`; the record id is not sent
    async fn create_record(&self, record: &Record) -> Result<Record, RemoteError>;
    /// `PUT <base>/<id>` with the full record
    async fn update_record(&self, record: &Record) -> Result<Record, RemoteError>;
    /// `DELETE <base>/<id>`
    async fn delete_record(&self, id: RecordId) -> Result<(), RemoteError>;
}
