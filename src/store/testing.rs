//! Scripted in-memory remote used by unit tests.

use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Notify;

use crate::model::{Record, RecordId};
use crate::store::traits::RecordRemote;
use crate::store::RemoteError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum Op {
    List,
    Create,
    Update,
    Delete,
}

#[derive(Debug, Default)]
struct Inner {
    records: Vec<Record>,
    next_id: RecordId,
    failures: HashMap<Op, RemoteError>,
    calls: HashMap<Op, usize>,
    gates: HashMap<Op, Arc<Notify>>,
}

/// Behaves like the CRUD endpoint, with per-operation failure injection.
/// Every call yields once so overlapping futures interleave.
#[derive(Debug, Default)]
pub(crate) struct ScriptedRemote {
    inner: Mutex<Inner>,
}

impl ScriptedRemote {
    pub fn with_records(records: Vec<Record>) -> Self {
        let next_id = records.iter().map(|r| r.id).max().unwrap_or(0) + 1;
        Self {
            inner: Mutex::new(Inner {
                records,
                next_id,
                ..Inner::default()
            }),
        }
    }

    pub fn fail(&self, op: Op, err: RemoteError) {
        self.inner.lock().failures.insert(op, err);
    }

    pub fn heal(&self, op: Op) {
        self.inner.lock().failures.remove(&op);
    }

    /// Park calls to `op` until [`ScriptedRemote::release`]
    pub fn hold(&self, op: Op) {
        self.inner.lock().gates.insert(op, Arc::new(Notify::new()));
    }

    pub fn release(&self, op: Op) {
        if let Some(gate) = self.inner.lock().gates.remove(&op) {
            gate.notify_one();
        }
    }

    pub fn calls(&self, op: Op) -> usize {
        self.inner.lock().calls.get(&op).copied().unwrap_or(0)
    }

    pub fn total_calls(&self) -> usize {
        self.inner.lock().calls.values().sum()
    }

    /// Change server-side data without going through the client
    pub fn insert_remote(&self, record: Record) {
        let mut inner = self.inner.lock();
        inner.next_id = inner.next_id.max(record.id + 1);
        inner.records.push(record);
    }

    pub fn remote_records(&self) -> Vec<Record> {
        self.inner.lock().records.clone()
    }

    async fn enter(&self, op: Op) -> Result<(), RemoteError> {
        let gate = {
            let mut inner = self.inner.lock();
            *inner.calls.entry(op).or_default() += 1;
            inner.gates.get(&op).cloned()
        };
        match gate {
            Some(gate) => gate.notified().await,
            None => tokio::task::yield_now().await,
        }
        match self.inner.lock().failures.get(&op) {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}

#[async_trait::async_trait]
impl RecordRemote for ScriptedRemote {
    async fn list_records(&self) -> Result<Vec<Record>, RemoteError> {
        self.enter(Op::List).await?;
        Ok(self.inner.lock().records.clone())
    }

    async fn create_record(&self, record: &Record) -> Result<Record, RemoteError> {
        self.enter(Op::Create).await?;
        let mut inner = self.inner.lock();
        let created = Record {
            id: inner.next_id,
            ..record.clone()
        };
        inner.next_id += 1;
        inner.records.push(created.clone());
        Ok(created)
    }

    async fn update_record(&self, record: &Record) -> Result<Record, RemoteError> {
        self.enter(Op::Update).await?;
        let mut inner = self.inner.lock();
        match inner.records.iter_mut().find(|r| r.id == record.id) {
            Some(existing) => {
                *existing = record.clone();
                Ok(record.clone())
            }
            None => Err(RemoteError::Rejected {
                status: 404,
                message: Some("User not found".to_string()),
            }),
        }
    }

    async fn delete_record(&self, id: RecordId) -> Result<(), RemoteError> {
        self.enter(Op::Delete).await?;
        let mut inner = self.inner.lock();
        let before = inner.records.len();
        inner.records.retain(|r| r.id != id);
        if inner.records.len() == before {
            return Err(RemoteError::Rejected {
                status: 404,
                message: None,
            });
        }
        Ok(())
    }
}
