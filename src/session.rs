//! Session module - Per-session reading history and the session registry

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use log::debug;
use parking_lot::{Mutex, RwLock};

use crate::sensor::anomaly::{assess, AnomalyCheck, AnomalyError};
use crate::sensor::Reading;

// ============================================================================
// RECORD - A reading as stored in the history
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Record {
    pub reading: Reading,
    pub csi: f64,
    pub anomaly: AnomalyCheck,
}

impl Record {
    pub fn is_anomaly(&self) -> bool {
        self.anomaly.is_anomaly
    }
}

// ============================================================================
// SESSION - Append-only history owned by one user
// ============================================================================

#[derive(Debug, Default, Clone)]
pub struct Session {
    records: Vec<Record>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Score `reading`, classify its temperature against the history as it
    /// stood before this call, then append it.
    ///
    /// An empty history is seeded with the reading's own temperature, so the
    /// first reading of a session is never an anomaly.
    pub fn record(&mut self, reading: Reading) -> Result<Record, AnomalyError> {
        let mut prior = self.temperatures();
        if prior.is_empty() {
            prior.push(reading.temperature);
        }

        let anomaly = assess(&prior, reading.temperature)?;
        let stress = reading.stress_breakdown();
        let record = Record {
            reading,
            csi: stress.csi,
            anomaly,
        };
        debug!(
            "recorded reading #{}: csi={:.2} (temp {:.2}, humidity {:.2}, soil {:.2}) z={:?}",
            self.records.len() + 1,
            record.csi,
            stress.temperature_score,
            stress.humidity_score,
            stress.soil_score,
            anomaly.z_score
        );

        self.records.push(record);
        Ok(record)
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn temperatures(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.reading.temperature).collect()
    }

    pub fn latest(&self) -> Option<&Record> {
        self.records.last()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

// ============================================================================
// SESSION REGISTRY - Isolated sessions for concurrent users
// ============================================================================

pub type SessionId = u64;

#[derive(Clone, Default)]
pub struct SessionRegistry {
    sessions: Arc<RwLock<HashMap<SessionId, Arc<Mutex<Session>>>>>,
    next_id: Arc<AtomicU64>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(&self) -> SessionId {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed) + 1;
        self.sessions
            .write()
            .insert(id, Arc::new(Mutex::new(Session::new())));
        debug!("opened session {id}");
        id
    }

    /// Run `f` against one session's history. Returns `None` for unknown ids.
    pub fn with_session<F, T>(&self, id: SessionId, f: F) -> Option<T>
    where
        F: FnOnce(&mut Session) -> T,
    {
        let session = self.sessions.read().get(&id).cloned()?;
        let mut guard = session.lock();
        Some(f(&mut *guard))
    }

    /// End a session, discarding its history.
    pub fn close(&self, id: SessionId) -> bool {
        let removed = self.sessions.write().remove(&id).is_some();
        if removed {
            debug!("closed session {id}");
        }
        removed
    }

    pub fn active_sessions(&self) -> usize {
        self.sessions.read().len()
    }
}
