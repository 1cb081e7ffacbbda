//! Hand-written port fakes shared by the integration tests.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use chrono::{DateTime, Duration, TimeZone, Utc};

use cm_app::{HistoryStore, NotificationBus};
use cm_core::ports::{ClockPort, HistoryPersistencePort};
use cm_core::ClipboardEntry;

/// Clock that only moves when told to.
pub struct FakeClock {
    now: Mutex<DateTime<Utc>>,
}

impl FakeClock {
    pub fn new() -> Self {
        Self {
            now: Mutex::new(Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()),
        }
    }

    pub fn advance(&self, by: Duration) {
        let mut now = self.now.lock().unwrap();
        *now += by;
    }

    pub fn rewind(&self, by: Duration) {
        let mut now = self.now.lock().unwrap();
        *now -= by;
    }
}

impl ClockPort for FakeClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap()
    }
}

/// Persistence that keeps every saved snapshot in memory.
#[derive(Default)]
pub struct MemoryPersistence {
    initial: Vec<ClipboardEntry>,
    saves: Mutex<Vec<Vec<ClipboardEntry>>>,
    fail_saves: Mutex<bool>,
}

impl MemoryPersistence {
    pub fn with_entries(entries: Vec<ClipboardEntry>) -> Self {
        Self {
            initial: entries,
            ..Self::default()
        }
    }

    pub fn set_fail_saves(&self, fail: bool) {
        *self.fail_saves.lock().unwrap() = fail;
    }

    pub fn save_count(&self) -> usize {
        self.saves.lock().unwrap().len()
    }

    pub fn saved_lengths(&self) -> Vec<usize> {
        self.saves.lock().unwrap().iter().map(Vec::len).collect()
    }

    pub fn last_saved(&self) -> Option<Vec<ClipboardEntry>> {
        self.saves.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl HistoryPersistencePort for MemoryPersistence {
    async fn load(&self) -> Result<Vec<ClipboardEntry>> {
        Ok(self.initial.clone())
    }

    async fn save(&self, entries: &[ClipboardEntry]) -> Result<()> {
        if *self.fail_saves.lock().unwrap() {
            return Err(anyhow!("disk full"));
        }
        self.saves.lock().unwrap().push(entries.to_vec());
        Ok(())
    }
}

pub async fn open_store(
    persistence: Arc<MemoryPersistence>,
    clock: Arc<FakeClock>,
) -> Arc<HistoryStore> {
    Arc::new(HistoryStore::open(persistence, clock, Arc::new(NotificationBus::new())).await)
}

pub fn contents(entries: &[ClipboardEntry]) -> Vec<&str> {
    entries.iter().map(ClipboardEntry::content).collect()
}
