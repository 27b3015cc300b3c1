// tests/support/mocks.rs
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use quill_cms::application::{
    ApplicationError, ApplicationResult,
    ports::{media::MediaStorage, time::Clock, util::SuffixGenerator},
};
use std::{
    collections::{HashMap, VecDeque},
    sync::{
        Mutex,
        atomic::{AtomicUsize, Ordering},
    },
};

static FIXED_NOW: Lazy<DateTime<Utc>> = Lazy::new(|| {
    DateTime::parse_from_rfc3339("2024-05-01T12:00:00Z")
        .expect("invalid RFC3339 in tests/support/mocks.rs")
        .with_timezone(&Utc)
});

pub fn fixed_now() -> DateTime<Utc> {
    *FIXED_NOW
}

/// Uploads land in `posts/2024/05` and `assets/favicon/2024/05`.
pub struct FixedClock;

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        fixed_now()
    }
}

/// Hands out scripted suffixes in order, then repeats `fallback`.
pub struct ScriptedSuffixes {
    script: Mutex<VecDeque<String>>,
    fallback: String,
}

impl ScriptedSuffixes {
    pub fn new(script: &[&str], fallback: &str) -> Self {
        Self {
            script: Mutex::new(script.iter().map(|s| (*s).to_string()).collect()),
            fallback: fallback.to_string(),
        }
    }

    pub fn constant(value: &str) -> Self {
        Self::new(&[], value)
    }
}

impl SuffixGenerator for ScriptedSuffixes {
    fn suffix(&self, len: usize) -> String {
        let next = self
            .script
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| self.fallback.clone());
        next.chars().take(len).collect()
    }
}

/// Media storage kept in memory, counting rewrites so tests can tell whether
/// a resize ran.
#[derive(Default)]
pub struct InMemoryMediaStorage {
    files: Mutex<HashMap<String, Vec<u8>>>,
    overwrites: AtomicUsize,
    fail_saves: bool,
}

impl InMemoryMediaStorage {
    pub fn failing() -> Self {
        Self {
            fail_saves: true,
            ..Self::default()
        }
    }

    pub fn get(&self, name: &str) -> Option<Vec<u8>> {
        self.files.lock().unwrap().get(name).cloned()
    }

    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.files.lock().unwrap().keys().cloned().collect();
        names.sort();
        names
    }

    pub fn overwrite_count(&self) -> usize {
        self.overwrites.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl MediaStorage for InMemoryMediaStorage {
    async fn save(
        &self,
        directory: &str,
        filename: &str,
        bytes: &[u8],
    ) -> ApplicationResult<String> {
        if self.fail_saves {
            return Err(ApplicationError::infrastructure("disk full"));
        }
        let mut files = self.files.lock().unwrap();
        let mut name = format!("{directory}/{filename}");
        let mut counter = 1;
        while files.contains_key(&name) {
            name = format!("{directory}/{counter}_{filename}");
            counter += 1;
        }
        files.insert(name.clone(), bytes.to_vec());
        Ok(name)
    }

    async fn read(&self, name: &str) -> ApplicationResult<Vec<u8>> {
        self.get(name)
            .ok_or_else(|| ApplicationError::not_found(format!("media file not found: {name}")))
    }

    async fn overwrite(&self, name: &str, bytes: &[u8]) -> ApplicationResult<()> {
        self.files
            .lock()
            .unwrap()
            .insert(name.to_string(), bytes.to_vec());
        self.overwrites.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn delete(&self, name: &str) -> ApplicationResult<()> {
        self.files.lock().unwrap().remove(name);
        Ok(())
    }
}
