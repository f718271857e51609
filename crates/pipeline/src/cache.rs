//! Fingerprint-keyed cache of processed outcomes.
//!
//! Reframes "recompute only when the input set changes" as an explicit
//! component: the fingerprint hashes every source's id and version token,
//! and a fingerprint change is the only invalidation. Cached outcomes are
//! `Arc`-shared immutable values, so concurrent readers need no locking.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use ingest::Source;

use crate::ProcessOutcome;

/// Fingerprint of an input source set.
pub fn fingerprint(sources: &[Box<dyn Source>]) -> u64 {
    let mut hasher = DefaultHasher::new();
    for source in sources {
        source.id().hash(&mut hasher);
        source.version_token().hash(&mut hasher);
    }
    hasher.finish()
}

/// Cache configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Maximum cached outcomes
    #[serde(default = "default_capacity")]
    pub capacity: u64,
    /// Optional time-to-live in seconds
    #[serde(default)]
    pub ttl_secs: Option<u64>,
}

fn default_capacity() -> u64 {
    8
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            capacity: default_capacity(),
            ttl_secs: None,
        }
    }
}

/// Cache of completed pipeline outcomes, keyed by input-set fingerprint.
pub struct ProcessCache {
    inner: moka::sync::Cache<u64, Arc<ProcessOutcome>>,
}

impl ProcessCache {
    pub fn new(config: CacheConfig) -> Self {
        let mut builder = moka::sync::Cache::builder().max_capacity(config.capacity);
        if let Some(ttl) = config.ttl_secs {
            builder = builder.time_to_live(Duration::from_secs(ttl));
        }
        Self {
            inner: builder.build(),
        }
    }

    pub fn get(&self, fingerprint: u64) -> Option<Arc<ProcessOutcome>> {
        self.inner.get(&fingerprint)
    }

    pub fn insert(&self, fingerprint: u64, outcome: Arc<ProcessOutcome>) {
        self.inner.insert(fingerprint, outcome);
    }

    /// Drop every cached outcome.
    pub fn invalidate_all(&self) {
        self.inner.invalidate_all();
    }
}

impl Default for ProcessCache {
    fn default() -> Self {
        Self::new(CacheConfig::default())
    }
}
