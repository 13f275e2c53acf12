// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Concurrent LRU cache of resolved shapes.
//!
//! Field resolution runs once per `TypeId`; later calls are served from the
//! cache. Lookups promote the entry, so every access goes through one mutex.
//! Resolution itself runs outside the lock: two threads missing on the same
//! type may both resolve it, and the second insert overwrites the first with
//! an identical list.

use lru::LruCache;
use parking_lot::{Mutex, RwLock};
use std::any::TypeId;
use std::num::NonZeroUsize;
use std::sync::Arc;
use std::time::Instant;

use crate::resolve::FieldSpec;
use crate::shape::RecordType;

/// Cache hit/miss statistics.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LookupStats {
    pub hits: u64,
    pub misses: u64,
    pub evictions: u64,
    pub last_miss_ns: u64,
}

struct CachedShape {
    type_name: &'static str,
    fields: Arc<[FieldSpec]>,
}

/// Bounded LRU map from record type to its resolved columns.
pub struct ShapeCache {
    inner: Mutex<LruCache<TypeId, CachedShape>>,
    stats: RwLock<LookupStats>,
}

impl ShapeCache {
    #[must_use]
    pub fn new(capacity: NonZeroUsize) -> Self {
        Self {
            inner: Mutex::new(LruCache::new(capacity)),
            stats: RwLock::new(LookupStats::default()),
        }
    }

    /// Cached columns for `record`, resolving them with `build` on a miss.
    pub(crate) fn get_or_build<F>(&self, record: RecordType, build: F) -> Arc<[FieldSpec]>
    where
        F: FnOnce() -> Vec<FieldSpec>,
    {
        if let Some(hit) = self.lookup(record.id()) {
            self.record_hit();
            return hit;
        }

        let start = Instant::now();
        let built: Arc<[FieldSpec]> = build().into();
        log::debug!(
            "[ShapeCache::get_or_build] resolved {} ({} columns)",
            record.name(),
            built.len()
        );

        self.insert(record.id(), record.name(), Arc::clone(&built));
        self.record_miss(start);
        built
    }

    /// Cached columns for `id`, marking the entry most recently used.
    pub(crate) fn lookup(&self, id: TypeId) -> Option<Arc<[FieldSpec]>> {
        let mut cache = self.inner.lock();
        cache.get(&id).map(|entry| Arc::clone(&entry.fields))
    }

    /// Insert or overwrite `id`, evicting the least recently used entry when
    /// the cache is full.
    pub(crate) fn insert(&self, id: TypeId, type_name: &'static str, fields: Arc<[FieldSpec]>) {
        let evicted = {
            let mut cache = self.inner.lock();
            let evicted = if !cache.contains(&id) && cache.len() >= cache.cap().get() {
                cache.pop_lru()
            } else {
                None
            };
            cache.put(id, CachedShape { type_name, fields });
            evicted
        };

        if let Some((_, old)) = evicted {
            self.stats.write().evictions += 1;
            log::debug!("[ShapeCache::insert] evicted {}", old.type_name);
        }
    }

    /// Whether `id` is cached. Does not change recency.
    #[must_use]
    pub fn contains(&self, id: TypeId) -> bool {
        self.inner.lock().contains(&id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.inner.lock().cap().get()
    }

    #[must_use]
    pub fn stats(&self) -> LookupStats {
        *self.stats.read()
    }

    fn record_hit(&self) {
        let mut stats = self.stats.write();
        stats.hits = stats.hits.saturating_add(1);
    }

    fn record_miss(&self, start: Instant) {
        let mut stats = self.stats.write();
        stats.misses = stats.misses.saturating_add(1);
        stats.last_miss_ns = u64::try_from(start.elapsed().as_nanos()).unwrap_or(u64::MAX);
    }
}
