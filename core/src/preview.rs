//! Bounded LRU cache of rendered icon previews.
//!
//! Converting an icon asset into an inlineable payload (base64 data URI) costs
//! a file read plus an encode, so the last N results are kept. The cache is a
//! performance optimization only: an evicted entry is simply rebuilt on the
//! next request.

use std::cell::RefCell;
use std::sync::Arc;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use crate::catalog::IconCatalog;
use crate::error::{IconError, Result};

/// Identifier -> data-URI payload cache with strict LRU eviction.
///
/// Both hits and inserts count as an access. Capacity is fixed at
/// construction and never exceeded; inserting into a full cache evicts the
/// single least-recently-used entry first. A failed asset read leaves the
/// cache untouched (failures are never cached).
pub struct PreviewCache {
    catalog: Arc<IconCatalog>,
    cache: RefCell<lru::LruCache<String, String>>,
    cache_hits: RefCell<usize>,
    cache_misses: RefCell<usize>,
}

impl PreviewCache {
    /// Create a cache bounded to `capacity` entries.
    pub fn new(catalog: Arc<IconCatalog>, capacity: usize) -> Self {
        Self {
            catalog,
            cache: RefCell::new(lru::LruCache::new(
                std::num::NonZeroUsize::new(capacity)
                    .unwrap_or(std::num::NonZeroUsize::new(32).unwrap()),
            )),
            cache_hits: RefCell::new(0),
            cache_misses: RefCell::new(0),
        }
    }

    /// Return the inlineable payload for an icon, building it if needed.
    ///
    /// A cached payload is promoted to most-recently-used and returned.
    /// Otherwise the asset file is read, encoded as a data URI, inserted as
    /// most-recently-used, and returned.
    pub fn get(&self, identifier: &str) -> Result<String> {
        if let Some(cached) = self.cache.borrow_mut().get(identifier) {
            *self.cache_hits.borrow_mut() += 1;
            return Ok(cached.clone());
        }

        *self.cache_misses.borrow_mut() += 1;

        let asset = self
            .catalog
            .get(identifier)
            .ok_or_else(|| IconError::AssetNotFound {
                identifier: identifier.to_string(),
            })?;

        let bytes = std::fs::read(&asset.path).map_err(|source| IconError::AssetRead {
            identifier: identifier.to_string(),
            source,
        })?;

        let media_type = media_type_for(&asset.path);
        let uri = format!("data:{};base64,{}", media_type, STANDARD.encode(bytes));

        if let Some((evicted, _)) = self
            .cache
            .borrow_mut()
            .push(identifier.to_string(), uri.clone())
        {
            if evicted != identifier {
                tracing::debug!(identifier = %evicted, "evicted preview from cache");
            }
        }

        Ok(uri)
    }

    /// Whether a payload is currently cached, without promoting it.
    pub fn contains(&self, identifier: &str) -> bool {
        self.cache.borrow().contains(identifier)
    }

    /// Current number of cached entries.
    pub fn len(&self) -> usize {
        self.cache.borrow().len()
    }

    /// True if nothing is cached yet.
    pub fn is_empty(&self) -> bool {
        self.cache.borrow().is_empty()
    }

    /// Configured capacity bound.
    pub fn capacity(&self) -> usize {
        self.cache.borrow().cap().get()
    }

    /// Get cache statistics as a (hits, misses) tuple.
    pub fn cache_stats(&self) -> (usize, usize) {
        (*self.cache_hits.borrow(), *self.cache_misses.borrow())
    }

    /// Cache hit rate as a percentage, or None before the first access.
    pub fn hit_rate(&self) -> Option<f32> {
        let hits = *self.cache_hits.borrow();
        let misses = *self.cache_misses.borrow();
        let total = hits + misses;

        if total == 0 {
            None
        } else {
            Some((hits as f32 / total as f32) * 100.0)
        }
    }

    /// Drop every cached payload and reset the statistics.
    pub fn clear(&self) {
        self.cache.borrow_mut().clear();
        *self.cache_hits.borrow_mut() = 0;
        *self.cache_misses.borrow_mut() = 0;
    }
}

fn media_type_for(path: &std::path::Path) -> &'static str {
    match path.extension().and_then(|e| e.to_str()) {
        Some("svg") => "image/svg+xml",
        Some("png") => "image/png",
        _ => "application/octet-stream",
    }
}
