use std::collections::HashSet;

use crate::layout::params::ChildId;

/// Counters describing how pie-mode frames were produced.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Frames that recomposed every child into the cache bitmap.
    pub full_composites: u64,
    /// Frames that reused the cache bitmap and repainted only dirty regions.
    pub incremental_frames: u64,
    /// Draw calls that did nothing because no buffers were allocated.
    pub skipped_frames: u64,
}

/// Dirty tracking for the cached frame bitmap (the bitmap itself lives in the buffer set).
#[derive(Debug)]
pub(crate) struct RenderCache {
    enabled: bool,
    valid: bool,
    dirty: HashSet<ChildId>,
    stats: CacheStats,
}

impl RenderCache {
    pub(crate) fn new(enabled: bool) -> Self {
        Self {
            enabled,
            valid: false,
            dirty: HashSet::new(),
            stats: CacheStats::default(),
        }
    }

    pub(crate) fn set_enabled(&mut self, enabled: bool) {
        if self.enabled != enabled {
            self.enabled = enabled;
            self.invalidate("cache toggled");
        }
    }

    pub(crate) fn is_valid(&self) -> bool {
        self.valid
    }

    pub(crate) fn invalidate(&mut self, reason: &'static str) {
        if self.valid {
            tracing::debug!(reason, "render cache invalidated");
        }
        self.valid = false;
    }

    pub(crate) fn mark_dirty(&mut self, id: ChildId) {
        self.dirty.insert(id);
    }

    pub(crate) fn forget(&mut self, id: ChildId) {
        self.dirty.remove(&id);
    }

    pub(crate) fn is_dirty(&self, id: ChildId) -> bool {
        self.dirty.contains(&id)
    }

    /// Whether the cached frame may stand in for a full recomposition of `child_count` children.
    pub(crate) fn can_reuse(&self, child_count: usize) -> bool {
        self.enabled && self.valid && self.dirty.len() < child_count / 2
    }

    /// Record a full recomposition.
    pub(crate) fn commit_full(&mut self) {
        self.dirty.clear();
        self.valid = self.enabled;
        self.stats.full_composites += 1;
    }

    /// Record an incremental frame. Dirty regions were repainted into the bitmap, so the
    /// dirty set starts over.
    pub(crate) fn commit_incremental(&mut self) {
        self.dirty.clear();
        self.stats.incremental_frames += 1;
    }

    pub(crate) fn record_skip(&mut self) {
        self.stats.skipped_frames += 1;
    }

    pub(crate) fn stats(&self) -> CacheStats {
        self.stats
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/cache.rs"]
mod tests;
