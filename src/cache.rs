use std::collections::HashMap;
use std::hash::{DefaultHasher, Hash, Hasher};

use crate::detection::ApplePipeline;
use crate::error::DetectError;
use crate::models::Detection;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct CacheKey {
    content_hash: u64,
    draw_boxes: bool,
}

/// Memoization layer over a detection pipeline.
///
/// Keys results by a content hash of the input bytes plus the draw flag, so
/// repeated identical calls return the prior result without re-running the
/// pipeline. Failures are never cached. This replaces implicit global
/// caching with an explicit, caller-owned map.
pub struct DetectionCache {
    pipeline: ApplePipeline,
    results: HashMap<CacheKey, Detection>,
}

impl DetectionCache {
    pub fn new(pipeline: ApplePipeline) -> Self {
        Self {
            pipeline,
            results: HashMap::new(),
        }
    }

    /// Detect apples, reusing a cached result for identical inputs.
    pub fn detect(&mut self, image_bytes: &[u8], draw_boxes: bool) -> Result<Detection, DetectError> {
        let key = CacheKey {
            content_hash: hash_bytes(image_bytes),
            draw_boxes,
        };
        if let Some(hit) = self.results.get(&key) {
            return Ok(hit.clone());
        }
        let result = self.pipeline.detect(image_bytes, draw_boxes)?;
        self.results.insert(key, result.clone());
        Ok(result)
    }

    /// Number of memoized results.
    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Drop all memoized results.
    pub fn clear(&mut self) {
        self.results.clear();
    }
}

fn hash_bytes(bytes: &[u8]) -> u64 {
    let mut hasher = DefaultHasher::new();
    bytes.hash(&mut hasher);
    hasher.finish()
}
