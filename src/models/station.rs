use rustc_hash::{FxHashMap, FxHasher};
use std::hash::Hasher;

use crate::error::{ProcessingError, Result};
use crate::utils::constants::MAX_STATIONS;

/// Dense station identifier in `[0, registry.len())`
pub type StationId = u32;

/// Offset/length view of one name inside the registry arena
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct NameSpan {
    offset: usize,
    len: usize,
}

/// Station names in discovery order, interned by name hash.
///
/// Built once by a single thread, then shared read-only with every worker.
#[derive(Debug, Default)]
pub struct StationRegistry {
    arena: String,
    spans: Vec<NameSpan>,
    index: FxHashMap<u64, StationId>,
}

#[inline]
pub fn hash_name(name: &[u8]) -> u64 {
    let mut hasher = FxHasher::default();
    hasher.write(name);
    hasher.finish()
}

impl StationRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.spans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// Name for an identifier handed out by this registry
    pub fn name(&self, id: StationId) -> &str {
        let span = self.spans[id as usize];
        &self.arena[span.offset..span.offset + span.len]
    }

    /// Names in discovery order
    pub fn names(&self) -> impl Iterator<Item = (StationId, &str)> + '_ {
        (0..self.spans.len()).map(move |id| (id as StationId, self.name(id as StationId)))
    }

    /// Resolve a name to its identifier. Returns `None` for names never
    /// registered, including names whose hash happens to match a known one.
    #[inline]
    pub fn lookup(&self, name: &[u8]) -> Option<StationId> {
        let id = *self.index.get(&hash_name(name))?;
        (self.name(id).as_bytes() == name).then_some(id)
    }

    /// Register a name, returning the existing identifier if already known
    pub fn register(&mut self, name: &[u8]) -> Result<StationId> {
        let hash = hash_name(name);

        if let Some(&id) = self.index.get(&hash) {
            let existing = self.name(id);
            if existing.as_bytes() == name {
                return Ok(id);
            }
            return Err(ProcessingError::HashCollision {
                first: existing.to_string(),
                second: String::from_utf8_lossy(name).into_owned(),
            });
        }

        if self.spans.len() >= MAX_STATIONS {
            return Err(ProcessingError::TooManyStations {
                limit: MAX_STATIONS,
            });
        }

        let name = std::str::from_utf8(name).map_err(|e| {
            ProcessingError::InvalidFormat(format!("Station name is not valid UTF-8: {}", e))
        })?;

        let id = self.spans.len() as StationId;
        self.spans.push(NameSpan {
            offset: self.arena.len(),
            len: name.len(),
        });
        self.arena.push_str(name);
        self.index.insert(hash, id);

        Ok(id)
    }
}
