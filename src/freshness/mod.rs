// Freshness tracking: lightweight fingerprints of the knowledge sources,
// used to decide whether the index needs a rebuild.


use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::Result;
use crate::knowledge::KnowledgeBase;

/// A fingerprint of the four knowledge sources at one point in time.
///
/// Hashes answer only "did anything change"; they are not content diffs.
/// Replaced atomically on every poll or manual refresh.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DataSnapshot {
    pub profile_hash: String,
    pub experiences_hash: String,
    pub projects_hash: String,
    pub faq_hash: String,
    pub timestamp: DateTime<Utc>,
}

impl DataSnapshot {
    /// Whether any source hash differs, ignoring the timestamp.
    #[inline]
    pub fn sources_differ(&self, other: &Self) -> bool {
        self.profile_hash != other.profile_hash
            || self.experiences_hash != other.experiences_hash
            || self.projects_hash != other.projects_hash
            || self.faq_hash != other.faq_hash
    }
}

/// Fingerprint the current knowledge sources.
#[inline]
pub fn snapshot_of(knowledge: &KnowledgeBase) -> Result<DataSnapshot> {
    Ok(DataSnapshot {
        profile_hash: content_hash(&knowledge.profile)?,
        experiences_hash: content_hash(&knowledge.experiences)?,
        projects_hash: content_hash(&knowledge.projects)?,
        faq_hash: content_hash(&knowledge.faq)?,
        timestamp: Utc::now(),
    })
}

/// Rolling polynomial hash over a value's JSON serialization.
///
/// Iterates UTF-16 code units with 32-bit wrapping arithmetic. Not
/// cryptographic: collisions are possible and show up as a missed rebuild
/// until the next differing hash or a manual refresh.
#[inline]
pub fn content_hash<T: Serialize>(value: &T) -> Result<String> {
    let json = serde_json::to_string(value)?;
    let mut hash: i32 = 0;
    for unit in json.encode_utf16() {
        hash = hash
            .wrapping_shl(5)
            .wrapping_sub(hash)
            .wrapping_add(i32::from(unit));
    }
    Ok(hash.to_string())
}
