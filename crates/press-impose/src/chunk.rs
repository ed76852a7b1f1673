//! Chunking policy: when output grows large enough, the engine splits
//! it across multiple saved documents instead of holding one huge PDF
//! in memory.

use crate::constants::{CHUNK_BYTE_SIZE_LIMIT, CHUNK_PAGE_LIMIT_DEFAULT, CHUNK_PAGE_LIMIT_REPEAT};
use crate::types::ImpositionType;

/// Decides how many output pages may accumulate in one chunk before a
/// save is forced, given the imposition mode and a running estimate of
/// bytes written so far in the current chunk.
pub struct ChunkPolicy {
    page_limit: usize,
}

impl ChunkPolicy {
    pub fn for_mode(imposition_type: ImpositionType) -> Self {
        let page_limit = if imposition_type == ImpositionType::Repeat {
            CHUNK_PAGE_LIMIT_REPEAT
        } else {
            CHUNK_PAGE_LIMIT_DEFAULT
        };
        Self { page_limit }
    }

    /// Whether the current chunk should be flushed before adding the
    /// next page, given its accumulated page count and byte size.
    pub fn should_flush(&self, pages_in_chunk: usize, bytes_in_chunk: u64) -> bool {
        pages_in_chunk >= self.page_limit || bytes_in_chunk >= CHUNK_BYTE_SIZE_LIMIT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeat_mode_uses_the_tighter_page_ceiling() {
        let policy = ChunkPolicy::for_mode(ImpositionType::Repeat);
        assert!(policy.should_flush(CHUNK_PAGE_LIMIT_REPEAT, 0));
        assert!(!policy.should_flush(CHUNK_PAGE_LIMIT_REPEAT - 1, 0));
    }

    #[test]
    fn other_modes_use_the_default_ceiling() {
        let policy = ChunkPolicy::for_mode(ImpositionType::Stack);
        assert!(policy.should_flush(CHUNK_PAGE_LIMIT_DEFAULT, 0));
        assert!(!policy.should_flush(CHUNK_PAGE_LIMIT_DEFAULT - 1, 0));
    }

    #[test]
    fn byte_size_limit_forces_a_flush_regardless_of_page_count() {
        let policy = ChunkPolicy::for_mode(ImpositionType::Stack);
        assert!(policy.should_flush(1, CHUNK_BYTE_SIZE_LIMIT));
    }
}
