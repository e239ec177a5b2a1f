//! Length filters, counted in Unicode codepoints.
use super::Filter;

/// Keeps chunks of at least [ChunkLength::min_size] unicode codepoints.
///
/// [ChunkLength::min_size] is 100 by default.
pub struct ChunkLength {
    min_size: usize,
}

impl ChunkLength {
    /// specify a minimum length
    pub fn with_min_size(min_size: usize) -> Self {
        Self { min_size }
    }

    /// Get a reference to the length's min size.
    pub fn min_size(&self) -> &usize {
        &self.min_size
    }
}

impl Filter<&str> for ChunkLength {
    fn detect(&self, chunk: &str) -> bool {
        chunk.chars().count() >= self.min_size
    }
}

impl Default for ChunkLength {
    /// Default minimum length for chunks is 100 Unicode Codepoints
    fn default() -> Self {
        ChunkLength { min_size: 100 }
    }
}

/// Keeps words strictly longer than [WordLength::min_size] unicode codepoints (2 by default).
pub struct WordLength {
    min_size: usize,
}

impl WordLength {
    pub fn with_min_size(min_size: usize) -> Self {
        Self { min_size }
    }
}

impl Filter<&str> for WordLength {
    fn detect(&self, word: &str) -> bool {
        word.chars().count() > self.min_size
    }
}

impl Default for WordLength {
    fn default() -> Self {
        WordLength { min_size: 2 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chunk_length() {
        let f = ChunkLength::default();
        assert!(!f.detect(&"a".repeat(99)));
        assert!(f.detect(&"a".repeat(100)));
        // codepoints, not bytes
        assert!(!f.detect(&"ẽ".repeat(99)));
    }

    #[test]
    fn test_custom_chunk_length() {
        let f = ChunkLength::with_min_size(3);
        assert_eq!(f.min_size(), &3);
        assert!(f.detect("ko ha"));
    }

    #[test]
    fn test_word_length() {
        let f = WordLength::default();
        assert!(!f.detect("ha"));
        assert!(f.detect("upe"));
        assert!(!f.detect("ñe"));
        assert!(WordLength::with_min_size(3).detect("teko"));
    }
}
