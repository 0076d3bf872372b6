// Sorted vocabulary with binary-search prefix narrowing.
//
// The search engine never re-filters the whole word list: each recursion
// step narrows its parent's range by one more character with two
// `partition_point` probes, so a child range is always a subset of its
// parent's. Acceptance stays an exact-membership check.

use hashbrown::HashSet;

/// A deduplicated, sorted set of candidate words.
///
/// Words shorter than the minimum length given at construction are
/// dropped; order is irrelevant to search correctness but the sorted form
/// supports the prefix index and keeps tests deterministic.
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    words: Vec<String>,
}

impl Vocabulary {
    /// Build a vocabulary from raw words, deduplicating and dropping
    /// everything shorter than `min_len`.
    pub fn from_words<I>(words: I, min_len: usize) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let set: HashSet<String> = words
            .into_iter()
            .filter(|w| w.chars().count() >= min_len)
            .collect();
        let mut words: Vec<String> = set.into_iter().collect();
        words.sort_unstable();
        Self { words }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// The sorted words.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Exact membership test over the whole vocabulary.
    pub fn contains(&self, word: &str) -> bool {
        self.words.binary_search_by(|w| w.as_str().cmp(word)).is_ok()
    }

    /// The range covering the entire vocabulary (the empty prefix).
    pub fn full_range(&self) -> PrefixRange {
        PrefixRange {
            start: 0,
            end: self.words.len(),
            depth: 0,
        }
    }

    /// Narrow a range by one more prefix character.
    ///
    /// `range` must cover exactly the words sharing some prefix of length
    /// `range.depth`; the result covers exactly the words sharing that
    /// prefix extended by `next`. Always a subset of `range`.
    pub fn narrow(&self, range: PrefixRange, next: char) -> PrefixRange {
        let slice = &self.words[range.start..range.end];
        let target = next as u8;
        // Within the range all words share the first `depth` bytes, so the
        // byte at position `depth` is non-decreasing; words of exactly
        // `depth` bytes (no such byte) sort first.
        let start = slice.partition_point(|w| {
            w.as_bytes().get(range.depth).is_none_or(|&b| b < target)
        });
        let end = start
            + slice[start..].partition_point(|w| {
                w.as_bytes().get(range.depth).is_some_and(|&b| b == target)
            });
        PrefixRange {
            start: range.start + start,
            end: range.start + end,
            depth: range.depth + 1,
        }
    }

    /// The word equal to the range's prefix, if the prefix is itself a
    /// complete vocabulary member.
    ///
    /// Such a word is the shortest in the range and therefore sorts first.
    pub fn exact_match(&self, range: PrefixRange) -> Option<&str> {
        if range.is_empty() {
            return None;
        }
        let first = self.words[range.start].as_str();
        (first.len() == range.depth).then_some(first)
    }
}

/// A half-open index range into a sorted [`Vocabulary`], covering exactly
/// the words that share a prefix of length `depth`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrefixRange {
    start: usize,
    end: usize,
    depth: usize,
}

impl PrefixRange {
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Length of the prefix this range was narrowed to.
    pub fn depth(&self) -> usize {
        self.depth
    }
}
