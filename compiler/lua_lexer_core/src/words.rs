//! Sorted word lists for keyword and builtin matching.

/// An immutable, sorted, deduplicated list of words.
///
/// Lookups are binary searches. Built once when a grammar is constructed and
/// shared by every scan.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WordList {
    words: Box<[&'static str]>,
}

impl WordList {
    /// Build a list from any sequence of words.
    pub fn new(words: impl IntoIterator<Item = &'static str>) -> Self {
        let mut words: Vec<&'static str> = words.into_iter().collect();
        words.sort_unstable();
        words.dedup();
        Self {
            words: words.into_boxed_slice(),
        }
    }

    /// Returns `true` if `word` is in the list.
    #[inline]
    pub fn contains(&self, word: &str) -> bool {
        self.words.binary_search_by(|probe| (*probe).cmp(word)).is_ok()
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns `true` if the list has no words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterate the words in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.words.iter().copied()
    }
}

impl FromIterator<&'static str> for WordList {
    fn from_iter<I: IntoIterator<Item = &'static str>>(iter: I) -> Self {
        Self::new(iter)
    }
}
