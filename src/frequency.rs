//! Symbol frequency counting.

/// Number of occurrences of every byte value in some input.
///
/// Only non-zero entries are considered present: `len` counts distinct
/// symbols and `iter` skips symbols that never occurred.
#[derive(Clone, PartialEq, Eq)]
pub struct FrequencyMap {
    counts: [usize; 256],
}

impl FrequencyMap {
    pub fn new() -> Self {
        FrequencyMap { counts: [0; 256] }
    }

    /// Adds one occurrence of `symbol`.
    pub fn count(&mut self, symbol: u8) {
        self.counts[symbol as usize] += 1;
    }

    /// Adds `frequency` occurrences of `symbol`.
    pub fn add(&mut self, symbol: u8, frequency: usize) {
        self.counts[symbol as usize] += frequency;
    }

    pub fn get(&self, symbol: u8) -> usize {
        self.counts[symbol as usize]
    }

    /// Number of distinct symbols seen.
    pub fn len(&self) -> usize {
        self.counts.iter().filter(|&&freq| freq != 0).count()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.iter().all(|&freq| freq == 0)
    }

    /// Total number of symbols counted.
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// Iterates `(symbol, frequency)` pairs in ascending symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, usize)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .filter(|&(_, &freq)| freq != 0)
            .map(|(symbol, &freq)| (symbol as u8, freq))
    }

    /// Adds the counts of `other` into `self`.
    ///
    /// Merging is commutative, so partial counts of separate chunks may be
    /// combined in any order.
    pub fn merge(&mut self, other: &FrequencyMap) {
        for (symbol, frequency) in other.iter() {
            self.add(symbol, frequency);
        }
    }

    /// Shannon entropy of the counted symbols, in bits per symbol.
    pub fn entropy(&self) -> f64 {
        let total = self.total() as f64;
        if total == 0.0 {
            return 0.0;
        }
        -self
            .iter()
            .map(|(_, freq)| {
                let p = freq as f64 / total;
                p * p.log2()
            })
            .sum::<f64>()
    }
}

impl Default for FrequencyMap {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for FrequencyMap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl Extend<u8> for FrequencyMap {
    fn extend<I: IntoIterator<Item = u8>>(&mut self, iter: I) {
        iter.into_iter().for_each(|byte| self.count(byte));
    }
}

impl<'a> Extend<&'a u8> for FrequencyMap {
    fn extend<I: IntoIterator<Item = &'a u8>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl FromIterator<u8> for FrequencyMap {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        let mut frequencies = FrequencyMap::new();
        frequencies.extend(iter);
        frequencies
    }
}

impl<'a> FromIterator<&'a u8> for FrequencyMap {
    fn from_iter<I: IntoIterator<Item = &'a u8>>(iter: I) -> Self {
        iter.into_iter().copied().collect()
    }
}

/// Counts how often every byte occurs in `data`.
pub fn count_frequencies(data: &[u8]) -> FrequencyMap {
    data.iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_abracadabra() {
        let freq = count_frequencies(b"abracadabra");
        let pairs: Vec<_> = freq.iter().collect();
        assert_eq!(
            pairs,
            vec![(b'a', 5), (b'b', 2), (b'c', 1), (b'd', 1), (b'r', 2)]
        );
        assert_eq!(freq.len(), 5);
        assert_eq!(freq.total(), 11);
    }

    #[test]
    fn empty_input_gives_empty_map() {
        let freq = count_frequencies(&[]);
        assert!(freq.is_empty());
        assert_eq!(freq.len(), 0);
        assert_eq!(freq.iter().count(), 0);
    }

    #[test]
    fn merge_matches_counting_whole_input() {
        let data = b"the quick brown fox jumps over the lazy dog";
        let (head, tail) = data.split_at(17);

        let mut left = count_frequencies(head);
        left.merge(&count_frequencies(tail));
        let mut right = count_frequencies(tail);
        right.merge(&count_frequencies(head));

        assert_eq!(left, count_frequencies(data));
        assert_eq!(left, right);
    }

    #[test]
    fn entropy_of_uniform_and_constant_input() {
        assert_eq!(count_frequencies(b"aaaa").entropy(), 0.0);
        assert!((count_frequencies(b"abcd").entropy() - 2.0).abs() < 1e-12);
        assert_eq!(FrequencyMap::new().entropy(), 0.0);
    }

    #[test]
    fn full_byte_range() {
        let data: Vec<u8> = (0..=255).collect();
        let freq = count_frequencies(&data);
        assert_eq!(freq.len(), 256);
        assert_eq!(freq.get(0), 1);
        assert_eq!(freq.get(255), 1);
    }
}
