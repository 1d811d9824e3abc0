//! Suffix array and LCP array by prefix doubling.
//!
//! # Overview
//!
//! Offline construction in O(n log n): an initial counting sort over symbol
//! codes establishes rank classes of single characters, then each doubling
//! round stable-sorts suffixes by the pair of ranks at distance `k` (with
//! wraparound over the sentinel-padded text) and refines the classes. The
//! appended sentinel is unique and minimal, so the final ranks distinguish
//! every suffix; the sentinel suffix itself is dropped from the published
//! order.
//!
//! The LCP array comes from Kasai's algorithm: one sweep in text order,
//! carrying a common-prefix length that drops by at most one per step,
//! giving O(n) total after the array exists.
//!
//! # Examples
//!
//! ```rust
//! use suffix_index::array::SuffixArray;
//! use suffix_index::text::Text;
//!
//! let text = Text::new(vec![1, 1, 2, 1, 2], 2).unwrap();
//! let array = SuffixArray::build(&text);
//!
//! assert_eq!(array.positions(), &[0, 3, 1, 4, 2]);
//! assert_eq!(array.lcp(), &[1, 2, 0, 1]);
//! ```

use crate::text::Text;

/// Suffix array with its LCP array, fully built at construction.
///
/// `positions()` is the permutation of `0..text.len()` sorting suffixes
/// lexicographically; `lcp()[i]` is the shared-prefix length of the
/// suffixes at `positions()[i]` and `positions()[i + 1]`.
#[derive(Clone, Debug)]
pub struct SuffixArray {
    positions: Vec<usize>,
    lcp: Vec<usize>,
}

impl SuffixArray {
    /// Build array and LCP over the sentinel-padded text.
    ///
    /// Symbol codes were bound-checked by [`Text`], so the counting-sort
    /// buckets sized from the declared bound cannot be undersized.
    pub fn build(text: &Text) -> Self {
        let padded = text.padded();
        let order = sort_cyclic_shifts(&padded, text.alphabet_bound());
        let lcp_full = kasai(&padded, &order);

        // Rank 0 is the sentinel suffix; drop it and its adjacent LCP entry
        // so the published arrays cover exactly the real suffixes.
        let positions = order[1..].to_vec();
        let lcp = if lcp_full.len() > 1 {
            lcp_full[1..].to_vec()
        } else {
            Vec::new()
        };

        Self { positions, lcp }
    }

    /// Suffix start positions in lexicographic order.
    pub fn positions(&self) -> &[usize] {
        &self.positions
    }

    /// Shared-prefix lengths of lexicographically adjacent suffixes.
    ///
    /// One entry per adjacent pair: `lcp().len() == positions().len() - 1`
    /// for non-empty texts.
    pub fn lcp(&self) -> &[usize] {
        &self.lcp
    }
}

/// Sort the cyclic shifts of the padded text by prefix doubling.
///
/// The sentinel makes cyclic-shift order coincide with suffix order. Each
/// round performs one shift pass and one stable counting sort, reusing the
/// same pre-sized buffers.
fn sort_cyclic_shifts(padded: &[u8], alphabet_bound: u8) -> Vec<usize> {
    let n = padded.len();
    let buckets = n.max(alphabet_bound as usize + 1);

    let mut order = vec![0usize; n];
    let mut rank = vec![0usize; n];
    let mut shifted = vec![0usize; n];
    let mut new_rank = vec![0usize; n];
    let mut count = vec![0usize; buckets];

    // First-level counting sort over single symbols.
    for &code in padded {
        count[code as usize] += 1;
    }
    for i in 1..buckets {
        count[i] += count[i - 1];
    }
    for i in (0..n).rev() {
        let code = padded[i] as usize;
        count[code] -= 1;
        order[count[code]] = i;
    }

    let mut classes = 0usize;
    rank[order[0]] = 0;
    for i in 1..n {
        if padded[order[i]] != padded[order[i - 1]] {
            classes += 1;
        }
        rank[order[i]] = classes;
    }

    // Doubling rounds: sort by (rank, rank at +k) until k covers the text.
    let mut k = 1;
    while k < n {
        // Shifting every position back by k makes the previous order a
        // stable sort by the second pair component.
        for i in 0..n {
            shifted[i] = (order[i] + n - k) % n;
        }

        count[..=classes].fill(0);
        for i in 0..n {
            count[rank[shifted[i]]] += 1;
        }
        for i in 1..=classes {
            count[i] += count[i - 1];
        }
        for i in (0..n).rev() {
            let class = rank[shifted[i]];
            count[class] -= 1;
            order[count[class]] = shifted[i];
        }

        classes = 0;
        new_rank[order[0]] = 0;
        for i in 1..n {
            let prev_second = (order[i - 1] + k) % n;
            let cur_second = (order[i] + k) % n;
            if rank[order[i]] != rank[order[i - 1]] || rank[cur_second] != rank[prev_second] {
                classes += 1;
            }
            new_rank[order[i]] = classes;
        }
        std::mem::swap(&mut rank, &mut new_rank);

        k <<= 1;
    }

    order
}

/// Kasai's LCP over the full padded order.
///
/// `lcp[r]` is the shared-prefix length between `order[r]` and
/// `order[r + 1]`. The running length `h` never decreases by more than one
/// per text position, which bounds the whole sweep at O(n).
fn kasai(padded: &[u8], order: &[usize]) -> Vec<usize> {
    let n = padded.len();
    let mut inverse = vec![0usize; n];
    for (r, &position) in order.iter().enumerate() {
        inverse[position] = r;
    }

    let mut lcp = vec![0usize; n.saturating_sub(1)];
    let mut h = 0usize;
    for i in 0..n {
        if inverse[i] + 1 == n {
            h = 0;
            continue;
        }
        let j = order[inverse[i] + 1];
        while i + h < n && j + h < n && padded[i + h] == padded[j + h] {
            h += 1;
        }
        lcp[inverse[i]] = h;
        if h > 0 {
            h -= 1;
        }
    }
    lcp
}

#[cfg(test)]
mod tests {
    use super::*;

    fn array(symbols: &[u8]) -> SuffixArray {
        let text = Text::new(symbols.to_vec(), 26).unwrap();
        SuffixArray::build(&text)
    }

    fn naive_order(symbols: &[u8]) -> Vec<usize> {
        let mut positions: Vec<usize> = (0..symbols.len()).collect();
        positions.sort_by(|&a, &b| symbols[a..].cmp(&symbols[b..]));
        positions
    }

    fn naive_lcp(symbols: &[u8], order: &[usize]) -> Vec<usize> {
        order
            .windows(2)
            .map(|pair| {
                let a = &symbols[pair[0]..];
                let b = &symbols[pair[1]..];
                a.iter().zip(b).take_while(|(x, y)| x == y).count()
            })
            .collect()
    }

    #[test]
    fn empty_text() {
        let array = array(&[]);
        assert!(array.positions().is_empty());
        assert!(array.lcp().is_empty());
    }

    #[test]
    fn single_symbol() {
        let array = array(&[3]);
        assert_eq!(array.positions(), &[0]);
        assert!(array.lcp().is_empty());
    }

    #[test]
    fn banana_shape() {
        // 2 1 3 1 3 1, the classic repeated-suffix layout.
        let symbols = [2u8, 1, 3, 1, 3, 1];
        let array = array(&symbols);
        assert_eq!(array.positions(), naive_order(&symbols));
        assert_eq!(array.lcp(), naive_lcp(&symbols, array.positions()));
    }

    #[test]
    fn repeated_symbol() {
        let symbols = [1u8; 5];
        let array = array(&symbols);
        // Shortest suffix first.
        assert_eq!(array.positions(), &[4, 3, 2, 1, 0]);
        assert_eq!(array.lcp(), &[1, 2, 3, 4]);
    }

    #[test]
    fn matches_naive_on_mixed_text() {
        let symbols = [1u8, 1, 2, 1, 2, 2, 1, 1, 1, 2, 1];
        let array = array(&symbols);
        assert_eq!(array.positions(), naive_order(&symbols));
        assert_eq!(array.lcp(), naive_lcp(&symbols, array.positions()));
    }

    #[test]
    fn alphabet_bound_larger_than_text() {
        let text = Text::new(vec![200, 100, 250], 255).unwrap();
        let array = SuffixArray::build(&text);
        assert_eq!(array.positions(), naive_order(&[200, 100, 250]));
    }
}
