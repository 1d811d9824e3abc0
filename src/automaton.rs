//! Suffix automaton over a single text.
//!
//! # Overview
//!
//! A **suffix automaton** is the minimal deterministic finite automaton
//! recognizing every suffix of the indexed text. Key properties:
//!
//! - **Substring recognition**: any transition path from the root spells a
//!   substring of the text, so membership is O(pattern length).
//! - **Minimality**: at most 2n − 1 states for n symbols.
//! - **Online construction**: O(1) amortized per symbol.
//! - **Endpos equivalence**: each state groups the substrings sharing one
//!   set of ending positions, which is what makes occurrence counting a
//!   single pass over the transition DAG.
//!
//! # Examples
//!
//! ```rust
//! use suffix_index::automaton::SuffixAutomaton;
//! use suffix_index::text::Text;
//!
//! let text = Text::new(vec![1, 2, 1, 2], 2).unwrap();
//! let automaton = SuffixAutomaton::build(&text);
//!
//! assert!(automaton.contains(&[2, 1, 2]));
//! assert!(!automaton.contains(&[2, 2]));
//! ```

use smallvec::SmallVec;

use crate::text::Text;

/// Outgoing edges of one state, kept sorted by symbol code.
///
/// Alphabets here are small, so edge lists almost always fit inline.
type EdgeList = SmallVec<[(u8, usize); 4]>;

/// A state in the suffix automaton.
///
/// Each state represents an equivalence class of substrings with the same
/// set of ending positions. All fields are fixed once construction ends.
#[derive(Clone, Debug)]
pub(crate) struct State {
    /// Outgoing edges: (symbol code, target state index).
    edges: EdgeList,

    /// Suffix link: the state representing the longest proper suffix that
    /// lies in a different endpos class. `None` only for the root.
    suffix_link: Option<usize>,

    /// Length of the longest substring in this equivalence class.
    ///
    /// Strictly decreasing along suffix links.
    pub(crate) max_len: usize,

    /// End position (index of the last symbol) of the first occurrence of
    /// this class's longest substring.
    pub(crate) first_end: usize,
}

impl State {
    fn root() -> Self {
        Self {
            edges: EdgeList::new(),
            suffix_link: None,
            max_len: 0,
            first_end: 0,
        }
    }

    fn new(max_len: usize) -> Self {
        Self {
            edges: EdgeList::new(),
            suffix_link: None,
            max_len,
            first_end: max_len - 1,
        }
    }

    /// Find an edge by symbol code.
    fn find_edge(&self, label: u8) -> Option<usize> {
        self.edges
            .iter()
            .find(|(code, _)| *code == label)
            .map(|(_, target)| *target)
    }

    /// Add an edge, maintaining sorted order.
    fn add_edge(&mut self, label: u8, target: usize) {
        match self.edges.binary_search_by_key(&label, |(code, _)| *code) {
            Ok(idx) => self.edges[idx].1 = target,
            Err(idx) => self.edges.insert(idx, (label, target)),
        }
    }

    /// Redirect an existing edge to a new target.
    fn update_edge(&mut self, label: u8, new_target: usize) {
        if let Ok(idx) = self.edges.binary_search_by_key(&label, |(code, _)| *code) {
            self.edges[idx].1 = new_target;
        }
    }
}

/// Suffix automaton over one fixed text.
///
/// Built in full by [`SuffixAutomaton::build`]; there is no partially
/// constructed value to query. States live in an append-only arena indexed
/// by `usize`, state 0 is the root, and arena order is creation order.
#[derive(Clone, Debug)]
pub struct SuffixAutomaton {
    /// Node storage (index-based graph). State 0 is always the root.
    states: Vec<State>,

    /// State representing the whole text consumed so far.
    last: usize,
}

impl SuffixAutomaton {
    /// Build the automaton from the whole text.
    ///
    /// One online pass; an empty text yields just the root state.
    pub fn build(text: &Text) -> Self {
        let mut automaton = Self {
            states: vec![State::root()],
            last: 0,
        };
        for &code in text.symbols() {
            automaton.extend(code);
        }
        automaton
    }

    /// Extend the automaton with one symbol (online construction).
    ///
    /// Creates the new state for the extended text, walks suffix links
    /// backward adding the missing transitions, and splits an existing
    /// equivalence class with a clone when its longest string would
    /// otherwise disagree with the new suffix length.
    fn extend(&mut self, code: u8) {
        let cur = self.states.len();
        self.states.push(State::new(self.states[self.last].max_len + 1));

        // Walk suffix links backward, adding transitions to the new state.
        let mut p = Some(self.last);
        while let Some(p_idx) = p {
            if self.states[p_idx].find_edge(code).is_some() {
                break;
            }
            self.states[p_idx].add_edge(code, cur);
            p = self.states[p_idx].suffix_link;
        }

        if let Some(p_idx) = p {
            let q = self.states[p_idx].find_edge(code).unwrap();

            if self.states[p_idx].max_len + 1 == self.states[q].max_len {
                // Continuous transition, no split needed.
                self.states[cur].suffix_link = Some(q);
            } else {
                // Split q's equivalence class by cloning it at the shorter
                // length. The clone keeps q's edges and first occurrence.
                let clone = self.states.len();
                let mut cloned = self.states[q].clone();
                cloned.max_len = self.states[p_idx].max_len + 1;
                self.states.push(cloned);

                self.states[cur].suffix_link = Some(clone);
                self.states[q].suffix_link = Some(clone);

                // Redirect ancestors still pointing at q to the clone.
                let mut p2 = Some(p_idx);
                while let Some(p2_idx) = p2 {
                    if self.states[p2_idx].find_edge(code) == Some(q) {
                        self.states[p2_idx].update_edge(code, clone);
                        p2 = self.states[p2_idx].suffix_link;
                    } else {
                        break;
                    }
                }
            }
        } else {
            // Reached past the root without finding the transition.
            self.states[cur].suffix_link = Some(0);
        }

        self.last = cur;
    }

    /// Check whether `pattern` is a contiguous substring of the text.
    ///
    /// Follows transitions symbol by symbol from the root; fails on the
    /// first missing edge. O(pattern length).
    pub fn contains(&self, pattern: &[u8]) -> bool {
        let mut state = 0;
        for &code in pattern {
            match self.states[state].find_edge(code) {
                Some(next) => state = next,
                None => return false,
            }
        }
        true
    }

    /// Per-state occurrence counts: how many end positions in the text the
    /// state's substrings occur at.
    ///
    /// Seeds the terminal suffix-link chain from the last state with 1
    /// (those states accept a true suffix of the text), then one iterative
    /// post-order pass over the transition DAG sums each state's outgoing
    /// targets into it. Returned as scratch storage in arena order; the
    /// automaton itself is never mutated, so repeated calls are no-ops.
    pub fn occurrence_counts(&self) -> Vec<u64> {
        let mut counts = vec![0u64; self.states.len()];

        let mut idx = Some(self.last);
        while let Some(i) = idx {
            counts[i] = 1;
            idx = self.states[i].suffix_link;
        }

        // Explicit-stack post-order; transitions form a DAG (max_len is
        // strictly increasing along edges), so a done-marker suffices.
        let mut done = vec![false; self.states.len()];
        let mut stack: Vec<(usize, usize)> = vec![(0, 0)];
        while let Some((node, child_idx)) = stack.pop() {
            if child_idx < self.states[node].edges.len() {
                let (_, child) = self.states[node].edges[child_idx];
                stack.push((node, child_idx + 1));
                if !done[child] {
                    stack.push((child, 0));
                }
            } else {
                let sum: u64 = self
                    .states[node]
                    .edges
                    .iter()
                    .map(|&(_, target)| counts[target])
                    .sum();
                counts[node] += sum;
                done[node] = true;
            }
        }
        counts
    }

    /// Number of states in the arena (root included).
    pub fn state_count(&self) -> usize {
        self.states.len()
    }

    /// States in arena (creation) order, for query traversals.
    pub(crate) fn states(&self) -> &[State] {
        &self.states
    }
}
