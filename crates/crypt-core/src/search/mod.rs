//! Joint decryption search over several cipher tokens.
//!
//! Every token gets a rank-ordered candidate list. The engine looks for index
//! vectors (one candidate per token) whose words all decode under a single
//! bijective substitution alphabet.
//!
//! Exploration is iterative deepening by rank. With depth ceiling `d`, only
//! candidates of rank `< d` are used, and a pass visits exactly the vectors
//! whose largest index is `d - 1`: the vectors of earlier passes are never
//! regenerated. Within a pass vectors come in lexicographic order (last token
//! varies fastest). A joint decoding's rank is its worst word rank, so
//! results come out rank-ordered as they are found.
//!
//! Tokens are absorbed into the map in input order and a conflicting prefix
//! prunes its whole subtree. Each level works on its own copy of the
//! `SubstitutionMap`, so an abandoned branch never leaks pairs into another.


use std::ops::ControlFlow;

use serde::Serialize;
use tracing::{debug, debug_span};

use crate::candidates::{candidates_for, CandidateList};
use crate::dict::WordIndex;
use crate::mapping::SubstitutionMap;
use crate::token::CipherToken;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    #[error("no cipher tokens given")]
    NoTokens,
}

#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Stop as soon as this many decodings were found. `None` searches the
    /// whole space.
    pub max_results: Option<usize>,
    /// Evaluated nodes between `on_progress` calls; 0 reports ceilings only.
    pub progress_interval: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_results: Some(20),
            progress_interval: 50_000,
        }
    }
}

/// One joint decoding: a word per cipher token, in token order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Decoding {
    /// Worst (largest) candidate rank among the chosen words.
    pub rank: usize,
    /// Chosen candidate index per token.
    pub indices: Vec<usize>,
    pub words: Vec<String>,
}

/// Snapshot handed to `SearchObserver::on_progress`.
#[derive(Debug, Clone, Copy)]
pub struct Progress<'a> {
    pub ceiling: usize,
    pub max_ceiling: usize,
    pub indices: &'a [usize],
    pub evaluated: u64,
}

/// Live feedback hooks. Both default to doing nothing.
pub trait SearchObserver {
    /// Called for every decoding when it is found; `seq` starts at 1.
    fn on_result(&mut self, _seq: usize, _decoding: &Decoding) {}

    /// Called when a new depth ceiling starts and every
    /// `progress_interval` evaluated nodes.
    fn on_progress(&mut self, _progress: &Progress<'_>) {}
}

impl SearchObserver for () {}

#[derive(Debug, Clone, Serialize)]
pub struct SearchOutcome {
    /// Decodings ordered by rank, ties in discovery order.
    pub results: Vec<Decoding>,
    /// `false` when the result cap cut the search short.
    pub exhausted: bool,
    /// Last depth ceiling entered.
    pub ceiling: usize,
    /// Number of (token, candidate) extensions attempted.
    pub evaluated: u64,
}

/// Cipher tokens with their candidate lists, ready to search.
#[derive(Debug, Clone)]
pub struct JointSearch {
    tokens: Vec<CipherToken>,
    candidates: Vec<CandidateList>,
}

impl JointSearch {
    /// Filter every token against `index`.
    pub fn new(tokens: Vec<CipherToken>, index: &WordIndex) -> Result<Self, SearchError> {
        if tokens.is_empty() {
            return Err(SearchError::NoTokens);
        }
        let candidates = tokens.iter().map(|t| candidates_for(t, index)).collect();
        Ok(Self { tokens, candidates })
    }

    pub fn tokens(&self) -> &[CipherToken] {
        &self.tokens
    }

    pub fn candidates(&self) -> &[CandidateList] {
        &self.candidates
    }

    pub fn candidate_counts(&self) -> Vec<usize> {
        self.candidates.iter().map(CandidateList::len).collect()
    }

    /// Ceiling at which every index vector has been covered.
    pub fn max_ceiling(&self) -> usize {
        self.candidates
            .iter()
            .map(CandidateList::len)
            .max()
            .unwrap_or(0)
    }

    pub fn run<O: SearchObserver>(&self, config: &SearchConfig, observer: &mut O) -> SearchOutcome {
        let _span = debug_span!(
            "joint_search",
            tokens = self.tokens.len(),
            max_results = config.max_results
        )
        .entered();

        let mut walker = Walker {
            search: self,
            config,
            observer,
            indices: vec![0; self.tokens.len()],
            reachable: vec![false; self.tokens.len() + 1],
            ceiling: 0,
            max_ceiling: self.max_ceiling(),
            results: Vec::new(),
            evaluated: 0,
        };

        let mut exhausted = true;
        if self.candidates.iter().any(CandidateList::is_empty) {
            debug!(counts = ?self.candidate_counts(), "token without candidates");
        } else if config.max_results == Some(0) {
            exhausted = false;
        } else {
            for ceiling in 1..=walker.max_ceiling {
                if walker.enter_ceiling(ceiling).is_break() {
                    exhausted = false;
                    break;
                }
            }
        }

        let Walker {
            mut results,
            ceiling,
            evaluated,
            ..
        } = walker;
        results.sort_by_key(|d| d.rank);
        debug!(results = results.len(), ceiling, evaluated, exhausted);
        SearchOutcome {
            results,
            exhausted,
            ceiling,
            evaluated,
        }
    }
}

struct Walker<'a, O> {
    search: &'a JointSearch,
    config: &'a SearchConfig,
    observer: &'a mut O,
    indices: Vec<usize>,
    /// `reachable[k]`: some token at position `>= k` has a candidate of rank
    /// `ceiling - 1`.
    reachable: Vec<bool>,
    ceiling: usize,
    max_ceiling: usize,
    results: Vec<Decoding>,
    evaluated: u64,
}

impl<O: SearchObserver> Walker<'_, O> {
    fn enter_ceiling(&mut self, ceiling: usize) -> ControlFlow<()> {
        self.ceiling = ceiling;
        let search = self.search;
        let lists = &search.candidates;
        for k in (0..lists.len()).rev() {
            self.reachable[k] = self.reachable[k + 1] || lists[k].len() >= ceiling;
        }
        self.indices.iter_mut().for_each(|i| *i = 0);
        self.report();
        self.descend(0, SubstitutionMap::new(), false)
    }

    fn descend(&mut self, pos: usize, map: SubstitutionMap, on_shell: bool) -> ControlFlow<()> {
        let search = self.search;
        let list = &search.candidates[pos];
        let token = &search.tokens[pos];
        let last = self.ceiling - 1;
        let limit = list.len().min(self.ceiling);
        // Off the shell with nothing later able to reach it: only rank `last` qualifies here.
        let start = if on_shell || self.reachable[pos + 1] {
            0
        } else {
            last
        };

        for rank in start..limit {
            self.indices[pos] = rank;
            self.tick();
            let mut next = map;
            if !next.extend(token, &list.words()[rank]) {
                continue;
            }
            let hit = on_shell || rank == last;
            if pos + 1 == search.tokens.len() {
                self.emit()?;
            } else {
                self.descend(pos + 1, next, hit)?;
            }
        }
        ControlFlow::Continue(())
    }

    fn tick(&mut self) {
        self.evaluated += 1;
        let every = self.config.progress_interval;
        if every > 0 && self.evaluated % every == 0 {
            self.report();
        }
    }

    fn report(&mut self) {
        self.observer.on_progress(&Progress {
            ceiling: self.ceiling,
            max_ceiling: self.max_ceiling,
            indices: &self.indices,
            evaluated: self.evaluated,
        });
    }

    fn emit(&mut self) -> ControlFlow<()> {
        let search = self.search;
        let words = self
            .indices
            .iter()
            .zip(&search.candidates)
            .map(|(&i, list)| list.words()[i].clone())
            .collect();
        let decoding = Decoding {
            rank: self.indices.iter().copied().max().unwrap_or(0),
            indices: self.indices.clone(),
            words,
        };
        self.results.push(decoding);
        let seq = self.results.len();
        self.observer.on_result(seq, &self.results[seq - 1]);

        match self.config.max_results {
            Some(cap) if seq >= cap => ControlFlow::Break(()),
            _ => ControlFlow::Continue(()),
        }
    }
}
