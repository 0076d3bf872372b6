// Recursive prefix-pruned depth-first search.
//
// One traversal per non-empty starting cell. Each recursion step extends
// the candidate by a neighbor's letter and narrows the parent's
// vocabulary range by that letter; recursion stops when the range is
// empty or no unvisited neighbor remains. Traversals are independent and
// share only the read-only grid and vocabulary, so they parallelize by
// handing starting cells to scoped worker threads.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::{Duration, Instant};

use hashbrown::HashSet;

use wordgrid_core::pos::Pos;

use crate::grid::Grid;
use crate::index::{PrefixRange, Vocabulary};

/// A wall-clock cutoff checked between starting-cell traversals.
///
/// A single traversal is never interrupted; expiry means the remaining
/// starting cells are skipped and the words found so far are returned.
#[derive(Debug, Clone, Copy)]
pub struct Deadline {
    at: Instant,
}

impl Deadline {
    pub fn after(budget: Duration) -> Self {
        Self {
            at: Instant::now() + budget,
        }
    }

    pub fn expired(&self) -> bool {
        Instant::now() >= self.at
    }
}

/// Result of a search: the found words plus whether the deadline cut the
/// search short.
#[derive(Debug, Default)]
pub struct SearchOutcome {
    pub words: HashSet<String>,
    pub deadline_hit: bool,
}

/// Find every vocabulary word spellable on the grid.
///
/// Sequential, unbounded. The result contains each spelling once, no
/// matter how many trails produce it, and is independent of the iteration
/// order over starting cells and neighbors.
pub fn search(grid: &Grid, vocabulary: &Vocabulary, min_len: usize) -> HashSet<String> {
    search_with(grid, vocabulary, min_len, 1, None).words
}

/// Find every vocabulary word spellable on the grid, with optional worker
/// threads and an optional deadline.
///
/// `threads <= 1` keeps the search on the calling thread. Any thread
/// count produces the same word set (absent a deadline); workers share
/// the grid and vocabulary read-only and merge their local sets at join.
pub fn search_with(
    grid: &Grid,
    vocabulary: &Vocabulary,
    min_len: usize,
    threads: usize,
    deadline: Option<Deadline>,
) -> SearchOutcome {
    if vocabulary.is_empty() {
        return SearchOutcome::default();
    }
    let starts: Vec<Pos> = grid.letter_cells().map(|(pos, _)| pos).collect();
    if threads <= 1 || starts.len() <= 1 {
        return search_sequential(grid, vocabulary, min_len, &starts, deadline);
    }
    search_parallel(grid, vocabulary, min_len, &starts, threads, deadline)
}

fn search_sequential(
    grid: &Grid,
    vocabulary: &Vocabulary,
    min_len: usize,
    starts: &[Pos],
    deadline: Option<Deadline>,
) -> SearchOutcome {
    let mut worker = TraversalState::new(grid);
    let mut words = HashSet::new();
    for (done, &start) in starts.iter().enumerate() {
        if deadline.is_some_and(|d| d.expired()) {
            log::warn!(
                "search budget expired after {done} of {} starting cells",
                starts.len()
            );
            return SearchOutcome {
                words,
                deadline_hit: true,
            };
        }
        worker.run(grid, vocabulary, min_len, start, &mut words);
    }
    SearchOutcome {
        words,
        deadline_hit: false,
    }
}

fn search_parallel(
    grid: &Grid,
    vocabulary: &Vocabulary,
    min_len: usize,
    starts: &[Pos],
    threads: usize,
    deadline: Option<Deadline>,
) -> SearchOutcome {
    let next_start = AtomicUsize::new(0);
    let expired = AtomicBool::new(false);
    let workers = threads.min(starts.len());

    let mut words = HashSet::new();
    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..workers)
            .map(|_| {
                let next_start = &next_start;
                let expired = &expired;
                scope.spawn(move || {
                    let mut worker = TraversalState::new(grid);
                    let mut local = HashSet::new();
                    loop {
                        if deadline.is_some_and(|d| d.expired()) {
                            expired.store(true, Ordering::Relaxed);
                            break;
                        }
                        let i = next_start.fetch_add(1, Ordering::Relaxed);
                        if i >= starts.len() {
                            break;
                        }
                        worker.run(grid, vocabulary, min_len, starts[i], &mut local);
                    }
                    local
                })
            })
            .collect();

        for handle in handles {
            match handle.join() {
                Ok(local) => words.extend(local),
                Err(_) => log::error!("search worker panicked; its results are lost"),
            }
        }
    });

    let deadline_hit = expired.load(Ordering::Relaxed);
    if deadline_hit {
        log::warn!("search budget expired; returning partial results");
    }
    SearchOutcome {
        words,
        deadline_hit,
    }
}

/// Reusable per-traversal state: the candidate string and the visited
/// bitmap over flat cell indices (the trail).
struct TraversalState {
    candidate: String,
    visited: Vec<bool>,
}

impl TraversalState {
    fn new(grid: &Grid) -> Self {
        Self {
            candidate: String::new(),
            visited: vec![false; grid.cell_count()],
        }
    }

    /// Run one full traversal from a starting cell, inserting every
    /// accepted word into `found`.
    fn run(
        &mut self,
        grid: &Grid,
        vocabulary: &Vocabulary,
        min_len: usize,
        start: Pos,
        found: &mut HashSet<String>,
    ) {
        let Some(letter) = grid.letter(start) else {
            return;
        };
        let range = vocabulary.narrow(vocabulary.full_range(), letter);
        if range.is_empty() {
            return;
        }
        self.candidate.push(letter);
        self.visited[grid.index_of(start)] = true;
        self.extend(grid, vocabulary, min_len, start, range, found);
        self.visited[grid.index_of(start)] = false;
        self.candidate.pop();
    }

    fn extend(
        &mut self,
        grid: &Grid,
        vocabulary: &Vocabulary,
        min_len: usize,
        at: Pos,
        range: PrefixRange,
        found: &mut HashSet<String>,
    ) {
        if self.candidate.len() >= min_len {
            if let Some(word) = vocabulary.exact_match(range) {
                // Membership, not prefix, decides acceptance; a complete
                // word that is also a longer word's prefix is recorded and
                // the traversal continues past it.
                if !found.contains(word) {
                    found.insert(word.to_string());
                }
            }
        }

        for neighbor in grid.neighbors(at) {
            if self.visited[neighbor.index] {
                continue;
            }
            let child = vocabulary.narrow(range, neighbor.letter);
            if child.is_empty() {
                continue;
            }
            self.visited[neighbor.index] = true;
            self.candidate.push(neighbor.letter);
            self.extend(grid, vocabulary, min_len, neighbor.pos, child, found);
            self.candidate.pop();
            self.visited[neighbor.index] = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vocab(words: &[&str], min_len: usize) -> Vocabulary {
        Vocabulary::from_words(words.iter().map(|w| w.to_string()), min_len)
    }

    fn sorted(words: HashSet<String>) -> Vec<String> {
        let mut v: Vec<String> = words.into_iter().collect();
        v.sort_unstable();
        v
    }

    #[test]
    fn acceptance_requires_a_repeat_free_adjacent_trail() {
        // "bead" has the trail b(0,1) -> e(1,1) -> a(0,0) -> d(1,0);
        // "bide" would need a second 'b' or a jump and has none, and
        // "bee" falls under the minimum length.
        let grid = Grid::build(&["abc", "def", "ghi"]).unwrap();
        let v = vocab(&["bead", "bide", "bee"], 4);
        assert_eq!(sorted(search(&grid, &v, 4)), ["bead"]);
    }

    #[test]
    fn finds_word_across_top_row_and_drops_short_words() {
        let grid = Grid::build(&["seat", "eat "]).unwrap();
        let v = vocab(&["seat", "eat"], 4);
        assert_eq!(sorted(search(&grid, &v, 4)), ["seat"]);
    }

    #[test]
    fn min_length_is_honored_when_configured_lower() {
        let grid = Grid::build(&["seat", "eat "]).unwrap();
        let v = vocab(&["seat", "eat"], 3);
        assert_eq!(sorted(search(&grid, &v, 3)), ["eat", "seat"]);
    }

    #[test]
    fn complete_word_is_recorded_even_when_longer_words_share_its_prefix() {
        // "seat" is a prefix of "seats" in the vocabulary; the trail that
        // spells it must still record it before running out of cells.
        let grid = Grid::build(&["se", "ta"]).unwrap();
        let v = vocab(&["seat", "seats", "sate", "east"], 4);
        let found = sorted(search(&grid, &v, 4));
        assert_eq!(found, ["east", "sate", "seat"]);
    }

    #[test]
    fn cells_are_not_reused_within_one_word() {
        // "anna" needs two 'n's and two 'a's; this board has one of each.
        let grid = Grid::build(&["an"]).unwrap();
        let v = vocab(&["anna"], 4);
        assert!(search(&grid, &v, 4).is_empty());
    }

    #[test]
    fn single_cell_grid_finds_nothing() {
        let grid = Grid::build(&["a"]).unwrap();
        let v = vocab(&["aaaa"], 4);
        assert!(search(&grid, &v, 4).is_empty());
    }

    #[test]
    fn all_blank_grid_finds_nothing() {
        let grid = Grid::build(&["  ", "  "]).unwrap();
        let v = vocab(&["seat"], 4);
        assert!(search(&grid, &v, 4).is_empty());
    }

    #[test]
    fn disconnected_short_component_contributes_nothing() {
        // "tea" sits in a 3-cell island separated by a blank column; the
        // island can never reach length 4.
        let grid = Grid::build(&["te  dogs", "a   ...."]).unwrap();
        let v = vocab(&["teas", "dogs"], 4);
        assert_eq!(sorted(search(&grid, &v, 4)), ["dogs"]);
    }

    #[test]
    fn empty_vocabulary_is_not_an_error() {
        let grid = Grid::build(&["seat"]).unwrap();
        let v = Vocabulary::from_words(std::iter::empty(), 4);
        assert!(search(&grid, &v, 4).is_empty());
    }

    #[test]
    fn result_is_independent_of_vocabulary_input_order() {
        let grid = Grid::build(&["seat", "eats", "mote"]).unwrap();
        let words = ["seat", "eats", "team", "meat", "tame", "mote", "stem"];
        let forward = vocab(&words, 4);
        let mut reversed = words;
        reversed.reverse();
        let backward = vocab(&reversed, 4);
        assert_eq!(
            sorted(search(&grid, &forward, 4)),
            sorted(search(&grid, &backward, 4))
        );
    }

    #[test]
    fn parallel_matches_sequential_for_any_thread_count() {
        let grid = Grid::build(&["seat", "eats", "mote", "rans"]).unwrap();
        let v = vocab(
            &[
                "seat", "eats", "team", "meat", "tame", "mote", "stem", "rant", "sane", "near",
                "ears", "oats", "moat", "mats",
            ],
            4,
        );
        let baseline = sorted(search(&grid, &v, 4));
        for threads in [2, 3, 8] {
            let outcome = search_with(&grid, &v, 4, threads, None);
            assert!(!outcome.deadline_hit);
            assert_eq!(sorted(outcome.words), baseline, "threads={threads}");
        }
    }

    #[test]
    fn every_found_word_is_a_vocabulary_member_of_min_length() {
        let grid = Grid::build(&["abcd", "efgh", "ijkl", "mnop"]).unwrap();
        let v = vocab(&["fink", "knife", "glop", "plonk", "jink", "mnop"], 4);
        for word in search(&grid, &v, 4) {
            assert!(word.len() >= 4);
            assert!(v.contains(&word));
        }
    }

    #[test]
    fn expired_deadline_returns_partial_result_with_flag() {
        let grid = Grid::build(&["seat", "eats"]).unwrap();
        let v = vocab(&["seat", "eats"], 4);
        let outcome = search_with(&grid, &v, 4, 1, Some(Deadline::after(Duration::ZERO)));
        assert!(outcome.deadline_hit);
        assert!(outcome.words.is_empty());
    }
}
