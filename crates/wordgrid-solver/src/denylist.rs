// Proper-noun denylist.
//
// The puzzle rejects proper nouns; submitting one costs time and a
// pop-up. The denylist is a newline-delimited resource of such tokens,
// subtracted from the playable output. A missing resource degrades to an
// empty denylist and the solve continues.

use std::fs;
use std::path::Path;

use hashbrown::HashSet;

/// A static set of disallowed tokens.
#[derive(Debug, Clone, Default)]
pub struct Denylist {
    entries: HashSet<String>,
}

impl Denylist {
    /// Load a denylist from a newline-delimited resource.
    ///
    /// A read failure is logged and yields an empty denylist rather than
    /// aborting the solve.
    pub fn load(path: &Path) -> Denylist {
        match fs::read_to_string(path) {
            Ok(text) => {
                let entries: HashSet<String> = text
                    .lines()
                    .map(str::trim)
                    .filter(|line| !line.is_empty())
                    .map(str::to_string)
                    .collect();
                log::debug!("denylist loaded: {} entries", entries.len());
                Denylist { entries }
            }
            Err(err) => {
                log::warn!(
                    "denylist {} unavailable, continuing without: {err}",
                    path.display()
                );
                Denylist::default()
            }
        }
    }

    pub fn from_entries<I>(entries: I) -> Denylist
    where
        I: IntoIterator<Item = String>,
    {
        Denylist {
            entries: entries.into_iter().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.entries.contains(word)
    }

    /// Split words into (playable, denied), preserving input order on
    /// both sides. Every input word lands in exactly one side.
    pub fn partition<I>(&self, words: I) -> (Vec<String>, Vec<String>)
    where
        I: IntoIterator<Item = String>,
    {
        words.into_iter().partition(|w| !self.entries.contains(w))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn partition_is_exact_and_order_preserving() {
        let denylist =
            Denylist::from_entries(["kate".to_string(), "york".to_string()]);
        let input = ["seat", "kate", "tree", "york", "frog"];
        let (playable, invalid) =
            denylist.partition(input.iter().map(|w| w.to_string()));

        assert_eq!(playable, ["seat", "tree", "frog"]);
        assert_eq!(invalid, ["kate", "york"]);
        assert_eq!(playable.len() + invalid.len(), input.len());
        for word in &playable {
            assert!(!invalid.contains(word));
        }
    }

    #[test]
    fn loads_and_trims_entries() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nouns.txt");
        let mut file = fs::File::create(&path).unwrap();
        writeln!(file, "kate\n  york  \n\nrome").unwrap();

        let denylist = Denylist::load(&path);
        assert_eq!(denylist.len(), 3);
        assert!(denylist.contains("york"));
        assert!(!denylist.contains("seat"));
    }

    #[test]
    fn missing_resource_degrades_to_empty() {
        let denylist = Denylist::load(Path::new("/no/such/denylist.txt"));
        assert!(denylist.is_empty());

        let (playable, invalid) = denylist.partition(vec!["seat".to_string()]);
        assert_eq!(playable, ["seat"]);
        assert!(invalid.is_empty());
    }
}
