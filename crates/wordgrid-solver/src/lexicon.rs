// Vocabulary assembly from raw word-list sources.
//
// Each enabled source is a newline-delimited token stream read in full
// before the search runs. A source that cannot be read degrades to an
// empty contribution with a warning; a partial dictionary still solves.

use std::fs;
use std::io;

use wordgrid_core::alphabet::is_playable_word;
use wordgrid_core::config::{SourceFilter, WordSource};
use wordgrid_search::Vocabulary;

/// Merge the enabled sources and the seed words into one vocabulary.
///
/// Tokens are trimmed; sources marked [`SourceFilter::Alphabetic`] also
/// drop non-alphabetic tokens and tokens shorter than `min_len`. The
/// final vocabulary deduplicates and enforces `min_len` across every
/// contribution, seed included, so the union is commutative and seeding
/// with an already-present word changes nothing.
pub fn assemble(sources: &[WordSource], seed: &[String], min_len: usize) -> Vocabulary {
    let mut tokens: Vec<String> = Vec::new();
    for source in sources {
        match read_source(source, min_len) {
            Ok(mut words) => {
                log::debug!("source '{}': {} tokens", source.key, words.len());
                tokens.append(&mut words);
            }
            Err(err) => {
                log::warn!("source '{}' unavailable, skipping: {err}", source.key);
            }
        }
    }
    tokens.extend(seed.iter().map(|w| w.trim().to_string()));

    let vocabulary = Vocabulary::from_words(tokens, min_len);
    log::info!("assembled vocabulary of {} words", vocabulary.len());
    vocabulary
}

fn read_source(source: &WordSource, min_len: usize) -> io::Result<Vec<String>> {
    let text = fs::read_to_string(&source.path)?;
    let words = text
        .lines()
        .map(str::trim)
        .filter(|token| match source.filter {
            SourceFilter::Prefiltered => !token.is_empty(),
            SourceFilter::Alphabetic => token.len() >= min_len && is_playable_word(token),
        })
        .map(str::to_string)
        .collect();
    Ok(words)
}
