// wordgrid-lexicon: assemble a vocabulary and report on it.
//
// Usage:
//   wordgrid-lexicon [-d DATA_PATH] [OPTIONS]
//
// Options:
//   -d, --data-path PATH   Directory holding the word-list files
//   --bulk                 Use the bulk list instead of the curated ones
//   --min-len N            Minimum word length (default 4)
//   --print                Print every word after the stats
//   -h, --help             Print help

use std::io::{self, Write};

use wordgrid_core::config::Mode;
use wordgrid_solver::lexicon;

fn main() {
    wordgrid_cli::init_logging();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (data_path, args) = wordgrid_cli::parse_data_path(&args);

    if wordgrid_cli::wants_help(&args) {
        println!("wordgrid-lexicon: assemble a vocabulary and report on it.");
        println!();
        println!("Usage: wordgrid-lexicon [-d DATA_PATH] [OPTIONS]");
        println!();
        println!("Options:");
        println!("  -d, --data-path PATH   Directory holding the word-list files");
        println!("  --bulk                 Use the bulk list instead of the curated ones");
        println!("  --min-len N            Minimum word length (default 4)");
        println!("  --print                Print every word after the stats");
        println!("  -h, --help             Print this help");
        return;
    }

    let (min_len, args) = wordgrid_cli::parse_value_flag(&args, "--min-len");
    let bulk = args.iter().any(|a| a == "--bulk");
    let print_words = args.iter().any(|a| a == "--print");

    let data_dir = wordgrid_cli::resolve_data_dir(data_path.as_deref());
    let config = wordgrid_cli::build_config(&data_dir);
    let min_len = min_len.unwrap_or(config.min_word_len);

    let mode = if bulk { Mode::Exhaustive } else { Mode::Quick };
    let sources = config.sources_for(mode);
    let vocabulary = lexicon::assemble(&sources, &[], min_len);

    let words = vocabulary.words();
    let shortest = words.iter().map(|w| w.len()).min().unwrap_or(0);
    let longest = words.iter().map(|w| w.len()).max().unwrap_or(0);
    println!(
        "{} words (length {shortest}-{longest}) from {} source(s) in {}",
        words.len(),
        sources.len(),
        data_dir.display()
    );

    if print_words {
        let stdout = io::stdout();
        let mut out = io::BufWriter::new(stdout.lock());
        for word in words {
            let _ = writeln!(out, "{word}");
        }
    }
}
