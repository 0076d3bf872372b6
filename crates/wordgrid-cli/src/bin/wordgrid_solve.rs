// wordgrid-solve: solve a board file against the configured word lists.
//
// The board file holds one row string per line, lowercase letters with
// spaces (or any non-letter) for blanks. An optional first line
// "bonus:<word>" designates the bonus word. Found words print to stdout
// one per line, denylisted words prefixed with "!", and a summary goes to
// stderr.
//
// Usage:
//   wordgrid-solve [-d DATA_PATH] [OPTIONS] BOARD_FILE
//
// Options:
//   -d, --data-path PATH   Directory holding the word-list files
//   --exhaustive           Run a quick pass, then the bulk list seeded
//                          with the quick findings
//   --threads N            Search worker threads (default 1)
//   --budget SECS          Wall-clock budget for each search
//   --min-len N            Minimum word length (default 4)
//   -h, --help             Print help

use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Duration;

use wordgrid_core::config::Mode;
use wordgrid_solver::{
    BoardProvider, BoardUnavailableError, DailyBoard, Solution, SolverHandle,
};

/// Board source backed by a local file.
struct FileBoard {
    path: PathBuf,
}

impl BoardProvider for FileBoard {
    fn today(&self) -> Result<DailyBoard, BoardUnavailableError> {
        let text = std::fs::read_to_string(&self.path)
            .map_err(|e| BoardUnavailableError(format!("{}: {e}", self.path.display())))?;

        let mut bonus_word = String::new();
        let mut rows = Vec::new();
        for line in text.lines() {
            if rows.is_empty() && bonus_word.is_empty() {
                if let Some(word) = line.strip_prefix("bonus:") {
                    bonus_word = word.trim().to_string();
                    continue;
                }
            }
            rows.push(line.to_string());
        }
        if rows.is_empty() {
            return Err(BoardUnavailableError(format!(
                "{}: no board rows",
                self.path.display()
            )));
        }
        Ok(DailyBoard { rows, bonus_word })
    }
}

fn print_help() {
    println!("wordgrid-solve: find every word on a letter-grid board.");
    println!();
    println!("Usage: wordgrid-solve [-d DATA_PATH] [OPTIONS] BOARD_FILE");
    println!();
    println!("The board file holds one row per line; non-letters are blanks.");
    println!("An optional first line 'bonus:<word>' marks the bonus word.");
    println!();
    println!("Options:");
    println!("  -d, --data-path PATH   Directory holding the word-list files");
    println!("  --exhaustive           Also run the bulk list, seeded with the");
    println!("                         quick pass's findings");
    println!("  --threads N            Search worker threads (default 1)");
    println!("  --budget SECS          Wall-clock budget per search");
    println!("  --min-len N            Minimum word length (default 4)");
    println!("  -h, --help             Print this help");
}

fn print_solution(solution: &Solution) {
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    for word in &solution.words {
        let _ = writeln!(out, "{word}");
    }
    for word in &solution.invalid {
        let _ = writeln!(out, "!{word}");
    }
    if !solution.bonus_word.is_empty() {
        let _ = writeln!(out, "bonus: {}", solution.bonus_word);
    }

    let s = &solution.summary;
    eprintln!(
        "[{:?}] {} playable, {} invalid | board {}x{} ({} letters) | \
         vocabulary {} | assemble {}ms, search {}ms{}",
        s.mode,
        s.found_words,
        s.invalid_words,
        s.grid_rows,
        s.grid_cols,
        s.letter_cells,
        s.vocabulary_size,
        s.assemble_ms,
        s.search_ms,
        if s.deadline_hit { " (budget hit)" } else { "" }
    );
}

fn main() {
    wordgrid_cli::init_logging();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (data_path, args) = wordgrid_cli::parse_data_path(&args);

    if wordgrid_cli::wants_help(&args) {
        print_help();
        return;
    }

    let (threads, args) = wordgrid_cli::parse_value_flag(&args, "--threads");
    let (budget, args) = wordgrid_cli::parse_value_flag(&args, "--budget");
    let (min_len, args) = wordgrid_cli::parse_value_flag(&args, "--min-len");
    let exhaustive = args.iter().any(|a| a == "--exhaustive");

    let board_file = args
        .iter()
        .find(|a| !a.starts_with('-'))
        .unwrap_or_else(|| wordgrid_cli::fatal("expected a BOARD_FILE argument"));

    let data_dir = wordgrid_cli::resolve_data_dir(data_path.as_deref());
    let mut config = wordgrid_cli::build_config(&data_dir);
    if let Some(threads) = threads {
        config.threads = threads.max(1);
    }
    if let Some(secs) = budget {
        config.budget = Some(Duration::from_secs(secs as u64));
    }
    if let Some(min_len) = min_len {
        config.min_word_len = min_len;
    }

    let handle = SolverHandle::new(config);
    let provider = FileBoard {
        path: PathBuf::from(board_file),
    };

    let quick = handle.solve(&provider, Mode::Quick, &[]);
    if !exhaustive {
        print_solution(&quick);
        return;
    }

    print_solution(&quick);
    let seeded = handle.solve(&provider, Mode::Exhaustive, &quick.words);
    print_solution(&seeded);
}
