use crate::error::NormalizeError;
use crate::normalize::{extract, Options, Variant};
use crate::output::write_entries;
use log::{debug, info};
use miniserde::Serialize;
use std::fs::File;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    pub input: PathBuf,
    pub alphabet_out: PathBuf,
    pub words_out: PathBuf,
    pub options: Options,
}

#[derive(Serialize, Debug, Default, PartialEq)]
pub struct Summary {
    pub lines_read: usize,
    pub lines_skipped: usize,
    pub alphabet: Vec<String>,
    /// `None` when no word list was written.
    pub words: Option<usize>,
}

pub fn run(config: &Config) -> Result<Summary, NormalizeError> {
    info!("reading {}", config.input.display());
    let file = File::open(&config.input).map_err(|source| NormalizeError::Read {
        path: config.input.clone(),
        source,
    })?;
    let extraction = extract(file, config.options).map_err(|e| e.reading(&config.input))?;
    info!(
        "{} lines, {} skipped, {} distinct characters",
        extraction.lines_read,
        extraction.lines_skipped,
        extraction.alphabet_len()
    );

    let alphabet = extraction.sorted_alphabet();
    info!("{} characters after sorting", alphabet.len());
    debug!("{:?}", alphabet);
    write_entries(&config.alphabet_out, alphabet.iter().copied())?;
    info!("wrote {}", config.alphabet_out.display());

    let words = match extraction.options().variant {
        Variant::Alphabet => None,
        Variant::Extended => {
            let words = extraction.sorted_words();
            let count = write_entries(&config.words_out, words)?;
            info!("wrote {} words to {}", count, config.words_out.display());
            Some(count)
        }
    };

    Ok(Summary {
        lines_read: extraction.lines_read,
        lines_skipped: extraction.lines_skipped,
        alphabet: alphabet.into_iter().map(String::from).collect(),
        words,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;
    use tempfile::TempDir;

    fn config(dir: &Path, variant: Variant) -> Config {
        Config {
            input: dir.join("dictionary.txt"),
            alphabet_out: dir.join("alphabets.txt"),
            words_out: dir.join("words.txt"),
            options: Options {
                variant,
                drop_empty: false,
            },
        }
    }

    fn setup(contents: &str, variant: Variant) -> (TempDir, Config) {
        let dir = tempfile::tempdir().unwrap();
        let config = config(dir.path(), variant);
        std::fs::write(&config.input, contents).unwrap();
        (dir, config)
    }

    #[test]
    fn test_extended_run() {
        let (_dir, config) = setup("Good morning\nஅ\nஅம்மா\n", Variant::Extended);
        let summary = run(&config).unwrap();
        assert_eq!(summary.lines_read, 3);
        assert_eq!(summary.lines_skipped, 1);
        assert_eq!(summary.words, Some(3));

        let words = std::fs::read_to_string(&config.words_out).unwrap();
        assert_eq!(words, "good\nmorning\nஅம்மா\n");

        let alphabet = std::fs::read_to_string(&config.alphabet_out).unwrap();
        let lines: Vec<&str> = alphabet.split_terminator('\n').collect();
        assert_eq!(lines, summary.alphabet);
        assert_eq!(lines[0], "");
        assert!(lines.contains(&"அ"));
        assert!(lines.contains(&"ம"));
    }

    #[test]
    fn test_alphabet_variant_skips_word_file() {
        let (_dir, config) = setup("ab\nc\n", Variant::Alphabet);
        let summary = run(&config).unwrap();
        assert_eq!(summary.words, None);
        assert_eq!(summary.alphabet, vec!["a", "b", "c"]);
        assert_eq!(
            std::fs::read_to_string(&config.alphabet_out).unwrap(),
            "a\nb\nc\n"
        );
        assert!(!config.words_out.exists());
    }

    #[test]
    fn test_empty_input_creates_empty_files() {
        let (_dir, config) = setup("", Variant::Extended);
        run(&config).unwrap();
        assert_eq!(std::fs::read(&config.alphabet_out).unwrap(), b"");
        assert_eq!(std::fs::read(&config.words_out).unwrap(), b"");
    }

    #[test]
    fn test_idempotent() {
        let (_dir, config) = setup(
            "zebra apple\nMango banana cherry\nx\n  kiwi  \nஇலை மரம்\n",
            Variant::Extended,
        );
        run(&config).unwrap();
        let first = (
            std::fs::read(&config.alphabet_out).unwrap(),
            std::fs::read(&config.words_out).unwrap(),
        );
        run(&config).unwrap();
        let second = (
            std::fs::read(&config.alphabet_out).unwrap(),
            std::fs::read(&config.words_out).unwrap(),
        );
        assert_eq!(first, second);
    }

    #[test]
    fn test_missing_input() {
        let dir = tempfile::tempdir().unwrap();
        let config = config(dir.path(), Variant::Extended);
        match run(&config) {
            Err(NormalizeError::Read { path, .. }) => assert_eq!(path, config.input),
            other => panic!("expected a read error, got {:?}", other),
        }
        assert!(!config.alphabet_out.exists());
        assert!(!config.words_out.exists());
    }

    #[test]
    fn test_summary_json() {
        let summary = Summary {
            lines_read: 2,
            lines_skipped: 1,
            alphabet: vec!["a".to_string()],
            words: None,
        };
        assert_eq!(
            miniserde::json::to_string(&summary),
            r#"{"lines_read":2,"lines_skipped":1,"alphabet":["a"],"words":null}"#
        );
    }
}
