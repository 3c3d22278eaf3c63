use crate::error::NormalizeError;
use fnv::FnvHashSet;
use std::io::Read;
use std::str::FromStr;
use term_macros::for_each_line;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    /// Alphabet only, every line counts.
    Alphabet,
    /// Alphabet plus word list, single-character lines are dropped.
    Extended,
}

impl FromStr for Variant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "alphabet" => Ok(Variant::Alphabet),
            "extended" => Ok(Variant::Extended),
            other => Err(format!(
                "unknown variant {:?}, expected alphabet or extended",
                other
            )),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Options {
    pub variant: Variant,
    /// Leave the empty entry (from whitespace characters and runs of
    /// spaces) out of both outputs.
    pub drop_empty: bool,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            variant: Variant::Extended,
            drop_empty: false,
        }
    }
}

/// Unicode White_Space plus the information separators U+001C..U+001F.
pub fn is_blank(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

pub fn strip(s: &str) -> &str {
    s.trim_matches(is_blank)
}

#[derive(Debug)]
pub struct Extraction {
    options: Options,
    alphabet: FnvHashSet<String>,
    words: FnvHashSet<String>,
    pub lines_read: usize,
    pub lines_skipped: usize,
}

impl Extraction {
    pub fn new(options: Options) -> Self {
        Extraction {
            options,
            alphabet: FnvHashSet::default(),
            words: FnvHashSet::default(),
            lines_read: 0,
            lines_skipped: 0,
        }
    }

    pub fn options(&self) -> Options {
        self.options
    }

    pub fn normalize_line(&mut self, line: &str) {
        self.lines_read += 1;
        let line = strip(line);
        let extended = self.options.variant == Variant::Extended;
        if extended && line.chars().count() == 1 {
            self.lines_skipped += 1;
            return;
        }

        let mut buf = [0u8; 4];
        for c in line.chars() {
            // a space strips down to ""
            let entry = strip(c.encode_utf8(&mut buf)).to_lowercase();
            self.alphabet.insert(entry);
        }

        if extended {
            for token in line.split(' ') {
                self.words.insert(strip(token).to_lowercase());
            }
        }
    }

    /// Distinct alphabet entries before sorting and filtering.
    pub fn alphabet_len(&self) -> usize {
        self.alphabet.len()
    }

    pub fn sorted_alphabet(&self) -> Vec<&str> {
        self.sorted(&self.alphabet)
    }

    /// Always empty for the plain alphabet variant.
    pub fn sorted_words(&self) -> Vec<&str> {
        self.sorted(&self.words)
    }

    fn sorted<'a>(&self, set: &'a FnvHashSet<String>) -> Vec<&'a str> {
        let mut entries: Vec<&str> = set
            .iter()
            .map(|s| s.as_str())
            .filter(|s| !(self.options.drop_empty && s.is_empty()))
            .collect();
        // str ordering is byte order, which for UTF-8 is code point order
        entries.sort_unstable();
        entries
    }
}

/// Runs every line of `reader` through [`Extraction::normalize_line`].
pub fn extract<R: Read>(reader: R, options: Options) -> Result<Extraction, NormalizeError> {
    let mut extraction = Extraction::new(options);
    let mut line_no = 0;
    for_each_line(reader, |bytes| -> Result<(), NormalizeError> {
        line_no += 1;
        let line =
            std::str::from_utf8(bytes).map_err(|_| NormalizeError::Decode { line: line_no })?;
        extraction.normalize_line(line);
        Ok(())
    })?;
    Ok(extraction)
}
