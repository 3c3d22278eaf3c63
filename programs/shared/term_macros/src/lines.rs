use linereader::LineReader;
use std::io::{self, Read};

/// Feeds every line of `reader` to `f`, minus its terminator. `\n`, `\r\n`
/// and a lone `\r` all end a line. Stops at the first read error or the
/// first error `f` returns.
pub fn for_each_line<R, E, F>(reader: R, mut f: F) -> Result<(), E>
where
    R: Read,
    E: From<io::Error>,
    F: FnMut(&[u8]) -> Result<(), E>,
{
    let mut lines = LineReader::new(reader);
    let mut splitter = Splitter::default();
    while let Some(chunk) = lines.next_line() {
        splitter.feed(chunk?, &mut f)?;
    }
    splitter.finish(&mut f)
}

/// Line splitting over arbitrary chunks. linereader hands back overlong
/// lines in pieces, so a line (or a `\r\n` pair) can straddle two chunks.
#[derive(Debug, Default)]
pub struct Splitter {
    line: Vec<u8>,
    pending_cr: bool,
}

impl Splitter {
    pub fn feed<E, F>(&mut self, chunk: &[u8], f: &mut F) -> Result<(), E>
    where
        F: FnMut(&[u8]) -> Result<(), E>,
    {
        let mut rest = chunk;
        if self.pending_cr && rest.first() == Some(&b'\n') {
            rest = &rest[1..];
        }
        self.pending_cr = false;

        while let Some(i) = rest.iter().position(|&b| b == b'\n' || b == b'\r') {
            if self.line.is_empty() {
                f(&rest[..i])?;
            } else {
                self.line.extend_from_slice(&rest[..i]);
                f(&self.line)?;
                self.line.clear();
            }
            let mut next = i + 1;
            if rest[i] == b'\r' {
                match rest.get(next) {
                    Some(&b'\n') => next += 1,
                    None => self.pending_cr = true,
                    Some(_) => {}
                }
            }
            rest = &rest[next..];
        }
        self.line.extend_from_slice(rest);
        Ok(())
    }

    /// Flushes a final line that had no terminator.
    pub fn finish<E, F>(self, f: &mut F) -> Result<(), E>
    where
        F: FnMut(&[u8]) -> Result<(), E>,
    {
        if self.line.is_empty() {
            return Ok(());
        }
        f(&self.line)
    }
}

#[cfg(test)]
fn collect(input: &[u8]) -> Vec<String> {
    let mut seen = vec![];
    for_each_line::<_, io::Error, _>(input, |line| {
        seen.push(String::from_utf8_lossy(line).into_owned());
        Ok(())
    })
    .unwrap();
    seen
}

#[test]
fn test_line_endings() {
    assert_eq!(
        collect(b"one\r\ntwo\n\nthree"),
        vec!["one", "two", "", "three"]
    );
}

#[test]
fn test_lone_carriage_returns() {
    assert_eq!(collect(b"ab\rc\r"), vec!["ab", "c"]);
    assert_eq!(collect(b"x\r\ry\n"), vec!["x", "", "y"]);
    assert_eq!(collect(b"a\r\r\nb"), vec!["a", "", "b"]);
}

#[test]
fn test_pieces_across_chunks() {
    let mut seen: Vec<String> = vec![];
    let mut push = |line: &[u8]| -> Result<(), io::Error> {
        seen.push(String::from_utf8_lossy(line).into_owned());
        Ok(())
    };
    let mut splitter = Splitter::default();
    let chunks: [&[u8]; 5] = [b"ab", b"c\r", b"\nde", b"f\r", b"g"];
    for chunk in chunks {
        splitter.feed(chunk, &mut push).unwrap();
    }
    splitter.finish(&mut push).unwrap();
    assert_eq!(seen, vec!["abc", "def", "g"]);
}

#[test]
fn test_empty_input() {
    assert!(collect(b"").is_empty());
}

#[test]
fn test_stops_on_error() {
    let mut count = 0;
    let result = for_each_line(&b"a\nb\nc\n"[..], |_| {
        count += 1;
        if count == 2 {
            return Err(io::Error::new(io::ErrorKind::Other, "stop"));
        }
        Ok(())
    });
    assert!(result.is_err());
    assert_eq!(count, 2);
}
