//! Shared test helpers: a capturing sink and a quote-aware line tokenizer.

use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use kvlog::Logger;

/// Sink that records each write as one captured line.
#[derive(Clone, Default)]
pub struct CaptureSink {
    lines: Arc<Mutex<Vec<String>>>,
}

impl CaptureSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().unwrap().clone()
    }
}

impl Write for CaptureSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.lines
            .lock()
            .unwrap()
            .push(String::from_utf8_lossy(buf).into_owned());
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// A logger capturing whole lines for assertions.
#[allow(dead_code)]
pub fn capture_logger() -> (Logger, CaptureSink) {
    let sink = CaptureSink::new();
    (Logger::new(Box::new(sink.clone())), sink)
}

/// Split an emitted line into (key, value) tokens, honoring quoted spans and
/// undoing the value escaping.
#[allow(dead_code)]
pub fn tokenize(line: &str) -> Vec<(String, String)> {
    const DELIMS: &[char] = &[' ', ',', ';', '|', '&', '\t', '\n', '\r'];

    let mut tokens = Vec::new();
    let mut chars = line.chars().peekable();

    while let Some(&c) = chars.peek() {
        if DELIMS.contains(&c) {
            chars.next();
            continue;
        }

        let mut key = String::new();
        while let Some(&c) = chars.peek() {
            if c == '=' {
                break;
            }
            key.push(c);
            chars.next();
        }
        assert_eq!(chars.next(), Some('='), "token without '=' in {:?}", line);

        let mut value = String::new();
        if chars.peek() == Some(&'"') {
            chars.next();
            loop {
                match chars.next() {
                    Some('\\') => match chars.next() {
                        Some('"') => value.push('"'),
                        Some('\\') => value.push('\\'),
                        Some('n') => value.push('\n'),
                        Some('t') => value.push('\t'),
                        Some('r') => value.push('\r'),
                        other => panic!("unsupported escape {:?} in {:?}", other, line),
                    },
                    Some('"') => break,
                    Some(c) => value.push(c),
                    None => panic!("unterminated quote in {:?}", line),
                }
            }
        } else {
            while let Some(&c) = chars.peek() {
                if DELIMS.contains(&c) {
                    break;
                }
                value.push(c);
                chars.next();
            }
        }

        tokens.push((key, value));
    }

    tokens
}
