use crate::error::{Error, ErrorKind, Result};
use crate::node::{Mapping, Node};
use crate::options::{DuplicateKeys, LoadOptions};
use std::io::Read;

#[derive(Debug)]
struct Line {
    content: String,
    indent: usize,
    number: usize,
}

// A nested mapping being built; closes under `key` in its parent.
#[derive(Debug)]
struct MapFrame {
    indent: usize,
    key: String,
    number: usize,
    map: Mapping,
}

// The open sequence, if any. Sequences hold only scalars, so at most one
// can be open at a time and it is always the innermost scope.
#[derive(Debug)]
struct SeqFrame {
    key: String,
    number: usize,
    item_indent: usize,
    items: Vec<Node>,
}

// A `key:` line whose nested scope kind is not known until the next line.
#[derive(Debug)]
struct Pending {
    indent: usize,
    key: String,
    number: usize,
}

struct LoadState {
    root: Mapping,
    frames: Vec<MapFrame>,
    seq: Option<SeqFrame>,
    pending: Option<Pending>,
    options: LoadOptions,
}

pub fn load(text: &str) -> Result<Mapping> {
    load_with_options(text, LoadOptions::default())
}

pub fn load_with_options(text: &str, options: LoadOptions) -> Result<Mapping> {
    let lines = scan_lines(text)?;
    let mut state = LoadState::new(options);
    for line in &lines {
        state.feed(line)?;
    }
    state.finish()
}

pub fn load_from_reader<R: Read>(mut rdr: R) -> Result<Mapping> {
    let mut buf = String::new();
    rdr.read_to_string(&mut buf)?;
    load(&buf)
}

impl LoadState {
    fn new(options: LoadOptions) -> Self {
        LoadState {
            root: Mapping::new(),
            frames: Vec::new(),
            seq: None,
            pending: None,
            options,
        }
    }

    fn feed(&mut self, line: &Line) -> Result<()> {
        if is_sequence_item(&line.content) {
            self.feed_sequence_item(line)
        } else {
            self.feed_key_line(line)
        }
    }

    fn finish(mut self) -> Result<Mapping> {
        self.close_seq()?;
        if let Some(pending) = self.pending.take() {
            self.insert(pending.key, Node::Mapping(Mapping::new()), pending.number)?;
        }
        while let Some(frame) = self.frames.pop() {
            self.insert(frame.key, Node::Mapping(frame.map), frame.number)?;
        }
        Ok(self.root)
    }

    fn feed_sequence_item(&mut self, line: &Line) -> Result<()> {
        let item_src = line.content.strip_prefix('-').unwrap_or(&line.content);
        let item_src = item_src.strip_prefix(' ').unwrap_or(item_src);
        let value = Node::Scalar(parse_scalar(item_src.trim(), line.number)?);

        if let Some(pending) = self.pending.take() {
            // first item fixes the sequence's column: the key's own indent
            // (our encoder, libyaml) or one level deeper
            if line.indent != pending.indent && line.indent != pending.indent + 2 {
                return Err(Error::new(
                    ErrorKind::IndentationError,
                    "sequence item does not align with its key",
                )
                .with_location(line.number, 1));
            }
            self.seq = Some(SeqFrame {
                key: pending.key,
                number: pending.number,
                item_indent: line.indent,
                items: vec![value],
            });
            return Ok(());
        }

        match self.seq.as_mut() {
            Some(seq) if seq.item_indent == line.indent => {
                seq.items.push(value);
                Ok(())
            }
            Some(_) => Err(Error::new(
                ErrorKind::IndentationError,
                "sequence item at unexpected indentation",
            )
            .with_location(line.number, 1)),
            None => Err(Error::new(
                ErrorKind::UnexpectedLine,
                "sequence item outside of a sequence",
            )
            .with_location(line.number, 1)),
        }
    }

    fn feed_key_line(&mut self, line: &Line) -> Result<()> {
        self.close_seq()?;

        if let Some(pending) = self.pending.take() {
            if line.indent == pending.indent + 2 {
                // the pending key opens a nested mapping
                self.frames.push(MapFrame {
                    indent: line.indent,
                    key: pending.key,
                    number: pending.number,
                    map: Mapping::new(),
                });
            } else if line.indent <= pending.indent {
                // nothing nested followed; the key holds an empty mapping
                self.insert(pending.key, Node::Mapping(Mapping::new()), pending.number)?;
            } else {
                return Err(Error::new(
                    ErrorKind::IndentationError,
                    "indentation does not match any open scope",
                )
                .with_location(line.number, 1));
            }
        }

        self.close_frames_to(line.indent, line.number)?;

        let (key, value) = split_key_value(&line.content, line.number)?;
        if value.is_empty() {
            self.pending = Some(Pending {
                indent: line.indent,
                key,
                number: line.number,
            });
        } else if value == "[]" {
            self.insert(key, Node::Sequence(Vec::new()), line.number)?;
        } else {
            let scalar = Node::Scalar(parse_scalar(value, line.number)?);
            self.insert(key, scalar, line.number)?;
        }
        Ok(())
    }

    fn close_seq(&mut self) -> Result<()> {
        if let Some(seq) = self.seq.take() {
            self.insert(seq.key, Node::Sequence(seq.items), seq.number)?;
        }
        Ok(())
    }

    fn close_frames_to(&mut self, indent: usize, number: usize) -> Result<()> {
        while self.frames.last().is_some_and(|f| f.indent > indent) {
            if let Some(frame) = self.frames.pop() {
                self.insert(frame.key, Node::Mapping(frame.map), frame.number)?;
            }
        }
        if self.current_indent() != indent {
            return Err(Error::new(
                ErrorKind::IndentationError,
                "indentation does not match any open scope",
            )
            .with_location(number, 1));
        }
        Ok(())
    }

    fn current_indent(&self) -> usize {
        self.frames.last().map(|f| f.indent).unwrap_or(0)
    }

    fn current_map(&mut self) -> &mut Mapping {
        match self.frames.last_mut() {
            Some(frame) => &mut frame.map,
            None => &mut self.root,
        }
    }

    fn insert(&mut self, key: String, value: Node, number: usize) -> Result<()> {
        let strict = self.options.duplicate_keys == DuplicateKeys::Error;
        let map = self.current_map();
        if strict && map.contains_key(&key) {
            return Err(Error::new(
                ErrorKind::DuplicateKey,
                format!("duplicate key: {}", key),
            )
            .with_location(number, 1));
        }
        // IndexMap keeps the original position, so last write wins in place
        map.insert(key, value);
        Ok(())
    }
}

fn scan_lines(input: &str) -> Result<Vec<Line>> {
    let mut lines = Vec::new();

    // str::lines treats \r\n as \n, so CRLF documents need no normalization
    for (idx, raw) in input.lines().enumerate() {
        let number = idx + 1;
        let indent = raw.len() - raw.trim_start_matches(' ').len();
        let content = strip_comment(&raw[indent..]).trim_end();

        if content.is_empty() || content.starts_with('#') {
            continue;
        }
        if content.starts_with('\t') {
            return Err(Error::new(
                ErrorKind::IndentationError,
                "tabs are not allowed in indentation",
            )
            .with_location(number, 1));
        }
        if indent == 0 && content == "---" {
            continue;
        }

        lines.push(Line {
            content: content.to_string(),
            indent,
            number,
        });
    }

    Ok(lines)
}

// Cuts the line at a ` #` marker outside quoted scalars. A `#` inside a
// double- or single-quoted value is literal. A quote only opens a scalar at
// a token start, so apostrophes inside bare scalars stay literal too.
fn strip_comment(content: &str) -> &str {
    let bytes = content.as_bytes();
    let mut in_double = false;
    let mut in_single = false;
    let mut i = 0;

    while i < bytes.len() {
        let b = bytes[i];
        if in_double {
            match b {
                b'\\' => i += 1,
                b'"' => in_double = false,
                _ => {}
            }
        } else if in_single {
            if b == b'\'' {
                if i + 1 < bytes.len() && bytes[i + 1] == b'\'' {
                    // '' is an escaped quote, not the end
                    i += 1;
                } else {
                    in_single = false;
                }
            }
        } else {
            match b {
                b'"' if i == 0 || bytes[i - 1] == b' ' => in_double = true,
                b'\'' if i == 0 || bytes[i - 1] == b' ' => in_single = true,
                b'#' if i > 0 && bytes[i - 1] == b' ' => return &content[..i],
                _ => {}
            }
        }
        i += 1;
    }

    content
}

fn is_sequence_item(content: &str) -> bool {
    content == "-" || content.starts_with("- ")
}

// Splits a key line on the first `: ` (or a trailing bare `:`), never on
// every colon, so URL-like keys keep their embedded colons. A quoted key is
// skipped over first so its inner colons cannot match.
fn split_key_value(content: &str, number: usize) -> Result<(String, &str)> {
    let sep = find_separator(content, number)?;
    let key_token = content[..sep].trim_end();
    if key_token.is_empty() {
        return Err(Error::new(ErrorKind::UnexpectedLine, "missing key before colon")
            .with_location(number, 1));
    }
    let key = parse_scalar(key_token, number)?;
    let value = content[sep + 1..].trim();
    Ok((key, value))
}

fn find_separator(content: &str, number: usize) -> Result<usize> {
    let start = match content.chars().next() {
        Some(quote @ ('"' | '\'')) => {
            let close = closing_quote(content, quote).ok_or_else(|| {
                Error::new(ErrorKind::UnterminatedString, "unterminated quoted key")
                    .with_location(number, 1)
            })?;
            close + 1
        }
        _ => 0,
    };

    let bytes = content.as_bytes();
    for i in start..bytes.len() {
        if bytes[i] == b':' && (i + 1 == bytes.len() || bytes[i + 1] == b' ') {
            return Ok(i);
        }
    }

    Err(Error::new(
        ErrorKind::UnexpectedLine,
        "expected a `key: value`, `key:` or `- value` line",
    )
    .with_location(number, 1))
}

// Byte offset of the quote closing a scalar that starts at offset 0.
// Honors backslash escapes in double quotes and `''` pairs in single quotes.
fn closing_quote(content: &str, quote: char) -> Option<usize> {
    let bytes = content.as_bytes();
    let q = quote as u8;
    let mut i = 1;

    while i < bytes.len() {
        if bytes[i] == b'\\' && quote == '"' {
            i += 2;
            continue;
        }
        if bytes[i] == q {
            if quote == '\'' && i + 1 < bytes.len() && bytes[i + 1] == q {
                i += 2;
                continue;
            }
            return Some(i);
        }
        i += 1;
    }

    None
}

// A double-quoted token is unescaped, a single-quoted token unfolds `''`,
// and a bare token is taken verbatim.
fn parse_scalar(text: &str, number: usize) -> Result<String> {
    if text.len() >= 2 && text.starts_with('"') && text.ends_with('"') {
        return unescape_double(&text[1..text.len() - 1], number);
    }
    if text.len() >= 2 && text.starts_with('\'') && text.ends_with('\'') {
        return Ok(text[1..text.len() - 1].replace("''", "'"));
    }
    if text.starts_with('"') || text.starts_with('\'') {
        return Err(Error::new(
            ErrorKind::UnterminatedString,
            "scalar starting with a quote must end with the same quote",
        )
        .with_location(number, 1));
    }
    Ok(text.to_string())
}

fn unescape_double(s: &str, number: usize) -> Result<String> {
    let mut result = String::with_capacity(s.len());
    let mut chars = s.chars();

    while let Some(ch) = chars.next() {
        if ch != '\\' {
            result.push(ch);
            continue;
        }
        match chars.next() {
            Some('\\') => result.push('\\'),
            Some('"') => result.push('"'),
            Some('n') => result.push('\n'),
            Some('r') => result.push('\r'),
            Some('t') => result.push('\t'),
            Some(other) => {
                return Err(Error::new(
                    ErrorKind::InvalidEscape,
                    format!("invalid escape sequence: \\{}", other),
                )
                .with_location(number, 1));
            }
            None => {
                return Err(Error::new(
                    ErrorKind::UnterminatedString,
                    "backslash at end of string",
                )
                .with_location(number, 1));
            }
        }
    }

    Ok(result)
}
