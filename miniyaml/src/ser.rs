use crate::error::{Error, ErrorKind, Result};
use crate::node::{Mapping, Node};
use std::io::Write;

pub struct Encoder<W> {
    writer: W,
}

impl<W: Write> Encoder<W> {
    pub fn new(writer: W) -> Self {
        Encoder { writer }
    }

    pub fn encode_document(&mut self, root: &Node) -> Result<()> {
        let map = match root {
            Node::Mapping(map) => map,
            _ => {
                return Err(Error::new(
                    ErrorKind::InvalidInput,
                    "top-level value must be a mapping",
                ));
            }
        };
        writeln!(self.writer, "---")?;
        self.encode_mapping(map, 0)
    }

    fn encode_mapping(&mut self, map: &Mapping, depth: usize) -> Result<()> {
        let indent = "  ".repeat(depth);

        for (key, value) in map {
            match value {
                Node::Scalar(s) => {
                    writeln!(self.writer, "{}{}: {}", indent, key, quote_scalar(s)?)?;
                }
                Node::Mapping(nested) => {
                    writeln!(self.writer, "{}{}:", indent, key)?;
                    self.encode_mapping(nested, depth + 1)?;
                }
                Node::Sequence(items) if items.is_empty() => {
                    writeln!(self.writer, "{}{}: []", indent, key)?;
                }
                Node::Sequence(items) => {
                    writeln!(self.writer, "{}{}:", indent, key)?;
                    // dash markers sit at the key's own indentation level
                    for item in items {
                        match item {
                            Node::Scalar(s) => {
                                writeln!(self.writer, "{}- {}", indent, quote_scalar(s)?)?;
                            }
                            _ => {
                                return Err(Error::new(
                                    ErrorKind::InvalidInput,
                                    "sequence elements must be scalars",
                                ));
                            }
                        }
                    }
                }
            }
        }

        Ok(())
    }
}

fn quote_scalar(s: &str) -> Result<String> {
    let mut result = String::with_capacity(s.len() + 2);
    result.push('"');
    for ch in s.chars() {
        match ch {
            '\\' => result.push_str("\\\\"),
            '"' => result.push_str("\\\""),
            '\n' => result.push_str("\\n"),
            '\r' => result.push_str("\\r"),
            '\t' => result.push_str("\\t"),
            c if c.is_control() => {
                return Err(Error::new(
                    ErrorKind::Encoding,
                    format!("unrepresentable control character U+{:04X}", c as u32),
                ));
            }
            c => result.push(c),
        }
    }
    result.push('"');
    Ok(result)
}

/// Serializes a settings mapping to canonical YAML text.
///
/// The root must be [`Node::Mapping`]; anything else is rejected with
/// [`ErrorKind::InvalidInput`]. Output starts with a `---` document marker,
/// keys are emitted bare, and every scalar value is double-quoted.
///
/// # Examples
///
/// ```
/// use miniyaml::{dump, Mapping, Node};
///
/// let mut settings = Mapping::new();
/// settings.insert("retries".to_string(), Node::from("3"));
/// settings.insert("plugins".to_string(), Node::Sequence(Vec::new()));
///
/// let yaml = dump(&Node::Mapping(settings)).unwrap();
/// assert_eq!(yaml, "---\nretries: \"3\"\nplugins: []\n");
/// ```
pub fn dump(root: &Node) -> Result<String> {
    let mut buf = Vec::new();
    dump_to_writer(&mut buf, root)?;
    String::from_utf8(buf).map_err(|e| Error::custom(e.to_string()))
}

/// Serializes a settings mapping as YAML text into the given writer.
///
/// # Examples
///
/// ```
/// use miniyaml::{dump_to_writer, Mapping, Node};
/// use std::io::Cursor;
///
/// let mut settings = Mapping::new();
/// settings.insert("path".to_string(), Node::from("/tmp/cache"));
///
/// let mut buffer = Cursor::new(Vec::new());
/// dump_to_writer(&mut buffer, &Node::Mapping(settings)).unwrap();
///
/// let yaml = String::from_utf8(buffer.into_inner()).unwrap();
/// assert_eq!(yaml, "---\npath: \"/tmp/cache\"\n");
/// ```
pub fn dump_to_writer<W: Write>(writer: W, root: &Node) -> Result<()> {
    let mut encoder = Encoder::new(writer);
    encoder.encode_document(root)
}
