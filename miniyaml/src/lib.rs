//! Minimal block-style YAML serializer and deserializer for string settings.
//!
//! This crate round-trips the constrained document shapes a configuration
//! layer produces: mappings of string keys to strings, nested mappings, and
//! sequences of strings. It is not a general YAML implementation; it reads
//! its own canonical output plus the equivalent block-style documents a
//! conformant YAML 1.1 writer emits for the same shapes, while tolerating
//! real-world quirks such as trailing comments, keys containing colons, and
//! Windows line endings.
//!
//! # Features
//!
//! - **Canonical output**: encoding the same tree twice yields byte-identical
//!   text, so settings files diff cleanly
//! - **Bare keys, quoted values**: keys are emitted untouched (even with
//!   embedded colons or slashes), values are always double-quoted
//! - **Ordered mappings**: key order is preserved on both encode and decode
//! - **Comment tolerance**: trailing ` #` comments are stripped on load
//!
//! # Usage
//!
//! ## Encoding
//!
//! ```
//! use miniyaml::{dump, Mapping, Node};
//!
//! let mut settings = Mapping::new();
//! settings.insert("retries".to_string(), Node::from("3"));
//! settings.insert("plugins".to_string(), Node::Sequence(Vec::new()));
//!
//! let yaml = dump(&Node::Mapping(settings)).unwrap();
//! assert_eq!(yaml, "---\nretries: \"3\"\nplugins: []\n");
//! ```
//!
//! ## Decoding
//!
//! ```
//! use miniyaml::load;
//!
//! let doc = "---\nmirror.https://rubygems.org/: \"http://localhost:9292\"\n";
//! let settings = load(doc).unwrap();
//!
//! assert_eq!(
//!     settings["mirror.https://rubygems.org/"].as_str(),
//!     Some("http://localhost:9292")
//! );
//! ```
//!
//! ## Round-tripping
//!
//! ```
//! use miniyaml::{dump, load, Mapping, Node};
//!
//! let mut settings = Mapping::new();
//! settings.insert("sources".to_string(), Node::from(vec!["a", "b"]));
//!
//! let yaml = dump(&Node::Mapping(settings.clone())).unwrap();
//! assert_eq!(load(&yaml).unwrap(), settings);
//! ```
//!
//! # Format Examples
//!
//! ```text
//! ---
//! ignore_messages: "true"
//! mirror.https://rubygems.org/: "http://localhost:9292"
//! build:
//!   nokogiri: "--use-system-libraries"
//! plugins: []
//! sources:
//! - "https://rubygems.org/"
//! ```
//!
//! Every value is a string; there are no numeric, boolean, or null scalars.
//! Sequence dashes sit at the same column as their key, and an empty
//! sequence is written inline as `key: []`.
//!
//! # Error Handling
//!
//! A malformed document fails the whole `load` call rather than producing a
//! partial tree:
//!
//! ```
//! use miniyaml::load;
//!
//! let result = load("not a settings document");
//!
//! // Error includes line information
//! assert!(result.is_err());
//! ```

pub mod de;
pub mod error;
pub mod node;
pub mod options;
pub mod ser;

pub use de::{load, load_from_reader, load_with_options};
pub use error::{Error, Result};
pub use node::{Mapping, Node};
pub use options::{DuplicateKeys, LoadOptions};
pub use ser::{dump, dump_to_writer};
