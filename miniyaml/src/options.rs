//! Configuration options for decoding.

/// Options for controlling decoding behavior.
///
/// The encoder takes no options: the output format is canonical, so encoding
/// the same tree twice always yields byte-identical text.
///
/// # Examples
///
/// ```
/// use miniyaml::{DuplicateKeys, LoadOptions};
///
/// let opts = LoadOptions {
///     duplicate_keys: DuplicateKeys::Error,
/// };
/// ```
#[derive(Debug, Clone, Default)]
pub struct LoadOptions {
    /// How to treat a key re-declared within the same mapping block.
    ///
    /// Default: [`DuplicateKeys::Overwrite`]
    pub duplicate_keys: DuplicateKeys,
}

/// Behavior for a key re-declared within one mapping block.
///
/// # Examples
///
/// ```
/// use miniyaml::{load_with_options, DuplicateKeys, LoadOptions};
///
/// let doc = "retries: \"2\"\nretries: \"5\"\n";
///
/// // Default: the last value wins
/// let map = load_with_options(doc, LoadOptions::default()).unwrap();
/// assert_eq!(map["retries"].as_str(), Some("5"));
///
/// // Strict: duplicates are rejected
/// let opts = LoadOptions {
///     duplicate_keys: DuplicateKeys::Error,
/// };
/// assert!(load_with_options(doc, opts).is_err());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DuplicateKeys {
    /// Keep the value seen last, at the key's original position (default).
    #[default]
    Overwrite,
    /// Fail the whole load with [`ErrorKind::DuplicateKey`].
    ///
    /// [`ErrorKind::DuplicateKey`]: crate::error::ErrorKind::DuplicateKey
    Error,
}
