//! Init-string parsing.
//!
//! An init string is a whitespace-separated list of capability names, matched
//! case-insensitively against [`crate::capability::CAPABILITIES`]:
//!
//! ```
//! use gate::{options, InitFlags};
//!
//! assert_eq!(options::parse("Video audio"), InitFlags::VIDEO | InitFlags::AUDIO);
//! assert_eq!(options::parse(""), InitFlags::empty());
//! ```
//!
//! Unknown names never fail the parse. [`parse`] logs a warning for each one and
//! keeps going; [`parse_detailed`] hands them back to the caller instead.

use crate::capability::{self, InitFlags};

/// Result of [`parse_detailed`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParsedOptions<'a> {
    /// Union of every recognized token's flags.
    pub flags: InitFlags,
    /// Unrecognized tokens, in input order, as written.
    pub unknown: Vec<&'a str>,
}

/// Parse an init string without emitting diagnostics.
pub fn parse_detailed(text: &str) -> ParsedOptions<'_> {
    let mut parsed = ParsedOptions::default();

    for token in text.split_whitespace() {
        match capability::lookup(&token.to_ascii_lowercase()) {
            Some(flags) => parsed.flags |= flags,
            None => parsed.unknown.push(token),
        }
    }

    parsed
}

/// Parse an init string into subsystem flags, warning about unknown tokens.
pub fn parse(text: &str) -> InitFlags {
    let parsed = parse_detailed(text);
    for token in &parsed.unknown {
        log::warn!("ignoring unknown init option `{token}`");
    }
    parsed.flags
}
