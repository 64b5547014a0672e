//! Parsing of the comma-separated initial memory argument

use crate::error::{CliError, CliResult};
use core_types::Word;
use regex::Regex;

/// Grammar of a single memory element
const ELEMENT_PATTERN: &str = r"^-?[0-9]+$";

/// Parse `"105,13,-98"` into words.
///
/// Every element must be an optional minus sign followed by digits and fit
/// in a [`Word`]. Whitespace, empty elements and `+` signs are rejected.
///
/// ```
/// use hvm_cli::parse_memory_list;
///
/// assert_eq!(parse_memory_list("105,13,-98").unwrap(), vec![105, 13, -98]);
/// assert!(parse_memory_list("1,,2").is_err());
/// ```
pub fn parse_memory_list(text: &str) -> CliResult<Vec<Word>> {
    let element = Regex::new(ELEMENT_PATTERN)?;

    text.split(',')
        .map(|item| {
            let malformed = || CliError::MalformedMemory {
                element: item.to_string(),
            };
            if !element.is_match(item) {
                return Err(malformed());
            }
            item.parse::<Word>().map_err(|_| malformed())
        })
        .collect()
}
