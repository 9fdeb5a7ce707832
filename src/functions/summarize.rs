//! Prefix list summarization text function.

use super::parse::{parse_address_or_prefix, AddressOrPrefix};
use crate::models::Prefix;
use crate::processing;
use itertools::Itertools;
use std::error::Error;

/// Summarize addresses and prefixes into the shortest prefix list.
///
/// Bare addresses count as host prefixes. Any unparsable entry fails the
/// whole call.
pub fn summarize<S: AsRef<str>>(inputs: &[S]) -> Result<Vec<String>, Box<dyn Error>> {
    let prefixes: Vec<Prefix> = inputs
        .iter()
        .map(|item| -> Result<Prefix, Box<dyn Error>> {
            Ok(match parse_address_or_prefix(item.as_ref())? {
                AddressOrPrefix::Address(addr) => Prefix::single(addr),
                AddressOrPrefix::Prefix(prefix) => prefix,
            })
        })
        .collect::<Result<_, _>>()?;
    log::debug!("summarize([{}])", prefixes.iter().join(", "));

    let output: Vec<String> = processing::summarize(&prefixes)
        .iter()
        .map(Prefix::to_string)
        .collect();
    log::debug!("summarize: {} prefixes -> {}", prefixes.len(), output.len());
    Ok(output)
}
