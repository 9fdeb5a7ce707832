//! Address-space classification text functions.
//!
//! Each function accepts either a bare address or `addr/len`. A prefix is
//! private only if every address in it is; it is public only if none is
//! reserved.

use super::parse::{parse_address_or_prefix, AddressOrPrefix};
use crate::models::{Address, Prefix};
use crate::processing::classify::{self, Range, Registry};
use std::error::Error;

#[derive(Debug, Copy, Clone)]
enum Check {
    Private,
    Public,
    /// Private, and reserved by this registry.
    Registry(Registry),
}

impl Check {
    /// The range this check consults for `addr`, if any.
    fn range_of(self, addr: &Address) -> Option<&'static Range> {
        match self {
            Check::Private => classify::private_range_of(addr),
            Check::Public => classify::non_public_range_of(addr),
            Check::Registry(registry) => {
                classify::private_range_of(addr).filter(|range| range.registry == registry)
            }
        }
    }

    fn on_address(self, addr: &Address) -> bool {
        match self {
            Check::Private => classify::is_private(addr),
            Check::Public => classify::is_public(addr),
            Check::Registry(registry) => classify::is_private_registry(registry, addr),
        }
    }

    fn on_prefix(self, prefix: &Prefix) -> bool {
        match self {
            Check::Private => classify::is_private_prefix(prefix),
            Check::Public => classify::is_public_prefix(prefix),
            Check::Registry(registry) => classify::is_private_registry_prefix(registry, prefix),
        }
    }

    /// Parse `input` and run the address or prefix variant.
    fn run(self, name: &str, input: &str) -> Result<bool, Box<dyn Error>> {
        let result = match parse_address_or_prefix(input)? {
            AddressOrPrefix::Address(addr) => {
                if let Some(range) = self.range_of(&addr) {
                    log::trace!(
                        "{addr} is in {} ({:?}, {})",
                        range.prefix,
                        range.registry,
                        range.rationale
                    );
                }
                self.on_address(&addr)
            }
            AddressOrPrefix::Prefix(prefix) => self.on_prefix(&prefix),
        };
        log::debug!("{name}({input:?}) = {result}");
        Ok(result)
    }
}

pub fn is_private(input: &str) -> Result<bool, Box<dyn Error>> {
    Check::Private.run("is_private", input)
}

pub fn is_public(input: &str) -> Result<bool, Box<dyn Error>> {
    Check::Public.run("is_public", input)
}

pub fn is_private_rfc1918(input: &str) -> Result<bool, Box<dyn Error>> {
    Check::Registry(Registry::Rfc1918).run("is_private_rfc1918", input)
}

pub fn is_private_rfc4193(input: &str) -> Result<bool, Box<dyn Error>> {
    Check::Registry(Registry::Rfc4193).run("is_private_rfc4193", input)
}

pub fn is_private_rfc6598(input: &str) -> Result<bool, Box<dyn Error>> {
    Check::Registry(Registry::Rfc6598).run("is_private_rfc6598", input)
}
