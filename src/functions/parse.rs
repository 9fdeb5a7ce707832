//! Text to model parsing shared by the text functions.

use crate::models::{Address, Prefix};
use std::error::Error;

/// Parsed argument that may carry a prefix length.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum AddressOrPrefix {
    Address(Address),
    Prefix(Prefix),
}

impl AddressOrPrefix {
    pub fn addr(&self) -> Address {
        match self {
            AddressOrPrefix::Address(addr) => *addr,
            AddressOrPrefix::Prefix(prefix) => prefix.addr(),
        }
    }
}

/// Drop a trailing `/len`.
pub fn strip_mask(input: &str) -> &str {
    input.split_once('/').map_or(input, |(addr, _)| addr)
}

/// Drop a trailing `%zone`.
pub fn strip_zone(input: &str) -> &str {
    input.split_once('%').map_or(input, |(addr, _)| addr)
}

/// Parse a bare address, ignoring any `%zone`; `what` names the argument
/// in the error.
pub fn parse_address(input: &str, what: &str) -> Result<Address, Box<dyn Error>> {
    strip_zone(input)
        .parse()
        .map_err(|e| format!("Invalid {what}: unable to parse address input: {e}").into())
}

/// Parse `addr/len`; `what` names the argument in the error.
pub fn parse_prefix(input: &str, what: &str) -> Result<Prefix, Box<dyn Error>> {
    input
        .parse()
        .map_err(|e| format!("Invalid {what}: unable to parse prefix input: {e}").into())
}

/// Parse a prefix when the input contains a slash, otherwise an address.
pub fn parse_address_or_prefix(input: &str) -> Result<AddressOrPrefix, Box<dyn Error>> {
    if input.contains('/') {
        Ok(AddressOrPrefix::Prefix(parse_prefix(input, "CIDR address")?))
    } else {
        Ok(AddressOrPrefix::Address(parse_address(input, "address")?))
    }
}

/// Parse an IPv6 address or prefix; a bare address gets `default_bits`.
pub fn parse_v6_prefix(
    input: &str,
    what: &str,
    default_bits: u8,
) -> Result<Prefix, Box<dyn Error>> {
    let (addr, bits) = if input.contains('/') {
        let prefix = parse_prefix(input, what)?;
        (prefix.addr(), prefix.bits())
    } else {
        (parse_address(input, what)?, default_bits)
    };
    if !addr.is_v6() {
        return Err(format!("Invalid {what}: must be an IPv6 address").into());
    }
    Prefix::new(addr, bits)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip() {
        assert_eq!(strip_mask("10.0.0.1/8"), "10.0.0.1");
        assert_eq!(strip_mask("10.0.0.1"), "10.0.0.1");
        assert_eq!(strip_zone("fe80::1%eth0"), "fe80::1");
        assert_eq!(strip_zone(strip_mask("fe80::1%eth0/64")), "fe80::1");
    }

    #[test]
    fn test_parse_address_error_names_argument() {
        let err = parse_address("nope", "prefix").unwrap_err();
        assert!(err.to_string().starts_with("Invalid prefix:"), "{err}");
        assert_eq!(
            parse_address("fe80::1%eth0", "address").unwrap(),
            "fe80::1".parse::<Address>().unwrap()
        );
    }

    #[test]
    fn test_parse_address_or_prefix() {
        assert!(matches!(
            parse_address_or_prefix("10.0.0.0/8").unwrap(),
            AddressOrPrefix::Prefix(_)
        ));
        assert!(matches!(
            parse_address_or_prefix("10.0.0.1").unwrap(),
            AddressOrPrefix::Address(_)
        ));
        let err = parse_address_or_prefix("10.0.0.0/33").unwrap_err();
        assert!(err.to_string().contains("Invalid CIDR address"), "{err}");
        let err = parse_address_or_prefix("10.0.0").unwrap_err();
        assert!(err.to_string().contains("Invalid address"), "{err}");
    }

    #[test]
    fn test_parse_v6_prefix() {
        let p = parse_v6_prefix("64:ff9b::", "prefix", 96).unwrap();
        assert_eq!(p.bits(), 96);
        let p = parse_v6_prefix("2001:db8::/32", "prefix", 96).unwrap();
        assert_eq!(p.bits(), 32);
        assert!(parse_v6_prefix("10.0.0.0/8", "prefix", 96).is_err());
        assert!(parse_v6_prefix("10.0.0.1", "prefix", 96).is_err());
        assert!(parse_v6_prefix("", "prefix", 96).is_err());
    }
}
