//! Private and public address-space classification.
//!
//! Two constant range tables drive every check:
//! - [`PRIVATE_RANGES`] - internally routable blocks
//! - [`NON_PUBLIC_RANGES`] - everything that is not globally reachable
//!
//! IPv4-mapped IPv6 input (`::ffff:a.b.c.d`) is classified by its embedded
//! IPv4 address. A mapped prefix shorter than /96 reaches outside
//! `::ffff:0:0/96` and is never private or public.

use crate::models::{Address, Prefix, V4_BITS, V6_BITS};
use serde::Serialize;

/// Registry that reserves a range.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
pub enum Registry {
    Rfc791,
    Rfc1112,
    Rfc1122,
    Rfc1918,
    Rfc2544,
    Rfc3849,
    Rfc3927,
    Rfc4193,
    Rfc4291,
    Rfc5180,
    Rfc5737,
    Rfc6598,
    Rfc6666,
    Rfc6890,
    Rfc8215,
    Rfc9602,
    Rfc9637,
}

/// A reserved block and why it is reserved.
#[derive(Debug, Copy, Clone, Serialize)]
pub struct Range {
    pub prefix: Prefix,
    pub registry: Registry,
    pub rationale: &'static str,
}

const fn v4(octets: [u8; 4], bits: u8, registry: Registry, rationale: &'static str) -> Range {
    Range {
        prefix: Prefix::from_parts(Address::V4(octets), bits),
        registry,
        rationale,
    }
}

const fn v6(head: [u8; 6], bits: u8, registry: Registry, rationale: &'static str) -> Range {
    let mut octets = [0u8; 16];
    let mut i = 0;
    while i < head.len() {
        octets[i] = head[i];
        i += 1;
    }
    Range {
        prefix: Prefix::from_parts(Address::V6(octets), bits),
        registry,
        rationale,
    }
}

/// Internally routable ranges.
pub static PRIVATE_RANGES: [Range; 10] = [
    v4([10, 0, 0, 0], 8, Registry::Rfc1918, "Private-Use"),
    v4([100, 64, 0, 0], 10, Registry::Rfc6598, "Shared Address Space"),
    v4([172, 16, 0, 0], 12, Registry::Rfc1918, "Private-Use"),
    v4([192, 168, 0, 0], 16, Registry::Rfc1918, "Private-Use"),
    v4([198, 18, 0, 0], 15, Registry::Rfc2544, "Benchmarking"),
    v6([0x01, 0x00, 0, 0, 0, 0], 64, Registry::Rfc6666, "Discard-Only"),
    v6(
        [0x00, 0x64, 0xff, 0x9b, 0x00, 0x01],
        48,
        Registry::Rfc8215,
        "Local-Use IPv4/IPv6 Translation",
    ),
    v6([0x5f, 0x00, 0, 0, 0, 0], 16, Registry::Rfc9602, "Segment Routing (SRv6) SIDs"),
    v6([0x20, 0x01, 0x00, 0x02, 0x00, 0x00], 48, Registry::Rfc5180, "Benchmarking"),
    v6([0xfc, 0x00, 0, 0, 0, 0], 7, Registry::Rfc4193, "Unique-Local"),
];

/// Ranges that are not globally reachable.
pub static NON_PUBLIC_RANGES: [Range; 25] = [
    v4([0, 0, 0, 0], 8, Registry::Rfc791, "This network"),
    v4([10, 0, 0, 0], 8, Registry::Rfc1918, "Private-Use"),
    v4([100, 64, 0, 0], 10, Registry::Rfc6598, "Shared Address Space"),
    v4([127, 0, 0, 0], 8, Registry::Rfc1122, "Loopback"),
    v4([169, 254, 0, 0], 16, Registry::Rfc3927, "Link-Local"),
    v4([172, 16, 0, 0], 12, Registry::Rfc1918, "Private-Use"),
    v4([192, 0, 0, 0], 24, Registry::Rfc6890, "IETF Protocol Assignments"),
    v4([192, 0, 2, 0], 24, Registry::Rfc5737, "Documentation (TEST-NET-1)"),
    v4([192, 168, 0, 0], 16, Registry::Rfc1918, "Private-Use"),
    v4([198, 18, 0, 0], 15, Registry::Rfc2544, "Benchmarking"),
    v4([198, 51, 100, 0], 24, Registry::Rfc5737, "Documentation (TEST-NET-2)"),
    v4([203, 0, 113, 0], 24, Registry::Rfc5737, "Documentation (TEST-NET-3)"),
    v4([224, 0, 0, 0], 4, Registry::Rfc1112, "Multicast"),
    v4([240, 0, 0, 0], 4, Registry::Rfc1112, "Reserved, includes broadcast"),
    Range {
        prefix: Prefix::from_parts(Address::V6([0; 16]), V6_BITS),
        registry: Registry::Rfc4291,
        rationale: "Unspecified Address",
    },
    Range {
        prefix: Prefix::from_parts(
            Address::V6([0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1]),
            V6_BITS,
        ),
        registry: Registry::Rfc4291,
        rationale: "Loopback Address",
    },
    v6(
        [0x00, 0x64, 0xff, 0x9b, 0x00, 0x01],
        48,
        Registry::Rfc8215,
        "Local-Use IPv4/IPv6 Translation",
    ),
    v6([0x01, 0x00, 0, 0, 0, 0], 64, Registry::Rfc6666, "Discard-Only"),
    v6([0x20, 0x01, 0x00, 0x02, 0x00, 0x00], 48, Registry::Rfc5180, "Benchmarking"),
    v6([0x20, 0x01, 0x0d, 0xb8, 0, 0], 32, Registry::Rfc3849, "Documentation"),
    v6([0x3f, 0xff, 0, 0, 0, 0], 20, Registry::Rfc9637, "Documentation"),
    v6([0x5f, 0x00, 0, 0, 0, 0], 16, Registry::Rfc9602, "Segment Routing (SRv6) SIDs"),
    v6([0xfc, 0x00, 0, 0, 0, 0], 7, Registry::Rfc4193, "Unique-Local"),
    v6([0xfe, 0x80, 0, 0, 0, 0], 10, Registry::Rfc4291, "Link-Local Unicast"),
    v6([0xff, 0x00, 0, 0, 0, 0], 8, Registry::Rfc4291, "Multicast"),
];

/// Rewrite an IPv4-mapped prefix as the IPv4 prefix it embeds.
///
/// Returns `None` for a mapped prefix shorter than /96.
fn unmap_prefix(prefix: &Prefix) -> Option<Prefix> {
    let addr = prefix.addr();
    if !addr.is_v4_in_v6() {
        return Some(*prefix);
    }
    let bits = prefix.bits().checked_sub(V6_BITS - V4_BITS)?;
    Prefix::new(addr.unmap(), bits).ok()
}

fn range_containing(ranges: &'static [Range], addr: &Address) -> Option<&'static Range> {
    let addr = addr.unmap();
    ranges.iter().find(|range| range.prefix.contains(&addr))
}

/// Strict containment: the whole prefix lies inside one range.
fn range_holding(ranges: &'static [Range], prefix: &Prefix) -> Option<&'static Range> {
    let prefix = unmap_prefix(prefix)?;
    ranges
        .iter()
        .find(|range| range.prefix.contains_prefix(&prefix))
}

/// Private range holding `addr`, if any.
pub fn private_range_of(addr: &Address) -> Option<&'static Range> {
    range_containing(&PRIVATE_RANGES, addr)
}

/// Non-public range holding `addr`, if any.
pub fn non_public_range_of(addr: &Address) -> Option<&'static Range> {
    range_containing(&NON_PUBLIC_RANGES, addr)
}

pub fn is_private(addr: &Address) -> bool {
    private_range_of(addr).is_some()
}

/// True only if every address of the prefix is private.
pub fn is_private_prefix(prefix: &Prefix) -> bool {
    range_holding(&PRIVATE_RANGES, prefix).is_some()
}

pub fn is_public(addr: &Address) -> bool {
    non_public_range_of(addr).is_none()
}

/// True only if no address of the prefix falls in a non-public range.
pub fn is_public_prefix(prefix: &Prefix) -> bool {
    match unmap_prefix(prefix) {
        Some(prefix) => !NON_PUBLIC_RANGES
            .iter()
            .any(|range| range.prefix.overlaps(&prefix)),
        None => false,
    }
}

/// Private, and reserved by `registry`.
pub fn is_private_registry(registry: Registry, addr: &Address) -> bool {
    private_range_of(addr).is_some_and(|range| range.registry == registry)
}

/// Every address of the prefix is private and reserved by `registry`.
pub fn is_private_registry_prefix(registry: Registry, prefix: &Prefix) -> bool {
    range_holding(&PRIVATE_RANGES, prefix).is_some_and(|range| range.registry == registry)
}

/// `10.0.0.0/8`, `172.16.0.0/12` or `192.168.0.0/16`.
pub fn is_private_rfc1918(addr: &Address) -> bool {
    is_private_registry(Registry::Rfc1918, addr)
}

pub fn is_private_rfc1918_prefix(prefix: &Prefix) -> bool {
    is_private_registry_prefix(Registry::Rfc1918, prefix)
}

/// Unique local addresses, `fc00::/7`.
pub fn is_private_rfc4193(addr: &Address) -> bool {
    is_private_registry(Registry::Rfc4193, addr)
}

pub fn is_private_rfc4193_prefix(prefix: &Prefix) -> bool {
    is_private_registry_prefix(Registry::Rfc4193, prefix)
}

/// Shared address space, `100.64.0.0/10`.
pub fn is_private_rfc6598(addr: &Address) -> bool {
    is_private_registry(Registry::Rfc6598, addr)
}

pub fn is_private_rfc6598_prefix(prefix: &Prefix) -> bool {
    is_private_registry_prefix(Registry::Rfc6598, prefix)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn addr(s: &str) -> Address {
        s.parse().unwrap()
    }

    fn prefix(s: &str) -> Prefix {
        s.parse().unwrap()
    }

    #[test]
    fn test_tables_are_masked() {
        for range in PRIVATE_RANGES.iter().chain(NON_PUBLIC_RANGES.iter()) {
            assert_eq!(
                range.prefix.addr(),
                range.prefix.masked().addr(),
                "{}",
                range.prefix
            );
            assert!(range.prefix.bits() <= range.prefix.addr().bit_len());
        }
    }

    #[test]
    fn test_private_ranges_are_not_public() {
        for range in PRIVATE_RANGES.iter() {
            assert!(!is_public(&range.prefix.addr()), "{}", range.prefix);
            assert!(!is_public_prefix(&range.prefix), "{}", range.prefix);
        }
    }

    #[test]
    fn test_is_private_address() {
        for s in [
            "10.0.0.1",
            "10.255.255.255",
            "100.64.0.1",
            "100.127.255.255",
            "172.16.0.1",
            "172.31.255.255",
            "192.168.1.1",
            "198.18.0.1",
            "198.19.255.255",
            "100::1",
            "64:ff9b:1::1",
            "5f00::1",
            "2001:2::1",
            "fc00::1",
            "fd12:3456:789a::1",
            "::ffff:10.0.0.1",
        ] {
            assert!(is_private(&addr(s)), "{s}");
        }
        for s in [
            "8.8.8.8",
            "100.63.255.255",
            "100.128.0.0",
            "172.15.255.255",
            "172.32.0.0",
            "192.169.0.0",
            "198.20.0.0",
            "127.0.0.1",
            "2001:db8::1",
            "fe80::1",
            "64:ff9b::1",
            "::ffff:8.8.8.8",
            "::10.0.0.1",
        ] {
            assert!(!is_private(&addr(s)), "{s}");
        }
    }

    #[test]
    fn test_is_private_prefix() {
        assert!(is_private_prefix(&prefix("10.0.0.0/8")));
        assert!(is_private_prefix(&prefix("10.1.0.0/16")));
        assert!(is_private_prefix(&prefix("192.168.0.0/16")));
        assert!(!is_private_prefix(&prefix("192.168.0.0/15")));
        assert!(!is_private_prefix(&prefix("10.0.0.0/7")));
        assert!(!is_private_prefix(&prefix("0.0.0.0/0")));
        assert!(is_private_prefix(&prefix("fd00::/8")));
        assert!(!is_private_prefix(&prefix("fc00::/6")));
        assert!(is_private_prefix(&prefix("::ffff:10.0.0.0/104")));
        assert!(!is_private_prefix(&prefix("::ffff:10.0.0.0/103")));
        assert!(!is_private_prefix(&prefix("::ffff:0.0.0.0/95")));
    }

    #[test]
    fn test_is_public_address() {
        for s in ["8.8.8.8", "1.1.1.1", "2001:4860:4860::8888", "::ffff:8.8.8.8", "3fff:1000::1"] {
            assert!(is_public(&addr(s)), "{s}");
        }
        for s in [
            "0.1.2.3",
            "127.0.0.1",
            "169.254.1.1",
            "192.0.0.8",
            "192.0.2.1",
            "198.51.100.1",
            "203.0.113.1",
            "224.0.0.1",
            "255.255.255.255",
            "::",
            "::1",
            "2001:db8::1",
            "3fff::1",
            "fe80::1",
            "ff02::1",
            "::ffff:127.0.0.1",
        ] {
            assert!(!is_public(&addr(s)), "{s}");
        }
    }

    #[test]
    fn test_is_public_prefix() {
        assert!(is_public_prefix(&prefix("8.8.8.0/24")));
        assert!(is_public_prefix(&prefix("2001:4860::/32")));
        assert!(!is_public_prefix(&prefix("8.0.0.0/4")));
        assert!(!is_public_prefix(&prefix("0.0.0.0/0")));
        assert!(!is_public_prefix(&prefix("::/0")));
        assert!(!is_public_prefix(&prefix("192.0.2.128/25")));
        assert!(!is_public_prefix(&prefix("2000::/3")));
        assert!(is_public_prefix(&prefix("::ffff:8.8.8.0/120")));
        assert!(!is_public_prefix(&prefix("::ffff:8.8.8.0/95")));
    }

    #[test]
    fn test_rfc1918() {
        assert!(is_private_rfc1918(&addr("10.1.2.3")));
        assert!(is_private_rfc1918(&addr("::ffff:172.16.0.1")));
        assert!(!is_private_rfc1918(&addr("100.64.0.1")));
        assert!(!is_private_rfc1918(&addr("fc00::1")));
        assert!(is_private_rfc1918_prefix(&prefix("192.168.0.0/16")));
        assert!(!is_private_rfc1918_prefix(&prefix("192.168.0.0/15")));
        assert!(is_private_rfc1918_prefix(&prefix("::ffff:192.168.0.0/112")));
    }

    #[test]
    fn test_rfc4193() {
        assert!(is_private_rfc4193(&addr("fd00::1")));
        assert!(is_private_rfc4193(&addr("fc00::")));
        assert!(!is_private_rfc4193(&addr("fe00::")));
        assert!(!is_private_rfc4193(&addr("10.0.0.1")));
        assert!(is_private_rfc4193_prefix(&prefix("fc00::/7")));
        assert!(!is_private_rfc4193_prefix(&prefix("fc00::/6")));
    }

    #[test]
    fn test_rfc6598() {
        assert!(is_private_rfc6598(&addr("100.64.0.0")));
        assert!(is_private_rfc6598(&addr("::ffff:100.100.0.1")));
        assert!(!is_private_rfc6598(&addr("100.128.0.0")));
        assert!(is_private_rfc6598_prefix(&prefix("100.64.0.0/10")));
        assert!(!is_private_rfc6598_prefix(&prefix("100.64.0.0/9")));
        assert!(!is_private_rfc6598_prefix(&prefix("64:ff9b::/96")));
    }

    #[test]
    fn test_range_rationale() {
        let range = non_public_range_of(&addr("127.0.0.1")).unwrap();
        assert_eq!(range.registry, Registry::Rfc1122);
        assert_eq!(range.rationale, "Loopback");
        assert!(private_range_of(&addr("8.8.8.8")).is_none());
    }

    #[test]
    fn test_range_serialize() {
        let range = private_range_of(&addr("100.64.1.1")).unwrap();
        assert_eq!(
            serde_json::to_value(range).unwrap(),
            serde_json::json!({
                "prefix": "100.64.0.0/10",
                "registry": "Rfc6598",
                "rationale": "Shared Address Space"
            })
        );
    }
}
