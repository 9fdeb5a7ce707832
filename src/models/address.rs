//! IPv4 and IPv6 address value type.
//!
//! [`Address`] holds the raw network-order bytes of either family. Byte
//! length always matches the family, so invalid lengths can only surface
//! when building an address from an untyped slice.

use itertools::Itertools;
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::error::Error;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::str::FromStr;

/// Bit length of an IPv4 address.
pub const V4_BITS: u8 = 32;
/// Bit length of an IPv6 address.
pub const V6_BITS: u8 = 128;

/// First 12 bytes of an IPv4-mapped IPv6 address (`::ffff:0:0/96`).
const V4_MAPPED_PREFIX: [u8; 12] = [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0xff, 0xff];

/// An IPv4 or IPv6 address.
///
/// Ordering puts every IPv4 address before every IPv6 address, then
/// compares bytes lexicographically.
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash)]
pub enum Address {
    V4([u8; 4]),
    V6([u8; 16]),
}

impl Address {
    /// Build an address from 4 or 16 raw bytes.
    pub fn from_slice(bytes: &[u8]) -> Result<Address, Box<dyn Error>> {
        match bytes.len() {
            4 => {
                let mut octets = [0u8; 4];
                octets.copy_from_slice(bytes);
                Ok(Address::V4(octets))
            }
            16 => {
                let mut octets = [0u8; 16];
                octets.copy_from_slice(bytes);
                Ok(Address::V6(octets))
            }
            len => Err(format!("Invalid address length: {len} bytes").into()),
        }
    }

    pub fn is_v4(&self) -> bool {
        matches!(self, Address::V4(_))
    }

    pub fn is_v6(&self) -> bool {
        matches!(self, Address::V6(_))
    }

    /// True for an IPv6 address inside `::ffff:0:0/96`.
    pub fn is_v4_in_v6(&self) -> bool {
        match self {
            Address::V6(octets) => octets[..12] == V4_MAPPED_PREFIX,
            Address::V4(_) => false,
        }
    }

    /// Return the embedded IPv4 address of an IPv4-mapped IPv6 address,
    /// any other address unchanged.
    pub fn unmap(&self) -> Address {
        match self {
            Address::V6(octets) if self.is_v4_in_v6() => {
                Address::V4([octets[12], octets[13], octets[14], octets[15]])
            }
            other => *other,
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Address::V4(octets) => octets,
            Address::V6(octets) => octets,
        }
    }

    /// 32 for IPv4, 128 for IPv6.
    pub fn bit_len(&self) -> u8 {
        match self {
            Address::V4(_) => V4_BITS,
            Address::V6(_) => V6_BITS,
        }
    }

    /// Zero every bit after the first `bits` bits.
    ///
    /// A `bits` value at or above [`Address::bit_len`] returns the address
    /// unchanged.
    pub fn mask(&self, bits: u8) -> Address {
        let mut masked = *self;
        let bytes: &mut [u8] = match &mut masked {
            Address::V4(octets) => octets,
            Address::V6(octets) => octets,
        };
        let bits = bits as usize;
        for (i, byte) in bytes.iter_mut().enumerate() {
            let start = i * 8;
            if start + 8 <= bits {
                continue;
            }
            if start >= bits {
                *byte = 0;
            } else {
                *byte &= 0xffu8 << (8 - (bits - start));
            }
        }
        masked
    }

    /// Full textual form: eight zero-padded hextets for IPv6, dotted quad
    /// for IPv4.
    pub fn to_expanded_string(&self) -> String {
        match self {
            Address::V4(_) => self.to_string(),
            Address::V6(octets) => octets
                .chunks(2)
                .map(|pair| format!("{:02x}{:02x}", pair[0], pair[1]))
                .join(":"),
        }
    }
}

impl From<Ipv4Addr> for Address {
    fn from(addr: Ipv4Addr) -> Address {
        Address::V4(addr.octets())
    }
}

impl From<Ipv6Addr> for Address {
    fn from(addr: Ipv6Addr) -> Address {
        Address::V6(addr.octets())
    }
}

impl From<IpAddr> for Address {
    fn from(addr: IpAddr) -> Address {
        match addr {
            IpAddr::V4(v4) => v4.into(),
            IpAddr::V6(v6) => v6.into(),
        }
    }
}

impl From<Address> for IpAddr {
    fn from(addr: Address) -> IpAddr {
        match addr {
            Address::V4(octets) => IpAddr::V4(Ipv4Addr::from(octets)),
            Address::V6(octets) => IpAddr::V6(Ipv6Addr::from(octets)),
        }
    }
}

impl FromStr for Address {
    type Err = Box<dyn Error>;

    fn from_str(s: &str) -> Result<Address, Self::Err> {
        let addr: IpAddr = s
            .parse()
            .map_err(|e| format!("ParseAddr({s:?}): {e}"))?;
        Ok(addr.into())
    }
}

impl std::fmt::Display for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", IpAddr::from(*self))
    }
}

impl Serialize for Address {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D>(deserializer: D) -> Result<Address, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Address::from_str(&s).map_err(|_| de::Error::custom(format!("invalid IP address: {s}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn addr(s: &str) -> Address {
        s.parse().unwrap()
    }

    #[test]
    fn test_from_slice() {
        assert_eq!(
            Address::from_slice(&[192, 0, 2, 1]).unwrap(),
            addr("192.0.2.1")
        );
        let v6 = addr("2001:db8::1");
        assert_eq!(Address::from_slice(v6.as_bytes()).unwrap(), v6);
        assert!(Address::from_slice(&[1, 2, 3]).is_err());
        assert!(Address::from_slice(&[0; 6]).is_err());
        assert!(Address::from_slice(&[]).is_err());
    }

    #[test]
    fn test_family() {
        assert!(addr("10.0.0.1").is_v4());
        assert!(!addr("10.0.0.1").is_v6());
        assert!(addr("::1").is_v6());
        assert_eq!(addr("10.0.0.1").bit_len(), 32);
        assert_eq!(addr("::1").bit_len(), 128);
    }

    #[test]
    fn test_v4_in_v6() {
        let mapped = addr("::ffff:192.168.1.1");
        assert!(mapped.is_v4_in_v6());
        assert_eq!(mapped.unmap(), addr("192.168.1.1"));
        assert_ne!(mapped, addr("192.168.1.1"));

        assert!(!addr("::192.168.1.1").is_v4_in_v6());
        assert!(!addr("192.168.1.1").is_v4_in_v6());
        assert_eq!(addr("2001:db8::1").unmap(), addr("2001:db8::1"));
        assert_eq!(addr("10.1.2.3").unmap(), addr("10.1.2.3"));
    }

    #[test]
    fn test_mask() {
        let ip = addr("192.168.1.42");
        assert_eq!(ip.mask(24), addr("192.168.1.0"));
        assert_eq!(ip.mask(16), addr("192.168.0.0"));
        assert_eq!(ip.mask(8), addr("192.0.0.0"));
        assert_eq!(ip.mask(0), addr("0.0.0.0"));
        assert_eq!(ip.mask(32), ip);
        assert_eq!(ip.mask(33), ip);
        assert_eq!(addr("255.255.255.255").mask(23), addr("255.255.254.0"));
        assert_eq!(addr("255.255.255.255").mask(1), addr("128.0.0.0"));

        let v6 = addr("3fff:ffff:ffff:ffff:ffff:ffff:ffff:ffff");
        assert_eq!(v6.mask(33), addr("3fff:ffff:8000::"));
        assert_eq!(v6.mask(65), addr("3fff:ffff:ffff:ffff:8000::"));
        assert_eq!(v6.mask(128), v6);
    }

    #[test]
    fn test_ordering() {
        assert!(addr("10.0.0.1") < addr("10.0.0.2"));
        assert!(addr("10.0.0.255") < addr("10.0.1.0"));
        assert!(addr("255.255.255.255") < addr("::"));
        assert!(addr("2001:db8::") < addr("fd00::"));
    }

    #[test]
    fn test_display_and_expanded() {
        assert_eq!(addr("192.0.2.1").to_string(), "192.0.2.1");
        assert_eq!(addr("2001:0db8::0001").to_string(), "2001:db8::1");
        assert_eq!(
            addr("2001:db8::1").to_expanded_string(),
            "2001:0db8:0000:0000:0000:0000:0000:0001"
        );
        assert_eq!(addr("192.0.2.1").to_expanded_string(), "192.0.2.1");
    }

    #[test]
    fn test_parse_errors() {
        assert!("".parse::<Address>().is_err());
        assert!("10.0.0".parse::<Address>().is_err());
        assert!("2001:db8::h".parse::<Address>().is_err());
        assert!("10.0.0.0/8".parse::<Address>().is_err());
    }

    #[test]
    fn test_serde() {
        let v6 = addr("2001:db8::1");
        let json = serde_json::to_string(&v6).unwrap();
        assert_eq!(json, "\"2001:db8::1\"");
        let back: Address = serde_json::from_str(&json).unwrap();
        assert_eq!(back, v6);
        assert!(serde_json::from_str::<Address>("\"nope\"").is_err());
    }
}
