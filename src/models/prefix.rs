//! CIDR prefix: an [`Address`] paired with a prefix length.
//!
//! The address is stored exactly as given, host bits included, because
//! some operations (NAT64 extraction) read bytes past the prefix length.
//! Equality, hashing and ordering all work on the masked form.

use super::Address;
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::cmp::Ordering;
use std::error::Error;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// An address and a prefix length in `0..=32` (IPv4) or `0..=128` (IPv6).
#[derive(Debug, Copy, Clone)]
pub struct Prefix {
    addr: Address,
    bits: u8,
}

impl Prefix {
    /// Create a prefix, rejecting lengths beyond the address family.
    pub fn new(addr: Address, bits: u8) -> Result<Prefix, Box<dyn Error>> {
        if bits > addr.bit_len() {
            return Err(format!(
                "Network length /{bits} is too long for {addr} (max /{})",
                addr.bit_len()
            )
            .into());
        }
        Ok(Prefix { addr, bits })
    }

    /// Table constructor for compile-time range data. `bits` must be valid.
    pub(crate) const fn from_parts(addr: Address, bits: u8) -> Prefix {
        Prefix { addr, bits }
    }

    /// Host prefix covering exactly one address (/32 or /128).
    pub fn single(addr: Address) -> Prefix {
        Prefix {
            addr,
            bits: addr.bit_len(),
        }
    }

    /// The address as given, host bits included.
    pub fn addr(&self) -> Address {
        self.addr
    }

    pub fn bits(&self) -> u8 {
        self.bits
    }

    /// Network form of the prefix, host bits zeroed.
    pub fn masked(&self) -> Prefix {
        Prefix {
            addr: self.addr.mask(self.bits),
            bits: self.bits,
        }
    }

    /// The enclosing block one bit shorter, or `None` for a /0.
    pub fn parent(&self) -> Option<Prefix> {
        let bits = self.bits.checked_sub(1)?;
        Some(Prefix {
            addr: self.addr.mask(bits),
            bits,
        })
    }

    /// Check whether `ip` lies in this prefix. Families never mix.
    pub fn contains(&self, ip: &Address) -> bool {
        self.addr.is_v4() == ip.is_v4() && self.addr.mask(self.bits) == ip.mask(self.bits)
    }

    /// Check whether the whole of `other` lies in this prefix.
    pub fn contains_prefix(&self, other: &Prefix) -> bool {
        self.bits <= other.bits && self.contains(&other.addr)
    }

    /// Check whether the two prefixes share at least one address.
    pub fn overlaps(&self, other: &Prefix) -> bool {
        if self.addr.is_v4() != other.addr.is_v4() {
            return false;
        }
        let bits = self.bits.min(other.bits);
        self.addr.mask(bits) == other.addr.mask(bits)
    }
}

impl PartialEq for Prefix {
    fn eq(&self, other: &Prefix) -> bool {
        self.bits == other.bits && self.addr.mask(self.bits) == other.addr.mask(other.bits)
    }
}

impl Eq for Prefix {}

impl Hash for Prefix {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.addr.mask(self.bits).hash(state);
        self.bits.hash(state);
    }
}

impl Ord for Prefix {
    fn cmp(&self, other: &Prefix) -> Ordering {
        self.addr
            .mask(self.bits)
            .cmp(&other.addr.mask(other.bits))
            .then(self.bits.cmp(&other.bits))
    }
}

impl PartialOrd for Prefix {
    fn partial_cmp(&self, other: &Prefix) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl FromStr for Prefix {
    type Err = Box<dyn Error>;

    /// Parse `address/length`, e.g. "10.0.0.0/24".
    fn from_str(s: &str) -> Result<Prefix, Self::Err> {
        let (addr, bits) = s
            .split_once('/')
            .ok_or_else(|| format!("ParsePrefix({s:?}): no '/'"))?;
        let addr: Address = addr.parse()?;
        if bits.is_empty() || !bits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(format!("ParsePrefix({s:?}): bad bits after slash: {bits:?}").into());
        }
        let bits: u8 = bits
            .parse()
            .map_err(|_| format!("ParsePrefix({s:?}): prefix length out of range"))?;
        Prefix::new(addr, bits)
    }
}

impl std::fmt::Display for Prefix {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.addr, self.bits)
    }
}

impl Serialize for Prefix {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Prefix {
    fn deserialize<D>(deserializer: D) -> Result<Prefix, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Prefix::from_str(&s).map_err(|e| de::Error::custom(format!("invalid CIDR format: {e}")))
    }
}
