//! EUI-48 MAC address.

use lazy_static::lazy_static;
use regex::Regex;
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::error::Error;
use std::str::FromStr;

lazy_static! {
    // 00:00:5e:00:53:01, 00-00-5E-00-53-01 or 0000.5e00.5301
    static ref MAC_RE: Regex = Regex::new(
        r"^(?:[0-9A-Fa-f]{2}(?::[0-9A-Fa-f]{2}){5}|[0-9A-Fa-f]{2}(?:-[0-9A-Fa-f]{2}){5}|[0-9A-Fa-f]{4}(?:\.[0-9A-Fa-f]{4}){2})$"
    )
    .expect("Invalid Regex?");
}

/// A 6-byte hardware address.
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash)]
pub struct MacAddress([u8; 6]);

impl MacAddress {
    pub fn new(octets: [u8; 6]) -> MacAddress {
        MacAddress(octets)
    }

    /// Build from a raw slice, which must hold exactly 6 bytes.
    pub fn from_slice(bytes: &[u8]) -> Result<MacAddress, Box<dyn Error>> {
        let octets: [u8; 6] = bytes.try_into().map_err(|_| {
            format!(
                "MAC address must be in EUI-48 format, got {} bytes",
                bytes.len()
            )
        })?;
        Ok(MacAddress(octets))
    }

    pub fn octets(&self) -> [u8; 6] {
        self.0
    }
}

impl FromStr for MacAddress {
    type Err = Box<dyn Error>;

    fn from_str(s: &str) -> Result<MacAddress, Self::Err> {
        if !MAC_RE.is_match(s) {
            return Err(format!("invalid MAC address: {s}").into());
        }
        let digits: Vec<u8> = s.bytes().filter(u8::is_ascii_hexdigit).collect();
        let mut octets = [0u8; 6];
        for (octet, pair) in octets.iter_mut().zip(digits.chunks(2)) {
            let pair = std::str::from_utf8(pair)?;
            *octet = u8::from_str_radix(pair, 16)?;
        }
        Ok(MacAddress(octets))
    }
}

impl std::fmt::Display for MacAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let [a, b, c, d, e, g] = self.0;
        write!(f, "{a:02x}:{b:02x}:{c:02x}:{d:02x}:{e:02x}:{g:02x}")
    }
}

impl Serialize for MacAddress {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for MacAddress {
    fn deserialize<D>(deserializer: D) -> Result<MacAddress, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        MacAddress::from_str(&s).map_err(de::Error::custom)
    }
}
