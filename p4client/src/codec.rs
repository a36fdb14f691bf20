/*
Copyright (c) 2022 VMware, Inc.
SPDX-License-Identifier: MIT
Permission is hereby granted, free of charge, to any person obtaining a copy
of this software and associated documentation files (the "Software"), to deal
in the Software without restriction, including without limitation the rights
to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
copies of the Software, and to permit persons to whom the Software is
furnished to do so, subject to the following conditions:
The above copyright notice and this permission notice shall be included in all
copies or substantial portions of the Software.
THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
SOFTWARE.
*/

//! Encoding and decoding of table key fields.
//!
//! P4Runtime is strict about the form of match values: an LPM value may not have any bits set
//! past its prefix length, and a ternary value may not have any bits set where its mask is zero.
//! A server rejects entries that break these rules, so [`MatchValue::encode`] clears those bits
//! before it builds the wire [`FieldMatch`].  It also optionally converts each byte string to
//! canonical form (no leading zero bytes), which the protocol permits and some servers require.
//!
//! Nothing here checks a value's length against the field's declared bit width.  That is up to
//! the server.

use byteorder::{BigEndian, ByteOrder};

use proto::p4info::{self, MatchField_MatchType as MatchType};
use proto::p4runtime::{
    FieldMatch,
    FieldMatch_Exact,
    FieldMatch_LPM,
    FieldMatch_Optional,
    FieldMatch_Range,
    FieldMatch_Ternary,
};

use protobuf::well_known_types::Any;

use serde::{Deserialize, Serialize};

use std::fmt::{self, Display};
use std::net::Ipv6Addr;

use crate::error::{Error, Result};

/// Strips leading zero bytes from the big-endian byte string `v`.  An all-zero string becomes
/// empty.
pub fn to_canonical_bytestring(v: &[u8]) -> Vec<u8> {
    let start = v.iter().position(|&b| b != 0).unwrap_or(v.len());
    v[start..].to_vec()
}

pub fn to_canonical_if(v: Vec<u8>, canonical: bool) -> Vec<u8> {
    if canonical {
        to_canonical_bytestring(&v)
    } else {
        v
    }
}

/// Encodes `value` as a big-endian byte string of exactly `(bit_width + 7) / 8` bytes, the
/// padded form that P4Runtime accepts for a field or parameter `bit_width` bits wide.  High-order
/// bits that don't fit are dropped.
pub fn encode_value(value: u128, bit_width: i32) -> Vec<u8> {
    let mut enc_val = [0u8; 16];
    BigEndian::write_u128(&mut enc_val, value);

    let num_bytes = (bit_width.clamp(0, 128) as usize + 7) / 8;
    enc_val[enc_val.len() - num_bytes..].to_vec()
}

/// The kinds of match a table key field can have.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchKind {
    Exact,
    Lpm,
    Ternary,
    Range,
    Optional,

    /// An architecture-specific kind, or one this client does not know.
    Other,
}

impl From<MatchType> for MatchKind {
    fn from(mt: MatchType) -> Self {
        match mt {
            MatchType::EXACT => MatchKind::Exact,
            MatchType::LPM => MatchKind::Lpm,
            MatchType::TERNARY => MatchKind::Ternary,
            MatchType::RANGE => MatchKind::Range,
            MatchType::OPTIONAL => MatchKind::Optional,
            MatchType::UNSPECIFIED => MatchKind::Other,
        }
    }
}

impl Display for MatchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use MatchKind::*;
        let s = match self {
            Exact => "exact",
            Lpm => "lpm",
            Ternary => "ternary",
            Range => "range",
            Optional => "optional",
            Other => "other",
        };
        write!(f, "{}", s)
    }
}

/// The value to match for one key field, tagged by match kind.
///
/// In JSON, the kind is the `match_type` member and the payload members sit beside it, e.g.
/// `{"match_type": "lpm", "value": [10, 0, 0, 0], "prefix_len": 8}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "match_type", rename_all = "lowercase")]
pub enum MatchValue {
    Exact { value: Vec<u8> },
    Lpm { value: Vec<u8>, prefix_len: i32 },
    Ternary { value: Vec<u8>, mask: Vec<u8> },
    Range { low: Vec<u8>, high: Vec<u8> },
    Optional { value: Vec<u8> },

    /// Passed through to the server without any change.
    Other { value: Vec<u8> },
}

impl MatchValue {
    pub fn kind(&self) -> MatchKind {
        match self {
            MatchValue::Exact { .. } => MatchKind::Exact,
            MatchValue::Lpm { .. } => MatchKind::Lpm,
            MatchValue::Ternary { .. } => MatchKind::Ternary,
            MatchValue::Range { .. } => MatchKind::Range,
            MatchValue::Optional { .. } => MatchKind::Optional,
            MatchValue::Other { .. } => MatchKind::Other,
        }
    }

    /// Builds the wire form of this match for the field with `field_id`.  If `canonical` is
    /// true, converts every byte string except an `Other` payload to canonical form.
    pub fn encode(&self, field_id: u32, canonical: bool) -> Result<FieldMatch> {
        let mut field_match = FieldMatch::new();
        field_match.set_field_id(field_id);
        match self {
            MatchValue::Exact { value } => {
                let mut exact = FieldMatch_Exact::new();
                exact.set_value(to_canonical_if(value.clone(), canonical));
                field_match.set_exact(exact);
            }
            MatchValue::Lpm { value, prefix_len } => {
                if *prefix_len < 0 {
                    return Err(Error::MalformedLpmMatch(*prefix_len));
                }

                // Bits past the prefix must be zero.
                let mut value = value.clone();
                let first_byte_masked = (*prefix_len / 8) as usize;
                if first_byte_masked < value.len() {
                    let r = (*prefix_len % 8) as u32;
                    value[first_byte_masked] &= 0xffu8.checked_shl(8 - r).unwrap_or(0);
                    for b in &mut value[first_byte_masked + 1..] {
                        *b = 0;
                    }
                }

                let mut lpm = FieldMatch_LPM::new();
                lpm.set_value(to_canonical_if(value, canonical));
                lpm.set_prefix_len(*prefix_len);
                field_match.set_lpm(lpm);
            }
            MatchValue::Ternary { value, mask } => {
                if mask.len() < value.len() {
                    return Err(Error::MalformedTernaryMatch {
                        value_len: value.len(),
                        mask_len: mask.len(),
                    });
                }

                // Masked-off bits must be zero.  A mask longer than the value lines up with it
                // at the low-order end.
                let offset = mask.len() - value.len();
                let value: Vec<u8> = value
                    .iter()
                    .zip(&mask[offset..])
                    .map(|(v, m)| v & m)
                    .collect();

                let mut ternary = FieldMatch_Ternary::new();
                ternary.set_value(to_canonical_if(value, canonical));
                ternary.set_mask(to_canonical_if(mask.clone(), canonical));
                field_match.set_ternary(ternary);
            }
            MatchValue::Range { low, high } => {
                let mut range = FieldMatch_Range::new();
                range.set_low(to_canonical_if(low.clone(), canonical));
                range.set_high(to_canonical_if(high.clone(), canonical));
                field_match.set_range(range);
            }
            MatchValue::Optional { value } => {
                let mut optional = FieldMatch_Optional::new();
                optional.set_value(to_canonical_if(value.clone(), canonical));
                field_match.set_optional(optional);
            }
            MatchValue::Other { value } => {
                let mut other = Any::new();
                other.set_value(value.clone());
                field_match.set_other(other);
            }
        }
        Ok(field_match)
    }

    /// Extracts the match value from `wire`, interpreting it according to the match type that
    /// `field` declares, not according to which variant `wire` happens to carry.  A payload of the
    /// wrong variant reads as empty.  Fields without a standard match type decode as `Other`.
    pub fn decode(field: &p4info::MatchField, wire: &FieldMatch) -> MatchValue {
        match field.get_match_type() {
            MatchType::EXACT => MatchValue::Exact {
                value: wire.get_exact().get_value().to_vec(),
            },
            MatchType::LPM => {
                let lpm = wire.get_lpm();
                MatchValue::Lpm {
                    value: lpm.get_value().to_vec(),
                    prefix_len: lpm.get_prefix_len(),
                }
            }
            MatchType::TERNARY => {
                let ternary = wire.get_ternary();
                MatchValue::Ternary {
                    value: ternary.get_value().to_vec(),
                    mask: ternary.get_mask().to_vec(),
                }
            }
            MatchType::RANGE => {
                let range = wire.get_range();
                MatchValue::Range {
                    low: range.get_low().to_vec(),
                    high: range.get_high().to_vec(),
                }
            }
            MatchType::OPTIONAL => MatchValue::Optional {
                value: wire.get_optional().get_value().to_vec(),
            },
            MatchType::UNSPECIFIED => MatchValue::Other {
                value: wire.get_other().get_value().to_vec(),
            },
        }
    }
}

impl Display for MatchValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchValue::Exact { value }
            | MatchValue::Optional { value }
            | MatchValue::Other { value } => write!(f, "{}", format_bytes(value)),
            MatchValue::Lpm { value, prefix_len } => {
                write!(f, "[{},{}]", format_bytes(value), prefix_len)
            }
            MatchValue::Ternary { value, mask } => {
                write!(f, "[{} &&& {}]", format_bytes(value), format_bytes(mask))
            }
            MatchValue::Range { low, high } => {
                write!(f, "[{}-{}]", format_bytes(low), format_bytes(high))
            }
        }
    }
}

/// Renders a byte string the way a person would most likely want to read it, guessing from its
/// length: 4 bytes as an IPv4 address, 6 as an Ethernet address, 16 as an IPv6 address, and
/// anything else as an unsigned integer.
pub fn format_bytes(bytes: &[u8]) -> String {
    match bytes.len() {
        4 => format!("{}.{}.{}.{}", bytes[0], bytes[1], bytes[2], bytes[3]),
        6 => bytes
            .iter()
            .map(|b| format!("{:02x}", b))
            .collect::<Vec<_>>()
            .join(":"),
        16 => {
            let mut octets = [0u8; 16];
            octets.copy_from_slice(bytes);
            Ipv6Addr::from(octets).to_string()
        }
        n if n > 16 => bytes.iter().map(|b| format!("{:02x}", b)).collect(),
        _ => bytes
            .iter()
            .fold(0u128, |n, &b| (n << 8) | u128::from(b))
            .to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lpm(value: &[u8], prefix_len: i32) -> Vec<u8> {
        let fm = MatchValue::Lpm { value: value.to_vec(), prefix_len }
            .encode(1, false)
            .unwrap();
        fm.get_lpm().get_value().to_vec()
    }

    fn ternary(value: &[u8], mask: &[u8]) -> Vec<u8> {
        let fm = MatchValue::Ternary { value: value.to_vec(), mask: mask.to_vec() }
            .encode(1, false)
            .unwrap();
        fm.get_ternary().get_value().to_vec()
    }

    #[test]
    fn canonical_bytestring() {
        assert_eq!(to_canonical_bytestring(&[0x00, 0x00, 0x2a]), vec![0x2a]);
        assert_eq!(to_canonical_bytestring(&[0x00, 0x00, 0x00]), Vec::<u8>::new());
        assert_eq!(to_canonical_bytestring(&[0x01, 0x00]), vec![0x01, 0x00]);
        assert_eq!(to_canonical_bytestring(&[]), Vec::<u8>::new());

        let once = to_canonical_bytestring(&[0x00, 0x10, 0x00]);
        assert_eq!(to_canonical_bytestring(&once), once);
    }

    #[test]
    fn lpm_clears_bits_past_prefix() {
        assert_eq!(lpm(&[10, 1, 2, 3], 8), vec![10, 0, 0, 0]);
        assert_eq!(lpm(&[10, 0xff, 2, 3], 12), vec![10, 0xf0, 0, 0]);
        assert_eq!(lpm(&[0xff, 0xff], 0), vec![0, 0]);
        assert_eq!(lpm(&[0xff, 0xff], 16), vec![0xff, 0xff]);
        assert_eq!(lpm(&[0xff, 0xff], 24), vec![0xff, 0xff]);

        for prefix_len in 0..=32 {
            let value = lpm(&[0xff; 4], prefix_len);
            for bit in prefix_len as usize..32 {
                assert_eq!(value[bit / 8] & (0x80 >> (bit % 8)), 0, "prefix {} bit {}", prefix_len, bit);
            }
            for bit in 0..prefix_len as usize {
                assert_ne!(value[bit / 8] & (0x80 >> (bit % 8)), 0, "prefix {} bit {}", prefix_len, bit);
            }
        }
    }

    #[test]
    fn lpm_negative_prefix() {
        let result = MatchValue::Lpm { value: vec![1], prefix_len: -1 }.encode(1, false);
        assert!(matches!(result, Err(Error::MalformedLpmMatch(-1))));
    }

    #[test]
    fn ternary_clears_masked_bits() {
        assert_eq!(ternary(&[0xab, 0xcd], &[0xf0, 0x0f]), vec![0xa0, 0x0d]);

        // The mask's extra leading bytes don't take part.
        assert_eq!(ternary(&[0xff, 0xff], &[0x00, 0x0f, 0xf0]), vec![0x0f, 0xf0]);
    }

    #[test]
    fn ternary_short_mask() {
        let result = MatchValue::Ternary { value: vec![1, 2, 3], mask: vec![0xff] }.encode(1, false);
        assert!(matches!(
            result,
            Err(Error::MalformedTernaryMatch { value_len: 3, mask_len: 1 })
        ));
    }

    #[test]
    fn canonical_encoding() {
        let fm = MatchValue::Ternary { value: vec![0, 0, 5], mask: vec![0, 0, 0xff] }
            .encode(7, true)
            .unwrap();
        assert_eq!(fm.get_field_id(), 7);
        assert_eq!(fm.get_ternary().get_value(), &[5][..]);
        assert_eq!(fm.get_ternary().get_mask(), &[0xff][..]);

        // "Other" payloads are opaque.
        let fm = MatchValue::Other { value: vec![0, 1] }.encode(7, true).unwrap();
        assert!(fm.has_other());
        assert_eq!(fm.get_other().get_value(), &[0, 1][..]);
    }

    #[test]
    fn decode_follows_declared_type() {
        let mut field = p4info::MatchField::new();
        field.set_id(1);
        field.set_name("f".into());
        field.set_match_type(MatchType::EXACT);
        let wire = MatchValue::Optional { value: vec![1] }.encode(1, false).unwrap();
        assert_eq!(MatchValue::decode(&field, &wire), MatchValue::Exact { value: vec![] });

        field.set_other_match_type("range_list".into());
        let wire = MatchValue::Other { value: vec![9] }.encode(1, false).unwrap();
        assert_eq!(MatchValue::decode(&field, &wire), MatchValue::Other { value: vec![9] });
    }

    #[test]
    fn encode_value_widths() {
        assert_eq!(encode_value(11, 9), vec![0, 11]);
        assert_eq!(encode_value(0x0a000001, 32), vec![10, 0, 0, 1]);
        assert_eq!(encode_value(0x1ff, 8), vec![0xff]);
        assert_eq!(encode_value(1, 0), Vec::<u8>::new());
    }

    #[test]
    fn format() {
        assert_eq!(format_bytes(&[10, 0, 0, 1]), "10.0.0.1");
        assert_eq!(format_bytes(&[0, 0x11, 0x22, 0x33, 0x44, 0x55]), "00:11:22:33:44:55");
        assert_eq!(format_bytes(&[7]), "7");
        assert_eq!(format_bytes(&[1, 0]), "256");
        assert_eq!(
            MatchValue::Lpm { value: vec![10, 0, 0, 0], prefix_len: 8 }.to_string(),
            "[10.0.0.0,8]"
        );
    }
}
