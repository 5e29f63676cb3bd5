//! MPLS-labeled VPN route structs (RFC 4364, RFC 8277).
use ipnet::Ipv4Net;
use smallvec::SmallVec;
use std::fmt::{Debug, Display, Formatter};
use std::net::Ipv4Addr;

/// Route Distinguisher, kept as its 8 wire bytes.
///
/// <https://datatracker.ietf.org/doc/html/rfc4364#section-4.2>
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RouteDistinguisher(pub [u8; 8]);

impl RouteDistinguisher {
    pub const fn rd_type(&self) -> u16 {
        u16::from_be_bytes([self.0[0], self.0[1]])
    }
}

impl Display for RouteDistinguisher {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let b = &self.0;
        match self.rd_type() {
            // 2-byte ASN : 4-byte number
            0 => write!(
                f,
                "{}:{}",
                u16::from_be_bytes([b[2], b[3]]),
                u32::from_be_bytes([b[4], b[5], b[6], b[7]])
            ),
            // IPv4 address : 2-byte number
            1 => write!(
                f,
                "{}:{}",
                Ipv4Addr::new(b[2], b[3], b[4], b[5]),
                u16::from_be_bytes([b[6], b[7]])
            ),
            // 4-byte ASN : 2-byte number
            2 => write!(
                f,
                "{}:{}",
                u32::from_be_bytes([b[2], b[3], b[4], b[5]]),
                u16::from_be_bytes([b[6], b[7]])
            ),
            t => write!(
                f,
                "{}:{:02x}{:02x}{:02x}{:02x}{:02x}{:02x}",
                t, b[2], b[3], b[4], b[5], b[6], b[7]
            ),
        }
    }
}

/// One entry of an MPLS label stack (RFC 3032 layout without the TTL byte).
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MplsLabel {
    /// 20-bit label value
    pub label: u32,
    /// 3-bit traffic class
    pub tc: u8,
    pub bottom_of_stack: bool,
}

impl MplsLabel {
    pub const fn new(label: u32, bottom_of_stack: bool) -> Self {
        MplsLabel {
            label: label & 0x000F_FFFF,
            tc: 0,
            bottom_of_stack,
        }
    }

    /// Decode from the 3-byte NLRI label field.
    pub const fn from_bytes(bytes: [u8; 3]) -> Self {
        let raw = u32::from_be_bytes([0, bytes[0], bytes[1], bytes[2]]);
        MplsLabel {
            label: raw >> 4,
            tc: ((raw >> 1) & 0x07) as u8,
            bottom_of_stack: raw & 0x01 == 1,
        }
    }

    pub const fn to_bytes(&self) -> [u8; 3] {
        let raw = ((self.label & 0x000F_FFFF) << 4)
            | ((self.tc as u32 & 0x07) << 1)
            | (self.bottom_of_stack as u32);
        let b = raw.to_be_bytes();
        [b[1], b[2], b[3]]
    }
}

/// MPLS label stack; almost always one or two labels deep.
pub type MplsLabelStack = SmallVec<[MplsLabel; 2]>;

/// An IPv4 VPN route: label stack, route distinguisher and prefix.
#[derive(PartialEq, Eq, Clone, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LabeledVpnPrefix {
    pub labels: MplsLabelStack,
    pub rd: RouteDistinguisher,
    pub prefix: Ipv4Net,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none", default))]
    pub path_id: Option<u32>,
}

impl LabeledVpnPrefix {
    pub fn new(labels: MplsLabelStack, rd: RouteDistinguisher, prefix: Ipv4Net) -> Self {
        LabeledVpnPrefix {
            labels,
            rd,
            prefix,
            path_id: None,
        }
    }
}

impl Debug for LabeledVpnPrefix {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let labels = self
            .labels
            .iter()
            .map(|l| l.label.to_string())
            .collect::<Vec<_>>()
            .join(",");
        write!(f, "[{}]{}:{}", labels, self.rd, self.prefix)?;
        if let Some(path_id) = self.path_id {
            write!(f, "#{}", path_id)?;
        }
        Ok(())
    }
}

impl Display for LabeledVpnPrefix {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.rd, self.prefix)
    }
}
