use crate::models::*;
use bytes::Bytes;

/// A decoded MP_REACH_NLRI attribute (RFC 4760, type code 14).
///
/// Values are transient: the parser builds one per attribute and the constructor consumes
/// one to produce wire bytes.
#[derive(Debug, PartialEq, Clone, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MpReachAttribute {
    pub family: AddressFamily,
    pub next_hop: NextHop,
    pub nlri: NlriPayload,
}

/// NLRI carried by the attribute.
///
/// Families with a known sub-codec are decoded into [ParsedNlri]. Everything else is kept
/// byte-for-byte in [NlriPayload::Opaque].
#[derive(Debug, PartialEq, Clone, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NlriPayload {
    Parsed(ParsedNlri),
    Opaque(Bytes),
}

#[derive(Debug, PartialEq, Clone, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ParsedNlri {
    /// IPv4 MPLS-labeled VPN routes (SAFI 128)
    VpnMpls(Vec<LabeledVpnPrefix>),
    /// IPv4 flow specification rule, as its ordered list of components (SAFI 133)
    FlowSpec(Vec<FlowSpecComponent>),
    /// IPv6 unicast prefixes
    Ipv6Unicast(Vec<NetworkPrefix>),
}

impl ParsedNlri {
    /// Number of NLRI entries.
    pub fn len(&self) -> usize {
        match self {
            ParsedNlri::VpnMpls(v) => v.len(),
            ParsedNlri::FlowSpec(v) => v.len(),
            ParsedNlri::Ipv6Unicast(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl NlriPayload {
    pub const fn is_opaque(&self) -> bool {
        matches!(self, NlriPayload::Opaque(_))
    }

    pub const fn parsed(&self) -> Option<&ParsedNlri> {
        match self {
            NlriPayload::Parsed(p) => Some(p),
            NlriPayload::Opaque(_) => None,
        }
    }
}

impl MpReachAttribute {
    pub fn new(family: AddressFamily, next_hop: NextHop, nlri: NlriPayload) -> Self {
        MpReachAttribute {
            family,
            next_hop,
            nlri,
        }
    }

    /// Build an IPv4 flow-spec attribute from a textual next hop and a rule.
    ///
    /// An empty component list is allowed and constructs to no bytes at all.
    pub fn new_flowspec<S: Into<String>>(next_hop: S, components: Vec<FlowSpecComponent>) -> Self {
        MpReachAttribute {
            family: AddressFamily::IPV4_FLOWSPEC,
            next_hop: NextHop::textual(next_hop),
            nlri: NlriPayload::Parsed(ParsedNlri::FlowSpec(components)),
        }
    }

    /// IPv6 unicast prefixes, if this attribute carries them.
    pub fn ipv6_prefixes(&self) -> Option<&[NetworkPrefix]> {
        match &self.nlri {
            NlriPayload::Parsed(ParsedNlri::Ipv6Unicast(prefixes)) => Some(prefixes),
            _ => None,
        }
    }

    /// Flow-spec components, if this attribute carries a flow-spec rule.
    pub fn flowspec_components(&self) -> Option<&[FlowSpecComponent]> {
        match &self.nlri {
            NlriPayload::Parsed(ParsedNlri::FlowSpec(components)) => Some(components),
            _ => None,
        }
    }

    /// VPN-MPLS routes, if this attribute carries them.
    pub fn vpn_prefixes(&self) -> Option<&[LabeledVpnPrefix]> {
        match &self.nlri {
            NlriPayload::Parsed(ParsedNlri::VpnMpls(prefixes)) => Some(prefixes),
            _ => None,
        }
    }
}
