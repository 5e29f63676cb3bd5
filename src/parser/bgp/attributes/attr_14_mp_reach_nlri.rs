use crate::error::{ConstructError, ConstructErrorKind};
use crate::models::*;
use crate::parser::bgp::attributes::attr_03_next_hop::{encode_next_hop, parse_ipv6_next_hop};
use crate::parser::bgp::nlri::flowspec::{declared_rule_length, length_prefix_width};
use crate::parser::bgp::nlri::*;
use crate::parser::{ReadError, ReadUtils};
use crate::ParserError;
use bytes::{BufMut, Bytes, BytesMut};
use log::{debug, warn};

/// Fixed part of the attribute value: AFI, SAFI and next hop length.
const MP_REACH_HEADER_LEN: usize = 4;

/// Largest attribute value the one-octet attribute length can describe.
const MAX_SHORT_ATTR_LEN: usize = u8::MAX as usize;

/// The MP_REACH_NLRI value cut into its fields, before any family-specific decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MpReachHeader {
    pub family: AddressFamily,
    pub next_hop: Bytes,
    pub reserved: u8,
    pub nlri: Bytes,
}

/// Split an MP_REACH_NLRI attribute value into its fields.
///
/// <https://datatracker.ietf.org/doc/html/rfc4760#section-3>
/// The attribute is encoded as shown below:
/// ```text
/// +---------------------------------------------------------+
/// | Address Family Identifier (2 octets)                    |
/// +---------------------------------------------------------+
/// | Subsequent Address Family Identifier (1 octet)          |
/// +---------------------------------------------------------+
/// | Length of Next Hop Network Address (1 octet)            |
/// +---------------------------------------------------------+
/// | Network Address of Next Hop (variable)                  |
/// +---------------------------------------------------------+
/// | Reserved (1 octet)                                      |
/// +---------------------------------------------------------+
/// | Network Layer Reachability Information (variable)       |
/// +---------------------------------------------------------+
/// ```
/// The next hop and NLRI are slices of `input`, no bytes are copied.
pub fn split_mp_reach_header(input: &Bytes) -> Result<MpReachHeader, ParserError> {
    if input.len() < MP_REACH_HEADER_LEN {
        return Err(ParserError::attribute_length(
            format!(
                "MP_REACH_NLRI needs at least {} bytes, got {}",
                MP_REACH_HEADER_LEN,
                input.len()
            ),
            input,
        ));
    }

    let mut data = input.clone();
    let to_err = |e: ReadError| ParserError::attribute_length(e.to_string(), input);

    let afi = data.read_u16().map_err(to_err)?;
    let safi = data.read_u8().map_err(to_err)?;
    let next_hop_len = data.read_u8().map_err(to_err)? as usize;

    // next hop plus the reserved byte
    let required = MP_REACH_HEADER_LEN + next_hop_len + 1;
    if input.len() < required {
        return Err(ParserError::attribute_length(
            format!(
                "next hop length {} needs {} bytes, got {}",
                next_hop_len,
                required,
                input.len()
            ),
            input,
        ));
    }

    let next_hop = data.read_n_bytes(next_hop_len).map_err(to_err)?;
    let reserved = data.read_u8().map_err(to_err)?;

    Ok(MpReachHeader {
        family: AddressFamily::from_raw(afi, safi),
        next_hop,
        reserved,
        nlri: data,
    })
}

/// Parse an MP_REACH_NLRI attribute value (the bytes after the attribute header) without
/// ADD-PATH.
pub fn parse_mp_reach_nlri(input: Bytes) -> Result<MpReachAttribute, ParserError> {
    parse_mp_reach_nlri_with(input, false)
}

pub(crate) fn parse_mp_reach_nlri_with(
    input: Bytes,
    add_path: bool,
) -> Result<MpReachAttribute, ParserError> {
    let header = split_mp_reach_header(&input)?;
    if header.reserved != 0 {
        warn!("MP_REACH_NLRI reserved byte not 0: {}", header.reserved);
    }

    let MpReachHeader {
        family,
        next_hop,
        nlri,
        ..
    } = header;

    let (next_hop, nlri) = match (family.afi, family.safi) {
        (Afi::Ipv4, Safi::MplsVpn) => {
            let prefixes = parse_vpn_mpls_nlri(nlri, add_path)?;
            (
                NextHop::Raw(next_hop),
                NlriPayload::Parsed(ParsedNlri::VpnMpls(prefixes)),
            )
        }
        (Afi::Ipv4, Safi::FlowSpec) => {
            let components = parse_flowspec_field(&nlri)?;
            (
                NextHop::Raw(next_hop),
                NlriPayload::Parsed(ParsedNlri::FlowSpec(components)),
            )
        }
        (Afi::Ipv6, Safi::Unicast) => {
            // report the whole attribute value, not only the next hop slice
            let next_hop = parse_ipv6_next_hop(&next_hop).map_err(|e| match e {
                ParserError::AttributeLength { reason, .. } => {
                    ParserError::attribute_length(reason, &input)
                }
                e => e,
            })?;
            let prefixes = parse_ipv6_unicast_nlri(nlri, add_path)?;
            (
                next_hop,
                NlriPayload::Parsed(ParsedNlri::Ipv6Unicast(prefixes)),
            )
        }
        _ => {
            debug!("no NLRI decoder for address family {}, keeping raw bytes", family);
            (NextHop::Raw(next_hop), NlriPayload::Opaque(nlri))
        }
    };

    Ok(MpReachAttribute {
        family,
        next_hop,
        nlri,
    })
}

/// Strip the flow-spec length prefix and decode the rule behind it.
///
/// The prefix width follows the size of the whole NLRI field: 2 octets from
/// [FLOWSPEC_EXTENDED_LENGTH_THRESHOLD](crate::parser::bgp::nlri::flowspec::FLOWSPEC_EXTENDED_LENGTH_THRESHOLD)
/// bytes on, 1 octet below it. The declared length must cover exactly the rest of the field.
fn parse_flowspec_field(nlri: &Bytes) -> Result<Vec<FlowSpecComponent>, ParserError> {
    if nlri.is_empty() {
        return Ok(vec![]);
    }

    let width = length_prefix_width(nlri.len());
    let declared = declared_rule_length(&nlri[..width]);
    let body = &nlri[width..];
    if declared != body.len() {
        return Err(ParserError::invalid_nlri(
            AddressFamily::IPV4_FLOWSPEC,
            format!(
                "declared rule length {} does not match {} remaining bytes",
                declared,
                body.len()
            ),
            nlri,
        ));
    }

    parse_flowspec_components(body).map_err(|e| {
        ParserError::invalid_nlri(AddressFamily::IPV4_FLOWSPEC, e.to_string(), nlri)
    })
}

/// Construct a complete MP_REACH_NLRI attribute: flags, type code, length and value.
///
/// Only IPv4 flow-spec can be constructed. An empty rule means there is nothing to advertise
/// and yields empty bytes rather than an attribute.
pub fn construct_mp_reach_nlri(value: &MpReachAttribute) -> Result<Bytes, ConstructError> {
    match (value.family.afi, value.family.safi) {
        (Afi::Ipv4, Safi::FlowSpec) => construct_flowspec(value),
        (Afi::Ipv4, Safi::MplsVpn) => Err(ConstructError::new(
            ConstructErrorKind::NotSupported,
            "constructing IPv4 VPN-MPLS NLRI is not supported",
            value,
        )),
        _ => Err(ConstructError::new(
            ConstructErrorKind::UnsupportedFamily,
            format!("unsupported address family {}", value.family),
            value,
        )),
    }
}

fn construct_flowspec(value: &MpReachAttribute) -> Result<Bytes, ConstructError> {
    let components = match &value.nlri {
        NlriPayload::Parsed(ParsedNlri::FlowSpec(components)) => components,
        _ => {
            return Err(ConstructError::new(
                ConstructErrorKind::Encoding,
                "flow-spec family requires a flow-spec rule as NLRI",
                value,
            ))
        }
    };

    let nlri = encode_flowspec_nlri(components).map_err(|e| ConstructError::encoding(e, value))?;
    if nlri.is_empty() {
        debug!("empty flow-spec rule, no MP_REACH_NLRI attribute constructed");
        return Ok(Bytes::new());
    }

    let next_hop = encode_next_hop(&value.next_hop);
    let value_len = MP_REACH_HEADER_LEN + next_hop.len() + 1 + nlri.len();
    if value_len > MAX_SHORT_ATTR_LEN {
        return Err(ConstructError::new(
            ConstructErrorKind::ValueTooLong,
            format!(
                "attribute value of {} bytes exceeds {} bytes",
                value_len, MAX_SHORT_ATTR_LEN
            ),
            value,
        ));
    }

    let (afi, safi) = value.family.to_raw();
    let mut bytes = BytesMut::with_capacity(3 + value_len);
    bytes.put_u8(AttrFlags::OPTIONAL.bits());
    bytes.put_u8(AttrType::MP_REACHABLE_NLRI.into());
    bytes.put_u8(value_len as u8);
    bytes.put_u16(afi);
    bytes.put_u8(safi);
    bytes.put_u8(next_hop.len() as u8);
    bytes.put_slice(&next_hop);
    bytes.put_u8(0);
    bytes.put_slice(&nlri);
    Ok(bytes.freeze())
}
