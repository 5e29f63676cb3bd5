use crate::models::*;
use crate::parser::{ReadError, ReadUtils};
use crate::ParserError;
use bytes::{Bytes, BytesMut};
use log::warn;
use std::net::IpAddr;

/// Decode the next hop of an IPv6 unicast MP_REACH_NLRI attribute.
///
/// RFC 2545: the Length of Next Hop Network Address is 16 when only a global address is
/// present, or 32 if a link-local address follows it. Any other length is an attribute
/// length error.
pub fn parse_ipv6_next_hop(input: &Bytes) -> Result<NextHop, ParserError> {
    let mut data = input.clone();
    let to_err = |e: ReadError| ParserError::attribute_length(format!("IPv6 next hop: {}", e), input);

    match input.len() {
        16 => Ok(NextHop::ipv6(data.read_ipv6_address().map_err(to_err)?, None)),
        32 => {
            let global = data.read_ipv6_address().map_err(to_err)?;
            let link_local = data.read_ipv6_address().map_err(to_err)?;
            Ok(NextHop::ipv6(global, Some(link_local)))
        }
        v => Err(ParserError::attribute_length(
            format!("invalid IPv6 next hop length {}, expected 16 or 32", v),
            input,
        )),
    }
}

/// Encode a next hop into its wire bytes.
///
/// A textual address that does not parse yields an empty next hop instead of an error.
pub fn encode_next_hop(next_hop: &NextHop) -> Bytes {
    match next_hop {
        NextHop::Raw(bytes) => bytes.clone(),
        NextHop::Ipv6 { global, link_local } => {
            let mut output = BytesMut::with_capacity(32);
            output.extend_from_slice(&global.octets());
            if let Some(link_local) = link_local {
                output.extend_from_slice(&link_local.octets());
            }
            output.freeze()
        }
        NextHop::Textual(text) => match text.trim().parse::<IpAddr>() {
            Ok(IpAddr::V4(addr)) => Bytes::copy_from_slice(&addr.octets()),
            Ok(IpAddr::V6(addr)) => Bytes::copy_from_slice(&addr.octets()),
            Err(_) => {
                warn!("cannot parse next hop address '{}', encoding empty next hop", text);
                Bytes::new()
            }
        },
    }
}
