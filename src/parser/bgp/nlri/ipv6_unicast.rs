use crate::models::*;
use crate::parser::{ReadError, ReadUtils};
use crate::ParserError;
use bytes::{Buf, Bytes};
use ipnet::IpNet;

/// Parse the IPv6 unicast NLRI field into a list of prefixes.
///
/// Each entry is `[path id (4, ADD-PATH only)] length-in-bits prefix-bytes`, as in RFC 4760
/// section 5.
pub fn parse_ipv6_unicast_nlri(
    input: Bytes,
    add_path: bool,
) -> Result<Vec<NetworkPrefix>, ParserError> {
    read_prefixes(input.clone(), add_path).map_err(|e| {
        ParserError::invalid_nlri(AddressFamily::IPV6_UNICAST, e.to_string(), &input)
    })
}

fn read_prefixes(mut input: Bytes, add_path: bool) -> Result<Vec<NetworkPrefix>, ReadError> {
    let mut prefixes = vec![];
    while input.has_remaining() {
        let path_id = match add_path {
            true => Some(input.read_u32()?),
            false => None,
        };
        let bit_len = input.read_u8()?;
        let prefix = input.read_ipv6_prefix_bits(bit_len)?;
        prefixes.push(NetworkPrefix::new(IpNet::V6(prefix), path_id));
    }
    Ok(prefixes)
}
