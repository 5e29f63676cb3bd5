use crate::models::*;
use crate::parser::{ReadError, ReadUtils};
use crate::ParserError;
use bytes::{Buf, Bytes};

/// Size in bits of one MPLS label entry in labeled NLRI.
const LABEL_BITS: u16 = 24;
/// Size in bits of a route distinguisher.
const RD_BITS: u16 = 64;

/// Parse the IPv4 MPLS-labeled VPN NLRI field (SAFI 128).
///
/// <https://datatracker.ietf.org/doc/html/rfc8277#section-2.2>
/// ```text
/// +---------------------------+
/// |   Length (1 octet)        |
/// +---------------------------+
/// |   Label (3 octets)        |
/// +---------------------------+
/// ...........................
/// +---------------------------+
/// |   Route Distinguisher     |
/// +---------------------------+
/// |   Prefix (variable)       |
/// +---------------------------+
/// ```
/// Length counts labels, route distinguisher and prefix, in bits. Labels are read until the
/// bottom-of-stack bit is set.
pub fn parse_vpn_mpls_nlri(
    input: Bytes,
    add_path: bool,
) -> Result<Vec<LabeledVpnPrefix>, ParserError> {
    read_entries(input.clone(), add_path).map_err(|e| {
        ParserError::invalid_nlri(AddressFamily::IPV4_MPLS_VPN, e.to_string(), &input)
    })
}

fn read_entries(mut input: Bytes, add_path: bool) -> Result<Vec<LabeledVpnPrefix>, ReadError> {
    let mut entries = vec![];
    while input.has_remaining() {
        let path_id = match add_path {
            true => Some(input.read_u32()?),
            false => None,
        };
        let mut bits_left = input.read_u8()? as u16;

        let mut labels = MplsLabelStack::new();
        loop {
            if bits_left < LABEL_BITS {
                return Err(ReadError::Malformed(format!(
                    "label stack exceeds NLRI length after {} labels",
                    labels.len()
                )));
            }
            let label = input.read_mpls_label()?;
            bits_left -= LABEL_BITS;
            labels.push(label);
            if label.bottom_of_stack {
                break;
            }
        }

        if bits_left < RD_BITS {
            return Err(ReadError::Malformed(format!(
                "{} bits left, too short for a route distinguisher",
                bits_left
            )));
        }
        let rd = input.read_route_distinguisher()?;
        bits_left -= RD_BITS;

        let prefix = input.read_ipv4_prefix_bits(bits_left as u8)?;
        entries.push(LabeledVpnPrefix {
            labels,
            rd,
            prefix,
            path_id,
        });
    }
    Ok(entries)
}
