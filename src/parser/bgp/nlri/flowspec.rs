use crate::models::*;
use ipnet::{IpNet, Ipv4Net};
use std::net::Ipv4Addr;

/// NLRI fields of this many bytes or more carry a 2-octet length prefix.
pub const FLOWSPEC_EXTENDED_LENGTH_THRESHOLD: usize = 240;

/// Largest rule body the 2-octet length prefix can describe.
const FLOWSPEC_MAX_RULE_LENGTH: usize = 0x0FFF;

/// Width of the flow-spec length prefix for an NLRI field of `nlri_len` total bytes.
pub const fn length_prefix_width(nlri_len: usize) -> usize {
    if nlri_len >= FLOWSPEC_EXTENDED_LENGTH_THRESHOLD {
        2
    } else {
        1
    }
}

/// Rule length declared by a 1- or 2-octet flow-spec length prefix.
pub fn declared_rule_length(prefix: &[u8]) -> usize {
    match prefix {
        [len] => *len as usize,
        [high, low, ..] => ((*high as usize & 0x0F) << 8) | *low as usize,
        [] => 0,
    }
}

/// Parse the components of one IPv4 flow-spec rule (RFC 8955), after its length prefix has
/// been removed.
///
/// Components must appear in strictly ascending type order.
pub fn parse_flowspec_components(data: &[u8]) -> Result<Vec<FlowSpecComponent>, FlowSpecError> {
    let mut offset = 0;
    let mut components = Vec::new();
    let mut last_type = 0u8;

    while offset < data.len() {
        let component_type = data[offset];
        offset += 1;

        // Verify ordering
        if component_type <= last_type {
            return Err(FlowSpecError::InvalidComponentOrder {
                expected_greater_than: last_type,
                found: component_type,
            });
        }
        last_type = component_type;

        let component = match component_type {
            1 => FlowSpecComponent::DestinationPrefix(parse_prefix_component(data, &mut offset)?),
            2 => FlowSpecComponent::SourcePrefix(parse_prefix_component(data, &mut offset)?),
            3 => FlowSpecComponent::IpProtocol(parse_numeric_operators(data, &mut offset)?),
            4 => FlowSpecComponent::Port(parse_numeric_operators(data, &mut offset)?),
            5 => FlowSpecComponent::DestinationPort(parse_numeric_operators(data, &mut offset)?),
            6 => FlowSpecComponent::SourcePort(parse_numeric_operators(data, &mut offset)?),
            7 => FlowSpecComponent::IcmpType(parse_numeric_operators(data, &mut offset)?),
            8 => FlowSpecComponent::IcmpCode(parse_numeric_operators(data, &mut offset)?),
            9 => FlowSpecComponent::TcpFlags(parse_bitmask_operators(data, &mut offset)?),
            10 => FlowSpecComponent::PacketLength(parse_numeric_operators(data, &mut offset)?),
            11 => FlowSpecComponent::Dscp(parse_numeric_operators(data, &mut offset)?),
            12 => FlowSpecComponent::Fragment(parse_bitmask_operators(data, &mut offset)?),
            _ => return Err(FlowSpecError::InvalidComponentType(component_type)),
        };

        components.push(component);
    }

    Ok(components)
}

/// Encode one IPv4 flow-spec rule, length prefix included.
///
/// The prefix is 1 octet when the whole encoded field stays below
/// [FLOWSPEC_EXTENDED_LENGTH_THRESHOLD] bytes and 2 octets (`0xFnnn`) otherwise, so that a
/// decoder choosing the width from the field size reads it back correctly. An empty
/// component list encodes to nothing.
pub fn encode_flowspec_nlri(components: &[FlowSpecComponent]) -> Result<Vec<u8>, FlowSpecError> {
    if components.is_empty() {
        return Ok(Vec::new());
    }

    let mut data = Vec::new();
    let mut last_type = 0u8;

    for component in components {
        let component_type = component.component_type();
        if component_type <= last_type {
            return Err(FlowSpecError::InvalidComponentOrder {
                expected_greater_than: last_type,
                found: component_type,
            });
        }
        last_type = component_type;
        data.push(component_type);

        match component {
            FlowSpecComponent::DestinationPrefix(prefix)
            | FlowSpecComponent::SourcePrefix(prefix) => {
                encode_prefix(prefix, &mut data)?;
            }
            FlowSpecComponent::IpProtocol(ops)
            | FlowSpecComponent::Port(ops)
            | FlowSpecComponent::DestinationPort(ops)
            | FlowSpecComponent::SourcePort(ops)
            | FlowSpecComponent::IcmpType(ops)
            | FlowSpecComponent::IcmpCode(ops)
            | FlowSpecComponent::PacketLength(ops)
            | FlowSpecComponent::Dscp(ops) => {
                encode_numeric_operators(component_type, ops, &mut data)?;
            }
            FlowSpecComponent::TcpFlags(ops) | FlowSpecComponent::Fragment(ops) => {
                encode_bitmask_operators(component_type, ops, &mut data)?;
            }
        }
    }

    if data.len() > FLOWSPEC_MAX_RULE_LENGTH {
        return Err(FlowSpecError::RuleTooLong(data.len()));
    }

    let mut result = Vec::with_capacity(data.len() + 2);
    if length_prefix_width(data.len() + 1) == 1 {
        result.push(data.len() as u8);
    } else {
        result.push(0xF0 | (data.len() >> 8) as u8);
        result.push(data.len() as u8);
    }
    result.extend(data);
    Ok(result)
}

/// Parse prefix component (Types 1 & 2)
fn parse_prefix_component(data: &[u8], offset: &mut usize) -> Result<NetworkPrefix, FlowSpecError> {
    if *offset >= data.len() {
        return Err(FlowSpecError::InsufficientData);
    }

    let prefix_len = data[*offset];
    *offset += 1;

    if prefix_len > 32 {
        return Err(FlowSpecError::InvalidPrefix(format!(
            "IPv4 prefix length {} out of range",
            prefix_len
        )));
    }

    let prefix_bytes = prefix_len.div_ceil(8) as usize;
    if *offset + prefix_bytes > data.len() {
        return Err(FlowSpecError::InsufficientData);
    }

    let mut addr_bytes = [0u8; 4];
    addr_bytes[..prefix_bytes].copy_from_slice(&data[*offset..*offset + prefix_bytes]);
    *offset += prefix_bytes;

    let net = Ipv4Net::new(Ipv4Addr::from(addr_bytes), prefix_len)
        .map_err(|e| FlowSpecError::InvalidPrefix(e.to_string()))?;
    Ok(NetworkPrefix::new(IpNet::V4(net), None))
}

/// Parse an operator/value sequence, ending at the operator with the end-of-list bit.
fn parse_operators<T>(
    data: &[u8],
    offset: &mut usize,
    build: fn(u8, u64) -> Result<T, FlowSpecError>,
) -> Result<Vec<T>, FlowSpecError> {
    let mut operators = Vec::new();

    loop {
        if *offset >= data.len() {
            return Err(FlowSpecError::InsufficientData);
        }

        let operator_byte = data[*offset];
        *offset += 1;

        let value_length = operator_value_length(operator_byte);
        if *offset + value_length > data.len() {
            return Err(FlowSpecError::InsufficientData);
        }

        let value = read_value(&data[*offset..*offset + value_length]);
        *offset += value_length;

        operators.push(build(operator_byte, value)?);

        if operator_byte & 0x80 != 0 {
            break;
        }
    }

    Ok(operators)
}

fn parse_numeric_operators(
    data: &[u8],
    offset: &mut usize,
) -> Result<Vec<NumericOperator>, FlowSpecError> {
    parse_operators(data, offset, NumericOperator::from_byte_and_value)
}

fn parse_bitmask_operators(
    data: &[u8],
    offset: &mut usize,
) -> Result<Vec<BitmaskOperator>, FlowSpecError> {
    parse_operators(data, offset, BitmaskOperator::from_byte_and_value)
}

/// Read value from bytes (big-endian)
fn read_value(bytes: &[u8]) -> u64 {
    let mut value = 0u64;
    for &byte in bytes {
        value = (value << 8) | byte as u64;
    }
    value
}

/// Write value to bytes (big-endian)
fn write_value(value: u64, length: u8, data: &mut Vec<u8>) -> Result<(), FlowSpecError> {
    if length < 8 && value >> (length as u32 * 8) != 0 {
        return Err(FlowSpecError::InvalidValueLength(length));
    }
    for i in (0..length as usize).rev() {
        data.push((value >> (i * 8)) as u8);
    }
    Ok(())
}

fn encode_prefix(prefix: &NetworkPrefix, data: &mut Vec<u8>) -> Result<(), FlowSpecError> {
    let IpNet::V4(net) = prefix.prefix else {
        return Err(FlowSpecError::InvalidPrefix(format!(
            "{} is not an IPv4 prefix",
            prefix.prefix
        )));
    };
    let prefix_len = net.prefix_len();
    data.push(prefix_len);
    data.extend(&net.addr().octets()[..prefix_len.div_ceil(8) as usize]);
    Ok(())
}

// The end-of-list bit is derived from list position, not taken from the operator.
fn encode_numeric_operators(
    component_type: u8,
    operators: &[NumericOperator],
    data: &mut Vec<u8>,
) -> Result<(), FlowSpecError> {
    if operators.is_empty() {
        return Err(FlowSpecError::EmptyOperatorList(component_type));
    }
    for (idx, operator) in operators.iter().enumerate() {
        let byte = operator.to_byte()? & 0x7F;
        let end = if idx + 1 == operators.len() { 0x80 } else { 0 };
        data.push(byte | end);
        write_value(operator.value, operator.value_length, data)?;
    }
    Ok(())
}

fn encode_bitmask_operators(
    component_type: u8,
    operators: &[BitmaskOperator],
    data: &mut Vec<u8>,
) -> Result<(), FlowSpecError> {
    if operators.is_empty() {
        return Err(FlowSpecError::EmptyOperatorList(component_type));
    }
    for (idx, operator) in operators.iter().enumerate() {
        let byte = operator.to_byte()? & 0x7F;
        let end = if idx + 1 == operators.len() { 0x80 } else { 0 };
        data.push(byte | end);
        write_value(operator.bitmask, operator.value_length, data)?;
    }
    Ok(())
}
