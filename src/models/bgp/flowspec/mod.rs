//! IPv4 flow specification rules (RFC 8955).
use crate::models::*;
use thiserror::Error;

pub mod operators;

pub use operators::*;

/// Individual Flow-Spec component types as defined in RFC 8955.
///
/// A flow-spec rule is the ordered list of its components; on the wire the components must
/// appear in strictly ascending [FlowSpecComponent::component_type] order.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FlowSpecComponent {
    /// Type 1: Destination Prefix
    DestinationPrefix(NetworkPrefix),
    /// Type 2: Source Prefix
    SourcePrefix(NetworkPrefix),
    /// Type 3: IP Protocol
    IpProtocol(Vec<NumericOperator>),
    /// Type 4: Port (source OR destination)
    Port(Vec<NumericOperator>),
    /// Type 5: Destination Port
    DestinationPort(Vec<NumericOperator>),
    /// Type 6: Source Port
    SourcePort(Vec<NumericOperator>),
    /// Type 7: ICMP Type
    IcmpType(Vec<NumericOperator>),
    /// Type 8: ICMP Code
    IcmpCode(Vec<NumericOperator>),
    /// Type 9: TCP Flags
    TcpFlags(Vec<BitmaskOperator>),
    /// Type 10: Packet Length
    PacketLength(Vec<NumericOperator>),
    /// Type 11: DSCP
    Dscp(Vec<NumericOperator>),
    /// Type 12: Fragment
    Fragment(Vec<BitmaskOperator>),
}

impl FlowSpecComponent {
    /// Get the numeric type identifier for this component
    pub const fn component_type(&self) -> u8 {
        match self {
            FlowSpecComponent::DestinationPrefix(_) => 1,
            FlowSpecComponent::SourcePrefix(_) => 2,
            FlowSpecComponent::IpProtocol(_) => 3,
            FlowSpecComponent::Port(_) => 4,
            FlowSpecComponent::DestinationPort(_) => 5,
            FlowSpecComponent::SourcePort(_) => 6,
            FlowSpecComponent::IcmpType(_) => 7,
            FlowSpecComponent::IcmpCode(_) => 8,
            FlowSpecComponent::TcpFlags(_) => 9,
            FlowSpecComponent::PacketLength(_) => 10,
            FlowSpecComponent::Dscp(_) => 11,
            FlowSpecComponent::Fragment(_) => 12,
        }
    }
}

/// Flow-Spec parsing and encoding errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FlowSpecError {
    /// Components not in ascending type order
    #[error("invalid component order: expected type > {expected_greater_than}, but found {found}")]
    InvalidComponentOrder { expected_greater_than: u8, found: u8 },
    /// Invalid operator encoding
    #[error("invalid operator: 0x{0:02X}")]
    InvalidOperator(u8),
    /// Invalid or unsupported component type
    #[error("invalid component type: {0}")]
    InvalidComponentType(u8),
    /// Insufficient data for parsing
    #[error("insufficient data for parsing")]
    InsufficientData,
    /// Invalid prefix encoding, or a non-IPv4 prefix in an IPv4 rule
    #[error("invalid prefix: {0}")]
    InvalidPrefix(String),
    /// Operator value length other than 1, 2, 4 or 8 octets
    #[error("invalid value length: {0}")]
    InvalidValueLength(u8),
    /// Operator list without any operator
    #[error("component type {0} has no operators")]
    EmptyOperatorList(u8),
    /// Encoded rule does not fit the 12-bit length field
    #[error("encoded rule length {0} exceeds the maximum of 4095 octets")]
    RuleTooLong(usize),
}
