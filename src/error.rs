/*!
error module defines the error types used in mpreach-codec.
*/
use crate::models::{AddressFamily, FlowSpecError, MpReachAttribute};
use bytes::Bytes;
use num_enum::{FromPrimitive, IntoPrimitive};
use std::fmt::{Display, Formatter};
use thiserror::Error;

/// Errors raised while decoding an MP_REACH_NLRI attribute value.
///
/// Every variant carries the bytes that were being decoded so the caller can log them or
/// attach them to a NOTIFICATION.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParserError {
    /// The value is too short for the fields it declares, or a next hop has a length the
    /// address family does not allow.
    ///
    /// ## Occurs during:
    ///  - Splitting the attribute header
    ///  - Decoding an IPv6 unicast next hop
    #[error("attribute length error: {reason}")]
    AttributeLength { reason: String, bytes: Bytes },
    /// A family sub-decoder rejected the NLRI bytes.
    ///
    /// ## Occurs during:
    ///  - Decoding VPN-MPLS, flow-spec or IPv6 unicast NLRI
    ///  - Checking the declared flow-spec rule length
    #[error("invalid NLRI for address family {family}: {reason}")]
    InvalidNlri {
        family: AddressFamily,
        reason: String,
        bytes: Bytes,
    },
}

impl ParserError {
    pub(crate) fn attribute_length<S: Into<String>>(reason: S, bytes: &Bytes) -> Self {
        ParserError::AttributeLength {
            reason: reason.into(),
            bytes: bytes.clone(),
        }
    }

    pub(crate) fn invalid_nlri<S: Into<String>>(
        family: AddressFamily,
        reason: S,
        bytes: &Bytes,
    ) -> Self {
        ParserError::InvalidNlri {
            family,
            reason: reason.into(),
            bytes: bytes.clone(),
        }
    }

    /// UPDATE Message Error subcode a session should report for this error.
    pub const fn update_error(&self) -> UpdateError {
        match self {
            ParserError::AttributeLength { .. } => UpdateError::ATTRIBUTE_LENGTH_ERROR,
            ParserError::InvalidNlri { .. } => UpdateError::OPTIONAL_ATTRIBUTE_ERROR,
        }
    }

    /// The bytes that failed to decode.
    pub fn bytes(&self) -> &Bytes {
        match self {
            ParserError::AttributeLength { bytes, .. } => bytes,
            ParserError::InvalidNlri { bytes, .. } => bytes,
        }
    }
}

/// UPDATE Message Error subcodes relevant to MP_REACH_NLRI decoding.
///
/// <https://www.iana.org/assignments/bgp-parameters/bgp-parameters.xhtml#bgp-parameters-7>
#[allow(non_camel_case_types)]
#[derive(Debug, FromPrimitive, IntoPrimitive, PartialEq, Eq, Hash, Copy, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum UpdateError {
    ATTRIBUTE_LENGTH_ERROR = 5,
    OPTIONAL_ATTRIBUTE_ERROR = 9,
    #[num_enum(catch_all)]
    Unknown(u8),
}

/// Why an attribute could not be constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConstructErrorKind {
    /// The (AFI, SAFI) pair has no encoder.
    UnsupportedFamily,
    /// The family is recognized but its encoder is not implemented.
    NotSupported,
    /// A sub-encoder rejected the value.
    Encoding,
    /// The attribute value does not fit the one-octet length field.
    ValueTooLong,
}

impl Display for ConstructErrorKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ConstructErrorKind::UnsupportedFamily => "unsupported family",
            ConstructErrorKind::NotSupported => "not supported",
            ConstructErrorKind::Encoding => "encoding failure",
            ConstructErrorKind::ValueTooLong => "value too long",
        };
        write!(f, "{}", name)
    }
}

/// Error raised while constructing an MP_REACH_NLRI attribute.
///
/// Carries a human-readable reason and the value that could not be encoded.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("failed to construct MP_REACH_NLRI ({kind}): {reason}")]
pub struct ConstructError {
    pub kind: ConstructErrorKind,
    pub reason: String,
    pub value: Box<MpReachAttribute>,
}

impl ConstructError {
    pub(crate) fn new<S: Into<String>>(
        kind: ConstructErrorKind,
        reason: S,
        value: &MpReachAttribute,
    ) -> Self {
        ConstructError {
            kind,
            reason: reason.into(),
            value: Box::new(value.clone()),
        }
    }

    pub(crate) fn encoding(error: FlowSpecError, value: &MpReachAttribute) -> Self {
        ConstructError::new(
            ConstructErrorKind::Encoding,
            format!("failed to construct attributes: {}", error),
            value,
        )
    }
}
