mod attr_03_next_hop;
mod attr_14_mp_reach_nlri;

use bytes::Bytes;
use log::debug;

use crate::error::ParserError;
use crate::models::*;

pub use attr_03_next_hop::{encode_next_hop, parse_ipv6_next_hop};
pub use attr_14_mp_reach_nlri::{
    construct_mp_reach_nlri, parse_mp_reach_nlri, split_mp_reach_header, MpReachHeader,
};

/// MP_REACH_NLRI parser carrying the session options that change how NLRI are read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MpReachParser {
    additional_paths: bool,
}

impl MpReachParser {
    pub fn new(has_add_path: bool) -> MpReachParser {
        MpReachParser {
            additional_paths: has_add_path,
        }
    }

    /// Whether NLRI entries are expected to carry an ADD-PATH path identifier (RFC 7911).
    pub const fn additional_paths(&self) -> bool {
        self.additional_paths
    }

    /// Parse the value of an MP_REACH_NLRI attribute.
    ///
    /// `data` holds the attribute value only; flags, type code and length have already been
    /// consumed by the caller.
    pub fn parse(&self, data: Bytes) -> Result<MpReachAttribute, ParserError> {
        debug!(
            "parsing MP_REACH_NLRI: length -- {}, add-path -- {}",
            data.len(),
            self.additional_paths
        );
        attr_14_mp_reach_nlri::parse_mp_reach_nlri_with(data, self.additional_paths)
    }
}
