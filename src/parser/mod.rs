/*!
parser module maintains the decoding and encoding functions for MP_REACH_NLRI attribute values.
*/
pub mod bgp;
pub(crate) mod utils;

pub(crate) use self::utils::*;

pub use crate::error::{ConstructError, ConstructErrorKind, ParserError, UpdateError};
pub use bgp::attributes::{split_mp_reach_header, MpReachHeader};
pub use bgp::{construct_mp_reach_nlri, parse_mp_reach_nlri, MpReachParser};
