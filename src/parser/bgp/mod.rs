/*!
Provides parsing of the BGP MP_REACH_NLRI attribute and the NLRI it carries.
*/
pub mod attributes;
pub mod nlri;

pub use attributes::{construct_mp_reach_nlri, parse_mp_reach_nlri, MpReachParser};
