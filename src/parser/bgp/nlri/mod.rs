//! Family-specific NLRI decoders used by the MP_REACH_NLRI dispatcher.
pub mod flowspec;
pub mod ipv6_unicast;
pub mod vpn_mpls;

pub use flowspec::{
    encode_flowspec_nlri, parse_flowspec_components, FLOWSPEC_EXTENDED_LENGTH_THRESHOLD,
};
pub use ipv6_unicast::parse_ipv6_unicast_nlri;
pub use vpn_mpls::parse_vpn_mpls_nlri;
