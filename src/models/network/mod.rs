//! Common network-related structs.

mod afi;
mod nexthop;
mod prefix;

pub use afi::*;
pub use nexthop::*;
pub use prefix::*;
