//! BGP attribute models and family-specific NLRI entries.

pub mod attributes;
pub mod flowspec;
pub mod vpn;

pub use attributes::*;
pub use flowspec::*;
pub use vpn::*;
