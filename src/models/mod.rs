/*!
Data structures produced and consumed by the MP_REACH_NLRI codec.

The models are plain values: parsing builds them from attribute bytes, construction turns them
back into bytes, and nothing here keeps state between calls.
*/
pub mod bgp;
pub mod network;

pub use bgp::*;
pub use network::*;
