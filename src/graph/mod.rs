//! The road-network seam the expander routes over, and a bundled
//! in-memory implementation.

#[doc(hidden)]
pub mod location;
#[doc(hidden)]
pub mod network;
#[doc(hidden)]
pub mod road;


#[doc(inline)]
pub use location::*;
#[doc(inline)]
pub use network::*;
#[doc(inline)]
pub use road::*;
