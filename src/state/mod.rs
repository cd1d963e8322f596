//! Per-candidate state: identity, the routed-label cache, and the
//! columns that hold them.

#[doc(hidden)]
pub mod entity;
#[doc(hidden)]
pub mod ident;

#[cfg(test)]
mod test;

#[doc(inline)]
pub use entity::*;
#[doc(inline)]
pub use ident::*;
