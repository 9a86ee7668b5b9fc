//! Pure value types passed between the [`Storefront`](crate::storefront::Storefront)
//! and its collaborators.
//!
//! Nothing in here performs I/O. Every value is created per call and dropped
//! when the call returns.

pub mod cart;
pub mod email;
pub mod money;
pub mod order;
pub mod security;
pub mod shipping;

pub use cart::*;
pub use email::*;
pub use money::*;
pub use order::*;
pub use security::*;
pub use shipping::*;
