//! Contracts implementing access control mechanisms.
pub mod abi;
pub mod accessable;
pub mod ownable;

pub use accessable::{Accessable, Error as AccessableError, IAccessable};
pub use ownable::{Error as OwnableError, IOwnable, Ownable};
