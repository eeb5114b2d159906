//! Persistent typed key-value storage.
pub mod abi;
pub mod eternal_storage;

pub use eternal_storage::{
    Error as EternalStorageError, EternalStorage, IEternalStorage, ValueKind,
};
