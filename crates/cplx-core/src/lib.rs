#![deny(missing_docs)]
#![doc = "Shared error, canonical serialization and digest helpers for the cplx workspace."]

pub mod errors;
pub mod hash;
pub mod serde;

pub use errors::{CplxError, ErrorInfo};
pub use hash::stable_hash_string;
pub use self::serde::{from_json_slice, to_canonical_json_bytes, to_pretty_json_bytes};
