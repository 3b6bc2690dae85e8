//! CENNZnut: a compact binary certificate for delegating permissions.
//!
//! A certificate lists the runtime modules (and their methods) and the
//! contract addresses its holder may use, each with an optional block
//! cooldown. This crate decodes and encodes the versioned wire format and
//! answers permission queries against a decoded certificate. Signing and
//! signature checks belong to the envelope that carries these bytes.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌─────────────┐
//! │  types.rs   │◀────│  binary/     │     │  verify.rs  │
//! │ (Cennznut,  │     │ (decode,     │     │ (get_*,     │
//! │  Module,    │     │  encode)     │     │  verify_*,  │
//! │  Method)    │────▶│              │     │  validate_*)│
//! └─────────────┘     └──────────────┘     └─────────────┘
//!        │                   │                    │
//!        ▼                   ▼                    ▼
//! ┌─────────────────────────────────────────────────────┐
//! │                      error.rs                        │
//! │        (CodecError, ValidationErr, EntryKind)        │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use cennznut::{Cennznut, Method, Module};
//!
//! let cennznut = Cennznut::builder()
//!     .module(Module::new("generic_asset").method(Method::new("transfer")))
//!     .build()
//!     .unwrap();
//!
//! let bytes = cennznut.encode().unwrap();
//! let decoded = Cennznut::decode(&bytes).unwrap();
//! assert!(decoded.verify_method("generic_asset", "transfer", None));
//! assert!(!decoded.verify_method("generic_asset", "burn", None));
//! ```

pub mod binary;
pub mod error;
mod types;
mod verify;

pub use binary::{decode, encode, encoded_len};
pub use error::{CodecError, Domain, EntryKind, ValidationErr};
pub use types::{
    Cennznut, CennznutBuilder, ContractAddress, ContractPermission, Method, MethodName, Module,
    ModuleName, WILDCARD, WILDCARD_ADDRESS,
};
pub use verify::BlockUsage;
