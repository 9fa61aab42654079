//! # rpc_struct
//!
//! The in-memory form of an XML-RPC `struct`: named members, each holding an
//! arbitrary value, kept in the order they were first added.
//!
//! An encoder walks the members once, in order, to write one `<member>` per
//! entry; a decoder [`add`](Map::add)s each member as it reads it, so a
//! struct that goes through the wire and back comes out in the same order.
//! In between, a marshaller treats the struct as an ordinary map.
//!
//! ```
//! use rpc_struct::{Map, Value};
//!
//! let mut params = Map::new();
//! params.add("a".to_owned(), Value::from(1)).unwrap();
//! params.add("b".to_owned(), Value::from(2)).unwrap();
//! params.add("c".to_owned(), Value::from(3)).unwrap();
//!
//! // Updating a member keeps its position.
//! params.insert("a".to_owned(), Value::from(9));
//! // Removing a member keeps the others in order.
//! params.remove("b");
//!
//! let members: Vec<_> = params.iter().map(|(k, v)| (k.as_str(), v)).collect();
//! assert_eq!(members, [("a", &Value::from(9)), ("c", &Value::from(3))]);
//! ```
//!
//! # Operating without static types
//!
//! Code that only has dynamic values at hand, such as a reflection-based
//! marshaller, goes through the [`UntypedMap`](untyped::UntypedMap) trait,
//! which accepts keys as [`Value`]s and rejects the ones that are not strings.
//!
//! # Sharing between threads
//!
//! A [`Map`] does no locking. [`Map::sync_root`] hands out a lock that callers
//! may agree to hold around their own sequences of operations; the map never
//! takes it itself.

#![deny(missing_docs)]
#![allow(clippy::missing_errors_doc, clippy::must_use_candidate)]

pub mod error;
pub mod map;
mod sync;
pub mod untyped;
pub mod value;

#[doc(inline)]
pub use crate::error::{Error, Result};
#[doc(inline)]
pub use crate::map::Map;
pub use crate::sync::SyncRoot;
#[doc(inline)]
pub use crate::untyped::UntypedMap;
#[doc(inline)]
pub use crate::value::Value;
