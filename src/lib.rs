//! A segment trie URL router.
//!
//! Patterns are `/`-separated; a segment written `:name` or `{name}` binds
//! any single request segment to `name`. Literal matching is
//! case-insensitive, bound values keep the request's casing. When several
//! patterns match a path, the longest wins, then the one whose first
//! differing segment is a literal, then the earliest registered.
//!
//! ```
//! use route_trie::{Params, Router};
//!
//! let router: Router<u32> = Router::new(404);
//! router.add("/users/new", 1).add("/users/:id", 2);
//!
//! let mut params = Params::new();
//! assert_eq!(router.find("/Users/New", &mut params), (1, 2));
//! assert_eq!(router.find("/users/ABC", &mut params), (2, 2));
//! assert_eq!(params.get("id"), Some("ABC"));
//! assert_eq!(router.find("/nothing/here", &mut params).0, 404);
//! ```

#![deny(unsafe_code)]

pub mod path;

mod router;
mod strmap;

pub use crate::router::{ParamError, ParamSink, Params, Pattern, Router, Segment};

#[cfg(feature = "http-router")]
pub mod http_router;

#[cfg(feature = "http-router")]
pub use crate::http_router::{HttpRouter, Method};

#[cfg(feature = "hyper-service")]
pub mod hyper_service;
