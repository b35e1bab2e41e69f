//! [`hyper`] adapter: dispatches requests through an [`HttpRouter`].
//!
//! [`HttpRouter`]: crate::HttpRouter

#![forbid(unsafe_code)]

mod handler;
mod service;

pub use self::handler::{not_found, BoxHandler, Handler};
pub use self::service::RouterService;

use std::error::Error as StdError;
use std::future::Future;
use std::pin::Pin;

use bytes::Bytes;
use http_body_util::Full;

pub type Response = http::Response<Full<Bytes>>;

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;
pub type BoxError = Box<dyn StdError + Send + Sync>;
