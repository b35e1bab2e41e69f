use crate::router::{ParamSink, Router};

use std::collections::HashMap;

pub use http::Method;
use parking_lot::RwLock;

/// One [`Router`] per HTTP method, sharing a default handler.
///
/// Methods are only used as keys; any method the caller supplies, standard
/// or extension, gets its own trie.
#[derive(Debug)]
pub struct HttpRouter<H> {
    method_map: RwLock<HashMap<Method, Router<H>>>,
    default: H,
}

impl<H: Clone> HttpRouter<H> {
    pub fn new(default: H) -> Self {
        Self {
            method_map: RwLock::new(HashMap::new()),
            default,
        }
    }

    pub fn add(&self, method: Method, pattern: &str, handler: H) -> &Self {
        let mut map = self.method_map.write();
        map.entry(method)
            .or_insert_with(|| Router::new(self.default.clone()))
            .add(pattern, handler);
        self
    }

    /// Looks up `path` in the trie of `method`.
    ///
    /// An unknown method yields the default handler with zero matched
    /// segments.
    pub fn find<S>(&self, method: &Method, path: &str, sink: &mut S) -> (H, usize)
    where
        S: ParamSink + ?Sized,
    {
        self.find_with(method, path, sink, |h, n| (h.clone(), n))
    }

    pub fn find_with<S, F, R>(&self, method: &Method, path: &str, sink: &mut S, f: F) -> R
    where
        S: ParamSink + ?Sized,
        F: FnOnce(&H, usize) -> R,
    {
        let map = self.method_map.read();
        match map.get(method) {
            Some(router) => router.find_with(path, sink, f),
            None => f(&self.default, 0),
        }
    }

    /// Registered `(method, pattern)` pairs, grouped by method.
    pub fn routes(&self) -> Vec<(Method, String)> {
        let map = self.method_map.read();
        let mut routes: Vec<(Method, String)> = map
            .iter()
            .flat_map(|(m, r)| r.routes().into_iter().map(move |p| (m.clone(), p)))
            .collect();
        routes.sort_by(|a, b| a.0.as_str().cmp(b.0.as_str()));
        routes
    }

    pub fn default_handler(&self) -> &H {
        &self.default
    }
}

#[macro_export]
macro_rules! http_router {
    {$($method:ident $pattern:expr => $data:expr),+ ; _ => $default:expr} => {{
        let __router = $crate::http_router::HttpRouter::new($default);
        $(__router.add($crate::http_router::Method::$method, $pattern, $data);)+
        __router
    }};
}
