use super::handler::{BoxHandler, Handler};
use super::{BoxError, BoxFuture, Response};
use crate::http_router::{HttpRouter, Method};
use crate::router::Params;

use std::sync::Arc;

use http::Request;
use hyper::service::Service;

/// Cheaply cloneable [`Service`] over a shared [`HttpRouter`].
pub struct RouterService<B> {
    router: Arc<HttpRouter<BoxHandler<B>>>,
}

impl<B> Clone for RouterService<B> {
    fn clone(&self) -> Self {
        Self {
            router: Arc::clone(&self.router),
        }
    }
}

impl<B> Service<Request<B>> for RouterService<B> {
    type Response = Response;
    type Error = BoxError;
    type Future = BoxFuture<'static, Result<Response, BoxError>>;

    fn call(&self, req: Request<B>) -> Self::Future {
        let mut params = Params::new();
        let (handler, _) = self
            .router
            .find(req.method(), req.uri().path(), &mut params);
        Handler::call(&*handler, req, params)
    }
}

impl<B> RouterService<B> {
    pub fn new(router: HttpRouter<BoxHandler<B>>) -> Self {
        Self::from_shared(Arc::new(router))
    }

    /// Serves a router that is still reachable elsewhere, e.g. to keep
    /// registering routes after the server started.
    pub fn from_shared(router: Arc<HttpRouter<BoxHandler<B>>>) -> Self {
        Self { router }
    }

    pub fn router(&self) -> &HttpRouter<BoxHandler<B>> {
        &self.router
    }
}

impl<B> HttpRouter<BoxHandler<B>> {
    /// Router whose unmatched requests go to `fallback`.
    pub fn with_fallback(fallback: impl Handler<B> + Send + Sync + 'static) -> Self {
        Self::new(Arc::new(fallback))
    }

    pub fn route(
        &self,
        method: Method,
        pattern: &str,
        h: impl Handler<B> + Send + Sync + 'static,
    ) -> &Self {
        self.add(method, pattern, Arc::new(h))
    }

    pub fn into_service(self) -> RouterService<B> {
        RouterService::new(self)
    }
}

macro_rules! define_method {
    ($name:tt, $method:tt) => {
        pub fn $name(&self, pattern: &str, h: impl Handler<B> + Send + Sync + 'static) -> &Self {
            self.route(Method::$method, pattern, h)
        }
    };
}

impl<B> HttpRouter<BoxHandler<B>> {
    define_method!(get, GET);
    define_method!(post, POST);
    define_method!(put, PUT);
    define_method!(delete, DELETE);
    define_method!(head, HEAD);
    define_method!(options, OPTIONS);
    define_method!(connect, CONNECT);
    define_method!(patch, PATCH);
    define_method!(trace, TRACE);
}
