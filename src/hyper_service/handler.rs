use super::{BoxError, BoxFuture, Response};
use crate::router::Params;

use std::convert::Infallible;
use std::error::Error as StdError;
use std::future::{ready, Future, Ready};
use std::sync::Arc;

use http::{Request, StatusCode};

pub trait Handler<B> {
    fn call(&self, req: Request<B>, params: Params) -> BoxFuture<'static, Result<Response, BoxError>>;
}

pub type BoxHandler<B> = Arc<dyn Handler<B> + Send + Sync>;

impl<B, F, E, Fut> Handler<B> for F
where
    F: Fn(Request<B>, Params) -> Fut,
    E: StdError + Send + Sync + 'static,
    Fut: Future<Output = Result<Response, E>> + Send + 'static,
{
    fn call(&self, req: Request<B>, params: Params) -> BoxFuture<'static, Result<Response, BoxError>> {
        let fut = (self)(req, params);
        Box::pin(async move {
            match fut.await {
                Ok(r) => Ok(r),
                Err(e) => Err(Box::new(e) as BoxError),
            }
        })
    }
}

/// Plain `404 Not Found` handler.
pub fn not_found<B>(_: Request<B>, _: Params) -> Ready<Result<Response, Infallible>> {
    let mut res = Response::new("404 Not Found".into());
    *res.status_mut() = StatusCode::NOT_FOUND;
    ready(Ok(res))
}
