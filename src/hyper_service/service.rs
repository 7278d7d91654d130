use super::handler::{BoxHandler, Handler};
use super::{BoxError, BoxFuture, Request, Response};

use crate::invoke::Invoker;
use crate::request::normalize_path;
use crate::router::{OwnedParams, Router};

use std::sync::Arc;
use std::task::{Context, Poll};

use hyper::service::Service;

/// Routes each request through a rule table and an invoker registry. Any
/// resolution or invocation failure falls through to `default`, normally a
/// 404 responder.
pub struct RouterService<H = BoxHandler> {
    router: Router<H>,
    invoker: Invoker<H>,
    default: H,
}

impl<H> RouterService<H> {
    pub fn new(router: Router<H>, invoker: Invoker<H>, default: H) -> Self {
        Self {
            router,
            invoker,
            default,
        }
    }

    pub fn into_shared(self) -> SharedRouterService<H> {
        SharedRouterService(Arc::new(self))
    }
}

impl<H> RouterService<H>
where
    H: Handler + Send + Sync,
{
    fn respond(&self, req: Request) -> BoxFuture<'static, Result<Response, BoxError>> {
        let path = normalize_path(req.uri().path());
        let method = req.method().as_str();

        let (handler, params) = match self.router.resolve(method, &path) {
            Some(resolved) => match self.invoker.lookup(&resolved.target) {
                Ok(h) => (h, OwnedParams::new(&path, &resolved.params)),
                Err(_) => (&self.default, OwnedParams::empty()),
            },
            None => (&self.default, OwnedParams::empty()),
        };

        handler.call(req, params)
    }
}

impl<H> Service<Request> for RouterService<H>
where
    H: Handler + Send + Sync,
{
    type Response = Response;
    type Error = BoxError;
    type Future = BoxFuture<'static, Result<Response, BoxError>>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: Request) -> Self::Future {
        self.respond(req)
    }
}

/// Cheaply clonable wrapper so one router can serve every connection.
pub struct SharedRouterService<H = BoxHandler>(Arc<RouterService<H>>);

impl<H> Clone for SharedRouterService<H> {
    fn clone(&self) -> Self {
        Self(Arc::clone(&self.0))
    }
}

impl<H> Service<Request> for SharedRouterService<H>
where
    H: Handler + Send + Sync,
{
    type Response = Response;
    type Error = BoxError;
    type Future = BoxFuture<'static, Result<Response, BoxError>>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: Request) -> Self::Future {
        self.0.respond(req)
    }
}
