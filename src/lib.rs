#![deny(unsafe_code)]

mod invoke;
mod request;
mod router;
mod verb;

pub use crate::invoke::{InvokeError, Invoker};
pub use crate::request::{normalize_path, Request};
pub use crate::router::{
    OwnedParams, Params, Resolved, ResolvedTarget, RouteTarget, Router, RouterError,
};
pub use crate::verb::Verb;

#[cfg(feature = "http-router")]
pub use http::Method;

#[cfg(feature = "hyper-service")]
pub mod hyper_service;

#[cfg(feature = "hyper-service")]
pub use crate::hyper_service::{BoxHandler, Handler, RouterService, SharedRouterService};
