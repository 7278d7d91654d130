use gin_router::{BoxHandler, Invoker, OwnedParams, RouteTarget, Router, RouterService};

use std::convert::Infallible as Never;

use hyper::service::make_service_fn;
use hyper::{Body, Request, Response};

async fn not_found(req: Request<Body>, _: OwnedParams) -> Result<Response<Body>, Never> {
    dbg!((req.method(), req.uri().path()));
    let res = Response::builder()
        .status(404)
        .body(Body::from("404 Not Found"))
        .unwrap();
    Ok(res)
}

async fn hello(_: Request<Body>, params: OwnedParams) -> Result<Response<Body>, Never> {
    let name = params.get("name").unwrap();
    Ok(Response::new(Body::from(format!("hello, {}!", name))))
}

async fn show_user(_: Request<Body>, params: OwnedParams) -> Result<Response<Body>, Never> {
    let id = params.get("id").unwrap();
    Ok(Response::new(Body::from(format!("user #{}", id))))
}

#[tokio::main]
async fn main() {
    let mut router: Router<BoxHandler> = Router::new();
    router
        .get("hello/<name>", RouteTarget::Callable(Box::new(hello) as BoxHandler))
        .unwrap()
        .get(r"user/<id:\d+>", RouteTarget::text("UserController|show"))
        .unwrap();

    let mut invoker: Invoker<BoxHandler> = Invoker::new();
    invoker.method("UserController", "show", Box::new(show_user) as BoxHandler);

    let service =
        RouterService::new(router, invoker, Box::new(not_found) as BoxHandler).into_shared();

    let make = make_service_fn(move |_| {
        let new_service = service.clone();
        async move { Ok::<_, Never>(new_service) }
    });

    let addr = "127.0.0.1:3000";

    let server = hyper::Server::bind(&addr.parse().unwrap()).serve(make);

    println!("Server is listening on: http://{}", addr);
    println!("hello: http://{}/hello/world", addr);
    println!("user: http://{}/user/42", addr);
    println!("404: http://{}/other/path", addr);
    println!();

    server.await.unwrap();
}
