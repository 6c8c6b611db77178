use actix_web::{
  body::MessageBody,
  dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
  Error,
  HttpMessage,
};
use core::future::Ready;
use futures_util::future::LocalBoxFuture;
use quill_api_common::context::QuillContext;
use quill_db_schema::newtypes::PersonId;
use quill_db_views::structs::LocalUserView;
use quill_utils::{claims::Claims, error::QuillResult};
use std::{future::ready, rc::Rc};

static AUTH_COOKIE_NAME: &str = "auth";

#[derive(Clone)]
pub struct SessionMiddleware {
  context: QuillContext,
}

impl SessionMiddleware {
  pub fn new(context: QuillContext) -> Self {
    SessionMiddleware { context }
  }
}

impl<S, B> Transform<S, ServiceRequest> for SessionMiddleware
where
  S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
  S::Future: 'static,
  B: MessageBody + 'static,
{
  type Response = ServiceResponse<B>;
  type Error = Error;
  type Transform = SessionService<S>;
  type InitError = ();
  type Future = Ready<Result<Self::Transform, Self::InitError>>;

  fn new_transform(&self, service: S) -> Self::Future {
    ready(Ok(SessionService {
      service: Rc::new(service),
      context: self.context.clone(),
    }))
  }
}

pub struct SessionService<S> {
  service: Rc<S>,
  context: QuillContext,
}

impl<S, B> Service<ServiceRequest> for SessionService<S>
where
  S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
  S::Future: 'static,
  B: 'static,
{
  type Response = ServiceResponse<B>;
  type Error = Error;
  type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

  forward_ready!(service);

  fn call(&self, req: ServiceRequest) -> Self::Future {
    let svc = self.service.clone();
    let context = self.context.clone();

    Box::pin(async move {
      // Try reading the token from the auth header, then the auth cookie
      let auth_header = req
        .headers()
        .get(AUTH_COOKIE_NAME)
        .and_then(|h| h.to_str().ok());
      let jwt = if let Some(a) = auth_header {
        Some(a.to_string())
      } else {
        req.cookie(AUTH_COOKIE_NAME).map(|c| c.value().to_string())
      };

      if let Some(jwt) = &jwt {
        // An invalid token is treated as anonymous, not as an error; the
        // read-only pages still work
        let local_user_view = local_user_view_from_jwt(jwt, &context).await.ok();
        if let Some(local_user_view) = local_user_view {
          req.extensions_mut().insert(local_user_view);
        }
      }

      svc.call(req).await
    })
  }
}

#[tracing::instrument(skip_all)]
async fn local_user_view_from_jwt(
  jwt: &str,
  context: &QuillContext,
) -> QuillResult<LocalUserView> {
  let claims = Claims::decode(jwt)?.claims;
  let person_id = PersonId(claims.sub);
  let local_user_view = LocalUserView::read(&mut context.pool(), person_id).await?;
  Ok(local_user_view)
}

#[cfg(test)]
mod tests {
  #![allow(clippy::unwrap_used)]

  use super::*;
  use actix_web::{http::header::CACHE_CONTROL, test, web, App, HttpResponse};
  use diesel_async::pooled_connection::{deadpool::Pool, AsyncDieselConnectionManager};
  use quill_db_schema::utils::ActualDbPool;

  // Nothing connects until a handler asks the pool for a connection
  fn unconnected_context() -> QuillContext {
    let manager = AsyncDieselConnectionManager::new("postgres://localhost/unused");
    let pool: ActualDbPool = Pool::builder(manager).max_size(1).build().unwrap();
    QuillContext::create(pool)
  }

  #[actix_web::test]
  async fn test_anonymous_requests_pass_through_untouched() {
    let app = test::init_service(
      App::new()
        .wrap(SessionMiddleware::new(unconnected_context()))
        .route("/", web::get().to(HttpResponse::Ok)),
    )
    .await;

    let res = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
    assert!(res.status().is_success());
    assert!(res.headers().get(CACHE_CONTROL).is_none());
  }
}
