pub mod api_routes_http;
pub mod session_middleware;

use crate::session_middleware::SessionMiddleware;
use actix_web::{web::Data, App, HttpServer};
use quill_api_common::context::QuillContext;
use quill_db_schema::utils::build_db_pool;
use quill_utils::{error::QuillResult, settings::SETTINGS};
use tracing_actix_web::TracingLogger;

pub async fn start_quill_server() -> QuillResult<()> {
  let settings = SETTINGS.to_owned();

  let pool = build_db_pool().await?;
  let context = QuillContext::create(pool);

  tracing::info!(
    "Starting http server at {}:{}",
    settings.bind(),
    settings.port()
  );

  HttpServer::new(move || {
    let context = context.clone();
    App::new()
      .wrap(TracingLogger::default())
      .app_data(Data::new(context.clone()))
      .wrap(SessionMiddleware::new(context))
      .configure(api_routes_http::config)
  })
  .bind((settings.bind(), settings.port()))?
  .run()
  .await?;

  Ok(())
}
