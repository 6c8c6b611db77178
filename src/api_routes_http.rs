use actix_web::{web, HttpResponse};
use quill_api::person::{
  feed::follow_feed,
  follow::follow_author,
  profile::read_profile,
  unfollow::unfollow_author,
};
use quill_api_crud::{
  comment::create::create_comment,
  community::read::get_community,
  post::{
    create::{create_post, get_create_post},
    list::list_posts,
    read::get_post,
    update::{get_edit_post, update_post},
  },
};
use quill_utils::error::{QuillError, QuillErrorType, QuillResult};

/// An unparseable path segment (`/posts/abc/`) is a missing resource, the
/// same outcome as an unknown id.
fn path_config() -> web::PathConfig {
  web::PathConfig::default()
    .error_handler(|_, _| QuillError::from(QuillErrorType::NotFound).into())
}

pub fn config(cfg: &mut web::ServiceConfig) {
  cfg
    .app_data(path_config())
    .route("/", web::get().to(list_posts))
    .route("/follow/", web::get().to(follow_feed))
    .route("/group/{slug}/", web::get().to(get_community))
    .service(
      web::resource("/create/")
        .route(web::get().to(get_create_post))
        .route(web::post().to(create_post)),
    )
    .route("/posts/{id}/", web::get().to(get_post))
    .service(
      web::resource("/posts/{id}/edit/")
        .route(web::get().to(get_edit_post))
        .route(web::post().to(update_post)),
    )
    .route("/posts/{id}/comment/", web::post().to(create_comment))
    .route("/profile/{username}/", web::get().to(read_profile))
    .route("/profile/{username}/follow/", web::post().to(follow_author))
    .route(
      "/profile/{username}/unfollow/",
      web::post().to(unfollow_author),
    )
    .default_service(web::to(not_found));
}

async fn not_found() -> QuillResult<HttpResponse> {
  Err(QuillErrorType::NotFound.into())
}

#[cfg(test)]
mod tests {
  use super::*;
  use actix_web::{test, web::Path, App};

  #[actix_web::test]
  async fn test_non_numeric_id_is_not_found() {
    async fn echo_id(path: Path<i32>) -> String {
      path.into_inner().to_string()
    }

    let app = test::init_service(
      App::new()
        .app_data(path_config())
        .route("/posts/{id}/", web::get().to(echo_id)),
    )
    .await;

    let res = test::call_service(
      &app,
      test::TestRequest::get().uri("/posts/abc/").to_request(),
    )
    .await;
    assert_eq!(404, res.status().as_u16());
  }
}
