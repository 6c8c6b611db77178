use actix_web::{http::header::LOCATION, HttpResponse};
use quill_db_schema::newtypes::PostId;

/// Successful form submissions answer with a redirect, never a body.
pub fn redirect_to(location: &str) -> HttpResponse {
  HttpResponse::Found()
    .insert_header((LOCATION, location))
    .finish()
}

pub fn post_detail_path(post_id: PostId) -> String {
  format!("/posts/{post_id}/")
}

pub fn profile_path(username: &str) -> String {
  format!("/profile/{username}/")
}

#[cfg(test)]
mod tests {
  use super::*;
  use pretty_assertions::assert_eq;

  #[test]
  fn test_redirect_carries_location() {
    let res = redirect_to(&post_detail_path(PostId(7)));
    assert_eq!(res.status().as_u16(), 302);
    assert_eq!(
      res.headers().get(LOCATION).and_then(|l| l.to_str().ok()),
      Some("/posts/7/")
    );
  }
}
