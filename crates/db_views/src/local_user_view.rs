use crate::structs::LocalUserView;
use actix_web::{dev::Payload, FromRequest, HttpMessage, HttpRequest};
use quill_db_schema::{
  newtypes::PersonId,
  source::person::Person,
  utils::DbPool,
};
use quill_utils::error::{QuillError, QuillErrorType, QuillResult};
use std::future::{ready, Ready};

impl LocalUserView {
  pub async fn read(pool: &mut DbPool<'_>, person_id: PersonId) -> QuillResult<Self> {
    let person = Person::read(pool, person_id).await?;
    Ok(LocalUserView { person })
  }
}

/// Pulled out of request extensions, where the auth middleware put it. An
/// anonymous request fails with a login redirect carrying the original path,
/// unless the handler takes `Option<LocalUserView>`.
impl FromRequest for LocalUserView {
  type Error = QuillError;
  type Future = Ready<Result<Self, Self::Error>>;

  fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
    ready(match req.extensions().get::<LocalUserView>() {
      Some(view) => Ok(view.clone()),
      None => Err(
        QuillErrorType::NotLoggedIn {
          next: req.path().to_string(),
        }
        .into(),
      ),
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use actix_web::test::TestRequest;
  use pretty_assertions::assert_eq;

  #[actix_web::test]
  async fn test_anonymous_extraction_fails_with_login_redirect() {
    let req = TestRequest::with_uri("/posts/1/comment/").to_http_request();
    let err = LocalUserView::from_request(&req, &mut Payload::None)
      .await
      .unwrap_err();
    assert_eq!(
      QuillErrorType::NotLoggedIn {
        next: "/posts/1/comment/".to_string(),
      },
      err.error_type
    );
  }
}
