use crate::{forms::FieldErrors, LOGIN_PATH};
use serde::{Deserialize, Serialize};
use std::{backtrace::Backtrace, fmt, fmt::Debug};
use strum::Display;

pub type QuillResult<T> = Result<T, QuillError>;

/// The API-visible error taxonomy. Serialized as `{"error": "...", "message": ...}`.
#[derive(Display, Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Hash)]
#[serde(tag = "error", content = "message", rename_all = "snake_case")]
#[non_exhaustive]
pub enum QuillErrorType {
  /// A referenced community, post or user does not exist.
  NotFound,
  /// A write was attempted without identity. Carries the original request
  /// path so the login redirect can send the caller back.
  NotLoggedIn { next: String },
  /// A submitted form failed validation; errors are keyed by field name.
  ValidationFailed(FieldErrors),
  CouldntCreatePost,
  CouldntUpdatePost,
  CouldntCreateComment,
  CouldntCreateCommunity,
  CouldntFollow,
  CouldntUnfollow,
  Unknown(String),
}

pub struct QuillError {
  pub error_type: QuillErrorType,
  pub inner: anyhow::Error,
  pub context: Backtrace,
}

impl<T> From<T> for QuillError
where
  T: Into<anyhow::Error>,
{
  fn from(t: T) -> Self {
    let cause = t.into();
    let error_type = match cause.downcast_ref::<diesel::result::Error>() {
      Some(&diesel::NotFound) => QuillErrorType::NotFound,
      _ => QuillErrorType::Unknown(format!("{}", &cause)),
    };
    QuillError {
      error_type,
      inner: cause,
      context: Backtrace::capture(),
    }
  }
}

impl Debug for QuillError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("QuillError")
      .field("message", &self.error_type)
      .field("inner", &self.inner)
      .field("context", &self.context)
      .finish()
  }
}

impl fmt::Display for QuillError {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    write!(f, "{}: ", &self.error_type)?;
    writeln!(f, "{}", self.inner)?;
    fmt::Display::fmt(&self.context, f)
  }
}

impl actix_web::error::ResponseError for QuillError {
  fn status_code(&self) -> actix_web::http::StatusCode {
    match self.error_type {
      QuillErrorType::NotFound => actix_web::http::StatusCode::NOT_FOUND,
      QuillErrorType::NotLoggedIn { .. } => actix_web::http::StatusCode::FOUND,
      _ => actix_web::http::StatusCode::BAD_REQUEST,
    }
  }

  fn error_response(&self) -> actix_web::HttpResponse {
    match &self.error_type {
      // Write attempted without identity: send the caller to the login
      // page with the original target as a continuation parameter.
      QuillErrorType::NotLoggedIn { next } => actix_web::HttpResponse::Found()
        .insert_header((
          actix_web::http::header::LOCATION,
          format!("{LOGIN_PATH}?next={next}"),
        ))
        .finish(),
      _ => actix_web::HttpResponse::build(self.status_code()).json(&self.error_type),
    }
  }
}

impl From<QuillErrorType> for QuillError {
  fn from(error_type: QuillErrorType) -> Self {
    let inner = anyhow::anyhow!("{}", error_type);
    QuillError {
      error_type,
      inner,
      context: Backtrace::capture(),
    }
  }
}

pub trait QuillErrorExt<T, E: Into<anyhow::Error>> {
  fn with_quill_type(self, error_type: QuillErrorType) -> QuillResult<T>;
}

impl<T, E: Into<anyhow::Error>> QuillErrorExt<T, E> for Result<T, E> {
  fn with_quill_type(self, error_type: QuillErrorType) -> QuillResult<T> {
    self.map_err(|error| QuillError {
      error_type,
      inner: error.into(),
      context: Backtrace::capture(),
    })
  }
}

pub trait QuillErrorExt2<T> {
  fn with_quill_type(self, error_type: QuillErrorType) -> QuillResult<T>;
  fn into_anyhow(self) -> Result<T, anyhow::Error>;
}

impl<T> QuillErrorExt2<T> for QuillResult<T> {
  fn with_quill_type(self, error_type: QuillErrorType) -> QuillResult<T> {
    self.map_err(|mut e| {
      e.error_type = error_type;
      e
    })
  }

  // can't be an impl From because it would conflict with the blanket Into<anyhow> one
  fn into_anyhow(self) -> Result<T, anyhow::Error> {
    self.map_err(|e| e.inner)
  }
}

#[cfg(test)]
mod tests {
  #![allow(clippy::indexing_slicing)]
  use super::*;
  use crate::forms::REQUIRED;
  use actix_web::{body::MessageBody, error::ResponseError, http::header::LOCATION};
  use pretty_assertions::assert_eq;

  #[test]
  fn serializes_no_message() {
    let err = QuillError::from(QuillErrorType::CouldntCreatePost).error_response();
    let json =
      String::from_utf8(err.into_body().try_into_bytes().unwrap_or_default().to_vec()).unwrap();
    assert_eq!(&json, "{\"error\":\"couldnt_create_post\"}");
  }

  #[test]
  fn serializes_field_errors() {
    let mut errors = FieldErrors::new();
    errors.add("text", REQUIRED);
    let err = QuillError::from(QuillErrorType::ValidationFailed(errors)).error_response();
    assert_eq!(400, err.status().as_u16());
    let json =
      String::from_utf8(err.into_body().try_into_bytes().unwrap_or_default().to_vec()).unwrap();
    assert_eq!(
      &json,
      "{\"error\":\"validation_failed\",\"message\":{\"text\":[\"This field is required.\"]}}"
    );
  }

  #[test]
  fn not_logged_in_redirects_to_login_with_continuation() {
    let err = QuillError::from(QuillErrorType::NotLoggedIn {
      next: "/create/".to_string(),
    })
    .error_response();
    assert_eq!(302, err.status().as_u16());
    assert_eq!(
      err.headers().get(LOCATION).and_then(|l| l.to_str().ok()),
      Some("/auth/login/?next=/create/")
    );
  }

  #[test]
  fn converts_diesel_errors() {
    let not_found_error = QuillError::from(diesel::NotFound);
    assert_eq!(QuillErrorType::NotFound, not_found_error.error_type);
    assert_eq!(404, not_found_error.status_code().as_u16());

    let other_error = QuillError::from(diesel::result::Error::NotInTransaction);
    assert!(matches!(other_error.error_type, QuillErrorType::Unknown { .. }));
    assert_eq!(400, other_error.status_code().as_u16());
  }
}
