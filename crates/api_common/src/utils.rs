use crate::{context::QuillContext, post::PostForm};
use quill_db_schema::{
  newtypes::{CommunityId, DbUrl},
  source::community::Community,
};
use quill_utils::{
  error::{QuillErrorType, QuillResult},
  forms::{FieldErrors, INVALID_CHOICE, INVALID_URL, REQUIRED},
};
use url::Url;

/// A post form that passed validation and can be persisted as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedPostForm {
  pub text: String,
  pub community_id: Option<CommunityId>,
  pub image: Option<DbUrl>,
}

fn non_empty(raw: Option<&str>) -> Option<&str> {
  raw.map(str::trim).filter(|r| !r.is_empty())
}

/// Validates a submitted post form. All failures are collected before
/// returning, so the caller sees every broken field at once.
pub async fn validate_post_form(
  form: &PostForm,
  context: &QuillContext,
) -> QuillResult<ValidatedPostForm> {
  let mut errors = FieldErrors::new();

  let text = non_empty(form.text.as_deref());
  if text.is_none() {
    errors.add("text", REQUIRED);
  }

  // The select box submits a community id, or an empty string for "none".
  let community_id = match non_empty(form.community.as_deref()) {
    Some(raw) => match raw.parse::<i32>() {
      Ok(id) => match Community::read(&mut context.pool(), CommunityId(id)).await {
        Ok(community) => Some(community.id),
        Err(_) => {
          errors.add("community", INVALID_CHOICE);
          None
        }
      },
      Err(_) => {
        errors.add("community", INVALID_CHOICE);
        None
      }
    },
    None => None,
  };

  let image = match non_empty(form.image.as_deref()) {
    Some(raw) => match Url::parse(raw) {
      Ok(url) => Some(url.into()),
      Err(_) => {
        errors.add("image", INVALID_URL);
        None
      }
    },
    None => None,
  };

  if !errors.is_empty() {
    return Err(QuillErrorType::ValidationFailed(errors).into());
  }

  Ok(ValidatedPostForm {
    // text is Some here, the required check above has already run
    text: text.unwrap_or_default().to_string(),
    community_id,
    image,
  })
}

/// Validates a submitted comment. The text is the only field.
pub fn validate_comment_text(text: Option<&str>) -> QuillResult<String> {
  match non_empty(text) {
    Some(trimmed) => Ok(trimmed.to_string()),
    None => {
      let mut errors = FieldErrors::new();
      errors.add("text", REQUIRED);
      Err(QuillErrorType::ValidationFailed(errors).into())
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use pretty_assertions::assert_eq;

  #[test]
  fn test_comment_text_is_trimmed() {
    let text = validate_comment_text(Some("  a fine comment  ")).unwrap();
    assert_eq!(text, "a fine comment");
  }

  #[test]
  fn test_blank_comment_is_rejected_per_field() {
    for raw in [None, Some(""), Some("   ")] {
      let err = validate_comment_text(raw).unwrap_err();
      match err.error_type {
        QuillErrorType::ValidationFailed(errors) => {
          assert_eq!(errors.get("text"), Some(&[REQUIRED.to_string()][..]));
        }
        other => panic!("expected validation failure, got {other}"),
      }
    }
  }
}
