use quill_db_schema::{pagination::PageMeta, source::community::Community};
use quill_db_views::structs::{CommentView, PostView};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

/// The `page` query parameter, taken as a raw string so that garbage values
/// can fail open to the first page instead of failing extraction.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageQuery {
  pub page: Option<String>,
}

/// A submitted post form, for both create and edit. Every field is optional
/// at the wire level; validation decides what is actually required.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PostForm {
  pub text: Option<String>,
  /// A community id, as the raw select-box value.
  pub community: Option<String>,
  pub image: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct PostListResponse {
  pub posts: Vec<PostView>,
  pub page: PageMeta,
}

#[derive(Debug, Serialize)]
pub struct PostResponse {
  pub post_view: PostView,
  pub comments: Vec<CommentView>,
}

/// Context for rendering the post form: the post being edited (absent on
/// create) and the community choices.
#[skip_serializing_none]
#[derive(Debug, Serialize)]
pub struct PostFormResponse {
  pub post_view: Option<PostView>,
  pub communities: Vec<Community>,
}
