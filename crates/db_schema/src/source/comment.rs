use crate::{
  newtypes::{CommentId, PersonId, PostId},
  schema::comment,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize, Queryable, Selectable, Identifiable)]
#[diesel(table_name = comment)]
#[diesel(check_for_backend(diesel::pg::Pg))]
/// A comment on a post. Removed together with its post.
pub struct Comment {
  pub id: CommentId,
  pub text: String,
  pub published: DateTime<Utc>,
  pub post_id: PostId,
  pub creator_id: PersonId,
}

#[derive(Debug, Clone, derive_new::new, Insertable)]
#[diesel(table_name = comment)]
pub struct CommentInsertForm {
  pub text: String,
  pub post_id: PostId,
  pub creator_id: PersonId,
  #[new(default)]
  pub published: Option<DateTime<Utc>>,
}
