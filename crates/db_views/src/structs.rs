use quill_db_schema::source::{comment::Comment, community::Community, person::Person, post::Post};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Queryable, Selectable)]
#[diesel(check_for_backend(diesel::pg::Pg))]
/// A post joined with its author and (when set) its community.
pub struct PostView {
  #[diesel(embed)]
  pub post: Post,
  #[diesel(embed)]
  pub creator: Person,
  #[diesel(embed)]
  pub community: Option<Community>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Queryable, Selectable)]
#[diesel(check_for_backend(diesel::pg::Pg))]
/// A comment joined with its author.
pub struct CommentView {
  #[diesel(embed)]
  pub comment: Comment,
  #[diesel(embed)]
  pub creator: Person,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// The authenticated caller, resolved from the session token by the
/// auth middleware and stashed in request extensions.
pub struct LocalUserView {
  pub person: Person,
}
