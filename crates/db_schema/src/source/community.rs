use crate::{
  newtypes::{CommunityId, DbUrl},
  schema::community,
};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

#[skip_serializing_none]
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize, Queryable, Selectable, Identifiable)]
#[diesel(table_name = community)]
#[diesel(check_for_backend(diesel::pg::Pg))]
/// A named grouping that posts may optionally belong to.
pub struct Community {
  pub id: CommunityId,
  pub title: String,
  /// The unique, URL-safe identifier, distinct from the numeric id.
  pub slug: String,
  pub description: Option<String>,
  /// An optional image reference, served by the external static file store.
  pub image: Option<DbUrl>,
}

#[derive(Debug, Clone, derive_new::new, Insertable)]
#[diesel(table_name = community)]
pub struct CommunityInsertForm {
  pub title: String,
  pub slug: String,
  #[new(default)]
  pub description: Option<String>,
  #[new(default)]
  pub image: Option<DbUrl>,
}
