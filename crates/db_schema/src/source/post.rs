use crate::{
  newtypes::{CommunityId, DbUrl, PersonId, PostId},
  schema::post,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

#[skip_serializing_none]
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize, Queryable, Selectable, Identifiable)]
#[diesel(table_name = post)]
#[diesel(check_for_backend(diesel::pg::Pg))]
/// A post.
pub struct Post {
  pub id: PostId,
  pub text: String,
  /// Set once on creation, immutable afterwards. Listings order by this,
  /// newest first.
  pub published: DateTime<Utc>,
  pub creator_id: PersonId,
  /// Cleared (not cascaded) when the community is deleted.
  pub community_id: Option<CommunityId>,
  /// An optional image reference, served by the external static file store.
  pub image: Option<DbUrl>,
}

#[derive(Debug, Clone, derive_new::new, Insertable)]
#[diesel(table_name = post)]
pub struct PostInsertForm {
  pub text: String,
  pub creator_id: PersonId,
  #[new(default)]
  pub community_id: Option<CommunityId>,
  #[new(default)]
  pub image: Option<DbUrl>,
  #[new(default)]
  pub published: Option<DateTime<Utc>>,
}

/// Only text, community and image are mutable; author and creation time
/// deliberately have no slot here. To null out a nullable column, send
/// `Some(None)`.
#[derive(Debug, Clone, Default, AsChangeset)]
#[diesel(table_name = post)]
pub struct PostUpdateForm {
  pub text: Option<String>,
  pub community_id: Option<Option<CommunityId>>,
  pub image: Option<Option<DbUrl>>,
}
