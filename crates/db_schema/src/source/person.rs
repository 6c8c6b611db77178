use crate::{
  newtypes::{PersonFollowerId, PersonId},
  schema::{person, person_follower},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

#[skip_serializing_none]
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize, Queryable, Selectable, Identifiable)]
#[diesel(table_name = person)]
#[diesel(check_for_backend(diesel::pg::Pg))]
/// An author. Identity itself (passwords, sessions) lives with the external
/// auth collaborator; this row only mirrors what listings and profiles need.
pub struct Person {
  pub id: PersonId,
  /// The unique, URL-safe username.
  pub name: String,
  /// A freeform name shown instead of the username, when set.
  pub display_name: Option<String>,
  pub published: DateTime<Utc>,
}

#[derive(Debug, Clone, derive_new::new, Insertable)]
#[diesel(table_name = person)]
pub struct PersonInsertForm {
  pub name: String,
  #[new(default)]
  pub display_name: Option<String>,
}

#[derive(PartialEq, Eq, Debug, Clone, Queryable, Selectable, Identifiable, Associations)]
#[diesel(belongs_to(Person))]
#[diesel(table_name = person_follower)]
#[diesel(check_for_backend(diesel::pg::Pg))]
/// A directed follow from one person to another. The pair
/// `(follower_id, person_id)` is unique.
pub struct PersonFollower {
  pub id: PersonFollowerId,
  /// The author being followed.
  pub person_id: PersonId,
  pub follower_id: PersonId,
  pub published: DateTime<Utc>,
}

#[derive(Debug, Clone, derive_new::new, Insertable)]
#[diesel(table_name = person_follower)]
pub struct PersonFollowerForm {
  pub person_id: PersonId,
  pub follower_id: PersonId,
}
