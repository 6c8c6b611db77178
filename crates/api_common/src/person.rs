use quill_db_schema::{pagination::PageMeta, source::person::Person};
use quill_db_views::structs::PostView;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ProfileResponse {
  pub creator: Person,
  pub posts: Vec<PostView>,
  pub page: PageMeta,
  /// Whether the authenticated caller follows this author. Always false for
  /// anonymous callers and for one's own profile.
  pub following: bool,
}
