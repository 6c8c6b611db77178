use quill_db_schema::{pagination::PageMeta, source::community::Community};
use quill_db_views::structs::PostView;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct CommunityResponse {
  pub community: Community,
  pub posts: Vec<PostView>,
  pub page: PageMeta,
}
