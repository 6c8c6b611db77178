use actix_web::web::{Data, Json, Path, Query};
use quill_api_common::{community::CommunityResponse, context::QuillContext, post::PageQuery};
use quill_db_schema::{pagination::parse_page, source::community::Community};
use quill_db_views::post_view::PostQuery;
use quill_utils::error::QuillResult;

/// A community page: the community and its posts, newest first.
pub async fn get_community(
  path: Path<String>,
  data: Query<PageQuery>,
  context: Data<QuillContext>,
) -> QuillResult<Json<CommunityResponse>> {
  let community = Community::read_from_slug(&mut context.pool(), &path).await?;

  let paged = PostQuery {
    community_id: Some(community.id),
    page: parse_page(data.page.as_deref()),
    ..Default::default()
  }
  .list(&mut context.pool())
  .await?;

  Ok(Json(CommunityResponse {
    community,
    posts: paged.items,
    page: paged.page,
  }))
}
