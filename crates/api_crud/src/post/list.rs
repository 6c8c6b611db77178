use actix_web::web::{Data, Json, Query};
use quill_api_common::{
  context::QuillContext,
  post::{PageQuery, PostListResponse},
};
use quill_db_schema::pagination::parse_page;
use quill_db_views::post_view::PostQuery;
use quill_utils::error::QuillResult;

/// The front page: every post, newest first.
pub async fn list_posts(
  data: Query<PageQuery>,
  context: Data<QuillContext>,
) -> QuillResult<Json<PostListResponse>> {
  let paged = PostQuery {
    page: parse_page(data.page.as_deref()),
    ..Default::default()
  }
  .list(&mut context.pool())
  .await?;

  Ok(Json(PostListResponse {
    posts: paged.items,
    page: paged.page,
  }))
}
