use actix_web::web::{Data, Json, Query};
use quill_api_common::{
  context::QuillContext,
  post::{PageQuery, PostListResponse},
};
use quill_db_schema::pagination::parse_page;
use quill_db_views::{post_view::PostQuery, structs::LocalUserView};
use quill_utils::error::QuillResult;

/// Posts by the authors the caller follows, newest first.
pub async fn follow_feed(
  data: Query<PageQuery>,
  context: Data<QuillContext>,
  local_user_view: LocalUserView,
) -> QuillResult<Json<PostListResponse>> {
  let paged = PostQuery {
    followed_by: Some(local_user_view.person.id),
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
