use actix_web::web::{Data, Json, Path};
use quill_api_common::{context::QuillContext, post::PostResponse};
use quill_db_schema::newtypes::PostId;
use quill_db_views::structs::{CommentView, PostView};
use quill_utils::error::QuillResult;

pub async fn get_post(
  path: Path<i32>,
  context: Data<QuillContext>,
) -> QuillResult<Json<PostResponse>> {
  let post_id = PostId(path.into_inner());
  let post_view = PostView::read(&mut context.pool(), post_id).await?;
  let comments = CommentView::for_post(&mut context.pool(), post_id).await?;

  Ok(Json(PostResponse {
    post_view,
    comments,
  }))
}
