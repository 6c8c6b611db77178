use actix_web::{
  web::{Data, Form, Path},
  HttpResponse,
};
use quill_api_common::{
  build_response::{post_detail_path, redirect_to},
  context::QuillContext,
  post::{PostForm, PostFormResponse},
  utils::validate_post_form,
};
use quill_db_schema::{
  newtypes::PostId,
  source::{community::Community, post::{Post, PostUpdateForm}},
  traits::Crud,
};
use quill_db_views::structs::{LocalUserView, PostView};
use quill_utils::error::QuillResult;

/// Context for the edit form. A caller who isn't the author is quietly sent
/// to the post page instead; existence is never leaked differently for them.
pub async fn get_edit_post(
  path: Path<i32>,
  context: Data<QuillContext>,
  local_user_view: LocalUserView,
) -> QuillResult<HttpResponse> {
  let post_id = PostId(path.into_inner());
  let post_view = PostView::read(&mut context.pool(), post_id).await?;

  if post_view.post.creator_id != local_user_view.person.id {
    return Ok(redirect_to(&post_detail_path(post_id)));
  }

  let communities = Community::list_all(&mut context.pool()).await?;
  Ok(HttpResponse::Ok().json(PostFormResponse {
    post_view: Some(post_view),
    communities,
  }))
}

pub async fn update_post(
  path: Path<i32>,
  data: Form<PostForm>,
  context: Data<QuillContext>,
  local_user_view: LocalUserView,
) -> QuillResult<HttpResponse> {
  let post_id = PostId(path.into_inner());
  let original = Post::read(&mut context.pool(), post_id).await?;

  if original.creator_id != local_user_view.person.id {
    return Ok(redirect_to(&post_detail_path(post_id)));
  }

  let validated = validate_post_form(&data, &context).await?;

  // A submitted empty select or image clears the column.
  let form = PostUpdateForm {
    text: Some(validated.text),
    community_id: Some(validated.community_id),
    image: Some(validated.image),
  };
  Post::update(&mut context.pool(), post_id, &form).await?;

  Ok(redirect_to(&post_detail_path(post_id)))
}
