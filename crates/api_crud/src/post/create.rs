use actix_web::{
  web::{Data, Form, Json},
  HttpResponse,
};
use quill_api_common::{
  build_response::{profile_path, redirect_to},
  context::QuillContext,
  post::{PostForm, PostFormResponse},
  utils::validate_post_form,
};
use quill_db_schema::{
  source::{community::Community, post::{Post, PostInsertForm}},
  traits::Crud,
};
use quill_db_views::structs::LocalUserView;
use quill_utils::error::QuillResult;

/// Context for the blank post form. Requires login, like every write path.
pub async fn get_create_post(
  context: Data<QuillContext>,
  _local_user_view: LocalUserView,
) -> QuillResult<Json<PostFormResponse>> {
  let communities = Community::list_all(&mut context.pool()).await?;

  Ok(Json(PostFormResponse {
    post_view: None,
    communities,
  }))
}

pub async fn create_post(
  data: Form<PostForm>,
  context: Data<QuillContext>,
  local_user_view: LocalUserView,
) -> QuillResult<HttpResponse> {
  let validated = validate_post_form(&data, &context).await?;

  // The author is always the caller, never a submitted field.
  let form = PostInsertForm {
    community_id: validated.community_id,
    image: validated.image,
    ..PostInsertForm::new(validated.text, local_user_view.person.id)
  };
  Post::create(&mut context.pool(), &form).await?;

  Ok(redirect_to(&profile_path(&local_user_view.person.name)))
}
