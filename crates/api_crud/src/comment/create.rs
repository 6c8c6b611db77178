use actix_web::{
  web::{Data, Form, Path},
  HttpResponse,
};
use quill_api_common::{
  build_response::{post_detail_path, redirect_to},
  comment::CreateComment,
  context::QuillContext,
  utils::validate_comment_text,
};
use quill_db_schema::{
  newtypes::PostId,
  source::{comment::{Comment, CommentInsertForm}, post::Post},
  traits::Crud,
};
use quill_db_views::structs::LocalUserView;
use quill_utils::error::QuillResult;

pub async fn create_comment(
  path: Path<i32>,
  data: Form<CreateComment>,
  context: Data<QuillContext>,
  local_user_view: LocalUserView,
) -> QuillResult<HttpResponse> {
  let post_id = PostId(path.into_inner());
  // A missing post is a 404 before any validation runs.
  let post = Post::read(&mut context.pool(), post_id).await?;

  let text = validate_comment_text(data.text.as_deref())?;
  let form = CommentInsertForm::new(text, post.id, local_user_view.person.id);
  Comment::create(&mut context.pool(), &form).await?;

  Ok(redirect_to(&post_detail_path(post_id)))
}
