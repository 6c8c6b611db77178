use actix_web::{
  web::{Data, Path},
  HttpResponse,
};
use quill_api_common::{
  build_response::{profile_path, redirect_to},
  context::QuillContext,
};
use quill_db_schema::{
  source::person::{Person, PersonFollower, PersonFollowerForm},
  traits::Followable,
};
use quill_db_views::structs::LocalUserView;
use quill_utils::error::{QuillErrorType, QuillResult};

pub async fn unfollow_author(
  path: Path<String>,
  context: Data<QuillContext>,
  local_user_view: LocalUserView,
) -> QuillResult<HttpResponse> {
  let target = Person::read_from_name(&mut context.pool(), &path).await?;

  let form = PersonFollowerForm::new(target.id, local_user_view.person.id);
  let removed = PersonFollower::unfollow(&mut context.pool(), &form).await?;
  if removed == 0 {
    return Err(QuillErrorType::NotFound.into());
  }

  Ok(redirect_to(&profile_path(&target.name)))
}
