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
use quill_utils::error::QuillResult;

pub async fn follow_author(
  path: Path<String>,
  context: Data<QuillContext>,
  local_user_view: LocalUserView,
) -> QuillResult<HttpResponse> {
  let target = Person::read_from_name(&mut context.pool(), &path).await?;

  // Following yourself is ignored, not an error.
  if target.id != local_user_view.person.id {
    let form = PersonFollowerForm::new(target.id, local_user_view.person.id);
    PersonFollower::follow(&mut context.pool(), &form).await?;
  }

  Ok(redirect_to(&profile_path(&target.name)))
}

#[cfg(test)]
mod tests {
  use super::*;
  use actix_web::web::Path;
  use pretty_assertions::assert_eq;
  use quill_db_schema::{
    schema::person,
    source::person::PersonInsertForm,
    utils::{build_db_pool_for_tests, get_conn},
  };
  use diesel::QueryDsl;
  use diesel_async::RunQueryDsl;
  use quill_utils::error::QuillResult;
  use serial_test::serial;

  #[tokio::test]
  #[serial]
  async fn test_following_yourself_stores_nothing() -> QuillResult<()> {
    let context = Data::new(QuillContext::create(build_db_pool_for_tests().await));

    let author =
      Person::create(&mut context.pool(), &PersonInsertForm::new("narcissus".into())).await?;

    let res = follow_author(
      Path::from(author.name.clone()),
      context.clone(),
      LocalUserView {
        person: author.clone(),
      },
    )
    .await?;
    assert_eq!(302, res.status().as_u16());
    assert!(!PersonFollower::is_followed(&mut context.pool(), author.id, author.id).await?);

    let mut pool = context.pool();
    let conn = &mut get_conn(&mut pool).await?;
    diesel::delete(person::table.find(author.id))
      .execute(conn)
      .await?;
    Ok(())
  }
}
