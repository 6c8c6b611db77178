use crate::{
  newtypes::PersonId,
  schema::{person, person_follower},
  source::person::{Person, PersonFollower, PersonFollowerForm, PersonInsertForm},
  traits::Followable,
  utils::{get_conn, DbPool},
};
use diesel::{
  dsl::{exists, insert_into},
  select,
  ExpressionMethods,
  QueryDsl,
};
use diesel_async::RunQueryDsl;
use quill_utils::error::{QuillErrorExt, QuillErrorType, QuillResult};

impl Person {
  /// Person rows are provisioned by the external auth collaborator; this is
  /// used by that sync path and by tests.
  pub async fn create(pool: &mut DbPool<'_>, form: &PersonInsertForm) -> QuillResult<Self> {
    let conn = &mut get_conn(pool).await?;
    insert_into(person::table)
      .values(form)
      .get_result::<Self>(conn)
      .await
      .with_quill_type(QuillErrorType::Unknown("couldnt create person".into()))
  }

  pub async fn read(pool: &mut DbPool<'_>, person_id: PersonId) -> QuillResult<Self> {
    let conn = &mut get_conn(pool).await?;
    person::table
      .find(person_id)
      .first(conn)
      .await
      .with_quill_type(QuillErrorType::NotFound)
  }

  pub async fn read_from_name(pool: &mut DbPool<'_>, person_name: &str) -> QuillResult<Self> {
    let conn = &mut get_conn(pool).await?;
    person::table
      .filter(person::name.eq(person_name))
      .first(conn)
      .await
      .with_quill_type(QuillErrorType::NotFound)
  }
}

impl Followable for PersonFollower {
  type Form = PersonFollowerForm;

  /// `ON CONFLICT DO NOTHING` plus a read-back: following twice leaves
  /// exactly one row for the pair.
  async fn follow(pool: &mut DbPool<'_>, form: &PersonFollowerForm) -> QuillResult<Self> {
    let conn = &mut get_conn(pool).await?;
    insert_into(person_follower::table)
      .values(form)
      .on_conflict((person_follower::follower_id, person_follower::person_id))
      .do_nothing()
      .execute(conn)
      .await
      .with_quill_type(QuillErrorType::CouldntFollow)?;

    person_follower::table
      .filter(person_follower::person_id.eq(form.person_id))
      .filter(person_follower::follower_id.eq(form.follower_id))
      .first(conn)
      .await
      .with_quill_type(QuillErrorType::CouldntFollow)
  }

  async fn unfollow(pool: &mut DbPool<'_>, form: &PersonFollowerForm) -> QuillResult<usize> {
    let conn = &mut get_conn(pool).await?;
    diesel::delete(
      person_follower::table
        .filter(person_follower::person_id.eq(form.person_id))
        .filter(person_follower::follower_id.eq(form.follower_id)),
    )
    .execute(conn)
    .await
    .with_quill_type(QuillErrorType::CouldntUnfollow)
  }
}

impl PersonFollower {
  /// Does `follower_id` follow `person_id`? Drives the profile page flag.
  pub async fn is_followed(
    pool: &mut DbPool<'_>,
    follower_id: PersonId,
    person_id: PersonId,
  ) -> QuillResult<bool> {
    let conn = &mut get_conn(pool).await?;
    let find_follow = person_follower::table
      .filter(person_follower::person_id.eq(person_id))
      .filter(person_follower::follower_id.eq(follower_id));
    select(exists(find_follow))
      .get_result::<bool>(conn)
      .await
      .with_quill_type(QuillErrorType::NotFound)
  }
}

#[cfg(test)]
mod tests {
  use crate::{
    schema::{person, person_follower},
    source::person::{Person, PersonFollower, PersonFollowerForm, PersonInsertForm},
    traits::Followable,
    utils::{build_db_pool_for_tests, get_conn},
  };
  use diesel::{ExpressionMethods, QueryDsl};
  use diesel_async::RunQueryDsl;
  use pretty_assertions::assert_eq;
  use quill_utils::error::QuillResult;
  use serial_test::serial;

  #[tokio::test]
  #[serial]
  async fn test_follow_twice_keeps_one_row() -> QuillResult<()> {
    let pool = &build_db_pool_for_tests().await;
    let pool = &mut pool.into();

    let follower = Person::create(pool, &PersonInsertForm::new("ursula_reader".into())).await?;
    let author = Person::create(pool, &PersonInsertForm::new("ursula_writer".into())).await?;

    let form = PersonFollowerForm::new(author.id, follower.id);
    let first = PersonFollower::follow(pool, &form).await?;
    let second = PersonFollower::follow(pool, &form).await?;
    assert_eq!(first.id, second.id);
    assert!(PersonFollower::is_followed(pool, follower.id, author.id).await?);

    let conn = &mut get_conn(pool).await?;
    let rows: i64 = person_follower::table
      .filter(person_follower::person_id.eq(author.id))
      .filter(person_follower::follower_id.eq(follower.id))
      .count()
      .get_result(conn)
      .await?;
    assert_eq!(1, rows);

    assert_eq!(1, PersonFollower::unfollow(pool, &form).await?);
    assert_eq!(0, PersonFollower::unfollow(pool, &form).await?);
    assert!(!PersonFollower::is_followed(pool, follower.id, author.id).await?);

    let conn = &mut get_conn(pool).await?;
    diesel::delete(person::table.find(follower.id))
      .execute(conn)
      .await?;
    diesel::delete(person::table.find(author.id))
      .execute(conn)
      .await?;
    Ok(())
  }
}
