use crate::{
  newtypes::CommunityId,
  schema::{community, post},
  source::community::{Community, CommunityInsertForm},
  utils::{get_conn, DbPool},
};
use diesel::{dsl::insert_into, ExpressionMethods, QueryDsl};
use diesel_async::{scoped_futures::ScopedFutureExt, AsyncConnection, RunQueryDsl};
use quill_utils::error::{QuillError, QuillErrorExt, QuillErrorType, QuillResult};

impl Community {
  pub async fn create(pool: &mut DbPool<'_>, form: &CommunityInsertForm) -> QuillResult<Self> {
    let conn = &mut get_conn(pool).await?;
    insert_into(community::table)
      .values(form)
      .get_result::<Self>(conn)
      .await
      .with_quill_type(QuillErrorType::CouldntCreateCommunity)
  }

  pub async fn read(pool: &mut DbPool<'_>, community_id: CommunityId) -> QuillResult<Self> {
    let conn = &mut get_conn(pool).await?;
    community::table
      .find(community_id)
      .first(conn)
      .await
      .with_quill_type(QuillErrorType::NotFound)
  }

  pub async fn read_from_slug(pool: &mut DbPool<'_>, slug: &str) -> QuillResult<Self> {
    let conn = &mut get_conn(pool).await?;
    community::table
      .filter(community::slug.eq(slug))
      .first(conn)
      .await
      .with_quill_type(QuillErrorType::NotFound)
  }

  /// All communities, for form select choices.
  pub async fn list_all(pool: &mut DbPool<'_>) -> QuillResult<Vec<Self>> {
    let conn = &mut get_conn(pool).await?;
    community::table
      .order_by(community::title.asc())
      .load::<Self>(conn)
      .await
      .with_quill_type(QuillErrorType::NotFound)
  }

  /// Administrative delete. Posts survive: their community reference is
  /// cleared in the same transaction, before the row goes away.
  pub async fn delete(pool: &mut DbPool<'_>, community_id: CommunityId) -> QuillResult<usize> {
    let conn = &mut get_conn(pool).await?;
    conn
      .transaction::<_, QuillError, _>(|conn| {
        async move {
          diesel::update(post::table.filter(post::community_id.eq(community_id)))
            .set(post::community_id.eq(Option::<CommunityId>::None))
            .execute(conn)
            .await?;
          let deleted = diesel::delete(community::table.find(community_id))
            .execute(conn)
            .await?;
          Ok(deleted)
        }
        .scope_boxed()
      })
      .await
  }
}

#[cfg(test)]
mod tests {
  use crate::{
    schema::person,
    source::{
      community::{Community, CommunityInsertForm},
      person::{Person, PersonInsertForm},
      post::{Post, PostInsertForm},
    },
    traits::Crud,
    utils::{build_db_pool_for_tests, get_conn},
  };
  use diesel::QueryDsl;
  use diesel_async::RunQueryDsl;
  use pretty_assertions::assert_eq;
  use quill_utils::error::QuillResult;
  use serial_test::serial;

  #[tokio::test]
  #[serial]
  async fn test_delete_preserves_the_posts() -> QuillResult<()> {
    let pool = &build_db_pool_for_tests().await;
    let pool = &mut pool.into();

    let creator = Person::create(pool, &PersonInsertForm::new("kropotkin".into())).await?;
    let community = Community::create(
      pool,
      &CommunityInsertForm::new("Mutual Aid".into(), "mutual-aid".into()),
    )
    .await?;
    let post = Post::create(
      pool,
      &PostInsertForm {
        community_id: Some(community.id),
        ..PostInsertForm::new("a factor of evolution".into(), creator.id)
      },
    )
    .await?;

    let deleted = Community::delete(pool, community.id).await?;
    assert_eq!(1, deleted);

    let surviving = Post::read(pool, post.id).await?;
    assert_eq!(None, surviving.community_id);
    assert_eq!(post.text, surviving.text);

    let conn = &mut get_conn(pool).await?;
    diesel::delete(person::table.find(creator.id))
      .execute(conn)
      .await?;
    Ok(())
  }
}
