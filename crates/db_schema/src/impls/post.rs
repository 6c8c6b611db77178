use crate::{
  newtypes::PostId,
  schema::{comment, post},
  source::post::{Post, PostInsertForm, PostUpdateForm},
  traits::Crud,
  utils::{get_conn, DbPool},
};
use diesel::{dsl::insert_into, ExpressionMethods, QueryDsl};
use diesel_async::{scoped_futures::ScopedFutureExt, AsyncConnection, RunQueryDsl};
use quill_utils::error::{QuillError, QuillErrorExt, QuillErrorType, QuillResult};

impl Crud for Post {
  type InsertForm = PostInsertForm;
  type UpdateForm = PostUpdateForm;
  type IdType = PostId;

  async fn create(pool: &mut DbPool<'_>, form: &Self::InsertForm) -> QuillResult<Self> {
    let conn = &mut get_conn(pool).await?;
    insert_into(post::table)
      .values(form)
      .get_result::<Self>(conn)
      .await
      .with_quill_type(QuillErrorType::CouldntCreatePost)
  }

  async fn read(pool: &mut DbPool<'_>, post_id: PostId) -> QuillResult<Self> {
    let conn = &mut get_conn(pool).await?;
    post::table
      .find(post_id)
      .first(conn)
      .await
      .with_quill_type(QuillErrorType::NotFound)
  }

  async fn update(
    pool: &mut DbPool<'_>,
    post_id: PostId,
    form: &Self::UpdateForm,
  ) -> QuillResult<Self> {
    let conn = &mut get_conn(pool).await?;
    diesel::update(post::table.find(post_id))
      .set(form)
      .get_result::<Self>(conn)
      .await
      .with_quill_type(QuillErrorType::CouldntUpdatePost)
  }

  /// Comments go with their post, in the same transaction.
  async fn delete(pool: &mut DbPool<'_>, post_id: PostId) -> QuillResult<usize> {
    let conn = &mut get_conn(pool).await?;
    conn
      .transaction::<_, QuillError, _>(|conn| {
        async move {
          diesel::delete(comment::table.filter(comment::post_id.eq(post_id)))
            .execute(conn)
            .await?;
          let deleted = diesel::delete(post::table.find(post_id)).execute(conn).await?;
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
      comment::{Comment, CommentInsertForm},
      person::{Person, PersonInsertForm},
      post::{Post, PostInsertForm, PostUpdateForm},
    },
    traits::Crud,
    utils::{build_db_pool_for_tests, get_conn},
  };
  use diesel::QueryDsl;
  use diesel_async::RunQueryDsl;
  use pretty_assertions::assert_eq;
  use quill_utils::error::{QuillErrorType, QuillResult};
  use serial_test::serial;

  #[tokio::test]
  #[serial]
  async fn test_update_leaves_author_and_publish_time_alone() -> QuillResult<()> {
    let pool = &build_db_pool_for_tests().await;
    let pool = &mut pool.into();

    let creator = Person::create(pool, &PersonInsertForm::new("karl_edits".into())).await?;
    let post = Post::create(pool, &PostInsertForm::new("first draft".into(), creator.id)).await?;

    let updated = Post::update(
      pool,
      post.id,
      &PostUpdateForm {
        text: Some("second draft".into()),
        ..Default::default()
      },
    )
    .await?;

    assert_eq!("second draft", updated.text);
    assert_eq!(post.creator_id, updated.creator_id);
    assert_eq!(post.published, updated.published);

    let conn = &mut get_conn(pool).await?;
    diesel::delete(person::table.find(creator.id))
      .execute(conn)
      .await?;
    Ok(())
  }

  #[tokio::test]
  #[serial]
  async fn test_delete_takes_the_comments_along() -> QuillResult<()> {
    let pool = &build_db_pool_for_tests().await;
    let pool = &mut pool.into();

    let creator = Person::create(pool, &PersonInsertForm::new("karl_deletes".into())).await?;
    let post = Post::create(pool, &PostInsertForm::new("short lived".into(), creator.id)).await?;
    let comment = Comment::create(
      pool,
      &CommentInsertForm::new("me too".into(), post.id, creator.id),
    )
    .await?;

    let deleted = Post::delete(pool, post.id).await?;
    assert_eq!(1, deleted);

    let read_back = Comment::read(pool, comment.id).await;
    assert_eq!(
      QuillErrorType::NotFound,
      read_back.unwrap_err().error_type
    );

    let conn = &mut get_conn(pool).await?;
    diesel::delete(person::table.find(creator.id))
      .execute(conn)
      .await?;
    Ok(())
  }
}
