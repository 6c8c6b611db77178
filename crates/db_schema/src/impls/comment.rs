use crate::{
  newtypes::CommentId,
  schema::comment,
  source::comment::{Comment, CommentInsertForm},
  utils::{get_conn, DbPool},
};
use diesel::{dsl::insert_into, QueryDsl};
use diesel_async::RunQueryDsl;
use quill_utils::error::{QuillErrorExt, QuillErrorType, QuillResult};

impl Comment {
  pub async fn create(pool: &mut DbPool<'_>, form: &CommentInsertForm) -> QuillResult<Self> {
    let conn = &mut get_conn(pool).await?;
    insert_into(comment::table)
      .values(form)
      .get_result::<Self>(conn)
      .await
      .with_quill_type(QuillErrorType::CouldntCreateComment)
  }

  pub async fn read(pool: &mut DbPool<'_>, comment_id: CommentId) -> QuillResult<Self> {
    let conn = &mut get_conn(pool).await?;
    comment::table
      .find(comment_id)
      .first(conn)
      .await
      .with_quill_type(QuillErrorType::NotFound)
  }
}
