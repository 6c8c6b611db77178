use crate::structs::CommentView;
use diesel::{ExpressionMethods, QueryDsl, SelectableHelper};
use diesel_async::RunQueryDsl;
use quill_db_schema::{
  newtypes::PostId,
  schema::{comment, person},
  utils::{get_conn, DbPool},
};
use quill_utils::error::{QuillErrorExt, QuillErrorType, QuillResult};

impl CommentView {
  /// All comments under a post, newest first. Comments are not paginated.
  pub async fn for_post(pool: &mut DbPool<'_>, post_id: PostId) -> QuillResult<Vec<Self>> {
    let conn = &mut get_conn(pool).await?;
    comment::table
      .inner_join(person::table)
      .filter(comment::post_id.eq(post_id))
      .select(Self::as_select())
      .order_by(comment::published.desc())
      .load(conn)
      .await
      .with_quill_type(QuillErrorType::NotFound)
  }
}
