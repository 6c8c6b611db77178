use crate::structs::PostView;
use diesel::{ExpressionMethods, QueryDsl, SelectableHelper};
use diesel_async::RunQueryDsl;
use quill_db_schema::{
  newtypes::{CommunityId, PersonId, PostId},
  pagination::{resolve_page, Paged, POSTS_PER_PAGE},
  schema::{community, person, person_follower, post},
  utils::{get_conn, DbPool},
};
use quill_utils::error::{QuillErrorExt, QuillErrorType, QuillResult};

impl PostView {
  pub async fn read(pool: &mut DbPool<'_>, post_id: PostId) -> QuillResult<Self> {
    let conn = &mut get_conn(pool).await?;
    post::table
      .inner_join(person::table)
      .left_join(community::table)
      .filter(post::id.eq(post_id))
      .select(Self::as_select())
      .first(conn)
      .await
      .with_quill_type(QuillErrorType::NotFound)
  }
}

/// Filters compose: a query with both `creator_id` and `community_id` set
/// returns only that author's posts in that community.
#[derive(Debug, Clone, Default)]
pub struct PostQuery {
  pub community_id: Option<CommunityId>,
  pub creator_id: Option<PersonId>,
  /// Restrict to posts whose author this person follows.
  pub followed_by: Option<PersonId>,
  pub page: Option<i64>,
}

impl PostQuery {
  pub async fn list(self, pool: &mut DbPool<'_>) -> QuillResult<Paged<PostView>> {
    let conn = &mut get_conn(pool).await?;

    let mut count_query = post::table.into_boxed();
    let mut query = post::table
      .inner_join(person::table)
      .left_join(community::table)
      .select(PostView::as_select())
      .into_boxed();

    if let Some(community_id) = self.community_id {
      count_query = count_query.filter(post::community_id.eq(community_id));
      query = query.filter(post::community_id.eq(community_id));
    }

    if let Some(creator_id) = self.creator_id {
      count_query = count_query.filter(post::creator_id.eq(creator_id));
      query = query.filter(post::creator_id.eq(creator_id));
    }

    if let Some(follower_id) = self.followed_by {
      let followed = person_follower::table
        .filter(person_follower::follower_id.eq(follower_id))
        .select(person_follower::person_id);
      count_query = count_query.filter(post::creator_id.eq_any(followed));

      let followed = person_follower::table
        .filter(person_follower::follower_id.eq(follower_id))
        .select(person_follower::person_id);
      query = query.filter(post::creator_id.eq_any(followed));
    }

    // The count runs first so an out-of-range page can clamp to the last one.
    let total_items = count_query.count().get_result::<i64>(conn).await?;
    let page = resolve_page(self.page, total_items, POSTS_PER_PAGE);

    let items = query
      .order_by(post::published.desc())
      .limit(page.limit())
      .offset(page.offset())
      .load::<PostView>(conn)
      .await?;

    Ok(Paged { items, page })
  }
}
