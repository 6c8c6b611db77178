use actix_web::web::{Data, Json, Path, Query};
use quill_api_common::{context::QuillContext, person::ProfileResponse, post::PageQuery};
use quill_db_schema::{
  pagination::parse_page,
  source::person::{Person, PersonFollower},
};
use quill_db_views::{post_view::PostQuery, structs::LocalUserView};
use quill_utils::error::QuillResult;

/// An author's profile with their posts. Works logged out; the `following`
/// flag is only ever true for a logged-in caller viewing someone else.
pub async fn read_profile(
  path: Path<String>,
  data: Query<PageQuery>,
  context: Data<QuillContext>,
  local_user_view: Option<LocalUserView>,
) -> QuillResult<Json<ProfileResponse>> {
  let creator = Person::read_from_name(&mut context.pool(), &path).await?;

  let following = match &local_user_view {
    Some(caller) if caller.person.id != creator.id => {
      PersonFollower::is_followed(&mut context.pool(), caller.person.id, creator.id).await?
    }
    _ => false,
  };

  let paged = PostQuery {
    creator_id: Some(creator.id),
    page: parse_page(data.page.as_deref()),
    ..Default::default()
  }
  .list(&mut context.pool())
  .await?;

  Ok(Json(ProfileResponse {
    creator,
    posts: paged.items,
    page: paged.page,
    following,
  }))
}
