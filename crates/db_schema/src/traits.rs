use crate::utils::DbPool;
use quill_utils::error::QuillResult;

#[allow(async_fn_in_trait)]
pub trait Crud {
  type InsertForm;
  type UpdateForm;
  type IdType;

  async fn create(pool: &mut DbPool<'_>, form: &Self::InsertForm) -> QuillResult<Self>
  where
    Self: Sized;

  async fn read(pool: &mut DbPool<'_>, id: Self::IdType) -> QuillResult<Self>
  where
    Self: Sized;

  async fn update(
    pool: &mut DbPool<'_>,
    id: Self::IdType,
    form: &Self::UpdateForm,
  ) -> QuillResult<Self>
  where
    Self: Sized;

  /// Deletion also runs the entity's explicit on-delete steps (clearing or
  /// cascading dependent rows); nothing relies on database-level cascades.
  async fn delete(_pool: &mut DbPool<'_>, _id: Self::IdType) -> QuillResult<usize>
  where
    Self: Sized,
    Self::IdType: Send,
  {
    Err(quill_utils::error::QuillErrorType::NotFound.into())
  }
}

#[allow(async_fn_in_trait)]
pub trait Followable {
  type Form;

  /// Idempotent: following an already-followed author must leave exactly one
  /// row for the pair.
  async fn follow(pool: &mut DbPool<'_>, form: &Self::Form) -> QuillResult<Self>
  where
    Self: Sized;

  /// Returns the number of rows removed, so callers can distinguish
  /// unfollowing a relationship that never existed.
  async fn unfollow(pool: &mut DbPool<'_>, form: &Self::Form) -> QuillResult<usize>
  where
    Self: Sized;
}
