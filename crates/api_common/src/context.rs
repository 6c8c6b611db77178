use quill_db_schema::utils::{ActualDbPool, DbPool};

#[derive(Clone)]
pub struct QuillContext {
  pool: ActualDbPool,
}

impl QuillContext {
  pub fn create(pool: ActualDbPool) -> QuillContext {
    QuillContext { pool }
  }

  pub fn pool(&self) -> DbPool<'_> {
    DbPool::Pool(&self.pool)
  }

  pub fn inner_pool(&self) -> &ActualDbPool {
    &self.pool
  }
}
