use diesel::{Connection, PgConnection};
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use quill_utils::error::{QuillErrorType, QuillResult};
use tracing::info;

const MIGRATIONS: EmbeddedMigrations = embed_migrations!();

/// Runs pending migrations over a plain synchronous connection. Called once
/// at pool build, before the server accepts requests.
pub fn run(db_url: &str) -> QuillResult<()> {
  let mut conn = PgConnection::establish(db_url)?;
  let applied = conn
    .run_pending_migrations(MIGRATIONS)
    .map_err(|e| QuillErrorType::Unknown(e.to_string()))?;
  for migration in applied {
    info!("Applied migration {migration}");
  }
  Ok(())
}
