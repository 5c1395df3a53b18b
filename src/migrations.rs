use diesel::PgConnection;
use failure;
use migrations_internals::{run_pending_migrations_in_directory, search_for_migrations_directory};

use std::io;
use std::path::Path;

/// Applies the migrations shipped with the crate that are not applied yet.
pub fn run_pending(conn: &PgConnection) -> Result<(), failure::Error> {
    let dir = search_for_migrations_directory(Path::new(env!("CARGO_MANIFEST_DIR")))?;
    info!("Running pending migrations from {}", dir.display());

    run_pending_migrations_in_directory(conn, &dir, &mut io::sink())?;
    Ok(())
}
