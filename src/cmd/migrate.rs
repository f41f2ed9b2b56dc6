use crate::{
    conf::settings,
    pkg::server::state::GetTxn,
    prelude::{db_err, Result},
};
use sqlx::{migrate::Migrator, postgres::PgPoolOptions};
use standard_error::{Interpolate, StandardError};

static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

pub async fn apply() -> Result<()> {
    // one eager connection; the lazy pool is for `listen` only
    let pool = PgPoolOptions::new()
        .max_connections(1)
        .connect(&settings.database_url)
        .await
        .map_err(db_err)?;
    tracing::debug!("connected, applying pending migrations");

    let mut tx = pool.begin_txn().await?;
    MIGRATOR
        .run(&mut *tx)
        .await
        .map_err(|e| StandardError::new("ERR-DB-000").interpolate_err(e.to_string()))?;
    tx.commit().await.map_err(db_err)?;

    tracing::info!("job schema is up to date");
    Ok(())
}
