use crate::{
    config::RuntimeConfiguration,
    error::{GetDatabaseConnectionSnafu, GradebookResult, MigrateSnafu, OpenDatabaseSnafu},
};
use snafu::ResultExt;
use sqlx::{Pool, Sqlite, pool::PoolConnection, sqlite::SqlitePoolOptions};
use std::ops::Deref;

#[derive(Clone, Debug)]
pub struct GradebookState {
    pool: Pool<Sqlite>,
    config: RuntimeConfiguration,
}

impl GradebookState {
    pub async fn new(
        options: SqlitePoolOptions,
        config: RuntimeConfiguration,
    ) -> GradebookResult<Self> {
        let pool = options
            .connect(&config.db_config().get_db_path())
            .await
            .context(OpenDatabaseSnafu)?;

        sqlx::migrate!().run(&pool).await.context(MigrateSnafu)?;

        Ok(Self { pool, config })
    }

    #[allow(dead_code)] //in case anything beyond startup ever needs it :)
    pub fn config(&self) -> &RuntimeConfiguration {
        &self.config
    }

    pub async fn get_connection(&self) -> GradebookResult<PoolConnection<Sqlite>> {
        self.pool
            .acquire()
            .await
            .context(GetDatabaseConnectionSnafu)
    }

    pub async fn sensible_shutdown(&self) -> GradebookResult<()> {
        self.pool.close().await;
        Ok(())
    }
}

impl Deref for GradebookState {
    type Target = Pool<Sqlite>;

    fn deref(&self) -> &Self::Target {
        &self.pool
    }
}
