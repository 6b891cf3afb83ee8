use crate::error::{BadEnvVarSnafu, GradebookResult};
use dotenvy::var;
use snafu::ResultExt;
use std::sync::Arc;

#[derive(Clone, Debug)]
pub struct RuntimeConfiguration {
    db_config: Arc<DbConfig>,
}

impl RuntimeConfiguration {
    pub fn new() -> GradebookResult<Self> {
        Ok(Self {
            db_config: Arc::new(DbConfig::new()?),
        })
    }

    #[allow(dead_code)] //explicit construction, for the tests
    pub fn with_db_config(db_config: DbConfig) -> Self {
        Self {
            db_config: Arc::new(db_config),
        }
    }

    pub fn db_config(&self) -> Arc<DbConfig> {
        self.db_config.clone()
    }
}

#[derive(Debug)]
pub struct DbConfig {
    path: String,
}

impl DbConfig {
    pub fn new() -> GradebookResult<Self> {
        let get_env_var = |name| var(name).context(BadEnvVarSnafu { name });

        Ok(Self {
            path: get_env_var("DB_PATH")?,
        })
    }

    #[allow(dead_code)] //explicit construction, for the tests
    pub fn from_path(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    pub fn get_db_path(&self) -> String {
        //full connection URLs (eg `sqlite::memory:`) pass through untouched
        if self.path.starts_with("sqlite:") {
            self.path.clone()
        } else {
            format!("sqlite://{}?mode=rwc", self.path)
        }
    }
}
