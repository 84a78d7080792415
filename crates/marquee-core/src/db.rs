use sea_orm::{
    ConnectOptions, ConnectionTrait, Database as SeaDatabase, DatabaseConnection, DbErr,
    FromQueryResult, Statement,
};
use std::time::Duration;

use crate::config::Config;

/// Build the shared connection pool from config.
///
/// The pool is lazy: no connection is opened until the first query, so the
/// server starts even when the store is down and each request reports the
/// failure on its own.
pub async fn connect(config: &Config) -> Result<DatabaseConnection, DbErr> {
    let mut opts = ConnectOptions::new(&config.database_url);
    opts.max_connections(config.db_max_connections)
        .min_connections(0)
        .connect_timeout(Duration::from_secs(config.db_connect_timeout_secs))
        .connect_lazy(true)
        .sqlx_logging(config.is_dev());

    SeaDatabase::connect(opts).await
}

/// Run a read statement and decode every row.
///
/// Errors from the driver are returned as-is; nothing here retries.
pub async fn query<T, C>(db: &C, stmt: Statement) -> Result<Vec<T>, DbErr>
where
    T: FromQueryResult,
    C: ConnectionTrait,
{
    T::find_by_statement(stmt).all(db).await
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lazy_config(max: u32) -> Config {
        Config {
            // Lazy pool: the file is never created since nothing is queried.
            database_url: format!(
                "sqlite://{}?mode=rwc",
                std::env::temp_dir()
                    .join(format!("marquee-pool-{}.db", uuid::Uuid::new_v4()))
                    .display()
            ),
            db_max_connections: max,
            environment: "test".to_string(),
            ..Config::default()
        }
    }

    #[tokio::test]
    async fn pool_is_capped_at_ten_by_default() {
        let db = connect(&lazy_config(Config::default().db_max_connections))
            .await
            .unwrap();
        let pool = db.get_sqlite_connection_pool();
        assert_eq!(pool.options().get_max_connections(), 10);
        assert_eq!(pool.options().get_min_connections(), 0);
    }

    #[tokio::test]
    async fn pool_follows_configured_limit() {
        let db = connect(&lazy_config(3)).await.unwrap();
        assert_eq!(
            db.get_sqlite_connection_pool().options().get_max_connections(),
            3
        );
    }

    #[tokio::test]
    async fn lazy_pool_opens_nothing_up_front() {
        let db = connect(&lazy_config(10)).await.unwrap();
        assert_eq!(db.get_sqlite_connection_pool().size(), 0);
    }
}
