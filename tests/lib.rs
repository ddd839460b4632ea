//! Helpers for tests that need a real Postgres. They are skipped unless
//! `TEST_DATABASE_URL` points at a server where databases can be created.

use migration::{Migrator, MigratorTrait};
use platform_db::{DbPool, connect_url};
use sea_orm::{ConnectionTrait, DatabaseBackend, Statement};
use url::Url;
use uuid::Uuid;

/// A freshly created, migrated database dropped again by [`PgTestDb::cleanup`].
pub struct PgTestDb {
    pub pool: DbPool,
    admin_url: String,
    db_name: String,
}

impl PgTestDb {
    pub async fn create() -> Option<Self> {
        let base = std::env::var("TEST_DATABASE_URL").ok()?;
        let (admin_url, db_name, test_url) = build_urls(&base)?;
        let admin = connect_url(&admin_url, 1).await.ok()?;
        admin
            .execute(Statement::from_string(
                DatabaseBackend::Postgres,
                format!("CREATE DATABASE \"{db_name}\""),
            ))
            .await
            .ok()?;
        let pool = connect_url(&test_url, 5).await.ok()?;
        Migrator::up(&pool, None).await.ok()?;
        Some(Self {
            pool,
            admin_url,
            db_name,
        })
    }

    pub async fn cleanup(self) {
        let Self {
            pool,
            admin_url,
            db_name,
        } = self;
        drop(pool);
        if let Ok(admin) = connect_url(&admin_url, 1).await {
            let _ = admin
                .execute(Statement::from_string(
                    DatabaseBackend::Postgres,
                    format!("DROP DATABASE IF EXISTS \"{db_name}\" WITH (FORCE)"),
                ))
                .await;
        }
    }
}

fn build_urls(base: &str) -> Option<(String, String, String)> {
    let url = Url::parse(base).ok()?;
    let db_path = url.path().trim_start_matches('/').to_string();
    let base_name = if db_path.is_empty() {
        "employees_test".to_string()
    } else {
        db_path
    };
    let db_name = format!("{}_{}", base_name, Uuid::new_v4().simple());
    let mut admin_url = url.clone();
    admin_url.set_path("/postgres");
    let mut test_url = url;
    test_url.set_path(&format!("/{db_name}"));
    Some((admin_url.to_string(), db_name, test_url.to_string()))
}
