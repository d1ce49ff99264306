use async_trait::async_trait;
use rusqlite::OptionalExtension;

use crate::{db::Database, errors::AppResult, models::domain::Admin};

/// Read-only access to the admin credential table. Records are provisioned
/// out-of-band; the service never writes here.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AdminRepository: Send + Sync {
    async fn find_by_identifier(&self, identifier: &str) -> AppResult<Option<Admin>>;
}

pub struct SqliteAdminRepository {
    db: Database,
}

impl SqliteAdminRepository {
    pub fn new(db: &Database) -> Self {
        Self { db: db.clone() }
    }
}

#[async_trait]
impl AdminRepository for SqliteAdminRepository {
    async fn find_by_identifier(&self, identifier: &str) -> AppResult<Option<Admin>> {
        let identifier = identifier.to_string();
        self.db
            .run(move |conn| {
                let admin = conn
                    .query_row(
                        "SELECT id, identifier, secret_hash FROM admins WHERE identifier = ?1",
                        [&identifier],
                        |row| {
                            Ok(Admin {
                                id: row.get(0)?,
                                identifier: row.get(1)?,
                                secret_hash: row.get(2)?,
                            })
                        },
                    )
                    .optional()?;
                Ok(admin)
            })
            .await
    }
}
