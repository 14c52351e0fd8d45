//! Document-collection repository over SQLite.
//!
//! Collections keep their Mongo-era semantics on relational storage: a
//! single `documents` table keyed by `(collection, id)` with the opaque
//! document body as JSON text. A collection nobody has written to is an
//! empty listing, not an error.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde_json::Value;

use newsbrief_core::{
    ArticleDoc, ClusterRecord, ClusterStore, DatabaseError, Result, SortOrder, UserRecord,
    UserStore,
};

use crate::db::{self, DbConnection, DbPool};
use crate::schema::{documents, users};

/// Collection holding the ingested article documents.
pub const ARTICLES_COLLECTION: &str = "articles";

#[derive(Queryable, Insertable)]
#[diesel(table_name = documents)]
struct DocumentRow {
    collection: String,
    id: String,
    body: String,
}

#[derive(Queryable, Insertable)]
#[diesel(table_name = users)]
struct UserRow {
    email: String,
    display_name: String,
    created_at: String,
}

/// SQLite-backed implementation of the core storage traits.
pub struct SqliteDocumentStore {
    pool: Arc<DbPool>,
}

impl SqliteDocumentStore {
    /// Opens (creating if needed) the database at `db_path` and runs
    /// pending migrations.
    pub fn open(db_path: &str) -> Result<Self> {
        db::init(db_path)?;
        let pool = db::create_pool(db_path)?;
        db::run_migrations(&pool)?;
        Ok(Self { pool })
    }

    fn conn(&self) -> Result<DbConnection> {
        db::get_connection(&self.pool)
    }

    /// Inserts or replaces one document. The ingest side of the store;
    /// the pipeline itself never calls this.
    pub fn upsert_document(&self, collection: &str, id: &str, body: &Value) -> Result<()> {
        let row = DocumentRow {
            collection: collection.to_string(),
            id: id.to_string(),
            body: serde_json::to_string(body)
                .map_err(|e| DatabaseError::InvalidDocument(e.to_string()))?,
        };
        let mut conn = self.conn()?;
        diesel::replace_into(documents::table)
            .values(&row)
            .execute(&mut conn)
            .map_err(|e| DatabaseError::QueryFailed(e.to_string()))?;
        Ok(())
    }

    fn load_rows(&self, collection: &str, order: SortOrder) -> Result<Vec<DocumentRow>> {
        let mut conn = self.conn()?;
        let query = documents::table.filter(documents::collection.eq(collection));
        let rows = match order {
            SortOrder::IdAscending => query
                .order(documents::id.asc())
                .load::<DocumentRow>(&mut conn),
            SortOrder::IdDescending => query
                .order(documents::id.desc())
                .load::<DocumentRow>(&mut conn),
        }
        .map_err(|e| DatabaseError::QueryFailed(e.to_string()))?;
        Ok(rows)
    }
}

fn body_object(row: &DocumentRow) -> Result<serde_json::Map<String, Value>> {
    let value: Value = serde_json::from_str(&row.body)
        .map_err(|e| DatabaseError::InvalidDocument(format!("{}/{}: {}", row.collection, row.id, e)))?;
    match value {
        Value::Object(map) => Ok(map),
        _ => Err(DatabaseError::InvalidDocument(format!(
            "{}/{}: body is not an object",
            row.collection, row.id
        ))
        .into()),
    }
}

fn cluster_from_row(row: DocumentRow) -> Result<ClusterRecord> {
    let mut fields = body_object(&row)?;
    let links = match fields.remove("links") {
        Some(Value::Array(items)) => Some(
            items
                .into_iter()
                .filter_map(|v| v.as_str().map(String::from))
                .collect(),
        ),
        _ => None,
    };
    Ok(ClusterRecord {
        id: row.id,
        links,
        fields,
    })
}

fn article_from_row(row: DocumentRow) -> Result<ArticleDoc> {
    let mut fields = body_object(&row)?;
    let url = match fields.remove("url") {
        Some(Value::String(url)) => Some(url),
        _ => None,
    };
    Ok(ArticleDoc {
        id: row.id,
        url,
        fields,
    })
}

#[async_trait]
impl ClusterStore for SqliteDocumentStore {
    async fn list_clusters(
        &self,
        collection: &str,
        order: SortOrder,
    ) -> Result<Vec<ClusterRecord>> {
        self.load_rows(collection, order)?
            .into_iter()
            .map(cluster_from_row)
            .collect()
    }

    async fn list_articles(&self) -> Result<Vec<ArticleDoc>> {
        self.load_rows(ARTICLES_COLLECTION, SortOrder::IdDescending)?
            .into_iter()
            .map(article_from_row)
            .collect()
    }
}

#[async_trait]
impl UserStore for SqliteDocumentStore {
    async fn ensure_user(&self, email: &str, display_name: &str) -> Result<UserRecord> {
        let mut conn = self.conn()?;

        let existing = users::table
            .filter(users::email.eq(email))
            .first::<UserRow>(&mut conn)
            .optional()
            .map_err(|e| DatabaseError::QueryFailed(e.to_string()))?;
        if let Some(row) = existing {
            return user_from_row(row);
        }

        // Check-then-insert without a transaction; a concurrent duplicate
        // insert is an accepted race.
        let row = UserRow {
            email: email.to_string(),
            display_name: display_name.to_string(),
            created_at: Utc::now().to_rfc3339(),
        };
        diesel::insert_into(users::table)
            .values(&row)
            .execute(&mut conn)
            .map_err(|e| DatabaseError::QueryFailed(e.to_string()))?;
        user_from_row(row)
    }
}

fn user_from_row(row: UserRow) -> Result<UserRecord> {
    let created_at = DateTime::parse_from_rfc3339(&row.created_at)
        .map_err(|e| DatabaseError::InvalidDocument(format!("user {}: {}", row.email, e)))?
        .with_timezone(&Utc);
    Ok(UserRecord {
        email: row.email,
        display_name: row.display_name,
        created_at,
    })
}
