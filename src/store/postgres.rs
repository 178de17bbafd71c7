//! PostgreSQL record store.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::collections::HashMap;

use super::{PublicationCandidate, RecordStore, StoreError};
use crate::category::model::Category;
use crate::event::model::{Event, EventStatus, Folder};

#[derive(sqlx::FromRow)]
struct FolderRow {
    uid: i64,
    pid: i64,
}

#[derive(sqlx::FromRow)]
struct EventRow {
    uid: i64,
    pid: i64,
    title: String,
    begin_date: Option<DateTime<Utc>>,
    end_date: Option<DateTime<Utc>>,
    status: i16,
    hidden: bool,
    publication_hash: String,
}

#[derive(sqlx::FromRow)]
struct EventCategoryRow {
    event_uid: i64,
    category_uid: i64,
}

#[derive(sqlx::FromRow)]
struct CategoryRow {
    uid: i64,
    title: String,
    icon: String,
}

impl From<CategoryRow> for Category {
    fn from(row: CategoryRow) -> Self {
        Category {
            uid: row.uid,
            title: row.title,
            icon: Some(row.icon).filter(|icon| !icon.is_empty()),
        }
    }
}

impl EventRow {
    fn into_event(self, categories: Vec<i64>) -> Event {
        Event {
            uid: self.uid,
            pid: self.pid,
            title: self.title,
            begin: self.begin_date,
            end: self.end_date,
            status: EventStatus::from_code(self.status),
            hidden: self.hidden,
            publication_hash: self.publication_hash,
            categories,
        }
    }
}

#[derive(Clone)]
pub struct PgRecordStore {
    pool: PgPool,
}

impl PgRecordStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn connect(database_url: &str) -> Result<Self, StoreError> {
        let pool = sqlx::postgres::PgPoolOptions::new()
            .max_connections(20)
            .min_connections(2)
            .acquire_timeout(std::time::Duration::from_secs(30))
            .idle_timeout(std::time::Duration::from_secs(900))
            .connect(database_url)
            .await?;
        Ok(Self::new(pool))
    }

    pub async fn migrate(&self) -> Result<(), StoreError> {
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        Ok(())
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl RecordStore for PgRecordStore {
    async fn find_folders(&self) -> Result<Vec<Folder>, StoreError> {
        let rows = sqlx::query_as::<_, FolderRow>("SELECT uid, pid FROM folders")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows
            .into_iter()
            .map(|row| Folder {
                uid: row.uid,
                pid: row.pid,
            })
            .collect())
    }

    async fn find_visible_events(&self) -> Result<Vec<Event>, StoreError> {
        let rows = sqlx::query_as::<_, EventRow>(
            r#"
            SELECT uid, pid, title, begin_date, end_date, status, hidden, publication_hash
            FROM events
            WHERE hidden = FALSE AND status <> $1
            "#,
        )
        .bind(EventStatus::Canceled.code())
        .fetch_all(&self.pool)
        .await?;

        if rows.is_empty() {
            return Ok(Vec::new());
        }

        let uids: Vec<i64> = rows.iter().map(|row| row.uid).collect();
        let links = sqlx::query_as::<_, EventCategoryRow>(
            r#"
            SELECT event_uid, category_uid
            FROM event_categories
            WHERE event_uid = ANY($1)
            ORDER BY event_uid, sorting
            "#,
        )
        .bind(uids.as_slice())
        .fetch_all(&self.pool)
        .await?;

        let mut categories_by_event: HashMap<i64, Vec<i64>> = HashMap::new();
        for link in links {
            categories_by_event
                .entry(link.event_uid)
                .or_default()
                .push(link.category_uid);
        }

        Ok(rows
            .into_iter()
            .map(|row| {
                let categories = categories_by_event.remove(&row.uid).unwrap_or_default();
                row.into_event(categories)
            })
            .collect())
    }

    async fn find_categories(&self, uids: &[i64]) -> Result<Vec<Category>, StoreError> {
        if uids.is_empty() {
            return Ok(Vec::new());
        }

        let rows = sqlx::query_as::<_, CategoryRow>(
            "SELECT uid, title, icon FROM categories WHERE uid = ANY($1)",
        )
        .bind(uids)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.into_iter().map(Category::from).collect())
    }

    async fn find_category(&self, uid: i64) -> Result<Option<Category>, StoreError> {
        let row = sqlx::query_as::<_, CategoryRow>(
            "SELECT uid, title, icon FROM categories WHERE uid = $1",
        )
        .bind(uid)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.map(Category::from))
    }

    async fn find_by_publication_hash(
        &self,
        hash: &str,
    ) -> Result<Vec<PublicationCandidate>, StoreError> {
        let rows: Vec<(i64, bool)> =
            sqlx::query_as("SELECT uid, hidden FROM events WHERE publication_hash = $1")
                .bind(hash)
                .fetch_all(&self.pool)
                .await?;
        Ok(rows
            .into_iter()
            .map(|(uid, hidden)| PublicationCandidate { uid, hidden })
            .collect())
    }

    async fn publish(&self, uid: i64, hash: &str) -> Result<bool, StoreError> {
        let result = sqlx::query(
            r#"
            UPDATE events
            SET hidden = FALSE, publication_hash = '', updated_at = NOW()
            WHERE uid = $1 AND hidden = TRUE AND publication_hash = $2
            "#,
        )
        .bind(uid)
        .bind(hash)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected() == 1)
    }
}
