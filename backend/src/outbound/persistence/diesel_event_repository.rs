//! PostgreSQL-backed `EventRepository` implementation using Diesel ORM.
//!
//! Rows are converted back through validated domain constructors, so a
//! record edited out of band cannot produce an invalid `Event`.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::AsyncConnection as _;
use diesel_async::RunQueryDsl;
use diesel_async::scoped_futures::ScopedFutureExt as _;
use pagination::{Page, PageRequest};

use crate::domain::ports::{EventRepository, EventRepositoryError};
use crate::domain::{Event, EventDraft, EventId, EventTitle};

use super::diesel_basic_error_mapping::{map_diesel_error, map_pool_error};
use super::models::{EventChangeset, EventRow, NewEventRow};
use super::pool::DbPool;
use super::schema::events;

/// Diesel-backed implementation of the event repository port.
#[derive(Clone)]
pub struct DieselEventRepository {
    pool: DbPool,
}

impl DieselEventRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// Convert a database row into a domain event.
fn row_to_event(row: EventRow) -> Result<Event, EventRepositoryError> {
    let EventRow {
        id,
        title,
        start_at,
        end_at,
    } = row;
    let title = EventTitle::new(title)
        .map_err(|err| EventRepositoryError::query(format!("stored event {id}: {err}")))?;
    Ok(Event::new(EventId::from_uuid(id), title, start_at, end_at))
}

fn to_sql_bigint(value: u64, what: &str) -> Result<i64, EventRepositoryError> {
    i64::try_from(value)
        .map_err(|_| EventRepositoryError::query(format!("{what} {value} exceeds the database range")))
}

#[async_trait]
impl EventRepository for DieselEventRepository {
    async fn insert(&self, draft: &EventDraft) -> Result<Event, EventRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let new_row = NewEventRow {
            title: draft.title().as_str(),
            start_at: draft.start(),
            end_at: draft.end(),
        };

        let row = conn
            .transaction(|conn| {
                async move {
                    diesel::insert_into(events::table)
                        .values(&new_row)
                        .returning(EventRow::as_returning())
                        .get_result::<EventRow>(conn)
                        .await
                }
                .scope_boxed()
            })
            .await
            .map_err(map_diesel_error)?;

        row_to_event(row)
    }

    async fn find_by_id(&self, id: &EventId) -> Result<Option<Event>, EventRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = events::table
            .filter(events::id.eq(id.as_uuid()))
            .select(EventRow::as_select())
            .first::<EventRow>(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(row_to_event).transpose()
    }

    async fn find_page(&self, request: PageRequest) -> Result<Page<Event>, EventRepositoryError> {
        let limit = i64::from(request.size());
        let offset = to_sql_bigint(request.offset(), "page offset")?;
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        // Count and slice observe the same snapshot.
        let (total, rows) = conn
            .transaction(|conn| {
                async move {
                    let total: i64 = events::table.count().get_result(conn).await?;
                    let rows: Vec<EventRow> = events::table
                        .order((events::created_at.asc(), events::id.asc()))
                        .limit(limit)
                        .offset(offset)
                        .select(EventRow::as_select())
                        .load(conn)
                        .await?;
                    Ok::<_, diesel::result::Error>((total, rows))
                }
                .scope_boxed()
            })
            .await
            .map_err(map_diesel_error)?;

        let total = u64::try_from(total)
            .map_err(|_| EventRepositoryError::query(format!("negative event count {total}")))?;
        let content = rows
            .into_iter()
            .map(row_to_event)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Page::new(content, request, total))
    }

    async fn update(&self, event: &Event) -> Result<bool, EventRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let changes = EventChangeset {
            title: event.title().as_str(),
            start_at: event.start(),
            end_at: event.end(),
        };

        let updated = diesel::update(events::table.filter(events::id.eq(event.id().as_uuid())))
            .set(&changes)
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(updated > 0)
    }

    async fn delete_by_id(&self, id: &EventId) -> Result<bool, EventRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let id = *id.as_uuid();

        let deleted = conn
            .transaction(|conn| {
                async move {
                    diesel::delete(events::table.filter(events::id.eq(id)))
                        .execute(conn)
                        .await
                }
                .scope_boxed()
            })
            .await
            .map_err(map_diesel_error)?;

        Ok(deleted > 0)
    }
}
