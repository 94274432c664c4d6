//! Internal Diesel row structs for the `events` table.
//!
//! These types never leave the persistence layer.

use chrono::NaiveDateTime;
use diesel::prelude::*;
use uuid::Uuid;

use super::schema::events;

/// Row struct for reading from the events table.
///
/// `created_at` is only used for ordering and is not selected.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = events)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct EventRow {
    pub id: Uuid,
    pub title: String,
    pub start_at: NaiveDateTime,
    pub end_at: NaiveDateTime,
}

/// Insertable struct for creating event records. The id is database-assigned.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = events)]
pub(crate) struct NewEventRow<'a> {
    pub title: &'a str,
    pub start_at: NaiveDateTime,
    pub end_at: NaiveDateTime,
}

/// Changeset overwriting the mutable columns of an event.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = events)]
pub(crate) struct EventChangeset<'a> {
    pub title: &'a str,
    pub start_at: NaiveDateTime,
    pub end_at: NaiveDateTime,
}
