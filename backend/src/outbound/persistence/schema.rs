//! Diesel table definitions.

diesel::table! {
    events (id) {
        id -> Uuid,
        #[max_length = 255]
        title -> Varchar,
        start_at -> Timestamp,
        end_at -> Timestamp,
        created_at -> Timestamptz,
    }
}
