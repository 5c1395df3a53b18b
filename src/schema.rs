table! {
    users (id) {
        id -> Uuid,
        name -> Varchar,
        username -> Text,
        balance -> Numeric,
        updated_at -> Timestamp,
        created_at -> Date,
        deleted_at -> Nullable<Timestamp>,
    }
}
