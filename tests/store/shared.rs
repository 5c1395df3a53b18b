use chrono::{NaiveDate, NaiveDateTime};
use diesel::{self, prelude::*, r2d2};
use env_logger;
use ledger;
use uuid::Uuid;

use std::env;
use std::sync::Once;

static MIGRATIONS: Once = Once::new();

#[macro_export]
macro_rules! get_conn {
    ($pool:ident) => {
        $pool.get().expect("Failed to get connection from pool")
    };
}

/// Returns from the calling test when no database is configured.
#[macro_export]
macro_rules! build_pool {
    () => {
        match ::shared::build_pool() {
            Some(pool) => pool,
            None => return,
        }
    };
}

/// A single-connection pool, so everything a test does runs on the
/// connection that `begin_test_transaction` was called on.
pub fn build_pool() -> Option<ledger::DbPool> {
    let _ = env_logger::try_init();

    let database_url = match env::var("DATABASE_URL") {
        Ok(url) => url,
        Err(_) => {
            eprintln!("DATABASE_URL is not set, skipping");
            return None;
        }
    };

    let manager = r2d2::ConnectionManager::<PgConnection>::new(database_url);
    let pool = r2d2::Pool::builder()
        .max_size(1)
        .build(manager)
        .expect("Failed to build pool");

    MIGRATIONS.call_once(|| {
        let conn = get_conn!(pool);
        ledger::migrations::run_pending(&conn).expect("Failed to run migrations");
    });

    Some(pool)
}

pub fn begin_test_transaction(pool: &ledger::DbPool) {
    let conn = get_conn!(pool);
    conn.begin_test_transaction()
        .expect("Failed to begin transaction");
}

pub fn username(prefix: &str) -> String {
    format!("{}-{}", prefix, Uuid::new_v4())
}

pub fn long_ago() -> NaiveDateTime {
    NaiveDate::from_ymd(2000, 1, 1).and_hms(0, 0, 0)
}

/// Moves `updated_at` into the past behind the store's back.
pub fn backdate(pool: &ledger::DbPool, id: Uuid) {
    use ledger::schema::users;

    let conn = get_conn!(pool);
    diesel::update(users::table.find(id))
        .set(users::updated_at.eq(long_ago()))
        .execute(&*conn)
        .expect("Failed to backdate account");
}
