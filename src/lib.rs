#![deny(missing_debug_implementations)]

extern crate actix;
extern crate bigdecimal;
extern crate chrono;
extern crate config;
#[macro_use]
extern crate diesel;
#[macro_use]
extern crate failure;
#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate log;
extern crate migrations_internals;
extern crate num_cpus;
extern crate serde;
#[macro_use]
extern crate serde_derive;
extern crate serde_json;
extern crate uuid;

#[cfg(test)]
#[macro_use]
extern crate pretty_assertions;

use actix::prelude::*;
use diesel::{r2d2, PgConnection};

use actors::DbExecutor;

#[macro_use]
pub mod settings;

pub mod actors;
pub mod error;
pub mod migrations;
pub mod models;
pub mod pagination;
pub mod schema;
pub mod store;

pub use error::{Error, Result};
pub use store::AccountRecordStore;

pub type DbPool = r2d2::Pool<r2d2::ConnectionManager<PgConnection>>;

pub fn build_pool(database_url: String) -> Result<DbPool> {
    let size = get_settings!().pool_size;
    let manager = r2d2::ConnectionManager::<PgConnection>::new(database_url);
    let pool = r2d2::Pool::builder().max_size(size).build(manager)?;
    Ok(pool)
}

/// Must be called from within a running `System`.
pub fn build_executor(pool: DbPool) -> Addr<DbExecutor> {
    let threads = get_settings!().executor_threads;
    info!("Starting {} database executors", threads);
    SyncArbiter::start(threads, move || DbExecutor(pool.clone()))
}
