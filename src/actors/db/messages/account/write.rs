//! Every write against `users` goes through this module.
//!
//! Each statement stamps its own timestamps from a single clock read, so the
//! data change and the bookkeeping either land together or not at all.

use diesel::{self, dsl::date, prelude::*, sql_types::Timestamp};
use uuid::Uuid;

use models::{normalize_balance, Account, AccountChanges, NewAccount};
use schema::users;

no_arg_sql_function!(
    statement_timestamp,
    Timestamp,
    "Represents the SQL STATEMENT_TIMESTAMP() function"
);

#[derive(Debug)]
pub enum Write {
    Modify(AccountChanges),
    SoftDelete { overwrite: bool },
}

pub fn create(conn: &PgConnection, account: &NewAccount) -> QueryResult<Account> {
    diesel::insert_into(users::table)
        .values((
            users::id.eq(account.id),
            users::name.eq(&account.name),
            users::username.eq(&account.username),
            users::balance.eq(normalize_balance(&account.balance)),
            users::updated_at.eq(statement_timestamp),
            users::created_at.eq(date(statement_timestamp)),
        ))
        .get_result(conn)
}

pub fn apply(conn: &PgConnection, id: Uuid, write: Write) -> QueryResult<Account> {
    let target = users::table.find(id);

    match write {
        Write::Modify(changes) => {
            let changes = changes.normalized();
            diesel::update(target)
                .set((&changes, users::updated_at.eq(statement_timestamp)))
                .get_result(conn)
        }
        Write::SoftDelete { overwrite: true } => diesel::update(target)
            .set((
                users::deleted_at.eq(statement_timestamp.nullable()),
                users::updated_at.eq(statement_timestamp),
            ))
            .get_result(conn),
        Write::SoftDelete { overwrite: false } => {
            diesel::update(target.filter(users::deleted_at.is_null()))
                .set((
                    users::deleted_at.eq(statement_timestamp.nullable()),
                    users::updated_at.eq(statement_timestamp),
                ))
                .get_result(conn)
        }
    }
}
