use actix::prelude::*;
use diesel::prelude::*;
use uuid::Uuid;

use actors::DbExecutor;
use error::{Error, Result};
use models::{Account, AccountChanges};

use super::write::{self, Write};

#[derive(Debug)]
pub struct Update {
    pub id: Uuid,
    pub changes: AccountChanges,
}

impl Message for Update {
    type Result = Result<Account>;
}

impl Handler<Update> for DbExecutor {
    type Result = Result<Account>;

    fn handle(&mut self, msg: Update, _ctx: &mut Self::Context) -> Self::Result {
        let conn = self.0.get()?;
        let res = call(&conn, msg.id, msg.changes);
        debug!("account update res: {:?}", res);
        res
    }
}

/// Refreshes `updated_at` even when `changes` is empty or the account is
/// soft-deleted.
pub fn call(conn: &PgConnection, id: Uuid, changes: AccountChanges) -> Result<Account> {
    changes.validate()?;

    conn.transaction::<_, Error, _>(|| {
        let account = write::apply(conn, id, Write::Modify(changes))?;
        Ok(account)
    })
}
