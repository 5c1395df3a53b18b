use actix::prelude::*;
use diesel::prelude::*;
use uuid::Uuid;

use actors::DbExecutor;
use error::{Error, Result};
use models::Account;
use settings::{self, DeletePolicy};

use super::write::{self, Write};

#[derive(Debug)]
pub struct Delete {
    pub id: Uuid,
}

impl Message for Delete {
    type Result = Result<Account>;
}

impl Handler<Delete> for DbExecutor {
    type Result = Result<Account>;

    fn handle(&mut self, msg: Delete, _ctx: &mut Self::Context) -> Self::Result {
        let conn = self.0.get()?;
        let res = call(&conn, msg.id, settings::delete_policy());
        debug!("account delete res: {:?}", res);
        res
    }
}

/// Soft-deletes the account. The row stays in place with `deleted_at` set.
pub fn call(conn: &PgConnection, id: Uuid, policy: DeletePolicy) -> Result<Account> {
    let overwrite = policy == DeletePolicy::Overwrite;

    conn.transaction::<_, Error, _>(|| {
        let account = write::apply(conn, id, Write::SoftDelete { overwrite })?;
        Ok(account)
    })
}
