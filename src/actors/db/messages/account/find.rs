use actix::prelude::*;
use diesel::prelude::*;
use uuid::Uuid;

use actors::DbExecutor;
use error::Result;
use models::Account;

#[derive(Debug)]
pub struct Find(pub Uuid);

impl Message for Find {
    type Result = Result<Account>;
}

impl Handler<Find> for DbExecutor {
    type Result = Result<Account>;

    fn handle(&mut self, msg: Find, _ctx: &mut Self::Context) -> Self::Result {
        let conn = self.0.get()?;
        let res = call(&conn, msg.0);
        debug!("account find res: {:?}", res);
        res
    }
}

/// Soft-deleted accounts are returned as well.
pub fn call(conn: &PgConnection, id: Uuid) -> Result<Account> {
    use schema::users;

    let account = users::table.find(id).get_result(conn)?;
    Ok(account)
}
