use actix::prelude::*;
use diesel::prelude::*;

use actors::DbExecutor;
use error::{Error, Result};
use models::{Account, NewAccount};

use super::write;

#[derive(Debug)]
pub struct Insert(pub NewAccount);

impl Message for Insert {
    type Result = Result<Account>;
}

impl Handler<Insert> for DbExecutor {
    type Result = Result<Account>;

    fn handle(&mut self, msg: Insert, _ctx: &mut Self::Context) -> Self::Result {
        let conn = self.0.get()?;
        let res = call(&conn, &msg.0);
        debug!("account insert res: {:?}", res);
        res
    }
}

pub fn call(conn: &PgConnection, account: &NewAccount) -> Result<Account> {
    account.validate()?;

    conn.transaction::<_, Error, _>(|| {
        let account = write::create(conn, account)?;
        Ok(account)
    })
}
