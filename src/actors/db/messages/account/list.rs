use actix::prelude::*;
use diesel::prelude::*;

use actors::DbExecutor;
use error::{Error, Result};
use models::Account;
use pagination::{Page, PageInfo, PageRequest};

#[derive(Debug)]
pub struct List(pub PageRequest);

impl Message for List {
    type Result = Result<Page<Account>>;
}

impl Handler<List> for DbExecutor {
    type Result = Result<Page<Account>>;

    fn handle(&mut self, msg: List, _ctx: &mut Self::Context) -> Self::Result {
        let limit_max = get_settings!().pagination.limit_max;
        let conn = self.0.get()?;
        let res = call(&conn, msg.0, limit_max);
        debug!("account list res: {:?}", res.as_ref().map(|page| &page.pagination));
        res
    }
}

/// Active accounts only.
pub fn call(conn: &PgConnection, req: PageRequest, limit_max: u32) -> Result<Page<Account>> {
    use schema::users;

    req.check(limit_max)?;

    conn.transaction::<_, Error, _>(|| {
        let data = users::table
            .filter(users::deleted_at.is_null())
            .order((users::created_at.asc(), users::username.asc()))
            .limit(req.limit())
            .offset(req.offset())
            .load::<Account>(conn)?;

        let total_records = users::table
            .filter(users::deleted_at.is_null())
            .count()
            .get_result::<i64>(conn)?;

        Ok(Page {
            data,
            pagination: PageInfo::new(req, total_records),
        })
    })
}
