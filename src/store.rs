//! Synchronous access to account records.
//!
//! `AccountRecordStore` checks a connection out of the pool for each call and
//! runs the same write path the `DbExecutor` handlers use.

use bigdecimal::BigDecimal;
use uuid::Uuid;

use actors::db::account::{delete, find, insert, list, update};
use error::Result;
use models::{Account, AccountChanges, NewAccount};
use pagination::{Page, PageRequest};
use settings::{self, DeletePolicy};
use DbPool;

#[allow(missing_debug_implementations)]
#[derive(Clone)]
pub struct AccountRecordStore {
    pool: DbPool,
    delete_policy: DeletePolicy,
    limit_max: u32,
}

impl AccountRecordStore {
    pub fn new(pool: DbPool) -> Self {
        let settings = get_settings!();

        AccountRecordStore {
            pool,
            delete_policy: settings.soft_delete.policy,
            limit_max: settings.pagination.limit_max,
        }
    }

    pub fn with_delete_policy(mut self, policy: DeletePolicy) -> Self {
        self.delete_policy = policy;
        self
    }

    pub fn delete_policy(&self) -> DeletePolicy {
        self.delete_policy
    }

    pub fn create(
        &self,
        name: &str,
        username: &str,
        initial_balance: Option<BigDecimal>,
    ) -> Result<Account> {
        let conn = self.pool.get()?;
        let account = NewAccount::new(name, username, initial_balance);
        insert::call(&conn, &account)
    }

    pub fn update(&self, id: Uuid, changes: AccountChanges) -> Result<Account> {
        let conn = self.pool.get()?;
        update::call(&conn, id, changes)
    }

    pub fn delete(&self, id: Uuid) -> Result<Account> {
        let conn = self.pool.get()?;
        delete::call(&conn, id, self.delete_policy)
    }

    pub fn get(&self, id: Uuid) -> Result<Account> {
        let conn = self.pool.get()?;
        find::call(&conn, id)
    }

    pub fn list(&self, req: PageRequest) -> Result<Page<Account>> {
        let conn = self.pool.get()?;
        list::call(&conn, req, self.limit_max)
    }
}

impl From<DbPool> for AccountRecordStore {
    fn from(pool: DbPool) -> Self {
        AccountRecordStore::new(pool)
    }
}
