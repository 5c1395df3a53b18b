use diesel::{self, prelude::*};

use ledger::pagination::PageRequest;
use ledger::schema::users;
use ledger::{AccountRecordStore, Error};

use shared;

/// Leaves the test transaction with an empty `users` table.
fn clear(pool: &ledger::DbPool) {
    let conn = get_conn!(pool);
    diesel::delete(users::table)
        .execute(&*conn)
        .expect("Failed to clear users");
}

#[test]
fn list_pages_through_active_accounts() {
    let pool = build_pool!();
    shared::begin_test_transaction(&pool);
    clear(&pool);
    let store = AccountRecordStore::new(pool);

    let mut accounts = (1..8)
        .map(|i| {
            let username = format!("user{}", i);
            store.create("User", &username, None).unwrap()
        })
        .collect::<Vec<_>>();

    let deleted = accounts.remove(2);
    store.delete(deleted.id).unwrap();

    let first = store.list(PageRequest::new(1, 5)).unwrap();
    assert_eq!(first.pagination.page_number, 1);
    assert_eq!(first.pagination.page_size, 5);
    assert_eq!(first.pagination.total_records, 6);
    assert_eq!(
        first.data.iter().map(|a| a.id).collect::<Vec<_>>(),
        accounts[..5].iter().map(|a| a.id).collect::<Vec<_>>()
    );

    let second = store.list(PageRequest::new(2, 5)).unwrap();
    assert_eq!(second.pagination.total_records, 6);
    assert_eq!(
        second.data.iter().map(|a| a.id).collect::<Vec<_>>(),
        vec![accounts[5].id]
    );

    let third = store.list(PageRequest::new(3, 5)).unwrap();
    assert!(third.data.is_empty());
    assert_eq!(third.pagination.total_records, 6);
}

#[test]
fn list_rejects_bad_pagination() {
    let pool = build_pool!();
    shared::begin_test_transaction(&pool);
    let store = AccountRecordStore::new(pool);

    for req in &[
        PageRequest::new(0, 5),
        PageRequest::new(1, 0),
        PageRequest::new(1, 101),
    ] {
        match store.list(*req) {
            Err(Error::ConstraintViolation(_)) => {}
            res => panic!("unexpected result: {:?}", res.map(|page| page.pagination)),
        }
    }
}
