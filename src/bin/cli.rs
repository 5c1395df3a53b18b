extern crate bigdecimal;
extern crate env_logger;
extern crate ledger;
#[macro_use]
extern crate quicli;
extern crate serde;
extern crate serde_json;
extern crate uuid;

use bigdecimal::BigDecimal;
use ledger::models::AccountChanges;
use ledger::pagination::PageRequest;
use ledger::AccountRecordStore;
use quicli::prelude::*;

#[derive(Debug, StructOpt)]
struct Cli {
    #[structopt(subcommand)]
    pub cmd: Command,
}

#[derive(Debug, StructOpt)]
enum Command {
    #[structopt(name = "migrate", about = "Apply pending migrations")]
    Migrate,
    #[structopt(name = "create", about = "Create an account")]
    Create {
        #[structopt(long = "name")]
        name: String,
        #[structopt(long = "username")]
        username: String,
        #[structopt(long = "balance")]
        balance: Option<BigDecimal>,
    },
    #[structopt(name = "update", about = "Update an account")]
    Update {
        #[structopt(long = "id")]
        id: uuid::Uuid,
        #[structopt(long = "name")]
        name: Option<String>,
        #[structopt(long = "username")]
        username: Option<String>,
        #[structopt(long = "balance")]
        balance: Option<BigDecimal>,
    },
    #[structopt(name = "delete", about = "Soft-delete an account")]
    Delete {
        #[structopt(long = "id")]
        id: uuid::Uuid,
    },
    #[structopt(name = "get", about = "Show an account, deleted or not")]
    Get {
        #[structopt(long = "id")]
        id: uuid::Uuid,
    },
    #[structopt(name = "list", about = "List active accounts")]
    List {
        #[structopt(long = "page-number")]
        page_number: Option<u32>,
        #[structopt(long = "page-size")]
        page_size: Option<u32>,
    },
}

fn print<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

main!(|args: Cli| {
    let _ = env_logger::try_init();
    ledger::settings::init()?;

    let database_url = ledger::settings::database_url()?;
    let pool = ledger::build_pool(database_url)?;

    match args.cmd {
        Command::Migrate => {
            let conn = pool.get()?;
            ledger::migrations::run_pending(&conn)?;
        }
        Command::Create {
            name,
            username,
            balance,
        } => {
            let store = AccountRecordStore::new(pool);
            print(&store.create(&name, &username, balance)?)?;
        }
        Command::Update {
            id,
            name,
            username,
            balance,
        } => {
            let store = AccountRecordStore::new(pool);
            let changes = AccountChanges {
                name,
                username,
                balance,
            };
            print(&store.update(id, changes)?)?;
        }
        Command::Delete { id } => {
            let store = AccountRecordStore::new(pool);
            print(&store.delete(id)?)?;
        }
        Command::Get { id } => {
            let store = AccountRecordStore::new(pool);
            print(&store.get(id)?)?;
        }
        Command::List {
            page_number,
            page_size,
        } => {
            let store = AccountRecordStore::new(pool);
            let default = PageRequest::default();
            let req = PageRequest::new(
                page_number.unwrap_or(default.page_number),
                page_size.unwrap_or(default.page_size),
            );
            print(&store.list(req)?)?;
        }
    }
});
