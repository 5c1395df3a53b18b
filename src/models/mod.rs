mod account;

pub mod prelude {
    pub use models::account::{
        normalize_balance, Account, AccountChanges, NewAccount, NAME_MAX_LENGTH,
    };
}

pub use self::prelude::*;
