pub use self::db::DbExecutor;

pub mod db;
