pub mod delete;
pub mod find;
pub mod insert;
pub mod list;
pub mod update;
pub mod write;
