pub mod add;
pub mod backup;
pub mod del;
pub mod edit;
pub mod import;
pub mod list;
pub mod log;
