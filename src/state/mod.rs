pub mod cache;
pub mod feed;
pub mod messages;
pub mod network;
pub mod poller;
pub mod query;
