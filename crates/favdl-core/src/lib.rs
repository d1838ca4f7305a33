pub mod config;
pub mod extract;
pub mod fetch;
pub mod fixext;
pub mod logging;
pub mod naming;
pub mod pipeline;
pub mod storage;
pub mod store;
