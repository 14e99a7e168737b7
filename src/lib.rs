pub mod client;
pub mod config;
pub mod gateway;
pub mod naming;
pub mod shutdown;
pub mod ttl;
