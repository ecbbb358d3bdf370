pub mod common;
pub mod config;
pub mod lastlog;
pub mod monk;
pub mod nofap;
pub mod nosocial;
