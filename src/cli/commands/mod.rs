pub mod add;
pub mod cal;
pub mod code;
pub mod config;
pub mod del;
pub mod edit;
pub mod export;
pub mod init;
pub mod week;
