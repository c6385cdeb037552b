pub mod clock;
pub mod config;
pub mod export;
pub mod init;
pub mod log;
pub mod logs;
pub mod rate;
pub mod role;
pub mod staff;
pub mod whoami;
