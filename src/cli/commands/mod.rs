mod check;
mod init;
mod seed;

pub use check::cmd_check;
pub use init::cmd_init;
pub use seed::cmd_seed;
