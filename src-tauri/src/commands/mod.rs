pub mod daemonsets;
pub mod deploy;
