pub mod attendance;
pub mod purge;
