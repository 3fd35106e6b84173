pub mod compute;
pub mod schedule;
