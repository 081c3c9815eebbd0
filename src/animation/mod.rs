pub mod ease;
pub mod idle;
pub mod phase;
pub mod scheduler;
