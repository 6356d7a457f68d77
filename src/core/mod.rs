pub mod session;
pub mod step;
