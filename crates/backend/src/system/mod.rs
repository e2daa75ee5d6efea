pub mod handlers;
pub mod middleware;
pub mod session;
pub mod tracing;
