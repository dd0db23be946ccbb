pub mod builder;
pub mod handler;
pub mod lifecycle;
pub mod listener;
pub mod router;

pub use builder::{HealthServerBuilder, DEFAULT_ADDRESS};
pub use handler::RequestHandler;
pub use lifecycle::HealthServer;
pub use router::Router;
