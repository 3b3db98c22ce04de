mod config;
mod endpoint;


pub use config::RenderConfig;
pub use endpoint::{BodyType, Endpoint, EndpointCatalog, EndpointSpec, Presence, ResponseType};
