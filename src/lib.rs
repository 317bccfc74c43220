pub mod constants;

mod config;
mod context;
mod decision;
mod gate;
mod header_builder;
mod headers;
mod policy;
mod response;
mod util;

pub use config::{
    AppConfig, ConfigError, DEFAULT_PORT, DenyBehavior, Environment, GateConfig,
};
pub use context::RequestContext;
pub use decision::{AdmissionDecision, DenyReason, EchoOrigin};
pub use gate::{GateDecision, GateResponse, OriginGate};
pub use headers::Headers;
pub use policy::OriginPolicy;
pub use response::ErrorBody;
