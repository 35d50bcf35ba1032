//! Persistence gateway for the vitae resume engine.
//!
//! The reordering core hands the gateway one thing: the complete, final
//! order of a resume's section ids. This crate defines that boundary
//! ([`PersistenceGateway`]), the REST implementation ([`HttpGateway`]), and
//! an in-memory recording implementation for tests ([`mock::RecordingGateway`]).

mod error;
mod gateway;
mod http;

pub use error::{GatewayError, GatewayResult};
pub use gateway::{PersistenceGateway, mock};
pub use http::HttpGateway;
