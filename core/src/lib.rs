//! Client core for the message board.
//!
//! # Overview
//! Two layers. `RequestClient` performs JSON requests against one base URL
//! and reduces every failure to an `ApiError` message. `MessageView` owns the
//! board's screen state, runs the initial load and submits new messages
//! through the client.
//!
//! # Design
//! - Network access sits behind the `Transport` trait; `ReqwestTransport` is
//!   the production implementation.
//! - The base URL is resolved once into a `ClientConfig` and passed in at
//!   construction.
//! - DTOs are defined independently from the server crate; integration tests
//!   catch schema drift.

pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod types;
pub mod view;

#[cfg(test)]
pub(crate) mod testing;

pub use client::RequestClient;
pub use config::{ClientConfig, API_URL_ENV, DEFAULT_API_URL};
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse, ReqwestTransport, Transport};
pub use types::{Health, Message, NewMessage};
pub use view::{MessageView, Status, SubmitOutcome, ViewState};
