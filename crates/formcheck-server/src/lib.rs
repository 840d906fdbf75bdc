//! HTTP front end for the shooting-form analyzer.
//!
//! `POST /api/analyze-frame` takes a base64 frame and answers with the
//! detected keypoints and their grading; `GET /api/health` reports the
//! loaded model.

pub mod config;
pub mod error;
pub mod framing;
pub mod routes;
pub mod server;
pub mod state;

pub use config::Config;
pub use error::{RequestError, ServerError};
pub use server::Server;
pub use state::{AppState, FrameAnalysis};
