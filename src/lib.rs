#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::unused_async)]

//! # joked
//!
//! Personalized joke endpoint service.
//!
//! joked exposes a small HTTP API that relays dev-category jokes from
//! chucknorris.io, personalized with a caller-supplied name — all protected
//! by a pre-shared secret in the `token` request header.
//!
//! ## API surface
//!
//! | Method | Path                 | Auth  | Description                     |
//! |--------|----------------------|-------|---------------------------------|
//! | GET    | `/api/health`        | No    | Liveness probe                  |
//! | GET    | `/api/joke`          | Yes   | Personalized joke               |
//! | GET    | `/api/joke/{rename}` | Yes   | Joke with replacement name      |
//!
//! Responses are plain text: `200` with the joke, `401` with `Unauthorized`,
//! or `500` with `Internal Server Error`. An upstream outage never fails a
//! request — the fixed fallback text is served with `200` instead.
//!
//! ## Architecture
//!
//! ```text
//! main.rs          — entry point, clap subcommands, graceful shutdown
//! config.rs        — TOML + env-var configuration
//! processor.rs     — core pipeline: Authenticate → Fetch → Personalize → Respond
//! auth.rs          — shared-secret token check, constant-time comparison
//! upstream.rs      — reqwest client for the joke API, fallback degradation
//! personalize.rs   — placeholder-name substitution
//! routes/
//!   health.rs      — GET /api/health
//!   joke.rs        — GET /api/joke, GET /api/joke/{rename} (HTTP adapters)
//! state.rs         — shared AppState
//! ```
//!
//! The core pipeline in `processor.rs` depends only on plain request/response
//! descriptors, not on axum types — the route handlers are adapters over it.

pub mod auth;
pub mod config;
pub mod personalize;
pub mod processor;
pub mod routes;
pub mod state;
pub mod upstream;

// Re-export key types at crate root for convenience.
pub use config::Config;
pub use processor::{Request, RequestProcessor, Response};
pub use state::AppState;
pub use upstream::JokeClient;
