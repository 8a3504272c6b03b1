// Composition root for the portfolio projects service.
//
// Responsibilities
// - Read config from environment.
// - Pick the project store implementation and wire it into the service.
// - Build the router: project endpoints, theme endpoints, gated admin pages.

pub mod admin_gate;
pub mod config;
pub mod http;
pub mod pages;
pub mod state;
pub mod telemetry;
