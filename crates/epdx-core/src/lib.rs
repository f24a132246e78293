//! Client-side toolkit for the remote EPD extraction service.
//!
//! The service accepts an Environmental Product Declaration (EPD) PDF and
//! returns loosely-structured JSON: the same logical field may appear under
//! several alternate key spellings, or not at all. This crate reconciles
//! those responses into a canonical field set ([`normalize`]), renders it for
//! display ([`display`]) and for JSON/CSV export ([`export`]), and wraps the
//! upload/health HTTP boundary ([`client`]).

pub mod client;
pub mod display;
pub mod error;
pub mod export;
pub mod model;
pub mod normalize;
pub mod session;

pub use client::{ExtractionClient, DEFAULT_API_BASE_URL, DEFAULT_TIMEOUT_SECS};
pub use error::EpdError;
pub use model::{CarbonFootprint, HealthStatus, NormalizedEpd, Quantity};
pub use normalize::{normalize, resolve_field};
pub use session::Session;
