// bravia-core: Domain layer between bravia-api and the console.
//
// Owns the mutable session state (pre-shared key, resolved address)
// and the two in-memory caches. Consumers never see raw HTTP or JSON
// failures -- everything surfaces as `CoreError`.

pub mod catalog;
pub mod error;
pub mod session;
pub mod sysinfo;

// ── Primary re-exports ──────────────────────────────────────────────
pub use catalog::CommandCatalog;
pub use error::CoreError;
pub use session::{DeviceSession, SendOutcome, Target};
pub use sysinfo::SystemInfoCache;

// Discovery is stateless wire plumbing; re-exported (with its error
// type) so the console only depends on this crate.
pub use bravia_api::discovery::{Discovery, extract_ipv4};
pub use bravia_api::error::Error as ApiError;
