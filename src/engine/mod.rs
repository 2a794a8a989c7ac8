//! Waste lookup resolution engine.
//!
//! # Architecture
//!
//! - **Validation**: Blank print type or zero run is rejected up front
//! - **Matching**: Smallest cataloged run that covers the request wins
//! - **Fallback**: Requests beyond the table use the largest cataloged run
//! - **Response**: Echoes the caller's run; waste figures and the
//!   special-case flag come from the matched row
//!
//! # Example
//!
//! ```ignore
//! use printwaste::{default_catalog, WasteEngine, WasteRequest};
//!
//! let engine = WasteEngine::new(default_catalog());
//!
//! let estimate = engine.resolve(&WasteRequest {
//!     print_type: "4/0".to_string(),
//!     print_run: 750,
//! })?;
//!
//! println!("{} sheets of waste expected", estimate.waste_sheets);
//! ```

mod resolver;
mod types;

pub use resolver::WasteEngine;
pub use types::{WasteEstimate, WasteRequest};
