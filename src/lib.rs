pub mod catalog;
pub mod engine;
pub mod error;
pub mod settings;

pub use catalog::{default_catalog, load_catalog, Catalog, CatalogHandle, ReferenceRecord};
pub use engine::{WasteEngine, WasteEstimate, WasteRequest};
pub use error::WasteError;
pub use settings::Settings;
