//! Service layer.

pub mod export_service;

pub use export_service::ContactCardExporter;
