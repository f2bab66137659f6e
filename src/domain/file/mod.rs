//! File handler strategy family: CSV and XML formats.

mod csv;
mod service;
mod xml;

pub use csv::CsvFileService;
pub use service::{FileProcessor, FileService};
pub use xml::XmlFileService;

use crate::config::Config;
use crate::domain::registry::Registry;

/// Build the file-format registry from the formats enabled in `config`.
///
/// Keys are file extensions; the prompt layer checks membership before
/// resolving.
pub fn registry(config: &Config) -> Registry<dyn FileService> {
    let mut registry: Registry<dyn FileService> = Registry::new();

    if config.formats.csv {
        registry.register("csv", || Box::new(CsvFileService));
    }
    if config.formats.xml {
        registry.register("xml", || Box::new(XmlFileService));
    }

    registry
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_registry_has_both_formats() {
        let registry = registry(&Config::default());
        let keys: Vec<&str> = registry.keys().collect();
        assert_eq!(keys, ["csv", "xml"]);
    }

    #[test]
    fn test_unsupported_extension_is_rejected() {
        let registry = registry(&Config::default());
        assert!(!registry.contains("txt"));
        assert!(registry.resolve("txt").is_err());
    }
}
