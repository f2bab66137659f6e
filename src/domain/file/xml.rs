//! XML file handler implementation.

use super::service::{FileProcessor, FileService};
use crate::domain::types::{ActionLog, FileRequest};

pub struct XmlFileProcessor;

impl FileProcessor for XmlFileProcessor {
    fn read_file(&self, request: &FileRequest, log: &mut ActionLog) {
        log.record("Did some XML reader specific setup");
        log.record(format!("Read the [{request}] XML file"));
    }
}

#[derive(Default)]
pub struct XmlFileService;

impl FileService for XmlFileService {
    fn create_file_processor(&self, _log: &mut ActionLog) -> Box<dyn FileProcessor> {
        Box::new(XmlFileProcessor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_xml_read_output() {
        let mut log = ActionLog::new();
        let request = FileRequest {
            stem: "feed".to_string(),
            extension: "xml".to_string(),
        };
        XmlFileService.read_file(&request, &mut log).unwrap();
        assert_eq!(
            log.lines(),
            [
                "Verified file exists",
                "Did some XML reader specific setup",
                "Read the [feed.xml] XML file"
            ]
        );
    }
}
