//! CSV file handler implementation.

use super::service::{FileProcessor, FileService};
use crate::domain::types::{ActionLog, FileRequest};

pub struct CsvFileProcessor;

impl FileProcessor for CsvFileProcessor {
    fn read_file(&self, request: &FileRequest, log: &mut ActionLog) {
        log.record("Did some CSV reader specific setup");
        log.record(format!("Read the [{request}] CSV file"));
    }
}

/// CSV file service with format-specific factory initialization.
#[derive(Default)]
pub struct CsvFileService;

impl FileService for CsvFileService {
    fn create_file_processor(&self, log: &mut ActionLog) -> Box<dyn FileProcessor> {
        log.record("Did some special CSV file initialization stuff");
        Box::new(CsvFileProcessor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_csv_read_output() {
        let mut log = ActionLog::new();
        let request = FileRequest {
            stem: "data".to_string(),
            extension: "csv".to_string(),
        };
        CsvFileService.read_file(&request, &mut log).unwrap();
        assert_eq!(
            log.lines(),
            [
                "Verified file exists",
                "Did some special CSV file initialization stuff",
                "Did some CSV reader specific setup",
                "Read the [data.csv] CSV file"
            ]
        );
    }
}
