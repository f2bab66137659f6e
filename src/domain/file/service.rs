//! File handler service contract.

use crate::domain::error::DispatchError;
use crate::domain::types::{ActionLog, FileRequest};

/// Executor of one simulated file read for a format.
pub trait FileProcessor {
    /// Read the file.
    fn read_file(&self, request: &FileRequest, log: &mut ActionLog);
}

/// Format-specific file handler service.
///
/// Same template-method shape as the payment family: verify, create a
/// fresh processor, delegate. Writing is not part of the contract.
pub trait FileService {
    /// Create a processor for this format.
    ///
    /// Format-specific initialization may record lines of its own.
    fn create_file_processor(&self, log: &mut ActionLog) -> Box<dyn FileProcessor>;

    /// Verify the file is available for processing.
    fn verify_file(&self, log: &mut ActionLog) -> Result<(), DispatchError> {
        log.record("Verified file exists");
        Ok(())
    }

    /// Read a file with a freshly created processor.
    fn read_file(&self, request: &FileRequest, log: &mut ActionLog) -> Result<(), DispatchError> {
        self.verify_file(log)?;
        self.create_file_processor(log).read_file(request, log);
        Ok(())
    }
}
