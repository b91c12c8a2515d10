use crate::shared::Result;

/// OutputPresenter port for presenting final output
///
/// This port abstracts the output destination (stdout, file, etc.) where
/// diagram text, rendered images and listings end up.
pub trait OutputPresenter {
    /// Presents text content
    ///
    /// # Errors
    /// Returns an error if:
    /// - Writing to the output destination fails
    /// - File permissions prevent writing
    fn present(&self, content: &str) -> Result<()>;

    /// Presents binary content (rendered images)
    ///
    /// # Errors
    /// Returns an error if writing to the output destination fails
    fn present_bytes(&self, content: &[u8]) -> Result<()>;
}
