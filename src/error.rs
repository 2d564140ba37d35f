use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}.")]
    IoError(#[from] std::io::Error),

    /// Attempted traversal or sandbox escape. Never retried; logged but not
    /// detailed to the end user.
    #[error("Path security violation for '{path}': {reason}.")]
    PathSecurityError { path: String, reason: String },

    #[error("Failed to copy '{source_path}'. Original error: {source}")]
    CopyError {
        source_path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to rewrite '{path}'. Original error: {source}")]
    RewriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to rename '{from}' to '{to}': {reason}.")]
    RenameError { from: String, to: String, reason: String },

    /// Archiving failed in a reportable way (missing source, zip failure).
    /// Kept apart from `IoError` so callers can treat it as recoverable.
    #[error("Failed to archive '{path}': {reason}.")]
    ArchiveError { path: String, reason: String },

    #[error("Zip error: {0}.")]
    ZipError(#[from] zip::result::ZipError),

    /// Represents per-field validation failures in a build request.
    #[error("Validation error in field '{field}': {message}.")]
    ValidationError { field: String, message: String },

    #[error("Cannot proceed: template directory '{template_dir}' does not exist.")]
    TemplateDoesNotExistsError { template_dir: String },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Convenience type alias for Results with the composer Error as the error type.
///
/// # Type Parameters
/// * `T` - The type of the success value
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The Error to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{}", err);
    std::process::exit(1);
}
