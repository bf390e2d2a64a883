use std::path::PathBuf;

/// Errors raised while turning an HTML document into a PDF
#[derive(Debug, Clone)]
pub enum ConversionError {
    /// The converter could not be started at all
    Spawn { program: PathBuf, message: String },

    /// The converter ran and reported failure
    Failed {
        program: PathBuf,
        status: Option<i32>,
        stderr: String,
    },

    /// The converter claimed success but produced no output file
    MissingOutput { path: PathBuf },
}

impl std::fmt::Display for ConversionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConversionError::Spawn { program, message } => {
                write!(f, "Failed to run '{}': {}", program.display(), message)
            }
            ConversionError::Failed {
                program,
                status,
                stderr,
            } => {
                match status {
                    Some(code) => write!(f, "'{}' exited with status {}", program.display(), code)?,
                    None => write!(f, "'{}' was terminated by a signal", program.display())?,
                }
                if !stderr.is_empty() {
                    write!(f, ": {}", stderr)?;
                }
                Ok(())
            }
            ConversionError::MissingOutput { path } => {
                write!(f, "Converter produced no output at {}", path.display())
            }
        }
    }
}

impl std::error::Error for ConversionError {}

/// Result type for conversion operations
pub type ConversionResult<T> = Result<T, ConversionError>;
