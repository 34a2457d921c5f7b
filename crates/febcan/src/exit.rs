use std::fmt;
use std::io;

use febcan_assembler::{AssemblyError, ProfileError};
use febcan_dbc::DbcError;

pub const SUCCESS: i32 = 0;
pub const FAILURE: i32 = 1;
pub const PERMISSION_DENIED: i32 = 50;
/// The registry table or a profile broke a validation rule.
pub const DATA_INVALID: i32 = 60;
pub const USAGE: i32 = 64;
pub const INTERNAL: i32 = 125;

pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug)]
pub struct CliError {
    pub code: i32,
    pub message: String,
}

impl CliError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

pub fn io_error(context: &str, err: io::Error) -> CliError {
    let code = match err.kind() {
        io::ErrorKind::PermissionDenied => PERMISSION_DENIED,
        io::ErrorKind::NotFound => FAILURE,
        _ => INTERNAL,
    };
    CliError::new(code, format!("{context}: {err}"))
}

pub fn profile_error(context: &str, err: ProfileError) -> CliError {
    match err {
        ProfileError::Io { source, .. } => io_error(context, source),
        ProfileError::CompileFailed(_) => CliError::new(INTERNAL, format!("{context}: {err}")),
        other => CliError::new(USAGE, format!("{context}: {other}")),
    }
}

pub fn dbc_error(context: &str, err: DbcError) -> CliError {
    match err {
        DbcError::Io { source, .. } => io_error(context, source),
        other @ (DbcError::InvalidIdentifier { .. } | DbcError::CycleTimeOutOfRange { .. }) => {
            CliError::new(DATA_INVALID, format!("{context}: {other}"))
        }
    }
}

pub fn assembly_error(context: &str, err: AssemblyError) -> CliError {
    match err {
        AssemblyError::Invalid(report) => CliError::new(
            DATA_INVALID,
            format!("{context}: {} validation rule violation(s)", report.len()),
        ),
        AssemblyError::Sink(inner) => match inner.downcast::<DbcError>() {
            Ok(dbc) => dbc_error(context, *dbc),
            Err(other) => CliError::new(INTERNAL, format!("{context}: {other}")),
        },
    }
}
