use clap::error::ErrorKind;
use symptrace_core::error::SymptraceError;
use symptrace_core::format::OutputFormat;
use symptrace_core::graph::Algorithm;

/// Parse output format from string
pub fn parse_output_format(s: &str) -> std::result::Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}

/// Parse search algorithm from string
pub fn parse_algorithm(s: &str) -> std::result::Result<Algorithm, String> {
    s.parse::<Algorithm>().map_err(|e| e.to_string())
}

/// Classify a clap failure for the JSON error envelope.
///
/// `None` for help and version requests, which are printed by clap itself.
pub fn clap_failure(err: &clap::Error) -> Option<SymptraceError> {
    match err.kind() {
        ErrorKind::DisplayHelp
        | ErrorKind::DisplayVersion
        | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => None,
        ErrorKind::ValueValidation
        | ErrorKind::InvalidValue
        | ErrorKind::InvalidSubcommand
        | ErrorKind::UnknownArgument
        | ErrorKind::MissingRequiredArgument
        | ErrorKind::ArgumentConflict => Some(SymptraceError::UsageError(err.to_string())),
        _ => Some(SymptraceError::Other(err.to_string())),
    }
}
