//! Output format dispatch

/// Match on the output format where the JSON branch yields a `Result` and
/// the human and records branches only print.
///
/// ```rust,ignore
/// output_by_format_result!(ctx.cli.format,
///     json => print_json(&result),
///     human => { print_human(&result); },
///     records => { print_records(&result); }
/// )
/// ```
#[macro_export]
macro_rules! output_by_format_result {
    ($format:expr, json => $json:expr, human => $human:block, records => $records:block) => {
        match $format {
            $crate::cli::OutputFormat::Json => $json,
            $crate::cli::OutputFormat::Human => {
                $human;
                Ok(())
            }
            $crate::cli::OutputFormat::Records => {
                $records;
                Ok(())
            }
        }
    };
}
