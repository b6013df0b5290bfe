// SPDX-License-Identifier: Apache-2.0

use ndstate::ApplyReport;

use crate::error::CliError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ReportFormat {
    Yaml,
    Json,
}

impl ReportFormat {
    pub(crate) fn render(
        &self,
        report: &ApplyReport,
    ) -> Result<String, CliError> {
        Ok(match self {
            Self::Yaml => serde_yaml::to_string(report)?,
            Self::Json => serde_json::to_string_pretty(report)?,
        })
    }
}

/// The rendered report when every interface succeeded. Otherwise the report
/// is still printed and an `EX_DATAERR` error summarizing the failed
/// interfaces is returned.
pub(crate) fn report_to_result(
    report: &ApplyReport,
    format: ReportFormat,
) -> Result<String, CliError> {
    let output = format.render(report)?;
    if !report.has_error() {
        return Ok(output);
    }
    println!("{output}");
    let failures: Vec<String> = report
        .interfaces
        .iter()
        .filter_map(|i| {
            i.error.as_ref().map(|e| format!("Interface {}: {e}", i.name))
        })
        .collect();
    Err(CliError::data_error(format!(
        "Failed to apply {} of {} interfaces:\n{}",
        failures.len(),
        report.interfaces.len(),
        failures.join("\n")
    )))
}

pub(crate) fn print_result_and_exit(result: Result<String, CliError>) {
    let code = match result {
        Ok(s) => {
            if !s.is_empty() {
                println!("{}", s.trim_end());
            }
            0
        }
        Err(e) => {
            eprintln!("{e}");
            e.code
        }
    };
    std::process::exit(code);
}
