// SPDX-License-Identifier: Apache-2.0

use ndstate::UnitStore;

use crate::{
    config::Config,
    error::CliError,
    result::{report_to_result, ReportFormat},
    state::state_from_files,
};

pub(crate) fn apply(matches: &clap::ArgMatches) -> Result<String, CliError> {
    let file_paths: Vec<&str> = matches
        .get_many::<String>("STATE_FILE")
        .map(|paths| paths.map(String::as_str).collect())
        .unwrap_or_else(|| vec!["-"]);
    let config_path = matches
        .get_one::<String>("CONFIG")
        .map(String::as_str)
        .unwrap_or(Config::DEFAULT_CONFIG_PATH);
    let config = Config::load(config_path)?;
    let store =
        UnitStore::new(config.unit_dir(matches.get_one::<String>("UNIT_DIR")));

    let net_state = state_from_files(&file_paths)?;
    if net_state.interfaces.is_empty() {
        log::warn!("No interface defined in {}", file_paths.join(" "));
    }
    let report = net_state.apply(&store)?;
    if !report.changed() && !report.has_error() {
        log::info!("Unit files in {} are up to date", store.dir().display());
    }

    let format = if matches.get_flag("JSON") {
        ReportFormat::Json
    } else {
        ReportFormat::Yaml
    };
    report_to_result(&report, format)
}
