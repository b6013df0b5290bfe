// SPDX-License-Identifier: Apache-2.0

use ndstate::NetworkState;

use crate::{error::CliError, state::state_from_file};

pub(crate) fn gen_conf(matches: &clap::ArgMatches) -> Result<String, CliError> {
    let file_path = matches.get_one::<String>("STATE_FILE").ok_or_else(|| {
        CliError::from("Please define at least one STATE_FILE".to_string())
    })?;
    confs_to_yaml(&state_from_file(file_path)?)
}

// Unit bodies are multi-line strings, serde_yaml emits them as block scalars
fn confs_to_yaml(net_state: &NetworkState) -> Result<String, CliError> {
    let confs = net_state.gen_conf()?;
    Ok(serde_yaml::to_string(&confs)?)
}
