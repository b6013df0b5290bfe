// SPDX-License-Identifier: Apache-2.0

use ndstate::NetworkState;
use std::io::Read;

use crate::error::CliError;

pub(crate) fn state_from_file(
    file_path: &str,
) -> Result<NetworkState, CliError> {
    let mut content = String::new();
    if file_path == "-" {
        std::io::stdin().read_to_string(&mut content)?;
    } else {
        std::fs::File::open(file_path)
            .and_then(|mut fd| fd.read_to_string(&mut content))
            .map_err(|e| {
                CliError::from(format!("Failed to read {file_path}: {e}"))
            })?;
    };
    // Replace non-breaking space '\u{A0}'  to normal space
    let content = content.replace('\u{A0}', " ");

    Ok(NetworkState::new_from_yaml(&content)?)
}

/// Merge the descriptors of all files into a single batch, keeping the file
/// order.
pub(crate) fn state_from_files(
    file_paths: &[&str],
) -> Result<NetworkState, CliError> {
    let mut net_state = NetworkState::new();
    for file_path in file_paths {
        let file_state = state_from_file(file_path)?;
        for iface in file_state.interfaces.to_vec() {
            net_state.append_interface_data(iface.clone());
        }
    }
    Ok(net_state)
}
