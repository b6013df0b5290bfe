// SPDX-License-Identifier: Apache-2.0

use std::collections::HashMap;

use crate::{
    net_state::PreparedInterface, networkd::NETWORKD_BACKEND_NAME,
    synthesize, NetworkState, NdstateError,
};

impl NetworkState {
    /// Generate offline network configurations without touching any unit
    /// directory.
    ///
    /// The output is a [HashMap] with backend name as key and
    /// `Vec<(config_file_name, config_content>)>` as value.
    ///
    /// The backend name for systemd-networkd is `systemd-networkd`.
    pub fn gen_conf(
        &self,
    ) -> Result<HashMap<String, Vec<(String, String)>>, NdstateError> {
        let mut confs = Vec::new();
        for iface in self.interfaces.to_vec() {
            if iface.is_absent() {
                log::warn!("ignoring iface {} because is absent", iface.name);
                continue;
            }
            let prepared = PreparedInterface::new(iface)?;
            for unit in synthesize(&prepared.iface).to_files() {
                confs.push((unit.file_name(), unit.content));
            }
        }
        let mut ret = HashMap::new();
        ret.insert(NETWORKD_BACKEND_NAME.to_string(), confs);
        Ok(ret)
    }
}
