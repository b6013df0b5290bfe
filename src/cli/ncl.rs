// SPDX-License-Identifier: Apache-2.0

mod apply;
mod config;
mod error;
mod gen_conf;
mod result;
mod state;

use clap::ArgAction;
use env_logger::Builder;
use log::LevelFilter;

use crate::{error::CliError, result::print_result_and_exit};

const APP_NAME: &str = "ndstatectl";

const SUB_CMD_GEN_CONF: &str = "gc";
const SUB_CMD_APPLY: &str = "apply";
const SUB_CMD_VERSION: &str = "version";

fn main() {
    let matches = clap::Command::new(APP_NAME)
        .version(clap::crate_version!())
        .about("Command line of ndstate")
        .subcommand_required(true)
        .arg(
            clap::Arg::new("verbose")
                .short('v')
                .action(ArgAction::Count)
                .help("Set verbose level")
                .global(true),
        )
        .arg(
            clap::Arg::new("quiet")
                .short('q')
                .action(ArgAction::SetTrue)
                .help("Disable logging")
                .global(true),
        )
        .subcommand(
            clap::Command::new(SUB_CMD_APPLY)
                .about("Write systemd-networkd unit files for network state")
                .arg(
                    clap::Arg::new("STATE_FILE")
                        .required(false)
                        .action(ArgAction::Append)
                        .index(1)
                        .help("Network state file, `-` for stdin"),
                )
                .arg(
                    clap::Arg::new("UNIT_DIR")
                        .long("unit-dir")
                        .action(ArgAction::Set)
                        .help(
                            "Folder to store unit files, overrides the \
                            configuration file",
                        ),
                )
                .arg(
                    clap::Arg::new("CONFIG")
                        .long("config")
                        .short('c')
                        .action(ArgAction::Set)
                        .help("Configuration file"),
                )
                .arg(
                    clap::Arg::new("JSON")
                        .long("json")
                        .action(ArgAction::SetTrue)
                        .help("Show report in json format"),
                ),
        )
        .subcommand(
            clap::Command::new(SUB_CMD_GEN_CONF)
                .about("Generate unit files for specified state")
                .arg(
                    clap::Arg::new("STATE_FILE")
                        .required(true)
                        .index(1)
                        .help("Network state file"),
                ),
        )
        .subcommand(
            clap::Command::new(SUB_CMD_VERSION).about("Show version"),
        )
        .try_get_matches();

    let matches = match matches {
        Ok(m) => m,
        // Help and version output
        Err(e) if !e.use_stderr() => e.exit(),
        Err(e) => {
            print_result_and_exit(Err(CliError::from(e)));
            return;
        }
    };

    let (log_module_filters, log_level) = match matches.get_count("verbose") {
        0 => (vec!["ndstate", "ndstatectl"], LevelFilter::Info),
        1 => (vec!["ndstate", "ndstatectl"], LevelFilter::Debug),
        _ => (vec![""], LevelFilter::Debug),
    };

    if !matches.get_flag("quiet") {
        let mut log_builder = Builder::new();
        for log_module_filter in log_module_filters {
            if !log_module_filter.is_empty() {
                log_builder.filter(Some(log_module_filter), log_level);
            } else {
                log_builder.filter(None, log_level);
            }
        }
        log_builder.init();
    }

    if let Some(matches) = matches.subcommand_matches(SUB_CMD_GEN_CONF) {
        print_result_and_exit(gen_conf::gen_conf(matches));
    } else if let Some(matches) = matches.subcommand_matches(SUB_CMD_APPLY) {
        print_result_and_exit(apply::apply(matches));
    } else if matches.subcommand_matches(SUB_CMD_VERSION).is_some() {
        print_result_and_exit(Ok(format!(
            "{} {}",
            APP_NAME,
            clap::crate_version!()
        )));
    }
}
