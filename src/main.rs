// SPDX-License-Identifier: MPL-2.0
use env_logger::{Builder, Target};
use log::LevelFilter;
use salon_beta::app::{self, config, paths, Flags};
use std::path::PathBuf;

const HELP: &str = "\
salon_beta

USAGE:
  salon_beta [OPTIONS]

OPTIONS:
  -h, --help                Print this help
  --lang <bcp47>            UI language (e.g. he, en-US)
  --config-dir <dir>        Directory holding settings.toml
  --content <catalog.toml>  Page content replacing the built-in catalog
  --print-default-config    Print the default settings.toml and exit
";

fn init_logger() {
    Builder::new()
        .target(Target::Stdout)
        .filter_level(LevelFilter::Warn)
        .filter_module("salon_beta", LevelFilter::Debug)
        .init();
}

fn main() -> iced::Result {
    if std::env::var("RUST_LOG").is_err() {
        init_logger();
    } else {
        env_logger::init();
    }

    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    if args.contains("--print-default-config") {
        match config::to_toml_string(&config::Config::default()) {
            Ok(toml) => print!("{toml}"),
            Err(err) => log::error!("cannot serialize default config: {err}"),
        }
        return Ok(());
    }

    let flags = Flags {
        lang: parse_optional(&mut args, "--lang"),
        config_dir: parse_optional(&mut args, "--config-dir"),
        content: parse_optional::<String>(&mut args, "--content").map(PathBuf::from),
    };

    let rest = args.finish();
    if !rest.is_empty() {
        log::warn!("ignoring unexpected arguments: {rest:?}");
    }

    paths::init_cli_overrides(flags.config_dir.clone());
    app::run(flags)
}

fn parse_optional<T>(args: &mut pico_args::Arguments, key: &'static str) -> Option<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match args.opt_value_from_str(key) {
        Ok(value) => value,
        Err(err) => {
            log::warn!("invalid value for {key}: {err}");
            None
        }
    }
}
