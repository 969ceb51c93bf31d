// SPDX-License-Identifier: MPL-2.0
use iced_element::app::{self, Flags};
use iced_element::ui::theming::ThemeMode;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
iced-element component gallery

USAGE:
  iced_element [OPTIONS]

OPTIONS:
  --config <PATH>   Settings file to use instead of the platform default
  --theme <MODE>    light, dark or system
  -h, --help        Print this help
";

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("iced_element=info")),
        )
        .init();

    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let config_path: Option<PathBuf> = args.opt_value_from_str("--config").unwrap_or_else(|err| {
        tracing::warn!(%err, "ignoring --config");
        None
    });
    let theme = args
        .opt_value_from_fn("--theme", |value| {
            ThemeMode::parse(value).ok_or_else(|| format!("unknown theme mode `{value}`"))
        })
        .unwrap_or_else(|err| {
            tracing::warn!(%err, "ignoring --theme");
            None
        });

    let rest = args.finish();
    if !rest.is_empty() {
        tracing::warn!(?rest, "ignoring unexpected arguments");
    }

    app::run(Flags { config_path, theme })
}
