// SPDX-License-Identifier: MPL-2.0
use toast_stack::app::{self, paths, Flags};
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
toast_stack - shopping list with stacked toast notifications

USAGE:
  toast_stack [OPTIONS]

OPTIONS:
  -h, --help               Print this help
  --lang <LOCALE>          Interface language (e.g. en-US, ru)
  --config-dir <PATH>      Directory holding settings.toml
";

fn parse_flags() -> Result<Option<Flags>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(None);
    }

    let flags = Flags {
        lang: args.opt_value_from_str("--lang")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        tracing::warn!(?remaining, "Ignoring unrecognized arguments");
    }

    Ok(Some(flags))
}

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("toast_stack=info")),
        )
        .init();

    let flags = match parse_flags() {
        Ok(Some(flags)) => flags,
        Ok(None) => return Ok(()),
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    paths::init_cli_override(flags.config_dir.clone());
    app::run(flags)
}
