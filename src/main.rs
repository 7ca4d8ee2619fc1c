// SPDX-License-Identifier: MPL-2.0
use iced_showcase::app::{self, Flags};

const HELP: &str = "\
iced_showcase

USAGE:
  iced_showcase [OPTIONS]

OPTIONS:
  --lang <id>          UI language (e.g. en-US, fr)
  --config-dir <path>  Directory holding settings.toml
  --width <px>         Initial window width
  -h, --help           Print this help
";

fn parse_flags(mut args: pico_args::Arguments) -> Result<Flags, pico_args::Error> {
    let flags = Flags {
        lang: args.opt_value_from_str("--lang")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
        width: args.opt_value_from_str("--width")?,
    };

    let rest = args.finish();
    if !rest.is_empty() {
        eprintln!("Ignoring unexpected arguments: {rest:?}");
    }
    Ok(flags)
}

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let flags = match parse_flags(args) {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("Error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    app::run(flags)
}
