// SPDX-License-Identifier: MPL-2.0
use kuranoku::app::{self, Flags};
use std::path::PathBuf;

const HELP: &str = "\
KuranOku - page-by-page viewer for Qur'an page images

USAGE:
    kuranoku [OPTIONS] [DIRECTORY]

ARGS:
    <DIRECTORY>          Folder of page images (default: /opt/KuranOku/Diyanet)

OPTIONS:
    --lang <ID>          Interface language, e.g. en-US or tr
    --config-dir <DIR>   Read settings.toml from DIR
    -h, --help           Print this help

ENVIRONMENT:
    KURANOKU_CONFIG_DIR  Config directory when --config-dir is not given
    RUST_LOG             Log filter (default: info)
";

fn main() -> iced::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let lang = args.opt_value_from_str("--lang").unwrap_or_else(|err| {
        log::warn!("Ignoring --lang: {err}");
        None
    });
    let config_dir = args.opt_value_from_str("--config-dir").unwrap_or_else(|err| {
        log::warn!("Ignoring --config-dir: {err}");
        None
    });

    let mut rest = args.finish().into_iter();
    let directory = rest.next().map(PathBuf::from);
    for extra in rest {
        log::warn!("Ignoring extra argument {}", extra.to_string_lossy());
    }

    app::run(Flags {
        lang,
        directory,
        config_dir,
    })
}
