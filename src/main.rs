// SPDX-License-Identifier: MPL-2.0
use std::path::PathBuf;
use std::rc::Rc;
use themeshift::manager::ThemeManager;
use themeshift::signal::DarkLightSource;
use themeshift::store::ConfigStore;
use themeshift::theme::ThemeMode;

const HELP: &str = "\
themeshift - report and set the theme preference

USAGE:
  themeshift [--set <light|dark|system>] [--config-dir <path>]

OPTIONS:
  --set <mode>         Persist a new theme preference before reporting
  --config-dir <path>  Read and write settings under this directory
  -h, --help           Print this help
";

fn main() {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{}", HELP);
        return;
    }

    let config_dir: Option<PathBuf> = match args.opt_value_from_str("--config-dir") {
        Ok(dir) => dir,
        Err(error) => {
            eprintln!("Invalid --config-dir: {}", error);
            std::process::exit(2);
        }
    };

    let set_mode: Option<ThemeMode> = match args.opt_value_from_fn("--set", str::parse) {
        Ok(mode) => mode,
        Err(_) => {
            eprintln!("--set expects one of: light, dark, system");
            std::process::exit(2);
        }
    };

    let store = match config_dir {
        Some(dir) => ConfigStore::with_dir(dir),
        None => ConfigStore::new(),
    };

    // The terminal has nothing to repaint; the sink is a no-op and the
    // resolved appearance is reported once below.
    let mut manager = ThemeManager::new(Box::new(store), Rc::new(DarkLightSource), Box::new(|_| {}));
    manager.initialize();

    if let Some(mode) = set_mode {
        manager.set_mode(mode);
    }

    println!("preference: {}", manager.mode());
    println!("appearance: {}", manager.appearance());
}
