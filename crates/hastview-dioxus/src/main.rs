use dioxus::prelude::*;
use hastview_config::Config;
use hastview_dioxus::Startup;
use hastview_dioxus::startup::resolve_tree_path;
use hastview_dioxus::ui::{App, FailedApp};
use std::env;
use std::path::PathBuf;
use std::process;

fn main() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    log::info!("hastview starting up");

    let config_path = Config::config_path();
    log::info!("Config path: {}", config_path.display());

    let args: Vec<String> = env::args().collect();
    let program_name = args
        .first()
        .cloned()
        .unwrap_or_else(|| "hastview-dioxus".to_string());
    if args.len() > 2 {
        eprintln!("Usage: {program_name} [tree.json]");
        process::exit(1);
    }
    let cli_path = args.get(1).map(PathBuf::from);

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            log::error!("Config::load() failed with error: {e}");
            eprintln!("Error: Failed to load config file: {e}");
            process::exit(1);
        }
    };

    let Some(tree_path) = resolve_tree_path(cli_path.clone(), config.as_ref()) else {
        eprintln!("Error: No tree file provided and none set in the config file");
        eprintln!("Usage: {program_name} <tree.json>");
        eprintln!(
            "Or set tree_path in a config file at {}",
            config_path.display()
        );
        process::exit(1);
    };

    if cli_path.is_some() {
        log::info!("Using tree from CLI argument: {}", tree_path.display());
    } else {
        log::info!("Using tree from config: {}", tree_path.display());
    }

    let startup = Startup::load(&tree_path, config.as_ref());

    dioxus::LaunchBuilder::desktop()
        .with_cfg(make_window_config(&tree_path))
        .with_context(startup)
        .launch(app_root);
}

fn app_root() -> Element {
    match use_context::<Startup>() {
        Startup::Loaded {
            tree,
            class_name,
            stylesheets,
        } => rsx! {
            App { tree, class_name, stylesheets }
        },
        Startup::Failed { message, details } => rsx! {
            FailedApp { message, details }
        },
    }
}

fn make_window_config(tree_path: &std::path::Path) -> dioxus::desktop::Config {
    use dioxus::desktop::{Config, WindowBuilder};

    let title = match tree_path.file_name() {
        Some(name) => format!("hastview - {}", name.to_string_lossy()),
        None => "hastview".to_string(),
    };
    let window = WindowBuilder::new()
        .with_title(title)
        .with_always_on_top(false);

    Config::default().with_window(window)
}
