use clap::Parser;
use pathtree::cli::{Args, OutputMode};
use pathtree::config::Config;
use pathtree::errors::AppError;
use pathtree::explorer::Explorer;
use pathtree::icon::IconMapper;
use pathtree::input::{self, ApiResponse};
use pathtree::render::{create_renderer, Expansion, OutputFormat, RenderConfig};
use pathtree::store::{FileStore, FILE_TREE_KEY};
use pathtree::terminal::{TerminalCapabilities, TreeChars};
use std::io::{self, Write};
use std::process::ExitCode;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let args = Args::parse();
    setup_tracing(&args);
    debug!("Parsed CLI arguments: {args:?}");

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn setup_tracing(args: &Args) {
    let ansi = atty::is(atty::Stream::Stderr);
    // RUST_LOG wins over --log-level when set
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .with_ansi(ansi)
            .without_time()
            .compact()
            .init();
    } else if let Some(level) = args.log_level.to_tracing_level() {
        tracing_subscriber::fmt()
            .with_max_level(level)
            .with_writer(io::stderr)
            .with_ansi(ansi)
            .without_time()
            .compact()
            .init();
    }
}

fn run(args: &Args) -> Result<(), AppError> {
    let config = Config::discover(args.config.as_deref())?;

    let key = args
        .key
        .clone()
        .or_else(|| config.store.key.clone())
        .unwrap_or_else(|| FILE_TREE_KEY.to_string());
    let store_path = args
        .store
        .clone()
        .or_else(|| config.store.path.clone())
        .unwrap_or_else(FileStore::default_location);
    let mut store = FileStore::new(store_path);
    debug!(store = %store.path().display(), key = %key, "using store");

    let (mut explorer, project_name) = initial_explorer(args, &store, &key)?;
    apply_edits(&mut explorer, args);

    if args.save {
        explorer.save(&mut store, &key)?;
    }

    let capabilities = TerminalCapabilities::new();
    let output = match args.output {
        OutputMode::Json => {
            let mut json = serde_json::to_string_pretty(explorer.forest())?;
            json.push('\n');
            json
        }
        mode => {
            let (format, tree_chars) = match mode {
                OutputMode::Tree => (OutputFormat::Tree, TreeChars::unicode()),
                OutputMode::Plain => (OutputFormat::Tree, TreeChars::ascii()),
                OutputMode::Md => (OutputFormat::Markdown, TreeChars::ascii()),
                _ => (OutputFormat::Tree, capabilities.tree_chars()),
            };
            let render_cfg = render_config(args, &config, &capabilities, project_name);
            let mut renderer = create_renderer(format, render_cfg, tree_chars);
            renderer.render_tree(explorer.forest())
        }
    };

    let mut stdout = io::stdout().lock();
    stdout.write_all(output.as_bytes())?;
    stdout.flush()?;
    Ok(())
}

/// Build the starting tree and, for JSON listings, the project name
fn initial_explorer(
    args: &Args,
    store: &FileStore,
    key: &str,
) -> Result<(Explorer, Option<String>), AppError> {
    if args.load {
        let mut explorer = Explorer::default();
        explorer.load(store, key)?;
        return Ok((explorer, None));
    }

    let mut paths = args.paths.clone();
    let mut project_name = None;

    if let Some(listing) = &args.from_json {
        let response = ApiResponse::load_from_file(listing)?;
        debug!(name = %response.name, count = response.filepaths.len(), "read path listing");
        paths.extend(response.filepaths);
        project_name = Some(response.name);
    }

    if args.stdin {
        paths.extend(input::read_path_list(args.delimiter())?);
    }

    debug!(count = paths.len(), "structuring paths");
    Ok((Explorer::from_paths(&paths), project_name))
}

fn apply_edits(explorer: &mut Explorer, args: &Args) {
    if !args.has_edits() {
        debug!("no edits requested");
        return;
    }
    for edit in &args.add_dir {
        if !explorer.add_folder(&edit.target, &edit.name) {
            warn!("No directory at '{}', skipped adding folder '{}'", edit.target, edit.name);
        }
    }
    for edit in &args.add_file {
        if !explorer.add_file(&edit.target, &edit.name) {
            warn!("No directory at '{}', skipped adding file '{}'", edit.target, edit.name);
        }
    }
    for path in &args.delete {
        if !explorer.delete(path) {
            warn!("Nothing to delete at '{}'", path);
        }
    }
    info!(revision = explorer.revision(), nodes = explorer.node_count(), "edits applied");
}

fn render_config(
    args: &Args,
    config: &Config,
    capabilities: &TerminalCapabilities,
    project_name: Option<String>,
) -> RenderConfig {
    let mut icons = IconMapper::new(args.is_icons_enabled(capabilities.supports_icons()));
    icons.apply_config(&config.icons);
    for icon_arg in &args.icon {
        icons.parse_cli_icon(icon_arg);
    }

    RenderConfig {
        icons,
        expansion: Expansion::collapsing(args.collapse.iter().cloned()),
        root_label: args.root_label.clone().or(project_name),
    }
}
