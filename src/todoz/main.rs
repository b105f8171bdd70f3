use clap::Parser;
use directories::ProjectDirs;
use std::path::PathBuf;
use todoz::api::{ConfigAction, MessageLevel, TodozApi, LOAD_FAILED};
use todoz::commands;
use todoz::config::TodozConfig;
use todoz::error::{Result, TodozError};
use todoz::export::FileDownload;
use todoz::model::ItemFilter;
use todoz::store::fs::FileStore;
use tracing::debug;

mod args;
mod cli;
use args::{Cli, Commands};
use cli::print::{print_config, print_messages, print_stats, print_todos};

const DATA_DIR_ENV_VAR: &str = "TODOZ_DATA";

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: TodozApi<FileStore>,
    data_dir: PathBuf,
    config: TodozConfig,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    todoz::logging::init(cli.verbose);

    let mut ctx = init_context()?;

    let mutates = matches!(
        cli.command,
        Some(Commands::Add { .. })
            | Some(Commands::Done { .. })
            | Some(Commands::Edit { .. })
            | Some(Commands::Rm { .. })
    );
    if mutates && ctx.api.error() == Some(LOAD_FAILED) {
        // Saving now would replace whatever is on disk with an empty list
        return Err(TodozError::Store(format!(
            "{}; not writing to {}",
            LOAD_FAILED,
            ctx.data_dir.display()
        )));
    }

    match cli.command {
        Some(Commands::Add { title }) => handle_add(&mut ctx, title),
        Some(Commands::List { active, completed }) => handle_list(&ctx, active, completed),
        Some(Commands::Done { selectors }) => handle_done(&mut ctx, selectors),
        Some(Commands::Edit { selector, title }) => handle_edit(&mut ctx, selector, title),
        Some(Commands::Rm { selectors }) => handle_rm(&mut ctx, selectors),
        Some(Commands::Export { out, no_bom }) => handle_export(&mut ctx, out, no_bom),
        Some(Commands::Stats) => handle_stats(&ctx),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        None => handle_list(&ctx, false, false),
    }?;

    match ctx.api.error() {
        Some(err) => Err(TodozError::Store(err.to_string())),
        None => Ok(()),
    }
}

fn data_dir() -> Result<PathBuf> {
    if let Some(dir) = std::env::var_os(DATA_DIR_ENV_VAR).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    ProjectDirs::from("com", "todoz", "todoz")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| TodozError::Store("Could not determine data directory".into()))
}

fn init_context() -> Result<AppContext> {
    let data_dir = data_dir()?;
    debug!(dir = %data_dir.display(), "using data directory");

    let config = TodozConfig::load(&data_dir)?;
    let api = TodozApi::new(FileStore::new(data_dir.clone()));

    Ok(AppContext {
        api,
        data_dir,
        config,
    })
}

fn handle_add(ctx: &mut AppContext, title: Vec<String>) -> Result<()> {
    let result = ctx.api.add_todo(&title.join(" "))?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(ctx: &AppContext, active: bool, completed: bool) -> Result<()> {
    let filter = if active {
        ItemFilter::Active
    } else if completed {
        ItemFilter::Completed
    } else {
        ItemFilter::All
    };
    let result = ctx.api.list_todos(filter);
    print_todos(&result.listed_items);
    print_messages(&result.messages);
    Ok(())
}

fn handle_done(ctx: &mut AppContext, selectors: Vec<String>) -> Result<()> {
    let result = ctx.api.toggle_todos(&selectors)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_edit(ctx: &mut AppContext, selector: String, title: Vec<String>) -> Result<()> {
    let result = ctx.api.update_todo(&selector, &title.join(" "))?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_rm(ctx: &mut AppContext, selectors: Vec<String>) -> Result<()> {
    let result = ctx.api.delete_todos(&selectors)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_export(ctx: &mut AppContext, out: Option<PathBuf>, no_bom: bool) -> Result<()> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let dir = out.unwrap_or_else(|| ctx.config.export_dir_from(&cwd));
    let mut sink = FileDownload::new(dir).with_bom(ctx.config.write_bom && !no_bom);

    let result = ctx.api.export_csv(&mut sink, None);
    print_messages(&result.messages);
    if result.has_errors() {
        return Err(TodozError::Export(format!(
            "could not write to {}",
            sink.dir().display()
        )));
    }
    Ok(())
}

fn handle_stats(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.stats();
    if let Some(stats) = &result.stats {
        print_stats(stats);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };
    let show_all = matches!(action, ConfigAction::ShowAll);

    let result = commands::config::run(&ctx.data_dir, action)?;
    if let Some(error) = result
        .messages
        .iter()
        .find(|m| m.level == MessageLevel::Error)
    {
        return Err(TodozError::Api(error.content.clone()));
    }
    if show_all {
        if let Some(config) = &result.config {
            print_config(config);
        }
    }
    print_messages(&result.messages);
    Ok(())
}
