//! # CLI Layer
//!
//! The only place that knows about terminal I/O, exit codes and argument
//! parsing. Each `handle_*` function calls one `TodoApi` method and prints
//! what comes back.
//!
//! Logical rejections (empty content, invalid id, unknown todo, bad filter)
//! arrive as messages and are printed like any other result, so the process
//! still exits 0. Only storage write and config failures reach `main` as
//! errors.

use super::print::{print_messages, print_todos};
use super::setup::{setup_logging, Cli, Commands};
use clap::Parser;
use todoz::api::TodoApi;
use todoz::config::TodoConfig;
use todoz::error::Result;
use todoz::store::fs::FileStore;
use tracing::debug;

struct AppContext {
    api: TodoApi<FileStore>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    let mut ctx = init_context(&cli)?;

    match cli.command {
        Commands::Add { content } => handle_add(&mut ctx, &content),
        Commands::List { completed } => handle_list(&ctx, completed.as_deref()),
        Commands::Update {
            id,
            content,
            completed,
        } => handle_update(&mut ctx, &id, content, completed),
        Commands::Delete { id } => handle_delete(&mut ctx, &id),
        Commands::DeleteAll { delete_completed } => handle_delete_all(&mut ctx, delete_completed),
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let cwd = std::env::current_dir()?;

    let mut config = TodoConfig::load(&cwd)?;
    if let Some(data_file) = &cli.data_file {
        config = config.with_data_file(data_file);
    }

    let data_path = config.data_path(&cwd);
    debug!(path = %data_path.display(), "using todo document");

    let store = FileStore::new(data_path).with_pretty(config.pretty);
    Ok(AppContext {
        api: TodoApi::new(store),
    })
}

fn handle_add(ctx: &mut AppContext, content: &str) -> Result<()> {
    let result = ctx.api.add_todo(content)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(ctx: &AppContext, completed: Option<&str>) -> Result<()> {
    let result = ctx.api.list_todos(completed)?;
    if result.messages.is_empty() {
        print_todos(&result.listed_todos);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_update(
    ctx: &mut AppContext,
    id: &str,
    content: Option<String>,
    completed: Option<bool>,
) -> Result<()> {
    let result = ctx.api.update_todo(id, content, completed)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, id: &str) -> Result<()> {
    let result = ctx.api.delete_todo(id)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete_all(ctx: &mut AppContext, delete_completed: Option<bool>) -> Result<()> {
    let result = ctx.api.delete_all(delete_completed)?;
    print_messages(&result.messages);
    Ok(())
}
