use std::path::Path;

use tracing::debug;

use crate::cli::commands::*;
use crate::cli::output::*;
use crate::io::config_io;
use crate::io::storage::FileStore;
use crate::io::store::Store;
use crate::logging;
use crate::model::filter::StatusFilter;
use crate::ops::{category_ops, task_ops, view};

type CmdResult = Result<(), Box<dyn std::error::Error>>;

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub fn dispatch(cli: Cli) -> CmdResult {
    let json = cli.json;
    let dir = config_io::data_dir(cli.data_dir.as_deref().map(Path::new));
    let config = config_io::read_config(&dir)?;
    logging::init_logging(&config.log.level);

    let storage = FileStore::open(&dir)?;
    debug!(dir = %dir.display(), key = %config.storage.key, "opening store");
    let mut store = Store::open(storage, &config.storage.key);

    match cli.command {
        // Read commands
        Commands::Overview => cmd_overview(&store, json),
        Commands::Categories => cmd_categories(&store, json),
        Commands::List => cmd_list(&store, json),
        Commands::Whose(args) => cmd_whose(&store, args, json),

        // Category and view commands
        Commands::Category(cmd) => match cmd.action {
            CategoryAction::Add(args) => cmd_category_add(&mut store, args, json),
            CategoryAction::Rename(args) => cmd_category_rename(&mut store, args),
            CategoryAction::Rm(args) => cmd_category_rm(&mut store, args),
        },
        Commands::Select(args) => cmd_select(&mut store, args),
        Commands::Unselect => cmd_unselect(&mut store),
        Commands::Filter(args) => cmd_filter(&mut store, args),

        // Task commands
        Commands::Add(args) => cmd_add(&mut store, args, json),
        Commands::Edit(args) => cmd_edit(&mut store, args),
        Commands::Rm(args) => cmd_rm(&mut store, args),
        Commands::Toggle(args) => cmd_toggle(&mut store, args, json),
    }
}

// ---------------------------------------------------------------------------
// Read command handlers
// ---------------------------------------------------------------------------

fn cmd_overview(store: &Store<FileStore>, json: bool) -> CmdResult {
    let board = store.board();
    if json {
        println!("{}", serde_json::to_string_pretty(&overview_to_json(board))?);
        return Ok(());
    }

    println!("{}", format_counts(view::task_counts(board)));
    match board.selected_category() {
        Some(category) => println!("selected: {}", category.title),
        None => println!("filter: {}", board.current_filter),
    }
    if !board.categories.is_empty() {
        println!();
        for line in format_category_table(board) {
            println!("{}", line);
        }
    }
    Ok(())
}

fn cmd_categories(store: &Store<FileStore>, json: bool) -> CmdResult {
    let board = store.board();
    if json {
        let categories: Vec<CategoryJson> = board
            .categories
            .iter()
            .map(|c| category_to_json(board, c))
            .collect();
        println!("{}", serde_json::to_string_pretty(&categories)?);
    } else if board.categories.is_empty() {
        println!("(no categories)");
    } else {
        for line in format_category_table(board) {
            println!("{}", line);
        }
    }
    Ok(())
}

fn cmd_list(store: &Store<FileStore>, json: bool) -> CmdResult {
    let board = store.board();
    if json {
        println!("{}", serde_json::to_string_pretty(&list_to_json(board))?);
    } else {
        for line in format_list_view(board) {
            println!("{}", line);
        }
    }
    Ok(())
}

fn cmd_whose(store: &Store<FileStore>, args: TaskIdArgs, json: bool) -> CmdResult {
    let name = category_ops::category_name_for_task(store.board(), args.id);
    if json {
        let out = serde_json::json!({ "task": args.id, "category": name });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("{}", name);
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Category and view handlers
// ---------------------------------------------------------------------------

fn cmd_category_add(store: &mut Store<FileStore>, args: CategoryAddArgs, json: bool) -> CmdResult {
    let id = store.update(|board| category_ops::add_category(board, args.title, args.tasks))?;
    if json {
        println!("{}", serde_json::to_string_pretty(&serde_json::json!({ "id": id }))?);
    } else {
        println!("{}", CATEGORY_ADDED);
        println!("{}", id);
    }
    Ok(())
}

fn cmd_category_rename(store: &mut Store<FileStore>, args: CategoryRenameArgs) -> CmdResult {
    store.update(|board| category_ops::update_category_title(board, args.id, args.title))?;
    println!("{}", CATEGORY_RENAMED);
    Ok(())
}

fn cmd_category_rm(store: &mut Store<FileStore>, args: CategoryIdArgs) -> CmdResult {
    store.update(|board| category_ops::delete_category(board, args.id))?;
    println!("{}", CATEGORY_DELETED);
    Ok(())
}

fn cmd_select(store: &mut Store<FileStore>, args: SelectArgs) -> CmdResult {
    store.update(|board| category_ops::select_category(board, args.id))?;
    println!("selected: {}", view::header_title(store.board()));
    Ok(())
}

fn cmd_unselect(store: &mut Store<FileStore>) -> CmdResult {
    store.update(category_ops::clear_selection);
    println!("selection cleared");
    Ok(())
}

fn cmd_filter(store: &mut Store<FileStore>, args: FilterArgs) -> CmdResult {
    let filter = StatusFilter::parse_filter(&args.status).ok_or_else(|| {
        format!(
            "unknown status '{}' (expected: all, completed, pending)",
            args.status
        )
    })?;
    store.update(|board| category_ops::set_status_filter(board, filter));
    println!("showing: {}", view::header_title(store.board()));
    Ok(())
}

// ---------------------------------------------------------------------------
// Task handlers
// ---------------------------------------------------------------------------

fn cmd_add(store: &mut Store<FileStore>, args: AddArgs, json: bool) -> CmdResult {
    let id = store.update(|board| task_ops::add_task(board, args.description))?;
    if json {
        println!("{}", serde_json::to_string_pretty(&serde_json::json!({ "id": id }))?);
    } else {
        println!("{}", TASK_ADDED);
        println!("{}", id);
    }
    Ok(())
}

fn cmd_edit(store: &mut Store<FileStore>, args: EditArgs) -> CmdResult {
    store.update(|board| task_ops::update_task_description(board, args.id, args.description))?;
    println!("{}", TASK_UPDATED);
    Ok(())
}

fn cmd_rm(store: &mut Store<FileStore>, args: TaskIdArgs) -> CmdResult {
    store.update(|board| task_ops::delete_task(board, args.id))?;
    println!("{}", TASK_DELETED);
    Ok(())
}

fn cmd_toggle(store: &mut Store<FileStore>, args: TaskIdArgs, json: bool) -> CmdResult {
    let toggled = store.update(|board| task_ops::toggle_task(board, args.id));
    let Some(completed) = toggled else {
        debug!(task = args.id, "toggle matched no task");
        return Ok(());
    };

    if json {
        let task = task_ops::find_task(store.board(), args.id)
            .map(|t| task_to_json(store.board(), t));
        println!("{}", serde_json::to_string_pretty(&task)?);
    } else {
        let state = if completed { "completed" } else { "pending" };
        println!("{} → {}", args.id, state);
    }
    Ok(())
}
