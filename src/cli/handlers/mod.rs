mod init;
pub use init::cmd_init;

use std::path::{Path, PathBuf};
use std::rc::Rc;

use crate::cli::commands::*;
use crate::cli::output::*;
use crate::io::config_io;
use crate::io::lock::{FileLock, LockError};
use crate::io::recovery;
use crate::io::store::{FileStore, StoreError};
use crate::model::aesthetic::Filter;
use crate::model::config::Config;
use crate::ops::boards::{SaveOutcome, resolve_pins};
use crate::ops::session::Session;
use crate::ops::upload::UploadForm;

type CmdResult = Result<(), Box<dyn std::error::Error>>;

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub fn dispatch(cli: Cli) -> CmdResult {
    let json = cli.json;
    let data_dir = config_io::resolve_data_dir(cli.data_dir.as_deref());

    match cli.command {
        Commands::Init(args) => cmd_init(&data_dir, args),

        // Read commands
        Commands::List(args) => cmd_list(&data_dir, args, json),
        Commands::Show(args) => cmd_show(&data_dir, args, json),
        Commands::Boards => cmd_boards(&data_dir, json),
        Commands::Board(BoardCmd {
            action: BoardAction::Show { id },
        }) => cmd_board_show(&data_dir, &id, json),
        Commands::Aesthetics => cmd_aesthetics(json),
        Commands::Recovery(args) => cmd_recovery(&data_dir, args, json),

        // Write commands
        Commands::Upload(args) => cmd_upload(&data_dir, args, json),
        Commands::Board(BoardCmd {
            action: BoardAction::New { name },
        }) => cmd_board_new(&data_dir, &name, json),
        Commands::Save(args) => cmd_save(&data_dir, args, json),
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// An opened data directory
struct Workspace {
    dir: PathBuf,
    config: Config,
    store: Rc<FileStore>,
}

impl Workspace {
    /// Open for reading; a missing directory is not created
    fn open(dir: &Path) -> Self {
        Workspace {
            dir: dir.to_path_buf(),
            config: config_io::read_config(dir),
            store: Rc::new(FileStore::at(dir)),
        }
    }

    /// Open for writing, creating the directory if needed
    fn open_for_write(dir: &Path) -> Result<Self, StoreError> {
        let store = Rc::new(FileStore::open(dir)?);
        Ok(Workspace {
            dir: dir.to_path_buf(),
            config: config_io::read_config(dir),
            store,
        })
    }

    fn session(&self) -> Session {
        Session::open(self.store.clone())
    }

    /// Hold for the whole load-mutate-save cycle of a write command
    fn lock(&self) -> Result<FileLock, LockError> {
        FileLock::acquire_configured(&self.dir, &self.config.lock)
    }
}

fn print_json<T: serde::Serialize>(value: &T) -> CmdResult {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

// ---------------------------------------------------------------------------
// Read commands
// ---------------------------------------------------------------------------

fn cmd_list(data_dir: &Path, args: ListArgs, json: bool) -> CmdResult {
    let ws = Workspace::open(data_dir);
    let mut session = ws.session();
    let query = args.query.unwrap_or_default();

    session.on_filter_change(args.filter);
    session.on_query_change(query.clone());
    let total = session.catalog().len();
    let pins = session.visible();

    if json {
        return print_json(&PinListJson {
            filter: args.filter.key(),
            query: &query,
            pins,
        });
    }

    println!(
        "{}",
        format_listing_header(args.filter, &query, pins.len(), total)
    );
    if pins.is_empty() {
        println!("no pins match");
    }
    for line in format_pin_listing(&pins, &ws.config.display) {
        println!("{}", line);
    }
    Ok(())
}

fn cmd_show(data_dir: &Path, args: ShowArgs, json: bool) -> CmdResult {
    let ws = Workspace::open(data_dir);
    let session = ws.session();
    let pin = session
        .catalog()
        .get(&args.id)
        .ok_or_else(|| format!("pin not found: {}", args.id))?;
    let boards = session.boards().boards();

    if json {
        return print_json(&PinDetailJson {
            pin,
            boards: boards
                .iter()
                .map(|b| BoardMembershipJson {
                    id: &b.id,
                    name: &b.name,
                    saved: b.contains(&pin.id),
                })
                .collect(),
        });
    }

    for line in format_pin_detail(pin, boards) {
        println!("{}", line);
    }
    Ok(())
}

fn cmd_boards(data_dir: &Path, json: bool) -> CmdResult {
    let ws = Workspace::open(data_dir);
    let session = ws.session();
    let catalog = session.catalog();
    let boards = session.boards().boards();

    if json {
        let out: Vec<BoardJson> = boards
            .iter()
            .map(|b| board_to_json(b, &resolve_pins(b, catalog)))
            .collect();
        return print_json(&out);
    }

    for (i, board) in boards.iter().enumerate() {
        if i > 0 {
            println!();
        }
        let pins = resolve_pins(board, catalog);
        for line in format_board(board, &pins, &ws.config.display) {
            println!("{}", line);
        }
    }
    Ok(())
}

fn cmd_board_show(data_dir: &Path, id: &str, json: bool) -> CmdResult {
    let ws = Workspace::open(data_dir);
    let session = ws.session();
    let board = session
        .boards()
        .get(id)
        .ok_or_else(|| format!("board not found: {}", id))?;
    let pins = resolve_pins(board, session.catalog());

    if json {
        return print_json(&board_to_json(board, &pins));
    }
    for line in format_board(board, &pins, &ws.config.display) {
        println!("{}", line);
    }
    Ok(())
}

fn cmd_aesthetics(json: bool) -> CmdResult {
    if json {
        let options: Vec<FilterOptionJson> = Filter::options()
            .map(|f| FilterOptionJson {
                key: f.key(),
                label: f.label(),
            })
            .collect();
        return print_json(&options);
    }
    for line in format_filter_options() {
        println!("{}", line);
    }
    Ok(())
}

fn cmd_recovery(data_dir: &Path, args: RecoveryCmd, json: bool) -> CmdResult {
    match args.action {
        Some(RecoveryAction::Prune { days, all }) => {
            let before = days.map(|d| chrono::Utc::now() - chrono::Duration::days(d));
            let removed = recovery::prune_recovery(data_dir, before, all)?;
            if json {
                return print_json(&serde_json::json!({ "pruned": removed }));
            }
            println!(
                "pruned {} {}",
                removed,
                if removed == 1 { "entry" } else { "entries" }
            );
            Ok(())
        }
        None => {
            let entries = recovery::read_recovery_entries(data_dir, Some(args.limit), None);
            if json {
                return print_json(&recovery_to_json(&entries));
            }
            if entries.is_empty() {
                println!("recovery log is empty");
                return Ok(());
            }
            if let Some(summary) = recovery::recovery_summary(data_dir) {
                let mut line = format!(
                    "{} entries in {}",
                    summary.entry_count,
                    recovery::recovery_log_path(data_dir).display()
                );
                if let Some(oldest) = summary.oldest {
                    line.push_str(&format!(", oldest {}", oldest.format("%Y-%m-%d")));
                }
                println!("{}", line);
                println!();
            }
            for entry in &entries {
                print!("{}", entry.to_display_markdown());
            }
            Ok(())
        }
    }
}

// ---------------------------------------------------------------------------
// Write commands
// ---------------------------------------------------------------------------

fn cmd_upload(data_dir: &Path, args: UploadArgs, json: bool) -> CmdResult {
    let ws = Workspace::open_for_write(data_dir)?;
    let _lock = ws.lock()?;
    let mut session = ws.session();

    let form = UploadForm {
        title: args.title,
        image: args.image,
        tags: args.tags,
        aesthetics: if args.aesthetics.is_empty() {
            None
        } else {
            Some(args.aesthetics)
        },
        author: args.author,
    };
    let pin = session.on_upload(&form);

    if json {
        return print_json(pin);
    }
    println!("added {} {}", pin.id, pin.title);
    Ok(())
}

fn cmd_board_new(data_dir: &Path, name: &str, json: bool) -> CmdResult {
    let ws = Workspace::open_for_write(data_dir)?;
    let _lock = ws.lock()?;
    let mut session = ws.session();

    let board = session
        .on_create_board(name)
        .ok_or("board name cannot be blank")?;

    if json {
        return print_json(&board_to_json(board, &[]));
    }
    println!("created {} {}", board.id, board.name);
    Ok(())
}

fn cmd_save(data_dir: &Path, args: SaveArgs, json: bool) -> CmdResult {
    let ws = Workspace::open_for_write(data_dir)?;
    let _lock = ws.lock()?;
    let mut session = ws.session();

    // A board may still hold an id the catalog no longer has; allow removing it
    let already_saved = session
        .boards()
        .get(&args.board)
        .is_some_and(|b| b.contains(&args.pin));
    if !already_saved && session.catalog().get(&args.pin).is_none() {
        return Err(format!("pin not found: {}", args.pin).into());
    }
    let outcome = session
        .on_toggle_save(&args.pin, &args.board)
        .ok_or_else(|| format!("board not found: {}", args.board))?;

    if json {
        return print_json(&SaveJson {
            pin: &args.pin,
            board: &args.board,
            saved: outcome == SaveOutcome::Saved,
        });
    }

    let name = session
        .boards()
        .get(&args.board)
        .map(|b| b.name.as_str())
        .unwrap_or(args.board.as_str());
    match outcome {
        SaveOutcome::Saved => println!("saved {} to {}", args.pin, name),
        SaveOutcome::Removed => println!("removed {} from {}", args.pin, name),
    }
    Ok(())
}
