use clap::{Args as ClapArgs, Parser, Subcommand};
use indexmap::IndexMap;
use jdq_core::{PathResolver, fsutil, string_paths};
use serde_json::Value;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(
    name = "jdq-cli",
    about = "Query JSON files via dot-paths (a.b.0.c, \\. escapes, negative indices)",
    version
)]
struct Cli {
    /// Print lookup diagnostics for failed paths (RUST_LOG still honored)
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Subcommand, Debug)]
enum Cmd {
    /// Get the value at one dot-path
    Get(GetArgs),
    /// Get values at several dot-paths, printed as a JSON object
    Batch(BatchArgs),
    /// Timestamped backup copy of a file or directory
    Backup(BackupArgs),
}

#[derive(ClapArgs, Debug)]
struct GetArgs {
    /// JSON file to load
    file: PathBuf,
    /// Dot-path, e.g. profile.slots.-1.name
    #[arg(long)]
    at: String,
    /// Exit 3 on "not found" instead of printing null
    #[arg(long, default_value_t = false)]
    strict: bool,
}

#[derive(ClapArgs, Debug)]
struct BatchArgs {
    /// JSON file to load
    file: PathBuf,
    /// Dot-path; may repeat
    #[arg(long)]
    at: Vec<String>,
    /// JSON file holding an array of dot-path strings
    #[arg(long)]
    list: Option<PathBuf>,
    /// Report found/not-found per path instead of null fallbacks
    #[arg(long, default_value_t = false)]
    strict: bool,
}

#[derive(ClapArgs, Debug)]
struct BackupArgs {
    /// File or directory to copy
    path: PathBuf,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    match cli.cmd {
        Cmd::Get(a) => cmd_get(a),
        Cmd::Batch(a) => cmd_batch(a),
        Cmd::Backup(a) => cmd_backup(a),
    }
}

fn init_logging(verbose: bool) {
    let mut builder = env_logger::Builder::from_default_env();
    if verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.init();
}

fn load_json(path: &Path) -> Value {
    let data = std::fs::read(path).unwrap_or_else(|e| {
        eprintln!("error: {}: {}", path.display(), e);
        std::process::exit(2);
    });
    serde_json::from_slice(&data).unwrap_or_else(|e| {
        eprintln!("error: {}: {}", path.display(), e);
        std::process::exit(2);
    })
}

fn cmd_get(args: GetArgs) {
    let root = load_json(&args.file);
    let resolver = PathResolver::new();
    if args.strict {
        match resolver.try_get(&root, &args.at) {
            Some(v) => println!("{}", serde_json::to_string_pretty(v).unwrap()),
            None => {
                eprintln!("not found: {}", args.at);
                std::process::exit(3);
            }
        }
    } else {
        let v = resolver.get(&root, &args.at);
        println!("{}", serde_json::to_string_pretty(v).unwrap());
    }
}

fn cmd_batch(args: BatchArgs) {
    let root = load_json(&args.file);
    let mut paths = args.at;
    let list_doc = args.list.as_deref().map(load_json);
    if let Some(doc) = &list_doc {
        paths.extend(string_paths(doc).into_iter().map(str::to_string));
    }
    let resolver = PathResolver::new();
    if args.strict {
        let mut out: IndexMap<String, Value> = IndexMap::new();
        for (path, hit) in resolver.try_get_all(&root, &paths) {
            let entry = match hit {
                Some(v) => serde_json::json!({"found": true, "value": v}),
                None => serde_json::json!({"found": false, "value": null}),
            };
            out.insert(path, entry);
        }
        println!("{}", serde_json::to_string_pretty(&out).unwrap());
    } else {
        let out = resolver.get_all(&root, &paths);
        println!("{}", serde_json::to_string_pretty(&out).unwrap());
    }
}

fn cmd_backup(args: BackupArgs) {
    match fsutil::backup_copy(&args.path) {
        Ok(dest) => println!("{}", dest.display()),
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(2);
        }
    }
}
