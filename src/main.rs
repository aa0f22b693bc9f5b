//! CLI entry point for arbor

use std::env;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};

use arbor::{IndentStyle, RenderPolicy, StreamSink, TreeWalker};

/// Indentation drawing convention.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum IndentMode {
    /// Continuation bar on every ancestor level
    #[default]
    Flat,
    /// Blank padding once an ancestor chain is closed
    Padded,
}

impl From<IndentMode> for IndentStyle {
    fn from(mode: IndentMode) -> Self {
        match mode {
            IndentMode::Flat => IndentStyle::Flat,
            IndentMode::Padded => IndentStyle::Padded,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "arbor")]
#[command(about = "Display a directory tree with optional size, date, and path annotations")]
#[command(version)]
struct Args {
    /// Directory to display
    #[arg(default_value = ".")]
    path: PathBuf,

    /// List all entries, including hidden dot files
    #[arg(short, long)]
    all: bool,

    /// List only subdirectories, no files
    #[arg(short = 'd', long = "dirs-only")]
    dirs_only: bool,

    /// List directories before files
    #[arg(long = "dirsfirst")]
    dirs_first: bool,

    /// Exclude directories that would render no children
    #[arg(long = "prune")]
    prune: bool,

    /// Print the full path for each entry
    #[arg(short = 'f', long = "full-path")]
    full_path: bool,

    /// Include the last-modified date for each file
    #[arg(short = 'D', long = "date")]
    date: bool,

    /// Include the size of each file as a bare byte count
    #[arg(short = 's', long = "size")]
    size: bool,

    /// Include the size of each file as "<n> bytes"
    #[arg(short = 'b', long = "bytes")]
    bytes: bool,

    /// Do not print indentation lines or branch glyphs
    #[arg(short = 'i', long = "no-indent")]
    no_indent: bool,

    /// Omit the summary report at the end of the listing
    #[arg(long = "noreport")]
    noreport: bool,

    /// Descend only N levels deep
    #[arg(short = 'L', long = "level", value_name = "N")]
    level: Option<usize>,

    /// List only files matching pattern (can be used multiple times)
    #[arg(short = 'P', long = "pattern")]
    pattern: Vec<String>,

    /// Ignore files and directories matching pattern (can be used multiple times)
    #[arg(short = 'I', long = "ignore")]
    ignore: Vec<String>,

    /// Indentation drawing style
    #[arg(long = "indent-style", value_name = "STYLE", default_value = "flat")]
    indent_style: IndentMode,
}

fn main() {
    let args = Args::parse();

    if args.level == Some(0) {
        eprintln!("arbor: invalid --level: must be greater than 0");
        process::exit(1);
    }

    let root = if args.path.is_absolute() {
        args.path.clone()
    } else {
        env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(&args.path)
    };
    // A clean absolute form for -f; the joined path may still contain "." or
    // ".." components.
    let root = if args.full_path {
        root.canonicalize().unwrap_or(root)
    } else {
        root
    };

    if !root.is_dir() {
        eprintln!(
            "arbor: cannot access '{}': not a directory",
            args.path.display()
        );
        process::exit(1);
    }

    let policy = RenderPolicy {
        include_hidden: args.all,
        dirs_only: args.dirs_only,
        dirs_first: args.dirs_first,
        prune_empty: args.prune,
        skip_indent: args.no_indent,
        full_path: args.full_path,
        show_size: args.size,
        show_size_in_bytes: args.bytes,
        show_modified: args.date,
        skip_summary: args.noreport,
        indent: args.indent_style.into(),
        max_depth: args.level,
        match_patterns: args.pattern,
        ignore_patterns: args.ignore,
    };

    let mut sink = StreamSink::new(BufWriter::new(io::stdout().lock()));
    let mut walker = TreeWalker::new(&policy);

    let result = walker
        .walk(&root, &mut sink)
        .map_err(io::Error::other)
        .and_then(|_| sink.into_inner().flush());

    if let Err(e) = result {
        eprintln!("arbor: error writing output: {}", e);
        process::exit(1);
    }
}
