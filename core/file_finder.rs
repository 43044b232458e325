use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Debug, Parser, Clone)]
#[clap(
    version = "0.1.0",
    about = "Recursively strip C/C++ comments from source files (main arguments)",
    long_about = "These are the main arguments for the in-place comment stripping run."
)]
pub struct DecommentArgs {
    #[clap(help = "Root directory whose C/C++ sources will be rewritten in place")]
    pub path: PathBuf,

    #[clap(long, help = "Skip the confirmation prompt")]
    pub no_confirm: bool,
}

#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    #[clap(about = "Generate shell completion scripts")]
    Completion(CompletionArgs),
}

#[derive(Debug, Parser, Clone)]
pub struct CompletionArgs {
    #[clap(value_parser = clap::value_parser!(clap_complete::Shell))]
    pub shell: clap_complete::Shell,
}

#[derive(Debug, Parser, Clone)]
#[clap(
    name = "decomment",
    version = "0.1.0",
    about = "Recursively strip C/C++ comments from source files",
    long_about = "Removes // and /* */ comments from every C/C++ source file under a directory,\nrewriting the files in place with their original encoding.",
    propagate_version = true,
    subcommand_negates_reqs = true
)]
pub struct CliArgs {
    #[clap(subcommand)]
    pub command: Option<Command>,

    #[clap(flatten)]
    pub main_opts: DecommentArgs,
}

/// Case-sensitive extension allow-list; `Foo.CPP` is not a target.
pub const SOURCE_EXTENSIONS: &[&str] = &["cpp", "h", "hpp", "c", "cxx"];

fn has_source_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| SOURCE_EXTENSIONS.contains(&ext))
}

/// Collects every allow-listed source file under the root, sorted. Symlinks
/// are not followed, so a link cycle cannot trap the walk. The root must be
/// an existing directory; anything else fails the whole run.
pub fn find_files(args: &DecommentArgs) -> Result<Vec<PathBuf>> {
    let root = &args.path;
    if !root.is_dir() {
        anyhow::bail!("Not a directory: {}", root.display());
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(root) {
        match entry {
            Ok(e) => {
                if e.file_type().is_file() && has_source_extension(e.path()) {
                    files.push(e.into_path());
                }
            }
            Err(e) => {
                eprintln!("Warn: {}", e);
            }
        }
    }
    files.sort();
    Ok(files)
}
