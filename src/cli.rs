use clap::Parser;
use ibooks_highlights::discover::{ANNOTATIONS_DIR, LIBRARY_DIR};
use ibooks_highlights::util::expand_home;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "ibooks-highlights")]
#[command(about = "iBooks Highlights Exporter", version)]
pub struct Cli {
    /// Output filename (default: output.html, or output.xml with --mindmap)
    #[arg(short = 'o')]
    pub output: Option<PathBuf>,
    /// Disable the javascript TOC in the output
    #[arg(long)]
    pub notoc: bool,
    /// Disable the bootstrap library in the output
    #[arg(long)]
    pub nobootstrap: bool,
    /// Generate a SimpleMind mind map instead of an .html file
    #[arg(long, requires = "book")]
    pub mindmap: bool,
    /// List the books in the library and exit
    #[arg(long, conflicts_with = "mindmap")]
    pub list: bool,
    /// Print the --list output as JSON
    #[arg(long, requires = "list")]
    pub json: bool,
    /// Name of the book for which annotations will be exported
    #[arg(long)]
    pub book: Option<String>,
    /// Directory holding the annotations database
    #[arg(long)]
    pub annotations_dir: Option<PathBuf>,
    /// Directory holding the library database
    #[arg(long)]
    pub library_dir: Option<PathBuf>,
    /// Log progress to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

pub fn default_annotations_dir() -> PathBuf {
    expand_home(ANNOTATIONS_DIR)
}

pub fn default_library_dir() -> PathBuf {
    expand_home(LIBRARY_DIR)
}
