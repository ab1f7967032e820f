use clap::{ArgAction, Parser, Subcommand};
use std::path::Path;
use tajs_dom::{Document, ElementNode, Node};
use tajs_parser::{ParseOptions, DEFAULT_MAX_DEPTH};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "tajs")]
#[command(about = "tajs: parse, check and reformat tajs markup")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Maximum element nesting depth
    #[arg(long, global = true, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Reject documents with more than one top-level element
    #[arg(long, global = true)]
    single_root: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Command {
    /// Print the canonical serialization of a file
    Fmt {
        /// Input file
        path: String,
    },

    /// Check a file for errors without producing output
    Check {
        /// Input file
        path: String,
    },

    /// Print the text content of a file
    Text {
        /// Input file
        path: String,
    },

    /// Print an indented outline of elements, attributes and text
    Tree {
        /// Input file
        path: String,
    },
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let options = ParseOptions::new()
        .with_max_depth(cli.max_depth)
        .with_single_root(cli.single_root);
    tracing::debug!(?options, "parse options");

    match cli.command {
        Command::Fmt { path } => println!("{}", parse_file(&path, options)),
        Command::Check { path } => {
            parse_file(&path, options);
            eprintln!("OK: {path}");
        }
        Command::Text { path } => print!("{}", parse_file(&path, options).text_content()),
        Command::Tree { path } => print!("{}", outline(&parse_file(&path, options))),
    }
}

/// `RUST_LOG` wins when set; otherwise `-v` picks the level.
fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn read_source(path: &str) -> String {
    let p = Path::new(path);
    if !p.exists() {
        eprintln!("Error: file not found: {path}");
        std::process::exit(1);
    }
    match std::fs::read_to_string(p) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("Error reading {path}: {e}");
            std::process::exit(1);
        }
    }
}

fn parse_file(path: &str, options: ParseOptions) -> Document {
    let source = read_source(path);
    match tajs_parser::Parser::parse_with(&source, options) {
        Ok(doc) => doc,
        Err(e) => {
            eprintln!("{path}:{}:{}: parse error: {e}", e.line, e.column);
            std::process::exit(1);
        }
    }
}

fn outline(doc: &Document) -> String {
    let mut out = String::new();
    for el in doc {
        outline_element(el, 0, &mut out);
    }
    out
}

fn outline_element(el: &ElementNode, depth: usize, out: &mut String) {
    out.push_str(&"  ".repeat(depth));
    out.push_str(el.tag_name());
    if !el.attributes.is_empty() {
        out.push(' ');
        out.push_str(&el.attributes.to_string());
    }
    out.push('\n');

    for child in &el.children {
        match child {
            Node::Element(child) => outline_element(child, depth + 1, out),
            Node::Text(text) => {
                out.push_str(&"  ".repeat(depth + 1));
                out.push_str(&format!("{:?}\n", text.content));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outline() {
        let doc = tajs_parser::Parser::parse("<ul id=\"l\">\n<li>a</li></ul><p></p>").unwrap();
        assert_eq!(outline(&doc), "ul id=\"l\"\n  \"\\n\"\n  li\n    \"a\"\np\n");
    }

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_flags() {
        let cli = Cli::try_parse_from(["tajs", "fmt", "x.tajs", "--max-depth", "8", "-vv"]).unwrap();
        assert_eq!(cli.max_depth, 8);
        assert_eq!(cli.verbose, 2);
        assert!(!cli.single_root);
    }
}
