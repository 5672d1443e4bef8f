//! undocx CLI - DOCX to HTML conversion tool

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use undocx::{
    detect_format_from_path, parse_file_with_options, Document, JsonFormat, ParseOptions,
    RenderOptions,
};

#[derive(Parser)]
#[command(name = "undocx")]
#[command(version)]
#[command(about = "Convert DOCX documents to HTML, text, and JSON", long_about = None)]
struct Cli {
    /// Input DOCX file
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Output HTML file (defaults to <FILE stem>.html)
    #[arg(value_name = "OUTPUT")]
    output: Option<PathBuf>,

    /// Keep content read before malformed XML instead of failing
    #[arg(long, global = true, env = "UNDOCX_LENIENT")]
    lenient: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert DOCX to all formats (HTML, text, JSON)
    Convert {
        /// Input DOCX file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output directory
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,
    },

    /// Convert DOCX to HTML
    Html {
        /// Input DOCX file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Emit only the body blocks, without the page shell
        #[arg(long)]
        fragment: bool,
    },

    /// Convert DOCX to plain text
    Text {
        /// Input DOCX file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Convert DOCX to JSON
    Json {
        /// Input DOCX file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Show document information
    Info {
        /// Input DOCX file
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// Show version information
    Version,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    let parse_options = if cli.lenient {
        ParseOptions::new().lenient()
    } else {
        ParseOptions::new()
    };

    let result = match cli.command {
        Some(Commands::Convert { input, output }) => {
            cmd_convert(&input, output.as_deref(), parse_options)
        }
        Some(Commands::Html {
            input,
            output,
            fragment,
        }) => cmd_html(&input, output.as_deref(), fragment, parse_options),
        Some(Commands::Text { input, output }) => {
            cmd_text(&input, output.as_deref(), parse_options)
        }
        Some(Commands::Json {
            input,
            output,
            compact,
        }) => cmd_json(&input, output.as_deref(), compact, parse_options),
        Some(Commands::Info { input }) => cmd_info(&input, parse_options),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            // Default behavior: write <stem>.html next to the input
            if let Some(input) = cli.input {
                cmd_default(&input, cli.output.as_deref(), parse_options)
            } else {
                println!("{}", "Usage: undocx <FILE> [OUTPUT]".yellow());
                println!("       undocx --help for more information");
                Ok(())
            }
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn default_html_path(input: &Path) -> PathBuf {
    input.with_extension("html")
}

fn write_or_print(output: Option<&Path>, content: &str) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(path) = output {
        fs::write(path, content)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", content);
    }
    Ok(())
}

fn cmd_default(
    input: &Path,
    output: Option<&Path>,
    options: ParseOptions,
) -> Result<(), Box<dyn std::error::Error>> {
    let output = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| default_html_path(input));

    let doc = parse_file_with_options(input, options)?;
    let html = undocx::render::to_html(&doc, &RenderOptions::default());
    fs::write(&output, html)?;

    println!(
        "{} {} -> {}",
        "Converted".green(),
        input.display(),
        output.display()
    );
    Ok(())
}

fn cmd_convert(
    input: &Path,
    output: Option<&Path>,
    options: ParseOptions,
) -> Result<(), Box<dyn std::error::Error>> {
    let output_dir = output.map(|p| p.to_path_buf()).unwrap_or_else(|| {
        let stem = input.file_stem().unwrap_or_default().to_string_lossy();
        PathBuf::from(format!("{}_output", stem))
    });

    fs::create_dir_all(&output_dir)?;

    let pb = ProgressBar::new(4);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {msg}")?
            .progress_chars("#>-"),
    );

    pb.set_message("Parsing DOCX...");
    let doc = parse_file_with_options(input, options)?;
    pb.inc(1);

    pb.set_message("Generating HTML...");
    let html = undocx::render::to_html(&doc, &RenderOptions::default());
    fs::write(output_dir.join("document.html"), &html)?;
    pb.inc(1);

    pb.set_message("Generating text...");
    let text = undocx::render::to_text(&doc);
    fs::write(output_dir.join("document.txt"), &text)?;
    pb.inc(1);

    pb.set_message("Generating JSON...");
    let json = undocx::render::to_json(&doc, JsonFormat::Pretty)?;
    fs::write(output_dir.join("content.json"), &json)?;
    pb.inc(1);

    pb.finish_with_message("Done!");

    println!("\n{}", "Output files:".green().bold());
    println!("  {} document.html", "├─".dimmed());
    println!("  {} document.txt", "├─".dimmed());
    println!("  {} content.json", "└─".dimmed());

    Ok(())
}

fn cmd_html(
    input: &Path,
    output: Option<&Path>,
    fragment: bool,
    options: ParseOptions,
) -> Result<(), Box<dyn std::error::Error>> {
    let doc = parse_file_with_options(input, options)?;
    let render_options = RenderOptions::new().with_fragment(fragment);
    let html = undocx::render::to_html(&doc, &render_options);
    write_or_print(output, &html)
}

fn cmd_text(
    input: &Path,
    output: Option<&Path>,
    options: ParseOptions,
) -> Result<(), Box<dyn std::error::Error>> {
    let doc = parse_file_with_options(input, options)?;
    let text = undocx::render::to_text(&doc);
    write_or_print(output, &text)
}

fn cmd_json(
    input: &Path,
    output: Option<&Path>,
    compact: bool,
    options: ParseOptions,
) -> Result<(), Box<dyn std::error::Error>> {
    let doc = parse_file_with_options(input, options)?;

    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };

    let json = undocx::render::to_json(&doc, format)?;
    write_or_print(output, &json)
}

fn cmd_info(input: &Path, options: ParseOptions) -> Result<(), Box<dyn std::error::Error>> {
    let format = detect_format_from_path(input)?;
    let doc = parse_file_with_options(input, options)?;

    println!("{}", "Document Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "File".bold(), input.display());
    println!("{}: {}", "Format".bold(), format);
    print_metadata(&doc);

    let stats = undocx::render::to_html_with_stats(&doc, &RenderOptions::default()).stats;

    println!();
    println!("{}", "Content Statistics".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "Blocks".bold(), doc.block_count());
    println!("{}: {}", "Headings".bold(), stats.heading_count);
    println!("{}: {}", "Paragraphs".bold(), stats.paragraph_count);
    println!(
        "{}: {} ({} rows, {} cells)",
        "Tables".bold(),
        stats.table_count,
        stats.row_count,
        stats.cell_count
    );
    println!("{}: {}", "Blank paragraphs".bold(), stats.skipped_paragraph_count);
    println!("{}: {}", "Words".bold(), stats.word_count);
    println!("{}: {}", "Characters".bold(), stats.char_count);

    Ok(())
}

fn print_metadata(doc: &Document) {
    let metadata = &doc.metadata;

    if let Some(ref title) = metadata.title {
        println!("{}: {}", "Title".bold(), title);
    }
    if let Some(ref author) = metadata.author {
        println!("{}: {}", "Author".bold(), author);
    }
    if let Some(ref subject) = metadata.subject {
        println!("{}: {}", "Subject".bold(), subject);
    }
    if let Some(ref keywords) = metadata.keywords {
        println!("{}: {}", "Keywords".bold(), keywords);
    }
    if let Some(ref created) = metadata.created {
        println!("{}: {}", "Created".bold(), created);
    }
    if let Some(ref modified) = metadata.modified {
        println!("{}: {}", "Modified".bold(), modified);
    }
}

fn cmd_version() {
    println!("{} {}", "undocx".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("DOCX to HTML conversion tool");
    println!();
    println!("License: MIT");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_html_path() {
        assert_eq!(
            default_html_path(Path::new("docs/report.docx")),
            PathBuf::from("docs/report.html")
        );
        assert_eq!(default_html_path(Path::new("notes")), PathBuf::from("notes.html"));
    }

    #[test]
    fn test_cli_parses_default_invocation() {
        let cli = Cli::try_parse_from(["undocx", "in.docx", "out.html"]).unwrap();
        assert_eq!(cli.input, Some(PathBuf::from("in.docx")));
        assert_eq!(cli.output, Some(PathBuf::from("out.html")));
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_cli_parses_subcommand_with_global_flag() {
        let cli = Cli::try_parse_from(["undocx", "html", "in.docx", "--fragment", "--lenient"])
            .unwrap();
        assert!(cli.lenient);
        assert!(matches!(
            cli.command,
            Some(Commands::Html { fragment: true, .. })
        ));
    }
}
