use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use longform::{ExtractOptions, ExtractService, FallbackTag, LinkStyle};

#[derive(Parser, Debug)]
#[command(name = "longform", author, version, about)]
struct Args {
    /// Input HTML file exported from the editor.
    input: PathBuf,

    /// Output HTML file.
    #[arg(default_value = "extracted.html")]
    output: PathBuf,

    /// Prefix of the editor's block class markers.
    #[arg(long, default_value = "longform-")]
    class_prefix: String,

    /// Replace links with their plain text.
    #[arg(long)]
    flatten_links: bool,

    /// Tag for blocks no rule recognizes.
    #[arg(long, value_enum, default_value_t = Fallback::Div)]
    fallback: Fallback,

    /// Title of the generated document.
    #[arg(long, default_value = "Extracted Content")]
    title: String,

    /// Write only the converted blocks, without the document template.
    #[arg(long)]
    fragment: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Fallback {
    /// Always use <div>
    Div,
    /// Keep the block element's own tag
    Element,
}

impl From<&Args> for ExtractOptions {
    fn from(args: &Args) -> Self {
        ExtractOptions {
            class_prefix: args.class_prefix.clone(),
            link_style: if args.flatten_links {
                LinkStyle::Flatten
            } else {
                LinkStyle::Preserve
            },
            fallback_tag: match args.fallback {
                Fallback::Div => FallbackTag::Div,
                Fallback::Element => FallbackTag::Element,
            },
            title: args.title.clone(),
            ..Default::default()
        }
    }
}

/// Convert `args.input` and write the result, returning the number of blocks found.
fn run(args: &Args) -> Result<usize> {
    let html = fs::read_to_string(&args.input)
        .with_context(|| format!("failed to read {}", args.input.display()))?;

    let service = ExtractService::with_options(ExtractOptions::from(args));
    let extraction = service
        .extract_html(&html)
        .with_context(|| format!("failed to convert {}", args.input.display()))?;

    log::info!(
        "{} blocks found, {} emitted",
        extraction.blocks_found,
        extraction.document.blocks.len()
    );
    if extraction.document.is_empty() {
        log::warn!("no content extracted from {}", args.input.display());
    }

    let output = if args.fragment {
        service.render_fragment(&extraction)
    } else {
        service.render_document(&extraction)
    };

    fs::write(&args.output, output)
        .with_context(|| format!("failed to write {}", args.output.display()))?;

    Ok(extraction.blocks_found)
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => {
            let _ = err.print();
            return if err.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    if !args.input.exists() {
        eprintln!("Error: Input file \"{}\" not found", args.input.display());
        return ExitCode::FAILURE;
    }

    match run(&args) {
        Ok(blocks) => {
            println!("Success! Extracted content saved to: {}", args.output.display());
            println!("   Processed {} blocks", blocks);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}
