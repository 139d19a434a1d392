//! shelf-identifiers CLI
//!
//! Validate, convert, format and extract book barcodes from the command line.

use std::error::Error;
use std::io;
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use serde_json::json;
use tracing_subscriber::EnvFilter;

use shelf_identifiers::{
    extract_isbns, format_isbn, identify, isbn13_to_10, to_isbn13, Identifier,
};

#[derive(Parser)]
#[command(name = "shelf-identifiers", version, about = "Book barcode identifier tools")]
struct Cli {
    /// Print one JSON object per line instead of plain text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Report the kind of each code, or "invalid"
    Validate {
        #[arg(required = true)]
        codes: Vec<String>,
    },
    /// Convert codes to ISBN-13 (default) or ISBN-10
    Convert {
        #[arg(long, value_enum, default_value_t = Target::Isbn13)]
        to: Target,
        #[arg(required = true)]
        codes: Vec<String>,
    },
    /// Hyphenate ISBNs for display
    Format {
        #[arg(required = true)]
        codes: Vec<String>,
    },
    /// Show kind, normalized value and ISBN equivalents
    Identify {
        #[arg(required = true)]
        codes: Vec<String>,
    },
    /// Find ISBNs in text ("-" reads stdin)
    Extract { text: String },
}

#[derive(Clone, Copy, ValueEnum)]
enum Target {
    Isbn10,
    Isbn13,
}

fn main() -> Result<ExitCode, Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let ok = match cli.command {
        Command::Validate { codes } => validate(&codes, cli.json)?,
        Command::Convert { to, codes } => convert(&codes, to, cli.json)?,
        Command::Format { codes } => format_all(&codes, cli.json)?,
        Command::Identify { codes } => identify_all(&codes, cli.json)?,
        Command::Extract { text } => extract(&text, cli.json)?,
    };

    Ok(if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}

fn print_json(value: serde_json::Value) -> Result<(), Box<dyn Error>> {
    println!("{}", serde_json::to_string(&value)?);
    Ok(())
}

fn validate(codes: &[String], as_json: bool) -> Result<bool, Box<dyn Error>> {
    let mut ok = true;
    for code in codes {
        let kind = identify(code);
        ok &= kind.is_some();
        if as_json {
            print_json(json!({ "input": code, "valid": kind.is_some(), "kind": kind }))?;
        } else {
            match kind {
                Some(kind) => println!("{code}\t{kind}"),
                None => println!("{code}\tinvalid"),
            }
        }
    }
    Ok(ok)
}

fn convert(codes: &[String], to: Target, as_json: bool) -> Result<bool, Box<dyn Error>> {
    let mut ok = true;
    for code in codes {
        let converted = match to {
            Target::Isbn13 => to_isbn13(code),
            Target::Isbn10 => to_isbn13(code).as_deref().and_then(isbn13_to_10),
        };
        ok &= converted.is_some();
        if as_json {
            print_json(json!({ "input": code, "output": converted }))?;
        } else {
            println!("{code}\t{}", converted.as_deref().unwrap_or("-"));
        }
    }
    Ok(ok)
}

fn format_all(codes: &[String], as_json: bool) -> Result<bool, Box<dyn Error>> {
    for code in codes {
        let formatted = format_isbn(code);
        if as_json {
            print_json(json!({ "input": code, "output": formatted }))?;
        } else {
            println!("{formatted}");
        }
    }
    Ok(true)
}

fn identify_all(codes: &[String], as_json: bool) -> Result<bool, Box<dyn Error>> {
    let mut ok = true;
    for code in codes {
        match Identifier::parse(code) {
            Ok(id) if as_json => print_json(serde_json::to_value(&id)?)?,
            Ok(id) => println!(
                "{id}\t{}\tisbn13={}\tisbn10={}",
                id.kind,
                id.isbn13.as_deref().unwrap_or("-"),
                id.isbn10.as_deref().unwrap_or("-"),
            ),
            Err(e) => {
                ok = false;
                if as_json {
                    print_json(json!({ "input": code, "error": e.to_string() }))?;
                } else {
                    eprintln!("{e}");
                }
            }
        }
    }
    Ok(ok)
}

fn extract(text: &str, as_json: bool) -> Result<bool, Box<dyn Error>> {
    let text = if text == "-" {
        io::read_to_string(io::stdin())?
    } else {
        text.to_string()
    };

    let isbns = extract_isbns(&text);
    if as_json {
        print_json(json!({ "isbns": isbns }))?;
    } else {
        for isbn in &isbns {
            println!("{isbn}");
        }
    }
    Ok(!isbns.is_empty())
}
