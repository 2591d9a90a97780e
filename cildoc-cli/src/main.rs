use clap::{Parser, Subcommand};

use cildoc_meta::{Modifiers, ValidationOptions, keywords, render, validate_with};

#[derive(Parser)]
#[command(name = "cildoc", about = "CIL member modifier inspector")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Reconstruct the declaration keywords for a raw modifier pattern
    Render {
        /// Raw modifier bits, decimal or 0x-prefixed hex
        flags: String,
        /// Fail instead of warning when the combination is illegal
        #[arg(short, long)]
        strict: bool,
        /// Treat a missing accessibility bit as an error
        #[arg(long)]
        require_accessibility: bool,
    },
    /// Check a raw modifier pattern against the modifier grammar
    Check {
        /// Raw modifier bits, decimal or 0x-prefixed hex
        flags: String,
        /// Treat a missing accessibility bit as an error
        #[arg(long)]
        require_accessibility: bool,
    },
    /// List the modifier vocabulary and bit assignments
    Flags,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Render {
            flags,
            strict,
            require_accessibility,
        } => cmd_render(&flags, strict, require_accessibility),
        Commands::Check {
            flags,
            require_accessibility,
        } => cmd_check(&flags, require_accessibility),
        Commands::Flags => cmd_flags(),
    }
}

fn parse_pattern(pattern: &str) -> Modifiers {
    let parsed = match pattern.strip_prefix("0x") {
        Some(hex) => u32::from_str_radix(hex, 16),
        None => pattern.parse(),
    };
    match parsed {
        Ok(bits) => Modifiers::from_bits_retain(bits),
        Err(e) => {
            eprintln!("Error: invalid flag pattern {pattern:?}: {e}");
            std::process::exit(1);
        }
    }
}

fn cmd_render(pattern: &str, strict: bool, require_accessibility: bool) {
    let modifiers = parse_pattern(pattern);
    let options = ValidationOptions {
        require_accessibility,
    };
    if let Err(e) = validate_with(modifiers, &options) {
        if strict {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
        log::warn!("Illegal modifier combination, rendering anyway: {e}");
    }
    println!("{}", render(modifiers));
}

fn cmd_check(pattern: &str, require_accessibility: bool) {
    let modifiers = parse_pattern(pattern);
    let options = ValidationOptions {
        require_accessibility,
    };
    match validate_with(modifiers, &options) {
        Ok(()) => println!("ok: {}", render(modifiers)),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

fn cmd_flags() {
    println!("{:<10} {:>6}  KEYWORD", "FLAG", "BIT");
    for (name, flag) in Modifiers::all().iter_names() {
        let keyword = keywords(flag).first().copied().unwrap_or("(reserved)");
        println!("{name:<10} {:#06x}  {keyword}", flag.bits());
    }
}
