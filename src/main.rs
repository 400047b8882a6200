//! # chatframe CLI
//!
//! Command-line interface for the chatframe library.

use std::path::Path;
use std::process;
use std::time::Instant;

use clap::Parser as ClapParser;
use tracing_subscriber::EnvFilter;

use chatframe::ChatframeError;
use chatframe::cli::{Args, DEFAULT_OUTPUT};
use chatframe::config::ParseConfig;
use chatframe::core::{FilterConfig, apply_filters};
use chatframe::format::{OutputFormat, write_to_format};
use chatframe::parser::TranscriptParser;

fn main() {
    let args = <Args as ClapParser>::parse();
    init_tracing(args.verbose);

    if let Err(e) = run(&args) {
        eprintln!("❌ Error: {}", e);
        process::exit(1);
    }
}

/// Diagnostics go to stderr; `RUST_LOG` overrides the default level.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "info" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

fn run(args: &Args) -> Result<(), ChatframeError> {
    let total_start = Instant::now();
    let format: OutputFormat = args.format.into();
    let output_path = adjust_output_extension(&args.output, format);

    println!("📦 chatframe v{}", env!("CARGO_PKG_VERSION"));
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("📂 Input:   {}", args.input);
    println!("💾 Output:  {}", output_path);
    println!("📄 Format:  {}", format);

    let mut filter_config = FilterConfig::new();

    if let Some(ref after) = args.after {
        filter_config = filter_config.with_date_from(after)?;
        println!("📅 After:   {}", after);
    }

    if let Some(ref before) = args.before {
        filter_config = filter_config.with_date_to(before)?;
        println!("📅 Before:  {}", before);
    }

    if let Some(ref from) = args.from {
        filter_config = filter_config.with_sender(from.clone());
        println!("👤 From:    {}", from);
    }

    if args.no_notifications {
        filter_config = filter_config.without_notifications();
        println!("🔕 Notifications excluded");
    }

    println!();

    let config = ParseConfig::new().with_date_order(args.date_order.into());
    let parser = TranscriptParser::with_config(config);

    println!("⏳ Parsing transcript...");
    let parse_start = Instant::now();
    let table = parser.parse(Path::new(&args.input))?;
    let parse_time = parse_start.elapsed();

    let participants: Vec<String> = table
        .participants()
        .into_iter()
        .map(str::to_string)
        .collect();
    let (messages, report) = table.into_parts();
    println!(
        "   Found {} messages ({:.2}s)",
        report.parsed,
        parse_time.as_secs_f64()
    );

    let final_messages = if filter_config.is_active() {
        println!("🔍 Filtering messages...");
        let filtered = apply_filters(messages, &filter_config);
        println!("   {} messages after filtering", filtered.len());
        filtered
    } else {
        messages
    };

    println!("💾 Writing {}...", format);
    write_to_format(&final_messages, &output_path, format)?;

    println!();
    println!("✅ Done! Output saved to {}", output_path);

    println!();
    println!("📊 Summary:");
    println!("   Format:        {}", report.format);
    println!("   Date order:    {}", report.date_order);
    println!("   Messages:      {}", report.parsed);
    println!("   Notifications: {}", report.notifications);
    println!("   Dropped:       {}", report.dropped_count());
    if report.ambiguous_dates > 0 {
        println!("   Ambiguous:     {} dates", report.ambiguous_dates);
    }
    if filter_config.is_active() {
        println!("   Written:       {} rows", final_messages.len());
    }
    println!("   Participants:  {}", participants.join(", "));

    println!();
    println!(
        "⚡ Total time:  {:.2}s",
        total_start.elapsed().as_secs_f64()
    );

    Ok(())
}

/// Adjusts output file extension based on format if using default output.
fn adjust_output_extension(output: &str, format: OutputFormat) -> String {
    if output != DEFAULT_OUTPUT {
        return output.to_string();
    }

    format!("chat_table.{}", format.extension())
}
