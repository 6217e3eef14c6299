//! Gendeps CLI - Makefile-fragment dependency generator
//!
//! Usage: gendeps <COMMAND>
//!
//! Commands:
//!   gen     Generate one .d dependency file per source file
//!   list    Preview the scans gen would run, without running them
//!   doctor  Validate the project layout and dependency tool

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand};

/// Gendeps - Makefile-fragment dependency generator
#[derive(Parser, Debug)]
#[command(name = "gendeps")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Output format for CI
    #[arg(long, global = true)]
    json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate one .d dependency file per source file
    Gen {
        /// Project base directory
        #[arg(short, long, default_value = "benchmark")]
        base: PathBuf,

        /// Dependency tool to invoke (overrides config and auto-detection)
        #[arg(long)]
        tool: Option<String>,

        /// Only scan recognized C/C++ translation units
        #[arg(long)]
        sources_only: bool,
    },

    /// Preview the scans gen would run, without running them
    List {
        /// Project base directory
        #[arg(short, long, default_value = "benchmark")]
        base: PathBuf,

        /// Dependency tool for the command preview (-v)
        #[arg(long)]
        tool: Option<String>,

        /// Only list recognized C/C++ translation units
        #[arg(long)]
        sources_only: bool,
    },

    /// Validate the project layout and dependency tool
    Doctor {
        /// Project base directory
        #[arg(short, long, default_value = "benchmark")]
        base: PathBuf,

        /// Dependency tool to check (overrides config and auto-detection)
        #[arg(long)]
        tool: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Gen { base, tool, sources_only } => {
            cmd_gen(&base, tool, sources_only, cli.json, cli.verbose)
        }
        Commands::List { base, tool, sources_only } => {
            cmd_list(&base, tool, sources_only, cli.json, cli.verbose)
        }
        Commands::Doctor { base, tool } => {
            cmd_doctor(&base, tool, cli.json)
        }
    }
}

fn cmd_gen(
    base: &Path,
    tool_flag: Option<String>,
    sources_only: bool,
    json: bool,
    verbose: u8,
) -> Result<()> {
    use gendeps::depgen::{generate_with_callback, GenEvent, GenOptions};
    use gendeps::{Config, GendepsError, ProjectLayout};

    let (config, warnings) = Config::load_or_default(base)?;
    let config = config.with_env_overrides();
    print_config_warnings(&warnings);

    let layout = ProjectLayout::new(base, &config.layout);
    let tool = resolve_tool(&layout, tool_flag, &config)?;

    if !json {
        println!("🧾 Gendeps Gen");
        println!("Base: {}", layout.base().display());
        println!("Tool: {}", tool.program());
        if sources_only {
            println!("Mode: C/C++ sources only");
        }
    }

    // Catch an unusable tool before any source file is touched.
    if !tool.is_available() {
        return Err(GendepsError::ToolNotFound {
            program: tool.program().to_string(),
        }
        .into());
    }

    let options = GenOptions::new().with_sources_only(sources_only);

    let report = generate_with_callback(&layout, &tool, &options, |event| {
        if json || verbose == 0 {
            return;
        }
        match event {
            GenEvent::ScanStart { index, total, input } => {
                println!("  [{}/{}] {}", index + 1, total, input);
            }
            GenEvent::DepWritten { output, .. } => {
                println!("    ✓ {}", output);
            }
            GenEvent::ScanFailed { detail, .. } => {
                println!("    ✗ {}", detail);
            }
        }
    })?;

    if json {
        let output = serde_json::json!({
            "event": "gen",
            "status": if report.is_success() { "success" } else { "partial" },
            "scanned": report.total(),
            "written": report.written.len(),
            "failed": report.failed.len()
        });
        println!("{}", serde_json::to_string(&output)?);
    } else {
        println!("\n📊 Scan Results:");
        if !report.written.is_empty() {
            println!("  ✓ Generated: {} files", report.written.len());
            for path in &report.written {
                println!("    - {}", path.display());
            }
        }
        if !report.failed.is_empty() {
            println!("  ✗ Failed: {}", report.failed.len());
            for failure in &report.failed {
                println!("    - {}: {}", failure.input.display(), failure.detail);
            }
        }
        if report.total() == 0 {
            println!("  Nothing to scan.");
        }
        println!();
    }

    if !report.is_success() {
        anyhow::bail!(
            "{} of {} dependency scans failed",
            report.failed.len(),
            report.total()
        );
    }

    Ok(())
}

fn cmd_list(
    base: &Path,
    tool_flag: Option<String>,
    sources_only: bool,
    json: bool,
    verbose: u8,
) -> Result<()> {
    use gendeps::scanner::{retain_c_family, scan_source_dir};
    use gendeps::{Config, ProjectLayout};

    let (config, warnings) = Config::load_or_default(base)?;
    let config = config.with_env_overrides();
    print_config_warnings(&warnings);

    let layout = ProjectLayout::new(base, &config.layout);

    let mut entries = scan_source_dir(layout.source_dir())?;
    if sources_only {
        entries = retain_c_family(entries);
    }

    // Preview only; tool resolution failures must not block the listing.
    let preview_tool = if verbose > 0 {
        resolve_tool(&layout, tool_flag, &config).ok()
    } else {
        None
    };

    if json {
        for entry in &entries {
            let output = serde_json::json!({
                "event": "entry",
                "input": entry.path.display().to_string(),
                "output": layout.dep_file_path(&entry.file_name).display().to_string(),
            });
            println!("{}", serde_json::to_string(&output)?);
        }
    } else {
        println!("🔍 Gendeps List");
        println!("Base: {}", layout.base().display());
        println!();
        for entry in &entries {
            let output = layout.dep_file_path(&entry.file_name);
            println!("  {} -> {}", entry.display_name(), output.display());
            if let Some(tool) = &preview_tool {
                println!("    $ {}", tool.render_scan(&entry.path, &output));
            }
        }
        println!();
        println!("{} files to scan", entries.len());
    }

    Ok(())
}

fn cmd_doctor(base: &Path, tool_flag: Option<String>, json: bool) -> Result<()> {
    use gendeps::doctor::run_doctor;
    use gendeps::{Config, ProjectLayout};

    let (config, warnings) = Config::load_or_default(base)?;
    let config = config.with_env_overrides();
    print_config_warnings(&warnings);

    let layout = ProjectLayout::new(base, &config.layout);
    let configured_tool = tool_flag.or_else(|| config.tool.command.clone());

    if !json {
        println!("🩺 Gendeps Doctor");
        println!("Base: {}", layout.base().display());
        println!();
    }

    let report = run_doctor(&layout, configured_tool.as_deref());

    if json {
        let output = serde_json::json!({
            "event": "doctor",
            "passes": report.passes(),
            "warnings": report.warnings(),
            "errors": report.errors(),
            "success": report.is_success()
        });
        println!("{}", serde_json::to_string(&output)?);
    } else {
        for check in &report.checks {
            println!("  {} {} - {}", check.status, check.name, check.message);

            if let Some(rec) = &check.recommendation {
                println!("    ↳ {}", rec);
            }
        }

        println!();
        println!(
            "Summary: {} passed, {} warnings, {} errors",
            report.passes(),
            report.warnings(),
            report.errors()
        );

        if !report.is_success() {
            println!();
            println!("🔴 Doctor found issues. Fix the errors before running gen.");
        } else if report.warnings() > 0 {
            println!();
            println!("🟡 Doctor passed with warnings.");
        } else {
            println!();
            println!("🟢 All checks passed!");
        }
    }

    if !report.is_success() {
        std::process::exit(1);
    }

    Ok(())
}

/// Pick the tool: flag beats config (env overrides already folded in),
/// config beats compiler auto-detection.
fn resolve_tool(
    layout: &gendeps::ProjectLayout,
    flag: Option<String>,
    config: &gendeps::Config,
) -> Result<gendeps::ToolCommand> {
    use gendeps::toolchain::detect_default_tool;
    use gendeps::ToolCommand;

    let program = match flag.or_else(|| config.tool.command.clone()) {
        Some(program) => program,
        None => detect_default_tool()?.to_string(),
    };

    Ok(ToolCommand::new(program, layout.include_dir())
        .with_extra_args(config.tool.extra_args.clone()))
}

fn print_config_warnings(warnings: &[gendeps::ConfigWarning]) {
    for w in warnings {
        if let Some(line) = w.line {
            eprintln!("⚠ Unknown config key '{}' in {}:{}", w.key, w.file.display(), line);
        } else {
            eprintln!("⚠ Unknown config key '{}' in {}", w.key, w.file.display());
        }

        if let Some(suggestion) = &w.suggestion {
            eprintln!("   Did you mean '{}'?", suggestion);
        }
    }
}
