//! # abserde CLI Entry Point
//!
//! Compiles a schema file into a Rust module.

use std::path::{Path, PathBuf};

use abserde_codegen::{Config, generate_from_file};
use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Schema compiler producing Rust records with JSON bindings.
#[derive(Parser, Debug)]
#[command(name = "abserde", version, about)]
struct Cli {
    /// Schema file to compile.
    file: PathBuf,
    /// Print the generated module and log at debug level.
    #[arg(short, long, default_value_t = false)]
    debug: bool,
    /// Output path (defaults to `<module>.rs` in the current directory).
    #[arg(short, long)]
    out: Option<PathBuf>,
    /// Module name (defaults to the schema file stem).
    #[arg(long)]
    module: Option<String>,
    /// Path of the runtime crate as seen from the generated code.
    #[arg(long)]
    core_path: Option<String>,
}

impl Cli {
    fn config(&self) -> Config {
        let mut config = Config::for_path(&self.file).debug(self.debug);
        if let Some(module) = &self.module {
            config = config.module_name(module.clone());
        }
        if let Some(core_path) = &self.core_path {
            config = config.core_path(core_path.clone());
        }
        config
    }

    fn output_path(&self, config: &Config) -> PathBuf {
        self.out
            .clone()
            .unwrap_or_else(|| PathBuf::from(format!("{}.rs", config.module_name)))
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.debug { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    try_main(&cli).map_err(|err| {
        eprintln!("{err:#}");
        err
    })
}

fn try_main(cli: &Cli) -> Result<()> {
    let config = cli.config();
    let code = compile(&cli.file, &config)?;
    if cli.debug {
        println!("{code}");
    }
    let dest = cli.output_path(&config);
    write_module(&dest, &code)?;
    info!(schema = %cli.file.display(), dest = %dest.display(), "compiled schema");
    Ok(())
}

fn compile(path: &Path, config: &Config) -> Result<String> {
    generate_from_file(path, config).with_context(|| format!("compile schema: {}", path.display()))
}

fn write_module(dest: &Path, code: &str) -> Result<()> {
    if let Some(parent) = dest.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output directory: {}", parent.display()))?;
    }
    std::fs::write(dest, code).with_context(|| format!("write module: {}", dest.display()))
}
