mod config;
mod explain;

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, Subcommand};
use clusterconv_core::dispatch::{convert_document, families};
use clusterconv_core::review::{ConversionReview, review};
use config::{ConfigMerger, DocumentFormat};
use fs_err as fs;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::io::{Read, Write};
use std::process::ExitCode;
use tracing::{debug, error, info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(
    name = "clusterconv",
    version,
    about = "Converts Cluster API documents between v1alpha2 and v1beta1."
)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Convert one document to another apiVersion.
    Convert(ConvertArgs),
    /// Answer an apiextensions.k8s.io/v1 ConversionReview.
    Review(ReviewArgs),
    /// Explain how a kind's fields are carried across versions.
    Explain(ExplainArgs),
    /// List every convertible kind and its versions.
    ListKinds(ListKindsArgs),
}

#[derive(Debug, Parser)]
struct ConvertArgs {
    /// Target apiVersion (default: `[convert] default_target` from clusterconv.toml).
    #[arg(long)]
    to: Option<String>,

    /// Input file (default: stdin). `.yaml`/`.yml` files are read as YAML.
    #[arg(long)]
    input: Option<Utf8PathBuf>,

    /// Output file (default: stdout).
    #[arg(long)]
    output: Option<Utf8PathBuf>,

    /// Output format (default: the input format).
    #[arg(long, value_enum)]
    format: Option<DocumentFormat>,
}

#[derive(Debug, Parser)]
struct ReviewArgs {
    /// ConversionReview file (default: stdin).
    #[arg(long)]
    input: Option<Utf8PathBuf>,
}

#[derive(Debug, Parser)]
struct ExplainArgs {
    /// Kind to explain (e.g., "Machine", "KubeadmConfig").
    kind: String,
}

#[derive(Debug, Parser)]
struct ListKindsArgs {
    /// Output format (text, json).
    #[arg(long, value_enum, default_value = "text")]
    format: ListFormat,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum ListFormat {
    Text,
    Json,
}

fn main() -> ExitCode {
    if let Err(e) = real_main() {
        error!("{:?}", e);
        eprintln!("error: {:#}", e);
        return ExitCode::from(1);
    }
    ExitCode::from(0)
}

fn real_main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Convert(args) => cmd_convert(args),
        Command::Review(args) => cmd_review(args),
        Command::Explain(args) => cmd_explain(args),
        Command::ListKinds(args) => cmd_list_kinds(args),
    }
}

fn cmd_convert(args: ConvertArgs) -> anyhow::Result<()> {
    let file_config =
        config::load_or_default(Utf8Path::new(".")).context("load clusterconv.toml config")?;
    let merged = ConfigMerger::new(file_config).merge_convert_args(
        args.to.as_deref(),
        args.format,
        args.input.as_deref(),
    );
    debug!(
        "merged config: target={:?}, input={:?}, output={:?}, pretty={}",
        merged.target, merged.input_format, merged.output_format, merged.pretty
    );

    let Some(target) = merged.target else {
        anyhow::bail!("no target apiVersion; pass --to or set [convert] default_target");
    };

    let source = read_input(args.input.as_deref())?;
    let document: serde_json::Value = parse_document(&source, merged.input_format)?;
    let kind = document
        .get("kind")
        .and_then(serde_json::Value::as_str)
        .unwrap_or("<unknown>")
        .to_string();

    let converted = convert_document(document, &target)
        .with_context(|| format!("convert {} to {}", kind, target))?;

    let rendered = render_document(&converted, merged.output_format, merged.pretty)?;
    write_output(args.output.as_deref(), &rendered)?;

    info!(kind = %kind, target = %target, "converted document");
    Ok(())
}

fn cmd_review(args: ReviewArgs) -> anyhow::Result<()> {
    let format = args
        .input
        .as_deref()
        .map_or(DocumentFormat::Json, DocumentFormat::from_path);
    let source = read_input(args.input.as_deref())?;
    let request: ConversionReview =
        parse_document(&source, format).context("parse ConversionReview")?;

    let response = review(&request);
    if let Some(result) = response.response.as_ref().map(|r| &r.result)
        && !result.is_success()
    {
        warn!(message = %result.message, "conversion review failed");
    }

    let rendered = render_document(&response, DocumentFormat::Json, true)?;
    write_output(None, &rendered)
}

fn cmd_explain(args: ExplainArgs) -> anyhow::Result<()> {
    let Some(explanation) = explain::explain(&args.kind) else {
        let available = explain::list_kinds().join(", ");
        anyhow::bail!(
            "Unknown kind: '{}'\n\nAvailable kinds: {}",
            args.kind,
            available
        );
    };

    print!("{}", explain::render_text(&explanation));
    Ok(())
}

fn cmd_list_kinds(args: ListKindsArgs) -> anyhow::Result<()> {
    match args.format {
        ListFormat::Text => {
            println!("Convertible kinds:\n");
            println!("  {:<28} {:<40} HUB", "KIND", "SPOKE");
            println!("  {:<28} {:<40} ---", "----", "-----");
            for family in families() {
                println!(
                    "  {:<28} {:<40} {}",
                    family.kind, family.spoke_version, family.hub_version
                );
            }
            println!();
            println!("Use 'clusterconv explain <kind>' for details.");
        }
        ListFormat::Json => {
            let kinds: Vec<_> = families()
                .iter()
                .map(|f| {
                    serde_json::json!({
                        "kind": f.kind,
                        "group": f.group(),
                        "spoke": f.spoke_version,
                        "hub": f.hub_version,
                        "list": f.is_list,
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&kinds)?);
        }
    }
    Ok(())
}

fn read_input(path: Option<&Utf8Path>) -> anyhow::Result<String> {
    match path {
        Some(path) => fs::read_to_string(path).with_context(|| format!("read {}", path)),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("read stdin")?;
            Ok(buf)
        }
    }
}

fn parse_document<T: DeserializeOwned>(source: &str, format: DocumentFormat) -> anyhow::Result<T> {
    match format {
        DocumentFormat::Json => serde_json::from_str(source).context("parse JSON input"),
        DocumentFormat::Yaml => serde_yaml::from_str(source).context("parse YAML input"),
    }
}

fn render_document<T: Serialize>(
    value: &T,
    format: DocumentFormat,
    pretty: bool,
) -> anyhow::Result<String> {
    let mut out = match format {
        DocumentFormat::Json if pretty => serde_json::to_string_pretty(value)?,
        DocumentFormat::Json => serde_json::to_string(value)?,
        DocumentFormat::Yaml => serde_yaml::to_string(value).context("serialize yaml")?,
    };
    if !out.ends_with('\n') {
        out.push('\n');
    }
    Ok(out)
}

fn write_output(path: Option<&Utf8Path>, contents: &str) -> anyhow::Result<()> {
    match path {
        Some(path) => fs::write(path, contents).with_context(|| format!("write {}", path)),
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(contents.as_bytes())
                .context("write stdout")
        }
    }
}
