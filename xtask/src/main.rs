use anyhow::Context;
use clap::{Parser, Subcommand};
use clusterconv_core::dispatch::{Family, families, served_versions};
use clusterconv_types::schema::CONVERSION_DATA_ANNOTATION;
use fs_err as fs;
use serde_json::{Value, json};
use std::process::Command as ProcessCommand;

#[derive(Debug, Parser)]
#[command(name = "xtask", about = "Workspace helper tasks")]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print served apiVersions and the stash annotation key.
    PrintVersions,
    /// Write a minimal hub document per kind (samples/<kind>.json).
    InitSamples {
        #[arg(long, default_value = "samples")]
        dir: String,
    },
    /// Run the round-trip property suites with more cases.
    Roundtrip {
        #[arg(long, default_value_t = 1024)]
        cases: u32,
    },
    /// Run one fuzz target for a bounded time (needs cargo-fuzz).
    Fuzz {
        target: String,
        #[arg(long, default_value_t = 60)]
        seconds: u64,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::PrintVersions => {
            for version in served_versions() {
                println!("{version}");
            }
            println!("{CONVERSION_DATA_ANNOTATION}");
        }
        Command::InitSamples { dir } => {
            fs::create_dir_all(&dir).with_context(|| format!("create {dir}"))?;
            for family in families() {
                let path = format!("{dir}/{}.json", family.kind.to_lowercase());
                let body = serde_json::to_string_pretty(&sample_document(family))?;
                fs::write(&path, body).with_context(|| format!("write {path}"))?;
            }
            println!("initialized {} samples in {dir}", families().len());
        }
        Command::Roundtrip { cases } => {
            let status = ProcessCommand::new("cargo")
                .args(["test", "-p", "clusterconv-roundtrip"])
                .env("PROPTEST_CASES", cases.to_string())
                .status()
                .context("run round-trip suites")?;
            if !status.success() {
                anyhow::bail!("roundtrip failed");
            }
        }
        Command::Fuzz { target, seconds } => {
            let status = ProcessCommand::new("cargo")
                .current_dir("fuzz")
                .args(["fuzz", "run", &target, "--"])
                .arg(format!("-max_total_time={seconds}"))
                .status()
                .context("run cargo fuzz")?;
            if !status.success() {
                anyhow::bail!("fuzz target {target} failed");
            }
        }
    }
    Ok(())
}

/// A minimal hub document for `family`.
fn sample_document(family: &Family) -> Value {
    let name = format!("sample-{}", family.kind.to_lowercase());
    if family.is_list {
        json!({
            "apiVersion": family.hub_version,
            "kind": family.kind,
            "metadata": {},
            "items": [],
        })
    } else {
        json!({
            "apiVersion": family.hub_version,
            "kind": family.kind,
            "metadata": {"name": name, "namespace": "default"},
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clusterconv_core::dispatch::convert_document;

    #[test]
    fn every_sample_converts_down_and_back() {
        for family in families() {
            let sample = sample_document(family);
            let spoke = convert_document(sample, family.spoke_version).expect("down");
            assert_eq!(spoke["apiVersion"], family.spoke_version, "{}", family.kind);
            let hub = convert_document(spoke, family.hub_version).expect("up");
            assert_eq!(hub["kind"], family.kind);
        }
    }
}
