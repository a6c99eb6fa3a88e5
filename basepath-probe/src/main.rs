mod report;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::fs::{self, File};
use std::io::{BufWriter, Write, stdout};
use std::path::{Path, PathBuf};

use basepath_core::{
    DEFAULT_FIELD, Environment, HeadChild, MemoryHead, Profile, ProfileTable, RuntimeSignal,
    apply_base_path, build_asset_path, install_profile, join_path, resolve_environment,
};

#[derive(Debug, Parser)]
#[command(name = "basepath-probe", version = "0.1.0")]
#[command(about = "Inspect how pages resolve their deployment base path")]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Output format
    #[arg(long, global = true, default_value = "console")]
    #[arg(value_parser = ["console", "json"])]
    format: String,

    /// JSON profile table to use instead of the built-in one
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Optional path to write the output instead of stdout
    #[arg(long, global = true)]
    output: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Classify a page and print its profile
    Resolve(PageTarget),
    /// Build the URL for a relative asset path
    Asset {
        /// Path relative to the selected prefix
        path: String,
        /// Profile field to join against (base, assets, games)
        #[arg(long, default_value = DEFAULT_FIELD)]
        field: String,
        #[command(flatten)]
        target: PageTarget,
    },
    /// Print every profile in the table
    Table,
    /// Preview the <base> directive a page would end up with
    Patch {
        /// Base path to install instead of the detected one
        #[arg(long = "override")]
        override_path: Option<String>,
        #[command(flatten)]
        target: PageTarget,
    },
}

#[derive(Debug, clap::Args)]
struct PageTarget {
    /// Page hostname
    #[arg(long, required_unless_present = "env", conflicts_with = "env")]
    host: Option<String>,
    /// Page scheme, with or without the trailing colon
    #[arg(long, default_value = "https")]
    scheme: String,
    /// Environment name to use instead of detecting one
    #[arg(long)]
    env: Option<String>,
}

/// A page target resolved against the profile table.
struct Resolved<'a> {
    environment: Environment,
    profile: &'a Profile,
    signal: Option<RuntimeSignal>,
}

impl PageTarget {
    fn resolve<'a>(&self, table: &'a ProfileTable) -> Result<Resolved<'a>> {
        if let Some(name) = &self.env {
            let environment: Environment = name.parse()?;
            return Ok(Resolved {
                environment,
                profile: table.get(environment),
                signal: None,
            });
        }
        let signal = RuntimeSignal::new(self.host.clone().unwrap_or_default(), self.scheme.clone());
        let environment = resolve_environment(&signal);
        Ok(Resolved {
            environment,
            profile: table.get(environment),
            signal: Some(signal),
        })
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let table = load_table(args.config.as_deref())?;
    let json = args.format == "json";
    let mut output_target = OutputTarget::new(args.output.clone())?;

    match &args.command {
        Command::Resolve(target) => {
            let resolved = target.resolve(&table)?;
            report::write_profile(
                output_target.writer(),
                resolved.environment,
                resolved.profile,
                json,
            )?;
        }
        Command::Asset {
            path,
            field,
            target,
        } => {
            let resolved = target.resolve(&table)?;
            let url = match &resolved.signal {
                Some(signal) => build_asset_path(&table, signal, path, field),
                None => join_path(resolved.profile.select(field), path),
            };
            report::write_asset(output_target.writer(), resolved.environment, field, &url, json)?;
        }
        Command::Table => report::write_table(output_target.writer(), &table, json)?,
        Command::Patch {
            override_path,
            target,
        } => {
            let resolved = target.resolve(&table)?;
            let mut head = preview_head();
            let override_path = override_path.as_deref();
            let Ok(profile) = match &resolved.signal {
                Some(signal) => apply_base_path(&mut head, &table, signal, override_path),
                None => match override_path.filter(|path| !path.is_empty()) {
                    Some(path) => install_profile(&mut head, Profile::with_base(path)),
                    None => install_profile(&mut head, resolved.profile.clone()),
                },
            };
            report::write_patch(output_target.writer(), &profile, &head, json)?;
        }
    }

    output_target.flush_inner()?;
    Ok(())
}

fn load_table(path: Option<&Path>) -> Result<ProfileTable> {
    let Some(path) = path else {
        return Ok(ProfileTable::builtin().clone());
    };
    let json =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    ProfileTable::from_json(&json)
        .with_context(|| format!("failed to load profile table from {}", path.display()))
}

/// A typical page head that already carries a `<base>` from its HTML.
fn preview_head() -> MemoryHead {
    MemoryHead::new(vec![
        HeadChild::Other("meta".to_string()),
        HeadChild::Base {
            href: "/".to_string(),
        },
        HeadChild::Other("title".to_string()),
    ])
}

enum OutputTarget {
    Stdout(BufWriter<std::io::Stdout>),
    File(BufWriter<File>),
}

impl OutputTarget {
    fn new(path: Option<PathBuf>) -> Result<Self> {
        if let Some(path) = path {
            let file = File::create(&path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            Ok(Self::File(BufWriter::new(file)))
        } else {
            Ok(Self::Stdout(BufWriter::new(stdout())))
        }
    }

    fn writer(&mut self) -> &mut dyn Write {
        match self {
            Self::Stdout(w) => w,
            Self::File(w) => w,
        }
    }

    fn flush_inner(&mut self) -> std::io::Result<()> {
        match self {
            Self::Stdout(w) => w.flush(),
            Self::File(w) => w.flush(),
        }
    }
}
