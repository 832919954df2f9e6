pub mod cli;
pub mod settings;
pub mod toml_config;

pub use settings::{ExportOverrides, ExportSettings};
pub use toml_config::TomlConfig;

#[cfg(feature = "cli")]
use crate::domain::template::{ExportFlow, TemplateSelector};
#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "portfolio-export")]
#[command(about = "Render a profile into a static portfolio site and package it as a zip")]
pub struct CliConfig {
    #[arg(long, help = "Profile file (.json or .toml)")]
    pub profile: Option<String>,

    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=2), help = "Export a built-in demo profile")]
    pub demo: Option<u8>,

    #[arg(long, help = "Layout: modern, classic, 1 or 2")]
    pub template: Option<TemplateSelector>,

    #[arg(long, help = "Export flow: profile or builder")]
    pub flow: Option<ExportFlow>,

    #[arg(long, help = "Directory the archive is written to [default: ./output]")]
    pub output_path: Option<String>,

    #[arg(long, help = "TOML config file")]
    pub config: Option<String>,

    #[arg(long, help = "Render and report without writing the archive")]
    pub dry_run: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    pub fn overrides(&self) -> ExportOverrides {
        ExportOverrides {
            profile: self.profile.clone(),
            demo: self.demo,
            flow: self.flow,
            template: self.template,
            output_path: self.output_path.clone(),
        }
    }
}
