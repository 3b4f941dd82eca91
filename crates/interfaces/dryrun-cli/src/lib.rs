pub mod commands;

use clap::ValueEnum;
use dryrun_core::presets;

#[derive(ValueEnum, Clone, Debug, Copy)]
pub enum CliOperation {
    SecurityScan,
    Compile,
    Extraction,
    Convert,
}

impl CliOperation {
    pub fn id(self) -> &'static str {
        match self {
            CliOperation::SecurityScan => presets::SECURITY_SCAN,
            CliOperation::Compile => presets::COMPILE,
            CliOperation::Extraction => presets::EXTRACTION,
            CliOperation::Convert => presets::CONVERT,
        }
    }
}
