use std::{
    path::{Path, PathBuf},
    process::ExitCode,
};

use anyhow::Context;
use clap::Args;
use fpcompare::{finite::try_equals, tolerance::BitTolerance};
use tracing::debug;

#[derive(Debug, Clone, Args)]
pub struct EqualsArgs {
    #[arg(allow_negative_numbers = true)]
    pub a: f64,
    #[arg(allow_negative_numbers = true)]
    pub b: f64,
    /// Number of leading mantissa bits the numbers must share
    #[arg(long, allow_negative_numbers = true, conflicts_with = "config")]
    pub threshold: Option<i32>,
    /// RON file holding a tolerance, e.g. `(threshold: 40)`
    #[arg(long)]
    pub config: Option<PathBuf>,
}
impl EqualsArgs {
    pub fn tolerance(&self) -> anyhow::Result<BitTolerance> {
        if let Some(threshold) = self.threshold {
            return Ok(BitTolerance::new(threshold));
        }
        match &self.config {
            Some(path) => load_tolerance(path),
            None => Ok(BitTolerance::default()),
        }
    }
    pub fn verdict(&self) -> anyhow::Result<bool> {
        let tolerance = self.tolerance()?;
        debug!(a = self.a, b = self.b, threshold = tolerance.threshold(), "comparing");
        Ok(try_equals(self.a, self.b, tolerance.threshold())?)
    }
    pub fn run(self) -> anyhow::Result<ExitCode> {
        let equal = self.verdict()?;
        println!("{equal}");
        Ok(if equal {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        })
    }
}

pub fn load_tolerance(path: &Path) -> anyhow::Result<BitTolerance> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read tolerance config {}", path.display()))?;
    let tolerance = parse_tolerance(&text)
        .with_context(|| format!("failed to parse tolerance config {}", path.display()))?;
    debug!(path = %path.display(), threshold = tolerance.threshold(), "loaded tolerance");
    Ok(tolerance)
}

pub fn parse_tolerance(text: &str) -> anyhow::Result<BitTolerance> {
    Ok(ron::from_str(text)?)
}
