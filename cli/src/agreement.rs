use std::process::ExitCode;

use clap::Args;
use fpcompare::{exponent::BinaryExponentExt, finite::try_number_of_equal_fractionals};
use tracing::debug;

#[derive(Debug, Clone, Args)]
pub struct AgreementArgs {
    #[arg(allow_negative_numbers = true)]
    pub a: f64,
    #[arg(allow_negative_numbers = true)]
    pub b: f64,
}
impl AgreementArgs {
    pub fn agreement(&self) -> anyhow::Result<i32> {
        debug!(
            a = self.a,
            b = self.b,
            exp_a = ?self.a.binary_exponent(),
            exp_b = ?self.b.binary_exponent(),
            exp_diff = ?(self.a.abs() - self.b.abs()).binary_exponent(),
            "measuring agreement"
        );
        Ok(try_number_of_equal_fractionals(self.a, self.b)?)
    }
    pub fn run(self) -> anyhow::Result<ExitCode> {
        println!("{}", self.agreement()?);
        Ok(ExitCode::SUCCESS)
    }
}
