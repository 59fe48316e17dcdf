use clap::Parser;

use crate::controller::advisory::{AdvisoryThresholds, DEFAULT_GO_BELOW, DEFAULT_STAY_BELOW};

#[must_use]
pub fn args_checks() -> Args {
    Args::parse()
}

#[derive(Parser, Clone, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Address to bind the web server to
    #[arg(long, value_name = "BIND_ADDR", default_value = "0.0.0.0")]
    pub bind_addr: String,
    #[arg(short = 'p', long, value_name = "PORT", default_value = "8081")]
    pub port: u16,
    /// Rolls below this value advise heading out now
    #[arg(long, value_name = "GO_BELOW", default_value_t = DEFAULT_GO_BELOW, value_parser = check_unit_interval)]
    pub go_below: f64,
    /// Rolls from go-below up to this value advise staying seated; the rest advise preparing to move
    #[arg(long, value_name = "STAY_BELOW", default_value_t = DEFAULT_STAY_BELOW, value_parser = check_unit_interval)]
    pub stay_below: f64,
}

impl Args {
    /// # Errors
    ///
    /// Returns `Err` if the two cut points are not strictly ordered inside
    /// the unit interval.
    pub fn thresholds(&self) -> Result<AdvisoryThresholds, String> {
        AdvisoryThresholds::new(self.go_below, self.stay_below)
    }
}

/// # Errors
///
/// Will return `Err` if the value does not parse as a number in (0, 1]
fn check_unit_interval(raw: &str) -> Result<f64, String> {
    let value: f64 = raw
        .parse()
        .map_err(|_| format!("'{raw}' is not a number"))?;
    if value <= 0.0 || value > 1.0 {
        return Err(format!("'{raw}' must be in (0, 1]"));
    }
    Ok(value)
}
