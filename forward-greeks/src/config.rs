use fg_core::{errors::Error, errors::Result, Real};
use fg_instruments::{ForwardContract, MarketData};
use fg_pricingengines::{FdSettings, McSettings};
use std::str::FromStr;

/// How the comparison is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Fixed-width table.
    Table,
    /// Pretty-printed JSON.
    Json,
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "table" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            other => Err(Error::Config(format!(
                "FG_OUTPUT: expected `table` or `json`, got `{other}`"
            ))),
        }
    }
}

/// Inputs of one comparison run.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Spot `S0`.
    pub spot: Real,
    /// Delivery price `K`.
    pub strike: Real,
    /// Maturity `T` in years.
    pub maturity: Real,
    /// Risk-free rate `r`.
    pub rate: Real,
    /// Volatility `σ`.
    pub volatility: Real,
    /// Grid settings.
    pub fd: FdSettings,
    /// Simulation settings.
    pub mc: McSettings,
    /// Output format.
    pub output: OutputFormat,
}

impl RunConfig {
    /// Read the configuration from the environment, after loading a `.env`
    /// file if one is present.
    ///
    /// Every variable is optional and defaults to the reference run.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var_or = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());
        let fd_defaults = FdSettings::default();
        let mc_defaults = McSettings::default();

        let fd = fd_defaults
            .with_s_max(parse(&var_or, "FG_S_MAX", "600")?)
            .with_price_steps(parse(&var_or, "FG_PRICE_STEPS", "100000")?)
            .with_time_steps(parse(&var_or, "FG_TIME_STEPS", "500")?);
        let mc = mc_defaults
            .with_paths(parse(&var_or, "FG_MC_PATHS", "100000")?)
            .with_seed(parse(&var_or, "FG_MC_SEED", "42")?);

        Ok(Self {
            spot: parse(&var_or, "FG_SPOT", "100")?,
            strike: parse(&var_or, "FG_STRIKE", "100")?,
            maturity: parse(&var_or, "FG_MATURITY", "1.0")?,
            rate: parse(&var_or, "FG_RATE", "0.05")?,
            volatility: parse(&var_or, "FG_VOLATILITY", "0.2")?,
            fd,
            mc,
            output: var_or("FG_OUTPUT", "table").parse()?,
        })
    }

    /// The forward contract described by this configuration.
    pub fn contract(&self) -> Result<ForwardContract> {
        ForwardContract::new(self.strike, self.maturity)
    }

    /// The market inputs described by this configuration.
    pub fn market(&self) -> Result<MarketData> {
        MarketData::new(self.spot, self.rate, self.volatility)
    }
}

fn parse<T, F>(var_or: &F, key: &str, default: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    F: Fn(&str, &str) -> String,
{
    var_or(key, default)
        .trim()
        .parse::<T>()
        .map_err(|e| Error::Config(format!("{key}: {e}")))
}
