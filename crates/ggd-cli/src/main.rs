//! ggd CLI

use anyhow::Result;
use clap::{Parser, Subcommand};
use ggd_core::ContinuousDistribution;
use ggd_inference::{GcmConfig, GcmEstimator, ZeroPolicy, gcm_ci, z_for_level};
use ggd_prob::{GeneralizedGaussian, sampling};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "ggd")]
#[command(about = "Generalized Gaussian distribution: sampling and shape estimation")]
#[command(version)]
struct Cli {
    /// Log verbosity level (trace, debug, info, warn, error)
    #[arg(long, global = true, default_value = "warn")]
    log_level: tracing::Level,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Closed-form statistics of a distribution
    Stats {
        /// Location (mu)
        #[arg(long, default_value = "0.0", allow_hyphen_values = true)]
        location: f64,

        /// Scale (alpha)
        #[arg(long, default_value = "1.0")]
        scale: f64,

        /// Shape (beta)
        #[arg(long)]
        shape: f64,

        /// Output file for results (pretty JSON). Defaults to stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Draw random variates
    Sample {
        /// Location (mu)
        #[arg(long, default_value = "0.0", allow_hyphen_values = true)]
        location: f64,

        /// Scale (alpha)
        #[arg(long, default_value = "1.0")]
        scale: f64,

        /// Shape (beta)
        #[arg(long)]
        shape: f64,

        /// Number of draws
        #[arg(short, long, default_value = "1", conflicts_with = "dims")]
        n: usize,

        /// Array shape, comma separated (e.g. `2,3`). Values are emitted row-major.
        #[arg(long, value_delimiter = ',')]
        dims: Option<Vec<usize>>,

        /// RNG seed. Omit for an OS-seeded stream.
        #[arg(long)]
        seed: Option<u64>,

        /// Output file for results (pretty JSON). Defaults to stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Estimate the shape of a zero-location sample
    Fit {
        /// Input sample: JSON array of numbers or whitespace-separated text
        #[arg(short, long)]
        input: PathBuf,

        /// Initial shape. Defaults to `mean|x| / std(x) + 3`.
        #[arg(long)]
        init: Option<f64>,

        /// GCM configuration (JSON). Flags below override file values.
        #[arg(long)]
        config: Option<PathBuf>,

        /// Max Newton-Raphson iterations
        #[arg(long)]
        max_iter: Option<usize>,

        /// Convergence tolerance on successive iterates
        #[arg(long)]
        tol: Option<f64>,

        /// Drop exact zeros instead of failing
        #[arg(long)]
        drop_zeros: bool,

        /// Normal quantile for the confidence interval
        #[arg(long, conflicts_with = "level")]
        z: Option<f64>,

        /// Confidence level for the interval (e.g. 0.95)
        #[arg(long)]
        level: Option<f64>,

        /// Output file for results (pretty JSON). Defaults to stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Confidence interval for a shape estimate
    Ci {
        /// Estimated shape
        #[arg(long)]
        shape_hat: f64,

        /// Sample size the estimate came from
        #[arg(short, long)]
        n: usize,

        /// Normal quantile
        #[arg(long, conflicts_with = "level")]
        z: Option<f64>,

        /// Confidence level (e.g. 0.95)
        #[arg(long)]
        level: Option<f64>,

        /// Output file for results (pretty JSON). Defaults to stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print version
    Version,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt().with_max_level(cli.log_level).with_target(false).init();

    match cli.command {
        Commands::Stats { location, scale, shape, output } => {
            cmd_stats(location, scale, shape, output.as_ref())
        }
        Commands::Sample { location, scale, shape, n, dims, seed, output } => {
            cmd_sample(location, scale, shape, n, dims.as_deref(), seed, output.as_ref())
        }
        Commands::Fit { input, init, config, max_iter, tol, drop_zeros, z, level, output } => {
            let config = resolve_config(config.as_ref(), max_iter, tol, drop_zeros)?;
            let z = resolve_z(z, level)?;
            cmd_fit(&input, init, config, z, output.as_ref())
        }
        Commands::Ci { shape_hat, n, z, level, output } => {
            cmd_ci(shape_hat, n, resolve_z(z, level)?, output.as_ref())
        }
        Commands::Version => {
            println!("ggd {}", ggd_core::VERSION);
            Ok(())
        }
    }
}

fn cmd_stats(location: f64, scale: f64, shape: f64, output: Option<&PathBuf>) -> Result<()> {
    let d = GeneralizedGaussian::new(location, scale, shape)?;
    tracing::info!(%d, "computing statistics");

    let output_json = serde_json::json!({
        "params": params_json(&d),
        "mean": d.mean(),
        "median": d.median(),
        "mode": d.mode(),
        "var": d.var(),
        "std": d.std(),
        "skewness": d.skewness(),
        "kurtosis": d.kurtosis(),
        "entropy": d.entropy(),
    });

    write_json(output, output_json)
}

fn cmd_sample(
    location: f64,
    scale: f64,
    shape: f64,
    n: usize,
    dims: Option<&[usize]>,
    seed: Option<u64>,
    output: Option<&PathBuf>,
) -> Result<()> {
    let d = GeneralizedGaussian::new(location, scale, shape)?;
    if let Some(seed) = seed {
        sampling::seed_default_rng(seed);
    }

    let (shape_out, samples) = match dims {
        Some(dims) => {
            let arr = sampling::sample_dims_default(&d, dims)?;
            (arr.shape().to_vec(), arr.iter().copied().collect::<Vec<f64>>())
        }
        None => (vec![n], sampling::sample_n_default(&d, n)?),
    };
    tracing::info!(%d, count = samples.len(), ?seed, "sampled");

    let output_json = serde_json::json!({
        "params": params_json(&d),
        "seed": seed,
        "shape": shape_out,
        "samples": samples,
    });

    write_json(output, output_json)
}

fn cmd_fit(
    input: &PathBuf,
    init: Option<f64>,
    config: GcmConfig,
    z: f64,
    output: Option<&PathBuf>,
) -> Result<()> {
    let x = load_sample(input)?;

    let est = GcmEstimator::new(config).search(&x, init)?;
    tracing::info!(
        shape = est.shape,
        n_iter = est.n_iter,
        converged = est.converged,
        "fit complete"
    );
    if !est.converged {
        tracing::warn!(max_iter = config.max_iter, "shape search did not converge");
    }
    if est.n != x.len() {
        tracing::info!(dropped = x.len() - est.n, "zero samples dropped");
    }
    let ci = gcm_ci(est.shape, est.n, z)?;

    let output_json = serde_json::json!({
        "n": est.n,
        "shape": est.shape,
        "n_iter": est.n_iter,
        "converged": est.converged,
        "last_step": est.last_step,
        "config": config,
        "ci": ci,
    });

    write_json(output, output_json)
}

fn cmd_ci(shape_hat: f64, n: usize, z: f64, output: Option<&PathBuf>) -> Result<()> {
    let ci = gcm_ci(shape_hat, n, z)?;
    tracing::info!(lower = ci.lower, upper = ci.upper, "interval computed");

    let output_json = serde_json::json!({
        "shape_hat": shape_hat,
        "lower": ci.lower,
        "upper": ci.upper,
        "upper_unbounded": ci.upper.is_infinite(),
        "z": ci.z,
        "n": ci.n,
    });

    write_json(output, output_json)
}

fn params_json(d: &GeneralizedGaussian) -> serde_json::Value {
    let (location, scale, shape) = d.params();
    serde_json::json!({ "location": location, "scale": scale, "shape": shape })
}

fn resolve_config(
    path: Option<&PathBuf>,
    max_iter: Option<usize>,
    tol: Option<f64>,
    drop_zeros: bool,
) -> Result<GcmConfig> {
    let mut config = match path {
        Some(path) => {
            tracing::info!(path = %path.display(), "loading config");
            let json = std::fs::read_to_string(path)?;
            serde_json::from_str::<GcmConfig>(&json)?
        }
        None => GcmConfig::default(),
    };
    if let Some(max_iter) = max_iter {
        config.max_iter = max_iter;
    }
    if let Some(tol) = tol {
        config.tol = tol;
    }
    if drop_zeros {
        config.zero_policy = ZeroPolicy::Drop;
    }
    config.validate()?;
    Ok(config)
}

fn resolve_z(z: Option<f64>, level: Option<f64>) -> Result<f64> {
    match (z, level) {
        (Some(z), _) => Ok(z),
        (None, Some(level)) => Ok(z_for_level(level)?),
        (None, None) => Ok(ggd_inference::DEFAULT_Z),
    }
}

fn load_sample(input: &PathBuf) -> Result<Vec<f64>> {
    tracing::info!(path = %input.display(), "loading sample");
    let text = std::fs::read_to_string(input)?;
    let trimmed = text.trim_start();
    let x: Vec<f64> = if trimmed.starts_with('[') {
        serde_json::from_str(trimmed)?
    } else {
        let mut out = Vec::new();
        for (i, tok) in trimmed.split_whitespace().enumerate() {
            match tok.parse::<f64>() {
                Ok(v) => out.push(v),
                Err(e) => anyhow::bail!("sample token {} ({:?}) is not a number: {}", i, tok, e),
            }
        }
        out
    };
    tracing::info!(n = x.len(), "sample loaded");
    Ok(x)
}

fn write_json(output: Option<&PathBuf>, value: serde_json::Value) -> Result<()> {
    if let Some(path) = output {
        std::fs::write(path, serde_json::to_string_pretty(&value)?)?;
    } else {
        println!("{}", serde_json::to_string_pretty(&value)?);
    }
    Ok(())
}
