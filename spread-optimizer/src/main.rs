//! Spread optimizer CLI
//!
//! # Usage
//!
//! ```bash
//! # Evaluate four protective puts under a sold 24000 put
//! spread-optimizer evaluate --view long --sell-strike 24000 --sell-premium 150 \
//!     --buy-premiums 100,85,70,60 --max-loss 50000
//!
//! # Show which strikes to quote
//! spread-optimizer ladder --view short --sell-strike 24000
//!
//! # Fill in the form field by field
//! spread-optimizer interactive
//! ```

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use tracing::info;

use spread_optimizer::analytics::{SpreadEvaluator, StrikeLadder};
use spread_optimizer::config::AppConfig;
use spread_optimizer::data::MarketView;
use spread_optimizer::form::{prompt_form, FormInput};
use spread_optimizer::report::{render_table, SpreadReport};

#[derive(Parser)]
#[command(name = "spread-optimizer")]
#[command(about = "Pick the long strike for a vertical spread hedge")]
#[command(version)]
struct Cli {
    /// Path to configuration file (defaults apply when omitted)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate candidate long strikes for a short leg
    Evaluate {
        /// Market view: long (sell puts) or short (sell calls)
        #[arg(long)]
        view: MarketView,

        /// Strike of the option sold
        #[arg(long)]
        sell_strike: Decimal,

        /// Premium of the option sold
        #[arg(long)]
        sell_premium: Decimal,

        /// Comma-separated premiums, one per ladder strike (nearest first)
        #[arg(long, value_delimiter = ',', required = true)]
        buy_premiums: Vec<Decimal>,

        /// Maximum total loss to size lots against
        #[arg(long)]
        max_loss: Decimal,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the candidate long strikes for a short strike
    Ladder {
        /// Market view: long (puts) or short (calls)
        #[arg(long)]
        view: MarketView,

        /// Strike of the option sold
        #[arg(long)]
        sell_strike: Decimal,
    },

    /// Prompt for every input on stdin
    Interactive {
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    // Logs go to stderr so stdout only carries the report
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("spread_optimizer=info".parse()?),
        )
        .init();

    let cli = Cli::parse();
    let config = AppConfig::load_or_default(cli.config.as_deref())?;
    info!(
        lot_multiplier = config.evaluator.lot_multiplier,
        ladder_count = config.ladder.count,
        "Configuration loaded"
    );

    match cli.command {
        Commands::Evaluate {
            view,
            sell_strike,
            sell_premium,
            buy_premiums,
            max_loss,
            json,
        } => {
            let form = FormInput {
                view,
                sell_strike,
                sell_premium,
                buy_premiums,
                max_loss,
            };
            let report = run_form(form, &config)?;
            print_report(&report, json)?;
        }
        Commands::Ladder { view, sell_strike } => {
            let strike = config.limits.check_strike(sell_strike)?;
            let strikes = StrikeLadder::new(config.ladder).strikes(view, strike)?;
            let option_type = view.option_type();
            for strike in strikes {
                println!("{strike} {option_type}");
            }
        }
        Commands::Interactive { json } => {
            let stdin = io::stdin();
            let mut input = stdin.lock();
            let mut output = io::stdout();
            let form = prompt_form(&mut input, &mut output, &config)?;
            writeln!(output)?;
            let report = run_form(form, &config)?;
            print_report(&report, json)?;
        }
    }

    Ok(())
}

fn run_form(form: FormInput, config: &AppConfig) -> Result<SpreadReport> {
    let request = form.into_request(config)?;
    info!(
        view = %request.view(),
        sell_strike = %request.short().strike,
        sell_premium = %request.short().premium,
        candidates = request.candidates().len(),
        "Evaluating request"
    );
    let report = request
        .evaluate(&SpreadEvaluator::new(config.evaluator))
        .context("Spread evaluation failed")?;
    Ok(report)
}

fn print_report(report: &SpreadReport, json: bool) -> Result<()> {
    if json {
        println!("{}", report.to_json()?);
    } else {
        print!("{}", render_table(report));
    }
    Ok(())
}
