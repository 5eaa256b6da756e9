use std::ffi::OsString;

use clap::{ArgMatches, CommandFactory, FromArgMatches};
use tracing::debug;

use crate::app::{self, AnalysisRequest};
use crate::args::AnalyzerArgs;
use crate::config::{apply_config, load_config};
use crate::error::AppResult;
use crate::metrics::ReferenceTime;

pub(crate) fn run() -> AppResult<()> {
    let (mut args, matches) = parse_args()?;

    crate::logger::init_logging(args.verbose, args.no_color);

    if let Some(config) = load_config(args.config.as_deref())? {
        apply_config(&mut args, &matches, &config)?;
    }

    let request = AnalysisRequest::from(&args);
    let reference = ReferenceTime::current(request.timezone);
    debug!("Analyzing files matching {}", request.pattern);

    let outcome = {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        app::run_analysis(&request, &reference, &mut out)?
    };

    if args.ask_charts && !request.charts {
        let stdin = std::io::stdin();
        let stderr = std::io::stderr();
        app::prompt_for_dashboard(
            &outcome,
            &request.charts_path,
            &reference,
            &mut stdin.lock(),
            &mut stderr.lock(),
        )?;
    }

    Ok(())
}

fn parse_args() -> AppResult<(AnalyzerArgs, ArgMatches)> {
    let raw_args: Vec<OsString> = std::env::args_os().collect();
    let matches = AnalyzerArgs::command().get_matches_from(raw_args);
    let args = AnalyzerArgs::from_arg_matches(&matches)?;
    Ok((args, matches))
}
