mod cli;

use cli::{Args, CategorySelection};
use owo_colors::OwoColorize;
use rhsm_updates::prelude::*;
use std::process;

fn main() {
    let args = match Args::try_parse_args() {
        Ok(args) => args,
        Err(e) => {
            // Help and version go to stdout with status 0, usage errors exit 1
            let code = if e.use_stderr() {
                ExitCode::Failure
            } else {
                ExitCode::Success
            };
            print!("{}", e.render());
            process::exit(code.as_i32());
        }
    };

    init_logging(args.verbose);

    // Nothing touches the network until the arguments are valid
    let (selection, credential) = match validate(&args) {
        Ok(validated) => validated,
        Err(e) => {
            println!("{}", e);
            process::exit(ExitCode::Failure.as_i32());
        }
    };

    if let Err(e) = run(&args, selection, credential) {
        eprintln!("\n{}\n", "❌ An error occurred:".red().bold());
        eprintln!("{}", e);

        for cause in e.chain().skip(1) {
            eprintln!("\n{} {}", "Caused by:".yellow(), cause);
        }

        eprintln!();
        process::exit(ExitCode::Failure.as_i32());
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "rhsm_updates=debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}

fn validate(args: &Args) -> Result<(CategorySelection, OfflineCredential)> {
    let selection = args.category_selection()?;
    let credential = OfflineCredential::new(args.token.as_str())?;
    Ok((selection, credential))
}

fn run(args: &Args, selection: CategorySelection, credential: OfflineCredential) -> Result<()> {
    let settings = Settings::load(args.config.as_deref(), args.cumulative)?;
    log::debug!(
        "Token endpoint {}, systems API {}, {:?} accumulation",
        settings.auth_url,
        settings.api_url,
        settings.accumulation_mode
    );

    // Create adapters (Dependency Injection)
    let credential_exchanger = SsoTokenClient::with_token_url(settings.auth_url.as_str())?;
    let subscription_repository = RhsmApiClient::with_api_url(settings.api_url.as_str())?;
    let progress_reporter = StderrProgressReporter::new();

    let use_case = GenerateUpdateReportUseCase::new(
        credential_exchanger,
        subscription_repository,
        progress_reporter,
    );

    let request = ReportRequest::builder()
        .offline_credential(credential)
        .device_pattern(selection.device_pattern)
        .category(selection.category)
        .accumulation_mode(settings.accumulation_mode)
        .build()?;

    let response = use_case.execute(request)?;
    log::debug!(
        "{} update(s) across {} system(s)",
        response.total_updates(),
        response.device_count()
    );

    // The whole report is rendered before anything reaches stdout
    let output = PlainTextFormatter::new().format(&response.device_reports)?;
    StdoutPresenter::new().present(&output)?;

    Ok(())
}
