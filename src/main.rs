use chrono::{DateTime, Utc};
use owo_colors::OwoColorize;
use std::process;

use alert_gate::adapters::outbound::console::StdoutPresenter;
use alert_gate::adapters::outbound::filesystem::{FileSystemWriter, JsonFileSource};
use alert_gate::adapters::outbound::network::{GitHubAlertClient, PrCommentSink};
use alert_gate::application::dto::{CheckRequest, CheckResponse};
use alert_gate::application::use_cases::CheckAlertsUseCase;
use alert_gate::cli::Args;
use alert_gate::config::GateConfig;
use alert_gate::ports::outbound::OutputPresenter;
use alert_gate::shared::{ExitCode, GateError, Result};

#[tokio::main]
async fn main() {
    // clap handles its own exit code (2) for argument errors
    let args = Args::parse_args();

    // Capture the evaluation instant once; everything downstream is
    // deterministic relative to it.
    let now = Utc::now();

    match run(args, now).await {
        Ok(code) => process::exit(code.as_i32()),
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            // Display error chain
            let mut source = e.source();
            while let Some(err) = source {
                eprintln!("\nCaused by: {}", err);
                source = err.source();
            }

            eprintln!();
            process::exit(ExitCode::ApplicationError.as_i32());
        }
    }
}

async fn run(args: Args, now: DateTime<Utc>) -> Result<ExitCode> {
    let config = GateConfig::resolve(&args)?;
    let request = CheckRequest::new(config.thresholds, config.report_only, now);

    let response = if let Some(input) = args.input.clone() {
        let use_case = CheckAlertsUseCase::new(JsonFileSource::new(input));
        use_case.execute(request).await?
    } else {
        check_via_github(&args, &config, request).await?
    };

    present_summary(&args, &response)?;

    let outcome = &response.outcome;
    let first_line = outcome.verdict_text().lines().next().unwrap_or_default();
    if outcome.passed() {
        eprintln!("\n{} {}", "PASS".green().bold(), first_line);
        Ok(ExitCode::Success)
    } else {
        eprintln!("\n{} {}", "FAIL".red().bold(), first_line);
        Ok(ExitCode::ViolationsDetected)
    }
}

async fn check_via_github(
    args: &Args,
    config: &GateConfig,
    request: CheckRequest,
) -> Result<CheckResponse> {
    let repo = config.repo.clone().ok_or_else(|| GateError::Configuration {
        message: "No repository specified".to_string(),
        hint: "Pass --repo owner/name or set GITHUB_REPOSITORY".to_string(),
    })?;
    let token = config.token.clone().ok_or_else(|| GateError::Configuration {
        message: "No GitHub token available".to_string(),
        hint: "Set GITHUB_TOKEN to a token with 'security_events' permission".to_string(),
    })?;

    eprintln!("Checking alerts for repository: {}", repo);

    let client = GitHubAlertClient::new(repo, &token)?;
    let use_case = CheckAlertsUseCase::new(&client);
    let response = use_case.execute(request).await?;

    // Comment delivery is visibility plumbing: failure is reported but must
    // never change the gate verdict.
    if !args.no_comment {
        if let Some(pr_number) = config.pr_number {
            let sink = PrCommentSink::new(&client, pr_number);
            if let Err(e) = use_case.publish_report(&sink, &response).await {
                eprintln!("⚠️  Warning: failed to post PR comment: {}", e);
            }
        }
    }

    if config.revoke_token {
        client.revoke_installation_token().await?;
    }

    Ok(response)
}

fn present_summary(args: &Args, response: &CheckResponse) -> Result<()> {
    let presenter: Box<dyn OutputPresenter> = if let Some(path) = args.output.clone() {
        Box::new(FileSystemWriter::new(path))
    } else {
        Box::new(StdoutPresenter::new())
    };
    presenter.present(&response.summary_markdown)
}
