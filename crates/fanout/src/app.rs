//! Application entry point and dispatch.

use anyhow::{Context, Result};
use tracing::info;

use fanout_cli::output::write_report;
use fanout_cli::presenter::CLIResultPresenter;
use fanout_core::kernel::KernelKind;
use fanout_core::observers::{LoggingObserver, RecordingObserver, TeeObserver};
use fanout_orchestration::interfaces::{BatchOutcome, ResultPresenter};
use fanout_orchestration::operation_selection::get_operations_to_run;
use fanout_orchestration::orchestrator::{compare_strategies, execute_operation};

use crate::config::AppConfig;

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        fanout_cli::completion::generate_completion(&mut cmd, shell, &mut std::io::stdout());
        return Ok(());
    }

    match config.op.as_deref() {
        Some(op) if config.compare => run_compare(config, op),
        Some(op) => run_cli(config, op),
        None => run_server(config),
    }
}

fn run_server(config: &AppConfig) -> Result<()> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("cannot start the async runtime")?;

    runtime.block_on(async {
        let listener = fanout_server::bind((config.host.as_str(), config.port))
            .await
            .with_context(|| format!("cannot bind {}:{}", config.host, config.port))?;
        fanout_server::serve(listener).await?;
        Ok(())
    })
}

fn run_cli(config: &AppConfig, op: &str) -> Result<()> {
    let batch = config.batch().context("invalid --numbers")?;
    let operations = get_operations_to_run(op)?;
    let presenter = CLIResultPresenter::new(config.verbose, config.quiet);
    let logging = LoggingObserver::new();

    let mut outcomes: Vec<BatchOutcome> = Vec::with_capacity(operations.len());
    for operation in operations {
        let recorder = RecordingObserver::new();
        let observer = TeeObserver::new(&logging, &recorder);
        let outcome = execute_operation(operation, &batch, &observer)?;

        presenter.present_outcome(&outcome, &batch);
        if config.details {
            presenter.present_completion_order(&recorder.updates());
        }
        outcomes.push(outcome);
    }

    if let (Some(path), Some(first)) = (&config.output, outcomes.first()) {
        write_report(path, &first.to_response())
            .with_context(|| format!("cannot write report to {path}"))?;
        info!(path = %path, "report written");
    }

    Ok(())
}

fn run_compare(config: &AppConfig, op: &str) -> Result<()> {
    let batch = config.batch().context("invalid --numbers")?;
    let presenter = CLIResultPresenter::new(config.verbose, config.quiet);
    let logging = LoggingObserver::new();

    let mut kernels: Vec<KernelKind> = Vec::new();
    for operation in get_operations_to_run(op)? {
        if !kernels.contains(&operation.kernel()) {
            kernels.push(operation.kernel());
        }
    }

    for kernel in kernels {
        let results = compare_strategies(kernel, &batch, &logging)
            .with_context(|| format!("comparing strategies for {kernel}"))?;
        presenter.present_comparison(&results);
    }

    Ok(())
}
