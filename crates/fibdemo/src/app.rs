//! Application entry point and dispatch.

use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::Result;

use fibdemo_cli::output::write_usage;
use fibdemo_cli::presenter::{JsonPresenter, ReportPresenter};
use fibdemo_cli::ui;
use fibdemo_core::calculator::FibError;
use fibdemo_core::constants::exit_codes;
use fibdemo_core::input::parse_index;
use fibdemo_core::registry::DefaultFactory;
use fibdemo_orchestration::interfaces::ResultPresenter;
use fibdemo_orchestration::method_selection::get_methods_to_run;
use fibdemo_orchestration::orchestrator::{analyze_comparison_results, execute_method};

use crate::config::{AppConfig, Mode};
use crate::errors::{exit_code, handle_error};

/// Run the application.
pub fn run(mode: Mode) -> Result<ExitCode> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match mode {
        Mode::Usage => run_usage(&mut out),
        Mode::Completion(shell) => {
            let mut cmd = <AppConfig as clap::CommandFactory>::command();
            fibdemo_cli::completion::generate_completion(&mut cmd, shell, &mut out);
            Ok(ExitCode::SUCCESS)
        }
        Mode::Compute(config) => run_compute(&config, &mut out),
    }
}

/// Print usage and report the usage exit code. No computation happens.
pub fn run_usage(out: &mut dyn Write) -> Result<ExitCode> {
    write_usage(out)?;
    out.flush()?;
    Ok(exit_code(exit_codes::ERROR_USAGE))
}

/// Parse the index, run each selected method in turn, and present the results.
pub fn run_compute(config: &AppConfig, out: &mut dyn Write) -> Result<ExitCode> {
    let raw = config.number.as_deref().unwrap_or_default();
    let n = match parse_index(raw) {
        Ok(n) => n,
        Err(e) => return Ok(fail(&e)),
    };

    let factory = DefaultFactory::new();
    let methods = match get_methods_to_run(&config.method, &factory) {
        Ok(methods) => methods,
        Err(e) => return Ok(fail(&e)),
    };
    tracing::debug!(n, method = %config.method, "computing");

    let mut presenter: Box<dyn ResultPresenter + '_> = if config.json {
        Box::new(JsonPresenter::new(out))
    } else {
        Box::new(ReportPresenter::new(out, config.verbose))
    };

    let mut results = Vec::with_capacity(methods.len());
    for method in &methods {
        let result = execute_method(method.as_ref(), n);
        presenter.present_result(&result)?;
        results.push(result);
    }

    presenter.present_comparison(&analyze_comparison_results(&results))?;
    presenter.finish()?;

    Ok(ExitCode::SUCCESS)
}

fn fail(err: &FibError) -> ExitCode {
    ui::print_error(&err.to_string());
    exit_code(handle_error(err))
}
