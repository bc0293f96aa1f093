use anyhow::Result;

mod args;
mod exit_status;
mod report;
mod run;

pub use args::{Arguments, OutputMode};
pub use exit_status::ExitStatus;
pub use run::Settings;

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let settings = run::settings(args)?;
    let outcome = run::run(&settings)?;
    report::print(&settings, &outcome)?;

    Ok(ExitStatus::from_outcome(
        &outcome,
        settings.warn_only,
        settings.fail_on_read_error,
    ))
}
