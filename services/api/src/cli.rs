use crate::demo::{run_demo, run_pipeline_report, DemoArgs, ReportArgs};
use crate::server;
use ats_core::error::AppError;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "Applicant Tracking Service",
    about = "Run and demonstrate the applicant tracking service from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Print pipeline statistics over the seeded fixture data
    Report(ReportArgs),
    /// Run an end-to-end CLI demo covering intake, review, and evaluation
    Demo(DemoArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
    /// Override the configured data source ("mock" or "remote")
    #[arg(long)]
    pub(crate) data_source: Option<String>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Report(args) => run_pipeline_report(args),
        Command::Demo(args) => run_demo(args).await,
    }
}
