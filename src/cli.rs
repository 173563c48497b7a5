use clap::{ArgGroup, Parser};
use std::process::ExitCode;

use crate::storage::CsvGateway;

/// Upload, download and list CSV files in object storage.
#[derive(Parser, Debug)]
#[command(name = "csvgate", version, about)]
#[command(group(
    ArgGroup::new("action")
        .required(true)
        .args(["upload", "download", "list"])
))]
pub struct Args {
    /// Upload a CSV file to a storage prefix
    #[arg(long)]
    pub upload: bool,

    /// Download a CSV file from storage into a local directory
    #[arg(long)]
    pub download: bool,

    /// List CSV files under a storage prefix
    #[arg(long)]
    pub list: bool,

    /// Source path (local file or s3:// URI)
    pub source: String,

    /// Destination path (s3:// URI or local directory; unused by --list)
    pub destination: String,
}

/// The single action selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Upload,
    Download,
    List,
}

impl Args {
    pub fn action(&self) -> Action {
        if self.upload {
            Action::Upload
        } else if self.download {
            Action::Download
        } else {
            Action::List
        }
    }
}

/// Run the selected action and map its outcome to an exit code.
pub async fn run(args: Args, gateway: &CsvGateway) -> ExitCode {
    let action = args.action();
    let success = match action {
        Action::Upload => gateway
            .upload(&args.source, &args.destination)
            .await
            .is_success(),
        Action::Download => gateway
            .download(&args.source, &args.destination)
            .await
            .is_success(),
        Action::List => {
            let outcome = gateway.list(&args.source).await;
            let success = outcome.is_success();
            for path in outcome.ok().unwrap_or_default() {
                println!("{path}");
            }
            success
        }
    };
    exit_code(action, success)
}

/// Exit code for an action's outcome. Listing always exits 0; its failures
/// are logged and produce no output.
pub fn exit_code(action: Action, success: bool) -> ExitCode {
    if exits_cleanly(action, success) {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn exits_cleanly(action: Action, success: bool) -> bool {
    success || action == Action::List
}
