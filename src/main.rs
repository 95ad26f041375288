use clap::Parser;
use spdlog::prelude::*;
use std::{error::Error, path::PathBuf, time::Duration};

use analyses::api::ApiClient;
use analyses::notes::{GitNotes, split_notes};
use analyses::{ReportParser, get_notes, select_latest};

/// Show the latest static-analysis report attached to a commit
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Files holding raw notes, one report per line
    files: Vec<PathBuf>,

    /// Read the notes attached to this commit instead of files
    #[arg(long, conflicts_with = "files")]
    commit: Option<String>,

    /// Repository to read notes from
    #[arg(long, default_value = ".")]
    repo: PathBuf,

    /// Also download and print the analysis messages of the latest report
    #[arg(long)]
    notes: bool,

    /// HTTP timeout in seconds when downloading report details
    #[arg(long)]
    timeout: Option<u64>,

    #[arg(short, long)]
    verbose: bool,
}

fn read_raw_notes(args: &Args) -> Result<Vec<Vec<u8>>, std::io::Error> {
    if let Some(commit) = &args.commit {
        return GitNotes::new(&args.repo).read(commit);
    }

    let mut raw = Vec::new();
    for file in &args.files {
        debug!("reading notes from {}", file.display());
        raw.extend(split_notes(&std::fs::read(file)?));
    }
    Ok(raw)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    if args.verbose {
        spdlog::default_logger().set_level_filter(spdlog::LevelFilter::All);
    }

    let raw_notes = read_raw_notes(&args)?;
    let reports = ReportParser::default().parse_all_valid(&raw_notes);
    info!("{} of {} notes are valid reports", reports.len(), raw_notes.len());

    let Some(latest) = select_latest(&reports)? else {
        println!("no analyses reports found");
        return Ok(());
    };
    println!("{}", latest.to_json()?);

    if args.notes {
        let client = match args.timeout {
            Some(secs) => ApiClient::with_timeout(Duration::from_secs(secs))?,
            None => ApiClient::new(),
        };
        for note in get_notes(&client, latest).await? {
            println!("{}", serde_json::to_string(&note)?);
        }
    }

    Ok(())
}
