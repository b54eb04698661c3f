use std::env;
use std::process;

use log::{error, info};

mod cli;

fn setup_logging() {
    if env::var("LOG").is_err() {
        env::set_var("LOG", "ugatu_ics=info,ugatu_parser=info");
    }

    pretty_env_logger::init_custom_env("LOG");
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    setup_logging();

    let args = cli::parse(env::args().skip(1).collect());

    match ugatu_ics::export(&args.url, &args.output).await {
        Ok(summary) => info!(
            "Exported {} events from {} weeks ({} rows dropped)",
            summary.events, summary.weeks, summary.skipped
        ),
        Err(err) if err.is_fatal() => {
            error!("{err}");
            process::exit(1);
        }
        Err(err) => error!("{err}"),
    }
}
