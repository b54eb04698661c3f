use std::env;
use std::path::PathBuf;
use std::process;

use getopts::Options;

pub struct Args {
    pub url: String,
    pub output: PathBuf,
}

fn opts() -> Options {
    let mut opts = Options::new();
    opts.optflag(
        "h",
        "help",
        concat!("Print the help output of ", env!("CARGO_PKG_NAME")),
    );
    opts.optopt(
        "u",
        "url",
        "Link to your schedule page, containing `schedule_semestr_id` and `student_group_id`",
        "URL",
    );
    opts.optopt(
        "o",
        "output",
        "File to write the calendar to [Default: calendar.ics]",
        "PATH",
    );
    opts
}

pub fn parse(args: Vec<String>) -> Args {
    let opts = opts();

    let matches = match opts.parse(args) {
        Ok(matches) => matches,
        Err(fail) => {
            eprintln!("{fail}");
            process::exit(1);
        }
    };

    if matches.opt_present("help") {
        println!("{}", opts.usage(&opts.short_usage(env!("CARGO_PKG_NAME"))));
        process::exit(0);
    }

    // An absent link is rejected later like any other malformed one.
    let url = matches.opt_str("url").unwrap_or_default();

    let output = matches
        .opt_str("output")
        .map_or_else(|| PathBuf::from("calendar.ics"), PathBuf::from);

    Args { url, output }
}
