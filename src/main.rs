use std::env;
use std::error::Error;
use std::process;
use javadoc_xmldoc::config::{self, CliCommand, LOG_LEVEL_ENV};
use javadoc_xmldoc::logging;
use javadoc_xmldoc::rewrite::rewrite_file;
use log::info;

fn print_usage(program: &str) {
    eprintln!("Usage: {} [OPTIONS] <file>", program);
    eprintln!("  <file>: C# source file whose Javadoc comments are rewritten in place");
    eprintln!("Options:");
    eprintln!("  --flat-summary         Join all summary text into a single paragraph");
    eprintln!("  --require-summary      Fail on comment blocks that have no summary line");
    eprintln!("  --skip-marker <text>   Leave blocks containing <text> untouched (default: Copyright)");
    eprintln!("  -h, --help             Print this help");
    eprintln!("Log level is read from {} (default: info).", LOG_LEVEL_ENV);
    eprintln!("Example: {} XNATWL/Button.cs", program);
}

/// Print an error followed by its chain of causes
fn report_error(err: &dyn Error) {
    eprintln!("Error: {}", err);
    let mut source = err.source();
    while let Some(cause) = source {
        eprintln!("  caused by: {}", cause);
        source = cause.source();
    }
}

fn main() {
    let args: Vec<String> = env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("javadoc_xmldoc");

    let cli = match config::parse_args(args.iter().skip(1).cloned()) {
        Ok(CliCommand::Run(cli)) => cli,
        Ok(CliCommand::Help) => {
            print_usage(program);
            return;
        }
        Err(e) => {
            // Logger isn't initialized yet
            report_error(&e);
            print_usage(program);
            process::exit(1);
        }
    };

    if let Err(e) = logging::init_logger(config::log_level_from_env()) {
        report_error(&e);
        process::exit(1);
    }

    info!("Command line arguments: {:?}", args);

    if let Err(e) = rewrite_file(&cli.file, &cli.options) {
        report_error(&e);
        process::exit(1);
    }
}
