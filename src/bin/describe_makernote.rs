use clap::Parser;
use makernote::yaml::{DirectoryYamlDumper, DirectoryYamlParser};
use makernote::Vendor;
use std::fs;
use std::process::ExitCode;
use tracing::{debug, error};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Describe the values of a makernote directory given as yaml in a human readable way
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// yaml file with one `TagName: value` line per makernote entry
    #[arg(required_unless_present = "list_vendors")]
    file: Option<String>,
    /// the makernote layout the tags belong to (see --list-vendors)
    #[arg(short = 'm', long, required_unless_present = "list_vendors")]
    vendor: Option<Vendor>,
    /// print the normalized yaml instead of the descriptions
    #[arg(short = 'r', long, action)]
    raw: bool,
    /// convert Rational and SRational types to float for better readability (this is lossy)
    #[arg(short = 'f', long, action)]
    dump_rational_as_float: bool,
    /// log how the input is interpreted
    #[arg(short = 'v', long, action)]
    verbose: bool,
    /// print the identifiers of all known makernote layouts and exit
    #[arg(short = 'l', long, action)]
    list_vendors: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    if args.list_vendors {
        for vendor in Vendor::ALL {
            println!("{:<26} {}", vendor.id(), vendor.name());
        }
        return ExitCode::SUCCESS;
    }
    let (Some(file), Some(vendor)) = (args.file, args.vendor) else {
        error!("both a file and a vendor are required");
        return ExitCode::FAILURE;
    };

    let source = match fs::read_to_string(&file) {
        Ok(source) => source,
        Err(e) => {
            error!(%file, "cannot read input: {e}");
            return ExitCode::FAILURE;
        }
    };
    let directory = match DirectoryYamlParser::parse_from_str(&source, vendor) {
        Ok(directory) => directory,
        Err(e) => {
            error!(%file, "cannot parse input: {e}");
            return ExitCode::FAILURE;
        }
    };
    debug!(entries = directory.len(), vendor = vendor.id(), "parsed directory");

    let dumper = DirectoryYamlDumper {
        dump_rational_as_float: args.dump_rational_as_float,
        visitor: None,
    };
    if args.raw {
        print!("{}", dumper.dump_directory(&directory));
    } else {
        print!("{}", dumper.describe_directory(&directory));
    }
    ExitCode::SUCCESS
}

fn init_logging(verbose: bool) {
    let env_filter = if verbose {
        "makernote=debug,describe_makernote=debug"
    } else {
        "makernote=warn,describe_makernote=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| env_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
