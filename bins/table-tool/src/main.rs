use clap::Parser;

use cai_codes::tablegen::{self, BlockCodeParams};
use cai_core::debug;

#[derive(Parser, Debug)]
#[command(
    version,
    about = "CAI syndrome table generator",
    long_about = "Derives the parity-check matrix and the syndrome/error-pattern table of \
                  the (17,9,5) base cyclic code and prints them as binary source constants"
)]
struct Args {
    /// Verbose log file (traces every derivation step)
    #[arg(short = 'd', long = "debug-log")]
    debug_log: Option<String>,
}

fn main() {
    let args = Args::parse();
    let _log_guard = debug::setup_logging_default(args.debug_log);

    let params = BlockCodeParams::base17();
    match tablegen::render_tables(&params) {
        Ok(report) => print!("{}", report),
        Err(e) => {
            eprintln!("Failed to render tables: {}", e);
            std::process::exit(1);
        }
    }
}
