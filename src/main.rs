// DermaScan 🩺 AGPL-3.0 License - https://github.com/dermascan/inference

use std::process;

use clap::error::ErrorKind;
use clap::Parser;

use dermascan_inference::cli::args::{map_clap_error, Cli};
use dermascan_inference::cli::logging::set_verbose;
use dermascan_inference::cli::predict::run_prediction;
use dermascan_inference::error;

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
                let _ = err.print();
                process::exit(0);
            }
            // One diagnostic line, exit status 1 (clap's own default is 2)
            error!("{}", map_clap_error(&err));
            process::exit(1);
        }
    };

    set_verbose(cli.verbose);

    if let Err(err) = run_prediction(&cli) {
        error!("{err}");
        process::exit(1);
    }
}
