use std::io::{self, BufWriter};
use std::process;

use dotenv::dotenv;
use chudnovsky_pi::{config::PiConfig, runner};

fn main() {
    dotenv().ok();

    let cfg = match PiConfig::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("🛑 Bad configuration: {}", e);
            process::exit(1);
        }
    };

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    match runner::run(&cfg, &mut out) {
        Ok(report) => {
            if cfg.report {
                eprintln!("{}", report.to_json());
            }
        }
        Err(e) => {
            eprintln!("🛑 Computation failed: {}", e);
            process::exit(1);
        }
    }
}
