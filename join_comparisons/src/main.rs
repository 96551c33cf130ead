use env_logger::Env;
use join_comparisons::{config::BenchConfig, harness};

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    match harness::run(&BenchConfig::default()) {
        Ok(report) => print!("{report}"),
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    }
}
