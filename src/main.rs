// src/main.rs

use dagx::{Outcome, cli, logging, run};

fn main() {
    match run_main() {
        Ok(Outcome::Acyclic) => {}
        Ok(Outcome::Cyclic) => std::process::exit(2),
        Err(err) => {
            eprintln!("dagx error: {err:?}");
            std::process::exit(1);
        }
    }
}

fn run_main() -> anyhow::Result<Outcome> {
    let args = cli::parse();
    logging::init_logging(args.log_level)?;
    let mut stdout = std::io::stdout().lock();
    Ok(run(&args, &mut stdout)?)
}
