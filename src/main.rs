use log::{error, info, LevelFilter};
use rand::{Rng, SeedableRng, XorShiftRng};
use simplelog::{Config, SimpleLogger};
use std::env;
use std::process;
use treap_layout::svg::{self, SvgRenderer};
use treap_layout::treap::Treap;

const DEFAULT_OUTPUT: &str = "file.svg";
const PRIORITY_SEED: [u32; 4] = [69, 69, 69, 69];
const SAMPLE_SEED: [u32; 4] = [42, 17, 5, 3];
const KEYS: [u32; 6] = [20, 2, 10, 15, 7, 2];
const MAX_SAMPLED_KEY: u32 = 100;

fn sample_keys(count: usize) -> Vec<u32> {
    let mut rng: XorShiftRng = SeedableRng::from_seed(SAMPLE_SEED);
    (0..count).map(|_| rng.gen_range(0, MAX_SAMPLED_KEY)).collect()
}

fn build_treap(sampled: usize) -> Treap<u32, ()> {
    let mut treap = Treap::with_seed(PRIORITY_SEED);
    for key in KEYS.iter().cloned().chain(sample_keys(sampled)) {
        treap.insert(key, ());
    }
    treap
}

fn run(output: &str, sampled: usize) -> svg::Result<()> {
    let treap = build_treap(sampled);

    info!(
        "inserted {} keys, tree depth is {}",
        treap.size(),
        treap.depth(),
    );

    SvgRenderer::default().write_to_file(&treap, output)?;
    info!("wrote {}", output);
    Ok(())
}

fn main() {
    if SimpleLogger::init(LevelFilter::Info, Config::default()).is_err() {
        eprintln!("Error: Could not initialize logger.");
    }

    let args: Vec<String> = env::args().skip(1).collect();
    let output = args.get(0).map(String::as_str).unwrap_or(DEFAULT_OUTPUT);
    let sampled = match args.get(1).map(|arg| arg.parse::<usize>()) {
        Some(Ok(sampled)) => sampled,
        Some(Err(err)) => {
            error!("invalid number of sampled keys: {}", err);
            process::exit(2);
        },
        None => 0,
    };

    if let Err(err) = run(output, sampled) {
        error!("could not write {}: {}", output, err);
        process::exit(1);
    }
}
