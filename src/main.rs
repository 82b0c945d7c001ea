use std::{
    fs,
    io::{self, BufRead, Write},
};

use anyhow::{bail, Context};
use page_sim::{Policy, ReferenceString, RunConfig, RunStats, Simulation};

const USAGE: &str = "\
Usage: page_sim [-r <refs> | -g <len> [--seed <n>]] [-f <frames>] [-p <policy>]
                [--config <json> | -c <path>] [--step] [--json <path>]

  -r <refs>        reference string, e.g. \"1 2 3 4 1 2\"
  -g <len>         generate a random reference string of <len> pages
  --seed <n>       seed for -g
  -f <frames>      physical frames [1 - 8] (default 3)
  -p <policy>      fifo, opt, lru, lfu or all (default all)
  --config <json>  run configuration as JSON, or -c <path> to read it from a file
  --step           press ENTER after every step
  --json <path>    write run statistics as JSON";

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Uh-oh. {err:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        println!("{USAGE}");
        return Ok(());
    }
    let step_mode = args.contains("--step");
    let stats_path: Option<String> = args.opt_value_from_str("--json")?;

    let config_str: Option<String> =
        if let Some(config_str) = args.opt_value_from_str("--config")? {
            Some(config_str)
        } else if let Some(config_path) = args.opt_value_from_str::<_, String>("-c")? {
            let config_str = fs::read_to_string(&config_path)
                .with_context(|| format!("cannot read config file {config_path}"))?;
            Some(config_str)
        } else {
            None
        };

    let simulations = match config_str {
        Some(json) => RunConfig::from_json(&json)?.to_simulations()?,
        None => simulations_from_args(&mut args)?,
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        bail!("unexpected arguments: {remaining:?}\n\n{USAGE}");
    }

    let stats = simulations
        .into_iter()
        .map(|sim| play(sim, step_mode))
        .collect::<anyhow::Result<Vec<RunStats>>>()?;

    if let Some(stats_path) = stats_path {
        let stats_file =
            fs::File::create(&stats_path).with_context(|| format!("cannot open {stats_path}"))?;
        serde_json::to_writer_pretty(stats_file, &stats)?;
    }
    Ok(())
}

fn simulations_from_args(args: &mut pico_args::Arguments) -> anyhow::Result<Vec<Simulation>> {
    let frames: usize = args.opt_value_from_str("-f")?.unwrap_or(3);
    let policy: String = args
        .opt_value_from_str("-p")?
        .unwrap_or_else(|| "all".to_owned());
    let policies = if policy.eq_ignore_ascii_case("all") {
        Policy::ALL.to_vec()
    } else {
        vec![policy.parse::<Policy>()?]
    };

    let refs: Option<String> = args.opt_value_from_str("-r")?;
    let length: Option<i64> = args.opt_value_from_str("-g")?;
    let seed: Option<u64> = args.opt_value_from_str("--seed")?;
    let reference = match (refs, length) {
        (Some(line), _) => ReferenceString::parse_line(&line)?,
        (None, Some(length)) => {
            let reference = match seed {
                Some(seed) => ReferenceString::generate_seeded(length, seed)?,
                None => ReferenceString::generate(length, &mut fastrand::Rng::new())?,
            };
            println!("Reference string successfully generated!\n{reference}");
            reference
        }
        (None, None) => ReferenceString::default(),
    };

    let simulations = policies
        .into_iter()
        .map(|policy| Simulation::new(reference.clone(), frames, policy))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(simulations)
}

fn play(mut sim: Simulation, step_mode: bool) -> anyhow::Result<RunStats> {
    println!("\nStarting {}\n", sim.policy());
    if step_mode {
        print!("{}", sim.render());
        wait_for_enter()?;
        while sim.has_next() {
            sim.step()?;
            println!("\nCurrent Table\n");
            print!("{}", sim.render());
            wait_for_enter()?;
        }
    } else {
        sim.run_to_end()?;
        print!("{}", sim.render());
    }
    println!("\nA total of {} faults occurred.", sim.fault_count());
    Ok(sim.stats())
}

fn wait_for_enter() -> io::Result<()> {
    print!("\nPlease press ENTER to continue...");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(())
}
