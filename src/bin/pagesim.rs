use {
    clap::Parser,
    pagesim::{
        PolicyKind,
        Simulation,
        SimulationConfig,
        SimulationResult,
        Step,
        frame_count,
        parse_references,
    },
    std::{fmt::Write, process::ExitCode},
};

#[derive(Parser, Debug)]
#[command(version, about = "Page replacement simulator: FIFO, LRU, LFU, MFU and Clock")]
struct Args {
    /// Number of physical frames.
    #[arg(short, long, allow_negative_numbers = true)]
    frames: i64,

    /// Replacement policy (fifo, lru, lfu, mfu, clock) or `all` to compare them.
    #[arg(short, long, default_value = "all")]
    policy: String,

    /// Emit results as JSON.
    #[arg(long)]
    json: bool,

    /// Print only the summary of every run.
    #[arg(short, long)]
    quiet: bool,

    /// Page references, separated by commas and/or whitespace.
    ///
    /// Negative numbers are captured so they can be reported as invalid
    /// references, any other token starting with `-` is taken as a flag.
    #[arg(allow_negative_numbers = true)]
    references: Vec<String>,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    match simulate(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn simulate(args: &Args) -> Result<(), String> {
    let frame_count = frame_count(args.frames).map_err(|e| e.to_string())?;
    let references = parse_references(&args.references.join(" ")).map_err(|e| e.to_string())?;
    let policies = if args.policy.eq_ignore_ascii_case("all") {
        PolicyKind::ALL.to_vec()
    } else {
        vec![args.policy.parse::<PolicyKind>().map_err(|e| e.to_string())?]
    };

    let sim = Simulation::with_config(SimulationConfig {
        frame_count,
        policies,
    })
    .map_err(|e| e.to_string())?;

    let mut results = Vec::new();
    for result in sim.compare(&references) {
        // A failed run is reported, the remaining policies still run.
        match result {
            Ok(result) => results.push(result),
            Err(err) => eprintln!("Error: {err}"),
        }
    }

    if args.json {
        let output = serde_json::to_string_pretty(&results)
            .map_err(|e| format!("Couldn't serialise the output: {e}"))?;
        println!("{output}");
        return Ok(());
    }

    for result in &results {
        print!("{}", format_result(result, args.quiet));
    }
    if results.len() > 1 {
        print!("{}", format_comparison(&results));
    }
    Ok(())
}

fn format_result(result: &SimulationResult, quiet: bool) -> String {
    let mut out = format!("\n========== {} SIMULATION ==========\n", result.policy);
    if !quiet {
        for step in &result.steps {
            let _ = writeln!(out, "{}", format_step(step));
        }
    }

    let summary = &result.summary;
    let _ = writeln!(out, "----------------------------------");
    let _ = writeln!(out, "Total Requests: {}", summary.requests);
    let _ = writeln!(out, "Page Faults: {}", summary.faults);
    let _ = writeln!(out, "Page Hits: {}", summary.hits);
    let _ = writeln!(out, "Fault Rate: {:.2}%", summary.fault_rate_percent);
    out
}

fn format_step(step: &Step) -> String {
    let frames = step
        .frames
        .iter()
        .map(|slot| slot.map_or_else(|| "-".to_string(), |page| page.to_string()))
        .collect::<Vec<_>>()
        .join(" ");

    let status = if step.outcome.is_hit() {
        "HIT".to_string()
    } else {
        match step.outcome.evicted() {
            Some(victim) => format!("FAULT (evicted {victim} from frame {})", step.frame),
            None => "FAULT".to_string(),
        }
    };
    format!("Page {} -> {status} [{frames}]", step.page)
}

fn format_comparison(results: &[SimulationResult]) -> String {
    let mut out = String::from("\n========== COMPARISON ==========\n");
    let _ = writeln!(out, "{:<8} {:>8} {:>8} {:>10}", "Policy", "Faults", "Hits", "Fault %");
    for result in results {
        let summary = &result.summary;
        let _ = writeln!(
            out,
            "{:<8} {:>8} {:>8} {:>9.2}%",
            result.policy.name(),
            summary.faults,
            summary.hits,
            summary.fault_rate_percent
        );
    }
    out
}
