use edge_bundler::config::bundle;
use edge_bundler::io::write_json_file;
use edge_bundler::EdgeBundler;
use std::env;
use std::path::Path;

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = bundle::load_config(Path::new(&config_path))?;

    let (edges, weights) = bundle::load_input(&config.input)?
        .into_edges()
        .map_err(|e| format!("Invalid input {}: {e}", config.input.display()))?;

    let bundler = EdgeBundler::new(config.params);
    let output = bundler
        .bundle_with_report(&edges, weights.as_deref())
        .map_err(|e| format!("Bundling failed: {e}"))?;

    write_json_file(&config.output.rows_json, &output.bundled)?;
    println!(
        "Saved {} rows ({} edges x {} points) to {}",
        output.bundled.len(),
        output.bundled.n_edges(),
        output.bundled.segments(),
        config.output.rows_json.display()
    );

    let report = &output.report;
    println!(
        "Compatible pairs: {} of {} ({} visibility checks)",
        report.compatibility.compatible_pairs,
        report.compatibility.total_pairs,
        report.compatibility.candidate_pairs
    );
    for cycle in &report.cycles {
        println!(
            "  cycle {}: P={} S={} I={} ({:.2} ms)",
            cycle.cycle, cycle.subdivisions, cycle.step_size, cycle.iterations, cycle.elapsed_ms
        );
    }
    println!("Total: {:.2} ms", report.timing.total_ms);

    if let Some(path) = &config.output.report_json {
        write_json_file(path, report)?;
        println!("Saved report to {}", path.display());
    }

    Ok(())
}

fn usage() -> String {
    "Usage: bundle_demo <config.json>".to_string()
}
