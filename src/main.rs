use std::{env, io, process, sync::Arc};

use canvas::RecordingSurface;
use log::info;
use session::{LogObserver, Outcome, Session, SessionConfig};

#[tokio::main]
async fn main() -> io::Result<()> {
    env_logger::init();

    // Every argument is one compute request, in order
    let inputs: Vec<String> = env::args().skip(1).collect();

    if inputs.iter().any(|arg| arg == "-h" || arg == "--help") {
        eprintln!("Usage: linear-learner [x ...]");
        eprintln!("Set {} to the path of a JSON config file.", session::configs::CONFIG_ENV);
        process::exit(0);
    }

    let config = SessionConfig::from_env()?;
    let session = Session::new(&config, RecordingSurface::new(), Arc::new(LogObserver))?;

    for input in &inputs {
        match session.compute(input).await {
            Ok(Outcome::Completed(report)) => println!(
                "x = {} -> y = {:.4} ({:.3} ms, {} samples)",
                report.x,
                report.y,
                report.elapsed.as_secs_f64() * 1000.,
                report.trained_on
            ),
            Ok(Outcome::Aborted) => println!("{input:?} is not a usable number, skipped"),
            Ok(Outcome::Rejected) => println!("{input:?} rejected, another cycle is running"),
            Err(e) => eprintln!("{input:?} failed: {e}"),
        }
    }

    let dataset = session.snapshot();
    info!(samples = dataset.len(); "final dataset");

    let path: Vec<_> = dataset
        .iter()
        .map(|s| format!("[{}, {:.4}]", s.x, s.y))
        .collect();
    println!("path: [{}]", path.join(", "));

    let surface = session.surface();
    let surface = surface.lock();
    println!(
        "drawn: {} markers, {} segments",
        surface.markers().len(),
        surface.segments().len()
    );

    Ok(())
}
