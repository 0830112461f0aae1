mod banner;
mod command;
mod console;
mod error;
mod report;

use tracing_subscriber::EnvFilter;

// One operator, one device, one operation in flight: the whole console
// runs on a current-thread runtime.
#[tokio::main(flavor = "current_thread")]
async fn main() {
    banner::print();
    init_tracing();

    // Ctrl-C unwinds through the same exit path as `quit` instead of
    // killing the process mid-prompt.
    tokio::spawn(async {
        if tokio::signal::ctrl_c().await.is_ok() {
            println!();
            report::status("Exiting Bravia Console.");
            std::process::exit(0);
        }
    });

    let mut console = console::Console::new();
    if let Err(err) = console.run().await {
        eprintln!("{:?}", miette::Report::new(err));
        std::process::exit(1);
    }
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .init();
}
