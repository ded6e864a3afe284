use shipos::{console, DISPATCH_REQUESTS};
use std::io;

fn main() -> io::Result<()> {
    // Report internal events to the console
    tracing_subscriber::fmt().init();

    let stdout = io::stdout();
    let mut out = stdout.lock();

    console::confirm_shared_computer(&mut out)?;
    console::run_dispatch_loop(DISPATCH_REQUESTS, &mut out)?;

    Ok(())
}
