use clap::Parser;
use skimroster::app::RosterApp;

fn main() {
    env_logger::init();
    log::info!("starting app at {}", chrono::Local::now().to_rfc3339());
    let args = RosterApp::parse();
    if let Err(e) = args.op.run() {
        log::error!("{e}");
        std::process::exit(1);
    }
}
