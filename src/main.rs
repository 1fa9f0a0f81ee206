mod config;
mod display;
mod input;
mod library;
mod metadata;
mod player;
mod runtime;
mod session;
mod ui;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    runtime::run()
}
