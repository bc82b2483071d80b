mod audio;
mod config;
mod display;
mod input;
mod library;
mod notify;
mod player;
mod runtime;
mod ui;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    runtime::run()
}
