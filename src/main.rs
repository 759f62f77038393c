use anyhow::Result;

use clap::Parser;
use cli::Cli;

mod cli;
mod course;
mod menu;
mod prompt;
mod semester;
mod store;

fn main() -> Result<()> {
    Cli::parse();

    let mut store = store::CourseStore::new();
    menu::run(&mut store)
}
