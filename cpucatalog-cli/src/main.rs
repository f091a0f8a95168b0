#[macro_use]
extern crate clap;

pub(crate) mod common;
mod modules;
mod options;

use std::io::stdout;

use erased_serde::Serializer;
use structopt::StructOpt;

use crate::common::Run;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let opt = options::Options::from_args();

    if opt.compact {
        opt.command.run(&mut <dyn Serializer>::erase(
            &mut serde_json::Serializer::new(stdout()),
        ))?;
    } else {
        opt.command.run(&mut <dyn Serializer>::erase(
            &mut serde_json::Serializer::pretty(stdout()),
        ))?;
    }

    println!();
    Ok(())
}
