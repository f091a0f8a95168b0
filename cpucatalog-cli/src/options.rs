use crate::{common::Run, modules::cpu::Cpu, run_impl_enum};
use structopt::StructOpt;

#[derive(StructOpt)]
#[structopt(name = "cpucatalog-cli", about = "Print the CPU catalog as JSON")]
pub struct Options {
    /// Print JSON on a single line instead of pretty-printing it
    #[structopt(long)]
    pub compact: bool,
    #[structopt(subcommand)]
    pub command: Command,
}

#[derive(StructOpt)]
pub enum Command {
    Cpu(Cpu),
}

run_impl_enum!(Command, self, ser, {
    match self {
        Self::Cpu(c) => c.run(ser)?,
    }
});
