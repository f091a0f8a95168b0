use std::cmp::Ordering;

use anyhow::Context;
use cpucatalog::{
    catalog::cpus,
    schemas::computing::{OpenSpeed, CPU},
};
use structopt::StructOpt;

use crate::{run_impl_enum, run_impl_struct};

#[derive(StructOpt)]
pub struct Cpu {
    #[structopt(subcommand)]
    action: Action,
}

run_impl_struct!(Cpu, action);

#[derive(StructOpt)]
enum Action {
    /// List CPUs in catalog order, optionally filtered and sorted
    List(Query),
    /// Print the CPU with exactly this name
    Get { name: String },
}

run_impl_enum!(Action, self, ser, {
    match self {
        Self::List(query) => {
            let selected = query.select(cpus());
            log::debug!(
                "selected {} of {} CPUs with {:?}",
                selected.len(),
                cpus().len(),
                query
            );
            erased_serde::serialize(&selected, ser)?;
        }
        Self::Get { name } => {
            erased_serde::serialize(find(name)?, ser)?;
        }
    }
});

arg_enum! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum SortKey {
        Name,
        Year,
        OpenSpeed,
        Price,
    }
}

impl SortKey {
    fn compare(self, a: &CPU, b: &CPU) -> Ordering {
        match self {
            Self::Name => a.name.cmp(b.name),
            Self::Year => a.year.cmp(&b.year),
            Self::OpenSpeed => a.open_speed.cmp(&b.open_speed),
            Self::Price => a.price.cmp(&b.price),
        }
    }
}

#[derive(StructOpt, Debug, Default)]
struct Query {
    /// Sort by this field, ascending unless --descending is given
    #[structopt(long, possible_values = &SortKey::variants(), case_insensitive = true)]
    sort_by: Option<SortKey>,
    #[structopt(long, requires = "sort-by")]
    descending: bool,
    /// Only keep CPUs whose open speed score is strictly greater than this
    #[structopt(long)]
    faster_than: Option<u32>,
    /// Only keep CPUs released in this year
    #[structopt(long)]
    year: Option<u16>,
}

impl Query {
    fn select(&self, cpus: &'static [CPU]) -> Vec<&'static CPU> {
        let mut selected: Vec<&CPU> = cpus
            .iter()
            .filter(|cpu| {
                self.faster_than
                    .map_or(true, |score| cpu.open_speed > OpenSpeed(score))
            })
            .filter(|cpu| self.year.map_or(true, |year| cpu.year == year))
            .collect();

        /* sort_by is stable, so ties stay in catalog order either way */
        if let Some(key) = self.sort_by {
            selected.sort_by(|a, b| {
                let ordering = key.compare(a, b);
                if self.descending {
                    ordering.reverse()
                } else {
                    ordering
                }
            });
        }

        selected
    }
}

fn find(name: &str) -> anyhow::Result<&'static CPU> {
    log::debug!("looking up CPU {:?}", name);
    cpus()
        .iter()
        .find(|cpu| cpu.name == name)
        .with_context(|| format!("no CPU named {:?} in the catalog", name))
}
