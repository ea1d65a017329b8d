use anyhow::Result;
use clap::Args;
use wayfind_core::i18n::{translate, Language};
use wayfind_core::topology::{Topology, QUICK_NAV_KEYS};

#[derive(Args)]
pub struct LocationsArgs {
    /// Label language (zh-TW, en, ja, ko, vi, th)
    #[arg(short, long, default_value = "zh-TW")]
    pub lang: Language,
}

pub fn run(args: &LocationsArgs) -> Result<()> {
    let topology = Topology::standard();

    println!("{:<14} {:>7} {:>7}  {:<5} Label", "Key", "X", "Y", "Quick");
    for location in topology.locations() {
        let quick = if QUICK_NAV_KEYS.contains(&location.key) {
            "yes"
        } else {
            ""
        };
        println!(
            "{:<14} {:>7.1} {:>7.1}  {:<5} {}",
            location.key,
            location.coordinate.x,
            location.coordinate.y,
            quick,
            translate(location.key, args.lang)
        );
    }

    Ok(())
}
