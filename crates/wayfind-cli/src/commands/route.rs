use anyhow::Result;
use clap::Args;
use wayfind_core::config::WayfindConfig;
use wayfind_core::i18n::{translate, Language};
use wayfind_core::nav::NavigationState;
use wayfind_core::route::RoutePlanner;
use wayfind_core::topology::Topology;

use crate::summary::print_route_summary;

#[derive(Args)]
pub struct RouteArgs {
    /// Destination key (see `wayfind locations`)
    pub destination: Option<String>,

    /// Label language; defaults to the configured one
    #[arg(short, long)]
    pub lang: Option<Language>,
}

pub fn run(args: &RouteArgs, config: &WayfindConfig) -> Result<()> {
    let topology = Topology::standard();
    let nav = NavigationState::from(&config.navigation);
    let key = args.destination.as_deref().unwrap_or(nav.destination());
    let lang = args.lang.unwrap_or(config.navigation.language);

    if !topology.contains(key) {
        tracing::warn!(destination = key, "unknown destination, routing to the default");
    }

    let route = RoutePlanner::new(topology).route(key);
    print_route_summary(&route, &translate(key, lang), topology.contains(key));

    Ok(())
}
