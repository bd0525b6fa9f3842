use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use wayfarer_lib::{
    generate_routes, load_graph, Error as LibError, Route, RouteOptions, WaypointCatalog,
};

#[derive(Parser, Debug)]
#[command(author, version, about = "Wayfarer travel route planning utilities")]
struct Cli {
    /// Path to the waypoints JSON file.
    #[arg(long)]
    waypoints: PathBuf,

    /// Path to the edge definitions JSON file.
    #[arg(long)]
    edges: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute the best route and alternatives between two waypoint names.
    Route {
        /// Starting waypoint name.
        #[arg(long = "from")]
        from: String,
        /// Destination waypoint name.
        #[arg(long = "to")]
        to: String,
        /// Factor CO2 emissions into the route weights.
        #[arg(long)]
        eco_friendly: bool,
        /// Factor travel time into the route weights.
        #[arg(long)]
        time_aware: bool,
        /// Maximum number of alternative routes.
        #[arg(long, default_value_t = 3)]
        alternatives: usize,
        /// Emit the routes as JSON instead of text.
        #[arg(long)]
        json: bool,
    },
    /// List the waypoints available in the catalog.
    Waypoints,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let (catalog, graph) = load_graph(&cli.waypoints, &cli.edges)
        .context("failed to load the travel network")?;

    match cli.command {
        Command::Route {
            from,
            to,
            eco_friendly,
            time_aware,
            alternatives,
            json,
        } => {
            let options = RouteOptions {
                eco_friendly,
                time_aware,
                alternatives,
            };
            handle_route(&catalog, &graph, &from, &to, &options, json)
        }
        Command::Waypoints => handle_waypoints(&catalog),
    }
}

fn handle_route(
    catalog: &WaypointCatalog,
    graph: &wayfarer_lib::Graph,
    from: &str,
    to: &str,
    options: &RouteOptions,
    json: bool,
) -> Result<()> {
    let start = catalog.resolve(from)?;
    let end = catalog.resolve(to)?;

    let start_id = start.id.ok_or_else(|| LibError::UnknownWaypoint {
        name: from.to_string(),
        suggestions: Vec::new(),
    })?;
    let end_id = end.id.ok_or_else(|| LibError::UnknownWaypoint {
        name: to.to_string(),
        suggestions: Vec::new(),
    })?;

    let routes = generate_routes(graph, start_id, end_id, options);

    if routes.is_empty() {
        return Err(LibError::RouteNotFound {
            start: from.to_string(),
            goal: to.to_string(),
        }
        .into());
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&routes)?);
        return Ok(());
    }

    let Some((best, alternatives)) = routes.split_first() else {
        return Ok(());
    };

    println!("Best route:");
    print_route(best);

    if !alternatives.is_empty() {
        println!();
        println!("Alternatives:");
        for route in alternatives {
            print_route(route);
        }
    }

    Ok(())
}

fn handle_waypoints(catalog: &WaypointCatalog) -> Result<()> {
    for waypoint in catalog.iter() {
        println!(
            "- {} ({:.4}, {:.4})",
            waypoint.name, waypoint.latitude, waypoint.longitude
        );
    }
    Ok(())
}

fn print_route(route: &Route) {
    for (index, leg) in route.legs().iter().enumerate() {
        println!(
            "  {}. {} -> {} by {} ({:.1} km)",
            index + 1,
            leg.start().name,
            leg.end().name,
            leg.mode(),
            leg.distance()
        );
    }
    println!(
        "  total: {:.1} km, {:.1} h, {:.1} kg CO2",
        route.total_distance(),
        route.total_time(),
        route.total_emissions() / 1000.0
    );
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
