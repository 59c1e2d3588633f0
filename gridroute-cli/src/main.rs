//! gridroute — command-line wrapper around the route-optimization core.
//!
//! Reads a JSON `RouteRequest` from the file given as the first argument
//! (or from stdin when no argument is given) and writes the JSON
//! `RouteResponse` to stdout. Malformed input and out-of-range coordinates
//! exit nonzero with a message on stderr.

use std::fs;
use std::io::Read;

use gridroute_paths::wire::{RouteRequest, optimize_route};
use log::info;

const USAGE: &str = "usage: gridroute [request.json]

Reads a route request from the given file, or from stdin when no file is
given, and prints the route response as JSON:

  request:  { \"grid\": [[0,0,1],...], \"start\": [row,col], \"end\": [row,col] }
  response: { \"path\": [[row,col],...], \"nodes_explored\": n }";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().collect();
    let input = match args.get(1).map(String::as_str) {
        Some("-h" | "--help") => {
            println!("{USAGE}");
            return Ok(());
        }
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let request: RouteRequest = serde_json::from_str(&input)?;
    info!(
        "optimizing route on {}x{} grid: {:?} -> {:?}",
        request.grid.len(),
        request.grid.first().map_or(0, Vec::len),
        request.start,
        request.end
    );

    let response = optimize_route(&request)?;
    if response.path.is_empty() {
        info!("no route ({} nodes explored)", response.nodes_explored);
    } else {
        info!(
            "route of {} cells ({} nodes explored)",
            response.path.len(),
            response.nodes_explored
        );
    }

    println!("{}", serde_json::to_string(&response)?);
    Ok(())
}
