mod config;

use actix_cors::Cors;
use actix_web::{get, web, App, HttpResponse, HttpServer, Responder};
use anyhow::Context;
use clap::Parser;
use log::info;
use serde::Deserialize;

use config::Config;
use diachron_core::{Sampler, TransitionTable};

/// Upper bound on the words sampled by a single request
const MAX_COUNT: usize = 100;

/// Struct representing query parameters for the `/v1/transform` endpoint
#[derive(Deserialize)]
struct TransformParams {
	root: Option<String>,
	count: Option<usize>,
}

#[derive(Deserialize)]
struct DistributionQuery {
	component: Option<String>,
}

/// HTTP GET endpoint `/v1/transform`
///
/// Samples `count` (default 1) transformations of `root`.
/// Returns the words separated by newlines.
#[get("/v1/transform")]
async fn get_transformed(table: web::Data<TransitionTable>, query: web::Query<TransformParams>) -> impl Responder {
	let root = match &query.root {
		Some(s) if !s.trim().is_empty() => s.trim(),
		_ => return HttpResponse::BadRequest().body("Missing or empty root"),
	};

	let count = query.count.unwrap_or(1);
	if !(1..=MAX_COUNT).contains(&count) {
		return HttpResponse::BadRequest().body(format!("Count must be between 1 and {}", MAX_COUNT));
	}

	let words = Sampler::new(table.get_ref()).transform_many(root, count, &mut rand::rng());
	HttpResponse::Ok().body(words.join("\n"))
}

/// HTTP GET endpoint `/v1/components`
///
/// Lists the learned source components, sorted, one per line.
#[get("/v1/components")]
async fn get_components(table: web::Data<TransitionTable>) -> impl Responder {
	HttpResponse::Ok().body(table.components().collect::<Vec<_>>().join("\n"))
}

/// HTTP GET endpoint `/v1/distribution`
///
/// Returns the distribution of one source component as a JSON object.
#[get("/v1/distribution")]
async fn get_distribution(table: web::Data<TransitionTable>, query: web::Query<DistributionQuery>) -> impl Responder {
	let component = match &query.component {
		Some(s) if !s.is_empty() => s.as_str(),
		_ => return HttpResponse::BadRequest().body("Missing or empty component"),
	};

	match table.get(component) {
		Some(distribution) => HttpResponse::Ok().json(distribution),
		None => HttpResponse::NotFound().body(format!("Unknown component: {}", component)),
	}
}

/// Main entry point for the server.
///
/// Builds the transition table once, then shares it read-only between
/// the Actix-web workers. A corpus that cannot be read stops the server
/// before it binds.
#[actix_web::main]
async fn main() -> anyhow::Result<()> {
	let config = Config::parse();

	env_logger::Builder::from_default_env()
		.filter_level(config.log_level.parse().unwrap_or(log::LevelFilter::Info))
		.init();

	let (table, _) = TransitionTable::from_path(&config.corpus, config.alignment())
		.with_context(|| format!("Failed to load corpus {}", config.corpus.display()))?;
	let shared_table = web::Data::new(table);

	info!("Listening on {}:{}", config.host, config.port);
	HttpServer::new(move || {
		App::new()
			.wrap(Cors::permissive())
			.app_data(shared_table.clone())
			.service(get_transformed)
			.service(get_components)
			.service(get_distribution)
	})
		.bind((config.host.as_str(), config.port))?
		.run()
		.await?;

	Ok(())
}
