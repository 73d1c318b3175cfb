use std::{net::SocketAddr, path::PathBuf, str::FromStr};
use axum::{
	extract::State,
	http::header,
	response::IntoResponse,
	routing::get,
	Router
};
use shared_data::SiteConfig;
use tower_http::{
	services::{ServeDir, ServeFile},
	trace::TraceLayer
};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod robots;

/// Both files only depend on the config, so they're rendered once before we start listening
#[derive(Clone)]
struct Rendered {
	robots: String,
	sitemap: String
}

fn parse_or<T: FromStr>(key: &str, value: Option<String>, default: T) -> T {
	match value.map(|v| v.parse::<T>()) {
		Some(Ok(v)) => v,
		Some(Err(_)) => {
			warn!("{key} couldn't be parsed, using the default");
			default
		},
		None => default
	}
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
	tracing_subscriber::fmt()
		.with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
		.init();

	macro_rules! dotenv_or{
		($key:expr, $default:expr, $type:ty) => {
			parse_or::<$type>($key, dotenv::var($key).ok(), $default)
		}
	}

	let backend_port = dotenv_or!("BACKEND_PORT", 8080, u16);
	let dist_dir = dotenv_or!("DIST_DIR", PathBuf::from("./dist"), PathBuf);
	let config_path = dotenv_or!("SITE_CONFIG", PathBuf::from("./site.json"), PathBuf);
	let site_url = dotenv::var("SITE_URL").unwrap_or_else(|_| "https://varahaswamy.site".into());

	info!(?dist_dir, ?config_path, %site_url, "Read .env...");

	// Same validation the frontend does, except here a broken config means we don't start at all
	let json = std::fs::read_to_string(&config_path)?;
	let config = SiteConfig::from_json(&json)?;

	let rendered = Rendered {
		robots: robots::robots_txt(&site_url),
		sitemap: robots::sitemap_xml(&site_url, &config)?
	};

	info!(routes = config.routes().len(), bytes = rendered.sitemap.len(), "Rendered sitemap.xml");

	// Every path the frontend routes itself (policies, unknown paths) gets index.html and the
	// router takes it from there
	let spa = ServeDir::new(&dist_dir)
		.fallback(ServeFile::new(dist_dir.join("index.html")));

	let app = Router::new()
		.route("/robots.txt", get(get_robots))
		.route("/sitemap.xml", get(get_sitemap))
		.fallback_service(spa)
		.layer(TraceLayer::new_for_http())
		.with_state(rendered);

	let addr = SocketAddr::from(([127, 0, 0, 1], backend_port));
	let listener = tokio::net::TcpListener::bind(addr).await?;

	info!(%addr, "Serving axum...");

	axum::serve(listener, app)
		.with_graceful_shutdown(shutdown_signal())
		.await?;

	Ok(())
}

async fn shutdown_signal() {
	if let Err(e) = tokio::signal::ctrl_c().await {
		// Without a signal to wait on, just run until killed
		warn!("Couldn't listen for ctrl-c: {e}");
		std::future::pending::<()>().await;
	}
	info!("Shutting down");
}

async fn get_robots(State(rendered): State<Rendered>) -> impl IntoResponse {
	([(header::CONTENT_TYPE, "text/plain; charset=utf-8")], rendered.robots)
}

async fn get_sitemap(State(rendered): State<Rendered>) -> impl IntoResponse {
	([(header::CONTENT_TYPE, "application/xml")], rendered.sitemap)
}
