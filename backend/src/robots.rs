use shared_data::SiteConfig;
use sitewriter::{ChangeFreq, UrlEntry};

pub fn robots_txt(site_url: &str) -> String {
	format!(
		"User-agent: *\nAllow: /\n\nSitemap: {}/sitemap.xml\n",
		site_url.trim_end_matches('/')
	)
}

/// One entry per route the frontend will actually render something for. The landing page changes
/// whenever rooms or prices do, the policies basically never.
pub fn sitemap_xml(site_url: &str, config: &SiteConfig) -> Result<String, Box<dyn std::error::Error>> {
	let base = site_url.trim_end_matches('/');

	let urls = config.routes()
		.into_iter()
		.map(|path| -> Result<UrlEntry, Box<dyn std::error::Error>> {
			let landing = path == "/";
			Ok(UrlEntry {
				loc: format!("{base}{path}").parse()?,
				lastmod: None,
				changefreq: Some(if landing { ChangeFreq::Weekly } else { ChangeFreq::Yearly }),
				priority: Some(if landing { 1.0 } else { 0.3 })
			})
		})
		.collect::<Result<Vec<_>, _>>()?;

	Ok(sitewriter::generate_str(&urls))
}
