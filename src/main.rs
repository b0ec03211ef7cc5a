use lorasmith::config::{RunConfig, RunMode};
use lorasmith::pipeline::DatasetPipeline;
use lorasmith::texts::tr;
use lorasmith::webc::WebClient;
use lorasmith::{files, Result};
use std::io::Write as _;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
	tracing_subscriber::fmt()
		.with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("lorasmith=info")))
		.with_target(false)
		.init();

	let config_path = std::env::args().nth(1).unwrap_or_else(|| "config.json".to_string());
	let mut config = RunConfig::load(Path::new(&config_path))?;

	if config.run_mode == RunMode::Detailed {
		match select_sample(&config)? {
			Some(path) => config.selected_sample = Some(path),
			None => {
				info!("{}", tr("image_not_selected"));
				return Ok(());
			}
		}
	}

	let artifacts = DatasetPipeline::new(config, WebClient::default()).run().await?;
	info!("generated {} image(s)", artifacts.len());

	Ok(())
}

/// Interactive selection for detailed mode. Returns `None` on cancel.
fn select_sample(config: &RunConfig) -> Result<Option<PathBuf>> {
	let samples = files::list_image_files(&config.sample_dataset_folder, config.limit_sample_images, config.nsfw_enabled)?;
	if samples.is_empty() {
		return Ok(None);
	}

	println!("\nAvailable images:");
	for (idx, sample) in samples.iter().enumerate() {
		let size_mb = sample.size as f64 / (1024.0 * 1024.0);
		println!("   [{}] {} ({size_mb:.2} MB)", idx + 1, sample.name);
	}
	println!("   [0] Cancel");

	let stdin = std::io::stdin();
	loop {
		print!("\nSelect an image (1-{} or 0 to cancel): ", samples.len());
		std::io::stdout().flush()?;

		let mut line = String::new();
		if stdin.read_line(&mut line)? == 0 {
			return Ok(None);
		}

		match line.trim().parse::<usize>() {
			Ok(0) => return Ok(None),
			Ok(choice) if choice <= samples.len() => {
				let sample = &samples[choice - 1];
				println!("{}: {}", tr("image_selected"), sample.name);
				return Ok(Some(sample.path.clone()));
			}
			_ => println!("Please enter a number between 0 and {}", samples.len()),
		}
	}
}
