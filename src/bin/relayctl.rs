use clap::{Parser, Subcommand};
use piclumen_relay::{Config, GenerationRequest, StatusResult, UpstreamClient};
use serde_json::json;

#[derive(Parser, Debug)]
#[command(name = "relayctl", about = "CLI for the PicLumen relay", version)]
struct Cli {
    /// Override UPSTREAM_URL
    #[arg(global = true, long)]
    upstream_url: Option<String>,

    /// Upstream authorization token (falls back to AUTHORIZATION_TOKEN)
    #[arg(global = true, long)]
    token: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Submit a generation job and print its mark id
    Generate {
        /// Prompt text
        prompt: String,
        /// Negative prompt text
        #[arg(long, value_name = "TEXT")]
        negative_prompt: Option<String>,
        /// Model id
        #[arg(long)]
        model_id: Option<String>,
        /// Seed
        #[arg(long)]
        seed: Option<i64>,
        /// Steps
        #[arg(long)]
        steps: Option<i64>,
        /// CFG scale
        #[arg(long)]
        cfg: Option<i64>,
        /// Sampler name
        #[arg(long)]
        sampler_name: Option<String>,
        /// Scheduler
        #[arg(long)]
        scheduler: Option<String>,
        /// Denoise strength
        #[arg(long)]
        denoise: Option<f64>,
        /// Width
        #[arg(long)]
        width: Option<i64>,
        /// Height
        #[arg(long)]
        height: Option<i64>,
        /// Batch size
        #[arg(long, alias = "batchsize")]
        batch_size: Option<i64>,
        /// Request the high pixel variant
        #[arg(long)]
        high_pixels: bool,
        /// Verbose: print the request body before sending
        #[arg(short, long)]
        verbose: bool,
    },
    /// Check a submitted job once
    Check {
        /// Mark id returned by `generate`
        mark_id: String,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load env and parse CLI
    Config::dotenv_load();
    let cli = Cli::parse();

    let mut conf = Config::new()?;
    if let Some(url) = cli.upstream_url {
        conf.upstream_url = url;
    }
    let token = match cli.token.or(conf.authorization_token.clone()) {
        Some(t) => t,
        None => {
            eprintln!("Must provide --token <TOKEN> or set AUTHORIZATION_TOKEN");
            std::process::exit(2);
        }
    };
    let client = UpstreamClient::with_timeout(conf.upstream_url.clone(), conf.upstream_timeout);

    match cli.command {
        Commands::Generate {
            prompt,
            negative_prompt,
            model_id,
            seed,
            steps,
            cfg,
            sampler_name,
            scheduler,
            denoise,
            width,
            height,
            batch_size,
            high_pixels,
            verbose,
        } => {
            let mut request = GenerationRequest::new(prompt);
            request.negative_prompt = negative_prompt.unwrap_or(request.negative_prompt);
            request.model_id = model_id.unwrap_or(request.model_id);
            request.seed = seed.unwrap_or(request.seed);
            request.steps = steps.unwrap_or(request.steps);
            request.cfg = cfg.unwrap_or(request.cfg);
            request.sampler_name = sampler_name.unwrap_or(request.sampler_name);
            request.scheduler = scheduler.unwrap_or(request.scheduler);
            request.denoise = denoise.unwrap_or(request.denoise);
            request.resolution.width = width.unwrap_or(request.resolution.width);
            request.resolution.height = height.unwrap_or(request.resolution.height);
            request.resolution.batch_size = batch_size.unwrap_or(request.resolution.batch_size);
            request.high_pixels = high_pixels;

            if verbose {
                eprintln!("[verbose] Request body to upstream:\n{}", serde_json::to_string_pretty(&request)?);
            }

            match client.create(&token, &request).await {
                Ok(mark_id) => {
                    println!("{}", serde_json::to_string_pretty(&json!({"mark_id": mark_id}))?);
                    Ok(())
                }
                Err(e) => {
                    eprintln!("Error: {}", e);
                    std::process::exit(1);
                }
            }
        }
        Commands::Check { mark_id } => {
            let result = client.check(&token, &mark_id).await.map_err(|e| {
                eprintln!("Error: {}", e);
                e
            })?;
            match result {
                StatusResult::Pending { status } => println!("pending: {}", status),
                StatusResult::Complete { image_url } => println!("{}", image_url),
            }
            Ok(())
        }
    }
}
