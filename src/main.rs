use anyhow::Context;
use clap::Parser;
use dotenv::dotenv;
use places_scout::{
    calculate_walking_time_minutes, Config, GooglePlacesClient, PlaceSearch, SearchParams,
    DEFAULT_PHOTO_MAX_WIDTH,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[clap(name = "places-scout", about = "Search Google Places near a location")]
struct Cli {
    #[clap(env = "GOOGLE_PLACES_API_KEY", long, hide_env_values = true)]
    api_key: Option<String>,

    #[clap(long, allow_hyphen_values = true)]
    latitude: f64,

    #[clap(long, allow_hyphen_values = true)]
    longitude: f64,

    /// Search radius in meters
    #[clap(long, default_value_t = 5000)]
    radius: u32,

    #[clap(long = "type", default_value = "restaurant")]
    place_type: String,

    #[clap(long)]
    min_price: Option<u8>,

    #[clap(long)]
    max_price: Option<u8>,

    #[clap(long)]
    min_rating: Option<f64>,

    /// Continuation token from a previous search
    #[clap(long)]
    page_token: Option<String>,

    /// Print a walking-time estimate for this distance
    #[clap(long)]
    walk_meters: Option<f64>,

    /// Print the result page as JSON
    #[clap(long)]
    json: bool,
}

impl Cli {
    fn search_params(&self) -> SearchParams {
        let mut params = SearchParams::new(self.latitude, self.longitude)
            .with_radius(self.radius)
            .with_type(self.place_type.clone())
            .with_price_range(self.min_price, self.max_price);
        if let Some(min_rating) = self.min_rating {
            params = params.with_min_rating(min_rating);
        }
        if let Some(token) = &self.page_token {
            params = params.with_page_token(token.clone());
        }
        params
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let config = Config {
        api_key: cli.api_key.clone(),
        ..Config::default()
    };
    let client = GooglePlacesClient::new(config).context("Failed to create HTTP client")?;

    let params = cli.search_params();
    let result = client
        .search(&params)
        .await
        .with_context(|| format!("{} search failed", client.provider_name()))?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    info!("Found {} places (status {})", result.results.len(), result.status);

    for (i, place) in result.results.iter().enumerate() {
        println!("{}. {}", i + 1, place.name);
        println!("   {}", place.formatted_address);
        if let Some(rating) = place.rating {
            println!(
                "   Rating: {} ({} reviews)",
                rating,
                place.user_ratings_total.unwrap_or(0)
            );
        }
        if let Some(level) = place.price_level {
            let price = match level {
                0 => "free".to_string(),
                n => "$".repeat(n as usize),
            };
            println!("   Price: {}", price);
        }
        if let Some(photo) = place.photos.as_ref().and_then(|photos| photos.first()) {
            let url = client.photo_url(&photo.photo_reference, DEFAULT_PHOTO_MAX_WIDTH)?;
            println!("   Photo: {}", url);
        }
        if let Some(url) = &place.url {
            println!("   Map: {}", url);
        }
        println!("   Types: {}", place.types.join(", "));
        println!();
    }

    if let Some(distance) = cli.walk_meters {
        println!(
            "Walking {}m takes about {} min",
            distance,
            calculate_walking_time_minutes(distance)
        );
    }

    if let Some(token) = &result.next_page_token {
        info!("More results available with --page-token {}", token);
    }

    Ok(())
}
