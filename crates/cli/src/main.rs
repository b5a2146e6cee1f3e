use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand};
use colored::Colorize;
use menu_data::{Dish, Profile, load_menu, load_profile};
use preferences::{PRESET_NAMES, build_effective_profile, preset};
use scoring::DEFAULT_LIMIT;
use server::{MenuRecommender, RecommendedDish};
use std::path::PathBuf;
use std::time::Instant;

/// MenuMatch - menu dish recommendation engine
#[derive(Parser)]
#[command(name = "menu-recs")]
#[command(about = "Recommend menu dishes from a preference profile", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Get top dish recommendations for a profile
    Recommend {
        /// Path to a stored profile JSON file
        #[arg(long)]
        profile: Option<PathBuf>,

        /// Name of a built-in preset profile (see `presets`)
        #[arg(long)]
        preset: Option<String>,

        /// Path to a parsed menu JSON file
        #[arg(long)]
        menu: PathBuf,

        /// Number of recommendations to return
        #[arg(long, default_value_t = DEFAULT_LIMIT)]
        limit: usize,

        /// Show the reasoning behind each recommendation
        #[arg(long)]
        explain: bool,

        /// Address of the image lookup service; images are skipped if unset
        #[arg(long)]
        image_service: Option<String>,

        /// Print the raw JSON response instead of formatted output
        #[arg(long)]
        json: bool,
    },

    /// Score every dish on a menu, highest first
    Score {
        /// Path to a stored profile JSON file
        #[arg(long)]
        profile: Option<PathBuf>,

        /// Name of a built-in preset profile
        #[arg(long)]
        preset: Option<String>,

        /// Path to a parsed menu JSON file
        #[arg(long)]
        menu: PathBuf,
    },

    /// Show a stored or preset profile, including its effective expansion
    Profile {
        /// Path to a stored profile JSON file
        #[arg(long)]
        profile: Option<PathBuf>,

        /// Name of a built-in preset profile
        #[arg(long)]
        preset: Option<String>,
    },

    /// List the built-in preset profiles
    Presets,

    /// Run benchmark to test performance
    Benchmark {
        /// Path to a stored profile JSON file
        #[arg(long)]
        profile: Option<PathBuf>,

        /// Name of a built-in preset profile
        #[arg(long)]
        preset: Option<String>,

        /// Path to a parsed menu JSON file
        #[arg(long)]
        menu: PathBuf,

        /// Number of requests to make
        #[arg(long, default_value = "100")]
        requests: usize,

        /// Number of concurrent requests
        #[arg(long, default_value = "10")]
        concurrent: usize,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Recommend {
            profile,
            preset,
            menu,
            limit,
            explain,
            image_service,
            json,
        } => {
            let profile = resolve_profile(profile, preset)?;
            handle_recommend(profile, menu, limit, explain, image_service, json).await?
        }
        Commands::Score { profile, preset, menu } => {
            let profile = resolve_profile(profile, preset)?;
            handle_score(profile, menu).await?
        }
        Commands::Profile { profile, preset } => {
            let profile = resolve_profile(profile, preset)?;
            handle_profile(&profile)?
        }
        Commands::Presets => handle_presets(),
        Commands::Benchmark {
            profile,
            preset,
            menu,
            requests,
            concurrent,
        } => {
            let profile = resolve_profile(profile, preset)?;
            handle_benchmark(profile, menu, requests, concurrent).await?
        }
    }

    Ok(())
}

/// Resolve the profile source: a stored file, a preset, or the default
/// (empty) profile when neither is given.
fn resolve_profile(path: Option<PathBuf>, preset_name: Option<String>) -> Result<Profile> {
    match (path, preset_name) {
        (Some(_), Some(_)) => Err(anyhow!("Use either --profile or --preset, not both")),
        (Some(path), None) => load_profile(&path)
            .with_context(|| format!("Failed to load profile from {}", path.display())),
        (None, Some(name)) => preset(&name).ok_or_else(|| {
            anyhow!(
                "Unknown preset '{}'. Available: {}",
                name,
                PRESET_NAMES.join(", ")
            )
        }),
        (None, None) => Ok(Profile::default()),
    }
}

/// Handle the 'recommend' command
async fn handle_recommend(
    profile: Profile,
    menu_path: PathBuf,
    limit: usize,
    explain: bool,
    image_service: Option<String>,
    json: bool,
) -> Result<()> {
    let menu = load_menu(&menu_path)
        .with_context(|| format!("Failed to load menu from {}", menu_path.display()))?;

    let recommender = match image_service {
        Some(addr) => MenuRecommender::with_image_service(addr)
            .await
            .context("Failed to connect to image service")?,
        None => MenuRecommender::new(),
    };

    let recommendations = recommender.recommend(&profile, menu, limit).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&recommendations)?);
        return Ok(());
    }

    print_recommendations(&recommendations, explain);
    Ok(())
}

/// Handle the 'score' command: every dish, no truncation, no images.
async fn handle_score(profile: Profile, menu_path: PathBuf) -> Result<()> {
    let menu = load_menu(&menu_path)
        .with_context(|| format!("Failed to load menu from {}", menu_path.display()))?;
    let dish_count = menu.len();

    let recommendations = MenuRecommender::new()
        .recommend(&profile, menu, dish_count)
        .await?;

    println!("{}", "Scored dishes:".bold().blue());
    for rec in &recommendations {
        println!(
            "{} {} [{}] {} kcal",
            format_score(rec.score),
            rec.dish.name.bold(),
            rec.dish.category,
            rec.dish.calories
        );
        for line in &rec.reasoning {
            println!("    {}", line);
        }
    }
    Ok(())
}

/// Handle the 'profile' command
fn handle_profile(profile: &Profile) -> Result<()> {
    println!("{}", "Stored profile".bold().blue());
    print_terms("Allergies", &profile.allergies);
    print_terms("Restrictions", &profile.restrictions);
    print_terms("Hated ingredients", &profile.hated_ingredients);
    print_terms("Favorite ingredients", &profile.favorite_ingredients);
    print_terms("Goals", &profile.goals);
    print_terms("Excluded categories", &profile.excluded_categories);

    let effective = build_effective_profile(profile);
    println!();
    println!("{}", "Effective profile (after goal expansion)".bold().blue());
    print_terms("Allergies", &effective.allergies);
    print_terms("Restrictions", &effective.restrictions);
    print_terms("Hated ingredients", &effective.hated_ingredients);
    print_terms("Favorite ingredients", &effective.favorite_ingredients);
    print_terms("Excluded categories", &effective.excluded_categories);
    Ok(())
}

/// Handle the 'presets' command
fn handle_presets() {
    println!("{}", "Built-in presets:".bold().blue());
    for name in PRESET_NAMES {
        let profile = preset(name).expect("listed preset must resolve");
        println!(
            "{} {} (goals: {})",
            "•".green(),
            name.bold(),
            if profile.goals.is_empty() {
                "none".to_string()
            } else {
                profile.goals.join(", ")
            }
        );
    }
}

/// Handle the 'benchmark' command
async fn handle_benchmark(
    profile: Profile,
    menu_path: PathBuf,
    requests: usize,
    concurrent: usize,
) -> Result<()> {
    let menu = load_menu(&menu_path)
        .with_context(|| format!("Failed to load menu from {}", menu_path.display()))?;
    if menu.is_empty() {
        return Err(anyhow!("Cannot benchmark an empty menu"));
    }

    let recommender = MenuRecommender::new();
    let concurrent = concurrent.max(1);

    // Rotate the menu by a random offset per request so tie-breaking work
    // differs across requests.
    let menus: Vec<Vec<Dish>> = (0..requests)
        .map(|_| {
            let mut shuffled = menu.clone();
            let offset = rand::random::<u32>() as usize % shuffled.len();
            shuffled.rotate_left(offset);
            shuffled
        })
        .collect();

    let bench_start = Instant::now();
    let mut timings = Vec::with_capacity(requests);

    for batch in menus.chunks(concurrent) {
        let mut handles = vec![];
        for request_menu in batch {
            let recommender = recommender.clone();
            let profile = profile.clone();
            let request_menu = request_menu.clone();
            let handle = tokio::spawn(async move {
                let start = Instant::now();
                recommender.recommend(&profile, request_menu, DEFAULT_LIMIT).await?;
                Ok::<_, anyhow::Error>(start.elapsed())
            });
            handles.push(handle);
        }
        for handle in handles {
            let elapsed = handle.await??;
            timings.push(elapsed);
        }
    }

    let total_time = bench_start.elapsed();
    let avg_latency = timings.iter().sum::<std::time::Duration>() / (timings.len() as u32);
    timings.sort();
    let p50 = timings[timings.len() / 2];
    let p95 = timings[((timings.len() as f32 * 0.95) as usize).min(timings.len() - 1)];
    let p99 = timings[((timings.len() as f32 * 0.99) as usize).min(timings.len() - 1)];
    let throughput = requests as f32 / total_time.as_secs_f32();

    println!("Benchmark results:");
    println!("Total time: {:?}", total_time);
    println!("Average latency: {:?}", avg_latency);
    println!("P50 latency: {:?}", p50);
    println!("P95 latency: {:?}", p95);
    println!("P99 latency: {:?}", p99);
    println!("Throughput: {:.2} requests/second", throughput);

    Ok(())
}

/// Helper function to format and print recommendations
fn print_recommendations(recommendations: &[RecommendedDish], explain: bool) {
    if recommendations.is_empty() {
        println!("{}", "No recommendations for this menu.".yellow());
        return;
    }

    println!("{}", "Dish recommendations:".bold().blue());
    for (rank, rec) in recommendations.iter().enumerate() {
        println!(
            "{}. {} [{}] {} kcal - Score: {}",
            (rank + 1).to_string().green(),
            rec.dish.name.bold(),
            rec.dish.category,
            rec.dish.calories,
            format_score(rec.score)
        );
        if !rec.dish.description.is_empty() {
            println!("   {}", rec.dish.description);
        }
        if explain {
            for line in &rec.reasoning {
                println!("   {}", line);
            }
        }
        match (&rec.image_url, rec.image_error) {
            (Some(url), _) => println!("   Image: {}", url),
            (None, true) => println!("   {}", "Image unavailable".red()),
            (None, false) => {}
        }
    }
}

fn print_terms(label: &str, terms: &[String]) {
    if terms.is_empty() {
        println!("{}{}: -", "• ".green(), label);
    } else {
        println!("{}{}: {}", "• ".green(), label, terms.join(", "));
    }
}

fn format_score(score: i32) -> String {
    if score > 0 {
        format!("+{score}").green().to_string()
    } else if score < 0 {
        score.to_string().red().to_string()
    } else {
        score.to_string()
    }
}
