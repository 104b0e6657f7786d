use dotenvy::dotenv;
use std::env;
use tracing::{error, info, warn};

use mergington::database::seed;

fn main() {
    dotenv().ok();
    tracing_subscriber::fmt::init();

    let Some(path) = env::args()
        .nth(1)
        .or_else(|| env::var("ACTIVITIES_SEED_PATH").ok())
    else {
        error!("usage: check_seed <activities.json> (or set ACTIVITIES_SEED_PATH)");
        std::process::exit(2);
    };

    match seed::load_catalog(&path) {
        Ok(catalog) => {
            for activity in catalog.iter() {
                let enrolled = activity.participants.len();
                let capacity = activity.max_participants;
                if enrolled > capacity as usize {
                    warn!(activity = %activity.name, enrolled, capacity, "over capacity");
                } else {
                    info!(activity = %activity.name, enrolled, capacity, "roster");
                }
            }
            info!(path = %path, activities = catalog.len(), "seed ok");
        }
        Err(e) => {
            error!("seed check failed: {}", e);
            std::process::exit(1);
        }
    }
}
