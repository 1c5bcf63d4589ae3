// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Reset the configured database and fill it with sample camp data.
//!
//! Activities have no create endpoint, so this is the way to get some.

use camp_api::config::Config;
use camp_api::db::CampDb;
use camp_api::models::{NewCamper, NewSignup};
use validator::Validate;

const ACTIVITIES: &[(&str, i64)] = &[
    ("Archery", 2),
    ("Canoeing", 3),
    ("Rock Climbing", 5),
    ("Arts and Crafts", 1),
    ("Orienteering", 4),
];

const CAMPERS: &[(&str, i64)] = &[
    ("Caitlin", 8),
    ("Nicholas", 11),
    ("Priya", 13),
    ("Mateo", 15),
    ("Jun", 18),
];

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let config = Config::from_env()?;
    let db = CampDb::connect(&config.database_url).await?;
    db.ensure_schema().await?;
    db.clear_all().await?;

    let mut activity_ids = Vec::with_capacity(ACTIVITIES.len());
    for (name, difficulty) in ACTIVITIES {
        activity_ids.push(db.create_activity(name, *difficulty).await?.id);
    }

    let mut camper_ids = Vec::with_capacity(CAMPERS.len());
    for (name, age) in CAMPERS {
        let camper = NewCamper {
            name: name.to_string(),
            age: *age,
        };
        camper.validate()?;
        camper_ids.push(db.create_camper(&camper).await?.id);
    }

    // Every camper gets two activities, spread over the morning.
    let mut signups = 0;
    for (i, camper_id) in camper_ids.iter().enumerate() {
        for offset in 0..2 {
            let signup = NewSignup {
                time: 9 + (i + offset) as i64,
                camper_id: *camper_id,
                activity_id: activity_ids[(i + offset) % activity_ids.len()],
            };
            signup.validate()?;
            db.create_signup(&signup).await?;
            signups += 1;
        }
    }

    println!(
        "seeded {}: activities={}, campers={}, signups={}",
        config.database_url,
        activity_ids.len(),
        camper_ids.len(),
        signups
    );
    Ok(())
}
