use std::collections::HashMap;

use axum::{extract::Query, routing::get, Json, Router};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;

pub const NO_MATCH: &str = "No activity found with the specified parameters";

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Activity {
    pub activity: String,
    pub accessibility: f64,
    #[serde(rename = "type")]
    pub kind: String,
    pub participants: u32,
    pub price: f64,
    pub link: String,
    pub key: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorBody {
    pub error: String,
}

fn activity(
    activity: &str,
    accessibility: f64,
    kind: &str,
    participants: u32,
    price: f64,
    link: &str,
    key: &str,
) -> Activity {
    Activity {
        activity: activity.to_string(),
        accessibility,
        kind: kind.to_string(),
        participants,
        price,
        link: link.to_string(),
        key: key.to_string(),
    }
}

/// Fixed catalogue served by the mock. Order matters: the first match wins.
pub fn catalogue() -> Vec<Activity> {
    vec![
        activity("Play chess", 0.5, "recreational", 2, 0.1, "", "abc"),
        activity(
            "Learn Morse code",
            0.9,
            "education",
            1,
            0.0,
            "https://en.wikipedia.org/wiki/Morse_code",
            "3646173",
        ),
        activity("Have a bonfire with your close friends", 0.1, "social", 4, 0.1, "", "8442249"),
        activity("Build a birdhouse", 0.3, "diy", 1, 0.25, "", "6852505"),
        activity("Volunteer at a local food pantry", 0.2, "charity", 1, 0.0, "", "1878070"),
        activity("Bake pasta from scratch", 0.4, "cooking", 3, 0.3, "", "1029798"),
        activity("Take a bubble bath", 0.1, "relaxation", 1, 0.15, "", "1000000"),
        activity("Start a band", 0.8, "music", 4, 0.6, "", "5262759"),
        activity("Clean out your garage", 0.15, "busywork", 1, 0.0, "", "7023703"),
    ]
}

/// Filters parsed from the query string. `None` means "not constrained".
#[derive(Debug, Default, PartialEq)]
pub struct Filters {
    pub accessibility: Option<f64>,
    pub access_min: Option<f64>,
    pub access_max: Option<f64>,
    pub kind: Option<String>,
    pub participants: Option<u32>,
    pub price: Option<f64>,
    pub price_min: Option<f64>,
    pub price_max: Option<f64>,
}

impl Filters {
    pub fn from_query(query: &HashMap<String, String>) -> Result<Self, String> {
        fn number<T: std::str::FromStr>(
            query: &HashMap<String, String>,
            key: &str,
        ) -> Result<Option<T>, String> {
            query
                .get(key)
                .map(|raw| raw.parse().map_err(|_| format!("invalid {key}: {raw}")))
                .transpose()
        }

        Ok(Self {
            accessibility: number(query, "accessibility")?,
            access_min: number(query, "access-min")?,
            access_max: number(query, "access-max")?,
            kind: query.get("type").cloned(),
            participants: number(query, "participants")?,
            price: number(query, "price")?,
            price_min: number(query, "minprice")?,
            price_max: number(query, "maxprice")?,
        })
    }

    pub fn matches(&self, candidate: &Activity) -> bool {
        let exact = |want: Option<f64>, got: f64| want.map_or(true, |w| (w - got).abs() < 1e-9);
        let at_least = |bound: Option<f64>, got: f64| bound.map_or(true, |b| got >= b);
        let at_most = |bound: Option<f64>, got: f64| bound.map_or(true, |b| got <= b);

        exact(self.accessibility, candidate.accessibility)
            && at_least(self.access_min, candidate.accessibility)
            && at_most(self.access_max, candidate.accessibility)
            && self.kind.as_ref().map_or(true, |k| *k == candidate.kind)
            && self.participants.map_or(true, |p| p == candidate.participants)
            && exact(self.price, candidate.price)
            && at_least(self.price_min, candidate.price)
            && at_most(self.price_max, candidate.price)
    }
}

pub fn app() -> Router {
    Router::new()
        .route("/api/activity", get(get_activity))
        .route("/api/activity/", get(get_activity))
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

/// Like the real service, failures come back as 200 with an error body.
async fn get_activity(Query(query): Query<HashMap<String, String>>) -> Json<serde_json::Value> {
    let found = Filters::from_query(&query).and_then(|filters| {
        catalogue()
            .into_iter()
            .find(|candidate| filters.matches(candidate))
            .ok_or_else(|| NO_MATCH.to_string())
    });
    let body = match found {
        Ok(activity) => serde_json::to_value(activity),
        Err(error) => serde_json::to_value(ErrorBody { error }),
    };
    Json(body.unwrap_or_default())
}
