//! Command implementations for the WSD CLI.
//!
//! Each subcommand mirrors one explorer view and drives the same
//! `wsd_core` controllers the web app uses, printing plain text.

use clap::Subcommand;
use wsd_api::geocode::ReverseGeocoder;
use wsd_api::{ApiClient, ApiConfig};
use wsd_core::address::AddressResolver;
use wsd_core::reviews::RatingFilter;
use wsd_core::series::Period;

pub mod detail;
pub mod list;
pub mod reviews;

#[derive(Subcommand)]
pub enum Command {
    /// List businesses matching the given filters
    Businesses {
        /// Category group, e.g. food_dining
        #[arg(long)]
        field: Option<String>,

        #[arg(long)]
        county: Option<String>,

        #[arg(long)]
        city: Option<String>,

        /// Minimum average rating (1-5)
        #[arg(long, value_parser = clap::value_parser!(u8).range(1..=5))]
        min_rating: Option<u8>,

        /// Maximum average rating (1-5)
        #[arg(long, value_parser = clap::value_parser!(u8).range(1..=5))]
        max_rating: Option<u8>,

        /// Name search
        #[arg(short, long)]
        search: Option<String>,

        #[arg(short, long, default_value_t = 1)]
        page: u32,
    },

    /// Show the detail view of one business
    Detail {
        business_id: String,

        /// "all" for yearly sentiment, or a year for its months
        #[arg(long, default_value = "all")]
        period: Period,
    },

    /// List reviews of one business
    Reviews {
        business_id: String,

        #[arg(short, long, default_value_t = 1)]
        page: u32,

        /// "all" or a star rating (1-5)
        #[arg(short, long, default_value = "all")]
        rating: RatingFilter,
    },

    /// Show filter options, optionally the cities of one county
    Options {
        #[arg(long)]
        county: Option<String>,
    },
}

pub async fn run(command: Command, config: &ApiConfig) -> anyhow::Result<()> {
    let client = ApiClient::new(config)?;
    match command {
        Command::Businesses {
            field,
            county,
            city,
            min_rating,
            max_rating,
            search,
            page,
        } => {
            let filters = wsd_core::filters::Filters {
                field,
                county,
                city,
                min_rating,
                max_rating,
                search,
            };
            let resolver = AddressResolver::new(ReverseGeocoder::new(config)?);
            list::run_businesses(&client, &resolver, &filters, page).await
        }
        Command::Detail {
            business_id,
            period,
        } => {
            let resolver = AddressResolver::new(ReverseGeocoder::new(config)?);
            detail::run_detail(&client, &resolver, &business_id, period).await
        }
        Command::Reviews {
            business_id,
            page,
            rating,
        } => reviews::run_reviews(&client, &business_id, page, rating).await,
        Command::Options { county } => list::run_options(&client, county.as_deref()).await,
    }
}
