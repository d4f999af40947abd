//! `businesses` and `options` subcommands.

use std::fmt::Write;

use log::info;
use wsd_api::business::Business;
use wsd_api::filters::{FilterOptions, RATING_OPTIONS};
use wsd_api::transport::Transport;
use wsd_api::ApiClient;
use wsd_core::address::{AddressResolver, Geocode};
use wsd_core::filters::{cities_for, load_options, FilterState, Filters};
use wsd_core::format::{card_category, format_rating, group_thousands};
use wsd_core::listing::{ListController, PageState};

pub async fn run_businesses<T, G>(
    client: &ApiClient<T>,
    resolver: &AddressResolver<G>,
    filters: &Filters,
    page: u32,
) -> anyhow::Result<()>
where
    T: Transport,
    G: Geocode,
{
    print!("{}", businesses_report(client, resolver, filters, page).await);
    Ok(())
}

/// One list page as text: a status line, then one block per card.
pub async fn businesses_report<T, G>(
    client: &ApiClient<T>,
    resolver: &AddressResolver<G>,
    filters: &Filters,
    page: u32,
) -> String
where
    T: Transport,
    G: Geocode,
{
    let mut list = ListController::new();
    let state = list.query(client, filters, page).await.clone();
    let pager = list.pager(page);
    info!("Fetched list page {} of {}", pager.page(), pager.last_page());

    let mut out = String::new();
    match state {
        PageState::Populated(businesses) => {
            let _ = writeln!(
                out,
                "{} results found (page {} of {})",
                group_thousands(list.total()),
                pager.page(),
                pager.last_page()
            );
            for business in &businesses {
                let address = resolver.resolve(business).await;
                out.push_str(&business_block(business, &address));
            }
        }
        _ => out.push_str("No results found\n"),
    }
    out
}

fn business_block(business: &Business, address: &str) -> String {
    format!(
        "\n{}  [{}]\n  {} ({} reviews)  {}\n  {}\n",
        business.name(),
        business.business_id,
        format_rating(business.avg_rating),
        group_thousands(business.num_of_reviews),
        card_category(business.category()),
        address
    )
}

pub async fn run_options<T: Transport>(
    client: &ApiClient<T>,
    county: Option<&str>,
) -> anyhow::Result<()> {
    print!("{}", options_report(client, county).await);
    Ok(())
}

/// Filter options, or the cities of `county` when one is given.
pub async fn options_report<T: Transport>(client: &ApiClient<T>, county: Option<&str>) -> String {
    match county {
        Some(county) => {
            let mut state = FilterState::new();
            let scope = state.select_county(county);
            let cities = cities_for(client, &scope).await;
            format!("Cities in {}:\n{}", county, bullet_list(&cities))
        }
        None => render_options(&load_options(client).await),
    }
}

fn render_options(options: &FilterOptions) -> String {
    let ratings: Vec<String> = RATING_OPTIONS.iter().map(u8::to_string).collect();
    format!(
        "Fields:\n{}Counties:\n{}Cities:\n{}Ratings: {}\n",
        bullet_list(&options.fields),
        bullet_list(&options.counties),
        bullet_list(&options.cities),
        ratings.join(", ")
    )
}

fn bullet_list(items: &[String]) -> String {
    if items.is_empty() {
        return "  (none)\n".to_string();
    }
    items.iter().map(|item| format!("  - {}\n", item)).collect()
}
