// templates/components/filters.rs

use crate::catalog::ContinentCounts;
use crate::domain::{ContinentFilter, FilterCategory, FilterState};
use maud::{html, Markup};

fn href(state: &FilterState) -> String {
    let query = state.to_query();
    if query.is_empty() {
        "/#filters".to_string()
    } else {
        format!("/?{query}#filters")
    }
}

fn chip_class(active: bool) -> &'static str {
    if active {
        "chip active"
    } else {
        "chip"
    }
}

fn continent_emoji(filter: ContinentFilter) -> &'static str {
    use crate::domain::Continent::*;
    match filter {
        ContinentFilter::All => "🌍",
        ContinentFilter::Only(Asia) => "🏯",
        ContinentFilter::Only(Europe) => "🏰",
        ContinentFilter::Only(NorthAmerica) => "🗽",
        ContinentFilter::Only(SouthAmerica) => "🏔️",
        ContinentFilter::Only(Africa) => "🦁",
        ContinentFilter::Only(Oceania) => "🏄",
        ContinentFilter::Only(MiddleEast) => "🕌",
    }
}

/// Chip bar for the six attribute filters. Each chip links to the state
/// with that category toggled.
pub fn category_filters(state: &FilterState) -> Markup {
    html! {
        section id="filters" class="category-filters" {
            h2 { "Find cities that fit you" }
            p { "Combine conditions to narrow down the list." }

            div class="chip-grid" {
                @for category in FilterCategory::ALL {
                    a class=(chip_class(state.is_active(category)))
                        href=(href(&state.toggled(category)))
                        data-filter=(category.as_str())
                    {
                        span class="chip-label" { (category.label()) }
                        span class="chip-description" { (category.description()) }
                    }
                }
            }

            @if !state.active().is_empty() {
                div class="active-summary" {
                    span { "Active filters: " strong { (state.active().len()) } }
                    a class="clear" href=(href(&state.cleared())) { "Clear all" }
                }
            }
        }
    }
}

pub fn continent_filters(state: &FilterState, counts: &ContinentCounts) -> Markup {
    html! {
        section class="continent-filters" {
            h2 { "Browse by continent" }
            div class="chip-row" {
                @for option in ContinentFilter::options() {
                    a class=(chip_class(state.continent() == option))
                        href=(href(&state.with_continent(option)))
                    {
                        span class="emoji" { (continent_emoji(option)) }
                        span class="chip-label" { (option) }
                        span class="chip-count" { (counts.get(option)) " cities" }
                    }
                }
            }
        }
    }
}
