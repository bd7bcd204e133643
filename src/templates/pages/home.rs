// templates/pages/home.rs

use crate::catalog::ContinentCounts;
use crate::domain::{City, CityStats, ContinentFilter, FilterState};
use crate::templates::{
    components::{category_filters, city_card, continent_filters, stats_panel},
    desktop_layout,
};
use maud::{html, Markup};

pub struct HomeVm<'a> {
    pub state: &'a FilterState,
    pub cities: &'a [City],
    pub counts: &'a ContinentCounts,
    pub stats: Option<CityStats>,
}

fn hero(total: usize) -> Markup {
    html! {
        section class="hero" {
            img class="hero-image" src="/hero-1.jpg" alt="Laptop on a cafe table with a city view";
            div class="hero-text" {
                h1 { "Work from anywhere" }
                p {
                    "Compare " (total) " cities by cost of living, internet speed, "
                    "weather, air quality and safety."
                }
                a class="cta" href="#filters" { "Start exploring" }
            }
        }
    }
}

fn subtitle(state: &FilterState) -> String {
    let mut parts = Vec::new();
    if let ContinentFilter::Only(continent) = state.continent() {
        parts.push(format!("in {continent}"));
    }
    match state.active().len() {
        0 => {}
        1 => parts.push("matching 1 condition".to_string()),
        n => parts.push(format!("matching {n} conditions")),
    }

    if parts.is_empty() {
        "Take a look at every city in the directory".to_string()
    } else {
        format!("Cities {}", parts.join(", "))
    }
}

pub fn home_page(vm: &HomeVm<'_>) -> Markup {
    desktop_layout(
        "Nomad Cities - find your next base",
        html! {
            (hero(vm.counts.get(ContinentFilter::All)))
            (category_filters(vm.state))
            (continent_filters(vm.state, vm.counts))

            section id="cities" class="cities" {
                div class="cities-heading" {
                    h2 { (vm.cities.len()) " cities found" }
                    p { (subtitle(vm.state)) }
                }

                @if vm.cities.is_empty() {
                    div class="empty-state" {
                        span class="emoji" { "🏙️" }
                        h3 { "No cities match these conditions" }
                        p { "Try a different combination of filters." }
                    }
                } @else {
                    div class="city-grid" {
                        @for city in vm.cities {
                            (city_card(city))
                        }
                    }
                }

                @if let Some(stats) = &vm.stats {
                    (stats_panel(stats))
                }
            }
        },
    )
}
