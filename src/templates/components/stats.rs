use crate::domain::CityStats;
use crate::templates::components::thousands;
use maud::{html, Markup};

pub fn stats_panel(stats: &CityStats) -> Markup {
    html! {
        div class="stats" {
            div class="stat" {
                div class="stat-value" { "$" (thousands(stats.avg_cost)) }
                div class="stat-label" { "Average cost of living" }
            }
            div class="stat" {
                div class="stat-value" { (stats.avg_internet_speed) " Mbps" }
                div class="stat-label" { "Average internet speed" }
            }
            div class="stat" {
                div class="stat-value" { (stats.avg_temperature) "°C" }
                div class="stat-label" { "Average temperature" }
            }
        }
    }
}
