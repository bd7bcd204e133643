// templates/components/city_card.rs

use crate::domain::{City, Safety};
use crate::templates::components::thousands;
use maud::{html, Markup};

/// Full, half and empty star counts for a score out of five.
pub fn star_row(score: f64) -> (usize, bool, usize) {
    let score = score.clamp(0.0, 5.0);
    let full = score.floor() as usize;
    let half = score.fract() >= 0.5;
    let empty = 5 - full - usize::from(half);
    (full, half, empty)
}

fn safety_badge(safety: Safety) -> (&'static str, &'static str) {
    match safety {
        Safety::High => ("badge safety-high", "Safe"),
        Safety::Medium => ("badge safety-medium", "Moderate"),
        Safety::Low => ("badge safety-low", "Caution"),
    }
}

pub fn air_quality_class(aqi: f64) -> &'static str {
    if aqi <= 50.0 {
        "aqi-good"
    } else if aqi <= 100.0 {
        "aqi-moderate"
    } else {
        "aqi-poor"
    }
}

pub fn temperature_class(temp: f64) -> &'static str {
    if temp <= 10.0 {
        "temp-cold"
    } else if temp <= 25.0 {
        "temp-mild"
    } else if temp <= 30.0 {
        "temp-warm"
    } else {
        "temp-hot"
    }
}

pub fn city_card(city: &City) -> Markup {
    let (full, half, empty) = star_row(city.nomad_score);
    let (badge_class, badge_label) = safety_badge(city.safety);

    html! {
        article class="city-card" id=(city.id) {
            div class="city-card-image" {
                img src=(city.image_src()) alt=(format!("{}, {}", city.name, city.country)) loading="lazy";
                span class=(badge_class) { (badge_label) }
            }
            div class="city-card-body" {
                h3 { (city.name) }
                p class="country" { (city.country) }

                div class="nomad-score" {
                    span class="stars" aria-hidden="true" {
                        @for _ in 0..full { span class="star full" { "★" } }
                        @if half { span class="star half" { "★" } }
                        @for _ in 0..empty { span class="star empty" { "☆" } }
                    }
                    span class="score" { (format!("{:.1}", city.nomad_score)) }
                }

                dl class="metrics" {
                    dt { "Monthly cost" }
                    dd { "$" (thousands(city.cost.round() as i64)) }

                    dt { "Temperature" }
                    dd class=(temperature_class(city.temperature)) {
                        (city.temperature) "°C"
                        @if let Some(feels) = city.feels_like {
                            small { " (feels like " (feels) "°C)" }
                        }
                    }

                    dt { "Internet" }
                    dd { (city.internet_speed) " Mbps" }

                    dt { "Air quality" }
                    dd class=(air_quality_class(city.air_quality)) { "AQI " (city.air_quality) }
                }

                span class="badge continent" { (city.continent) }
            }
        }
    }
}
