use maud::{html, Markup, DOCTYPE};

pub fn desktop_layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                meta name="description" content="Find the best cities for remote work: cost of living, internet speed, weather, air quality and safety.";
                title { (title) }
                link rel="icon" type="image/svg+xml" href="/favicon.svg";
                link rel="stylesheet" href="/main.css";
            }
            body {
                header class="site-header" {
                    a href="/" class="brand" { "Nomad Cities" }
                    nav {
                        ul {
                            li { a href="/#filters" { "Filters" } }
                            li { a href="/#cities" { "Cities" } }
                            li { a href="/api/cities" { "API" } }
                        }
                    }
                }
                (content)
                footer class="site-footer" {
                    p { "City photos from Unsplash. Figures are monthly estimates for a single remote worker." }
                }
            }
        }
    }
}
