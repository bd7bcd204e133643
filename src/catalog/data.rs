// src/catalog/data.rs

use crate::domain::{City, Continent::*, Safety, Weather};

macro_rules! city {
    (
        @image $image:expr, $id:literal, $name:literal, $country:literal, $continent:ident,
        $cost:expr, $temp:expr, $feels:expr, $net:expr, $aqi:expr, $score:expr,
        $safety:ident, $weather:ident
    ) => {
        City {
            id: $id,
            name: $name,
            country: $country,
            continent: $continent,
            cost: $cost,
            temperature: $temp,
            feels_like: $feels,
            internet_speed: $net,
            air_quality: $aqi,
            nomad_score: $score,
            image: $image,
            safety: Safety::$safety,
            weather: Weather::$weather,
        }
    };
    (
        no_image $id:literal, $name:literal, $country:literal, $continent:ident,
        cost: $cost:expr, temp: $temp:expr, feels: $feels:expr, internet: $net:expr,
        aqi: $aqi:expr, score: $score:expr, $safety:ident, $weather:ident
    ) => {
        city!(@image "",
            $id, $name, $country, $continent, $cost, $temp, $feels, $net, $aqi, $score,
            $safety, $weather)
    };
    (
        $id:literal, $name:literal, $country:literal, $continent:ident,
        cost: $cost:expr, temp: $temp:expr, feels: $feels:expr, internet: $net:expr,
        aqi: $aqi:expr, score: $score:expr, $safety:ident, $weather:ident
    ) => {
        city!(@image concat!("/cities/", $id, ".jpg"),
            $id, $name, $country, $continent, $cost, $temp, $feels, $net, $aqi, $score,
            $safety, $weather)
    };
}

pub static CITIES: &[City] = &[
    // Asia
    city!("bangkok-thailand", "Bangkok", "Thailand", Asia,
        cost: 1500.0, temp: 32.0, feels: Some(38.0), internet: 45.0, aqi: 85.0, score: 4.3, Medium, Hot),
    city!("chiang-mai-thailand", "Chiang Mai", "Thailand", Asia,
        cost: 1100.0, temp: 27.0, feels: Some(30.0), internet: 40.0, aqi: 70.0, score: 4.5, High, Warm),
    city!("bali-indonesia", "Bali", "Indonesia", Asia,
        cost: 1300.0, temp: 28.0, feels: Some(33.0), internet: 25.0, aqi: 45.0, score: 4.4, Medium, Warm),
    city!("ho-chi-minh-city-vietnam", "Ho Chi Minh City", "Vietnam", Asia,
        cost: 1100.0, temp: 30.0, feels: Some(36.0), internet: 50.0, aqi: 75.0, score: 4.1, Medium, Hot),
    city!("da-nang-vietnam", "Da Nang", "Vietnam", Asia,
        cost: 950.0, temp: 26.0, feels: None, internet: 40.0, aqi: 40.0, score: 4.2, High, Warm),
    city!("hanoi-vietnam", "Hanoi", "Vietnam", Asia,
        cost: 1000.0, temp: 24.0, feels: None, internet: 45.0, aqi: 110.0, score: 3.9, Medium, Warm),
    city!("tokyo-japan", "Tokyo", "Japan", Asia,
        cost: 3200.0, temp: 16.0, feels: None, internet: 120.0, aqi: 35.0, score: 4.4, High, Mild),
    city!("seoul-south-korea", "Seoul", "South Korea", Asia,
        cost: 2600.0, temp: 13.0, feels: None, internet: 200.0, aqi: 55.0, score: 4.3, High, Mild),
    city!("taipei-taiwan", "Taipei", "Taiwan", Asia,
        cost: 2100.0, temp: 24.0, feels: Some(27.0), internet: 110.0, aqi: 45.0, score: 4.4, High, Warm),
    city!("kuala-lumpur-malaysia", "Kuala Lumpur", "Malaysia", Asia,
        cost: 1400.0, temp: 29.0, feels: Some(34.0), internet: 60.0, aqi: 60.0, score: 4.2, Medium, Hot),
    city!("manila-philippines", "Manila", "Philippines", Asia,
        cost: 1200.0, temp: 30.0, feels: Some(37.0), internet: 30.0, aqi: 90.0, score: 3.6, Low, Hot),
    city!("singapore-singapore", "Singapore", "Singapore", Asia,
        cost: 4200.0, temp: 28.0, feels: Some(33.0), internet: 180.0, aqi: 40.0, score: 4.5, High, Hot),
    // Europe
    city!("lisbon-portugal", "Lisbon", "Portugal", Europe,
        cost: 2400.0, temp: 19.0, feels: None, internet: 95.0, aqi: 28.0, score: 4.6, High, Mild),
    city!("porto-portugal", "Porto", "Portugal", Europe,
        cost: 2000.0, temp: 17.0, feels: None, internet: 80.0, aqi: 25.0, score: 4.4, High, Mild),
    city!("barcelona-spain", "Barcelona", "Spain", Europe,
        cost: 2800.0, temp: 21.0, feels: None, internet: 110.0, aqi: 38.0, score: 4.5, Medium, Mild),
    city!("berlin-germany", "Berlin", "Germany", Europe,
        cost: 3000.0, temp: 11.0, feels: Some(9.0), internet: 70.0, aqi: 30.0, score: 4.3, High, Cold),
    city!("tbilisi-georgia", "Tbilisi", "Georgia", Europe,
        cost: 1200.0, temp: 15.0, feels: None, internet: 30.0, aqi: 60.0, score: 4.2, Medium, Mild),
    city!("budapest-hungary", "Budapest", "Hungary", Europe,
        cost: 1800.0, temp: 13.0, feels: None, internet: 90.0, aqi: 42.0, score: 4.3, High, Mild),
    city!("split-croatia", "Split", "Croatia", Europe,
        cost: 1900.0, temp: 22.0, feels: None, internet: 45.0, aqi: 20.0, score: 4.2, High, Warm),
    city!("tallinn-estonia", "Tallinn", "Estonia", Europe,
        cost: 2200.0, temp: 7.0, feels: Some(3.0), internet: 100.0, aqi: 15.0, score: 4.1, High, Cold),
    city!("athens-greece", "Athens", "Greece", Europe,
        cost: 1950.0, temp: 22.0, feels: None, internet: 50.0, aqi: 45.0, score: 4.1, Medium, Warm),
    // North America
    city!("mexico-city-mexico", "Mexico City", "Mexico", NorthAmerica,
        cost: 1700.0, temp: 18.0, feels: None, internet: 50.0, aqi: 95.0, score: 4.2, Medium, Mild),
    city!("playa-del-carmen-mexico", "Playa del Carmen", "Mexico", NorthAmerica,
        cost: 1900.0, temp: 28.0, feels: Some(33.0), internet: 35.0, aqi: 25.0, score: 4.1, Medium, Hot),
    city!("oaxaca-mexico", "Oaxaca", "Mexico", NorthAmerica,
        cost: 1300.0, temp: 21.0, feels: None, internet: 25.0, aqi: 35.0, score: 4.0, Medium, Mild),
    city!("austin-united-states", "Austin", "United States", NorthAmerica,
        cost: 4200.0, temp: 22.0, feels: None, internet: 250.0, aqi: 40.0, score: 4.0, Medium, Warm),
    city!("vancouver-canada", "Vancouver", "Canada", NorthAmerica,
        cost: 3800.0, temp: 11.0, feels: None, internet: 150.0, aqi: 20.0, score: 4.1, High, Cold),
    // South America
    city!("buenos-aires-argentina", "Buenos Aires", "Argentina", SouthAmerica,
        cost: 1300.0, temp: 18.0, feels: None, internet: 60.0, aqi: 40.0, score: 4.3, Medium, Mild),
    city!("medellin-colombia", "Medellín", "Colombia", SouthAmerica,
        cost: 1400.0, temp: 23.0, feels: None, internet: 55.0, aqi: 55.0, score: 4.4, Medium, Warm),
    city!("montevideo-uruguay", "Montevideo", "Uruguay", SouthAmerica,
        cost: 2100.0, temp: 17.0, feels: None, internet: 90.0, aqi: 20.0, score: 4.0, High, Mild),
    city!("florianopolis-brazil", "Florianópolis", "Brazil", SouthAmerica,
        cost: 1600.0, temp: 24.0, feels: None, internet: 60.0, aqi: 18.0, score: 4.2, Medium, Warm),
    city!("lima-peru", "Lima", "Peru", SouthAmerica,
        cost: 1500.0, temp: 19.0, feels: None, internet: 45.0, aqi: 70.0, score: 3.8, Low, Mild),
    city!("santiago-chile", "Santiago", "Chile", SouthAmerica,
        cost: 1900.0, temp: 16.0, feels: None, internet: 100.0, aqi: 65.0, score: 4.0, Medium, Mild),
    // Africa
    city!("cape-town-south-africa", "Cape Town", "South Africa", Africa,
        cost: 1800.0, temp: 20.0, feels: None, internet: 40.0, aqi: 25.0, score: 4.3, Low, Mild),
    city!("marrakech-morocco", "Marrakech", "Morocco", Africa,
        cost: 1200.0, temp: 26.0, feels: Some(28.0), internet: 20.0, aqi: 55.0, score: 3.9, Medium, Warm),
    city!("nairobi-kenya", "Nairobi", "Kenya", Africa,
        cost: 1500.0, temp: 19.0, feels: None, internet: 25.0, aqi: 45.0, score: 3.7, Low, Mild),
    city!(no_image "zanzibar-tanzania", "Zanzibar", "Tanzania", Africa,
        cost: 1300.0, temp: 29.0, feels: Some(34.0), internet: 12.0, aqi: 20.0, score: 3.8, Medium, Hot),
    city!("cairo-egypt", "Cairo", "Egypt", Africa,
        cost: 1000.0, temp: 29.0, feels: None, internet: 30.0, aqi: 130.0, score: 3.5, Medium, Hot),
    // Oceania
    city!("melbourne-australia", "Melbourne", "Australia", Oceania,
        cost: 3400.0, temp: 15.0, feels: None, internet: 60.0, aqi: 20.0, score: 4.3, High, Mild),
    city!("sydney-australia", "Sydney", "Australia", Oceania,
        cost: 3900.0, temp: 22.0, feels: None, internet: 65.0, aqi: 22.0, score: 4.2, High, Warm),
    city!("auckland-new-zealand", "Auckland", "New Zealand", Oceania,
        cost: 3200.0, temp: 16.0, feels: None, internet: 90.0, aqi: 12.0, score: 4.2, High, Mild),
    // Middle East
    city!("dubai-united-arab-emirates", "Dubai", "United Arab Emirates", MiddleEast,
        cost: 3800.0, temp: 35.0, feels: Some(41.0), internet: 180.0, aqi: 80.0, score: 4.3, High, Hot),
    city!("istanbul-turkey", "Istanbul", "Turkey", MiddleEast,
        cost: 1600.0, temp: 16.0, feels: None, internet: 40.0, aqi: 60.0, score: 4.2, Medium, Mild),
    city!("tel-aviv-israel", "Tel Aviv", "Israel", MiddleEast,
        cost: 3600.0, temp: 24.0, feels: None, internet: 90.0, aqi: 40.0, score: 4.0, Medium, Warm),
    city!("muscat-oman", "Muscat", "Oman", MiddleEast,
        cost: 2600.0, temp: 33.0, feels: Some(38.0), internet: 60.0, aqi: 70.0, score: 3.8, High, Hot),
];
