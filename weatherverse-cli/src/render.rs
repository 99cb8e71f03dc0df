use chrono::{DateTime, Local, Utc};
use weatherverse_core::{
    LocationRecord, PlaceInfoRecord, Presentation, SearchBundle, WeatherSnapshot,
    model::Forecast,
};

pub fn print_bundle(bundle: &SearchBundle) {
    let p = &bundle.presentation;
    println!();
    println!("{} {} ({})", p.emoji, bundle.query, p.label);
    println!("{}", "─".repeat(48));

    match bundle.location {
        Some(loc) => print_location(loc),
        None => println!("No landmark data for {}", bundle.query),
    }
    println!();
    print_weather(&bundle.weather);
    println!();
    print_place(&bundle.place);
    println!();
    print_presentation(p, bundle.is_night);
}

fn print_location(loc: &LocationRecord) {
    println!("📍 {}", loc.display_name);
    println!("   {}", loc.description);
    println!("   {:.4}, {:.4}", loc.coordinates.lat, loc.coordinates.lon);
}

fn print_weather(w: &WeatherSnapshot) {
    let place = if w.country_code.is_empty() {
        w.location_name.clone()
    } else {
        format!("{}, {}", w.location_name, w.country_code)
    };
    println!("{place}: {:.0}°C, {}", w.temperature_c, w.condition_description);
    if w.is_synthetic() {
        println!("   (simulated: live data unavailable)");
    }
    println!(
        "   Feels like {:.0}°C   Humidity {}%   Wind {:.1} m/s   Visibility {}",
        w.feels_like_c,
        w.humidity_pct,
        w.wind_speed_mps,
        visibility_km(w.visibility_m)
    );
    println!(
        "   Pressure {} hPa   Clouds {}%   Sunrise {}   Sunset {}",
        w.pressure_hpa,
        w.cloud_cover_pct,
        local_time(w.sunrise),
        local_time(w.sunset)
    );
}

fn print_place(place: &PlaceInfoRecord) {
    println!("🏛  {}", place.name);
    println!("   {}", place.description);
    if let Some(fact) = &place.fact {
        println!("   Did you know? {fact}");
    }
    if let Some(url) = &place.image_url {
        println!("   {url}");
    }
}

fn print_presentation(p: &Presentation, is_night: bool) {
    println!("Background: {} ({})", p.gradient, if is_night { "night" } else { "day" });
    println!("Lighting:   {:.2} {}", p.lighting.intensity, p.lighting.color);
    let particles = p.effect.particle_count();
    if particles > 0 {
        println!("Effect:     {:?} ({particles} particles)", p.effect);
    } else {
        println!("Effect:     {:?}", p.effect);
    }
    if let Some(fog) = p.fog {
        println!("Fog:        near {} far {} density {}", fog.near, fog.far, fog.density);
    }
}

pub fn print_forecast(forecast: &Forecast) {
    println!("Forecast for {}", forecast.location_name);
    for entry in &forecast.entries {
        println!(
            "  {}  {:>5.1}°C  {}",
            entry.time.with_timezone(&Local).format("%a %d %H:%M"),
            entry.temperature_c,
            entry.condition_description
        );
    }
}

pub fn print_locations(locations: &[(&str, &LocationRecord)]) {
    let width = locations.iter().map(|(key, _)| key.len()).max().unwrap_or(0);
    for (key, loc) in locations {
        println!("{key:<width$}  {} ({:.4}, {:.4})", loc.display_name, loc.coordinates.lat, loc.coordinates.lon);
    }
}

fn visibility_km(meters: u32) -> String {
    format!("{:.1} km", f64::from(meters) / 1000.0)
}

fn local_time(t: DateTime<Utc>) -> String {
    t.with_timezone(&Local).format("%H:%M").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn visibility_is_in_km() {
        assert_eq!(visibility_km(10_000), "10.0 km");
        assert_eq!(visibility_km(3500), "3.5 km");
        assert_eq!(visibility_km(0), "0.0 km");
    }

    #[test]
    fn local_time_is_hours_and_minutes() {
        let t = DateTime::from_timestamp(1_717_374_233, 0).unwrap();
        let s = local_time(t);
        assert_eq!(s.len(), 5);
        assert_eq!(&s[2..3], ":");
    }
}
