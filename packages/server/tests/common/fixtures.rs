use chrono::NaiveDate;
use server_core::domains::import::{ScheduleRecord, SchoolRecord};

/// Minimal importable school record; tests override what they care about.
pub fn record(id: &str, name: &str, city: &str) -> SchoolRecord {
    SchoolRecord {
        id: id.to_string(),
        name: name.to_string(),
        city: city.to_string(),
        address: String::new(),
        neighborhood: None,
        website_url: String::new(),
        phone: None,
        email: None,
        price: None,
        trial_price: None,
        single_class_price: None,
        pricing_notes: None,
        rating: None,
        reviews: None,
        styles: vec![],
        description_raw: String::new(),
        description: String::new(),
        editorial_summary: String::new(),
        opening_hours: String::new(),
        schedule: vec![],
        image_url: String::new(),
        latitude: None,
        longitude: None,
        google_place_id: String::new(),
        google_maps_url: String::new(),
        last_price_check: None,
        last_updated: Some(NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()),
        source: "manual".to_string(),
    }
}

pub fn schedule_entry(day: &str, time: &str, class_name: &str) -> ScheduleRecord {
    ScheduleRecord {
        day: day.to_string(),
        time: time.to_string(),
        class_name: class_name.to_string(),
        instructor: None,
        level: None,
    }
}

/// Standard small catalog: two cities, shared styles, mixed geocoding.
pub fn sample_catalog() -> Vec<SchoolRecord> {
    let mut joga_pod_wawelem = record("joga-pod-wawelem", "Joga pod Wawelem", "Kraków");
    joga_pod_wawelem.styles = vec!["Vinyasa".to_string(), "Hatha".to_string()];
    joga_pod_wawelem.price = Some(220.0);
    joga_pod_wawelem.rating = Some(4.9);
    joga_pod_wawelem.latitude = Some(50.06);
    joga_pod_wawelem.longitude = Some(19.94);
    joga_pod_wawelem.schedule = vec![
        schedule_entry("Poniedziałek", "18:00-19:30", "Vinyasa Flow"),
        schedule_entry("Środa", "08:00-09:15", "Hatha poranna"),
    ];

    let mut asana_kazimierz = record("asana-kazimierz", "Asana Kazimierz", "Kraków");
    asana_kazimierz.styles = vec!["Hatha".to_string()];
    asana_kazimierz.rating = Some(4.5);
    asana_kazimierz.latitude = Some(50.08);
    asana_kazimierz.longitude = Some(19.90);

    // No coordinates on purpose: must not drag the Kraków centroid.
    let mut cicha_praktyka = record("cicha-praktyka", "Cicha Praktyka", "Kraków");
    cicha_praktyka.styles = vec!["Yin".to_string()];

    let mut joga_mokotow = record("joga-mokotow", "Joga Mokotów", "Warszawa");
    joga_mokotow.styles = vec!["Vinyasa".to_string()];
    joga_mokotow.price = Some(260.0);
    joga_mokotow.latitude = Some(52.19);
    joga_mokotow.longitude = Some(21.02);

    vec![
        joga_pod_wawelem,
        asana_kazimierz,
        cicha_praktyka,
        joga_mokotow,
    ]
}
