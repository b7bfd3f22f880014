mod common;

use common::{record, sample_catalog, test_pool};
use server_core::domains::import::{import_records, SchoolRecord};
use server_core::domains::listings::models::Listing;
use server_core::domains::styles::models::Style;

#[tokio::test]
async fn test_reimport_is_idempotent() {
    let pool = test_pool().await;

    let first = import_records(sample_catalog(), &pool).await.unwrap();
    assert_eq!(first.schools_created, 4);
    assert_eq!(first.schools_skipped, 0);
    assert_eq!(first.styles_created, 3);

    let second = import_records(sample_catalog(), &pool).await.unwrap();
    assert_eq!(second.schools_created, 0);
    assert_eq!(second.schools_skipped, 4);
    assert_eq!(second.styles_created, 0);
    assert_eq!(second.schedule_entries_created, 0);

    let listings = Listing::get_all(&pool).await.unwrap();
    assert_eq!(listings.len(), 4);

    // No duplicate style links or schedule rows either.
    let wawel = Listing::get_by_id("joga-pod-wawelem", &pool)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(wawel.styles.len(), 2);
    assert_eq!(wawel.schedule.len(), 2);
}

#[tokio::test]
async fn test_styles_are_shared_across_schools() {
    let pool = test_pool().await;
    import_records(sample_catalog(), &pool).await.unwrap();

    // "Vinyasa" appears on two schools but is stored once.
    let names = Style::unique_names(&pool).await.unwrap();
    assert_eq!(names.iter().filter(|n| *n == "Vinyasa").count(), 1);

    let vinyasa = Listing::get_by_style("Vinyasa", &pool).await.unwrap();
    assert_eq!(vinyasa.len(), 2);
}

#[tokio::test]
async fn test_case_differing_style_names_stay_distinct() {
    let pool = test_pool().await;

    let mut shouty = record("studio-a", "Studio A", "Kraków");
    shouty.styles = vec!["Vinyasa".to_string()];
    let mut quiet = record("studio-b", "Studio B", "Kraków");
    quiet.styles = vec!["vinyasa".to_string()];

    import_records(vec![shouty, quiet], &pool).await.unwrap();

    // Stored uniqueness is case-sensitive: both rows exist. The
    // case-insensitive lookup resolves to the lower id ("Vinyasa") and so
    // sees only the school linked to it.
    let names = Style::unique_names(&pool).await.unwrap();
    assert_eq!(names, vec!["Vinyasa", "vinyasa"]);

    let matched = Listing::get_by_style("VINYASA", &pool).await.unwrap();
    assert_eq!(matched.len(), 1);
    assert_eq!(matched[0].school.id, "studio-a");
}

#[tokio::test]
async fn test_unknown_source_tag_is_rejected() {
    let pool = test_pool().await;

    let mut bad = record("tajemnicze", "Tajemnicze Studio", "Łódź");
    bad.source = "telepathy".to_string();

    let err = import_records(vec![bad], &pool).await.unwrap_err();
    assert!(err.to_string().contains("tajemnicze"));
}

#[tokio::test]
async fn test_parses_camel_case_export_with_legacy_schedule_keys() {
    let pool = test_pool().await;

    let raw = r#"[
        {
            "id": "joga-centrum",
            "name": "Joga Centrum",
            "city": "Poznań",
            "address": "ul. Półwiejska 1",
            "websiteUrl": "https://jogacentrum.example.pl",
            "phone": "+48 600 100 200",
            "price": 199.0,
            "trialPrice": 0.0,
            "singleClassPrice": 45.0,
            "rating": 4.7,
            "reviews": 123,
            "styles": ["Ashtanga"],
            "schedule": [
                {"day": "Wtorek", "time": "19:00-20:30", "class_name": "Ashtanga podstawy"},
                {"day": "Czwartek", "time": "07:00-08:15", "className": "Mysore"}
            ],
            "latitude": 52.4,
            "longitude": 16.92,
            "lastPriceCheck": "2025-05-20",
            "lastUpdated": "2025-06-01",
            "source": "crawl4ai"
        }
    ]"#;

    let records: Vec<SchoolRecord> = serde_json::from_str(raw).unwrap();
    import_records(records, &pool).await.unwrap();

    let listing = Listing::get_by_id("joga-centrum", &pool)
        .await
        .unwrap()
        .unwrap();
    // Trial price zero survives as zero ("free trial"), not as unknown.
    assert_eq!(listing.school.trial_price, Some(0.0));
    assert_eq!(listing.schedule.len(), 2);
    assert_eq!(listing.schedule[0].class_name, "Ashtanga podstawy");
    assert_eq!(listing.schedule[1].class_name, "Mysore");
}
