use chrono::NaiveDate;
use study_together::{
    clock::seed_labels,
    members::{ranked, Member},
    session::{SessionConfig, StudySession},
    time_series::{RollingSeriesBuffer, SEED_POINTS, SERIES_CAPACITY},
};

fn seeded_session() -> (StudySession, Vec<String>) {
    let now = NaiveDate::from_ymd_opt(2024, 5, 20)
        .and_then(|d| d.and_hms_opt(14, 32, 10))
        .unwrap();
    let labels = seed_labels(now, SEED_POINTS);
    let session = StudySession::new(&SessionConfig::default(), labels.clone());
    (session, labels)
}

#[test]
fn five_minutes_of_study_amends_then_appends() {
    let (mut session, labels) = seeded_session();
    assert_eq!(session.series.len(), 6);
    assert!(session.series.iter().all(|p| p.value == 0.0));

    session.tracker.start();
    for i in 0..300 {
        let label = if i < 60 { "14:32" } else { "14:33" };
        session.on_tick(label);
    }

    assert_eq!(session.tracker.accumulated_seconds(), 300);
    assert_eq!(session.series.len(), 7);

    let points: Vec<_> = session.series.iter().cloned().collect();
    // seed history untouched apart from the bucket that was still open
    for (p, l) in points.iter().zip(&labels).take(5) {
        assert_eq!(&p.label, l);
        assert_eq!(p.value, 0.0);
    }
    assert_eq!(points[5].label, "14:32");
    assert_eq!(points[5].value, 1.0);
    assert_eq!(points[6].label, "14:33");
    assert_eq!(points[6].value, 5.0);
}

#[test]
fn long_session_storage_stays_bounded() {
    let (mut session, _) = seeded_session();
    session.tracker.start();
    for i in 0..10_000u32 {
        let label = format!("bucket-{}", i / 60);
        session.on_tick(&label);
        assert!(session.series.len() <= SERIES_CAPACITY);
    }
    assert_eq!(session.series.len(), SERIES_CAPACITY);
    assert_eq!(
        session.series.last().map(|p| p.label.as_str()),
        Some("bucket-166")
    );
}

#[test]
fn fifteen_distinct_labels_keep_last_ten() {
    let mut buffer = RollingSeriesBuffer::new(SERIES_CAPACITY);
    for i in 1..=14 {
        buffer.tick(&format!("tick-{i}"), i as f64);
    }
    let samples = buffer.tick("tick-15", 15.0);
    assert_eq!(samples.len(), 10);
    assert_eq!(samples[0].label, "tick-6");
}

#[test]
fn ranking_preserves_tie_order() {
    let members = vec![
        Member::new("z", "zero", 0),
        Member::new("a", "first", 100),
        Member::new("b", "second", 100),
        Member::new("h", "half", 50),
    ];
    let order: Vec<&str> = ranked(&members).iter().map(|m| m.id.as_str()).collect();
    assert_eq!(order, vec!["a", "b", "h", "z"]);
}
