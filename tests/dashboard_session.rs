use chrono::NaiveDate;
use econ_dashboard::aggregate::{investment_by_sector, sector_employment, within_window};
use econ_dashboard::generator::month_count;
use econ_dashboard::{
    apply_live_update, generate_investment_projects, generate_macro_series,
    generate_tourism_series, generate_trade_series, get_sectors, DashboardSession,
    GeneratorError, SessionSettings,
};

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

#[test]
fn test_public_generators_agree_on_length() {
    let (start, end) = (d(2014, 1, 1), d(2024, 12, 1));
    let n = month_count(start, end).unwrap();
    assert_eq!(generate_macro_series(start, end, Some(1)).unwrap().len(), n);
    assert_eq!(generate_tourism_series(start, end, Some(1)).unwrap().len(), n);
    assert_eq!(generate_trade_series(start, end, Some(1)).unwrap().len(), n);
}

#[test]
fn test_invalid_inputs_are_reported() {
    let err = generate_tourism_series(d(2024, 2, 1), d(2024, 1, 1), None).unwrap_err();
    assert!(matches!(err, GeneratorError::InvalidRange { .. }));
    assert_eq!(
        generate_investment_projects(0, None).unwrap_err(),
        GeneratorError::InvalidCount(0)
    );
}

#[test]
fn test_projects_reference_registry() {
    let registry = get_sectors();
    let projects = generate_investment_projects(200, None).unwrap();
    assert_eq!(projects.len(), 200);
    assert!(projects.iter().all(|p| registry.contains(&p.sector)));
    assert!(investment_by_sector(&projects).keys().all(|k| registry.contains(k)));
}

#[test]
fn test_live_update_gate() {
    let mut series = generate_macro_series(d(2024, 1, 1), d(2024, 3, 1), Some(4)).unwrap();
    let noon = |date: NaiveDate| date.and_hms_opt(12, 0, 0).unwrap();

    assert!(!apply_live_update(&mut series, noon(d(2024, 3, 20)), None).unwrap().appended());
    assert_eq!(series.len(), 3);

    assert!(apply_live_update(&mut series, noon(d(2024, 3, 31)), None).unwrap().appended());
    assert!(!apply_live_update(&mut series, noon(d(2024, 3, 31)), None).unwrap().appended());
    assert_eq!(series.len(), 4);
}

#[test]
fn test_full_session_views() {
    let settings = SessionSettings::until(d(2024, 12, 1)).with_seed(77);
    let mut session = DashboardSession::generate(settings).unwrap();

    let rows = sector_employment(session.sectors());
    assert_eq!(
        rows.iter().map(|r| r.employment).sum::<u64>(),
        session.sectors().total_employment()
    );

    let covid =
        within_window(session.tourism(), d(2020, 1, 1), d(2020, 12, 31), |o| o.date).unwrap();
    assert_eq!(covid.len(), 12);
    assert!(covid.iter().all(|o| o.arrivals <= 22_500));

    let before = session.macro_series().len();
    session.refresh(d(2025, 2, 1).and_hms_opt(8, 0, 0).unwrap()).unwrap();
    session.refresh(d(2025, 2, 1).and_hms_opt(8, 0, 30).unwrap()).unwrap();
    assert_eq!(session.macro_series().len(), before + 1);
    assert!(session.macro_series().windows(2).all(|w| w[0].date < w[1].date));
}
