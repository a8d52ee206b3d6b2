use route_fares::analyzers::analyzer::analyze;
use route_fares::output::render_text;
use route_fares::parser::parse_tickets;
use route_fares::route::Route;

#[test]
fn test_full_pipeline() {
    let bytes = include_bytes!("fixtures/tickets.json");
    let list = parse_tickets(bytes).expect("Failed to parse tickets");
    let report = analyze(&list, &Route::default());

    assert_eq!(report.total_tickets, 3);
    assert_eq!(report.matched_tickets, 2);
    assert_eq!(report.min_duration_by_carrier.len(), 1);
    assert_eq!(report.min_duration_by_carrier["S7"], 510);
    assert_eq!(report.mean_price, 600.0);
    assert_eq!(report.median_price, 600.0);
    assert_eq!(report.mean_median_diff.to_string(), "0.00");
}

#[test]
fn test_full_pipeline_text_report() {
    let bytes = include_bytes!("fixtures/tickets.json");
    let list = parse_tickets(bytes).expect("Failed to parse tickets");
    let text = render_text(&analyze(&list, &Route::default()));

    assert!(text.contains("\nS7: 510\n"));
    assert!(!text.contains("FZ"));
    assert!(text.ends_with("\n0.00\n"));
}

#[test]
fn test_reverse_route_gives_same_report() {
    let bytes = include_bytes!("fixtures/tickets.json");
    let list = parse_tickets(bytes).expect("Failed to parse tickets");

    let forward = analyze(&list, &Route::new("VVO", "TLV"));
    let reverse = analyze(&list, &Route::new("TLV", "VVO"));

    assert_eq!(forward.min_duration_by_carrier, reverse.min_duration_by_carrier);
    assert_eq!(forward.mean_median_diff, reverse.mean_median_diff);
}
