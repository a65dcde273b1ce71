//! Capturing structured entries through the memory sink.

use bakery_observability::{LogFormat, LogLevel, LogSink, SessionId, StructuredLogger};

#[test]
fn test_level_filtering_and_fields() {
    let (sink, log) = LogSink::memory();
    let logger = StructuredLogger::new(SessionId::from_string("s-1"))
        .with_component("cart")
        .with_min_level(LogLevel::Info)
        .with_format(LogFormat::Human)
        .with_sink(sink);

    logger.debug("dropped");
    logger
        .info_builder("Quote computed")
        .field("currency", "RUB")
        .field_i64("total", 2250)
        .field_f64("distance_km", 5.0)
        .field_bool("free_delivery", false)
        .emit();
    logger.error("Checkout unavailable");

    assert_eq!(log.messages(), ["Quote computed", "Checkout unavailable"]);

    let entries = log.entries();
    let quote = &entries[0];
    assert_eq!(quote.session_id, "s-1");
    assert_eq!(quote.fields["total"], serde_json::json!(2250));
    assert_eq!(quote.fields["free_delivery"], serde_json::json!(false));

    let json: serde_json::Value = serde_json::from_str(&quote.to_json()).unwrap();
    assert_eq!(json["level"], "info");
    assert_eq!(json["component"], "cart");
    assert_eq!(json["currency"], "RUB");

    assert!(entries[1].to_human().starts_with("[ERROR] Checkout unavailable"));
}

#[test]
fn test_clones_share_sink() {
    let (sink, log) = LogSink::memory();
    let logger = StructuredLogger::new(SessionId::generate()).with_sink(sink);
    let clone = logger.clone();

    logger.warn("first");
    clone.warn("second");

    assert_eq!(log.entries().len(), 2);
}
