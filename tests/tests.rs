// ../tests/tests.rs
use planetfall::*;
use proptest::prelude::*;
use ratatui::layout::Alignment;
use std::fs;

#[test]
fn test_settlement_report_from_json() {
    // Step 1: Read the dummy completion payload
    let json_str = fs::read_to_string("tests/dummy_settlement_report.json")
        .expect("Failed to read dummy settlement report JSON file");

    // Step 2: Parse it the way the gateway does
    let report = SimulationData::from_json(&json_str).expect("Failed to parse report");

    // Step 3: Verify the parsed report
    assert_eq!(report.city_name, "Rustwake");
    assert!(report.city_overview.contains("**Rustwake**"));
    assert!(report.technology.contains("$E=mc^2$"));
    assert!(report.city_image_prompt.contains("octane render"));

    // Step 4: The overview renders with its markup intact
    let spans = parse_inline(&report.city_overview);
    assert_eq!(spans[0].kind, SpanKind::Bold);
    assert_eq!(spans[0].content, "Rustwake");
    assert!(
        spans
            .iter()
            .any(|s| s.kind == SpanKind::Italic && s.content == "dust-scrubbing")
    );
}

#[test]
fn test_life_analysis_from_json() {
    let json_str = fs::read_to_string("tests/dummy_life_analysis.json")
        .expect("Failed to read dummy life analysis JSON file");

    let analysis = LifeAnalysisData::from_json(&json_str).expect("Failed to parse analysis");

    assert_eq!(analysis.life_possibility, "Moderate");
    assert!(analysis.reasoning.contains("*tidal heating*"));
    assert!(analysis.life_form_image_prompt.contains("bioluminescent"));
}

#[test]
fn test_malformed_payload_is_an_error() {
    assert!(SimulationData::from_json("not json at all").is_err());
    // A payload missing required fields must not slip through either.
    assert!(SimulationData::from_json(r#"{"city_name": "Rustwake"}"#).is_err());
}

#[test]
fn test_transcript_rendering_assigns_speakers() {
    let target = ChatTarget::Resident(CityRole::TourGuide);
    let mut session = ChatSession::new(&target, "Mars", "Rustwake");
    session.push_user("What should I **not** miss?".to_string());
    session.push_model("The *hanging gardens*, without question.".to_string());

    let lines = planetfall::ui::chat::parse_transcript(&session, 60);
    // user line, separator, model line
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0].1, Alignment::Right);
    assert_eq!(lines[2].1, Alignment::Left);
    let model_text: String = lines[2]
        .0
        .spans
        .iter()
        .map(|s| s.content.as_ref())
        .collect();
    assert_eq!(model_text, "The hanging gardens, without question.");
}

#[test]
fn test_transcript_wraps_long_messages() {
    let target = ChatTarget::Astronaut;
    let mut session = ChatSession::new(&target, "Space", "The Milky Way");
    session.push_model("word ".repeat(40).trim_end().to_string());

    let lines = planetfall::ui::chat::parse_transcript(&session, 20);
    assert!(lines.len() > 5);
}

// Reconstructs the source text from a parsed span sequence, re-adding the
// delimiters the parser consumed.
fn reconstruct(spans: &[MarkupSpan]) -> String {
    spans
        .iter()
        .map(|span| match span.kind {
            SpanKind::Plain => span.content.clone(),
            SpanKind::Bold => format!("**{}**", span.content),
            SpanKind::Italic => format!("*{}*", span.content),
            SpanKind::Code => format!("${}$", span.content),
        })
        .collect()
}

proptest! {
    #[test]
    fn markup_never_panics_and_round_trips(input in ".*") {
        let spans = parse_inline(&input);
        prop_assert_eq!(reconstruct(&spans), input);
    }

    // Dense delimiter soup is where a scanner would slip; keep the partition
    // invariants under pressure.
    #[test]
    fn markup_partitions_delimiter_soup(input in "[ab*$\\n ]{0,40}") {
        let spans = parse_inline(&input);
        prop_assert_eq!(reconstruct(&spans), input.clone());

        // Positions are strictly increasing match offsets inside the input.
        let mut last = None;
        for span in &spans {
            prop_assert!(span.position <= input.len());
            if let Some(previous) = last {
                prop_assert!(span.position > previous);
            }
            last = Some(span.position);
        }
    }

    #[test]
    fn delimiter_free_text_is_one_plain_span(input in "[^*$]*") {
        let spans = parse_inline(&input);
        if input.is_empty() {
            prop_assert!(spans.is_empty());
        } else {
            prop_assert_eq!(spans.len(), 1);
            prop_assert_eq!(spans[0].kind, SpanKind::Plain);
            prop_assert_eq!(&spans[0].content, &input);
        }
    }
}
