//! Integration tests for the conversion pipeline

use std::fs;
use std::path::PathBuf;

use pretty_assertions::assert_eq;

use vecpath::normalizer::CommandKind;
use vecpath::{
    convert_file, convert_files, convert_records, convert_svg, encode_document, ConvertConfig,
    ConvertError, InputKind, NormalizeError, OutputConfig, OutputFormat, Point,
    SegmentationMode, Vertex,
};

/// Fresh scratch directory under the system temp dir
fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("vecpath-{}-{}", name, std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).expect("Failed to create scratch dir");
    dir
}

#[test]
fn test_one_subpath_per_path_element() {
    let source = include_str!("fixtures/two_shapes.svg");
    let doc = convert_svg(source, &ConvertConfig::default()).expect("Should convert");

    assert_eq!(doc.len(), 2);
    assert_eq!(doc.subpaths()[0].kind_codes(), vec![1, 3, 3, 1, 2, 1]);
    assert_eq!(
        doc.subpaths()[1].vertices(),
        &[Vertex::anchor(Point::new(500.0, 500.0))]
    );
}

#[test]
fn test_cubic_control_points_keep_source_order() {
    let source = include_str!("fixtures/two_shapes.svg");
    let doc = convert_svg(source, &ConvertConfig::default()).expect("Should convert");

    let positions: Vec<Point> = doc.subpaths()[0].iter().take(4).map(|v| v.pos).collect();
    assert_eq!(
        positions,
        vec![
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(20.0, 10.0),
            Point::new(30.0, 10.0),
        ]
    );
}

#[test]
fn test_per_close_segmentation() {
    let source = include_str!("fixtures/contours.svg");

    let whole = convert_svg(source, &ConvertConfig::default()).expect("Should convert");
    assert_eq!(whole.len(), 1);
    assert_eq!(whole.subpaths()[0].kind_codes(), vec![1, 2, 1, 1, 3, 3, 1, 1]);

    let config = ConvertConfig::new().with_segmentation(SegmentationMode::PerClose);
    let split = convert_svg(source, &config).expect("Should convert");
    // The trailing unclosed move is dropped
    assert_eq!(split.len(), 2);
    assert_eq!(split.subpaths()[0].kind_codes(), vec![1, 2, 1]);
    assert_eq!(split.subpaths()[1].kind_codes(), vec![1, 3, 3, 1]);
}

#[test]
fn test_relative_commands_fail_the_document() {
    let source = include_str!("fixtures/relative.svg");
    let err = convert_svg(source, &ConvertConfig::default()).unwrap_err();
    match err {
        ConvertError::Normalize(NormalizeError::UnsupportedCommand { command }) => {
            assert_eq!(command, CommandKind::Move)
        }
        other => panic!("Expected UnsupportedCommand, got {:?}", other),
    }
}

#[test]
fn test_example_curve_scaled_output() {
    let doc = convert_records(include_str!("fixtures/curve.txt")).expect("Should convert");
    let encoded = encode_document(&doc, &OutputConfig::default()).expect("Should encode");
    insta::assert_snapshot!(
        &encoded[0],
        @r#"[{"pos":[0.00000,1.00000],"type":1},{"pos":[0.01000,1.00000],"type":3},{"pos":[0.02000,0.99000],"type":3},{"pos":[0.03000,0.99000],"type":1}]"#
    );
}

#[test]
fn test_record_scaled_to_unit_square() {
    let doc = convert_records("1 500.0 500.0").expect("Should convert");
    let config = OutputConfig::default().with_format(OutputFormat::LegacyJson);
    let encoded = encode_document(&doc, &config).expect("Should encode");
    assert_eq!(encoded, vec!["[[1,0.5,0.5]]".to_string()]);
}

#[test]
fn test_malformed_record_is_reported() {
    let err = convert_records(include_str!("fixtures/broken.txt")).unwrap_err();
    match err {
        ConvertError::Records(errors) => {
            assert_eq!(errors.len(), 1);
            // second line, after "1 2.5"
            assert!(errors[0].span().start >= 14);
        }
        other => panic!("Expected Records, got {:?}", other),
    }
}

#[test]
fn test_convert_file_writes_shape_files() {
    let dir = scratch_dir("shapes");
    let input = dir.join("prefix.svg");
    fs::write(&input, include_str!("fixtures/two_shapes.svg")).unwrap();

    let written = convert_file(&input, &ConvertConfig::default()).expect("Should convert");
    assert_eq!(
        written,
        vec![dir.join("prefix_shape0.path"), dir.join("prefix_shape1.path")]
    );

    let second = fs::read_to_string(dir.join("prefix_shape1.path")).unwrap();
    assert_eq!(second, r#"[{"pos":[0.50000,0.50000],"type":1}]"#);

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_convert_file_single_subpath_name() {
    let dir = scratch_dir("single");
    let input = dir.join("curve.txt");
    fs::write(&input, include_str!("fixtures/curve.txt")).unwrap();

    let config = ConvertConfig::new()
        .with_output(OutputConfig::new().with_format(OutputFormat::LegacyJson));
    let written = convert_file(&input, &config).expect("Should convert");
    assert_eq!(written, vec![dir.join("curve.path")]);

    let content = fs::read_to_string(&written[0]).unwrap();
    assert!(content.starts_with("[[1,0.0,1.0],[3,0.01,1.0]"));

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_convert_file_forced_input_kind() {
    let dir = scratch_dir("forced");
    let input = dir.join("drawing.xml");
    fs::write(&input, include_str!("fixtures/two_shapes.svg")).unwrap();

    // .xml would be read as records without the override
    assert!(convert_file(&input, &ConvertConfig::default()).is_err());

    let config = ConvertConfig::new().with_input(InputKind::Svg);
    let written = convert_file(&input, &config).expect("Should convert");
    assert_eq!(written.len(), 2);

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_text_output_round_trips_through_records() {
    let dir = scratch_dir("text");
    let input = dir.join("leaf.svg");
    fs::write(
        &input,
        r#"<svg><path d="M 250,750 Q 500,1000 750,750"/></svg>"#,
    )
    .unwrap();

    let config = ConvertConfig::new()
        .with_output(OutputConfig::new().with_format(OutputFormat::Text));
    let written = convert_file(&input, &config).expect("Should convert");
    let text = fs::read_to_string(&written[0]).unwrap();
    assert_eq!(text, "1 0.25 0.25\n2 0.5 0.0\n1 0.75 0.25\n");

    let doc = convert_records(&text).expect("Should parse back");
    assert_eq!(doc.subpaths()[0].kind_codes(), vec![1, 2, 1]);

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_missing_file_is_io_error() {
    let err = convert_file(
        &PathBuf::from("/nonexistent/vecpath/input.svg"),
        &ConvertConfig::default(),
    )
    .unwrap_err();
    assert!(matches!(err, ConvertError::Io { .. }));
}

#[test]
fn test_svg_and_records_encode_identically() {
    let from_svg = convert_svg(
        r#"<svg><path d="M0.005 0.1 C1.0000001 2.5 123.456789 0.3 999.9999 0.0001"/></svg>"#,
        &ConvertConfig::default(),
    )
    .expect("Should convert");
    let from_records = convert_records(
        "1 0.005 0.1\n3 1.0000001 2.5\n3 123.456789 0.3\n1 999.9999 0.0001\n",
    )
    .expect("Should convert");
    assert_eq!(from_svg, from_records);

    for format in [OutputFormat::Json, OutputFormat::LegacyJson, OutputFormat::Text] {
        let config = OutputConfig::default().with_format(format);
        assert_eq!(
            encode_document(&from_svg, &config).expect("Should encode"),
            encode_document(&from_records, &config).expect("Should encode"),
            "format {}",
            format
        );
    }

    let json = encode_document(&from_svg, &OutputConfig::default()).expect("Should encode");
    assert!(json[0].starts_with(r#"[{"pos":[0.00001,0.99990],"type":1}"#));
}

#[test]
fn test_overflowing_record_is_malformed() {
    let err = convert_records("1 1e400 0").unwrap_err();
    match err {
        ConvertError::Records(errors) => {
            assert_eq!(errors.len(), 1);
            // the overflowing number itself
            assert_eq!(errors[0].span().start, 2);
        }
        other => panic!("Expected Records, got {:?}", other),
    }
}

#[test]
fn test_batch_continues_past_failed_file() {
    let dir = scratch_dir("batch");
    let first = dir.join("first.svg");
    let broken = dir.join("broken.txt");
    let last = dir.join("last.txt");
    fs::write(&first, include_str!("fixtures/two_shapes.svg")).unwrap();
    fs::write(&broken, include_str!("fixtures/broken.txt")).unwrap();
    fs::write(&last, include_str!("fixtures/curve.txt")).unwrap();

    let outcomes = convert_files(&[&first, &broken, &last], &ConvertConfig::default());
    assert_eq!(outcomes.len(), 3);

    assert_eq!(
        outcomes[0].result.as_ref().expect("Should convert"),
        &vec![dir.join("first_shape0.path"), dir.join("first_shape1.path")]
    );
    assert!(dir.join("first_shape1.path").exists());

    assert!(!outcomes[1].is_ok());
    assert!(!dir.join("broken.path").exists());
    let report = outcomes[1].error_report().expect("Should report");
    assert!(report.contains("broken.txt"));

    assert_eq!(
        outcomes[2].result.as_ref().expect("Should convert"),
        &vec![dir.join("last.path")]
    );
    assert!(dir.join("last.path").exists());
    assert_eq!(outcomes[2].error_report(), None);

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_batch_reports_unreadable_file() {
    let missing = PathBuf::from("/nonexistent/vecpath/missing.svg");
    let outcomes = convert_files(&[&missing], &ConvertConfig::default());
    assert!(outcomes[0].source.is_none());
    assert!(matches!(outcomes[0].result, Err(ConvertError::Io { .. })));
    let report = outcomes[0].error_report().expect("Should report");
    assert!(report.contains("missing.svg"));
}
