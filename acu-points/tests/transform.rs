// End-to-end point table scenarios through the public API
use acu_points::{transform, AcuError, TransformConfig, Transformer};

const SAMPLE_DOC: &str = r#"ACU slave table parameters

Ephemeris table selection:
0:Ephemeris Table 1
1:Ephemeris Table 2

:ACU:PNT:FI:10000:EPHEMERIS_TIME_OFFSET_IN_SECOND:"Ephemeris Time Offset (s) -3600 to +3600":grp "Slave Table":
:ACU:PNT:FI:10004:EPHEMERIS_TABLE:"Ephemeris Table":grp "Slave Table":
:ACU:PNT:FI:10007:ELEVATION_MINIMUM_ANGLE:"Elevation Minimum Angle (degrees) -10 to +10":grp "Slave Table":"#;

#[test]
fn no_point_lines_yields_empty_output() {
    assert_eq!(transform(""), "");
    assert_eq!(transform("just documentation\n0: Off\n1: On"), "");
    assert_eq!(transform("  :ACU indented is not a point line"), "");
}

#[test]
fn plain_record_without_mapping() {
    let input = r#":ACU:PNT:FI:10007:ELEVATION_MINIMUM_ANGLE:"Elevation Minimum Angle":grp "Slave Table":"#;

    assert_eq!(
        transform(input),
        r#":ACU:PNT:FI:10007:ELEVATION_MINIMUM_ANGLE:"Elevation Minimum Angle":grp "Slave Table""#
    );
}

#[test]
fn ephemeris_table_scenario() {
    let input = "0:Ephemeris Table 1\n\
                 1:Ephemeris Table 2\n\
                 :ACU:PNT:FI:10004:EPHEMERIS_TABLE:\"Ephemeris Table\":grp \"Slave Table\":";

    let output = Transformer::default().run(input).unwrap();

    let mapping: Vec<_> = output.mapping.iter().collect();
    assert_eq!(mapping, vec![("0", "Ephemeris Table 1"), ("1", "Ephemeris Table 2")]);

    assert_eq!(output.records.len(), 1);
    assert_eq!(output.records[0].name, "EPHEMERIS");
    assert_eq!(
        output.render(),
        ":ACU:PNT:FI:10004:EPHEMERIS:\"Ephemeris Table\":grp \"Slave Table\"\
         :evt \"Ephemeris Table 1\"==0,0::evt \"Ephemeris Table 2\"==1,0:"
    );
}

#[test]
fn full_document() {
    let expected = [
        r#":ACU:PNT:FI:10000:EPHEMERIS_TIME_OFFSET:"Ephemeris Time Offset":grp "Slave Table""#,
        r#":ACU:PNT:FI:10004:EPHEMERIS:"Ephemeris Table":grp "Slave Table":evt "Ephemeris Table 1"==0,0::evt "Ephemeris Table 2"==1,0:"#,
        r#":ACU:PNT:FI:10007:ELEVATION_MINIMUM_ANGLE:"Elevation Minimum Angle":grp "Slave Table""#,
    ]
    .join("\n");

    assert_eq!(transform(SAMPLE_DOC), expected);
}

#[test]
fn non_triggering_description_never_gets_events() {
    let input = "0: Disable\n1: Enable\n\
                 :ACU:PNT:FI:10007:ELEVATION_MINIMUM_ANGLE:\"Elevation Minimum Angle\":grp \"Slave Table\":\n\
                 :ACU:PNT:FI:10008:AZIMUTH_OFFSET:\"Azimuth Offset\":grp \"Slave Table\":";

    let output = Transformer::default().run(input).unwrap();
    assert_eq!(output.mapping.len(), 2);
    assert!(output.records.iter().all(|r| r.events.is_empty()));
    assert!(!output.render().contains(":evt"));
}

#[test]
fn aos_time_trigger_keeps_value_text() {
    let input = "00 = disable\n\
                 10 = enable at AOS\n\
                 :ACU:PNT:FI:10001:AOS_TIME_FOR_T0_TRIGGER_IN_SECOND_SINCE_BEGIN_OF_THE_DAY:\"AOS Time For T0 Trigger (s) 0 to 86400\":grp \"Slave Table\":";

    assert_eq!(
        transform(input),
        ":ACU:PNT:FI:10001:AOS_TIME_FOR_T0_TRIGGER:\"AOS Time For T0 Trigger\":grp \"Slave Table\"\
         :evt \"Disable\"==00,0::evt \"Enable at AOS\"==10,0:"
    );
}

#[test]
fn mapping_last_write_wins() {
    let input = "0: first label\n\
                 0: second label\n\
                 :ACU:PNT:FI:10004:EPHEMERIS_TABLE:\"Ephemeris Table\":grp \"Slave Table\":";

    let output = Transformer::default().run(input).unwrap();
    assert_eq!(output.mapping.len(), 1);
    assert_eq!(output.mapping.get("0"), Some("Second label"));
    assert!(output.render().ends_with(":evt \"Second label\"==0,0:"));
}

#[test]
fn id_is_carried_verbatim() {
    let input = r#":ACU:PNT:FI:A-17:NAME:"Desc":grp "Slave Table":"#;
    assert!(transform(input).starts_with(":ACU:PNT:FI:A-17:NAME:"));
}

#[test]
fn malformed_lines_are_skipped_by_default() {
    let input = ":ACU:PNT:FI:10007:ELEVATION_MINIMUM_ANGLE:\"Elevation Minimum Angle\":grp \"Slave Table\":\n\
                 :ACU:PNT:FI\n\
                 :ACU:PNT:FI:10008:AZIMUTH:no description";

    let output = Transformer::default().run(input).unwrap();
    assert_eq!(output.records.len(), 1);
    let lines: Vec<usize> = output.rejected.iter().map(|r| r.line).collect();
    assert_eq!(lines, vec![2, 3]);
    assert_eq!(transform(input), output.render());
}

#[test]
fn strict_mode_fails_without_partial_output() {
    let input = ":ACU:PNT:FI:10007:ELEVATION_MINIMUM_ANGLE:\"Elevation Minimum Angle\":grp \"Slave Table\":\n\
                 :ACU:PNT:FI";

    let result = Transformer::new(TransformConfig::new().strict()).run(input);
    match result {
        Err(AcuError::MalformedPointLine { line, .. }) => assert_eq!(line, 2),
        other => panic!("expected malformed line error, got {:?}", other),
    }
}

#[test]
fn transform_is_idempotent_over_calls() {
    assert_eq!(transform(SAMPLE_DOC), transform(SAMPLE_DOC));
}
