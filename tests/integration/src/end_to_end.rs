//! End-to-end flow: scan a document, address its regions, record
//! replacements, and reassemble.

use pretty_assertions::assert_eq;
use region_core::{extract_default, Coordinates, InnerCoordinates};
use region_transform::{RegionQuery, Transformer};

#[test]
fn test_locate_record_materialize() {
    let t = Transformer::new("<template>{{book}}</template>").unwrap();
    assert_eq!(t.len(), 1);

    let region = t.regions()[0].clone();
    let coords = t.coordinates_of_region(&region).unwrap();
    assert_eq!(
        coords,
        Coordinates {
            line: 1,
            column: 10,
            column_offset: 0,
            start: 10,
            end: 18,
        }
    );

    t.transform_one(&region, |content, _| {
        assert_eq!(content, "{{book}}");
        Ok("x".to_string())
    })
    .unwrap();

    assert_eq!(t.materialize().unwrap(), "<template>x</template>");
}

#[test]
fn test_component_file_editing_session() {
    let source = [
        "import { helper } from './helpers';",
        "",
        "export const Card = <template>",
        "  <div class=\"card\">{{@title}}</div>",
        "</template>;",
        "",
        "export const Badge = <template>{{@label}}</template>;",
        "",
    ]
    .join("\n");

    let t = Transformer::new(&source).unwrap();
    assert_eq!(t.len(), 2);

    // address one region by position, the other by payload start offset
    let badge = t
        .find_region(RegionQuery::at_line_column(7, 31))
        .unwrap()
        .clone();
    let card = t.find_region(RegionQuery::at_start(67)).unwrap().clone();

    t.transform_one(&badge, |_, _| Ok("<b>{{@label}}</b>".into()))
        .unwrap();
    t.transform_one(&card, |content, _| Ok(content.replace("card", "panel")))
        .unwrap();

    let expected = [
        "import { helper } from './helpers';",
        "",
        "export const Card = <template>",
        "  <div class=\"panel\">{{@title}}</div>",
        "</template>;",
        "",
        "export const Badge = <template><b>{{@label}}</b></template>;",
        "",
    ]
    .join("\n");
    assert_eq!(t.materialize().unwrap(), expected);
}

#[test]
fn test_reverse_mapping_a_checker_hit() {
    let source = "\nexport const Foo = <template>\n    Hello there\n</template>\n";
    let t = Transformer::new(source).unwrap();
    let region = t.regions()[0].clone();

    // a checker flags payload line 2, columns 4..5; the document position
    // is one line further down, columns unchanged
    let inner = InnerCoordinates {
        line: 2,
        end_line: 2,
        column: 4,
        end_column: 5,
    };
    let mapped = t.reverse_inner_coordinates_of(&region, &inner).unwrap();
    assert_eq!(
        mapped,
        InnerCoordinates {
            line: 3,
            end_line: 3,
            column: 4,
            end_column: 5,
        }
    );

    // a hit on the payload's first line additionally shifts by the
    // region's own column
    let first_line = InnerCoordinates {
        line: 1,
        end_line: 1,
        column: 0,
        end_column: 0,
    };
    let mapped = t.reverse_inner_coordinates_of(&region, &first_line).unwrap();
    assert_eq!(mapped.line, 2);
    assert_eq!(mapped.column, 29);
}

#[test]
fn test_extraction_report_matches_engine_view() {
    let source = "a<template>one</template>b<template>two</template>c";
    let report = extract_default(source).unwrap();
    let t = Transformer::new(source).unwrap();

    assert_eq!(report.len(), t.len());
    for (extracted, region) in report.iter().zip(t.regions()) {
        assert_eq!(extracted.bounds, *region.bounds());
        assert_eq!(
            extracted.coordinates,
            t.coordinates_of_region(region).unwrap()
        );
        assert_eq!(extracted.contents, t.content_of(region).unwrap());
    }
}
