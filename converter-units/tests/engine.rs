//! End-to-end properties of the conversion engine

use converter_units::{
    convert, convert_auto, render_table, ConversionError, Domain, DomainSelector, UNITS,
};

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.0)
}

const SAMPLE_VALUES: [f64; 6] = [0.0, 1.0, 2.5, 60.0, -7.25, 123_456.789];

#[test]
fn aliases_of_the_same_unit_convert_to_identity() {
    for domain in Domain::ALL {
        for alias in UNITS.aliases(domain) {
            let canonical = &UNITS.get(domain, alias).unwrap().name;
            for v in SAMPLE_VALUES {
                let r = convert(domain, v, alias, canonical).unwrap();
                assert!(close(r, v), "{} -> {} in {}: {}", alias, canonical, domain, r);
            }
        }
    }
}

#[test]
fn conversion_composes_through_an_intermediate_unit() {
    for domain in Domain::ALL {
        let units = UNITS.primary_units(domain);
        for a in units {
            for b in units {
                for c in units {
                    let direct = convert(domain, 42.0, a, c).unwrap();
                    let via = convert(domain, convert(domain, 42.0, a, b).unwrap(), b, c).unwrap();
                    assert!(close(direct, via), "{} -> {} -> {}: {} vs {}", a, b, c, direct, via);
                }
            }
        }
    }
}

#[test]
fn auto_equals_explicit_within_a_domain() {
    let pairs = [("h", "min"), ("kg", "oz"), ("ft", "yd"), ("tbsp", "tsp")];
    for (from, to) in pairs {
        let domain = converter_units::detect(from).unwrap();
        assert_eq!(convert_auto(3.5, from, to).unwrap(), convert(domain, 3.5, from, to).unwrap());
    }
}

#[test]
fn auto_rejects_units_of_different_domains() {
    assert_eq!(
        convert_auto(1.0, "s", "kg").unwrap_err(),
        ConversionError::CrossDomain { from: Domain::Time, to: Domain::Weight }
    );
    assert!(matches!(
        convert_auto(2.0, "cups", "g"),
        Err(ConversionError::CrossDomain { from: Domain::Baking, to: Domain::Weight })
    ));
}

#[test]
fn known_scenarios() {
    assert_eq!(convert(Domain::Time, 60.0, "s", "m").unwrap(), 1.0);
    assert!(close(convert(Domain::Weight, 5.5, "kg", "lb").unwrap(), 5500.0 / 453.592));
    assert!(close(convert(Domain::Length, 5.0, "feet", "in").unwrap(), 60.0));
    assert!(close(convert(Domain::Baking, 2.0, "cups", "ml").unwrap(), 473.176));
}

#[test]
fn days_table_has_hours_and_no_days() {
    let table = render_table(Domain::Time, 60.0, "d").unwrap();
    let hours = table.rows.iter().find(|r| r.unit == "hours").unwrap();
    assert_eq!(hours.formatted, "1,440");
    assert!(table.rows.iter().all(|r| r.unit != "days"));
}

#[test]
fn shared_alias_resolves_by_priority() {
    assert!(matches!(
        convert_auto(10.0, "m", "km"),
        Err(ConversionError::CrossDomain { from: Domain::Time, to: Domain::Length })
    ));
    // The explicit domain reaches meters
    let table = render_table(Domain::Length, 10.0, "m").unwrap();
    assert!(table.rows.iter().all(|r| r.unit != "meters"));
    let auto = render_table(DomainSelector::Auto, 10.0, "m").unwrap();
    assert_eq!(auto.domain, Domain::Time);
}

#[test]
fn table_never_lists_the_source_unit() {
    for domain in Domain::ALL {
        for alias in UNITS.aliases(domain) {
            let table = render_table(domain, 3.0, alias).unwrap();
            let canonical = &UNITS.get(domain, alias).unwrap().name;
            assert_eq!(table.rows.len(), UNITS.primary_units(domain).len() - 1);
            assert!(table.rows.iter().all(|r| &r.unit != canonical));
        }
    }
}

#[test]
fn table_serializes_to_json() {
    let table = render_table(Domain::Weight, 1000.0, "g").unwrap();
    let json = serde_json::to_value(&table).unwrap();
    assert_eq!(json["domain"], "weight");
    assert_eq!(json["from_unit"], "g");
    assert_eq!(json["rows"][0]["unit"], "kilograms");
    assert_eq!(json["rows"][0]["display_unit"], "kilogram");
}
