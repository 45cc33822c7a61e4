//! Unit definitions - four fixed tables, one per domain

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;
use converter_core::Domain;
use crate::Unit;

/// Global unit registry
pub static UNITS: LazyLock<UnitRegistry> = LazyLock::new(UnitRegistry::new);

/// One domain's table: primary units in display order plus their aliases
#[derive(Debug, Default)]
struct DomainTable {
    units: HashMap<String, Unit>,
    aliases: HashMap<String, String>,
    /// Aliases that are only the singular spelling of a primary name
    singulars: HashSet<String>,
    primary: Vec<&'static str>,
}

/// Registry of all known units, keyed by domain
pub struct UnitRegistry {
    tables: HashMap<Domain, DomainTable>,
}

impl Default for UnitRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl UnitRegistry {
    pub fn new() -> Self {
        let mut registry = UnitRegistry {
            tables: HashMap::new(),
        };
        registry.register_all_units();
        registry
    }

    /// Get a unit by name or alias within one domain.
    ///
    /// The alias is lower-cased; no other normalization is applied.
    pub fn get(&self, domain: Domain, alias: &str) -> Option<&Unit> {
        let table = self.tables.get(&domain)?;
        let key = alias.to_lowercase();

        if let Some(unit) = table.units.get(&key) {
            return Some(unit);
        }
        table.aliases.get(&key).and_then(|canonical| table.units.get(canonical))
    }

    pub fn contains(&self, domain: Domain, alias: &str) -> bool {
        self.get(domain, alias).is_some()
    }

    /// Scale factor to the domain base unit
    pub fn scale(&self, domain: Domain, alias: &str) -> Option<f64> {
        self.get(domain, alias).map(|u| u.scale)
    }

    /// Canonical unit names in table display order
    pub fn primary_units(&self, domain: Domain) -> &[&'static str] {
        self.tables
            .get(&domain)
            .map(|t| t.primary.as_slice())
            .unwrap_or(&[])
    }

    /// Every accepted spelling of every unit in a domain, sorted
    pub fn aliases(&self, domain: Domain) -> Vec<&str> {
        let Some(table) = self.tables.get(&domain) else {
            return Vec::new();
        };
        let mut all: Vec<&str> = table
            .units
            .keys()
            .chain(table.aliases.keys())
            .map(|s| s.as_str())
            .collect();
        all.sort_unstable();
        all
    }

    /// Abbreviations shown next to a primary unit in help, e.g. ["h", "hr"]
    /// for "hours". Singular spellings ("cup", "foot") are left out.
    pub fn display_aliases(&self, domain: Domain, name: &str) -> Vec<&str> {
        let Some(table) = self.tables.get(&domain) else {
            return Vec::new();
        };
        let mut shown: Vec<&str> = table
            .aliases
            .iter()
            .filter(|(alias, canonical)| canonical.as_str() == name && !table.singulars.contains(*alias))
            .map(|(alias, _)| alias.as_str())
            .collect();
        shown.sort_unstable_by_key(|s| (s.len(), *s));
        shown
    }

    fn register(&mut self, domain: Domain, name: &'static str, scale: f64) {
        let table = self.tables.entry(domain).or_default();
        table.units.insert(name.to_string(), Unit::new(name, domain, scale));
        table.primary.push(name);
    }

    fn alias(&mut self, domain: Domain, alias: &str, name: &str) {
        let table = self.tables.entry(domain).or_default();
        table.aliases.insert(alias.to_string(), name.to_string());
    }

    fn singular(&mut self, domain: Domain, alias: &str, name: &str) {
        self.alias(domain, alias, name);
        if let Some(table) = self.tables.get_mut(&domain) {
            table.singulars.insert(alias.to_string());
        }
    }

    fn register_all_units(&mut self) {
        self.register_time_units();
        self.register_weight_units();
        self.register_length_units();
        self.register_baking_units();
    }

    fn register_time_units(&mut self) {
        use Domain::Time;

        self.register(Time, "seconds", 1.0);
        self.register(Time, "minutes", 60.0);
        self.register(Time, "hours", 3600.0);
        self.register(Time, "days", 86400.0);

        self.alias(Time, "sec", "seconds");
        self.alias(Time, "s", "seconds");
        self.alias(Time, "min", "minutes");
        self.alias(Time, "m", "minutes");
        self.alias(Time, "hr", "hours");
        self.alias(Time, "h", "hours");
        self.alias(Time, "d", "days");
    }

    fn register_weight_units(&mut self) {
        use Domain::Weight;

        self.register(Weight, "grams", 1.0);
        self.register(Weight, "kilograms", 1000.0);
        self.register(Weight, "pounds", 453.592);
        self.register(Weight, "ounces", 28.3495);

        self.singular(Weight, "gram", "grams");
        self.alias(Weight, "g", "grams");
        self.singular(Weight, "kilogram", "kilograms");
        self.alias(Weight, "kg", "kilograms");
        self.singular(Weight, "pound", "pounds");
        self.alias(Weight, "lb", "pounds");
        self.alias(Weight, "lbs", "pounds");
        self.singular(Weight, "ounce", "ounces");
        self.alias(Weight, "oz", "ounces");
    }

    fn register_length_units(&mut self) {
        use Domain::Length;

        self.register(Length, "millimeters", 0.001);
        self.register(Length, "centimeters", 0.01);
        self.register(Length, "meters", 1.0);
        self.register(Length, "kilometers", 1000.0);
        self.register(Length, "inches", 0.0254);
        self.register(Length, "feet", 0.3048);
        self.register(Length, "yards", 0.9144);
        self.register(Length, "miles", 1609.34);

        self.singular(Length, "millimeter", "millimeters");
        self.alias(Length, "mm", "millimeters");
        self.singular(Length, "centimeter", "centimeters");
        self.alias(Length, "cm", "centimeters");
        self.singular(Length, "meter", "meters");
        self.alias(Length, "m", "meters");
        self.singular(Length, "kilometer", "kilometers");
        self.alias(Length, "km", "kilometers");
        self.singular(Length, "inch", "inches");
        self.alias(Length, "in", "inches");
        self.singular(Length, "foot", "feet");
        self.alias(Length, "ft", "feet");
        self.singular(Length, "yard", "yards");
        self.alias(Length, "yd", "yards");
        self.singular(Length, "mile", "miles");
        self.alias(Length, "mi", "miles");
    }

    fn register_baking_units(&mut self) {
        use Domain::Baking;

        self.register(Baking, "milliliters", 1.0);
        self.register(Baking, "liters", 1000.0);
        self.register(Baking, "cups", 236.588);
        self.register(Baking, "tablespoons", 14.7868);
        self.register(Baking, "teaspoons", 4.92892);
        self.register(Baking, "fluid_ounces", 29.5735);
        self.register(Baking, "pints", 473.176);
        self.register(Baking, "quarts", 946.353);
        self.register(Baking, "gallons", 3785.41);

        self.singular(Baking, "milliliter", "milliliters");
        self.alias(Baking, "ml", "milliliters");
        self.singular(Baking, "liter", "liters");
        self.alias(Baking, "l", "liters");
        self.singular(Baking, "cup", "cups");
        self.alias(Baking, "c", "cups");
        self.singular(Baking, "tablespoon", "tablespoons");
        self.alias(Baking, "tbsp", "tablespoons");
        self.singular(Baking, "teaspoon", "teaspoons");
        self.alias(Baking, "tsp", "teaspoons");
        self.singular(Baking, "fluid_ounce", "fluid_ounces");
        self.alias(Baking, "fl_oz", "fluid_ounces");
        self.singular(Baking, "pint", "pints");
        self.alias(Baking, "pt", "pints");
        self.singular(Baking, "quart", "quarts");
        self.alias(Baking, "qt", "quarts");
        self.singular(Baking, "gallon", "gallons");
        self.alias(Baking, "gal", "gallons");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_registry() {
        let reg = UnitRegistry::new();

        assert!(reg.get(Domain::Time, "seconds").is_some());
        assert!(reg.get(Domain::Weight, "kg").is_some());
        assert!(reg.get(Domain::Baking, "fl_oz").is_some());

        // Alias resolves to its canonical unit
        assert_eq!(reg.get(Domain::Length, "ft").unwrap().name, "feet");
        assert_eq!(reg.get(Domain::Weight, "lbs").unwrap().name, "pounds");

        assert!(reg.get(Domain::Time, "unknown_xyz").is_none());
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let reg = UnitRegistry::new();
        assert_eq!(reg.scale(Domain::Weight, "KG"), Some(1000.0));
        assert_eq!(reg.scale(Domain::Baking, "Cups"), Some(236.588));
    }

    #[test]
    fn test_lookup_does_not_trim() {
        let reg = UnitRegistry::new();
        assert!(reg.get(Domain::Weight, " kg").is_none());
        assert!(reg.get(Domain::Weight, "kg ").is_none());
    }

    #[test]
    fn test_shared_alias_is_per_domain() {
        let reg = UnitRegistry::new();
        assert_eq!(reg.get(Domain::Time, "m").unwrap().name, "minutes");
        assert_eq!(reg.get(Domain::Length, "m").unwrap().name, "meters");
        assert!(reg.get(Domain::Weight, "m").is_none());
    }

    #[test]
    fn test_every_primary_unit_is_in_its_table() {
        let reg = UnitRegistry::new();
        for domain in Domain::ALL {
            assert!(!reg.primary_units(domain).is_empty());
            for name in reg.primary_units(domain) {
                assert!(reg.contains(domain, name), "{} missing from {}", name, domain);
            }
        }
    }

    #[test]
    fn test_base_unit_has_scale_one() {
        let reg = UnitRegistry::new();
        for domain in Domain::ALL {
            assert_eq!(reg.scale(domain, domain.base_unit()), Some(1.0));
        }
    }

    #[test]
    fn test_primary_order() {
        let reg = UnitRegistry::new();
        assert_eq!(reg.primary_units(Domain::Time), &["seconds", "minutes", "hours", "days"]);
        assert_eq!(
            reg.primary_units(Domain::Length),
            &["millimeters", "centimeters", "meters", "kilometers", "inches", "feet", "yards", "miles"]
        );
    }

    #[test]
    fn test_primary_scales_are_distinct() {
        let reg = UnitRegistry::new();
        for domain in Domain::ALL {
            let scales: Vec<f64> = reg
                .primary_units(domain)
                .iter()
                .filter_map(|name| reg.scale(domain, name))
                .collect();
            for (i, a) in scales.iter().enumerate() {
                for b in &scales[i + 1..] {
                    assert_ne!(a, b, "duplicate scale in {}", domain);
                }
            }
        }
    }

    #[test]
    fn test_aliases_and_display_aliases() {
        let reg = UnitRegistry::new();
        let time = reg.aliases(Domain::Time);
        assert_eq!(time.len(), 11);
        assert!(time.contains(&"hr"));

        assert_eq!(reg.display_aliases(Domain::Time, "hours"), vec!["h", "hr"]);
        assert_eq!(reg.display_aliases(Domain::Weight, "pounds"), vec!["lb", "lbs"]);
        assert_eq!(reg.display_aliases(Domain::Baking, "tablespoons"), vec!["tbsp"]);
        assert_eq!(reg.display_aliases(Domain::Baking, "fluid_ounces"), vec!["fl_oz"]);
        assert_eq!(reg.display_aliases(Domain::Baking, "cups"), vec!["c"]);
        assert_eq!(reg.display_aliases(Domain::Length, "feet"), vec!["ft"]);
        assert_eq!(reg.display_aliases(Domain::Length, "inches"), vec!["in"]);
    }
}
