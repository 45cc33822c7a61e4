//! Command-line arguments and request shapes
//!
//! Two positional shapes are accepted:
//! - auto-detect: `<value> <unit> [to_unit]`
//! - legacy: `<type> <value> <unit> [to_unit]`, chosen when the first
//!   token is a conversion type (time/t, weight/w, length/l, baking/b)

use clap::Parser;
use converter_core::{ConverterError, Domain};
use converter_units::{DomainSelector, UNITS};

#[derive(Parser, Debug)]
#[command(name = "converter")]
#[command(version)]
#[command(about = "Converter CLI - Convert time, weight, length, and baking units with ease", long_about = None)]
#[command(after_help = after_help())]
pub struct Cli {
    /// Install as system command
    #[arg(long)]
    pub install: bool,

    /// Print results and errors as JSON
    #[arg(long)]
    pub json: bool,

    /// Debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// <value> <unit> [to_unit], or <type> <value> <unit> [to_unit]
    #[arg(value_name = "ARGS", num_args = 0.., allow_negative_numbers = true)]
    pub args: Vec<String>,
}

/// What the user asked for
#[derive(Debug, Clone, PartialEq)]
pub enum Request {
    Help,
    Install,
    Convert {
        selector: DomainSelector,
        value: f64,
        from_unit: String,
        to_unit: String,
    },
    Table {
        selector: DomainSelector,
        value: f64,
        from_unit: String,
    },
}

impl Cli {
    pub fn request(&self) -> Result<Request, ConverterError> {
        if self.install {
            if !self.args.is_empty() {
                return Err(ConverterError::usage("--install takes no other arguments"));
            }
            return Ok(Request::Install);
        }
        parse_request(&self.args)
    }
}

/// Pick the argument shape and parse the value
pub fn parse_request(args: &[String]) -> Result<Request, ConverterError> {
    let Some(first) = args.first() else {
        return Ok(Request::Help);
    };

    let (selector, rest) = match Domain::from_token(first) {
        Some(domain) => {
            if args.len() < 3 {
                return Err(ConverterError::usage("Legacy format requires at least 3 arguments"));
            }
            (DomainSelector::Explicit(domain), &args[1..])
        }
        None => {
            if args.len() < 2 {
                return Err(ConverterError::usage("Need at least value and unit"));
            }
            (DomainSelector::Auto, args)
        }
    };

    let value = parse_value(&rest[0])?;
    let from_unit = rest[1].clone();

    Ok(match rest.get(2) {
        Some(to_unit) => Request::Convert {
            selector,
            value,
            from_unit,
            to_unit: to_unit.clone(),
        },
        None => Request::Table {
            selector,
            value,
            from_unit,
        },
    })
}

fn parse_value(token: &str) -> Result<f64, ConverterError> {
    token
        .trim()
        .parse::<f64>()
        .map_err(|_| ConverterError::invalid_number(token))
}

const EXAMPLES: &str = "\
Usage:
  converter [--install]                     # Install as system command
  converter <value> <unit>                  # Show all conversions
  converter <value> <from_unit> <to_unit>   # Specific conversion

  Legacy format (still supported):
  converter <type> <value> <unit> [to_unit] # Type-specific conversion

Examples:
  converter 60 d                        # Show all time conversions for 60 days
  converter 60 s minutes                # Convert 60 seconds to minutes
  converter 1000 g                      # Show all weight conversions for 1000 grams
  converter 5.5 kg pounds               # Convert 5.5 kg to pounds
  converter 100 cm                      # Show all length conversions for 100 cm
  converter 5 feet inches               # Convert 5 feet to inches
  converter 250 ml                      # Show all baking conversions for 250 ml
  converter 2 cups ml                   # Convert 2 cups to milliliters";

/// Examples plus the auto-detected unit list, built from the unit tables
pub fn after_help() -> String {
    let mut text = String::from(EXAMPLES);
    text.push_str("\n\nAuto-detected units:\n");
    for domain in Domain::ALL {
        let units: Vec<String> = UNITS
            .primary_units(domain)
            .iter()
            .map(|name| {
                let short = UNITS.display_aliases(domain, name);
                if short.is_empty() {
                    name.to_string()
                } else {
                    format!("{}({})", name, short.join("/"))
                }
            })
            .collect();
        text.push_str(&format!("  {}: {}\n", capitalize(domain.name()), units.join(", ")));
    }
    text
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) => c.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use converter_core::codes;

    fn args(tokens: &[&str]) -> Vec<String> {
        tokens.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_args_is_help() {
        assert_eq!(parse_request(&[]).unwrap(), Request::Help);
    }

    #[test]
    fn test_auto_table() {
        let request = parse_request(&args(&["60", "d"])).unwrap();
        assert_eq!(
            request,
            Request::Table { selector: DomainSelector::Auto, value: 60.0, from_unit: "d".into() }
        );
    }

    #[test]
    fn test_auto_convert() {
        let request = parse_request(&args(&["5.5", "kg", "pounds"])).unwrap();
        assert_eq!(
            request,
            Request::Convert {
                selector: DomainSelector::Auto,
                value: 5.5,
                from_unit: "kg".into(),
                to_unit: "pounds".into(),
            }
        );
    }

    #[test]
    fn test_legacy_shape() {
        let request = parse_request(&args(&["l", "10", "m"])).unwrap();
        assert_eq!(
            request,
            Request::Table {
                selector: DomainSelector::Explicit(Domain::Length),
                value: 10.0,
                from_unit: "m".into(),
            }
        );

        let request = parse_request(&args(&["time", "60", "s", "minutes"])).unwrap();
        assert!(matches!(
            request,
            Request::Convert { selector: DomainSelector::Explicit(Domain::Time), .. }
        ));
    }

    #[test]
    fn test_too_few_arguments() {
        let err = parse_request(&args(&["weight", "5"])).unwrap_err();
        assert_eq!(err.message, "Legacy format requires at least 3 arguments");

        let err = parse_request(&args(&["5"])).unwrap_err();
        assert_eq!(err.message, "Need at least value and unit");
        assert_eq!(err.code, codes::USAGE);
    }

    #[test]
    fn test_invalid_value() {
        let err = parse_request(&args(&["five", "kg"])).unwrap_err();
        assert_eq!(err.code, codes::INVALID_NUMBER);
    }

    #[test]
    fn test_negative_value_through_clap() {
        let cli = Cli::try_parse_from(["converter", "-40", "kg", "lb"]).unwrap();
        assert_eq!(cli.args, args(&["-40", "kg", "lb"]));
        assert!(matches!(cli.request().unwrap(), Request::Convert { value, .. } if value == -40.0));
    }

    #[test]
    fn test_flags() {
        let cli = Cli::try_parse_from(["converter", "--install"]).unwrap();
        assert_eq!(cli.request().unwrap(), Request::Install);

        let cli = Cli::try_parse_from(["converter", "2", "cups", "ml", "--json", "-v"]).unwrap();
        assert!(cli.json);
        assert!(cli.verbose);
    }

    #[test]
    fn test_install_rejects_other_arguments() {
        let cli = Cli::try_parse_from(["converter", "5", "kg", "--install"]).unwrap();
        let err = cli.request().unwrap_err();
        assert_eq!(err.code, codes::USAGE);
        assert_eq!(err.message, "--install takes no other arguments");
    }

    #[test]
    fn test_after_help_lists_units() {
        let text = after_help();
        assert!(text.contains("  Time: seconds(s/sec), minutes(m/min), hours(h/hr), days(d)"));
        assert!(text.contains("kilograms(kg)"));
        assert!(text.contains("tablespoons(tbsp)"));
        assert!(text.contains("fluid_ounces(fl_oz)"));
        assert!(text.contains("cups(c), "));
        assert!(text.contains("feet(ft)"));
    }
}
