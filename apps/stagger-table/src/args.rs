use std::path::PathBuf;

use clap::Parser;

use stagger_types::{DIM2, DIM3, FieldKindId};

/// Print the compiled field-position table as JSON
#[derive(Parser, Debug, PartialEq)]
#[command(name = "stagger-table")]
#[command(about = "Print the compiled field-position table as JSON")]
pub struct Args {
    /// Only print this field kind (E, B, J or Tmp)
    #[arg(long)]
    pub field: Option<FieldKindId>,

    /// Only print this simulation dimension (2 or 3)
    #[arg(long, value_parser = parse_dim)]
    pub dim: Option<usize>,

    /// Write the table to this file instead of stdout
    #[arg(long)]
    pub out: Option<PathBuf>,
}

fn parse_dim(value: &str) -> Result<usize, String> {
    match value.parse::<usize>() {
        Ok(d) if d == DIM2 || d == DIM3 => Ok(d),
        _ => Err(format!("expected {DIM2} or {DIM3}, got {value:?}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use clap::error::ErrorKind;

    fn parse(args: &[&str]) -> Result<Args, clap::Error> {
        Args::try_parse_from(std::iter::once("stagger-table").chain(args.iter().copied()))
    }

    #[test]
    fn test_command_definition_is_valid() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_no_args_selects_everything() {
        let args = parse(&[]).unwrap();
        assert_eq!(
            args,
            Args {
                field: None,
                dim: None,
                out: None,
            }
        );
    }

    #[test]
    fn test_field_and_dim() {
        let args = parse(&["--field", "J", "--dim", "3"]).unwrap();
        assert_eq!(args.field, Some(FieldKindId::J));
        assert_eq!(args.dim, Some(3));
    }

    #[test]
    fn test_equals_form() {
        let args = parse(&["--dim=2", "--field=tmp"]).unwrap();
        assert_eq!(args.dim, Some(2));
        assert_eq!(args.field, Some(FieldKindId::Tmp));
    }

    #[test]
    fn test_out_path() {
        let args = parse(&["--out", "table.json"]).unwrap();
        assert_eq!(args.out, Some(PathBuf::from("table.json")));
    }

    #[test]
    fn test_help_is_available() {
        let err = parse(&["--help"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_rejects_dim_one() {
        let err = parse(&["--dim", "1"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
    }

    #[test]
    fn test_rejects_unknown_field() {
        let err = parse(&["--field", "H"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
    }

    #[test]
    fn test_missing_value() {
        let err = parse(&["--dim"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidValue);
    }

    #[test]
    fn test_unknown_argument() {
        let err = parse(&["--verbose"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);
    }
}
