use crate::base;

/// Output of a successful command invocation, to be written to stdout.
#[derive(Debug, PartialEq, Eq)]
pub enum Output {
    Str(String),
    Table(base::Table),
}

impl std::fmt::Display for Output {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Output::Str(s) => {
                if s.ends_with('\n') {
                    write!(f, "{}", s)
                } else {
                    writeln!(f, "{}", s)
                }
            }
            Output::Table(table) => write!(f, "{}", table),
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(Output::Str("asdf".into()), "asdf\n")]
    #[case(Output::Str("asdf\n".into()), "asdf\n")]
    #[case(Output::Str("".into()), "\n")]
    fn test_to_string(#[case] output: Output, #[case] want: &str) {
        assert_eq!(output.to_string(), want)
    }

    #[test]
    fn test_table_to_string() {
        let table = base::Table {
            chart: base::Chart::zeroed("d".try_into().unwrap(), base::Period::Daily),
            color: false,
        };
        assert_eq!(
            Output::Table(table).to_string(),
            "2015-03-30 + 0.00 30 Mar\n     total = 0.00\n"
        );
    }
}
