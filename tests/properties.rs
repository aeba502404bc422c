use flagbind::{Options, parse};
use proptest::prelude::*;

#[derive(Debug, Default, PartialEq, Options)]
struct Cli {
    #[opt("--named-option", "-no")]
    named_option: Option<String>,
    #[opt("--flag", "-f")]
    flag: bool,
    #[opt("--name")]
    name: String,
}

const FLAGS: &[&str] = &["--named-option", "-no", "--flag", "-f", "--name"];

fn is_flag(token: &str) -> bool {
    FLAGS.iter().any(|flag| flag.eq_ignore_ascii_case(token))
}

/// Tokens that match no flag of `Cli`.
fn unknown_token() -> impl Strategy<Value = String> {
    "[-a-zA-Z0-9=]{0,12}".prop_filter("must not be a flag", |s| !is_flag(s))
}

/// Flips the case of ASCII letters where `mask` says so.
fn recase(flag: &str, mask: &[bool]) -> String {
    flag.chars()
        .zip(mask.iter().cycle())
        .map(|(c, &upper)| if upper { c.to_ascii_uppercase() } else { c.to_ascii_lowercase() })
        .collect()
}

proptest! {
    #[test]
    fn unknown_tokens_are_inert(tokens in prop::collection::vec(unknown_token(), 0..16)) {
        let parsed: Cli = parse(tokens).unwrap();
        prop_assert_eq!(parsed, Cli::default());
    }

    #[test]
    fn unknown_tokens_do_not_disturb_matches(
        before in prop::collection::vec(unknown_token(), 0..6),
        after in prop::collection::vec(unknown_token(), 0..6),
        value in "[a-z]{1,8}",
    ) {
        let mut args = before;
        args.extend(["-no".to_owned(), value.clone(), "-f".to_owned()]);
        args.extend(after);
        let parsed: Cli = parse(args).unwrap();
        prop_assert_eq!(parsed, Cli { named_option: Some(value), flag: true, name: String::new() });
    }

    #[test]
    fn flags_match_in_any_case(
        mask in prop::collection::vec(any::<bool>(), 1..8),
        value in "[a-zA-Z0-9]{1,8}",
    ) {
        let parsed: Cli = parse([recase("--flag", &mask), recase("--name", &mask), value.clone()]).unwrap();
        prop_assert!(parsed.flag);
        prop_assert_eq!(parsed.name, value);
    }

    #[test]
    fn repeated_flag_is_idempotent(times in 1usize..8) {
        let parsed: Cli = parse(std::iter::repeat_n("-f", times)).unwrap();
        prop_assert_eq!(parsed, Cli { flag: true, ..Cli::default() });
    }
}
