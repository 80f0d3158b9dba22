mod common;

use std::{borrow::Cow, collections::BTreeMap, num::NonZeroUsize};

use common::{Id, expected, one_and_trailer, one_and_two, parse_present, parser, parser_with};
use lineopt::{Arity, LineParser, OptionParser, ParserConfig, Schema, UsageError, Value};

fn check<const N: usize>(
    parser: &OptionParser<Id>,
    cases: [(&'static str, BTreeMap<Id, Value<'static>>); N],
) {
    for (line, expected) in cases {
        assert_eq!(parse_present(parser, line), expected, "line: {line:?}");
    }
}

#[test]
fn single_option() {
    let parser = parser(Schema::new().option("one", ["-1", "--one"]));

    check(
        &parser,
        [
            ("", expected([])),
            ("-1 hey", expected([("one", "hey".into())])),
            ("--one hi", expected([("one", "hi".into())])),
            ("-1hello", expected([("one", "hello".into())])),
        ],
    );
}

#[test]
fn trailer_keeps_whitespace() {
    let parser = one_and_trailer();

    for (line, one, trailer) in [
        ("", None, ""),
        ("hi hello", None, "hi hello"),
        ("-1hey hi hello", Some("hey"), "hi hello"),
        ("-1hey   hi \t hello  ", Some("hey"), "hi \t hello  "),
    ] {
        let result = parser.parse(line).expect("line should parse");

        assert_eq!(
            result.option(&"one").and_then(Value::as_str),
            one,
            "line: {line:?}"
        );
        assert_eq!(
            result.positional(&"trailer"),
            Some(&Value::from(trailer)),
            "line: {line:?}"
        );
        assert!(result.extra.is_empty());
    }
}

#[test]
fn trailer_after_argument() {
    let parser = parser(
        Schema::new()
            .option("one", ["-1", "--one"])
            .argument("arg", Arity::ONE)
            .argument("trailer", Arity::Trailer),
    );

    check(
        &parser,
        [
            ("arg1", expected([("arg", "arg1".into())])),
            (
                "hi hello",
                expected([("arg", "hi".into()), ("trailer", "hello".into())]),
            ),
            (
                "arg2 -1hey hi hello",
                expected([
                    ("one", "hey".into()),
                    ("arg", "arg2".into()),
                    ("trailer", "hi hello".into()),
                ]),
            ),
            (
                "-1hey arg2 hi hello",
                expected([
                    ("one", "hey".into()),
                    ("arg", "arg2".into()),
                    ("trailer", "hi hello".into()),
                ]),
            ),
            (
                "-- -1hey arg2 hi hello",
                expected([("arg", "-1hey".into()), ("trailer", "arg2 hi hello".into())]),
            ),
            (
                "-1hey -- arg2 hi hello",
                expected([
                    ("one", "hey".into()),
                    ("arg", "arg2".into()),
                    ("trailer", "hi hello".into()),
                ]),
            ),
            (
                "-1hey arg2 -- hi hello",
                expected([
                    ("one", "hey".into()),
                    ("arg", "arg2".into()),
                    ("trailer", "hi hello".into()),
                ]),
            ),
            (
                "-1hey arg2 hi -- hello",
                expected([
                    ("one", "hey".into()),
                    ("arg", "arg2".into()),
                    ("trailer", "hi -- hello".into()),
                ]),
            ),
        ],
    );
}

#[test]
fn trailer_after_two_value_argument() {
    let parser = parser(
        Schema::new()
            .option("one", ["-1", "--one"])
            .argument("arg", Arity::Exactly(NonZeroUsize::new(2).unwrap()))
            .argument("trailer", Arity::Trailer),
    );

    check(
        &parser,
        [
            ("arg1 arg2", expected([("arg", ["arg1", "arg2"].into())])),
            (
                "hey hi hello",
                expected([("arg", ["hey", "hi"].into()), ("trailer", "hello".into())]),
            ),
            (
                "arg3 -1hey arg4 hi hello",
                expected([
                    ("one", "hey".into()),
                    ("arg", ["arg3", "arg4"].into()),
                    ("trailer", "hi hello".into()),
                ]),
            ),
            (
                "-1hey arg3 arg4 hi hello",
                expected([
                    ("one", "hey".into()),
                    ("arg", ["arg3", "arg4"].into()),
                    ("trailer", "hi hello".into()),
                ]),
            ),
            (
                "-- arg3 -1hey arg4 hi hello",
                expected([
                    ("arg", ["arg3", "-1hey"].into()),
                    ("trailer", "arg4 hi hello".into()),
                ]),
            ),
            (
                "arg3 -- -1hey arg4 hi hello",
                expected([
                    ("arg", ["arg3", "-1hey"].into()),
                    ("trailer", "arg4 hi hello".into()),
                ]),
            ),
            (
                "arg3 -1hey -- arg4 hi hello",
                expected([
                    ("one", "hey".into()),
                    ("arg", ["arg3", "arg4"].into()),
                    ("trailer", "hi hello".into()),
                ]),
            ),
            (
                "arg3 -1hey arg4 -- hi hello",
                expected([
                    ("one", "hey".into()),
                    ("arg", ["arg3", "arg4"].into()),
                    ("trailer", "hi hello".into()),
                ]),
            ),
            (
                "arg3 -1hey arg4 hi -- hello",
                expected([
                    ("one", "hey".into()),
                    ("arg", ["arg3", "arg4"].into()),
                    ("trailer", "hi -- hello".into()),
                ]),
            ),
        ],
    );
}

#[test]
fn clusters_and_attached_values() {
    let parser = one_and_two();

    check(
        &parser,
        [
            (
                "-21hey",
                expected([("one", "hey".into()), ("two", true.into())]),
            ),
            ("-12hey", expected([("one", "2hey".into())])),
            ("--one=--two", expected([("one", "--two".into())])),
            ("-1=-2", expected([("one", "=-2".into())])),
            (
                "-21=-2",
                expected([("one", "=-2".into()), ("two", true.into())]),
            ),
            ("--one=", expected([])),
        ],
    );
}

#[test]
fn flag_with_value_is_rejected() {
    let error = one_and_two().parse("--two=two").unwrap_err();

    assert_eq!(
        error,
        UsageError::BadOptionUsage {
            spelling: "--two".to_owned(),
            message: "--two option does not take a value".to_owned(),
        }
    );
}

#[test]
fn missing_option_value() {
    let parser = one_and_two();

    let error = parser.parse("-2 -1").unwrap_err();
    assert_eq!(error.spelling(), Some("-1"));
    assert_eq!(error.to_string(), "-1 option requires an argument");

    let error = parser.parse("--one").unwrap_err();
    assert_eq!(error.to_string(), "--one option requires an argument");
}

#[test]
fn option_values_can_look_like_options() {
    let result = one_and_two().parse("--one -2").unwrap();

    assert_eq!(result.option(&"one"), Some(&Value::from("-2")));
    assert!(!result.flag(&"two"));
}

#[test]
fn multi_value_option() {
    let parser = parser(Schema::new().option_with_arity(
        "point",
        ["-p", "--point"],
        NonZeroUsize::new(2).unwrap(),
    ));

    check(
        &parser,
        [
            ("--point 1 2", expected([("point", ["1", "2"].into())])),
            ("--point=1 2", expected([("point", ["1", "2"].into())])),
            ("-p1 2", expected([("point", ["1", "2"].into())])),
        ],
    );

    let error = parser.parse("--point 1").unwrap_err();
    assert_eq!(error.to_string(), "--point option requires 2 arguments");
}

#[test]
fn rest_of_the_tokens() {
    let parser = parser(
        Schema::new()
            .argument("arg1", Arity::ONE)
            .argument("arg2", Arity::Rest),
    );

    for (line, arg2) in [
        ("one", &[][..]),
        ("one two", &["two"][..]),
        ("one  two   three", &["two", "three"][..]),
    ] {
        let result = parser.parse(line).unwrap();

        assert_eq!(result.positional(&"arg1"), Some(&Value::from("one")));
        assert_eq!(
            result.positional(&"arg2"),
            Some(&Value::Multiple(arg2.iter().map(|&s| Cow::Borrowed(s)).collect())),
            "line: {line:?}"
        );
    }
}

#[test]
fn alternate_prefix() {
    let config = ParserConfig::default()
        .with_prefixes(["/"])
        .with_end_of_options("//");

    let parser = parser_with(
        Schema::new()
            .option("one", ["/1", "/one"])
            .switch("two", ["/2", "/two"], ["/no-two"])
            .argument("trailer", Arity::Trailer),
        config,
    );

    check(
        &parser,
        [
            ("/1 arg1", expected([("one", "arg1".into())])),
            ("/one arg2", expected([("one", "arg2".into())])),
            ("/one=arg3", expected([("one", "arg3".into())])),
            ("/2", expected([("two", true.into())])),
            ("/two", expected([("two", true.into())])),
            ("/no-two", expected([])),
            ("trailer here", expected([("trailer", "trailer here".into())])),
            (
                "-- trailer here",
                expected([("trailer", "-- trailer here".into())]),
            ),
            ("// trailer here", expected([("trailer", "trailer here".into())])),
            (
                "/two // trailer here",
                expected([("two", true.into()), ("trailer", "trailer here".into())]),
            ),
            (
                "// /two trailer here",
                expected([("trailer", "/two trailer here".into())]),
            ),
            ("-1 arg1", expected([("trailer", "-1 arg1".into())])),
            ("-2 arg2", expected([("trailer", "-2 arg2".into())])),
        ],
    );

    assert_eq!(
        parser.parse("/two /no-two").unwrap().option(&"two"),
        Some(&Value::Flag(false))
    );
}

#[test]
fn extra_tokens_are_left_over() {
    let parser = parser(Schema::new().argument("arg", Arity::ONE));

    let result = parser.parse("a b  c").unwrap();
    assert_eq!(result.positional(&"arg"), Some(&Value::from("a")));
    assert_eq!(result.extra, ["b", "c"]);

    let error = result.reject_extra().unwrap_err();
    assert_eq!(error.to_string(), "got unexpected extra arguments (b c)");

    let error = parser.parse("a b").unwrap().reject_extra().unwrap_err();
    assert_eq!(error.to_string(), "got unexpected extra argument (b)");

    assert!(parser.parse("a").unwrap().reject_extra().is_ok());
}

#[test]
fn missing_positional() {
    let parser = parser(
        Schema::new()
            .argument("channel", Arity::ONE)
            .argument("pair", Arity::Exactly(NonZeroUsize::new(2).unwrap())),
    );

    let error = parser.parse("").unwrap_err();
    assert!(matches!(error, UsageError::Arity(_)));

    let UsageError::Arity(shortfall) = parser.parse("#chan x").unwrap_err() else {
        panic!("expected an arity error");
    };
    assert_eq!(shortfall.expected, 2);
    assert_eq!(shortfall.available, 1);
}

#[test]
fn lone_prefix_is_positional() {
    let parser = parser(
        Schema::new()
            .option("one", ["-1", "--one"])
            .argument("rest", Arity::Rest),
    );

    let result = parser.parse("- -1 x").unwrap();
    assert_eq!(result.option(&"one"), Some(&Value::from("x")));
    assert_eq!(result.positional(&"rest"), Some(&Value::from(["-"])));
}

#[test]
fn order_records_every_occurrence() {
    let parser = parser(
        Schema::new()
            .option("one", ["-1", "--one"])
            .switch("two", ["-2", "--two"], ["--no-two"])
            .argument("rest", Arity::Rest),
    );

    let result = parser.parse("-2 --one a pos -2 --no-two --one b").unwrap();

    assert_eq!(
        result.order,
        [
            ("two", Value::Flag(true)),
            ("one", Value::from("a")),
            ("two", Value::Flag(true)),
            ("two", Value::Flag(false)),
            ("one", Value::from("b")),
            ("rest", Value::from(["pos"])),
        ]
    );
    assert_eq!(result.option(&"one"), Some(&Value::from("b")));
    assert!(!result.flag(&"two"));
}

#[test]
fn values_borrow_from_the_line() {
    let parser = one_and_trailer();
    let line = String::from("--one value the trailer");
    let result = parser.parse(&line).unwrap();

    let Some(Value::Single(value)) = result.option(&"one") else {
        panic!("expected a single value");
    };
    assert!(matches!(value, Cow::Borrowed(_)));

    let owned = result
        .positional(&"trailer")
        .cloned()
        .map(Value::into_owned);
    drop(result);
    drop(line);

    assert_eq!(owned, Some(Value::from("the trailer")));
}
