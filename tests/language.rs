use std::fs;

use letcalc::{
    Number, Options, evaluate_block, get_result,
    error::{BlockError, ParseError, RuntimeError},
    run_program, split_blocks,
};
use walkdir::WalkDir;

#[test]
fn program_fixtures_match_expected_output() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/programs").into_iter()
                                      .filter_map(Result::ok)
                                      .filter(|e| e.path().extension().is_some_and(|ext| ext == "let"))
    {
        let path = entry.path();
        let source =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
        let expected_path = path.with_extension("out");
        let expected = fs::read_to_string(&expected_path).unwrap_or_else(|e| {
                                                              panic!("Failed to read {expected_path:?}: {e}")
                                                          });

        count += 1;
        let actual = get_result(&source, &Options::default());
        let expected: Vec<&str> = expected.lines().collect();
        assert_eq!(actual, expected, "output of {path:?} differs");
    }

    assert!(count > 0, "No programs found in tests/programs");
}

fn evaluate(src: &str) -> Result<Number, BlockError> {
    evaluate_block(src, &Options::default())
}

fn assert_value(src: &str, expected: Number) {
    match evaluate(src) {
        Ok(value) => assert_eq!(value, expected, "wrong value for {src}"),
        Err(e) => panic!("Block failed: {src}\nError: {e}"),
    }
}

fn assert_error(src: &str) -> BlockError {
    match evaluate(src) {
        Ok(value) => panic!("Block succeeded with {value} but was expected to fail: {src}"),
        Err(e) => e,
    }
}

#[test]
fn integer_arithmetic() {
    assert_value("let x = 2; in x + 3 end;", Number::Integer(5));
    assert_value("let x = 7; in x * 9 end;", Number::Integer(63));
    assert_value("let x = 8; in x - 5 end;", Number::Integer(3));
    assert_value("let x = 10; in x / 2 end;", Number::Integer(5));
    assert_value("let x = 7; in x / 2 end;", Number::Integer(3));
    assert_value("let x = -7; in x / 2 end;", Number::Integer(-3));
}

#[test]
fn real_operands_promote_the_result() {
    assert_value("let x = 2.5; in x * 2 end;", Number::Real(5.0));
    assert_value("let x = 1; in x + 0.5 end;", Number::Real(1.5));
    assert_value("let x = 3; y = 2.0; in x / y end;", Number::Real(1.5));
    assert_value("let x = 1.0; in x end;", Number::Real(1.0));
}

#[test]
fn precedence_and_associativity() {
    assert_value("let x = 0; in 2 + 3 * 4 end;", Number::Integer(14));
    assert_value("let x = 0; in (2 + 3) * 4 end;", Number::Integer(20));
    assert_value("let x = 0; in 10 - 4 - 3 end;", Number::Integer(3));
    assert_value("let x = 0; in 8 / 2 / 2 end;", Number::Integer(2));
    assert_value("let x = 0; in 2 * 3 / 4 end;", Number::Integer(1));
    assert_value("let x = 0; in -2 * 3 end;", Number::Integer(-6));
}

#[test]
fn negation_keeps_the_type() {
    assert_value("let x = 4; in -x end;", Number::Integer(-4));
    assert_value("let x = 4.5; in -x end;", Number::Real(-4.5));
    assert_value("let x = 4; in --x end;", Number::Integer(4));
    assert_value("let x = 4; in 1 - -x end;", Number::Integer(5));
}

#[test]
fn declarations_see_earlier_declarations() {
    assert_value("let x = 2; y = x * 3; z = y + x; in z end;",
                 Number::Integer(8));
    assert_error("let y = x; x = 1; in y end;");
}

#[test]
fn redeclaration_keeps_the_last_value() {
    assert_value("let x = 1; x = 2.5; in x end;", Number::Real(2.5));
    assert_value("let x = 1; x = x + 1; in x end;", Number::Integer(2));
}

#[test]
fn division_by_zero_is_error() {
    let e = assert_error("let x = 0; in 10 / x end;");
    assert_eq!(e, BlockError::Runtime(RuntimeError::DivisionByZero { line: 1 }));
    assert!(!e.is_syntactic());

    assert_error("let x = 0.0; in 10 / x end;");
    assert_error("let x = 1; in x / (x - 1) end;");
}

#[test]
fn unknown_variable_is_error() {
    let e = assert_error("let x = 1; in x + y end;");
    assert_eq!(e,
               BlockError::Runtime(RuntimeError::UnknownVariable { name: "y".to_string(),
                                                                   line: 1, }));
}

#[test]
fn structural_mismatches_are_errors() {
    assert!(assert_error("let x = 1 in x end;").is_syntactic());
    assert_error("let x = 1; in x end");
    assert_error("let x = 1; in x ;");
    assert_error("let x = 1; x end;");
    assert_error("x = 1; in x end;");
    assert_error("let in 1 end;");
    assert_error("let x = 1; in (x + 1 end;");
    assert_error("let x = 1; in x + 1) end;");
    assert_error("let x = 1; in 1 + end;");
    assert_error("let x = ; in 1 end;");
    assert_error("");
}

#[test]
fn trailing_tokens_are_errors() {
    let e = assert_error("let x = 1; in x end; x");
    assert!(matches!(e,
                     BlockError::Parse(ParseError::UnexpectedTrailingTokens { .. })));
    assert_error("let x = 1; in x end;;");
}

#[test]
fn lexical_errors_are_errors() {
    let e = assert_error("let x = 1 $ 2; in x end;");
    assert!(matches!(e, BlockError::Parse(ParseError::InvalidToken { .. })));
    assert_error("let x = 3.; in x end;");
    assert_error("let x = 99999999999999999999; in x end;");
}

#[test]
fn first_failure_is_reported() {
    let e = assert_error("let x = 1 / 0;\nin y end;");
    assert_eq!(e, BlockError::Runtime(RuntimeError::DivisionByZero { line: 1 }));

    let e = assert_error("let x = 1;\nin x +\n end;");
    assert!(matches!(e,
                     BlockError::Parse(ParseError::UnexpectedToken { line: 3, .. })));
}

#[test]
fn syntax_failures_outrank_evaluation_failures() {
    let e = assert_error("let x = 1 / 0;\nin x end");
    assert!(matches!(e,
                     BlockError::Parse(ParseError::UnexpectedEndOfInput { line: 2, .. })));

    let e = assert_error("let x = 0; in (10 / x end;");
    assert!(e.is_syntactic());

    let e = assert_error("let x = y; in x end;");
    assert_eq!(e,
               BlockError::Runtime(RuntimeError::UnknownVariable { name: "y".to_string(),
                                                                   line: 1, }));
}

#[test]
fn overflow_is_error() {
    assert_error("let x = 9223372036854775807; in x + 1 end;");
    assert_error("let x = 9223372036854775807; in x * 2 end;");
    assert_error("let x = 0 - 9223372036854775807 - 1; in -x end;");
    assert_error("let x = 0 - 9223372036854775807 - 1; in x / -1 end;");

    let huge = format!("let x = {}.0; in x * 10 end;", "9".repeat(308));
    assert_error(&huge);

    let too_large = format!("let x = 1{}.0; in x end;", "0".repeat(400));
    assert!(assert_error(&too_large).is_syntactic());
}

#[test]
fn mixed_arithmetic_promotes_any_integer() {
    assert_value("let x = 9007199254740993; in x * 1.0 end;",
                 Number::Real(9_007_199_254_740_992.0));
    assert_value("let x = 9223372036854775807; in x + 0.5 end;",
                 Number::Real(9_223_372_036_854_775_808.0));
    assert_value("let x = 9007199254740993; in if x > 1.5 then 1 else 0 end;",
                 Number::Integer(1));
}

#[test]
fn type_annotations_convert_values() {
    assert_value("let x : int = 7.9; in x end;", Number::Integer(7));
    assert_value("let x : int = -7.9; in x end;", Number::Integer(-7));
    assert_value("let x : real = 3; in x end;", Number::Real(3.0));
    assert_value("let x : int = 3; in x end;", Number::Integer(3));
    assert_error("let x : bool = 3; in x end;");
    assert_error("let x : = 3; in x end;");
}

#[test]
fn casts() {
    assert_value("let x = 3; in real(x) / 2 end;", Number::Real(1.5));
    assert_value("let x = 3.99; in int(x) end;", Number::Integer(3));
    assert_value("let x = 2.5; in int (x * 3) end;", Number::Integer(7));
    assert_value("let x = 7; in INT(x / 2) end;", Number::Integer(3));
    assert_error("let x = 9999999999999999999.0; in int(x) end;");
    assert_error("let x = 9007199254740993; in real(x) end;");
    assert_error("let x = 1; in int x end;");
}

#[test]
fn conditionals() {
    assert_value("let a = 3; b = 4; in if a < b then a else b end;",
                 Number::Integer(3));
    assert_value("let a = 3; b = 4; in if a >= b then a else b end;",
                 Number::Integer(4));
    assert_value("let a = 3; in if a <= 3 then 1 else 0 end;", Number::Integer(1));
    assert_value("let a = 3; in if a > 3 then 1 else 0 end;", Number::Integer(0));
    assert_value("let a = 3; in if a != 3 then 1 else 0 end;", Number::Integer(0));
    assert_value("let a = 3; in if a <> 4 then 1 else 0 end;", Number::Integer(1));
    assert_value("let a = 2; in if a == 2.0 then 1 else 0 end;", Number::Integer(1));
    assert_value("let a = 1; in if a < 2 then if a < 1 then 10 else 20 else 30 end;",
                 Number::Integer(20));
    assert_value("let a = 1; in 1 + (if a > 0 then 2 else 3) end;",
                 Number::Integer(3));
}

#[test]
fn untaken_branch_may_fail_to_evaluate() {
    assert_value("let x = 0; in if x == 0 then 1 else 10 / x end;",
                 Number::Integer(1));
    assert_value("let x = 0; in if x <> 0 then y else 2 end;", Number::Integer(2));
    assert_error("let x = 0; in if x == 0 then 10 / x else 1 end;");
}

#[test]
fn syntax_errors_in_either_branch_fail() {
    assert_error("let x = 0; in if x == 0 then 1 else (2 end;");
    assert_error("let x = 0; in if x == 0 then 1 2 else 3 end;");
    assert_error("let x = 0; in if x then 1 else 2 end;");
    assert_error("let x = 0; in if y == 0 then 1 else 2 end;");
    assert_error("let x = 1; in if x > 0 then 1 end;");
    assert_error("let x = 0; in if x == 0 then 1 else 10 / x + end;");
    assert_error("let x = 1; in if x == 0 then y + else 2 end;");
    assert_error("let x = 0; in if x == 0 then 1 else (10 / x end;");
    assert_error("let x = 1; in if y < then 1 else 2 end;");
}

#[test]
fn comparison_tolerance_is_configurable() {
    let src = "let a = 0.1; b = 0.2; in if a + b == 0.3 then 1 else 0 end;";
    assert_value(src, Number::Integer(1));

    let strict = Options { epsilon: 0.0,
                           ..Options::default() };
    assert_eq!(evaluate_block(src, &strict).unwrap(), Number::Integer(0));
}

#[test]
fn nesting_depth_is_limited() {
    let deep = format!("let x = {}1{}; in x end;", "(".repeat(100), ")".repeat(100));
    assert_value(&deep, Number::Integer(1));

    let shallow = Options { max_depth: 3,
                            ..Options::default() };
    assert_eq!(evaluate_block("let x = ((1)); in x end;", &shallow).unwrap(),
               Number::Integer(1));
    let e = evaluate_block("let x = ((((1)))); in x end;", &shallow).unwrap_err();
    assert!(matches!(e,
                     BlockError::Parse(ParseError::NestingTooDeep { limit: 3, .. })));
    assert!(evaluate_block("let x = ----1; in x end;", &shallow).is_err());
}

/// Runs `test` on a thread with the stack size of a Linux main thread, which
/// is where the binary evaluates.
fn on_main_sized_stack(test: impl FnOnce() + Send + 'static) {
    std::thread::Builder::new().stack_size(8 * 1024 * 1024)
                               .spawn(test)
                               .expect("Failed to spawn test thread")
                               .join()
                               .expect("Test thread panicked");
}

fn nested_ifs(depth: usize) -> String {
    format!("let x = 1; in {}x{} end;",
            "if x < 2 then ".repeat(depth),
            " else 0".repeat(depth))
}

fn nested_casts(depth: usize) -> String {
    format!("let x = 1; in {}x{} end;", "int(".repeat(depth), ")".repeat(depth))
}

#[test]
fn default_depth_limit_holds_for_ifs_and_casts() {
    on_main_sized_stack(|| {
        let limit = Options::default().max_depth;

        assert_value(&nested_ifs(limit), Number::Integer(1));
        assert_value(&nested_casts(limit), Number::Integer(1));

        let e = assert_error(&nested_ifs(limit + 1));
        assert!(matches!(e,
                         BlockError::Parse(ParseError::NestingTooDeep { limit: 256, .. })));
        let e = assert_error(&nested_casts(limit + 1));
        assert!(matches!(e,
                         BlockError::Parse(ParseError::NestingTooDeep { limit: 256, .. })));
    });
}

#[test]
fn keywords_ignore_case() {
    assert_value("LET x = 1; In x End;", Number::Integer(1));
    assert_value("let Let_x = 1; in Let_x end;", Number::Integer(1));
    assert_error("let X = 1; in x end;");
}

#[test]
fn comments_are_skipped() {
    assert_value("let x = 2; // two\n in x /* times */ * 3 end;",
                 Number::Integer(6));
}

#[test]
fn blocks_do_not_share_state() {
    let results = run_program("let x=1; in x end;\nlet y=x; in y end;",
                              &Options::default());
    assert_eq!(results.len(), 2);
    assert_eq!(results[0], Ok(Number::Integer(1)));
    assert!(results[1].is_err());

    let results = get_result("let x = 1 / 0; in 1 end;\nlet z = 4; in z end;",
                             &Options::default());
    assert_eq!(results, vec!["Error", "4"]);
}

#[test]
fn program_is_split_at_each_let() {
    let blocks = split_blocks("junk\nlet a = 1; in a end;\n\nlet b = 2; in b end; trailing");
    assert_eq!(blocks.len(), 3);
    assert_eq!(blocks[0].text, "junk\n");
    assert_eq!(blocks[0].line, 1);
    assert_eq!(blocks[1].text, "let a = 1; in a end;\n\n");
    assert_eq!(blocks[1].line, 2);
    assert_eq!(blocks[2].text, "let b = 2; in b end; trailing");
    assert_eq!(blocks[2].line, 4);

    assert!(split_blocks("  \n// nothing here\n").is_empty());
    assert_eq!(get_result("junk\nlet a = 1; in a end;", &Options::default()),
               vec!["Error", "1"]);
}

#[test]
fn errors_report_lines_of_the_whole_program() {
    let results = run_program("let a = 1; in a end;\n\nlet b = 1;\nin b / 0 end;",
                              &Options::default());
    assert_eq!(results[1],
               Err(BlockError::Runtime(RuntimeError::DivisionByZero { line: 4 })));
}
