use pretty_assertions::assert_eq;

use super::*;

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(ToString::to_string).collect()
}

#[test]
fn defaults_match_the_evaluator() {
    let (positionals, options) = parse_run_args(&args(&["prog.jam"])).unwrap();
    assert_eq!(positionals, args(&["prog.jam"]));
    assert_eq!(options, RunOptions::default());
    assert_eq!(options.eval_config(), EvalConfig::default());
    assert_eq!(options.check_config(), CheckConfig::default());
}

#[test]
fn every_flag_is_recognized() {
    let (positionals, options) = parse_run_args(&args(&[
        "--args=need",
        "prog.jam",
        "--lists=Name",
        "--max-depth=none",
        "--print-depth=7",
        "--flat-scopes",
        "--stats",
    ]))
    .unwrap();
    assert_eq!(positionals, args(&["prog.jam"]));
    assert_eq!(options.policy, EvalPolicy::new(Discipline::Need, Discipline::Name));
    assert_eq!(options.max_depth, None);
    assert_eq!(options.print_depth, 7);
    assert_eq!(options.scope_mode, ScopeMode::Flat);
    assert!(options.stats);

    let config = options.eval_config();
    assert_eq!(config.max_depth, None);
    assert!(config.counters);
}

#[test]
fn later_flags_win() {
    let (_, options) =
        parse_run_args(&args(&["--max-depth=10", "--max-depth=20", "--args=name", "--args=value"]))
            .unwrap();
    assert_eq!(options.max_depth, Some(20));
    assert_eq!(options.policy.args, Discipline::Value);
}

#[test]
fn bad_values_are_reported() {
    assert_eq!(
        parse_run_args(&args(&["--args=lazy"])).unwrap_err(),
        OptionError::Discipline(UnknownDiscipline("lazy".to_string()))
    );
    let err = parse_run_args(&args(&["--max-depth=0"])).unwrap_err();
    assert_eq!(
        err.to_string(),
        "invalid value `0` for `--max-depth` (expected a positive integer or `none`)"
    );
    assert!(matches!(
        parse_run_args(&args(&["--print-depth=x"])),
        Err(OptionError::InvalidValue { flag: "--print-depth", .. })
    ));
    assert_eq!(
        parse_run_args(&args(&["--verbose"])).unwrap_err(),
        OptionError::UnknownOption("--verbose".to_string())
    );
}

#[test]
fn positional_policy() {
    let mut options = RunOptions::default();
    options.apply_positional_policy(&args(&["name"])).unwrap();
    assert_eq!(options.policy, EvalPolicy::new(Discipline::Name, Discipline::Value));

    options.apply_positional_policy(&args(&["need", "need"])).unwrap();
    assert_eq!(options.policy, EvalPolicy::new(Discipline::Need, Discipline::Need));

    assert_eq!(
        options
            .apply_positional_policy(&args(&["value", "value", "extra"]))
            .unwrap_err(),
        OptionError::UnexpectedArgument("extra".to_string())
    );
    assert!(options.apply_positional_policy(&args(&["eager"])).is_err());
}
