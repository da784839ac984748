#[cfg(test)]
use pretty_assertions::assert_eq;

use lispy::{Engine, EngineOptions};

mod cases;

#[test]
fn test_all_cases() {
    let engine = Engine::new(EngineOptions::default());
    for case in cases::TEST_CASES.iter() {
        let result = engine
            .run(case.input)
            .unwrap_or_else(|e| panic!("Test case '{}' failed to parse: {}", case.name, e));
        assert_eq!(
            result.to_string(),
            case.printed,
            "Test case '{}' failed",
            case.name
        );
    }
}

#[test]
fn test_stages_match_engine() {
    let engine = Engine::new(EngineOptions::default());
    for case in cases::TEST_CASES.iter() {
        let tree = lispy::parser::parse(case.input).unwrap();
        let staged = lispy::format(&lispy::evaluate(lispy::read(&tree)));
        assert_eq!(
            staged,
            engine.run(case.input).unwrap().to_string(),
            "Test case '{}' differs between stages and engine",
            case.name
        );
    }
}
