//! Tests for single-answer prompt tables

use rstest::rstest;

use interact::application::Flow;
use interact::domain::{Body, CaseSensitivity, InteractionBuilder, Node};
use interact::util::testing::{CapturedOutput, ScriptedInput};

fn alpha_beta(case: CaseSensitivity) -> Node {
    let builder = InteractionBuilder::new();
    let configure = |prompt: interact::domain::PromptBuilder| {
        prompt
            .answer("alpha", |answer| {
                answer
                    .run_action(|_, output, _| output.write_line("alpha chosen"))
                    .and_exit()
            })
            .answer("beta", |answer| {
                answer
                    .run_action(|_, output, _| output.write_line("beta chosen"))
                    .and_exit()
            })
    };
    match case {
        CaseSensitivity::Sensitive => builder.prompt("Pick one", configure).build(),
        CaseSensitivity::Insensitive => builder
            .prompt_case_insensitive("Pick one", configure)
            .build(),
    }
}

#[rstest]
#[case("alpha")]
#[case("Alpha")]
#[case("ALPHA")]
fn given_case_insensitive_table_when_answering_any_case_then_matches(#[case] answer: &str) {
    // Arrange
    let mut root = alpha_beta(CaseSensitivity::Insensitive);
    let mut input = ScriptedInput::new([answer]);
    let mut output = CapturedOutput::new();

    // Act
    let flow = root.run(&mut input, &mut output).unwrap();

    // Assert
    assert_eq!(flow, Flow::Exit);
    assert!(output.text().contains("alpha chosen"));
    assert_eq!(output.count("[alpha, beta]: "), 1);
}

#[test]
fn given_case_sensitive_table_when_answering_wrong_case_then_reprompts() {
    // Arrange
    let mut root = alpha_beta(CaseSensitivity::Sensitive);
    let mut input = ScriptedInput::new(["Alpha", "ALPHA", "alpha"]);
    let mut output = CapturedOutput::new();

    // Act
    root.run(&mut input, &mut output).unwrap();

    // Assert
    assert_eq!(output.count("[alpha, beta]: "), 3);
    assert!(output.text().contains("alpha chosen"));
    assert_eq!(input.remaining(), 0);
}

#[rstest]
#[case(" alpha")]
#[case("alpha ")]
#[case("gamma")]
#[case("")]
fn given_unmatched_answer_when_answering_then_reprompts(#[case] bad: &str) {
    // Arrange
    let mut root = alpha_beta(CaseSensitivity::Insensitive);
    let mut input = ScriptedInput::new([bad, "beta"]);
    let mut output = CapturedOutput::new();

    // Act
    root.run(&mut input, &mut output).unwrap();

    // Assert
    assert_eq!(output.count("[alpha, beta]: "), 2);
    assert!(output.text().contains("beta chosen"));
    assert!(!output.text().contains("alpha chosen"));
}

#[test]
fn given_heading_when_rendering_then_heading_precedes_choices() {
    // Arrange
    let mut root = alpha_beta(CaseSensitivity::Sensitive);
    let mut input = ScriptedInput::new(["beta"]);
    let mut output = CapturedOutput::new();

    // Act
    root.run(&mut input, &mut output).unwrap();

    // Assert
    // the chosen child prints its (empty) intro before its action runs
    assert_eq!(
        output.lines(),
        vec!["", "Pick one", "[alpha, beta]: ", "beta chosen"]
    );
}

#[test]
fn given_blank_heading_when_rendering_then_only_choices_are_shown() {
    // Arrange
    let mut root = InteractionBuilder::new()
        .prompt("  ", |prompt| {
            prompt.answer("go", |answer| {
                answer
                    .run_action(|_, output, _| output.write_line("went"))
                    .and_exit()
            })
        })
        .build();
    let mut input = ScriptedInput::new(["go"]);
    let mut output = CapturedOutput::new();

    // Act
    root.run(&mut input, &mut output).unwrap();

    // Assert
    assert_eq!(output.text(), "\n[go]: \nwent\n");
}

#[test]
fn given_keys_equal_ignoring_case_when_building_insensitive_then_last_child_replaces_first() {
    // Arrange
    let mut root = InteractionBuilder::new()
        .prompt_case_insensitive("Sure?", |prompt| {
            prompt
                .answer("yes", |answer| {
                    answer
                        .run_action(|_, output, _| output.write_line("first yes"))
                        .and_exit()
                })
                .answer("YES", |answer| {
                    answer
                        .run_action(|_, output, _| output.write_line("second yes"))
                        .and_exit()
                })
        })
        .build();

    // Assert structure
    match root.body() {
        Body::Prompt(table) => {
            assert_eq!(table.answers().len(), 1);
            assert_eq!(table.answers()[0].key(), "YES");
            assert_eq!(table.case(), CaseSensitivity::Insensitive);
        }
        other => panic!("unexpected body: {:?}", other),
    }

    // Act
    let mut input = ScriptedInput::new(["yes"]);
    let mut output = CapturedOutput::new();
    root.run(&mut input, &mut output).unwrap();

    // Assert behavior
    assert!(output.text().contains("second yes"));
    assert!(!output.text().contains("first yes"));
}

#[test]
fn given_keys_differing_in_case_when_building_sensitive_then_both_are_kept() {
    // Arrange
    let mut root = InteractionBuilder::new()
        .prompt("Which?", |prompt| {
            prompt
                .answer("a", |answer| {
                    answer
                        .run_action(|_, output, _| output.write_line("lower"))
                        .and_exit()
                })
                .answer("A", |answer| {
                    answer
                        .run_action(|_, output, _| output.write_line("upper"))
                        .and_exit()
                })
        })
        .build();
    let mut input = ScriptedInput::new(["A"]);
    let mut output = CapturedOutput::new();

    // Act
    root.run(&mut input, &mut output).unwrap();

    // Assert
    assert!(output.text().contains("[a, A]: "));
    assert!(output.text().contains("upper"));
}

#[test]
fn given_go_back_answer_when_running_then_prompt_is_asked_again() {
    // Arrange
    let mut root = InteractionBuilder::new()
        .prompt("Again?", |prompt| {
            prompt
                .answer("again", |answer| {
                    answer
                        .run_action(|_, output, _| output.write_line("once more"))
                        .and_go_back()
                })
                .answer("stop", |answer| {
                    answer
                        .run_action(|_, output, _| output.write_line("stopped"))
                        .and_exit()
                })
        })
        .build();
    let mut input = ScriptedInput::new(["again", "again", "stop"]);
    let mut output = CapturedOutput::new();

    // Act
    let flow = root.run(&mut input, &mut output).unwrap();

    // Assert
    assert_eq!(flow, Flow::Exit);
    assert_eq!(output.count("Again?"), 3);
    assert_eq!(output.count("once more"), 2);
}
