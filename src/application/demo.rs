//! Sample interaction tree used by `interact demo` and `interact outline`.

use crate::domain::{InteractionBuilder, Inputs, Node};

pub const ROOT_INPUT: &str = "root_input";

fn root_input(inputs: &Inputs) -> &str {
    inputs.get(ROOT_INPUT).map(String::as_str).unwrap_or_default()
}

/// Root intro, one inherited input and a menu exercising every body kind.
pub fn sample_interaction() -> Node {
    InteractionBuilder::new()
        .with_intro("This is an intro text of the root level")
        .prompt_for_input(
            ROOT_INPUT,
            "Provide some root level input. It will be passed down.",
        )
        .with_menu(|menu| {
            menu.option(
                "First option that will print root input and exit app",
                |opt| {
                    opt.run_action(|_, output, inputs| {
                        output.write_line(&format!("The root input was: {}", root_input(inputs)))
                    })
                    .and_exit()
                },
            )
            .option("Second option that will print and loop back here", |opt| {
                opt.run_action(|_, output, _| output.write_line("Printing action for second option"))
                    .and_go_back()
            })
            .option(
                "Third option that goes into the prompt-driven interactions",
                |opt| {
                    opt.prompt_case_insensitive("Please select one of the actions", |prompt| {
                        prompt
                            .answer("alpha", |answer| {
                                answer
                                    .run_action(|_, output, _| output.write_line("alpha"))
                                    .and_exit()
                            })
                            .answer("beta", |answer| {
                                answer
                                    .prompt_for_input(
                                        ROOT_INPUT,
                                        "this allows to override root value for THIS level and below",
                                    )
                                    .run_action(|_, output, inputs| {
                                        output.write_line(&format!(
                                            "Current value of root value is {}",
                                            root_input(inputs)
                                        ))
                                    })
                                    .and_exit()
                            })
                    })
                    .build()
                },
            )
        })
        .build()
}
