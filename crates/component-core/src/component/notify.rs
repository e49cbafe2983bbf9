//! Follow-up instructions printed after generation

use crate::answers::AnswerSet;
use crate::error::ScaffoldError;

/// The manual steps needed to register the new component
pub fn notify_lines(answers: &AnswerSet) -> Result<Vec<String>, ScaffoldError> {
    let component_name = answers.require_text("componentName")?;
    let selector = answers.require_text("selector")?;

    Ok(vec![
        "Don't forget to add the following to the module.ts file:".to_string(),
        format!(
            "    import {{ {} }} from './{}/{}.component';",
            component_name, selector, selector
        ),
        format!(
            "And to add {} to the NgModule declarations list",
            component_name
        ),
    ])
}

pub fn notify_user(answers: &AnswerSet) -> Result<(), ScaffoldError> {
    let lines = notify_lines(answers)?;

    println!();
    for line in lines {
        println!("{}", line);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::answers::Answer;

    #[test]
    fn test_notify_lines() {
        let answers: AnswerSet = [
            Answer::text("selector", "my-widget"),
            Answer::text("componentName", "MyWidgetComponent"),
        ]
        .into_iter()
        .collect();

        let lines = notify_lines(&answers).unwrap();

        assert_eq!(
            lines,
            vec![
                "Don't forget to add the following to the module.ts file:",
                "    import { MyWidgetComponent } from './my-widget/my-widget.component';",
                "And to add MyWidgetComponent to the NgModule declarations list",
            ]
        );
    }

    #[test]
    fn test_notify_requires_component_name() {
        let answers: AnswerSet = [Answer::text("selector", "my-widget")].into_iter().collect();
        assert_eq!(
            notify_lines(&answers).unwrap_err(),
            ScaffoldError::missing("componentName")
        );
    }
}
