//! Dialoguer frontend for the interactive terminal quiz.

use dialoguer::theme::{ColorfulTheme, SimpleTheme, Theme};
use dialoguer::Select;

use crate::domain::quiz::Demographics;
use crate::ports::{FrontendError, QuizFrontend, Screen, UserIntent};

const ANOTHER_SURVEY: &str = "Take another survey";
const QUIT: &str = "Quit";

/// Ctrl+C surfaces as an interrupted I/O error.
fn is_cancelled(err: &dialoguer::Error) -> bool {
    matches!(err, dialoguer::Error::IO(io_err) if io_err.kind() == std::io::ErrorKind::Interrupted)
}

fn terminal_error(err: dialoguer::Error) -> FrontendError {
    FrontendError::Terminal(err.to_string())
}

/// Arrow-key menus on stdout/stderr.
///
/// Escape goes back to survey selection (or quits from the selection screen
/// itself); Ctrl+C quits.
#[derive(Debug, Default, Clone)]
pub struct DialoguerFrontend {
    /// Use colorful theme for prompts.
    colorful: bool,
}

impl DialoguerFrontend {
    /// Create a frontend with the colorful theme.
    pub fn new() -> Self {
        Self { colorful: true }
    }

    /// Create a frontend with the plain theme.
    pub fn plain() -> Self {
        Self { colorful: false }
    }

    /// Shows a menu; `Ok(None)` means Escape.
    fn select(&self, prompt: &str, items: &[String]) -> Result<Option<usize>, dialoguer::Error> {
        let colorful = ColorfulTheme::default();
        let simple = SimpleTheme;
        let theme: &dyn Theme = if self.colorful { &colorful } else { &simple };

        Select::with_theme(theme)
            .with_prompt(prompt)
            .items(items)
            .default(0)
            .interact_opt()
    }

    /// Maps a menu outcome, treating Ctrl+C as quit.
    fn choose(
        &self,
        prompt: &str,
        items: &[String],
        on_escape: UserIntent,
        pick: impl FnOnce(usize) -> Option<UserIntent>,
    ) -> Result<UserIntent, FrontendError> {
        match self.select(prompt, items) {
            Ok(Some(index)) => Ok(pick(index).unwrap_or(UserIntent::Quit)),
            Ok(None) => Ok(on_escape),
            Err(e) if is_cancelled(&e) => Ok(UserIntent::Quit),
            Err(e) => Err(terminal_error(e)),
        }
    }
}

impl QuizFrontend for DialoguerFrontend {
    fn prompt(&mut self, screen: &Screen) -> Result<UserIntent, FrontendError> {
        match screen {
            Screen::Selection { surveys } => {
                println!();
                let items: Vec<String> = surveys
                    .iter()
                    .map(|card| {
                        if card.description.is_empty() {
                            format!("{} ({} questions)", card.title, card.question_count)
                        } else {
                            format!(
                                "{} ({} questions): {}",
                                card.title, card.question_count, card.description
                            )
                        }
                    })
                    .collect();
                self.choose("Choose a survey", &items, UserIntent::Quit, |i| {
                    surveys
                        .get(i)
                        .map(|card| UserIntent::SelectSurvey(card.slug.clone()))
                })
            }
            Screen::Demographics {
                survey_title,
                genders,
            } => {
                println!("\n{}", survey_title);
                let items: Vec<String> = genders.iter().map(|g| g.label().to_string()).collect();
                self.choose("How do you describe your gender?", &items, UserIntent::Reset, |i| {
                    genders
                        .get(i)
                        .map(|g| UserIntent::SubmitDemographics(Demographics::new(*g)))
                })
            }
            Screen::Question {
                survey_title,
                progress,
                prompt,
                options,
            } => {
                println!("\n{} | {}", survey_title, progress);
                self.choose(prompt, options, UserIntent::Reset, |i| {
                    options.get(i).map(|o| UserIntent::Answer(o.clone()))
                })
            }
            Screen::Result { insight } => {
                println!("\nYour personality insight\n\n{}\n", insight);
                let items = [ANOTHER_SURVEY.to_string(), QUIT.to_string()];
                self.choose("What next?", &items, UserIntent::Reset, |i| {
                    Some(if i == 0 { UserIntent::Reset } else { UserIntent::Quit })
                })
            }
            Screen::Error { message } => {
                println!("\n{}\n", message);
                let items = [ANOTHER_SURVEY.to_string(), QUIT.to_string()];
                self.choose("What next?", &items, UserIntent::Reset, |i| {
                    Some(if i == 0 { UserIntent::Reset } else { UserIntent::Quit })
                })
            }
            Screen::Loading => Err(FrontendError::NotInteractive("loading")),
        }
    }

    fn show(&mut self, screen: &Screen) {
        if let Screen::Loading = screen {
            println!("\nGenerating your personality insight...");
        }
    }
}
