//! Spoken texts of the skill.

use super::{SkillResponse, TurnError};
use crate::dialog::{domain::FlowKind, services::StepPrompt};
use minijinja::{Environment, context};

const WELCOME_CONFIGURED: &str = "Olá! Bem-vindo de volta ao criador de tasks do Jira. \
     Você pode dizer: 'criar uma task' para começar. Como posso ajudar?";
const WELCOME_NEW: &str = "Olá! Bem-vindo ao criador de tasks do Jira. \
     Para começar, precisamos configurar sua conta do Jira. \
     Diga: 'configurar Jira' para iniciar a configuração.";
const HELP_CONFIGURED: &str = "Este skill permite criar tasks no Jira por voz. \
     Você pode dizer: 'criar uma task' para criar uma nova task. Como posso ajudar?";
const HELP_NEW: &str = "Este skill permite criar tasks no Jira por voz. \
     Primeiro, você precisa configurar sua conta dizendo: 'configurar Jira'. \
     Depois pode criar tasks dizendo: 'criar uma task'. Como posso ajudar?";
const SETUP_REQUIRED: &str = "Você precisa configurar sua conta do Jira primeiro. \
     Diga: 'configurar Jira' para começar.";
const SETUP_REQUIRED_REPROMPT: &str = "Diga 'configurar Jira' para começar a configuração.";
const SETUP_SAVED: &str = "Perfeito! Sua conta do Jira foi configurada com sucesso. \
     Agora você pode dizer: 'criar uma task' para começar a usar.";
const SETUP_FAILED: &str = "Houve um erro ao salvar sua configuração. \
     Tente configurar novamente dizendo: 'configurar Jira'.";
const CONFIGURATION_UNAVAILABLE: &str =
    "Não consegui acessar sua configuração do Jira agora. Tente novamente em instantes.";
const TASK_CREATED: &str =
    "Perfeito! Task '{{ title }}' criada com sucesso no Jira com o código {{ key }}.";
const TASK_FAILED: &str = "Desculpe, houve um erro ao criar a task: {{ reason }}";
const CONFIGURATION_MISSING: &str = "Sua configuração do Jira não foi encontrada. \
     Diga: 'configurar Jira' para configurar novamente.";
const NEXT_STEP_REPROMPT: &str = "Como você gostaria de prosseguir?";
const RESTART_SETUP: &str = "Desculpe, algo deu errado. Vamos começar a configuração novamente. \
     Diga: 'configurar Jira' para recomeçar.";
const RESTART_TASK: &str = "Desculpe, algo deu errado. Vamos começar novamente. \
     Diga: 'criar uma task' para recomeçar.";
const FALLBACK: &str = "Desculpe, não entendi. \
     Você pode dizer: 'configurar Jira' ou 'criar uma task'.";
const GOODBYE: &str = "Até logo!";
const UNHANDLED: &str = "Desculpe, houve um problema. Tente novamente.";

/// Card title for setup results.
pub const SETUP_CARD_TITLE: &str = "Jira Configurado";
/// Card title for task results.
pub const TASK_CARD_TITLE: &str = "Task Criada";

/// Builds every response the skill speaks.
///
/// Texts echoing user values are `minijinja` templates.
pub struct ResponseCatalog {
    environment: Environment<'static>,
}

impl ResponseCatalog {
    /// Creates the catalog.
    #[must_use]
    pub fn new() -> Self {
        Self {
            environment: Environment::new(),
        }
    }

    /// Greeting for a launch without request.
    #[must_use]
    pub fn welcome(&self, configured: bool) -> SkillResponse {
        let text = if configured {
            WELCOME_CONFIGURED
        } else {
            WELCOME_NEW
        };
        SkillResponse::speak(text).with_reprompt(text)
    }

    /// Usage guidance.
    #[must_use]
    pub fn help(&self, configured: bool) -> SkillResponse {
        let text = if configured { HELP_CONFIGURED } else { HELP_NEW };
        SkillResponse::speak(text).with_reprompt(text)
    }

    /// Refusal to create a task before setup.
    #[must_use]
    pub fn setup_required(&self) -> SkillResponse {
        SkillResponse::speak(SETUP_REQUIRED).with_reprompt(SETUP_REQUIRED_REPROMPT)
    }

    /// Question for the current field, preceded by the confirmation of the
    /// previous one or by the flow introduction.
    ///
    /// # Errors
    ///
    /// Returns [`TurnError::Unhandled`] when the confirmation template fails
    /// to render.
    pub fn step_prompt(&self, prompt: &StepPrompt) -> Result<SkillResponse, TurnError> {
        let mut parts = Vec::with_capacity(2);
        if prompt.is_first() {
            parts.push(prompt.flow.definition().intro.to_owned());
        }
        let confirmation = prompt.acknowledged.as_ref().and_then(|acknowledged| {
            acknowledged
                .field
                .acknowledgement
                .map(|template| (template, &acknowledged.value))
        });
        if let Some((template, value)) = confirmation {
            parts.push(self.render(template, context! { value => value })?);
        }
        parts.push(prompt.field.prompt.to_owned());
        Ok(SkillResponse::speak(parts.join(" ")).with_reprompt(prompt.field.reprompt))
    }

    /// Confirmation that the credentials were stored.
    #[must_use]
    pub fn setup_saved(&self) -> SkillResponse {
        SkillResponse::speak(SETUP_SAVED).with_card(SETUP_CARD_TITLE)
    }

    /// Confirmation that an issue was created.
    ///
    /// # Errors
    ///
    /// Returns [`TurnError::Unhandled`] when the template fails to render.
    pub fn task_created(&self, title: &str, key: &str) -> Result<SkillResponse, TurnError> {
        let text = self.render(TASK_CREATED, context! { title => title, key => key })?;
        Ok(SkillResponse::speak(text).with_card(TASK_CARD_TITLE))
    }

    /// Reply to a capture or intent that does not fit the session.
    #[must_use]
    pub fn fallback(&self) -> SkillResponse {
        SkillResponse::speak(FALLBACK).with_reprompt(FALLBACK)
    }

    /// Farewell closing the session.
    #[must_use]
    pub fn goodbye(&self) -> SkillResponse {
        SkillResponse::speak(GOODBYE)
    }

    /// Response to a session closed by the platform.
    #[must_use]
    pub fn session_ended(&self) -> SkillResponse {
        SkillResponse::empty()
    }

    /// Spoken form of a turn failure.
    ///
    /// Falls back to the generic apology if the specific text cannot be
    /// rendered.
    #[must_use]
    pub fn failure(&self, error: &TurnError) -> SkillResponse {
        match error {
            TurnError::ConfigurationMissing { .. } => {
                SkillResponse::speak(CONFIGURATION_MISSING).with_reprompt(NEXT_STEP_REPROMPT)
            }
            TurnError::Persistence {
                flow: Some(FlowKind::Setup),
                ..
            } => SkillResponse::speak(SETUP_FAILED).with_card(SETUP_CARD_TITLE),
            TurnError::Persistence { .. } => SkillResponse::speak(CONFIGURATION_UNAVAILABLE),
            TurnError::RemoteCreation { reason } => self
                .render(TASK_FAILED, context! { reason => reason })
                .map_or_else(
                    |_| Self::unhandled(),
                    |text| SkillResponse::speak(text).with_card(TASK_CARD_TITLE),
                ),
            TurnError::CorruptedSessionState { flow, .. } => {
                let text = match flow {
                    FlowKind::Setup => RESTART_SETUP,
                    FlowKind::Task => RESTART_TASK,
                };
                SkillResponse::speak(text).with_reprompt(NEXT_STEP_REPROMPT)
            }
            TurnError::Unhandled(_) => Self::unhandled(),
        }
    }

    fn unhandled() -> SkillResponse {
        SkillResponse::speak(UNHANDLED).with_reprompt(UNHANDLED)
    }

    fn render(&self, template: &str, context: minijinja::Value) -> Result<String, TurnError> {
        self.environment
            .render_str(template, context)
            .map_err(|error| TurnError::Unhandled(format!("response template failed: {error}")))
    }
}

impl Default for ResponseCatalog {
    fn default() -> Self {
        Self::new()
    }
}
