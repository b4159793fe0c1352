//! Static flow definitions.

use super::transform::{normalize_domain, upper_case};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Names under which collected values are stored.
pub mod field {
    /// Tracker site, stored as a normalized URL.
    pub const DOMAIN: &str = "domain";
    /// Account email.
    pub const EMAIL: &str = "email";
    /// API token.
    pub const TOKEN: &str = "token";
    /// Tracker account id.
    pub const TRACKER_USER_ID: &str = "tracker_user_id";
    /// Issue summary.
    pub const TITLE: &str = "title";
    /// Issue description.
    pub const DESCRIPTION: &str = "description";
    /// Project key, stored upper-cased.
    pub const PROJECT_KEY: &str = "project_key";
}

/// Rewrite applied to a raw spoken value before it is stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldTransform {
    /// Stored as spoken.
    Verbatim,
    /// Spoken subdomain rewritten into a site URL.
    SpokenDomain,
    /// Upper-cased.
    UpperCase,
}

impl FieldTransform {
    /// Applies the transform to a raw value.
    #[must_use]
    pub fn apply(self, raw: &str) -> String {
        match self {
            Self::Verbatim => raw.to_owned(),
            Self::SpokenDomain => normalize_domain(raw),
            Self::UpperCase => upper_case(raw),
        }
    }
}

/// One field collected by a flow.
///
/// `prompt` is spoken when the field becomes current and `reprompt` when
/// the user stays silent. `acknowledgement`, when present, is a template
/// rendered with the stored `value` once the field is captured.
#[derive(Debug, PartialEq, Eq)]
pub struct FieldSpec {
    /// Key under which the value is stored.
    pub name: &'static str,
    /// Rewrite applied before storing.
    pub transform: FieldTransform,
    /// Question asking for this field.
    pub prompt: &'static str,
    /// Shorter question repeated on silence.
    pub reprompt: &'static str,
    /// Confirmation template spoken after capture.
    pub acknowledgement: Option<&'static str>,
}

/// Ordered field list of one flow.
#[derive(Debug, PartialEq, Eq)]
pub struct FlowDefinition {
    /// Flow identity.
    pub kind: FlowKind,
    /// Sentence introducing the flow before the first prompt.
    pub intro: &'static str,
    /// Fields in collection order.
    pub fields: &'static [FieldSpec],
}

impl FlowDefinition {
    /// Returns the field at `step`, if the flow has one.
    #[must_use]
    pub fn field(&self, step: usize) -> Option<&'static FieldSpec> {
        self.fields.get(step)
    }

    /// Returns the number of fields.
    #[must_use]
    pub const fn field_count(&self) -> usize {
        self.fields.len()
    }
}

const SETUP_FIELDS: [FieldSpec; 4] = [
    FieldSpec {
        name: field::DOMAIN,
        transform: FieldTransform::SpokenDomain,
        prompt: "Primeiro, qual é o domínio da sua empresa no Jira? \
                 Por exemplo: 'minha empresa ponto atlassian ponto net'",
        reprompt: "Qual é o domínio do seu Jira?",
        acknowledgement: Some("Domínio configurado como {{ value }}."),
    },
    FieldSpec {
        name: field::EMAIL,
        transform: FieldTransform::Verbatim,
        prompt: "Agora, qual é o seu email do Jira?",
        reprompt: "Me diga seu email do Jira.",
        acknowledgement: Some("Email salvo."),
    },
    FieldSpec {
        name: field::TOKEN,
        transform: FieldTransform::Verbatim,
        prompt: "Agora preciso do seu token de API do Jira. \
                 Você pode gerar um em: Configurações da conta, Segurança, Tokens de API. \
                 Me diga o token.",
        reprompt: "Qual é o seu token de API?",
        acknowledgement: Some("Token salvo."),
    },
    FieldSpec {
        name: field::TRACKER_USER_ID,
        transform: FieldTransform::Verbatim,
        prompt: "Por último, qual é o seu ID de usuário no Jira? \
                 Geralmente é um número ou código único.",
        reprompt: "Qual é o seu ID de usuário no Jira?",
        acknowledgement: None,
    },
];

const TASK_FIELDS: [FieldSpec; 3] = [
    FieldSpec {
        name: field::TITLE,
        transform: FieldTransform::Verbatim,
        prompt: "Qual é o título da task?",
        reprompt: "Por favor, me diga o título da task.",
        acknowledgement: Some("Título definido como '{{ value }}'."),
    },
    FieldSpec {
        name: field::DESCRIPTION,
        transform: FieldTransform::Verbatim,
        prompt: "Agora, qual é a descrição da task?",
        reprompt: "Me diga a descrição da task.",
        acknowledgement: Some("Descrição salva."),
    },
    FieldSpec {
        name: field::PROJECT_KEY,
        transform: FieldTransform::UpperCase,
        prompt: "Em qual projeto ou board você quer criar esta task?",
        reprompt: "Qual é o código do projeto? Por exemplo: PROJ ou DEV.",
        acknowledgement: None,
    },
];

const SETUP_FLOW: FlowDefinition = FlowDefinition {
    kind: FlowKind::Setup,
    intro: "Vamos configurar sua conta do Jira.",
    fields: &SETUP_FIELDS,
};

const TASK_FLOW: FlowDefinition = FlowDefinition {
    kind: FlowKind::Task,
    intro: "Vamos criar uma nova task.",
    fields: &TASK_FIELDS,
};

/// The two conversations the skill can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlowKind {
    /// Tracker credential setup.
    Setup,
    /// Issue creation.
    Task,
}

impl FlowKind {
    /// Returns the static definition of the flow.
    #[must_use]
    pub const fn definition(self) -> &'static FlowDefinition {
        match self {
            Self::Setup => &SETUP_FLOW,
            Self::Task => &TASK_FLOW,
        }
    }

    /// Returns the canonical name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Setup => "setup",
            Self::Task => "task",
        }
    }
}

impl fmt::Display for FlowKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
