use std::sync::Arc;
use std::time::{Duration, Instant};

use serde::Serialize;
use tracing::{error, info};

use super::client::{CompletionClient, CompletionError, CompletionRequest};
use crate::agency::CONTACT_INFO;
use crate::config::AssistantConfig;
use crate::i18n::Language;

const PERSONA_FR: &str = "Tu es un expert en immigration canadienne pour l'agence 'IMMIGRER AU CANADA'. Ta spécialité est le Super Visa pour les parents et grands-parents de la RDC. Réponds de manière professionnelle, chaleureuse et précise en français. Mentionne toujours que le Super Visa permet de rester jusqu'à 5 ans et que les délais pour la RDC sont d'environ 1 mois.";

const PERSONA_EN: &str = "You are a Canadian immigration expert for the agency 'IMMIGRER AU CANADA'. Your specialty is the Super Visa for parents and grandparents from the DRC. Answer professionally, warmly, and precisely in English. Always mention that the Super Visa allows stays of up to 5 years and that processing for the DRC takes about 1 month.";

/// Fixed persona and scope sent with every question.
pub fn system_instruction(language: Language) -> &'static str {
    match language {
        Language::Fr => PERSONA_FR,
        Language::En => PERSONA_EN,
    }
}

/// Opening line of the chat panel.
pub fn greeting(language: Language) -> &'static str {
    match language {
        Language::Fr => "Bonjour ! Je suis votre assistant expert en Super Visa. Comment puis-je vous aider aujourd'hui ?",
        Language::En => "Hello! I am your Super Visa expert assistant. How can I help you today?",
    }
}

/// Shown in place of any model failure.
pub fn fallback_message(language: Language) -> String {
    match language {
        Language::Fr => format!(
            "Désolé, je rencontre une petite difficulté technique. Veuillez nous contacter directement via WhatsApp ({}) pour une réponse rapide.",
            CONTACT_INFO.whatsapp
        ),
        Language::En => format!(
            "Sorry, I am having a small technical difficulty. Please contact us directly on WhatsApp ({}) for a quick answer.",
            CONTACT_INFO.whatsapp
        ),
    }
}

/// Text to display for one question; `fallback` marks the substituted message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssistantReply {
    pub text: String,
    pub fallback: bool,
}

impl AssistantReply {
    pub fn fallback(language: Language) -> Self {
        Self {
            text: fallback_message(language),
            fallback: true,
        }
    }
}

/// Relays visitor questions to the hosted model. `ask` always resolves,
/// within `timeout`, to displayable text.
pub struct AssistantBridge<C> {
    client: Arc<C>,
    timeout: Duration,
    temperature: f32,
}

impl<C> AssistantBridge<C>
where
    C: CompletionClient + 'static,
{
    pub fn new(client: Arc<C>, timeout: Duration, temperature: f32) -> Self {
        Self {
            client,
            timeout,
            temperature,
        }
    }

    pub fn from_config(client: Arc<C>, config: &AssistantConfig) -> Self {
        Self::new(client, config.timeout, config.temperature)
    }

    pub async fn ask(&self, user_text: &str, language: Language) -> AssistantReply {
        match self.try_ask(user_text, language).await {
            Ok(text) => AssistantReply {
                text,
                fallback: false,
            },
            Err(err) => {
                error!(error = %err, language = language.code(), "assistant request failed");
                AssistantReply::fallback(language)
            }
        }
    }

    async fn try_ask(&self, user_text: &str, language: Language) -> Result<String, CompletionError> {
        let request = CompletionRequest {
            system_instruction: system_instruction(language).to_string(),
            prompt: user_text.trim().to_string(),
            temperature: self.temperature,
        };

        let started = Instant::now();
        let text = tokio::time::timeout(self.timeout, self.client.complete(&request))
            .await
            .map_err(|_| CompletionError::TimedOut(self.timeout))??;

        info!(
            elapsed_ms = started.elapsed().as_millis() as u64,
            language = language.code(),
            "assistant answered"
        );
        Ok(text)
    }
}
