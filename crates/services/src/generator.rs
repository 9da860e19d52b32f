use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use quiz_core::GenerationError;
use quiz_core::model::{OPTION_COUNT, Question, QuestionDraft, QuizMode};

use crate::config::GeneratorConfig;
use crate::error::GeneratorError;
use crate::source::{QuestionSource, select_usable};

/// Extra drafts requested so a few malformed ones do not sink the whole run.
const SPARE_QUESTIONS: usize = 2;

/// Question source backed by an OpenAI-compatible chat completions endpoint.
#[derive(Clone)]
pub struct ChatQuestionSource {
    client: Client,
    config: Option<GeneratorConfig>,
}

impl ChatQuestionSource {
    /// Build a source from `QUIZ_AI_*` environment variables.
    ///
    /// # Errors
    ///
    /// Returns `GeneratorError::Http` if the HTTP client cannot be built.
    pub fn from_env() -> Result<Self, GeneratorError> {
        Self::new(GeneratorConfig::from_env())
    }

    /// # Errors
    ///
    /// Returns `GeneratorError::Http` if the HTTP client cannot be built.
    pub fn new(config: Option<GeneratorConfig>) -> Result<Self, GeneratorError> {
        let mut builder = Client::builder();
        if let Some(config) = &config {
            builder = builder.timeout(config.timeout);
        }
        Ok(Self {
            client: builder.build()?,
            config,
        })
    }

    #[must_use]
    pub fn enabled(&self) -> bool {
        self.config.is_some()
    }

    /// Ask the model for questions and validate what comes back.
    ///
    /// # Errors
    ///
    /// Returns `GeneratorError` when the source is disabled, the request fails, the
    /// response is empty or malformed, or too few usable questions come back.
    pub async fn generate(
        &self,
        mode: QuizMode,
        count: usize,
    ) -> Result<Vec<Question>, GeneratorError> {
        let config = self.config.as_ref().ok_or(GeneratorError::Disabled)?;

        let url = format!("{}/chat/completions", config.base_url.trim_end_matches('/'));
        let payload = ChatRequest {
            model: config.model.clone(),
            messages: vec![ChatMessage {
                role: "user",
                content: build_prompt(mode, count + SPARE_QUESTIONS, &config.language),
            }],
            temperature: 0.7,
            response_format: ResponseFormat {
                kind: "json_object",
            },
        };

        let response = self
            .client
            .post(url)
            .bearer_auth(&config.api_key)
            .json(&payload)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(GeneratorError::HttpStatus(response.status()));
        }

        let body: ChatResponse = response.json().await?;
        let content = body
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|content| !content.trim().is_empty())
            .ok_or(GeneratorError::EmptyResponse)?;

        let drafts = parse_drafts(&content)?;
        select_usable(drafts, mode, count)
    }
}

#[async_trait]
impl QuestionSource for ChatQuestionSource {
    async fn fetch(&self, mode: QuizMode, count: usize) -> Result<Vec<Question>, GenerationError> {
        match self.generate(mode, count).await {
            Ok(questions) => Ok(questions),
            Err(err) => {
                tracing::error!(error = %err, %mode, count, "question generation failed");
                Err(err.into())
            }
        }
    }
}

fn build_prompt(mode: QuizMode, count: usize, language: &str) -> String {
    let topic = match mode {
        QuizMode::Synonyms => format!("{language} synonyms"),
        QuizMode::Antonyms => format!("{language} antonyms"),
        QuizMode::Mixed => format!("mixed {language} synonyms and antonyms"),
    };
    format!(
        "Generate {count} multiple-choice questions for a {language} vocabulary quiz focused on {topic}.\n\
         The difficulty should be moderate to advanced, suitable for native speakers or advanced learners.\n\
         Use standard, formal vocabulary.\n\
         For a \"synonym\" question ask for the synonym of the word; for an \"antonym\" question ask for its opposite.\n\
         Provide {OPTION_COUNT} distinct options per question. Exactly one is correct.\n\
         Write the question text and the explanation in {language}.\n\
         Respond with a JSON object of the form {{\"questions\": [...]}} where each item has:\n\
         \"word\" (string), \"type\" (\"synonym\" or \"antonym\"), \"questionText\" (string),\n\
         \"options\" (array of {OPTION_COUNT} strings), \"correctAnswer\" (one of the options),\n\
         \"explanation\" (short string, optional)."
    )
}

/// Parse model output into drafts.
///
/// Accepts `{"questions": [...]}` or a bare array, optionally wrapped in a fenced
/// code block.
///
/// # Errors
///
/// Returns `GeneratorError::Malformed` when the content is not one of those shapes.
pub fn parse_drafts(content: &str) -> Result<Vec<QuestionDraft>, GeneratorError> {
    let json = strip_code_fence(content);
    let payload: GeneratedPayload = serde_json::from_str(json)?;
    Ok(match payload {
        GeneratedPayload::Wrapped { questions } => questions,
        GeneratedPayload::Bare(questions) => questions,
    })
}

fn strip_code_fence(content: &str) -> &str {
    let trimmed = content.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    rest.strip_suffix("```").unwrap_or(rest).trim()
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum GeneratedPayload {
    Wrapped { questions: Vec<QuestionDraft> },
    Bare(Vec<QuestionDraft>),
}

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
    response_format: ResponseFormat,
}

#[derive(Debug, Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    kind: &'static str,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessageResponse,
}

#[derive(Debug, Deserialize)]
struct ChatMessageResponse {
    content: Option<String>,
}
