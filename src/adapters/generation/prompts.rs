//! Prompt templates for language model generation.
//!
//! Both prompts ask for a single JSON object so the output can be
//! validated against a fixed shape.

use crate::domain::dilemma::Dilemma;
use crate::ports::{DilemmaRequest, ReflectionRequest};

// ============================================================================
// System Prompts
// ============================================================================

pub const DILEMMA_SYSTEM_PROMPT: &str = "Eres un experto filósofo y psicólogo diseñando dilemas éticos para la app Kantify. Responde únicamente con un objeto JSON.";

pub const REFLECTION_SYSTEM_PROMPT: &str = "You help users reflect on the ethical implications of their decisions from a Kantian perspective. Reply only with a JSON object.";

// ============================================================================
// User Prompts
// ============================================================================

/// Builds the dilemma generation prompt from seed examples.
pub fn dilemma_prompt(request: &DilemmaRequest, seeds: &[&Dilemma]) -> String {
    let mut prompt = format!(
        "Basándote en los siguientes ejemplos de dilemas semilla sobre el tópico '{}' y de intensidad '{}':\n",
        request.topic, request.intensity
    );

    for (index, seed) in seeds.iter().enumerate() {
        match seed.hidden_variable() {
            Some(hidden) => prompt.push_str(&format!(
                "Ejemplo {}: {} (Variable oculta: {})\n",
                index,
                seed.text(),
                hidden
            )),
            None => prompt.push_str(&format!("Ejemplo {}: {}\n", index, seed.text())),
        }
    }

    if let Some(context) = request.user_context.as_deref().filter(|c| !c.trim().is_empty()) {
        prompt.push_str(&format!(
            "\nConsidera el siguiente contexto sobre el usuario (basado en sus respuestas previas):\n'{}'\n",
            context
        ));
    }

    prompt.push_str(&format!(
        r#"
Genera UN NUEVO Y ORIGINAL dilema ético que:
1. Pertenezca claramente al tópico '{topic}'.
2. Tenga una intensidad comparable a '{intensity}'.
3. Explore una faceta de la variable oculta asociada a este tópico.
4. Sea conciso, claro y provoque reflexión, al estilo de los ejemplos.
5. NO repita los ejemplos proporcionados.

Devuelve tu respuesta como un objeto JSON con la siguiente estructura:
{{"dilemmaText": "El texto del nuevo dilema aquí..."}}"#,
        topic = request.topic,
        intensity = request.intensity
    ));

    prompt
}

/// Builds the universalization narrative prompt.
pub fn reflection_prompt(request: &ReflectionRequest) -> String {
    format!(
        r#"Generate a short narrative (around 100-150 words, in Spanish) explaining the consequences of universalizing the user's response, using a "What if everyone..." format.

The narrative should:
* State the maxim implied by the user's response.
* Explain what would happen if everyone acted according to that maxim.
* Highlight contradictions or harms that universalization would produce.
* Close with a concise Kantian reflection on the choice.

Dilemma: {dilemma}
User Response (0-1): {response}
Topic: {topic}

Return a JSON object with this structure:
{{"narrative": "..."}}"#,
        dilemma = request.dilemma_text,
        response = request.response,
        topic = request.topic
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::dilemma::{DilemmaOrigin, EthicalTopic, Intensity};
    use crate::domain::foundation::{DilemmaId, ResponseValue};

    fn seed() -> Dilemma {
        Dilemma::new(
            DilemmaId::new("TM_S_01").unwrap(),
            "Texto semilla",
            EthicalTopic::MoralTemporality,
            Intensity::Mild,
            DilemmaOrigin::Corpus {
                hidden_variable: "Responsabilidad intergeneracional".to_string(),
            },
        )
        .unwrap()
    }

    #[test]
    fn dilemma_prompt_lists_seeds_and_target() {
        let seed = seed();
        let request = DilemmaRequest::new(EthicalTopic::MoralTemporality, Intensity::Mild);
        let prompt = dilemma_prompt(&request, &[&seed]);

        assert!(prompt.contains("Ejemplo 0: Texto semilla (Variable oculta: Responsabilidad intergeneracional)"));
        assert!(prompt.contains("tópico 'Temporalidad Moral'"));
        assert!(prompt.contains("\"dilemmaText\""));
        assert!(!prompt.contains("contexto sobre el usuario"));
    }

    #[test]
    fn dilemma_prompt_includes_user_context_when_present() {
        let request = DilemmaRequest::new(EthicalTopic::RadicalAlterity, Intensity::Extreme)
            .with_context("El usuario ha respondido a 3 dilemas.");
        let prompt = dilemma_prompt(&request, &[]);
        assert!(prompt.contains("'El usuario ha respondido a 3 dilemas.'"));
    }

    #[test]
    fn reflection_prompt_embeds_inputs() {
        let request = ReflectionRequest {
            dilemma_text: "¿Mentirías?".to_string(),
            response: ResponseValue::try_new(0.8).unwrap(),
            topic: EthicalTopic::EverydayMicroethics,
        };
        let prompt = reflection_prompt(&request);
        assert!(prompt.contains("Dilemma: ¿Mentirías?"));
        assert!(prompt.contains("User Response (0-1): 0.8"));
        assert!(prompt.contains("Topic: Microética Cotidiana"));
        assert!(prompt.contains("{\"narrative\": \"...\"}"));
    }
}
