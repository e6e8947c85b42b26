//! Prompt composition for the voice-direction instruction sent upstream.
//!
//! The prompt is an ordered list of Portuguese instruction sentences:
//! three mandatory ones, one per active toggle, and a closing
//! output-format constraint, followed by the source text verbatim.

use super::dto::HumanizeRequest;

/// Enumeration used when no tag catalog could be loaded.
pub const DEFAULT_TAGS: &str =
    "<joy>, <sadness>, <emphasis_strong>, <pause_medium>, <smiling_tone>, etc.";

/// Separator between the instruction block and the source text.
pub const SOURCE_SEPARATOR: &str = "\n\nTexto original para reescrever:\n---\n";

const ANALYSIS_INSTRUCTION: &str =
    "Analise o texto frase por frase e insira as tags apropriadas onde a emoção ou o tom mudam.";

const OUTPUT_FORMAT_INSTRUCTION: &str = "IMPORTANTE: Sua resposta deve conter APENAS o texto modificado com as tags inseridas. Não inclua nenhuma explicação, prefácio ou qualquer texto adicional.";

pub const PAUSES_INSTRUCTION: &str = "Insira pausas (<pause_short>, <pause_medium>, etc.) de forma natural para melhorar o ritmo da fala.";

pub const EMPHASIS_INSTRUCTION: &str = "Use tags de ênfase (<emphasis_soft>, <emphasis_strong>) para destacar palavras ou frases importantes.";

pub const HESITATIONS_INSTRUCTION: &str = "Se o nível de humanização for 3 ou maior, adicione pequenas hesitações (como 'uhm...', 'ahh...') onde faria sentido em uma conversa natural.";

pub const CONVERSATIONAL_INSTRUCTION: &str = "Incorpore elementos conversacionais, como pequenas interjeições ou marcadores discursivos ('sabe?', 'né?'), se apropriado para o contexto e nível de humanização.";

pub const BREATHING_INSTRUCTION: &str = "Insira a tag <breath> no início de frases ou antes de cláusulas importantes para simular uma inspiração natural do locutor.";

pub const SMILING_TONE_INSTRUCTION: &str = "Adote um 'tom sorridente' (smiling voice) como base para a narração. Isso significa que, mesmo em momentos neutros, a voz deve soar amigável, calorosa e otimista. Use isso para modular outras emoções. Por exemplo, uma <surpresa> deve ser agradável, e uma <ênfase> deve ser positiva.";

/// Toggle table. The iteration order here is the order the sentences
/// appear in the prompt; adding a toggle is a data change in this table
/// plus a request field.
const TOGGLE_INSTRUCTIONS: [(fn(&HumanizeRequest) -> bool, &str); 6] = [
    (|req| req.add_pauses, PAUSES_INSTRUCTION),
    (|req| req.add_emphasis, EMPHASIS_INSTRUCTION),
    (|req| req.add_hesitations, HESITATIONS_INSTRUCTION),
    (|req| req.add_conversational, CONVERSATIONAL_INSTRUCTION),
    (|req| req.add_breathing, BREATHING_INSTRUCTION),
    (|req| req.add_smiling_tone, SMILING_TONE_INSTRUCTION),
];

fn role_instruction(tags: &str) -> String {
    let tags = if tags.is_empty() { DEFAULT_TAGS } else { tags };
    format!(
        "Sua tarefa é atuar como um diretor de voz profissional para um sistema de Text-to-Speech. Você deve reescrever o texto fornecido, inserindo tags de emoção e estilo para torná-lo mais humano e expressivo. As tags disponíveis são: {tags}."
    )
}

fn level_instruction(level: i32) -> String {
    // The level is interpolated verbatim; no clamping to 0-5.
    format!(
        "O Nível de Humanização solicitado é {level} (em uma escala de 0 a 5). 0 é quase nenhuma alteração, 3 é um nível natural e 5 é extremamente expressivo e dramático. Ajuste a frequência e a intensidade das tags de acordo com este nível."
    )
}

/// Builds the full prompt for one request.
pub fn compose_prompt(request: &HumanizeRequest, tags: &str) -> String {
    let mut instructions = vec![
        role_instruction(tags),
        ANALYSIS_INSTRUCTION.to_string(),
        level_instruction(request.humanization_level),
    ];

    for (enabled, sentence) in TOGGLE_INSTRUCTIONS {
        if enabled(request) {
            instructions.push(sentence.to_string());
        }
    }

    instructions.push(OUTPUT_FORMAT_INSTRUCTION.to_string());

    format!("{}{}{}", instructions.join("\n"), SOURCE_SEPARATOR, request.text)
}
