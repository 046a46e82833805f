//! Public protocol structs for WebSocket and HTTP endpoints (serde ready).
//! Keep this small and stable to evolve backend and frontend independently.

use serde::{Deserialize, Serialize};

use crate::domain::Problem;

/// Messages the client can send over WebSocket.
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientWsMessage {
    Ping,
    NewDrill {
        grade: Option<String>,
        topic: Option<String>,
        level: Option<u8>,
        count: Option<usize>,
        seed: Option<u64>,
    },
    GradeAnswers {
        items: Vec<AnswerPair>,
    },
    Curriculum,
}

/// Messages the server sends back over WebSocket.
#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerWsMessage {
    Pong,
    Drill {
        drill: DrillOut,
    },
    GradeResult {
        results: Vec<bool>,
        correct: usize,
        total: usize,
    },
    Curriculum {
        grades: Vec<GradeEntry>,
    },
    Error {
        message: String,
    },
}

/// One expected/user pair submitted for grading. `expected` is the canonical
/// answer text a drill delivered earlier; `answer` is what the student typed.
#[derive(Clone, Debug, Deserialize)]
pub struct AnswerPair {
    pub expected: String,
    pub answer: String,
}

/// One generated problem as delivered over the wire. The answer text is
/// canonical and must not be reformatted downstream.
#[derive(Clone, Debug, Serialize)]
pub struct ProblemOut {
    pub question: String,
    pub answer: String,
    pub preset: String,
}

/// A drill batch plus the parameters that produced it. Echoing `seed` lets a
/// client re-request the identical batch later.
#[derive(Debug, Serialize)]
pub struct DrillOut {
    pub id: String,
    pub grade: String,
    #[serde(rename = "gradeLabel")]
    pub grade_label: String,
    pub topic: String,
    #[serde(rename = "topicName")]
    pub topic_name: String,
    pub level: u8,
    pub preset: String,
    pub count: usize,
    pub seed: u64,
    pub problems: Vec<ProblemOut>,
}

/// Convert an internal `Problem` (typed answer) to the public DTO.
pub fn to_problem_out(p: &Problem, preset: &str) -> ProblemOut {
    ProblemOut {
        question: p.question.clone(),
        answer: p.answer.to_string(),
        preset: preset.to_string(),
    }
}

/// One grade in the curriculum listing.
#[derive(Debug, Serialize)]
pub struct GradeEntry {
    pub grade: String,
    pub label: String,
    pub topics: Vec<TopicEntry>,
}

/// One topic with its five preset labels (index = level - 1).
#[derive(Debug, Serialize)]
pub struct TopicEntry {
    pub slug: String,
    pub name: String,
    pub presets: Vec<String>,
}

//
// HTTP request/response DTOs
//

#[derive(Debug, Deserialize)]
pub struct DrillQuery {
    pub grade: Option<String>,
    pub topic: Option<String>,
    pub level: Option<u8>,
    pub count: Option<usize>,
    pub seed: Option<u64>,
}

#[derive(Deserialize)]
pub struct GradeIn {
    pub items: Vec<AnswerPair>,
}

#[derive(Serialize)]
pub struct GradeResultOut {
    pub results: Vec<bool>,
    pub correct: usize,
    pub total: usize,
}

#[derive(Serialize)]
pub struct CurriculumOut {
    pub grades: Vec<GradeEntry>,
}

#[derive(Serialize)]
pub struct ErrorOut {
    pub message: String,
}

#[derive(Serialize)]
pub struct HealthOut {
    pub ok: bool,
}
