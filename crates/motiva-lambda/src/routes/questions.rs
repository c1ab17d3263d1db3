use axum::Json;
use serde::Serialize;

use motiva_core::models::driver::Driver;
use motiva_core::models::question::{SCALE, question_bank};

#[derive(Serialize)]
pub struct QuestionView {
    id: &'static str,
    prompt: &'static str,
    driver: Driver,
    driver_label: &'static str,
}

#[derive(Serialize)]
pub struct ScaleStep {
    value: u8,
    label: &'static str,
}

#[derive(Serialize)]
pub struct QuestionBankResponse {
    questions: Vec<QuestionView>,
    scale: Vec<ScaleStep>,
}

/// The full question bank. Public data, same for every caller.
pub async fn list_questions() -> Json<QuestionBankResponse> {
    let questions = question_bank()
        .iter()
        .map(|q| QuestionView {
            id: q.id,
            prompt: q.prompt,
            driver: q.driver,
            driver_label: q.driver.label(),
        })
        .collect();
    let scale = SCALE
        .iter()
        .map(|&(value, label)| ScaleStep { value, label })
        .collect();

    Json(QuestionBankResponse { questions, scale })
}
