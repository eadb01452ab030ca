use actix_web::{HttpResponse, web};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::info;

use crate::controller::posting::validate_for_posting;
use crate::controller::tees::TeeService;
use crate::error::CoreError;
use crate::model::{Round, RoundInput};
use crate::score::{
    aggregate_statistics, compute_differential, differentials_to_use, estimate_handicap_index,
};

#[derive(Deserialize, Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct DifferentialRequest {
    pub adjusted_gross_score: i32,
    pub course_rating: f64,
    pub slope_rating: i32,
}

#[derive(Deserialize, Serialize, Debug)]
pub struct HandicapRequest {
    pub differentials: Vec<f64>,
}

#[derive(Deserialize, Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct TeesRequest {
    #[serde(default, alias = "ghinCourseId")]
    pub course_id: String,
}

/// # Errors
///
/// Will return `Err` if the submitted round fails validation
pub async fn create_round(body: web::Json<RoundInput>) -> Result<HttpResponse, CoreError> {
    let round = Round::new(body.into_inner())?;
    info!(
        round_id = round.id(),
        gross = round.stats().gross_score,
        adjusted = round.stats().adjusted_gross_score,
        "round finalized"
    );
    Ok(HttpResponse::Ok().json(round))
}

/// # Errors
///
/// Will return `Err` if the submitted round fails validation
pub async fn posting_payload(body: web::Json<RoundInput>) -> Result<HttpResponse, CoreError> {
    let round = Round::new(body.into_inner())?;
    match validate_for_posting(&round) {
        Ok(payload) => Ok(HttpResponse::Ok().json(payload)),
        Err(rejection) => {
            info!(round_id = round.id(), "posting rejected: {rejection}");
            Ok(HttpResponse::UnprocessableEntity().json(json!({ "error": rejection.to_string() })))
        }
    }
}

/// # Errors
///
/// Will return `Err` if any submitted round fails validation
pub async fn statistics(body: web::Json<Vec<RoundInput>>) -> Result<HttpResponse, CoreError> {
    let rounds = body
        .into_inner()
        .into_iter()
        .map(Round::new)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(HttpResponse::Ok().json(aggregate_statistics(&rounds)))
}

/// # Errors
///
/// Will return `Err` if the slope rating is not positive
pub async fn differential(
    body: web::Json<DifferentialRequest>,
) -> Result<HttpResponse, CoreError> {
    let req = body.into_inner();
    let differential =
        compute_differential(req.adjusted_gross_score, req.course_rating, req.slope_rating)?;
    Ok(HttpResponse::Ok().json(json!({ "differential": differential })))
}

pub async fn handicap(body: web::Json<HandicapRequest>) -> HttpResponse {
    let differentials = &body.differentials;
    HttpResponse::Ok().json(json!({
        "handicapIndex": estimate_handicap_index(differentials),
        "differentialsUsed": differentials_to_use(differentials.len()),
    }))
}

/// # Errors
///
/// Will return `Err` if no course id was given
pub async fn tees(
    body: web::Json<TeesRequest>,
    service: web::Data<TeeService>,
) -> Result<HttpResponse, CoreError> {
    let course_id = body.course_id.trim();
    if course_id.is_empty() {
        return Err(CoreError::InvalidInput("course id is required".to_string()));
    }
    let lookup = service.tees_or_default(course_id).await;
    Ok(HttpResponse::Ok().json(lookup))
}
