use axum::{
    extract::{Path, Query, State},
    http::{header::LOCATION, HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;

use crate::api::errors::ApiError;
use crate::api::headers::pagination_headers;
use crate::api::state::AppState;
use crate::domain::job_offer::JobOffer;
use crate::domain::pagination::{PageRequest, Sort, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};

/// Entity name used in alert headers
const ENTITY_NAME: &str = "jobOffer";

/// Collection path, also the base of `Location` and `Link` URLs
const BASE_PATH: &str = "/api/jobOffers";

/// Status, headers and body returned by create and update
type SavedJobOffer = (StatusCode, HeaderMap, Json<JobOffer>);

/// Query parameters for listing job offers
///
/// `page` is 0-based, `sort` is `property[,asc|desc]`. `page` and `size` are
/// kept as text: a missing, empty or unparsable value falls back to its
/// default, a negative page reads as 0 and a size below 1 as the default.
#[derive(Debug, Default, Deserialize)]
pub struct PageParams {
    pub page: Option<String>,
    pub size: Option<String>,
    pub sort: Option<String>,
}

fn parse_number(value: Option<&str>) -> Option<i64> {
    value.and_then(|v| v.trim().parse().ok())
}

impl PageParams {
    fn into_page_request(self) -> Result<PageRequest, ApiError> {
        let page = parse_number(self.page.as_deref())
            .filter(|page| *page >= 0)
            .map_or(0, |page| u32::try_from(page).unwrap_or(u32::MAX));
        let size = parse_number(self.size.as_deref())
            .filter(|size| *size >= 1)
            .map_or(DEFAULT_PAGE_SIZE, |size| {
                u32::try_from(size).unwrap_or(MAX_PAGE_SIZE)
            });

        let request = PageRequest::new(page, size);

        match self.sort.filter(|sort| !sort.trim().is_empty()) {
            Some(sort) => {
                let sort: Sort = sort.parse().map_err(ApiError::bad_request)?;
                Ok(request.with_sort(sort))
            }
            None => Ok(request),
        }
    }
}

/// Create a new job offer
///
/// POST /api/jobOffers
pub async fn create_job_offer(
    State(state): State<AppState>,
    Json(offer): Json<JobOffer>,
) -> Result<SavedJobOffer, ApiError> {
    tracing::debug!(?offer, "REST request to save JobOffer");

    create(&state, offer).await
}

async fn create(state: &AppState, offer: JobOffer) -> Result<SavedJobOffer, ApiError> {
    if !offer.is_new() {
        return Err(ApiError::failure("A new jobOffer cannot already have an ID"));
    }

    let result = state.job_offers.save(offer).await?;
    let id = result
        .id
        .ok_or_else(|| ApiError::internal_server_error("Storage did not assign an ID"))?;

    let mut headers = state.alerts.entity_created(ENTITY_NAME, id);
    let location = HeaderValue::try_from(format!("{}/{}", BASE_PATH, id))
        .map_err(|e| ApiError::internal_server_error(format!("Invalid location: {}", e)))?;
    headers.insert(LOCATION, location);

    Ok((StatusCode::CREATED, headers, Json(result)))
}

/// Update an existing job offer
///
/// PUT /api/jobOffers
///
/// A job offer without an id is created instead, with the exact response
/// `create_job_offer` would give. The alert id is the one storage returns,
/// which differs from the request's id when storage did not know it.
pub async fn update_job_offer(
    State(state): State<AppState>,
    Json(offer): Json<JobOffer>,
) -> Result<SavedJobOffer, ApiError> {
    tracing::debug!(?offer, "REST request to update JobOffer");

    if offer.is_new() {
        return create(&state, offer).await;
    }

    let result = state.job_offers.save(offer).await?;
    let id = result
        .id
        .ok_or_else(|| ApiError::internal_server_error("Storage did not return an ID"))?;

    let headers = state.alerts.entity_updated(ENTITY_NAME, id);

    Ok((StatusCode::OK, headers, Json(result)))
}

/// Get one page of job offers
///
/// GET /api/jobOffers?page=&size=&sort=
pub async fn get_all_job_offers(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> Result<(HeaderMap, Json<Vec<JobOffer>>), ApiError> {
    let request = params.into_page_request()?;
    tracing::debug!(?request, "REST request to get a page of JobOffers");

    let page = state.job_offers.find_all(&request).await?;
    let headers = pagination_headers(&page, BASE_PATH);

    Ok((headers, Json(page.into_content())))
}

/// Get a job offer by ID
///
/// GET /api/jobOffers/:id
///
/// Responds 404 with an empty body when the offer does not exist.
pub async fn get_job_offer(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Response, ApiError> {
    tracing::debug!(id, "REST request to get JobOffer");

    let response = match state.job_offers.find_one(id).await? {
        Some(offer) => Json(offer).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    };

    Ok(response)
}

/// Delete a job offer
///
/// DELETE /api/jobOffers/:id
///
/// Succeeds whether or not the offer existed.
pub async fn delete_job_offer(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<(StatusCode, HeaderMap), ApiError> {
    tracing::debug!(id, "REST request to delete JobOffer");

    state.job_offers.delete(id).await?;

    Ok((StatusCode::OK, state.alerts.entity_deleted(ENTITY_NAME, id)))
}
