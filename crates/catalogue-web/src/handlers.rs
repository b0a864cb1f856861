use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{PathRejection, QueryRejection},
    },
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use catalogue_core::models::{SearchRequest, SubjectWorks, ThinkerSubjects};

use crate::WebState;
use crate::dto::{
    ApiEnvelope, CatalogueResponse, CategoryListResponse, CategoryThinkersResponse, CompareQuery,
    RandomQuery, SearchQuery, ThinkerQuery, ThinkersResponse,
};
use crate::error::{catalogue_error_response, failure_response, rejection_response};

const THINKER_NOT_FOUND: &str = "Thinker not found";

fn ok<T: Serialize>(data: T) -> Response {
    (StatusCode::OK, Json(ApiEnvelope::ok(data))).into_response()
}

pub async fn catalogue_index(State(state): State<WebState>) -> Response {
    match state.catalogue.load_category_index().await {
        Ok(index) => ok(CatalogueResponse {
            categories: index.categories.clone(),
        }),
        Err(err) => catalogue_error_response(err, "Failed to load catalogue"),
    }
}

pub async fn list_categories(State(state): State<WebState>) -> Response {
    match state.catalogue.available_categories().await {
        Ok(categories) => ok(CategoryListResponse {
            count: categories.len(),
            categories,
        }),
        Err(err) => catalogue_error_response(err, "Failed to load categories"),
    }
}

pub async fn category_thinkers(
    State(state): State<WebState>,
    category: Result<Path<String>, PathRejection>,
) -> Response {
    let Path(category) = match category {
        Ok(category) => category,
        Err(rejection) => return rejection_response(rejection),
    };
    let thinkers = state
        .catalogue
        .load_category_thinkers_metadata(&category)
        .await;
    ok(CategoryThinkersResponse {
        category,
        count: thinkers.len(),
        thinkers,
    })
}

pub async fn list_thinkers(State(state): State<WebState>) -> Response {
    match state.catalogue.load_all_thinkers_metadata().await {
        Ok(thinkers) => ok(ThinkersResponse {
            count: thinkers.len(),
            thinkers,
        }),
        Err(err) => catalogue_error_response(err, "Failed to load thinkers"),
    }
}

pub async fn thinker(
    State(state): State<WebState>,
    path: Result<Path<(String, String)>, PathRejection>,
    query: Result<Query<ThinkerQuery>, QueryRejection>,
) -> Response {
    let (Path((category, name)), Query(query)) = match (path, query) {
        (Ok(path), Ok(query)) => (path, query),
        (Err(rejection), _) => return rejection_response(rejection),
        (_, Err(rejection)) => return rejection_response(rejection),
    };
    if query.metadata_only() {
        return match state.catalogue.find_thinker_metadata(&category, &name).await {
            Some(record) => ok(ThinkerSubjects {
                subjects: record.subject_names(),
                category,
                name,
            }),
            None => failure_response(StatusCode::NOT_FOUND, THINKER_NOT_FOUND),
        };
    }

    match state.catalogue.load_thinker(&category, &name).await {
        Some(thinker) => ok(thinker),
        None => failure_response(StatusCode::NOT_FOUND, THINKER_NOT_FOUND),
    }
}

pub async fn subject_works(
    State(state): State<WebState>,
    path: Result<Path<(String, String, String)>, PathRejection>,
) -> Response {
    let Path((category, name, subject)) = match path {
        Ok(path) => path,
        Err(rejection) => return rejection_response(rejection),
    };
    match state
        .catalogue
        .load_thinker_works_by_subject(&category, &name, &subject)
        .await
    {
        Ok(works) => ok(SubjectWorks {
            count: works.len(),
            works,
            category,
            thinker: name,
            subject,
        }),
        Err(err) => catalogue_error_response(err, "Failed to load subject works"),
    }
}

pub async fn compare_thinkers(
    State(state): State<WebState>,
    query: Result<Query<CompareQuery>, QueryRejection>,
) -> Response {
    let Query(query) = match query {
        Ok(query) => query,
        Err(rejection) => return rejection_response(rejection),
    };
    let Some(names) = query.thinkers.filter(|names| !names.trim().is_empty()) else {
        return failure_response(
            StatusCode::BAD_REQUEST,
            "Please provide thinkers parameter (comma-separated names)",
        );
    };
    match state.catalogue.compare(&names).await {
        Ok(report) => ok(report),
        Err(err) => catalogue_error_response(err, "Failed to compare thinkers"),
    }
}

pub async fn search(
    State(state): State<WebState>,
    query: Result<Query<SearchQuery>, QueryRejection>,
) -> Response {
    let Query(query) = match query {
        Ok(query) => query,
        Err(rejection) => return rejection_response(rejection),
    };
    let request = SearchRequest {
        query: query.q,
        category: query.category,
    };
    match state.catalogue.search(&request).await {
        Ok(results) => ok(results),
        Err(err) => catalogue_error_response(err, "Failed to search thinkers"),
    }
}

pub async fn random_thinker(
    State(state): State<WebState>,
    query: Result<Query<RandomQuery>, QueryRejection>,
) -> Response {
    let Query(query) = match query {
        Ok(query) => query,
        Err(rejection) => return rejection_response(rejection),
    };
    match state
        .catalogue
        .random_thinker(query.category.as_deref())
        .await
    {
        Ok(thinker) => ok(thinker),
        Err(err) => catalogue_error_response(err, "Failed to get random thinker"),
    }
}

pub async fn statistics(State(state): State<WebState>) -> Response {
    match state.catalogue.statistics().await {
        Ok(stats) => ok(stats),
        Err(err) => catalogue_error_response(err, "Failed to load statistics"),
    }
}
