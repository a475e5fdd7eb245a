use crate::content::{ContentError, ContentService, Resolved};
use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Response};
use sdui_domain::constants::{CARDS_TAG, SDUI_TAG};
use sdui_kernel::model::{ApiResponse, PluginNode};
use sdui_kernel::server::ApiState;

/// Raw query pairs; `feature` may repeat and each value may be comma-separated.
type QueryPairs = Query<Vec<(String, String)>>;

fn features(pairs: &[(String, String)]) -> Vec<&str> {
    pairs
        .iter()
        .filter(|(name, _)| name == "feature")
        .flat_map(|(_, value)| value.split(','))
        .map(str::trim)
        .filter(|feature| !feature.is_empty())
        .collect()
}

fn lang(pairs: &[(String, String)]) -> Option<&str> {
    pairs.iter().rev().find(|(name, _)| name == "lang").map(|(_, value)| value.as_str())
}

#[utoipa::path(
    get,
    path = "/cards/{profile}/benefits",
    params(
        ("profile" = String, Path, description = "Card profile, e.g. `black`"),
        ("Accept-Language" = Option<String>, Header, description = "Preferred languages"),
    ),
    responses(
        (status = OK, description = "Localized benefits of the profile", body = ApiResponse<Vec<PluginNode>>),
        (status = NOT_FOUND, description = "No content for the profile", body = ApiResponse<Vec<PluginNode>>),
    ),
    tag = CARDS_TAG,
)]
pub(super) async fn card_benefits(
    State(state): State<ApiState>,
    Path(profile): Path<String>,
    headers: HeaderMap,
) -> Result<Response, ContentError> {
    let accept_language = headers.get(header::ACCEPT_LANGUAGE).and_then(|value| value.to_str().ok());
    let service = ContentService::from_state(&state)?;

    match service.resolve_by_profile(&profile, accept_language).await {
        Ok(Resolved { plugins, language }) => Ok((
            [(header::CONTENT_LANGUAGE, language.to_string())],
            Json(ApiResponse::success(plugins, language.as_str())),
        )
            .into_response()),
        Err(ContentError::NotFound { message, .. }) => {
            Ok((StatusCode::NOT_FOUND, Json(ApiResponse::<Vec<Option<PluginNode>>>::error(message))).into_response())
        },
        Err(e) => Err(e),
    }
}

#[utoipa::path(
    get,
    path = "/sdui/plugins",
    params(
        ("feature" = Option<Vec<String>>, Query, description = "Feature names, repeated or comma-separated"),
        ("lang" = Option<String>, Query, description = "Language tag"),
    ),
    responses(
        (status = OK, description = "Catalog plugins of the requested features", body = Vec<PluginNode>),
        (status = NOT_FOUND, description = "No plugin matches"),
    ),
    tag = SDUI_TAG,
)]
pub(super) async fn plugins(
    State(state): State<ApiState>,
    Query(pairs): QueryPairs,
) -> Result<Resolved, ContentError> {
    ContentService::from_state(&state)?.resolve_by_feature(&features(&pairs), lang(&pairs)).await
}

#[utoipa::path(
    get,
    path = "/sdui/{lang}/plugins",
    params(
        ("lang" = String, Path, description = "Language tag"),
        ("feature" = Option<Vec<String>>, Query, description = "Feature names, repeated or comma-separated"),
    ),
    responses(
        (status = OK, description = "Catalog plugins of the requested features", body = Vec<PluginNode>),
        (status = NOT_FOUND, description = "No plugin matches"),
    ),
    tag = SDUI_TAG,
)]
pub(super) async fn plugins_for_language(
    State(state): State<ApiState>,
    Path(lang): Path<String>,
    Query(pairs): QueryPairs,
) -> Result<Resolved, ContentError> {
    ContentService::from_state(&state)?.resolve_by_feature(&features(&pairs), Some(&lang)).await
}

#[utoipa::path(
    get,
    path = "/sdui/plugins/all",
    params(("lang" = Option<String>, Query, description = "Language tag")),
    responses(
        (status = OK, description = "The whole plugin catalog", body = Vec<PluginNode>),
        (status = NOT_FOUND, description = "The catalog is empty"),
    ),
    tag = SDUI_TAG,
)]
pub(super) async fn all_plugins(
    State(state): State<ApiState>,
    Query(pairs): QueryPairs,
) -> Result<Resolved, ContentError> {
    ContentService::from_state(&state)?.resolve_all(lang(&pairs)).await
}

#[utoipa::path(
    get,
    path = "/sdui/{lang}/plugins/all",
    params(("lang" = String, Path, description = "Language tag")),
    responses(
        (status = OK, description = "The whole plugin catalog", body = Vec<PluginNode>),
        (status = NOT_FOUND, description = "The catalog is empty"),
    ),
    tag = SDUI_TAG,
)]
pub(super) async fn all_plugins_for_language(
    State(state): State<ApiState>,
    Path(lang): Path<String>,
) -> Result<Resolved, ContentError> {
    ContentService::from_state(&state)?.resolve_all(Some(&lang)).await
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(raw: &[(&str, &str)]) -> Vec<(String, String)> {
        raw.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect()
    }

    #[test]
    fn features_accept_repeats_and_commas() {
        let query = pairs(&[("feature", "black-card, points"), ("lang", "en"), ("feature", "miles,")]);
        assert_eq!(features(&query), vec!["black-card", "points", "miles"]);
        assert_eq!(lang(&query), Some("en"));
    }

    #[test]
    fn no_feature_means_empty_filter() {
        assert!(features(&pairs(&[("lang", "es")])).is_empty());
        assert_eq!(lang(&pairs(&[])), None);
    }
}
