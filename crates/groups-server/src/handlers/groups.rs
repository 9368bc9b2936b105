use axum::{
    extract::{Path, State},
    response::{IntoResponse, Redirect, Response},
};
use groups_shared::api::GroupRequest;
use tower_cookies::Cookies;

use super::count_message;
use crate::error::AppError;
use crate::flash;
use crate::forms::BoundForm;
use crate::routes::AppState;
use crate::services::GROUP_NOT_FOUND;
use crate::views::{
    render, FieldErrors, GroupCreateView, GroupDetailsView, GroupEditView, GroupIndexView,
    HtmlResult,
};

/// GET /Group
pub async fn index(State(state): State<AppState>, cookies: Cookies) -> HtmlResult {
    let groups = state.groups.query().await?;

    render(&GroupIndexView {
        message: flash::take(&cookies),
        count: count_message(groups.len(), "Group"),
        groups,
    })
}

/// GET /Group/Details/:id
pub async fn details(State(state): State<AppState>, Path(id): Path<i64>) -> HtmlResult {
    let group = state.groups.query_by_id(id).await?;

    let (message, users) = match &group {
        Some(group) => (None, state.users.query_by_group(group.id).await?),
        None => (Some(GROUP_NOT_FOUND.to_string()), Vec::new()),
    };

    render(&GroupDetailsView {
        message,
        group,
        users,
    })
}

/// GET /Group/Create
pub async fn create_form() -> HtmlResult {
    render(&GroupCreateView::new(GroupRequest::default()))
}

/// POST /Group/Create
pub async fn create(
    State(state): State<AppState>,
    cookies: Cookies,
    form: BoundForm<GroupRequest>,
) -> Result<Response, AppError> {
    let mut view = GroupCreateView::new(form.model);
    view.errors = form.errors;
    view.errors.merge(FieldErrors::of(&view.request));

    if view.errors.is_empty() {
        let response = state.groups.create(&view.request).await?;

        if response.is_successful {
            flash::set(&cookies, &response.message);
            return Ok(Redirect::to("/Group").into_response());
        }

        view.message = Some(response.message);
    }

    Ok(render(&view)?.into_response())
}

/// GET /Group/Edit/:id
pub async fn edit_form(State(state): State<AppState>, Path(id): Path<i64>) -> HtmlResult {
    let mut view = GroupEditView::new(state.groups.edit(id).await?);

    if view.request.is_none() {
        view.message = Some(GROUP_NOT_FOUND.to_string());
    }

    render(&view)
}

/// POST /Group/Edit
pub async fn edit(
    State(state): State<AppState>,
    form: BoundForm<GroupRequest>,
) -> Result<Response, AppError> {
    let BoundForm { model: request, errors } = form;
    let mut view = GroupEditView::new(None);
    view.errors = errors;
    view.errors.merge(FieldErrors::of(&request));

    if view.errors.is_empty() {
        let response = state.groups.update(&request).await?;

        if response.is_successful {
            let target = format!("/Group/Details/{}", response.id);
            return Ok(Redirect::to(&target).into_response());
        }

        view.message = Some(response.message);
    }

    view.request = Some(request);
    Ok(render(&view)?.into_response())
}

/// GET /Group/Delete/:id
pub async fn delete(
    State(state): State<AppState>,
    cookies: Cookies,
    Path(id): Path<i64>,
) -> Result<Redirect, AppError> {
    let response = state.groups.delete(id).await?;

    flash::set(&cookies, &response.message);
    Ok(Redirect::to("/Group"))
}
