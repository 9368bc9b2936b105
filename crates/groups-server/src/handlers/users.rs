use std::collections::HashMap;

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Redirect, Response},
};
use groups_shared::{api::UserRequest, Group};
use tower_cookies::Cookies;

use super::count_message;
use crate::error::AppError;
use crate::flash;
use crate::forms::BoundForm;
use crate::routes::AppState;
use crate::services::USER_NOT_FOUND;
use crate::views::{
    render, FieldErrors, HtmlResult, UserCreateView, UserDetailsView, UserEditView,
    UserIndexView, UserRow,
};

fn title_of(groups: &[Group], group_id: Option<i64>) -> String {
    group_id
        .and_then(|id| groups.iter().find(|g| g.id == id))
        .map(|g| g.title.clone())
        .unwrap_or_default()
}

/// GET /User
pub async fn index(State(state): State<AppState>, cookies: Cookies) -> HtmlResult {
    let users = state.users.query().await?;
    let titles: HashMap<i64, String> = state
        .groups
        .query()
        .await?
        .into_iter()
        .map(|g| (g.id, g.title))
        .collect();

    let count = count_message(users.len(), "User");
    let rows = users
        .into_iter()
        .map(|user| UserRow {
            group_title: user
                .group_id
                .and_then(|id| titles.get(&id).cloned())
                .unwrap_or_default(),
            user,
        })
        .collect();

    render(&UserIndexView {
        message: flash::take(&cookies),
        count,
        rows,
    })
}

/// GET /User/Details/:id
pub async fn details(State(state): State<AppState>, Path(id): Path<i64>) -> HtmlResult {
    let user = state.users.query_by_id(id).await?;

    let (message, group_title) = match &user {
        Some(user) => {
            let groups = state.groups.query().await?;
            (None, title_of(&groups, user.group_id))
        }
        None => (Some(USER_NOT_FOUND.to_string()), String::new()),
    };

    render(&UserDetailsView {
        message,
        user,
        group_title,
    })
}

/// GET /User/Create
pub async fn create_form(State(state): State<AppState>) -> HtmlResult {
    let groups = state.groups.query().await?;
    let request = UserRequest {
        is_active: true,
        ..Default::default()
    };

    render(&UserCreateView::new(request, &groups))
}

/// POST /User/Create
pub async fn create(
    State(state): State<AppState>,
    cookies: Cookies,
    form: BoundForm<UserRequest>,
) -> Result<Response, AppError> {
    let BoundForm {
        model: request,
        mut errors,
    } = form;
    errors.merge(FieldErrors::of(&request));
    if request.password.is_empty() {
        errors.insert("password", "Password is required.");
    }

    let mut message = None;
    if errors.is_empty() {
        let response = state.users.create(&request).await?;

        if response.is_successful {
            flash::set(&cookies, &response.message);
            return Ok(Redirect::to("/User").into_response());
        }

        message = Some(response.message);
    }

    let groups = state.groups.query().await?;
    let mut view = UserCreateView::new(request, &groups);
    view.message = message;
    view.errors = errors;

    Ok(render(&view)?.into_response())
}

/// GET /User/Edit/:id
pub async fn edit_form(State(state): State<AppState>, Path(id): Path<i64>) -> HtmlResult {
    let request = state.users.edit(id).await?;
    let groups = state.groups.query().await?;

    let mut view = UserEditView::new(request, &groups);
    if view.request.is_none() {
        view.message = Some(USER_NOT_FOUND.to_string());
    }

    render(&view)
}

/// POST /User/Edit
pub async fn edit(
    State(state): State<AppState>,
    form: BoundForm<UserRequest>,
) -> Result<Response, AppError> {
    let BoundForm {
        model: request,
        mut errors,
    } = form;
    errors.merge(FieldErrors::of(&request));

    let mut message = None;
    if errors.is_empty() {
        let response = state.users.update(&request).await?;

        if response.is_successful {
            let target = format!("/User/Details/{}", response.id);
            return Ok(Redirect::to(&target).into_response());
        }

        message = Some(response.message);
    }

    let groups = state.groups.query().await?;
    let mut view = UserEditView::new(Some(request), &groups);
    view.message = message;
    view.errors = errors;

    Ok(render(&view)?.into_response())
}

/// GET /User/Delete/:id
pub async fn delete(
    State(state): State<AppState>,
    cookies: Cookies,
    Path(id): Path<i64>,
) -> Result<Redirect, AppError> {
    let response = state.users.delete(id).await?;

    flash::set(&cookies, &response.message);
    Ok(Redirect::to("/User"))
}
