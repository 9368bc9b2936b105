use askama::Template;
use groups_shared::{api::UserRequest, Gender, Group, User};

use super::{FieldErrors, SelectOption};

/// A user listed together with the title of its group.
pub struct UserRow {
    pub user: User,
    pub group_title: String,
}

#[derive(Template)]
#[template(path = "users/index.html")]
pub struct UserIndexView {
    pub message: Option<String>,
    pub count: String,
    pub rows: Vec<UserRow>,
}

#[derive(Template)]
#[template(path = "users/details.html")]
pub struct UserDetailsView {
    pub message: Option<String>,
    pub user: Option<User>,
    pub group_title: String,
}

#[derive(Template)]
#[template(path = "users/create.html")]
pub struct UserCreateView {
    pub message: Option<String>,
    pub request: UserRequest,
    pub errors: FieldErrors,
    pub group_options: Vec<SelectOption>,
    pub gender_options: Vec<SelectOption>,
}

impl UserCreateView {
    pub fn new(request: UserRequest, groups: &[Group]) -> Self {
        Self {
            message: None,
            group_options: group_options(groups, request.group_id),
            gender_options: gender_options(request.gender),
            request,
            errors: FieldErrors::default(),
        }
    }
}

#[derive(Template)]
#[template(path = "users/edit.html")]
pub struct UserEditView {
    pub message: Option<String>,
    pub request: Option<UserRequest>,
    pub errors: FieldErrors,
    pub group_options: Vec<SelectOption>,
    pub gender_options: Vec<SelectOption>,
}

impl UserEditView {
    pub fn new(request: Option<UserRequest>, groups: &[Group]) -> Self {
        let (group_id, gender) = request
            .as_ref()
            .map_or((None, Gender::default()), |r| (r.group_id, r.gender));
        Self {
            message: None,
            request,
            errors: FieldErrors::default(),
            group_options: group_options(groups, group_id),
            gender_options: gender_options(gender),
        }
    }
}

/// Group select list led by an empty "no group" entry.
pub fn group_options(groups: &[Group], selected: Option<i64>) -> Vec<SelectOption> {
    let none = SelectOption {
        value: String::new(),
        text: "-- No group --".to_string(),
        selected: selected.is_none(),
    };
    std::iter::once(none)
        .chain(groups.iter().map(|group| SelectOption {
            value: group.id.to_string(),
            text: group.title.clone(),
            selected: selected == Some(group.id),
        }))
        .collect()
}

pub fn gender_options(selected: Gender) -> Vec<SelectOption> {
    Gender::ALL
        .into_iter()
        .map(|gender| SelectOption {
            value: gender.as_str().to_string(),
            text: gender.as_str().to_string(),
            selected: gender == selected,
        })
        .collect()
}
