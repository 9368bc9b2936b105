use askama::Template;
use groups_shared::{api::GroupRequest, Group, User};

use super::FieldErrors;

#[derive(Template)]
#[template(path = "groups/index.html")]
pub struct GroupIndexView {
    pub message: Option<String>,
    pub count: String,
    pub groups: Vec<Group>,
}

#[derive(Template)]
#[template(path = "groups/details.html")]
pub struct GroupDetailsView {
    pub message: Option<String>,
    pub group: Option<Group>,
    pub users: Vec<User>,
}

#[derive(Template)]
#[template(path = "groups/create.html")]
pub struct GroupCreateView {
    pub message: Option<String>,
    pub request: GroupRequest,
    pub errors: FieldErrors,
}

impl GroupCreateView {
    pub fn new(request: GroupRequest) -> Self {
        Self {
            message: None,
            request,
            errors: FieldErrors::default(),
        }
    }
}

#[derive(Template)]
#[template(path = "groups/edit.html")]
pub struct GroupEditView {
    pub message: Option<String>,
    pub request: Option<GroupRequest>,
    pub errors: FieldErrors,
}

impl GroupEditView {
    pub fn new(request: Option<GroupRequest>) -> Self {
        Self {
            message: None,
            request,
            errors: FieldErrors::default(),
        }
    }
}
