//! One module per dashboard section, plus the login page.
//!
//! Every section page receives the same `PageProps`: the current session (its
//! bearer token builds the `Api` handle, its role picks what is rendered) and
//! the callback the app uses to send an expired session back to the login page.

use common::session::UserInfo;
use yew::prelude::*;

use crate::api::Api;

pub mod announcements;
pub mod conflicts;
pub mod establishments;
pub mod login;
pub mod orders;
pub mod products;
pub mod reclamations;
pub mod users;

#[derive(Properties, PartialEq, Clone)]
pub struct PageProps {
    pub session: UserInfo,
    pub on_unauthorized: Callback<()>,
}

impl PageProps {
    pub fn api(&self) -> Api {
        Api::new(&self.session)
    }
}
