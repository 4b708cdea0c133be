//! Application Context
//!
//! Shared state provided via Leptos Context API: the operation client and
//! the current page.

use std::rc::Rc;

use greenstep_core::{Coordinator, HttpApi};
use leptos::prelude::*;

use crate::storage::LocalTokenStore;
use crate::store::AppStore;

/// Coordinator wired to the REST API, local storage and the reactive store
pub type GreenClient = Coordinator<HttpApi, LocalTokenStore, AppStore>;

/// Top-level views
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Landing,
    Login,
    Register,
    Dashboard,
    Actions,
    Goals,
    Profile,
}

impl Page {
    /// Pages that need a signed-in user
    pub fn is_protected(&self) -> bool {
        matches!(self, Page::Dashboard | Page::Actions | Page::Goals | Page::Profile)
    }

    pub fn title(&self) -> &'static str {
        match self {
            Page::Landing => "Home",
            Page::Login => "Login",
            Page::Register => "Register",
            Page::Dashboard => "Dashboard",
            Page::Actions => "Actions",
            Page::Goals => "Goals",
            Page::Profile => "Profile",
        }
    }
}

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// The client is `!Send`, so it lives in local arena storage
    client: StoredValue<Rc<GreenClient>, LocalStorage>,
    /// Current page - read
    pub page: ReadSignal<Page>,
    /// Current page - write
    set_page: WriteSignal<Page>,
}

impl AppContext {
    pub fn new(client: GreenClient, page: (ReadSignal<Page>, WriteSignal<Page>)) -> Self {
        Self {
            client: StoredValue::new_local(Rc::new(client)),
            page: page.0,
            set_page: page.1,
        }
    }

    /// Shared handle for use inside `spawn_local`
    pub fn client(&self) -> Rc<GreenClient> {
        self.client.get_value()
    }

    pub fn navigate(&self, page: Page) {
        self.set_page.set(page);
    }
}

pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
