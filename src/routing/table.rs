//! The ordered route table.
//!
//! Order is load-bearing: the router returns the first route whose template
//! binds and whose decoder succeeds, so an earlier route shadows any later
//! one that would also decode the same link.

use std::collections::HashSet;
use std::fmt;

use thiserror::Error;

use crate::routing::decoders::{self, Decoder};
use crate::routing::template::{Template, TemplateError};

/// A template paired with the decoder that consumes its bindings.
#[derive(Clone)]
pub struct Route {
    pub name: &'static str,
    pub template: Template,
    pub decoder: Decoder,
}

impl Route {
    pub fn new(name: &'static str, template: &str, decoder: Decoder) -> Self {
        Self {
            name,
            template: Template::parse(template),
            decoder,
        }
    }
}

impl fmt::Debug for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Route")
            .field("name", &self.name)
            .field("template", &self.template.as_str())
            .field("decoder", &"<function>")
            .finish()
    }
}

/// Errors found when a route table is installed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouterError {
    #[error("route `{route}`: {source}")]
    InvalidTemplate {
        route: &'static str,
        #[source]
        source: TemplateError,
    },

    #[error("route name `{0}` is used more than once")]
    DuplicateName(&'static str),
}

/// Check every template and that route names are unique.
pub fn validate_routes(routes: &[Route]) -> Result<(), RouterError> {
    let mut names = HashSet::new();
    for route in routes {
        route
            .template
            .validate()
            .map_err(|source| RouterError::InvalidTemplate { route: route.name, source })?;
        if !names.insert(route.name) {
            return Err(RouterError::DuplicateName(route.name));
        }
    }
    Ok(())
}

/// The application's routes, in match order.
pub fn default_routes() -> Vec<Route> {
    vec![
        Route::new("activity", "/activity", decoders::activity),
        Route::new("authorize", "/authorize", decoders::authorize),
        Route::new("payments_root", "/checkouts/:checkout_param/payments", decoders::payments_root),
        Route::new("payments_new", "/checkouts/:checkout_param/payments/new", decoders::payments_new),
        Route::new(
            "payments_use_stored_card",
            "/checkouts/:checkout_param/payments/use_stored_card",
            decoders::payments_use_stored_card,
        ),
        Route::new("discovery", "/discover", decoders::discovery),
        Route::new("discovery_advanced", "/discover/advanced", decoders::discovery_advanced),
        Route::new("category", "/discover/categories/:category_param", decoders::category),
        Route::new(
            "subcategory",
            "/discover/categories/:category_param/:subcategory_param",
            decoders::category,
        ),
        Route::new("profile", "/profile/:user_param", decoders::me),
        Route::new("search", "/search", decoders::search),
        Route::new("signup", "/signup", decoders::signup),
        Route::new("project", "/projects/:creator_param/:project_param", decoders::project_root),
        Route::new(
            "project_checkout_thanks",
            "/projects/:creator_param/:project_param/checkouts/:checkout_param/thanks",
            decoders::thanks,
        ),
        Route::new(
            "project_comments",
            "/projects/:creator_param/:project_param/comments",
            decoders::project_comments,
        ),
        Route::new(
            "creator_bio",
            "/projects/:creator_param/:project_param/creator_bio",
            decoders::creator_bio,
        ),
        Route::new(
            "dashboard",
            "/projects/:creator_param/:project_param/dashboard",
            decoders::dashboard,
        ),
        Route::new(
            "project_description",
            "/projects/:creator_param/:project_param/description",
            decoders::project_root,
        ),
        Route::new("friends", "/projects/:creator_param/:project_param/friends", decoders::friends),
        Route::new(
            "message_creator",
            "/projects/:creator_param/:project_param/messages/new",
            decoders::message_creator,
        ),
        Route::new("pledge_root", "/projects/:creator_param/:project_param/pledge", decoders::pledge_root),
        Route::new(
            "pledge_big_print",
            "/projects/:creator_param/:project_param/pledge/big_print",
            decoders::pledge_big_print,
        ),
        Route::new(
            "pledge_destroy",
            "/projects/:creator_param/:project_param/pledge/destroy",
            decoders::pledge_destroy,
        ),
        Route::new(
            "pledge_edit",
            "/projects/:creator_param/:project_param/pledge/edit",
            decoders::pledge_edit,
        ),
        Route::new(
            "pledge_new",
            "/projects/:creator_param/:project_param/pledge/new",
            decoders::pledge_new,
        ),
        Route::new("updates", "/projects/:creator_param/:project_param/posts", decoders::updates),
        Route::new(
            "update",
            "/projects/:creator_param/:project_param/posts/:update_param",
            decoders::update_root,
        ),
        Route::new(
            "update_comments",
            "/projects/:creator_param/:project_param/posts/:update_param/comments",
            decoders::update_comments,
        ),
        Route::new(
            "survey",
            "/projects/:creator_param/:project_param/surveys/:survey_param",
            decoders::survey,
        ),
    ]
}
